//! Editing session state machine: `Editing → Finalized`, one draft at a
//! time.
//!
//! Each in-progress draft lives in exactly one of two states. `Editing` is
//! the only state with mutable form access; an invalid submit stays in
//! `Editing` with the failure returned for inline display. A valid submit
//! finalizes the draft, hands it to the [`DraftSink`] exactly once, and —
//! because `Finalized` is terminal for that draft instance — immediately
//! re-seeds a fresh `Editing` form for the next draft. The emitted draft
//! exists only as the returned value; no handle back into the session can
//! reach it.

use tracing::{debug, info};

use sluice_core::error::ValidationFailure;
use sluice_core::ident::IdProvider;
use sluice_core::types::ProgramDraft;

use crate::builder::build_draft;
use crate::form::ProgramForm;

/// The `onSave` collaborator: receives each finalized draft exactly once,
/// synchronously, before the editing surface resets. The sink owns any
/// downstream routing; the session performs no cleanup beyond discarding
/// its local state.
pub trait DraftSink {
    fn save(&mut self, draft: ProgramDraft);
}

/// Adapter so a plain closure can serve as a sink.
pub struct SinkFn<F>(pub F);

impl<F: FnMut(ProgramDraft)> DraftSink for SinkFn<F> {
    fn save(&mut self, draft: ProgramDraft) {
        (self.0)(draft)
    }
}

/// One editing surface: owns the in-progress form and the id capability.
///
/// Single-threaded by design — all operations run to completion within one
/// user interaction, and no concurrent writers exist.
pub struct DraftSession<P: IdProvider> {
    ids: P,
    form: ProgramForm,
    finalized: u64,
}

impl<P: IdProvider> DraftSession<P> {
    /// Open a session with a fresh `Editing` form.
    pub fn new(ids: P) -> Self {
        let form = ProgramForm::new(&ids);
        Self {
            ids,
            form,
            finalized: 0,
        }
    }

    /// The in-progress form.
    pub fn form(&self) -> &ProgramForm {
        &self.form
    }

    /// Mutable access to the in-progress form (always `Editing`).
    pub fn form_mut(&mut self) -> &mut ProgramForm {
        &mut self.form
    }

    /// The id provider, for callers that add split rows directly.
    pub fn ids(&self) -> &P {
        &self.ids
    }

    /// Number of drafts this session has finalized.
    pub fn finalized_count(&self) -> u64 {
        self.finalized
    }

    /// Append a split row to the in-progress form.
    pub fn add_split(&mut self) -> String {
        self.form.splits_mut().add(&self.ids).id.clone()
    }

    /// Submit the current form.
    ///
    /// Invalid: the session stays in `Editing`, nothing is emitted, and the
    /// failure lists every unmet condition. Valid: the draft transitions to
    /// `Finalized`, is handed to the sink exactly once, the surface resets
    /// to a fresh `Editing` form, and the draft is returned.
    pub fn submit(
        &mut self,
        sink: &mut dyn DraftSink,
    ) -> Result<ProgramDraft, ValidationFailure> {
        let draft = match build_draft(&self.form, &self.ids) {
            Ok(draft) => draft,
            Err(failure) => {
                debug!(
                    violations = failure.violations.len(),
                    "submit refused, form stays open"
                );
                return Err(failure);
            }
        };

        sink.save(draft.clone());
        self.finalized += 1;
        self.form = ProgramForm::new(&self.ids);
        info!(id = %draft.id, name = %draft.name, "program saved, editing surface reset");
        Ok(draft)
    }

    /// The `onClose` path: discard the in-progress form and start over.
    /// Local state only; nothing is emitted.
    pub fn cancel(&mut self) {
        debug!("editing surface cancelled");
        self.form = ProgramForm::new(&self.ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::error::FieldViolation;
    use sluice_core::ident::SequenceIdProvider;
    use sluice_core::types::ProgramCategory;

    /// Sink that records every save call.
    #[derive(Default)]
    struct RecordingSink {
        saved: Vec<ProgramDraft>,
    }

    impl DraftSink for RecordingSink {
        fn save(&mut self, draft: ProgramDraft) {
            self.saved.push(draft);
        }
    }

    fn fill_valid(session: &mut DraftSession<SequenceIdProvider>) {
        let form = session.form_mut();
        form.set_name("Grants");
        form.set_category(ProgramCategory::PublicGoods);
        form.set_allocation_input("20");
        let first = form.splits().rows()[0].id.clone();
        form.splits_mut().set_address(&first, "0xaa");
    }

    #[test]
    fn invalid_submit_never_reaches_sink() {
        let mut session = DraftSession::new(SequenceIdProvider::new());
        let mut sink = RecordingSink::default();

        let failure = session.submit(&mut sink).unwrap_err();
        assert!(failure.contains(&FieldViolation::EmptyName));
        assert!(sink.saved.is_empty());
        assert_eq!(session.finalized_count(), 0);
    }

    #[test]
    fn invalid_submit_keeps_form_state() {
        let mut session = DraftSession::new(SequenceIdProvider::new());
        session.form_mut().set_name("Grants");
        // Allocation still missing → invalid.
        let mut sink = RecordingSink::default();
        session.submit(&mut sink).unwrap_err();
        assert_eq!(session.form().name(), "Grants");
    }

    #[test]
    fn valid_submit_saves_exactly_once_and_resets() {
        let mut session = DraftSession::new(SequenceIdProvider::new());
        fill_valid(&mut session);
        let mut sink = RecordingSink::default();

        let draft = session.submit(&mut sink).unwrap();
        assert_eq!(sink.saved.len(), 1);
        assert_eq!(sink.saved[0], draft);
        assert_eq!(session.finalized_count(), 1);

        // Surface reset: fresh empty form, seeded split row.
        assert_eq!(session.form().name(), "");
        assert_eq!(session.form().splits().len(), 1);
        assert_eq!(session.form().splits().total(), 100.0);
    }

    #[test]
    fn sequential_drafts_get_distinct_ids() {
        let mut session = DraftSession::new(SequenceIdProvider::new());
        let mut sink = RecordingSink::default();

        fill_valid(&mut session);
        let first = session.submit(&mut sink).unwrap();
        fill_valid(&mut session);
        let second = session.submit(&mut sink).unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(first.wallets[0].id, second.wallets[0].id);
        assert_eq!(session.finalized_count(), 2);
    }

    #[test]
    fn closure_sink_works() {
        let mut session = DraftSession::new(SequenceIdProvider::new());
        fill_valid(&mut session);

        let mut names = Vec::new();
        let mut sink = SinkFn(|draft: ProgramDraft| names.push(draft.name));
        session.submit(&mut sink).unwrap();
        assert_eq!(names, vec!["Grants".to_string()]);
    }

    #[test]
    fn cancel_discards_edits_only() {
        let mut session = DraftSession::new(SequenceIdProvider::new());
        fill_valid(&mut session);
        session.cancel();
        assert_eq!(session.form().name(), "");
        assert_eq!(session.finalized_count(), 0);
    }

    #[test]
    fn add_split_goes_through_session_ids() {
        let mut session = DraftSession::new(SequenceIdProvider::new());
        let id = session.add_split();
        assert_eq!(id, "id-1"); // id-0 went to the seeded row
        assert_eq!(session.form().splits().len(), 2);
    }
}
