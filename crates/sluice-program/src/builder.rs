//! The validate-then-emit step that turns form state into a finalized
//! [`ProgramDraft`].
//!
//! The precondition mirrors the form's `form_valid` predicate exactly: an
//! invalid form yields a [`ValidationFailure`] carrying every unmet
//! condition and no draft is produced. On success the draft receives a
//! fresh id from the injected provider, the name, description, and every
//! wallet address are trimmed, and the result is an immutable snapshot —
//! later form edits produce a new draft, never a mutation of this one.

use tracing::debug;

use sluice_core::error::ValidationFailure;
use sluice_core::ident::IdProvider;
use sluice_core::types::{ProgramDraft, WalletSplit};

use crate::form::ProgramForm;

/// Build a finalized draft from the current form state.
///
/// Failures are deterministic for a given form state; they are corrected
/// by the user, never retried by the system.
pub fn build_draft(
    form: &ProgramForm,
    ids: &dyn IdProvider,
) -> Result<ProgramDraft, ValidationFailure> {
    let violations = form.violations();
    if !violations.is_empty() {
        return Err(ValidationFailure { violations });
    }

    let wallets: Vec<WalletSplit> = form
        .splits()
        .rows()
        .iter()
        .map(|row| WalletSplit {
            id: row.id.clone(),
            address: row.address.trim().to_string(),
            percent: row.percent,
        })
        .collect();

    let draft = ProgramDraft {
        id: ids.next_id(),
        name: form.name().trim().to_string(),
        description: form.description().trim().to_string(),
        category: form.category(),
        allocation: form.allocation(),
        wallets,
    };
    debug!(id = %draft.id, name = %draft.name, "program draft finalized");
    Ok(draft)
}
