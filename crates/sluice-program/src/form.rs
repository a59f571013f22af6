//! Transient editing state for one in-progress program.
//!
//! The form mirrors what the user has typed: the name and description are
//! kept verbatim, the allocation is kept as raw text and parsed on demand,
//! and the wallet splits live in a [`SplitSet`]. Validity predicates are
//! pure and recomputed on every call; they drive inline error display and
//! are the precondition the draft builder checks before emitting anything.

use sluice_core::allocation::{allocation_valid, preview_amount};
use sluice_core::constants::{SPLIT_TOLERANCE, SPLIT_TOTAL_PERCENT};
use sluice_core::error::FieldViolation;
use sluice_core::ident::IdProvider;
use sluice_core::types::ProgramCategory;

use crate::splits::SplitSet;

/// In-progress program form. Partially valid states are normal here and
/// never escape: only [`build_draft`](crate::builder::build_draft) turns a
/// form into a finalized entity, and only when every predicate holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramForm {
    name: String,
    description: String,
    category: ProgramCategory,
    allocation_input: String,
    splits: SplitSet,
}

impl ProgramForm {
    /// Fresh form: empty fields, default category, one seeded split row.
    pub fn new(ids: &dyn IdProvider) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: ProgramCategory::default(),
            allocation_input: String::new(),
            splits: SplitSet::new(ids),
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_category(&mut self, category: ProgramCategory) {
        self.category = category;
    }

    /// Store the allocation field's raw text; parsed on demand by
    /// [`allocation`](Self::allocation).
    pub fn set_allocation_input(&mut self, raw: &str) {
        self.allocation_input = raw.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ProgramCategory {
        self.category
    }

    pub fn allocation_input(&self) -> &str {
        &self.allocation_input
    }

    /// Allocation percent parsed from the raw text; unparseable input
    /// reads as 0. Non-finite values pass through and simply fail
    /// [`allocation_is_valid`](Self::allocation_is_valid).
    pub fn allocation(&self) -> f64 {
        self.allocation_input.trim().parse::<f64>().unwrap_or(0.0)
    }

    pub fn splits(&self) -> &SplitSet {
        &self.splits
    }

    pub fn splits_mut(&mut self) -> &mut SplitSet {
        &mut self.splits
    }

    /// Projected amount this program would receive each month.
    pub fn preview(&self, projected_yield: f64) -> f64 {
        preview_amount(projected_yield, self.allocation())
    }

    /// `0 < allocation <= 100`.
    pub fn allocation_is_valid(&self) -> bool {
        allocation_valid(self.allocation())
    }

    /// Split total within tolerance, all addresses present, all percents
    /// positive.
    pub fn splits_are_valid(&self) -> bool {
        self.splits.is_valid()
    }

    /// The full `form_valid` predicate gating submission.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.allocation_is_valid() && self.splits_are_valid()
    }

    /// Every unmet condition, in field order: name, allocation, split
    /// total, then per-row address and percent problems. Empty iff
    /// [`is_valid`](Self::is_valid).
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut out = Vec::new();

        if self.name.trim().is_empty() {
            out.push(FieldViolation::EmptyName);
        }

        if !self.allocation_is_valid() {
            out.push(FieldViolation::AllocationOutOfRange(self.allocation()));
        }

        let total = self.splits.total();
        if (total - SPLIT_TOTAL_PERCENT).abs() >= SPLIT_TOLERANCE {
            out.push(FieldViolation::SplitTotalMismatch { total });
        }
        for (index, row) in self.splits.rows().iter().enumerate() {
            if row.address.trim().is_empty() {
                out.push(FieldViolation::EmptyAddress { index });
            }
            if row.percent <= 0.0 {
                out.push(FieldViolation::ZeroPercent { index });
            }
        }

        out
    }
}
