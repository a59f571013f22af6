//! # sluice-core
//! Foundation types and pure logic for Sluice program allocation.
//!
//! # Modules
//!
//! - [`allocation`] — preview arithmetic, validity predicates, percent sanitation
//! - [`constants`] — split total, tolerance, allocation bounds
//! - [`error`] — `FieldViolation` and `ValidationFailure`
//! - [`ident`] — injectable identifier provider
//! - [`types`] — `ProgramCategory`, `WalletSplit`, `ProgramDraft`

pub mod allocation;
pub mod constants;
pub mod error;
pub mod ident;
pub mod types;

// Re-exports for convenient access
pub use allocation::{allocation_valid, preview_amount, sanitize_percent, split_total, splits_valid};
pub use error::{FieldViolation, UnknownCategory, ValidationFailure};
pub use ident::{EntropyIdProvider, IdProvider, SequenceIdProvider};
pub use types::{ProgramCategory, ProgramDraft, WalletSplit};
