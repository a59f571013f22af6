//! # sluice-program — program creation and payout simulation.
//!
//! Models the "Add Program" editing surface without any rendering concerns:
//! an ordered wallet split set, transient form state with inline validity
//! reporting, a builder that emits immutable [`ProgramDraft`] snapshots,
//! an explicit `Editing → Finalized` session state machine, and an
//! in-memory registry that simulates monthly payouts.
//!
//! # Modules
//!
//! - [`splits`] — ordered, never-empty `SplitSet`
//! - [`form`] — transient `ProgramForm` editing state
//! - [`builder`] — `build_draft`, the validate-then-emit step
//! - [`session`] — `DraftSession` state machine and the `DraftSink` seam
//! - [`registry`] — `ProgramRegistry` and payout simulation
//!
//! [`ProgramDraft`]: sluice_core::ProgramDraft

pub mod builder;
pub mod form;
pub mod registry;
pub mod session;
pub mod splits;

// Re-exports for convenient access
pub use builder::build_draft;
pub use form::ProgramForm;
pub use registry::{PayoutSummary, ProgramPayout, ProgramRegistry, WalletPayout};
pub use session::{DraftSession, DraftSink, SinkFn};
pub use splits::SplitSet;
