//! In-memory registry of finalized programs and monthly payout simulation.
//!
//! The registry is ephemeral — it lives for one demo session, holds every
//! draft the editing surface emitted, and answers "where would this
//! month's yield go?" on demand. Nothing is cached: each simulation walks
//! the programs and recomputes every amount from the projected yield.

use serde::Serialize;
use tracing::info;

use sluice_core::allocation::preview_amount;
use sluice_core::types::{ProgramCategory, ProgramDraft};

use crate::session::DraftSink;

/// One wallet's cut of a program's monthly amount.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WalletPayout {
    /// Destination wallet (trimmed at finalize).
    pub address: String,
    /// Share of the program amount in percent.
    pub percent: f64,
    /// `program amount * percent / 100`.
    pub amount: f64,
}

/// One program's slice of the monthly payout.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProgramPayout {
    /// Finalized program id.
    pub program_id: String,
    pub name: String,
    pub category: ProgramCategory,
    /// Percent of projected yield routed to this program.
    pub allocation: f64,
    /// `projected_yield * allocation / 100`.
    pub amount: f64,
    /// Per-payee breakdown, in split order.
    pub wallets: Vec<WalletPayout>,
}

/// Full monthly payout picture across all registered programs.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PayoutSummary {
    /// The externally supplied monthly yield figure.
    pub projected_yield: f64,
    /// Per-program lines, in registration order.
    pub programs: Vec<ProgramPayout>,
    /// Sum of all program amounts.
    pub total_routed: f64,
}

/// Ordered, in-memory collection of finalized programs.
///
/// Implements [`DraftSink`], so an editing session can save straight into
/// it. No persistence: dropping the registry drops the programs.
#[derive(Default, Debug, Clone)]
pub struct ProgramRegistry {
    programs: Vec<ProgramDraft>,
}

impl ProgramRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered programs in registration order.
    pub fn programs(&self) -> &[ProgramDraft] {
        &self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Look up a program by id.
    pub fn get(&self, id: &str) -> Option<&ProgramDraft> {
        self.programs.iter().find(|p| p.id == id)
    }

    /// Simulate one month: route `projected_yield` through every program
    /// and break each program's amount down across its wallet splits.
    pub fn simulate(&self, projected_yield: f64) -> PayoutSummary {
        let programs: Vec<ProgramPayout> = self
            .programs
            .iter()
            .map(|program| {
                let amount = preview_amount(projected_yield, program.allocation);
                let wallets = program
                    .wallets
                    .iter()
                    .map(|split| WalletPayout {
                        address: split.address.clone(),
                        percent: split.percent,
                        amount: preview_amount(amount, split.percent),
                    })
                    .collect();
                ProgramPayout {
                    program_id: program.id.clone(),
                    name: program.name.clone(),
                    category: program.category,
                    allocation: program.allocation,
                    amount,
                    wallets,
                }
            })
            .collect();

        let total_routed = programs.iter().map(|p| p.amount).sum();
        PayoutSummary {
            projected_yield,
            programs,
            total_routed,
        }
    }
}

impl DraftSink for ProgramRegistry {
    fn save(&mut self, draft: ProgramDraft) {
        info!(id = %draft.id, name = %draft.name, allocation = draft.allocation,
            "program registered");
        self.programs.push(draft);
    }
}
