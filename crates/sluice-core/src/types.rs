//! Core data model: program categories, wallet splits, finalized drafts.
//!
//! Percent fields are plain percentages (`100.0` = 100%). Monetary amounts
//! derived from them are in the same unit as the projected yield they were
//! computed from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCategory;

/// Funding category for a program. Closed set; serialized as the
/// human-readable label.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ProgramCategory {
    /// Conferences, meetups, hackathons.
    #[default]
    #[serde(rename = "Events")]
    Events,
    /// Open-source infrastructure and public goods grants.
    #[serde(rename = "Public Goods")]
    PublicGoods,
    /// Grassroots and community-led initiatives.
    #[serde(rename = "Community Initiatives")]
    CommunityInitiatives,
    /// Research and development across the ecosystem.
    #[serde(rename = "Ecosystem R&D")]
    EcosystemRnD,
}

impl ProgramCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [
        Self::Events,
        Self::PublicGoods,
        Self::CommunityInitiatives,
        Self::EcosystemRnD,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::PublicGoods => "Public Goods",
            Self::CommunityInitiatives => "Community Initiatives",
            Self::EcosystemRnD => "Ecosystem R&D",
        }
    }
}

impl fmt::Display for ProgramCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProgramCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One payee's share of a program's allocation.
///
/// The id is assigned once at row creation and stays stable for the row's
/// lifetime. The address is stored verbatim while editing and trimmed only
/// when a draft is finalized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WalletSplit {
    /// Opaque unique row token.
    pub id: String,
    /// Free-text destination wallet identifier. Not validated against any
    /// chain-specific address format.
    pub address: String,
    /// Share of the program's allocation in percent, (0, 100] when valid.
    pub percent: f64,
}

/// A finalized, validated funding program.
///
/// Only the draft builder constructs this type, and only from form state
/// that satisfies every validity predicate: trimmed non-empty name,
/// allocation in (0, 100], and a non-empty split sequence whose percents
/// sum to 100 within tolerance with non-empty trimmed addresses. A draft
/// is an immutable snapshot; later edits in the originating form produce a
/// new draft rather than mutating an emitted one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProgramDraft {
    /// Opaque unique token, assigned at finalize time.
    pub id: String,
    /// Program name, trimmed and non-empty.
    pub name: String,
    /// Optional description, trimmed (may be empty).
    pub description: String,
    /// Funding category.
    pub category: ProgramCategory,
    /// Percent of the vault's projected monthly yield routed to this program.
    pub allocation: f64,
    /// Payee splits; percents sum to 100 within tolerance. Owned exclusively
    /// by this draft.
    pub wallets: Vec<WalletSplit>,
}
