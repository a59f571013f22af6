//! Ordered wallet split set with a non-empty invariant.
//!
//! A program must always retain at least one payee, so the set is seeded
//! with a single row at creation and [`SplitSet::remove`] refuses to delete
//! the last remaining row. Percent entry runs through the named sanitation
//! step [`sanitize_percent`], so the stored values are always finite and
//! the total is always meaningful for display and validation.

use tracing::debug;

use sluice_core::allocation::{sanitize_percent, split_total, splits_valid};
use sluice_core::constants::INITIAL_SPLIT_PERCENT;
use sluice_core::ident::IdProvider;
use sluice_core::types::WalletSplit;

/// Ordered sequence of wallet splits, never empty once initialized.
///
/// Rows keep their id for their whole lifetime; edits address rows by id so
/// reordering concerns never arise. Not thread-safe — owned and mutated by
/// a single editing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSet {
    rows: Vec<WalletSplit>,
}

impl SplitSet {
    /// Create a set seeded with one row: empty address, percent 100.
    pub fn new(ids: &dyn IdProvider) -> Self {
        Self {
            rows: vec![WalletSplit {
                id: ids.next_id(),
                address: String::new(),
                percent: INITIAL_SPLIT_PERCENT,
            }],
        }
    }

    /// Append a new row with an empty address and percent 0; returns it.
    pub fn add(&mut self, ids: &dyn IdProvider) -> &WalletSplit {
        let row = WalletSplit {
            id: ids.next_id(),
            address: String::new(),
            percent: 0.0,
        };
        debug!(id = %row.id, "wallet split row added");
        self.rows.push(row);
        let idx = self.rows.len() - 1;
        &self.rows[idx]
    }

    /// Store an address verbatim (trimming happens at finalize, not here).
    /// Returns false if no row has the given id.
    pub fn set_address(&mut self, id: &str, address: &str) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                row.address = address.to_string();
                true
            }
            None => false,
        }
    }

    /// Parse raw percent text and store the sanitized result.
    ///
    /// Unparseable and non-finite input is stored as exactly 0, so the
    /// field never holds an invalid numeric state visible to [`total`].
    /// Returns false if no row has the given id.
    ///
    /// [`total`]: Self::total
    pub fn set_percent_input(&mut self, id: &str, raw: &str) -> bool {
        let parsed = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.set_percent(id, parsed)
    }

    /// Store a percent value after sanitation (non-finite becomes 0).
    /// Returns false if no row has the given id.
    pub fn set_percent(&mut self, id: &str, percent: f64) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                row.percent = sanitize_percent(percent);
                true
            }
            None => false,
        }
    }

    /// Delete the row with the given id.
    ///
    /// A no-op (returning false) when the id is unknown or the row is the
    /// last one remaining — the set never becomes empty.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.rows.len() == 1 {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() < before;
        if removed {
            debug!(%id, "wallet split row removed");
        }
        removed
    }

    /// Sum of all percents.
    pub fn total(&self) -> f64 {
        split_total(&self.rows)
    }

    /// Whether the rows satisfy the split validity predicate.
    pub fn is_valid(&self) -> bool {
        splits_valid(&self.rows)
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[WalletSplit] {
        &self.rows
    }

    /// Number of rows (always at least 1).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows. Never true for a set built through
    /// [`new`](Self::new): it seeds one row and [`remove`](Self::remove)
    /// refuses to delete the last one.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by id.
    pub fn get(&self, id: &str) -> Option<&WalletSplit> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn row_mut(&mut self, id: &str) -> Option<&mut WalletSplit> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}
