//! Preview arithmetic and validity predicates for program allocations.
//!
//! Everything here is pure and recomputed eagerly on each edit; nothing is
//! cached between calls. [`preview_amount`] performs no sanitation — the
//! editing surface keeps non-finite numbers out of its inputs by running
//! percent input through [`sanitize_percent`] at the point of entry.

use crate::constants::{MAX_ALLOCATION_PERCENT, SPLIT_TOLERANCE, SPLIT_TOTAL_PERCENT};
use crate::types::WalletSplit;

/// Yield routed to a program: `projected_yield * allocation_percent / 100`.
pub fn preview_amount(projected_yield: f64, allocation_percent: f64) -> f64 {
    projected_yield * (allocation_percent / 100.0)
}

/// Whether an allocation percent is within the permitted (0, 100] range.
/// The lower bound is exclusive, the upper inclusive.
pub fn allocation_valid(allocation: f64) -> bool {
    allocation > 0.0 && allocation <= MAX_ALLOCATION_PERCENT
}

/// Sum of all split percents. Used for display and for [`splits_valid`].
pub fn split_total(splits: &[WalletSplit]) -> f64 {
    splits.iter().map(|s| s.percent).sum()
}

/// Whether a split sequence is internally consistent:
///
/// - the total is within [`SPLIT_TOLERANCE`] of [`SPLIT_TOTAL_PERCENT`]
///   (strict inequality, so a total of exactly `100 ± 0.01` fails)
/// - every address is non-empty after trimming
/// - every percent is strictly positive
///
/// An empty sequence is never valid (its total is 0).
pub fn splits_valid(splits: &[WalletSplit]) -> bool {
    (split_total(splits) - SPLIT_TOTAL_PERCENT).abs() < SPLIT_TOLERANCE
        && splits
            .iter()
            .all(|s| !s.address.trim().is_empty() && s.percent > 0.0)
}

/// Named sanitation step for percent entry: non-finite values collapse to
/// exactly 0, finite values pass through unchanged. A NaN or infinite
/// input therefore degrades into a visible split-total mismatch instead of
/// propagating downstream.
pub fn sanitize_percent(percent: f64) -> f64 {
    if percent.is_finite() { percent } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn split(address: &str, percent: f64) -> WalletSplit {
        WalletSplit {
            id: format!("w-{address}-{percent}"),
            address: address.to_string(),
            percent,
        }
    }

    // ==========================================
    // preview_amount
    // ==========================================

    #[test]
    fn preview_basic_scenario() {
        // $50,000 projected yield at 20% allocation
        assert_eq!(preview_amount(50_000.0, 20.0), 10_000.0);
    }

    #[test]
    fn preview_full_allocation() {
        assert_eq!(preview_amount(48_900.0, 100.0), 48_900.0);
    }

    #[test]
    fn preview_zero_cases() {
        assert_eq!(preview_amount(0.0, 35.0), 0.0);
        assert_eq!(preview_amount(50_000.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn preview_matches_definition(y in -1e12f64..1e12, a in -1000.0f64..1000.0) {
            // Same evaluation order as the implementation; (y * a) / 100.0
            // can differ by an ulp.
            prop_assert_eq!(preview_amount(y, a), y * (a / 100.0));
        }

        #[test]
        fn preview_zero_yield_is_zero(a in -1000.0f64..1000.0) {
            prop_assert_eq!(preview_amount(0.0, a), 0.0);
        }
    }

    // ==========================================
    // allocation_valid
    // ==========================================

    #[test]
    fn allocation_boundaries() {
        assert!(!allocation_valid(0.0)); // lower bound excluded
        assert!(allocation_valid(0.5));
        assert!(allocation_valid(100.0)); // upper bound included
        assert!(!allocation_valid(100.01));
        assert!(!allocation_valid(-5.0));
    }

    #[test]
    fn allocation_rejects_non_finite() {
        assert!(!allocation_valid(f64::NAN));
        assert!(!allocation_valid(f64::INFINITY));
    }

    // ==========================================
    // split_total / splits_valid
    // ==========================================

    #[test]
    fn total_sums_in_order() {
        let splits = [split("0xaa", 60.0), split("0xbb", 25.0), split("0xcc", 15.0)];
        assert_eq!(split_total(&splits), 100.0);
    }

    #[test]
    fn valid_single_wallet_at_hundred() {
        assert!(splits_valid(&[split("0xaa", 100.0)]));
    }

    #[test]
    fn total_within_tolerance_is_valid() {
        // 60 + 40.0099 = 100.0099, |diff| = 0.0099 < 0.01
        assert!(splits_valid(&[split("0xaa", 60.0), split("0xbb", 40.0099)]));
    }

    #[test]
    fn total_outside_tolerance_is_invalid() {
        // 60 + 39 = 99
        assert!(!splits_valid(&[split("0xaa", 60.0), split("0xbb", 39.0)]));
    }

    #[test]
    fn tolerance_boundary_is_exclusive() {
        // 100.01 as f64 sits at least 0.01 above 100, so the strict
        // comparison rejects it.
        assert!(!splits_valid(&[split("0xaa", 100.01)]));
        assert!(!splits_valid(&[split("0xaa", 60.0), split("0xbb", 40.02)]));
        assert!(!splits_valid(&[split("0xaa", 99.98)]));
    }

    #[test]
    fn empty_address_invalidates_despite_correct_total() {
        assert!(!splits_valid(&[split("", 100.0)]));
        assert!(!splits_valid(&[split("   ", 100.0)]));
    }

    #[test]
    fn zero_percent_row_invalidates() {
        // Total still 100, but one payee would receive nothing.
        assert!(!splits_valid(&[split("0xaa", 100.0), split("0xbb", 0.0)]));
    }

    #[test]
    fn empty_sequence_is_invalid() {
        assert!(!splits_valid(&[]));
    }

    proptest! {
        #[test]
        fn splits_valid_matches_predicate(
            percents in proptest::collection::vec(0.0f64..200.0, 1..6)
        ) {
            let splits: Vec<WalletSplit> = percents
                .iter()
                .enumerate()
                .map(|(i, &p)| split(&format!("0x{i:02x}"), p))
                .collect();
            let expected = (split_total(&splits) - 100.0).abs() < 0.01
                && splits.iter().all(|s| s.percent > 0.0);
            prop_assert_eq!(splits_valid(&splits), expected);
        }
    }

    // ==========================================
    // sanitize_percent
    // ==========================================

    #[test]
    fn sanitize_collapses_non_finite_to_zero() {
        assert_eq!(sanitize_percent(f64::NAN), 0.0);
        assert_eq!(sanitize_percent(f64::INFINITY), 0.0);
        assert_eq!(sanitize_percent(f64::NEG_INFINITY), 0.0);
    }

    proptest! {
        #[test]
        fn sanitize_is_identity_on_finite(p in -1e15f64..1e15) {
            prop_assert_eq!(sanitize_percent(p), p);
        }
    }
}
