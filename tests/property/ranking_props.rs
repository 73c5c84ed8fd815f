//! Ranking properties.
//!
//! - Output is a permutation of the input (same length, same ids)
//! - Output is sorted non-decreasing by rank
//! - Equal ranks keep load order
//! - Every rank equals the per-record score
//! - Ranking is idempotent and deterministic

use super::common::{criteria_strategy, ids, ranks, records_strategy};
use cuisinesearch::{rank, score_record};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_rank_preserves_records(
        records in records_strategy(24),
        criteria in criteria_strategy(),
    ) {
        let n = records.len();
        let ranked = rank(records, &criteria);
        prop_assert_eq!(ranked.len(), n);

        let mut seen = ids(&ranked);
        seen.sort_unstable();
        prop_assert_eq!(seen, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn prop_rank_sorted_with_stable_ties(
        records in records_strategy(24),
        criteria in criteria_strategy(),
    ) {
        let ranked = rank(records, &criteria);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].rank <= pair[1].rank);
            if pair[0].rank == pair[1].rank {
                prop_assert!(
                    pair[0].id < pair[1].id,
                    "tie at rank {} out of load order: {} before {}",
                    pair[0].rank, pair[0].id, pair[1].id
                );
            }
        }
    }

    #[test]
    fn prop_rank_matches_score(
        records in records_strategy(16),
        criteria in criteria_strategy(),
    ) {
        for record in rank(records, &criteria) {
            prop_assert_eq!(record.rank, score_record(&criteria, &record));
        }
    }

    #[test]
    fn prop_rank_deterministic(
        records in records_strategy(24),
        criteria in criteria_strategy(),
    ) {
        let first = rank(records.clone(), &criteria);
        let second = rank(records, &criteria);
        prop_assert_eq!(&first, &second);

        // Re-ranking an already ranked list changes nothing
        let again = rank(first.clone(), &criteria);
        prop_assert_eq!(ids(&again), ids(&first));
        prop_assert_eq!(ranks(&again), ranks(&first));
    }

    /// Absent text criteria always cost exactly one point each.
    #[test]
    fn prop_empty_text_criteria_floor(records in records_strategy(16)) {
        let criteria = cuisinesearch::SearchCriteria::default();
        for record in rank(records, &criteria) {
            prop_assert_eq!(record.rank, 2);
        }
    }
}
