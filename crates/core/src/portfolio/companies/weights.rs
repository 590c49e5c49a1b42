//! Portfolio weight arithmetic.
//!
//! Weights are percentages stored with two-decimal precision. The
//! portfolio invariant is that they sum to 100.00 within a 0.01
//! tolerance; `weight_status` reports violations and the operations
//! here are the only places that repair them.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::companies_model::{PortfolioCompany, WeightStatus};
use crate::constants::WEIGHT_DECIMAL_PRECISION;

/// Tolerance for the sum-to-100 check.
const BALANCE_TOLERANCE: Decimal = dec!(0.01);

const TARGET_TOTAL: Decimal = dec!(100);

/// Sum of all holding weights.
pub fn total_weight(companies: &[PortfolioCompany]) -> Decimal {
    companies.iter().map(|c| c.weight).sum()
}

/// Checks the sum-to-100 invariant without mutating anything.
pub fn weight_status(companies: &[PortfolioCompany]) -> WeightStatus {
    let total = total_weight(companies);
    let deviation = total - TARGET_TOTAL;
    WeightStatus {
        total,
        is_balanced: deviation.abs() <= BALANCE_TOLERANCE,
        deviation,
    }
}

/// Clamps a weight edit into [0, 100] and rounds it to storage precision.
pub fn clamp_weight(weight: Decimal) -> Decimal {
    weight.clamp(Decimal::ZERO, TARGET_TOTAL).round_dp_with_strategy(
        WEIGHT_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Rescales all weights so they sum to exactly 100.00.
///
/// Every weight is multiplied by `100 / total` and rounded to storage
/// precision; the rounding residue is folded into the largest holding
/// (first on ties) so the invariant holds exactly. A zero-total
/// portfolio is left untouched.
pub fn normalize(companies: &mut [PortfolioCompany]) {
    let total = total_weight(companies);
    if total.is_zero() {
        return;
    }

    for company in companies.iter_mut() {
        company.weight = (company.weight * TARGET_TOTAL / total).round_dp_with_strategy(
            WEIGHT_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );
    }

    let residue = TARGET_TOTAL - total_weight(companies);
    if !residue.is_zero() {
        let mut largest = 0;
        for (index, company) in companies.iter().enumerate() {
            if company.weight > companies[largest].weight {
                largest = index;
            }
        }
        companies[largest].weight += residue;
    }
}

/// Spreads 100% evenly across all holdings.
///
/// Whole-point division: with `n` holdings each gets `floor(100 / n)`
/// points, and the first `100 - n * floor(100 / n)` holdings by list
/// order get one extra point, so the total is exactly 100 for any n.
pub fn set_equal_weights(companies: &mut [PortfolioCompany]) {
    let n = companies.len() as u64;
    if n == 0 {
        return;
    }

    let base = 100 / n;
    let remainder = 100 - base * n;
    for (index, company) in companies.iter_mut().enumerate() {
        let points = if (index as u64) < remainder { base + 1 } else { base };
        company.weight = Decimal::from(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(id: &str, weight: Decimal) -> PortfolioCompany {
        PortfolioCompany {
            id: id.to_string(),
            name: id.to_uppercase(),
            weight,
            ..Default::default()
        }
    }

    #[test]
    fn test_equal_weights_exact_split() {
        let mut companies = vec![
            holding("a", dec!(10)),
            holding("b", dec!(20)),
            holding("c", dec!(30)),
            holding("d", dec!(0)),
        ];
        set_equal_weights(&mut companies);
        let weights: Vec<Decimal> = companies.iter().map(|c| c.weight).collect();
        assert_eq!(weights, vec![dec!(25), dec!(25), dec!(25), dec!(25)]);
    }

    #[test]
    fn test_equal_weights_remainder_goes_to_first_companies() {
        let mut companies = vec![
            holding("a", dec!(0)),
            holding("b", dec!(0)),
            holding("c", dec!(0)),
        ];
        set_equal_weights(&mut companies);
        let weights: Vec<Decimal> = companies.iter().map(|c| c.weight).collect();
        assert_eq!(weights, vec![dec!(34), dec!(33), dec!(33)]);
        assert_eq!(total_weight(&companies), dec!(100));
    }

    #[test]
    fn test_equal_weights_seven_companies() {
        let mut companies: Vec<PortfolioCompany> =
            (0..7).map(|i| holding(&format!("c{}", i), dec!(0))).collect();
        set_equal_weights(&mut companies);
        let weights: Vec<Decimal> = companies.iter().map(|c| c.weight).collect();
        assert_eq!(
            weights,
            vec![
                dec!(15),
                dec!(15),
                dec!(14),
                dec!(14),
                dec!(14),
                dec!(14),
                dec!(14)
            ]
        );
        assert_eq!(total_weight(&companies), dec!(100));
    }

    #[test]
    fn test_equal_weights_more_companies_than_points() {
        let mut companies: Vec<PortfolioCompany> =
            (0..150).map(|i| holding(&format!("c{}", i), dec!(0))).collect();
        set_equal_weights(&mut companies);
        assert_eq!(companies[0].weight, dec!(1));
        assert_eq!(companies[99].weight, dec!(1));
        assert_eq!(companies[100].weight, dec!(0));
        assert_eq!(total_weight(&companies), dec!(100));
    }

    #[test]
    fn test_equal_weights_empty_is_noop() {
        let mut companies: Vec<PortfolioCompany> = vec![];
        set_equal_weights(&mut companies);
        assert!(companies.is_empty());
    }

    #[test]
    fn test_normalize_rescales_to_100() {
        let mut companies = vec![holding("a", dec!(30)), holding("b", dec!(30))];
        normalize(&mut companies);
        assert_eq!(companies[0].weight, dec!(50));
        assert_eq!(companies[1].weight, dec!(50));
    }

    #[test]
    fn test_normalize_zero_total_is_noop() {
        let mut companies = vec![holding("a", dec!(0)), holding("b", dec!(0))];
        normalize(&mut companies);
        assert_eq!(companies[0].weight, dec!(0));
        assert_eq!(companies[1].weight, dec!(0));
    }

    #[test]
    fn test_normalize_folds_rounding_residue_into_largest() {
        let mut companies = vec![
            holding("a", dec!(1)),
            holding("b", dec!(1)),
            holding("c", dec!(1)),
        ];
        normalize(&mut companies);
        // 100/3 rounds to 33.33 each; the first equal-largest absorbs
        // the missing 0.01.
        assert_eq!(companies[0].weight, dec!(33.34));
        assert_eq!(companies[1].weight, dec!(33.33));
        assert_eq!(companies[2].weight, dec!(33.33));
        assert_eq!(total_weight(&companies), dec!(100));
    }

    #[test]
    fn test_normalize_uneven_weights_sum_exactly_100() {
        let mut companies = vec![
            holding("a", dec!(12.5)),
            holding("b", dec!(3.17)),
            holding("c", dec!(41.02)),
            holding("d", dec!(7.77)),
        ];
        normalize(&mut companies);
        assert_eq!(total_weight(&companies), dec!(100));
    }

    #[test]
    fn test_clamp_weight_bounds_and_precision() {
        assert_eq!(clamp_weight(dec!(-5)), dec!(0));
        assert_eq!(clamp_weight(dec!(150)), dec!(100));
        assert_eq!(clamp_weight(dec!(33.333)), dec!(33.33));
        assert_eq!(clamp_weight(dec!(0.005)), dec!(0.01));
    }

    #[test]
    fn test_weight_status_balanced_within_tolerance() {
        let companies = vec![holding("a", dec!(60)), holding("b", dec!(40.01))];
        let status = weight_status(&companies);
        assert!(status.is_balanced);
        assert_eq!(status.deviation, dec!(0.01));
    }

    #[test]
    fn test_weight_status_reports_violation() {
        let companies = vec![holding("a", dec!(60)), holding("b", dec!(39.5))];
        let status = weight_status(&companies);
        assert!(!status.is_balanced);
        assert_eq!(status.total, dec!(99.5));
        assert_eq!(status.deviation, dec!(-0.5));
    }
}
