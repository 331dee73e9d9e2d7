//! Demand-driven dynamic pricing.
//!
//! Turns a forecast of daily demand into one price recommendation per day
//! plus an overall strategy summary. Each day is compared against the
//! average demand of the whole horizon:
//! - ratio above 1.2 → raise the price by `elasticity`
//! - ratio below 0.8 → lower the price by `elasticity`
//! - anything else (including exactly 1.2 and 0.8) → keep the base price
//!
//! The revenue estimate holds demand fixed: a price change does not feed
//! back into the forecasted quantities.

use crate::domain::error::DomainError;
use crate::domain::values::adjustment::PriceAdjustment;
use crate::domain::values::precision::{round1, round2};
use serde::{Deserialize, Serialize};

/// Default elasticity (±10% maximum price movement).
pub const DEFAULT_ELASTICITY: f64 = 0.1;

/// Recommendation for a single forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecommendation {
    /// 1-based day index, day 1 is the soonest.
    pub day: usize,
    pub forecasted_demand: f64,
    pub base_price: f64,
    pub recommended_price: f64,
    /// Change from base price in percent, one decimal.
    pub price_change_percent: f64,
    pub adjustment: PriceAdjustment,
    pub reason: String,
}

/// Aggregate view over the whole horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStrategy {
    pub average_demand: f64,
    pub peak_demand: f64,
    pub low_demand: f64,
    pub base_price: f64,
    pub recommended_avg_price: f64,
    /// Revenue under the recommended prices vs. a flat base price, both
    /// weighted by the same forecasted demand, in percent.
    pub potential_revenue_increase_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub daily_recommendations: Vec<DailyRecommendation>,
    pub overall_strategy: OverallStrategy,
}

/// Compute per-day price recommendations from a demand forecast.
///
/// # Arguments
/// * `forecast` — predicted units per future day, in calendar order
/// * `base_price` — current list price, must be finite and non-zero
/// * `elasticity` — maximum fractional price deviation, informally (0, 1];
///   any finite value is accepted
///
/// # Errors
/// `DomainError::InvalidInput` for an empty forecast, a non-finite forecast
/// value, a zero or non-finite base price, or a non-finite elasticity.
/// Nothing is computed when validation fails. Inputs whose recommended
/// prices or revenue totals leave the `f64` range are rejected the same way.
pub fn compute_pricing(
    forecast: &[f64],
    base_price: f64,
    elasticity: f64,
) -> Result<PricingPlan, DomainError> {
    validate(forecast, base_price, elasticity)?;

    let average_demand = mean(forecast);
    let peak_demand = forecast.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let low_demand = forecast.iter().copied().fold(f64::INFINITY, f64::min);

    let daily_recommendations = forecast
        .iter()
        .enumerate()
        .map(|(i, &demand)| {
            let demand_ratio = if average_demand > 0.0 {
                demand / average_demand
            } else {
                1.0
            };
            let adjustment = PriceAdjustment::classify(demand_ratio);
            let new_price = adjustment.apply(base_price, elasticity);
            let price_change_percent = (new_price - base_price) / base_price * 100.0;
            if !new_price.is_finite() || !price_change_percent.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "recommended price for day {} overflows (base price {base_price}, elasticity {elasticity})",
                    i + 1
                )));
            }

            Ok(DailyRecommendation {
                day: i + 1,
                forecasted_demand: round2(demand),
                base_price: round2(base_price),
                recommended_price: round2(new_price),
                price_change_percent: round1(price_change_percent),
                adjustment,
                reason: adjustment.reason().to_string(),
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let recommended_prices: Vec<f64> = daily_recommendations
        .iter()
        .map(|r| r.recommended_price)
        .collect();
    let recommended_avg_price = mean(&recommended_prices);

    let (policy_revenue, baseline_revenue) =
        revenue_totals(&recommended_prices, forecast, base_price);

    // No demand means no revenue either way.
    let potential_revenue_increase_percent = if baseline_revenue == 0.0 {
        0.0
    } else {
        policy_revenue / baseline_revenue * 100.0 - 100.0
    };
    if !potential_revenue_increase_percent.is_finite() {
        return Err(DomainError::InvalidInput(
            "revenue estimate is out of range for these inputs".to_string(),
        ));
    }

    Ok(PricingPlan {
        daily_recommendations,
        overall_strategy: OverallStrategy {
            average_demand: round2(average_demand),
            peak_demand: round2(peak_demand),
            low_demand: round2(low_demand),
            base_price: round2(base_price),
            recommended_avg_price: round2(recommended_avg_price),
            potential_revenue_increase_percent: round1(potential_revenue_increase_percent),
        },
    })
}

/// Arithmetic mean of finite values. Falls back to summing `v / n` when
/// the plain sum leaves the `f64` range.
fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

/// Revenue under the recommended prices and under the flat base price,
/// both weighted by forecasted demand. Only the ratio of the two is used,
/// so when either total overflows both are recomputed with demand scaled
/// by its largest magnitude.
fn revenue_totals(prices: &[f64], demand: &[f64], base_price: f64) -> (f64, f64) {
    let totals = |scale: f64| {
        let policy: f64 = prices
            .iter()
            .zip(demand)
            .map(|(p, d)| p * (d / scale))
            .sum();
        let baseline: f64 = demand.iter().map(|d| base_price * (d / scale)).sum();
        (policy, baseline)
    };

    let (policy, baseline) = totals(1.0);
    if policy.is_finite() && baseline.is_finite() {
        return (policy, baseline);
    }
    let largest = demand.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
    totals(largest)
}

fn validate(forecast: &[f64], base_price: f64, elasticity: f64) -> Result<(), DomainError> {
    if forecast.is_empty() {
        return Err(DomainError::InvalidInput(
            "forecast series is empty".to_string(),
        ));
    }
    if let Some(i) = forecast.iter().position(|v| !v.is_finite()) {
        return Err(DomainError::InvalidInput(format!(
            "forecast value for day {} is not a finite number",
            i + 1
        )));
    }
    if !base_price.is_finite() {
        return Err(DomainError::InvalidInput(format!(
            "base price must be a finite number, got {base_price}"
        )));
    }
    if base_price == 0.0 {
        return Err(DomainError::InvalidInput(
            "base price must not be zero".to_string(),
        ));
    }
    if !elasticity.is_finite() {
        return Err(DomainError::InvalidInput(format!(
            "elasticity must be a finite number, got {elasticity}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_week() -> Vec<f64> {
        vec![100.0, 100.0, 100.0, 150.0, 50.0, 100.0, 100.0]
    }

    #[test]
    fn test_worked_example() {
        let plan = compute_pricing(&sample_week(), 60.0, 0.1).unwrap();
        let days = &plan.daily_recommendations;

        assert_eq!(days.len(), 7);
        assert_eq!(days[3].adjustment, PriceAdjustment::Increase);
        assert_eq!(days[3].recommended_price, 66.0);
        assert_eq!(days[3].price_change_percent, 10.0);
        assert_eq!(days[4].adjustment, PriceAdjustment::Decrease);
        assert_eq!(days[4].recommended_price, 54.0);
        assert_eq!(days[4].price_change_percent, -10.0);

        for i in [0, 1, 2, 5, 6] {
            assert_eq!(days[i].adjustment, PriceAdjustment::Maintain);
            assert_eq!(days[i].recommended_price, 60.0);
            assert_eq!(days[i].price_change_percent, 0.0);
        }

        let s = &plan.overall_strategy;
        assert_eq!(s.average_demand, 100.0);
        assert_eq!(s.peak_demand, 150.0);
        assert_eq!(s.low_demand, 50.0);
        assert_eq!(s.base_price, 60.0);
        assert_eq!(s.recommended_avg_price, 60.0);
        // (5*100*60 + 150*66 + 50*54) / (700*60) = 42600 / 42000
        assert_eq!(s.potential_revenue_increase_percent, 1.4);
    }

    #[test]
    fn test_days_are_one_based_and_ordered() {
        let plan = compute_pricing(&[3.0, 1.0, 4.0, 1.0, 5.0], 10.0, 0.2).unwrap();
        let days: Vec<usize> = plan.daily_recommendations.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_boundary_ratios_maintain() {
        // average 100: 120 → 1.2, 80 → 0.8
        let plan = compute_pricing(&[120.0, 80.0, 100.0], 50.0, 0.1).unwrap();
        assert!(plan
            .daily_recommendations
            .iter()
            .all(|r| r.adjustment == PriceAdjustment::Maintain));
    }

    #[test]
    fn test_constant_series_maintains_everything() {
        let plan = compute_pricing(&[42.0; 10], 35.0, 0.15).unwrap();
        assert!(plan
            .daily_recommendations
            .iter()
            .all(|r| r.adjustment == PriceAdjustment::Maintain && r.reason == "Normal demand - maintain current price"));
        assert_eq!(plan.overall_strategy.recommended_avg_price, 35.0);
        assert_eq!(plan.overall_strategy.potential_revenue_increase_percent, 0.0);
    }

    #[test]
    fn test_zero_average_is_treated_as_normal() {
        let plan = compute_pricing(&[0.0, 0.0, 0.0], 20.0, 0.1).unwrap();
        assert!(plan
            .daily_recommendations
            .iter()
            .all(|r| r.adjustment == PriceAdjustment::Maintain));
        assert_eq!(plan.overall_strategy.potential_revenue_increase_percent, 0.0);
    }

    #[test]
    fn test_prices_rounded_to_cents() {
        // 9.99 * 1.1 = 10.989, 9.99 * 0.9 = 8.991
        let plan = compute_pricing(&[10.0, 100.0, 10.0, 100.0], 9.99, 0.1).unwrap();
        let up = &plan.daily_recommendations[1];
        let down = &plan.daily_recommendations[0];
        assert_eq!(up.adjustment, PriceAdjustment::Increase);
        assert!((up.recommended_price - 10.99).abs() < 1e-9);
        assert_eq!(down.adjustment, PriceAdjustment::Decrease);
        assert!((down.recommended_price - 8.99).abs() < 1e-9);
        assert_eq!(up.price_change_percent, 10.0);
        assert_eq!(down.price_change_percent, -10.0);
    }

    #[test]
    fn test_large_elasticity_is_accepted() {
        let plan = compute_pricing(&[10.0, 100.0], 10.0, 1.5).unwrap();
        assert!((plan.daily_recommendations[0].recommended_price - -5.0).abs() < 1e-9);
        assert!((plan.daily_recommendations[1].recommended_price - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            compute_pricing(&[], 60.0, 0.1),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_pricing(&[1.0], 0.0, 0.1),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_pricing(&[1.0], f64::NAN, 0.1),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_pricing(&[1.0], f64::INFINITY, 0.1),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_pricing(&[1.0], 60.0, f64::NAN),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_forecast_names_the_day() {
        let err = compute_pricing(&[1.0, 2.0, f64::NAN], 60.0, 0.1).unwrap_err();
        assert!(err.to_string().contains("day 3"));
    }

    #[test]
    fn test_serialized_field_names() {
        let plan = compute_pricing(&sample_week(), 60.0, 0.1).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        let day = &json["dailyRecommendations"][3];
        assert_eq!(day["adjustment"], "INCREASE");
        assert_eq!(day["priceChangePercent"], 10.0);
        assert_eq!(json["overallStrategy"]["potentialRevenueIncreasePercent"], 1.4);
        assert_eq!(json["overallStrategy"]["recommendedAvgPrice"], 60.0);
    }

    #[test]
    fn test_huge_constant_series_maintains_everything() {
        // 1e308 + 1e308 overflows a plain sum
        let plan = compute_pricing(&[1e308, 1e308], 60.0, 0.1).unwrap();
        assert!(plan
            .daily_recommendations
            .iter()
            .all(|r| r.adjustment == PriceAdjustment::Maintain && r.recommended_price == 60.0));

        let s = &plan.overall_strategy;
        assert_eq!(s.average_demand, 1e308);
        assert_eq!(s.peak_demand, 1e308);
        assert_eq!(s.potential_revenue_increase_percent, 0.0);

        let json = serde_json::to_value(&plan).unwrap();
        assert!(json["overallStrategy"]["averageDemand"].is_f64());
        assert!(json["overallStrategy"]["potentialRevenueIncreasePercent"].is_f64());
    }

    #[test]
    fn test_huge_series_still_classified() {
        // average 1.125e308: 1.5e308 → 1.33, 1e308 → 0.89
        let plan = compute_pricing(&[1.5e308, 1e308, 1e308, 1e308], 60.0, 0.1).unwrap();
        let adjustments: Vec<_> = plan.daily_recommendations.iter().map(|r| r.adjustment).collect();
        assert_eq!(
            adjustments,
            vec![
                PriceAdjustment::Increase,
                PriceAdjustment::Maintain,
                PriceAdjustment::Maintain,
                PriceAdjustment::Maintain,
            ]
        );
        // (1.5 * 66 + 3 * 60) / (4.5 * 60) = 279 / 270
        assert_eq!(plan.overall_strategy.potential_revenue_increase_percent, 3.3);
    }

    #[test]
    fn test_overflowing_price_rejected() {
        // 1e308 * (1 + 1.0) leaves the f64 range
        let err = compute_pricing(&[1.0, 10.0], 1e308, 1.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(err.to_string().contains("day 2"));
    }

    #[test]
    fn test_vanishing_baseline_revenue_rejected() {
        // baseline 60 * 1e-310 leaves 12 / 6e-309 = 2e309
        let err = compute_pricing(&[-1.0, 1.0, 1e-310], 60.0, 0.1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(err.to_string().contains("revenue"));
    }

    #[test]
    fn test_tied_demand_rounds_to_even() {
        let plan = compute_pricing(&[12.125], 60.0, 0.1).unwrap();
        assert_eq!(plan.daily_recommendations[0].forecasted_demand, 12.12);
        assert_eq!(plan.overall_strategy.average_demand, 12.12);
    }

    #[test]
    fn test_negative_forecast_values_flow_through() {
        // average 20: -10 → -0.5, 50 → 2.5
        let plan = compute_pricing(&[-10.0, 50.0], 60.0, 0.1).unwrap();
        let days = &plan.daily_recommendations;
        assert_eq!(days[0].adjustment, PriceAdjustment::Decrease);
        assert_eq!(days[0].forecasted_demand, -10.0);
        assert_eq!(days[0].recommended_price, 54.0);
        assert_eq!(days[1].adjustment, PriceAdjustment::Increase);
        assert_eq!(days[1].recommended_price, 66.0);

        let s = &plan.overall_strategy;
        assert_eq!(s.low_demand, -10.0);
        assert_eq!(s.average_demand, 20.0);
        // (54 * -10 + 66 * 50) / (60 * 40) = 2760 / 2400
        assert_eq!(s.potential_revenue_increase_percent, 15.0);
    }

    #[test]
    fn test_negative_base_price_accepted() {
        let plan = compute_pricing(&sample_week(), -60.0, 0.1).unwrap();
        let days = &plan.daily_recommendations;
        assert_eq!(days[3].adjustment, PriceAdjustment::Increase);
        assert_eq!(days[3].recommended_price, -66.0);
        assert_eq!(days[3].price_change_percent, 10.0);
        assert_eq!(days[4].adjustment, PriceAdjustment::Decrease);
        assert_eq!(days[4].recommended_price, -54.0);
        assert_eq!(days[4].price_change_percent, -10.0);
        assert_eq!(days[0].recommended_price, -60.0);

        let s = &plan.overall_strategy;
        assert_eq!(s.base_price, -60.0);
        assert_eq!(s.recommended_avg_price, -60.0);
        // -42600 / -42000
        assert_eq!(s.potential_revenue_increase_percent, 1.4);
    }
}
