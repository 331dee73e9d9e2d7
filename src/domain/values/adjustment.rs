use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Demand ratio above which the price is raised (strict).
pub const HIGH_DEMAND_RATIO: f64 = 1.2;
/// Demand ratio below which the price is lowered (strict).
pub const LOW_DEMAND_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceAdjustment {
    Increase,
    Decrease,
    Maintain,
}

impl PriceAdjustment {
    /// Classify a day's demand ratio. Ratios of exactly 1.2 or 0.8 fall
    /// into the dead zone and keep the base price.
    pub fn classify(demand_ratio: f64) -> Self {
        if demand_ratio > HIGH_DEMAND_RATIO {
            PriceAdjustment::Increase
        } else if demand_ratio < LOW_DEMAND_RATIO {
            PriceAdjustment::Decrease
        } else {
            PriceAdjustment::Maintain
        }
    }

    /// Unrounded price this adjustment recommends.
    pub fn apply(&self, base_price: f64, elasticity: f64) -> f64 {
        match self {
            PriceAdjustment::Increase => base_price * (1.0 + elasticity),
            PriceAdjustment::Decrease => base_price * (1.0 - elasticity),
            PriceAdjustment::Maintain => base_price,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            PriceAdjustment::Increase => {
                "High demand expected - increase price to maximize revenue"
            }
            PriceAdjustment::Decrease => "Low demand expected - decrease price to stimulate sales",
            PriceAdjustment::Maintain => "Normal demand - maintain current price",
        }
    }
}

impl fmt::Display for PriceAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceAdjustment::Increase => write!(f, "INCREASE"),
            PriceAdjustment::Decrease => write!(f, "DECREASE"),
            PriceAdjustment::Maintain => write!(f, "MAINTAIN"),
        }
    }
}

impl FromStr for PriceAdjustment {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INCREASE" => Ok(PriceAdjustment::Increase),
            "DECREASE" => Ok(PriceAdjustment::Decrease),
            "MAINTAIN" => Ok(PriceAdjustment::Maintain),
            _ => Err(format!("Unknown price adjustment: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(PriceAdjustment::classify(1.2), PriceAdjustment::Maintain);
        assert_eq!(PriceAdjustment::classify(0.8), PriceAdjustment::Maintain);
        assert_eq!(PriceAdjustment::classify(1.21), PriceAdjustment::Increase);
        assert_eq!(PriceAdjustment::classify(0.79), PriceAdjustment::Decrease);
        assert_eq!(PriceAdjustment::classify(1.0), PriceAdjustment::Maintain);
    }

    #[test]
    fn test_apply() {
        assert!((PriceAdjustment::Increase.apply(60.0, 0.1) - 66.0).abs() < 1e-9);
        assert!((PriceAdjustment::Decrease.apply(60.0, 0.1) - 54.0).abs() < 1e-9);
        assert_eq!(PriceAdjustment::Maintain.apply(60.0, 0.1), 60.0);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("increase".parse::<PriceAdjustment>().unwrap(), PriceAdjustment::Increase);
        assert_eq!(PriceAdjustment::Decrease.to_string(), "DECREASE");
        assert!("hold".parse::<PriceAdjustment>().is_err());
    }

    #[test]
    fn test_serializes_uppercase() {
        let json = serde_json::to_string(&PriceAdjustment::Maintain).unwrap();
        assert_eq!(json, "\"MAINTAIN\"");
    }
}
