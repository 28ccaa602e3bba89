use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;

/// Number of months the user asks the prediction service to forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Horizon {
    OneMonth,
    #[default]
    SixMonths,
    TwelveMonths,
    TwentyFourMonths,
}

impl Horizon {
    pub const ALL: [Horizon; 4] = [
        Horizon::OneMonth,
        Horizon::SixMonths,
        Horizon::TwelveMonths,
        Horizon::TwentyFourMonths,
    ];

    pub fn months(&self) -> u32 {
        match self {
            Horizon::OneMonth => 1,
            Horizon::SixMonths => 6,
            Horizon::TwelveMonths => 12,
            Horizon::TwentyFourMonths => 24,
        }
    }

    pub fn label(&self) -> String {
        match self.months() {
            1 => "1 month".to_string(),
            months => format!("{} months", months),
        }
    }
}

impl TryFrom<u32> for Horizon {
    type Error = ModelError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            1 => Ok(Horizon::OneMonth),
            6 => Ok(Horizon::SixMonths),
            12 => Ok(Horizon::TwelveMonths),
            24 => Ok(Horizon::TwentyFourMonths),
            other => Err(ModelError::InvalidHorizon(other)),
        }
    }
}

impl From<Horizon> for u32 {
    fn from(horizon: Horizon) -> Self {
        horizon.months()
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_from_months() {
        for horizon in Horizon::ALL {
            assert_eq!(Horizon::try_from(horizon.months()), Ok(horizon));
        }
        assert_eq!(Horizon::try_from(3), Err(ModelError::InvalidHorizon(3)));
    }

    #[test]
    fn test_horizon_default_and_labels() {
        assert_eq!(Horizon::default(), Horizon::SixMonths);
        assert_eq!(Horizon::OneMonth.label(), "1 month");
        assert_eq!(Horizon::TwentyFourMonths.to_string(), "24 months");
    }

    #[test]
    fn test_horizon_serde() {
        let horizon: Horizon = serde_json::from_str("12").unwrap();
        assert_eq!(horizon, Horizon::TwelveMonths);
        assert!(serde_json::from_str::<Horizon>("5").is_err());
        assert_eq!(serde_json::to_string(&Horizon::OneMonth).unwrap(), "1");
    }
}
