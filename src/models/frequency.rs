//! Recurrence frequency for recurring amounts
//!
//! Every recurring record carries exactly one frequency. The enum is
//! exhaustive: normalization matches on every variant, so adding a
//! frequency here forces the conversion table to be extended at compile
//! time instead of falling through a runtime default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OutlayError;

/// How often a recurring amount is charged or received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day, 365 occurrences per year (no leap-year adjustment)
    Daily,
    /// Every week, 52 occurrences per year
    Weekly,
    /// Every month
    #[default]
    Monthly,
    /// Every three months
    Quarterly,
    /// Twice a year
    #[serde(rename = "half-yearly")]
    HalfYearly,
    /// Once a year
    Yearly,
}

impl Frequency {
    /// All variants, in ascending period order
    pub const ALL: [Frequency; 6] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::HalfYearly,
        Frequency::Yearly,
    ];

    /// How many times per year an amount at this frequency occurs
    ///
    /// The year is a fixed 365 days; there is deliberately no calendar
    /// awareness anywhere in normalization.
    pub const fn occurrences_per_year(&self) -> i64 {
        match self {
            Frequency::Daily => 365,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::HalfYearly => 2,
            Frequency::Yearly => 1,
        }
    }

    /// Short lowercase name, matching the serialized form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::HalfYearly => "half-yearly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = OutlayError;

    /// Parse a frequency from user input, accepting common spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(Frequency::Daily),
            "weekly" | "week" => Ok(Frequency::Weekly),
            "monthly" | "month" => Ok(Frequency::Monthly),
            "quarterly" | "quarter" => Ok(Frequency::Quarterly),
            "half-yearly" | "halfyearly" | "half-year" | "semiannual" => {
                Ok(Frequency::HalfYearly)
            }
            "yearly" | "year" | "annual" | "annually" => Ok(Frequency::Yearly),
            other => Err(OutlayError::UnknownFrequency(other.to_string())),
        }
    }
}
