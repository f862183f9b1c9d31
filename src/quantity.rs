use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Danish kroner per kilowatt-hour.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::From,
    derive_more::FromStr,
)]
#[from(f64, OrderedFloat<f64>)]
#[must_use]
pub struct KilowattHourRate(pub OrderedFloat<f64>);

impl KilowattHourRate {
    /// Convert from øre per kilowatt-hour, which is what NRGI reports.
    pub fn from_ore(ore: f64) -> Self {
        Self(OrderedFloat(ore / 100.0))
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} DKK", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}DKK", self.0)
    }
}
