use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Grid carbon intensity: grams of CO2 per kilowatt-hour consumed.
pub type GramsPerKilowattHour = Quantity<f64, -1, 1>;

impl Display for GramsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} g/kWh", self.0)
    }
}

impl Debug for GramsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}g/kWh", self.0)
    }
}
