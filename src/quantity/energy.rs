use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, carbon::Grams, intensity::GramsPerKilowattHour};

pub type Joules = Quantity<f64, 1, 0>;

impl Joules {
    /// 1 kWh = 3.6×10⁶ J.
    pub const PER_KILOWATT_HOUR: f64 = 3_600_000.0;

    pub fn to_kilowatt_hours(self) -> f64 {
        self.0 / Self::PER_KILOWATT_HOUR
    }
}

impl Display for Joules {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 < 1000.0 {
            write!(f, "{:.1} J", self.0)
        } else {
            write!(f, "{:.2} kJ", self.0 / 1000.0)
        }
    }
}

impl Debug for Joules {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}J", self.0)
    }
}

impl Mul<GramsPerKilowattHour> for Joules {
    type Output = Grams;

    fn mul(self, rhs: GramsPerKilowattHour) -> Self::Output {
        Quantity(self.to_kilowatt_hours() * rhs.0)
    }
}
