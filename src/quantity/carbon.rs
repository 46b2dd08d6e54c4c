use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Grams = Quantity<f64, 0, 1>;

/// One gram of CO2 in smartphone charges (phone charge ≈ 12 Wh).
const PHONE_CHARGES_PER_GRAM: f64 = 0.0833;

/// One gram of CO2 in miles driven (average vehicle ≈ 404 g CO2/mile).
const MILES_PER_GRAM: f64 = 0.000_002_27;

impl Grams {
    /// A relatable equivalent of the given carbon mass, banded by magnitude.
    #[must_use]
    pub fn equivalent(self) -> String {
        if self.0 < 10.0 {
            format!("{:.1} phone charges", self.0 * PHONE_CHARGES_PER_GRAM)
        } else if self.0 < 1000.0 {
            format!("{:.2} miles driven", self.0 * MILES_PER_GRAM)
        } else {
            format!("{:.2} kg CO2", self.0 / 1000.0)
        }
    }
}

impl Display for Grams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 < 1.0 {
            write!(f, "{:.2} g", self.0)
        } else if self.0 < 1000.0 {
            write!(f, "{:.1} g", self.0)
        } else {
            write!(f, "{:.2} kg", self.0 / 1000.0)
        }
    }
}

impl Debug for Grams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}g", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_sub_gram() {
        assert_eq!(Grams::ZERO.to_string(), "0.00 g");
        assert_eq!(Grams::from(0.456).to_string(), "0.46 g");
    }

    #[test]
    fn test_display_grams() {
        assert_eq!(Grams::from(1.0).to_string(), "1.0 g");
        assert_eq!(Grams::from(999.0).to_string(), "999.0 g");
    }

    #[test]
    fn test_display_kilograms() {
        assert_eq!(Grams::from(1000.0).to_string(), "1.00 kg");
        assert_eq!(Grams::from(1234.0).to_string(), "1.23 kg");
    }

    #[test]
    fn test_equivalent_phone_charges() {
        // 5 × 0.0833 = 0.4165, rounds down:
        assert_eq!(Grams::from(5.0).equivalent(), "0.4 phone charges");
    }

    #[test]
    fn test_equivalent_miles() {
        assert_eq!(Grams::from(100.0).equivalent(), "0.00 miles driven");
    }

    #[test]
    fn test_equivalent_kilograms() {
        assert_eq!(Grams::from(2500.0).equivalent(), "2.50 kg CO2");
    }
}
