use crate::{
    core::CoreError,
    quantity::{carbon::Grams, energy::Joules, intensity::GramsPerKilowattHour},
};

/// Converts an energy figure into the carbon mass its generation emitted at
/// the given grid intensity: `grams = joules / 3_600_000 × intensity`.
pub fn energy_to_carbon(
    energy: Joules,
    intensity: GramsPerKilowattHour,
) -> Result<Grams, CoreError> {
    if !energy.is_valid() {
        return Err(CoreError::InvalidArgument("energy must be finite and non-negative"));
    }
    if !intensity.is_valid() {
        return Err(CoreError::InvalidArgument("intensity must be finite and non-negative"));
    }
    Ok(energy * intensity)
}
