use std::path::Path;

use crate::{core::CoreError, prelude::*, quantity::energy::Joules};

/// Per-component energy figures of a profiled workload, as emitted by the
/// profiler in camel-cased JSON.
#[derive(Clone, Copy, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    pub cpu: Joules,
    pub memory: Joules,
    pub gpu: Joules,
    pub disk: Joules,
    pub network: Joules,

    /// The profiler keeps this equal to the component sum; it is not
    /// enforced here.
    #[serde(rename = "totalEnergyJ")]
    pub total_energy: Joules,
}

impl EnergyBreakdown {
    pub const fn components(&self) -> [(&'static str, Joules); 5] {
        [
            ("CPU", self.cpu),
            ("Memory", self.memory),
            ("GPU", self.gpu),
            ("Disk", self.disk),
            ("Network", self.network),
        ]
    }

    pub fn component_sum(&self) -> Joules {
        self.components().into_iter().map(|(_, energy)| energy).sum()
    }

    fn validate(&self) -> Result<(), CoreError> {
        let all_valid = self
            .components()
            .into_iter()
            .map(|(_, energy)| energy)
            .chain([self.total_energy])
            .all(Joules::is_valid);
        if all_valid {
            Ok(())
        } else {
            Err(CoreError::InvalidArgument("energy figures must be finite and non-negative"))
        }
    }
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_breakdown(path: impl AsRef<Path>) -> Result<EnergyBreakdown> {
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read `{}`", path.as_ref().display()))?;
    let breakdown: EnergyBreakdown =
        serde_json::from_str(&contents).context("failed to deserialize the energy profile")?;
    breakdown.validate()?;
    if (breakdown.total_energy - breakdown.component_sum()).0.abs() > 0.5 {
        warn!(
            total = %breakdown.total_energy,
            component_sum = %breakdown.component_sum(),
            "the profiled total drifts from the component sum",
        );
    }
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const PROFILE: &str = r#"{
        "cpu": 42.5,
        "memory": 10.0,
        "gpu": 0.0,
        "disk": 5.5,
        "network": 2.0,
        "totalEnergyJ": 60.0
    }"#;

    #[test]
    fn test_deserialize() -> Result {
        let breakdown: EnergyBreakdown = serde_json::from_str(PROFILE)?;
        assert_abs_diff_eq!(breakdown.cpu.0, 42.5);
        assert_abs_diff_eq!(breakdown.total_energy.0, 60.0);
        assert_abs_diff_eq!(breakdown.component_sum().0, 60.0);
        Ok(())
    }

    #[test]
    fn test_validate_rejects_negative() {
        let breakdown = EnergyBreakdown {
            cpu: Joules::from(-1.0),
            memory: Joules::ZERO,
            gpu: Joules::ZERO,
            disk: Joules::ZERO,
            network: Joules::ZERO,
            total_energy: Joules::ZERO,
        };
        assert!(breakdown.validate().is_err());
    }
}
