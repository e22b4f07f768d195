use crate::{Error, Result};

pub fn calculate_stress(force: f64, area: f64) -> Result<f64> {
    ensure_positive("area", area)?;
    Ok(force / area)
}

/// Tip deflection of a cantilever under an end point load, `P L^3 / (3 E I)`.
pub fn calculate_deflection(
    load: f64,
    length: f64,
    elasticity: f64,
    moment_of_inertia: f64,
) -> Result<f64> {
    ensure_positive("length", length)?;
    ensure_positive("elasticity", elasticity)?;
    ensure_positive("moment_of_inertia", moment_of_inertia)?;
    Ok(load * length.powi(3) / (3.0 * elasticity * moment_of_inertia))
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_is_force_over_area() {
        assert!((calculate_stress(1_000.0, 0.01).unwrap() - 100_000.0).abs() < 1.0e-6);
        assert!(calculate_stress(1_000.0, 0.0).is_err());
        assert!(calculate_stress(1_000.0, f64::INFINITY).is_err());
    }

    #[test]
    fn cantilever_deflection() {
        // 10 kN at the tip of a 3 m steel beam
        let deflection = calculate_deflection(10_000.0, 3.0, 200.0e9, 3.0e-4).unwrap();
        let expected = 10_000.0 * 27.0 / (3.0 * 200.0e9 * 3.0e-4);
        assert!((deflection - expected).abs() < 1.0e-15);
        assert!(calculate_deflection(10_000.0, 3.0, 0.0, 3.0e-4).is_err());
        assert!(calculate_deflection(10_000.0, f64::INFINITY, 200.0e9, 3.0e-4).is_err());
    }
}
