//! Standard normal distribution helpers.
//!
//! Φ is evaluated through the complementary error function so that both tails
//! keep full relative precision: `Φ(z) = ½·erfc(−z/√2)`.

use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(z).
pub fn cdf(z: f64) -> f64 {
    0.5 * libm::erfc(-z / SQRT_2)
}

/// Standard normal probability density function φ(x).
pub fn pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Φ applied element-wise.
pub fn cdf_slice(zs: &[f64]) -> Vec<f64> {
    zs.iter().map(|&z| cdf(z)).collect()
}

/// φ applied element-wise.
pub fn pdf_slice(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| pdf(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{Continuous, ContinuousCDF, Normal};

    #[test]
    fn test_cdf_known_values() {
        assert_eq!(cdf(0.0), 0.5);
        assert!((cdf(1.96) - 0.975_002_104_851_780).abs() < 1e-12);
        assert!((cdf(-1.0) - 0.158_655_253_931_457).abs() < 1e-12);
        // Deep tail keeps relative precision
        let tail = cdf(-10.0);
        assert!((tail / 7.619_853_024_160_527e-24 - 1.0).abs() < 1e-10);
        let lower = cdf(-2.8);
        assert!((lower / 2.555_130_330_427_934_2e-3 - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_cdf_symmetry() {
        for z in [-3.0, -1.5, -0.2, 0.7, 2.4] {
            assert!((cdf(z) + cdf(-z) - 1.0).abs() < 1e-15);
        }
    }

    /// statrs is the less precise side in the lower tail, so compare relatively.
    #[test]
    fn test_matches_statrs() {
        let normal = Normal::new(0.0, 1.0).unwrap();
        for i in -60..=60 {
            let z = i as f64 / 10.0;
            let expected = normal.cdf(z);
            assert!(
                ((cdf(z) - expected) / expected).abs() < 1e-10,
                "cdf mismatch at {z}"
            );
            assert!((pdf(z) - normal.pdf(z)).abs() < 1e-14, "pdf mismatch at {z}");
        }
    }

    #[test]
    fn test_pdf_peak_uses_full_precision_pi() {
        assert_eq!(pdf(0.0), 1.0 / (2.0 * PI).sqrt());
        assert!((pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-16);
    }

    #[test]
    fn test_slices() {
        let zs = [-1.0, 0.0, 1.0];
        assert_eq!(cdf_slice(&zs), vec![cdf(-1.0), 0.5, cdf(1.0)]);
        assert_eq!(pdf_slice(&zs).len(), 3);
        assert!(cdf_slice(&[]).is_empty());
    }
}
