
use bs_greeks_lib::{
    delta, gamma, greeks, rho, theta, vega, GreekScale, MarketParameters, OptionType,
};
use test_utils::*;

fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}

/// Reference scenario: S=K=45, r=2%, t=164/365, vol=25%, market-scale Greeks to 4 dp.
#[test]
fn test_reference_scenario_greeks() {
    let (s, k, r, t, v) = (REF_SPOT, REF_STRIKE, REF_RATE, REF_TIME, REF_VOL);

    assert_eq!(round4(delta(s, k, r, t, v, true).unwrap()), 0.5546);
    assert_eq!(round4(delta(s, k, r, t, v, false).unwrap()), -0.4454);
    assert_eq!(round4(gamma(s, k, r, t, v).unwrap()), 0.0524);
    assert_eq!(round4(vega(s, k, r, t, v).unwrap()), 0.1192);
    assert_eq!(round4(theta(s, k, r, t, v, true).unwrap()), -0.0103);
    assert_eq!(round4(theta(s, k, r, t, v, false).unwrap()), -0.0078);
    assert_eq!(round4(rho(s, k, r, t, v, true).unwrap()), 0.0978);
    assert_eq!(round4(rho(s, k, r, t, v, false).unwrap()), -0.1026);
}

/// The full GreekSet agrees with the flat functions in market scale.
#[test]
fn test_greek_set_matches_flat_api() {
    let (s, k, r, t, v) = (REF_SPOT, REF_STRIKE, REF_RATE, REF_TIME, REF_VOL);
    let params = MarketParameters::new(s, k, r, t, v).unwrap();

    let call = greeks(&params, OptionType::Call, GreekScale::Market).unwrap();
    assert_eq!(call.delta, delta(s, k, r, t, v, true).unwrap());
    assert_eq!(call.vega, vega(s, k, r, t, v).unwrap());
    assert_eq!(call.theta, theta(s, k, r, t, v, true).unwrap());
    assert_eq!(call.rho, rho(s, k, r, t, v, true).unwrap());

    let analytic = greeks(&params, OptionType::Call, GreekScale::Analytic).unwrap();
    assert!((analytic.vega - 11.920_591).abs() < 1e-5);
    assert!((analytic.theta - (-3.751_565)).abs() < 1e-5);
}

/// Gamma and vega are the same number whether reached via a call or a put.
#[test]
fn test_gamma_vega_identical_for_call_and_put() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let m = sample_wide_market(&mut rng);
        let params = MarketParameters::new(m.spot, m.strike, m.rate, m.time, m.vol).unwrap();

        for scale in [GreekScale::Analytic, GreekScale::Market] {
            let call = greeks(&params, OptionType::Call, scale).unwrap();
            let put = greeks(&params, OptionType::Put, scale).unwrap();
            assert_eq!(call.gamma.to_bits(), put.gamma.to_bits(), "{m:?}");
            assert_eq!(call.vega.to_bits(), put.vega.to_bits(), "{m:?}");
        }
    }
}

/// Call delta in [0, 1], put delta in [−1, 0], and they differ by exactly one.
#[test]
fn test_delta_bounds() {
    let mut rng = seeded_rng();
    for _ in 0..1000 {
        let m = sample_wide_market(&mut rng);
        let call = delta(m.spot, m.strike, m.rate, m.time, m.vol, true).unwrap();
        let put = delta(m.spot, m.strike, m.rate, m.time, m.vol, false).unwrap();

        assert!((0.0..=1.0).contains(&call), "call delta {call} for {m:?}");
        assert!((-1.0..=0.0).contains(&put), "put delta {put} for {m:?}");
        assert!((call - put - 1.0).abs() < 1e-15);
    }
}

/// Gamma and vega are never negative; call rho is non-negative, put rho non-positive.
#[test]
fn test_greek_signs() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let m = sample_wide_market(&mut rng);
        let params = MarketParameters::new(m.spot, m.strike, m.rate, m.time, m.vol).unwrap();
        let call = greeks(&params, OptionType::Call, GreekScale::Analytic).unwrap();
        let put = greeks(&params, OptionType::Put, GreekScale::Analytic).unwrap();

        assert!(call.gamma >= 0.0 && call.vega >= 0.0, "{m:?}");
        assert!(call.rho >= 0.0, "{m:?}");
        assert!(put.rho <= 0.0, "{m:?}");
        // theta_call − theta_put = −r·K·e^(−rt)
        let carry = -m.rate * m.strike * (-m.rate * m.time).exp();
        assert!((call.theta - put.theta - carry).abs() < 1e-9 * m.strike.max(1.0), "{m:?}");
    }
}

/// Invalid inputs are rejected by every Greek.
#[test]
fn test_greeks_reject_invalid_inputs() {
    assert!(delta(45.0, 45.0, 0.02, 0.0, 0.25, true).is_err());
    assert!(gamma(45.0, 45.0, 0.02, 0.5, 0.0).is_err());
    assert!(vega(-45.0, 45.0, 0.02, 0.5, 0.25).is_err());
    assert!(theta(45.0, 45.0, f64::NAN, 0.5, 0.25, false).is_err());
    assert!(rho(45.0, f64::INFINITY, 0.02, 0.5, 0.25, true).is_err());
}
