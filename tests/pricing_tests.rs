
use bs_greeks_lib::{
    call_value, payoff_curve, price, price_curve, put_value, MarketParameters, OptionType,
    PricingError,
};
use test_utils::*;

/// Reference scenario values computed independently.
#[test]
fn test_reference_scenario_prices() {
    let call = call_value(REF_SPOT, REF_STRIKE, REF_RATE, REF_TIME, REF_VOL).unwrap();
    let put = put_value(REF_SPOT, REF_STRIKE, REF_RATE, REF_TIME, REF_VOL).unwrap();

    assert!((call - 3.197_036).abs() < 1e-6, "call={call}");
    assert!((put - 2.794_464).abs() < 1e-6, "put={put}");
}

/// C − P = S − K·e^(−rt) for sampled inputs, including negative rates.
#[test]
fn test_put_call_parity() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let m = sample_wide_market(&mut rng);
        let call = call_value(m.spot, m.strike, m.rate, m.time, m.vol).unwrap();
        let put = put_value(m.spot, m.strike, m.rate, m.time, m.vol).unwrap();
        let forward = m.spot - m.strike * (-m.rate * m.time).exp();
        let scale = m.spot.max(m.strike);
        assert!(
            (call - put - forward).abs() < 1e-12 * scale.max(1.0) * 10.0,
            "parity violated for {m:?}: C-P={} F={}",
            call - put,
            forward
        );
    }
}

/// Price must rise strictly with volatility.
#[test]
fn test_price_monotone_in_vol() {
    for strike in [90.0, 100.0, 110.0] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let mut previous = f64::NEG_INFINITY;
            for i in 1..40 {
                let vol = i as f64 * 0.05;
                let params = MarketParameters::new(100.0, strike, 0.03, 0.5, vol).unwrap();
                let value = price(&params, option_type).unwrap().value;
                assert!(
                    value > previous,
                    "{option_type} K={strike}: price not increasing at vol={vol}"
                );
                previous = value;
            }
        }
    }
}

/// As t → 0⁺ both prices collapse to intrinsic value.
#[test]
fn test_short_expiry_converges_to_intrinsic() {
    let t = 1e-10;
    for (s, k) in [(50.0, 45.0), (40.0, 45.0), (45.0, 45.0)] {
        let call = call_value(s, k, 0.03, t, 0.3).unwrap();
        let put = put_value(s, k, 0.03, t, 0.3).unwrap();
        assert!((call - f64::max(s - k, 0.0)).abs() < 1e-4, "call S={s}: {call}");
        assert!((put - f64::max(k - s, 0.0)).abs() < 1e-4, "put S={s}: {put}");
    }
}

/// Prices stay within no-arbitrage bounds.
#[test]
fn test_price_bounds() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let m = sample_wide_market(&mut rng);
        let discounted_strike = m.strike * (-m.rate * m.time).exp();
        let call = call_value(m.spot, m.strike, m.rate, m.time, m.vol).unwrap();
        let put = put_value(m.spot, m.strike, m.rate, m.time, m.vol).unwrap();

        let eps = 1e-9 * m.spot.max(m.strike);
        assert!(call >= (m.spot - discounted_strike).max(0.0) - eps, "{m:?}");
        assert!(call <= m.spot + eps, "{m:?}");
        assert!(put >= (discounted_strike - m.spot).max(0.0) - eps, "{m:?}");
        assert!(put <= discounted_strike + eps, "{m:?}");
    }
}

/// Degenerate inputs fail fast instead of producing NaN.
#[test]
fn test_invalid_inputs_rejected() {
    let cases = [
        (45.0, 45.0, 0.02, 0.0, 0.25, "time"),
        (45.0, 45.0, 0.02, -0.5, 0.25, "time"),
        (45.0, 45.0, 0.02, 0.5, 0.0, "vol"),
        (45.0, 45.0, 0.02, 0.5, -0.25, "vol"),
        (0.0, 45.0, 0.02, 0.5, 0.25, "spot"),
        (45.0, 0.0, 0.02, 0.5, 0.25, "strike"),
        (45.0, 45.0, f64::INFINITY, 0.5, 0.25, "rate"),
    ];

    for (s, k, r, t, v, field) in cases {
        match call_value(s, k, r, t, v) {
            Err(PricingError::InvalidInput { name, .. }) => assert_eq!(name, field),
            other => panic!("expected InvalidInput for {field}, got {other:?}"),
        }
        assert!(put_value(s, k, r, t, v).is_err());
    }
}

/// Curves evaluate each spot independently.
#[test]
fn test_price_and_payoff_curves() {
    let spots: Vec<f64> = (1..=20).map(|i| i as f64 * 5.0).collect();
    let template = MarketParameters::new(50.0, 50.0, 0.01, 0.5, 0.3).unwrap();

    let calls = price_curve(&spots, &template, OptionType::Call).unwrap();
    let payoffs = payoff_curve(&spots, 50.0, OptionType::Call);
    assert_eq!(calls.len(), spots.len());

    for ((&s, &value), &payoff) in spots.iter().zip(&calls).zip(&payoffs) {
        let direct = call_value(s, 50.0, 0.01, 0.5, 0.3).unwrap();
        assert_eq!(value, direct);
        // Positive carry keeps a European call above its exercise payoff
        assert!(value >= payoff - 1e-12, "S={s}");
    }

    let puts = payoff_curve(&[40.0, 50.0, 60.0], 50.0, OptionType::Put);
    assert_eq!(puts, vec![10.0, 0.0, 0.0]);

    assert!(price_curve(&[10.0, -1.0], &template, OptionType::Put).is_err());
}
