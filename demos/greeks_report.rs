// demos/greeks_report.rs

//! Demonstration of Black-Scholes pricing, Greeks and implied volatility
//!
//! This example shows how to:
//! 1. Price an at-the-money call and put
//! 2. Compute the Greeks in market scale
//! 3. Recover the volatility from the model prices
//! 4. Solve a small chain that contains an unreachable quote and fill the gap
//!
//! Run with `RUST_LOG=bs_greeks_lib=debug cargo run --example greeks_report`
//! to see solver diagnostics. Pass a TOML file path to override the engine
//! settings, e.g. `greek_scale = "analytic"`.

use anyhow::Result;
use bs_greeks_lib::{
    call_value, fill_unresolved, put_value, solve_chain, EngineConfig, ImpliedVolProblem,
    MarketParameters, OptionQuote, OptionType,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let engine = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_toml_file(path)?,
        None => EngineConfig::default(),
    };

    let (s, k, r, t, vol): (f64, f64, f64, f64, f64) = (45.0, 45.0, 0.02, 164.0 / 365.0, 0.25);

    println!("Black-Scholes Greeks Report");
    println!("===========================");
    println!("S={s} K={k} r={r} t={t:.4}y vol={vol}");

    let call = call_value(s, k, r, t, vol)?;
    let put = put_value(s, k, r, t, vol)?;
    println!("\nStep 1: Prices");
    println!("  Call: {:.4}", call);
    println!("  Put:  {:.4}", put);
    println!(
        "  Parity check: C - P = {:.6}, S - K*e^(-rt) = {:.6}",
        call - put,
        s - k * (-r * t).exp()
    );

    println!("\nStep 2: Greeks ({:?} scale)", engine.greek_scale);
    println!(
        "{:<6} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Type", "Delta", "Gamma", "Vega", "Theta", "Rho"
    );
    println!("{}", "-".repeat(52));
    let params = MarketParameters::new(s, k, r, t, vol)?;
    for option_type in [OptionType::Call, OptionType::Put] {
        let g = engine.greeks(&params, option_type)?;
        println!(
            "{:<6} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4}",
            option_type, g.delta, g.gamma, g.vega, g.theta, g.rho
        );
    }

    println!("\nStep 3: Implied volatility round trip");
    for (option_type, price) in [(OptionType::Call, call), (OptionType::Put, put)] {
        let problem = ImpliedVolProblem::new(s, k, r, t, price, option_type)?;
        let iv = engine.implied_volatility(&problem)?;
        println!("  {option_type}: {iv}");
    }

    println!("\nStep 4: Chain with an unreachable quote");
    let quotes = create_demo_chain(s, r, t)?;
    let points = solve_chain(&quotes, r, &engine.solver)?;
    let filled = fill_unresolved(&points, true);
    println!("{:<6} {:<8} {:<10} {:<22} {:<12}", "Type", "Strike", "Price", "Solved", "Filled");
    for (point, fill) in points.iter().zip(&filled) {
        println!(
            "{:<6} {:<8.1} {:<10.4} {:<22} {:<12}",
            point.quote.option_type,
            point.quote.strike,
            point.quote.market_price,
            point.implied_vol.to_string(),
            fill.vol.map_or("-".to_string(), |v| format!("{v:.4} ({:?})", fill.source)),
        );
    }

    Ok(())
}

/// Synthetic call chain priced off a mild smile, with one quote pushed below
/// intrinsic value so the solver cannot resolve it.
fn create_demo_chain(spot: f64, r: f64, t: f64) -> Result<Vec<OptionQuote>> {
    let smile = [
        (35.0, 0.32),
        (40.0, 0.28),
        (45.0, 0.25),
        (50.0, 0.26),
        (55.0, 0.29),
    ];

    let mut quotes = Vec::with_capacity(smile.len());
    for (strike, vol) in smile {
        let mut market_price = call_value(spot, strike, r, t, vol)?;
        if strike == 40.0 {
            market_price = (spot - strike) * 0.5;
        }
        quotes.push(OptionQuote {
            option_type: OptionType::Call,
            strike,
            spot,
            years_to_exp: t,
            market_price,
        });
    }
    Ok(quotes)
}
