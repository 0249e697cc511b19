use std::collections::HashMap;

use super::types::*;
use crate::config::SolverConfig;
use crate::error::BsResult;
use crate::models::implied_vol::solve;
use crate::models::utils::log_moneyness;

/// Solve implied volatility for every quote, sorted by expiry then strike.
///
/// Unresolved quotes stay in the output. A malformed quote (non-positive
/// strike, spot or expiry) aborts the whole batch.
pub fn solve_chain(
    quotes: &[OptionQuote],
    rate: f64,
    config: &SolverConfig,
) -> BsResult<Vec<ChainPoint>> {
    config.validate()?;

    let mut points = quotes
        .iter()
        .map(|quote| {
            solve(&quote.to_problem(rate), config).map(|implied_vol| ChainPoint {
                quote: *quote,
                implied_vol,
            })
        })
        .collect::<BsResult<Vec<_>>>()?;

    points.sort_by(|a, b| {
        a.quote
            .years_to_exp
            .total_cmp(&b.quote.years_to_exp)
            .then(a.quote.strike.total_cmp(&b.quote.strike))
    });

    let summary = ChainSummary::from_points(&points);
    tracing::debug!(
        quotes = points.len(),
        converged = summary.converged,
        unresolved = summary.unresolved,
        "solved option chain"
    );

    Ok(points)
}

/// Fill unresolved points from solved neighbours of the same expiry.
///
/// Interpolates total variance linearly in log-moneyness ln(K/S). Outside the
/// solved range the two outermost points are extrapolated when
/// `allow_extrapolation` is set; a non-positive extrapolated variance leaves
/// the point [`VolSource::Missing`]. An expiry with a single solved point
/// uses it flat. Output order matches input order.
pub fn fill_unresolved(points: &[ChainPoint], allow_extrapolation: bool) -> Vec<FilledPoint> {
    let mut by_expiry: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, point) in points.iter().enumerate() {
        by_expiry
            .entry(expiry_key(point.quote.years_to_exp))
            .or_default()
            .push(i);
    }

    let mut filled: Vec<Option<FilledPoint>> = vec![None; points.len()];

    for indices in by_expiry.values() {
        let group: Vec<&ChainPoint> = indices.iter().map(|&i| &points[i]).collect();
        let variance_points = prepare_points(&group);

        for (&i, point) in indices.iter().zip(&group) {
            let quote = point.quote;
            filled[i] = Some(match point.implied_vol.value() {
                Some(sigma) => FilledPoint {
                    quote,
                    vol: Some(sigma),
                    source: VolSource::Solved,
                },
                None => {
                    let x = log_moneyness(quote.strike, quote.spot);
                    match linear_interp(&variance_points, x, allow_extrapolation) {
                        Some(w) if w > 0.0 => FilledPoint {
                            quote,
                            vol: Some((w / quote.years_to_exp).sqrt()),
                            source: VolSource::Interpolated,
                        },
                        _ => FilledPoint {
                            quote,
                            vol: None,
                            source: VolSource::Missing,
                        },
                    }
                }
            });
        }
    }

    filled.into_iter().flatten().collect()
}

fn expiry_key(years_to_exp: f64) -> String {
    format!("{:.8}", years_to_exp)
}

/// Sorted (log-moneyness, total variance) pairs from the converged points,
/// averaging duplicates (a call and a put on the same strike).
fn prepare_points(group: &[&ChainPoint]) -> Vec<(f64, f64)> {
    let mut x_to_variances: HashMap<String, (f64, Vec<f64>)> = HashMap::new();

    for point in group {
        let Some(sigma) = point.implied_vol.value() else {
            continue;
        };
        let x = log_moneyness(point.quote.strike, point.quote.spot);
        let w = sigma * sigma * point.quote.years_to_exp;
        x_to_variances
            .entry(format!("{:.8}", x))
            .or_insert_with(|| (x, Vec::new()))
            .1
            .push(w);
    }

    let mut result: Vec<(f64, f64)> = x_to_variances
        .into_values()
        .map(|(x, ws)| (x, ws.iter().sum::<f64>() / ws.len() as f64))
        .collect();

    result.sort_by(|a, b| a.0.total_cmp(&b.0));
    result
}

/// Linear interpolation over sorted points, optionally extrapolating from the
/// two outermost points. Returns None for an empty set, for a query outside
/// the range with extrapolation disabled, or for a non-positive extrapolation.
fn linear_interp(sorted_points: &[(f64, f64)], query_x: f64, allow_extrapolation: bool) -> Option<f64> {
    let (first, last) = match sorted_points {
        [] => return None,
        [only] => return Some(only.1),
        [first, .., last] => (*first, *last),
    };

    if query_x < first.0 || query_x > last.0 {
        if !allow_extrapolation {
            return None;
        }
        let n = sorted_points.len();
        let ((x1, y1), (x2, y2)) = if query_x < first.0 {
            (sorted_points[0], sorted_points[1])
        } else {
            (sorted_points[n - 2], sorted_points[n - 1])
        };
        let slope = (y2 - y1) / (x2 - x1);
        let extrapolated = y1 + slope * (query_x - x1);
        return (extrapolated > 0.0).then_some(extrapolated);
    }

    sorted_points.windows(2).find_map(|pair| {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        (query_x >= x1 && query_x <= x2).then(|| y1 + (query_x - x1) / (x2 - x1) * (y2 - y1))
    })
}
