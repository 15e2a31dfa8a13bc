//! Piecewise linear interpolation
use log::debug;

/// Evaluates the piecewise linear function going through the (`xp`, `fp`) nodes at `x`.
/// `xp` must be non-decreasing, results are undefined otherwise.
/// Queries outside of the `xp` range return the closest boundary value (flat extrapolation),
/// queries that match a node return that node's value.
/// When `xp` holds duplicates, the right-most matching node is used.
/// Returns None on empty, mismatched or non finite nodes.
pub(crate) fn interp(x: f64, xp: &[f64], fp: &[f64]) -> Option<f64> {
    if xp.is_empty() || xp.len() != fp.len() {
        return None;
    }

    if xp.iter().chain(fp.iter()).any(|v| !v.is_finite()) {
        return None;
    }

    let n = xp.len();

    if x.is_nan() {
        return Some(f64::NAN);
    }

    if x < xp[0] {
        debug!("interp: x={} below range, clamping to {}", x, fp[0]);
        return Some(fp[0]);
    }

    if x >= xp[n - 1] {
        if x > xp[n - 1] {
            debug!("interp: x={} above range, clamping to {}", x, fp[n - 1]);
        }
        return Some(fp[n - 1]);
    }

    // xp[j] <= x < xp[j+1]
    let j = xp.partition_point(|xp_i| *xp_i <= x).checked_sub(1)?;
    if j + 1 >= n {
        return Some(fp[n - 1]);
    }

    let (x0, x1) = (xp[j], xp[j + 1]);
    let (y0, y1) = (fp[j], fp[j + 1]);

    if x == x0 {
        return Some(y0);
    }

    let slope = (y1 - y0) / (x1 - x0);
    Some(y0 + slope * (x - x0))
}
