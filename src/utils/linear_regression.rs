use crate::models::FitMetrics;

/// Ordinary least-squares fit of `y = slope * x + intercept`.
///
/// Returns `None` when fewer than two points are given or when every `x` is
/// identical (the slope is undefined). If every `y` is identical the fit is
/// degenerate but exact, and `r_squared` is reported as `1.0`.
pub fn linear_regression(points: &[(f64, f64)]) -> Option<FitMetrics> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;

    let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), &(x, y)| (sx + x, sy + y, sxy + x * y, sxx + x * x),
    );

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let y_mean = sum_y / n;
    let (ss_res, ss_tot) = points.iter().fold((0.0, 0.0), |(res, tot), &(x, y)| {
        let y_pred = slope * x + intercept;
        (res + (y - y_pred).powi(2), tot + (y - y_mean).powi(2))
    });

    // Rounding in the mean can leave a tiny non-zero total for constant `y`
    let is_constant_y = points.iter().all(|&(_, y)| y == points[0].1);

    let r_squared = if is_constant_y || ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Some(FitMetrics {
        slope,
        intercept,
        r_squared,
    })
}
