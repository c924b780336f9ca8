use crate::models::StatSummary;

/// Summarize a metric series with the eight descriptive statistics plus
/// skewness.
///
/// Preconditions (documented, not enforced): `xs` must be non-empty, and the
/// classifiers expect at least two observations for the quartiles to carry
/// meaning.
pub fn summarize(xs: &[f64]) -> StatSummary {
    let n = xs.len() as f64;

    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = xs.iter().sum::<f64>() / n;
    let variance = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    let q1 = percentile(&sorted, 0.25);
    let q3 = percentile(&sorted, 0.75);

    StatSummary {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean,
        median: percentile(&sorted, 0.5),
        std_dev: variance.sqrt(),
        q1,
        q3,
        iqr: q3 - q1,
        skewness: skewness(xs, mean, variance),
    }
}

/// Linear-interpolation percentile over an already sorted slice:
/// `pos = q * (n - 1)`, interpolating between the bracketing ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (pos - lower as f64) * (sorted[upper] - sorted[lower])
    }
}

/// Fisher-Pearson skewness with population moments (no small-sample bias
/// correction): m3 / m2^(3/2). A zero-variance series reports 0.
fn skewness(xs: &[f64], mean: f64, variance: f64) -> f64 {
    if variance == 0.0 {
        return 0.0;
    }
    let n = xs.len() as f64;
    let m3 = xs.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / n;
    m3 / variance.powf(1.5)
}
