//! Reducing series to the binned forms histograms and box plots draw.

use crate::domain::view::{BoxSummary, Histogram, HistogramBin};

/// Equal-width histogram over `values`.
///
/// Bins span `[min, max]`; every bin is half-open except the last, which also
/// holds the maximum. A series with a single distinct value is centred in a
/// unit-wide span. An empty series or zero bins yields no bins.
#[must_use]
pub fn histogram(values: &[f64], bins: usize) -> Histogram {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Histogram { bins: Vec::new() };
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in finite {
        let index = (((value - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    Histogram {
        bins: counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bins {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count,
            })
            .collect(),
    }
}

/// Five-number summary with linearly interpolated quartiles.
///
/// Returns `None` for an empty series.
#[must_use]
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    Some(BoxSummary {
        count: sorted.len(),
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_every_value() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let hist = histogram(&values, 5);
        assert_eq!(hist.bins.len(), 5);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 11);
        assert_eq!(hist.bins[0].lower, 0.0);
        assert_eq!(hist.bins[4].upper, 10.0);
        // The maximum lands in the closed last bin.
        assert_eq!(hist.bins[4].count, 3);
    }

    #[test]
    fn test_histogram_handles_negative_values() {
        let hist = histogram(&[-4.0, -2.0, 0.0, 4.0], 2);
        assert_eq!(hist.bins[0].lower, -4.0);
        assert_eq!(hist.bins[0].count, 2);
        assert_eq!(hist.bins[1].count, 2);
    }

    #[test]
    fn test_histogram_single_value_gets_unit_span() {
        let hist = histogram(&[3.0, 3.0], 4);
        assert_eq!(hist.bins.len(), 4);
        assert_eq!(hist.bins[0].lower, 2.5);
        assert_eq!(hist.bins[3].upper, 3.5);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_histogram_empty_input() {
        assert!(histogram(&[], 30).bins.is_empty());
        assert!(histogram(&[1.0], 0).bins.is_empty());
    }

    #[test]
    fn test_box_summary_odd_length() {
        let summary = box_summary(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn test_box_summary_interpolates() {
        let summary = box_summary(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.q1, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q3, 3.25);
    }

    #[test]
    fn test_box_summary_empty_is_none() {
        assert!(box_summary(&[]).is_none());
    }
}
