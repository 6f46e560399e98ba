//! Descriptive statistics over slices of numbers.
//!
//! Callers pass only non-missing values.

use std::cmp::Ordering;

/// Sort a copy of the values ascending.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    out
}

/// Quantile of pre-sorted values using linear interpolation between ranks.
///
/// `q` is in `[0, 1]`. Returns `None` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;

    if lo == hi {
        Some(sorted[lo])
    } else {
        Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
    }
}

/// Quantile of unsorted values.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted(values), q)
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Running moments accumulated with Welford's algorithm.
///
/// Single pass, numerically stable; tracks the second through fourth central
/// moment sums so skewness and kurtosis come out of the same pass.
#[derive(Debug, Clone, Default)]
pub struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
    m3: f64,
    m4: f64,
}

impl Moments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate every value of a slice.
    pub fn from_values(values: &[f64]) -> Self {
        let mut moments = Self::new();
        for &value in values {
            moments.add(value);
        }
        moments
    }

    /// Add a value.
    pub fn add(&mut self, value: f64) {
        let n1 = self.count as f64;
        self.count += 1;
        let n = self.count as f64;

        let delta = value - self.mean;
        let delta_n = delta / n;
        let delta_n2 = delta_n * delta_n;
        let term1 = delta * delta_n * n1;

        self.mean += delta_n;
        self.m4 += term1 * delta_n2 * (n * n - 3.0 * n + 3.0) + 6.0 * delta_n2 * self.m2
            - 4.0 * delta_n * self.m3;
        self.m3 += term1 * delta_n * (n - 2.0) - 3.0 * delta_n * self.m2;
        self.m2 += term1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance (n − 1 denominator). Needs at least two values.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Sample standard deviation (n − 1 denominator).
    pub fn sample_std(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }

    /// Population skewness, `m3 / m2^1.5` with biased central moments.
    pub fn skewness(&self) -> Option<f64> {
        let n = self.count as f64;
        if self.count == 0 || self.m2 <= 0.0 {
            return None;
        }
        Some(n.sqrt() * self.m3 / self.m2.powf(1.5))
    }

    /// Population excess kurtosis, `m4 / m2² − 3`; a normal sample reports about zero.
    pub fn excess_kurtosis(&self) -> Option<f64> {
        let n = self.count as f64;
        if self.count == 0 || self.m2 <= 0.0 {
            return None;
        }
        Some(n * self.m4 / (self.m2 * self.m2) - 3.0)
    }
}

/// Pearson correlation of paired samples.
///
/// `None` with fewer than two pairs or when either side is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx <= 0.0 || syy <= 0.0 {
        return None;
    }
    Some((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_quantile_linear_interpolation() {
        let values = [1.0, 2.0, 3.0, 4.0, 100.0];
        assert_eq!(quantile(&values, 0.25), Some(2.0));
        assert_eq!(quantile(&values, 0.5), Some(3.0));
        assert_eq!(quantile(&values, 0.75), Some(4.0));

        let even = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(quantile(&even, 0.5).unwrap(), 2.5));
        assert!(approx(quantile(&even, 0.1).unwrap(), 1.3));
        assert!(approx(quantile(&even, 0.9).unwrap(), 3.7));
    }

    #[test]
    fn test_quantile_edge_cases() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[7.0], 0.9), Some(7.0));
    }

    #[test]
    fn test_moments_basic() {
        let m = Moments::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(m.count(), 8);
        assert!(approx(m.mean().unwrap(), 5.0));
        // Population variance is 4, sample variance is 32/7.
        assert!(approx(m.sample_variance().unwrap(), 32.0 / 7.0));
    }

    #[test]
    fn test_symmetric_data_has_zero_skew() {
        let m = Moments::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(approx(m.skewness().unwrap(), 0.0));
        // Uniform-like spread: m4/m2² = 1.7 for 1..=5.
        assert!(approx(m.excess_kurtosis().unwrap(), 1.7 - 3.0));
    }

    #[test]
    fn test_right_skew_is_positive() {
        let m = Moments::from_values(&[1.0, 1.0, 1.0, 2.0, 10.0]);
        assert!(m.skewness().unwrap() > 0.0);
    }

    #[test]
    fn test_undefined_moments() {
        let empty = Moments::new();
        assert_eq!(empty.mean(), None);
        assert_eq!(empty.sample_std(), None);
        assert_eq!(empty.skewness(), None);

        let single = Moments::from_values(&[3.0]);
        assert_eq!(single.mean(), Some(3.0));
        assert_eq!(single.sample_std(), None);
        assert_eq!(single.skewness(), None);
        assert_eq!(single.excess_kurtosis(), None);
    }

    #[test]
    fn test_pearson() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(pearson(&xs, &[2.0, 4.0, 6.0, 8.0]).unwrap(), 1.0));
        assert!(approx(pearson(&xs, &[8.0, 6.0, 4.0, 2.0]).unwrap(), -1.0));
        assert_eq!(pearson(&xs, &[1.0, 1.0, 1.0, 1.0]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
    }
}
