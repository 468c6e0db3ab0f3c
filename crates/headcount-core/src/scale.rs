// File: crates/headcount-core/src/scale.rs
// Summary: Linear (X) and band (Y) scale transforms for the proportional layout.

/// Continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    /// Proportion scale: `[0, 1]` onto `[0, width]`.
    pub fn unit(width: f64) -> Self {
        Self::new((0.0, 1.0), (0.0, width))
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Pixel length of a domain-sized span (independent of the range offset).
    #[inline]
    pub fn span(&self, len: f64) -> f64 {
        len / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}

/// Discrete bands of equal size, with inner/outer padding expressed as a
/// fraction of the step and centred alignment. A range given high-to-low
/// assigns the first index to the band nearest the high end.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
    reversed: bool,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        let reversed = range.1 < range.0;
        let (lo, hi) = if reversed { (range.1, range.0) } else { range };
        let n = count as f64;
        let step = (hi - lo) / (n - padding + 2.0 * padding).max(1.0);
        let start = lo + (hi - lo - step * (n - padding)) * 0.5;
        Self { count, start, step, bandwidth: step * (1.0 - padding), reversed }
    }

    pub fn len(&self) -> usize { self.count }
    pub fn is_empty(&self) -> bool { self.count == 0 }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }
    pub fn step(&self) -> f64 { self.step }

    /// Leading edge of band `index`, or `None` when out of range.
    pub fn band_start(&self, index: usize) -> Option<f64> {
        if index >= self.count { return None; }
        let slot = if self.reversed { self.count - 1 - index } else { index };
        Some(self.start + self.step * slot as f64)
    }
}
