//! Band and linear scales.
//!
//! Both scale types are immutable values: builders return new values and
//! mapping never mutates anything, so the same inputs always map identically.

use std::collections::HashMap;

/// Default inner padding between bars, as a fraction of the band step.
pub const DEFAULT_PADDING: f64 = 0.4;
/// Upper-bound headroom applied over the largest observed value.
pub const HEADROOM: f64 = 1.1;
/// Tick count used when "nicing" a linear domain and for grid rows.
pub const DEFAULT_TICK_COUNT: usize = 10;

// Padding must stay below 1 or the bandwidth collapses to zero.
const MAX_PADDING: f64 = 0.999;

/// A discrete band scale: category labels → non-overlapping pixel intervals.
///
/// With inner padding `p` and no outer padding the band width is
/// `span / (n + (n - 1) * p / (1 - p))`, i.e. gaps are `p` of a step and
/// every gap has the same width. Duplicate labels share one band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
}

#[derive(Clone, Copy, Debug)]
struct BandLayout {
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Creates a band scale over `labels` (first occurrence wins) mapped into `range`.
    pub fn new<I, S>(labels: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for label in labels {
            let label = label.into();
            if !index.contains_key(&label) {
                index.insert(label.clone(), domain.len());
                domain.push(label);
            }
        }
        Self {
            domain,
            index,
            range,
            padding_inner: DEFAULT_PADDING,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
        }
    }

    /// Sets the inner padding fraction, clamped into `[0, 1)`.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_inner = clamp_padding(padding);
        self
    }

    /// Sets the outer padding (before the first and after the last band) in step units.
    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
        self
    }

    /// Sets how leftover space is distributed: 0 = all after, 1 = all before.
    pub fn with_align(mut self, align: f64) -> Self {
        self.align = if align.is_finite() { align.clamp(0.0, 1.0) } else { 0.5 };
        self
    }

    /// Rounds step, offset and band width to whole pixels.
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn padding(&self) -> f64 {
        self.padding_inner
    }

    fn layout(&self) -> BandLayout {
        let (r0, r1) = self.range;
        let lo = r0.min(r1);
        if self.domain.is_empty() {
            return BandLayout {
                start: lo,
                step: 0.0,
                bandwidth: 0.0,
            };
        }
        let n = self.domain.len() as f64;
        let pi = self.padding_inner;
        let span = (r1 - r0).abs();
        let mut step = span / (n - pi + 2.0 * self.padding_outer).max(1.0);
        if self.round {
            step = step.floor();
        }
        let mut start = lo + (span - step * (n - pi)) * self.align;
        let mut bandwidth = step * (1.0 - pi);
        if self.round {
            start = start.round();
            bandwidth = bandwidth.round();
        }
        BandLayout {
            start,
            step,
            bandwidth,
        }
    }

    /// Width of every band; zero for an empty domain.
    pub fn bandwidth(&self) -> f64 {
        self.layout().bandwidth
    }

    /// Distance between the starts of two adjacent bands.
    pub fn step(&self) -> f64 {
        self.layout().step
    }

    /// Start of the band at domain position `index`.
    pub fn position(&self, index: usize) -> Option<f64> {
        if index >= self.domain.len() {
            return None;
        }
        let layout = self.layout();
        // A reversed range lays bands out from the far end.
        let slot = if self.range.1 < self.range.0 {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Some(layout.start + layout.step * slot as f64)
    }

    /// Start of the band for `label`, or `None` if the label is not in the domain.
    pub fn map(&self, label: &str) -> Option<f64> {
        self.index.get(label).and_then(|&i| self.position(i))
    }
}

fn clamp_padding(p: f64) -> f64 {
    if p.is_finite() { p.clamp(0.0, MAX_PADDING) } else { DEFAULT_PADDING }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Builds the value axis for a set of observations: domain `[0, max * 1.1]`,
    /// then optionally niced (headroom is applied before nicing).
    pub fn for_values<I>(values: I, range: (f64, f64), nice: bool) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let max = values.into_iter().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.max(v)))
        });
        let scale = Self::new((0.0, max.unwrap_or(0.0) * HEADROOM), range);
        if nice { scale.nice(DEFAULT_TICK_COUNT) } else { scale }
    }

    /// Maps a domain value to the range. A zero-width domain maps everything to `range.1`.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 || !denom.is_finite() {
            return r1;
        }
        r0 + (v - d0) / denom * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Extends the domain outward to multiples of a 1/2/5×10ᵏ tick step.
    pub fn nice(self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let reversed = d1 < d0;
        let (mut lo, mut hi) = if reversed { (d1, d0) } else { (d0, d1) };
        let mut prev = None;
        for _ in 0..10 {
            let step = tick_step(lo, hi, count);
            if step <= 0.0 || prev == Some(step) {
                break;
            }
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
            prev = Some(step);
        }
        let domain = if reversed { (hi, lo) } else { (lo, hi) };
        Self::new(domain, self.range)
    }

    /// Evenly spaced "nice" values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        if count == 0 || !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let step = tick_step(lo, hi, count);
        if step <= 0.0 {
            return Vec::new();
        }
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Tick increment for roughly `count` ticks over `[lo, hi]`.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10_f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bandwidth_matches_closed_form() {
        let s = BandScale::new(["a", "b", "c", "d", "e"], (0.0, 260.0));
        let p = DEFAULT_PADDING;
        let expected = 260.0 / (5.0 + 4.0 * p / (1.0 - p));
        assert!(close(s.bandwidth(), expected));
        assert!(close(s.map("a").unwrap(), 0.0));
        let last_end = s.map("e").unwrap() + s.bandwidth();
        assert!(close(last_end, 260.0));
    }

    #[test]
    fn single_band_is_centered() {
        let s = BandScale::new(["only"], (0.0, 100.0));
        assert!(close(s.bandwidth(), 60.0));
        assert!(close(s.map("only").unwrap(), 20.0));
    }

    #[test]
    fn rounding_produces_whole_pixels() {
        let s = BandScale::new(["a", "b", "c"], (0.0, 101.0)).with_round(true);
        assert_eq!(s.step().fract(), 0.0);
        assert_eq!(s.bandwidth().fract(), 0.0);
        assert_eq!(s.map("b").unwrap().fract(), 0.0);
    }

    #[test]
    fn reversed_range_flips_order() {
        let s = BandScale::new(["a", "b"], (100.0, 0.0)).with_padding(0.0);
        assert!(close(s.map("a").unwrap(), 50.0));
        assert!(close(s.map("b").unwrap(), 0.0));
    }

    #[test]
    fn padding_is_clamped() {
        let s = BandScale::new(["a"], (0.0, 10.0)).with_padding(1.5);
        assert!(s.padding() < 1.0);
        let s = BandScale::new(["a"], (0.0, 10.0)).with_padding(-1.0);
        assert_eq!(s.padding(), 0.0);
    }

    #[test]
    fn nice_rounds_up_to_tick_step() {
        let s = LinearScale::new((0.0, 132.0), (260.0, 0.0)).nice(10);
        assert_eq!(s.domain(), (0.0, 140.0));
        let s = LinearScale::new((0.0, 0.97), (1.0, 0.0)).nice(10);
        assert!(close(s.domain().1, 1.0));
    }

    #[test]
    fn ticks_cover_domain() {
        let s = LinearScale::new((0.0, 140.0), (260.0, 0.0));
        let t = s.ticks(10);
        assert_eq!(t.first(), Some(&0.0));
        assert_eq!(t.last(), Some(&140.0));
        assert_eq!(t.len(), 15);
    }
}
