// File: crates/scatter-core/src/scale.rs
// Summary: Linear and logarithmic scales mapping a domain interval onto a range interval.

use crate::error::ScaleError;
use crate::grid::ticks;

/// Common operations shared by every scale kind.
///
/// Mappings are unclamped: values outside the domain extrapolate with the
/// same function.
pub trait Scale {
    /// Map a domain value to the range.
    fn forward(&self, v: f64) -> f64;
    /// Map a range value back to the domain.
    fn invert(&self, r: f64) -> f64;
    /// Round domain values suitable for tick marks, roughly `count` of them.
    fn ticks(&self, count: usize) -> Vec<f64>;
    fn domain(&self) -> [f64; 2];
    fn range(&self) -> [f64; 2];
}

/// Fraction of the way `v` lies from `a` to `b`; a zero-width interval sits at the midpoint.
#[inline]
fn normalize(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span == 0.0 { 0.5 } else { (v - a) / span }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Range proportional to domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }
}

impl Scale for LinearScale {
    #[inline]
    fn forward(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        lerp(r0, r1, normalize(d0, d1, v))
    }
    #[inline]
    fn invert(&self, r: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        lerp(d0, d1, normalize(r0, r1, r))
    }
    fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain[0], self.domain[1], count as f64)
    }
    fn domain(&self) -> [f64; 2] { self.domain }
    fn range(&self) -> [f64; 2] { self.range }
}

/// Range proportional to the logarithm of the domain value.
///
/// Interpolation happens in natural-log space, so the base only affects
/// which values `ticks` picks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogScale {
    domain: [f64; 2],
    range: [f64; 2],
    base: f64,
    // cached ln of the domain endpoints
    ln_domain: [f64; 2],
}

impl LogScale {
    /// Build a log scale. Both domain endpoints must be strictly positive.
    pub fn new(base: f64, domain: [f64; 2], range: [f64; 2]) -> Result<Self, ScaleError> {
        if !(base > 0.0) || base == 1.0 || !base.is_finite() {
            return Err(ScaleError::InvalidBase(base));
        }
        let [d0, d1] = domain;
        if !(d0 > 0.0 && d1 > 0.0) {
            return Err(ScaleError::NonPositiveLogDomain(d0, d1));
        }
        Ok(Self { domain, range, base, ln_domain: [d0.ln(), d1.ln()] })
    }

    pub fn base(&self) -> f64 { self.base }

    fn logs(&self, v: f64) -> f64 {
        if self.base == 2.0 {
            v.log2()
        } else if self.base == 10.0 {
            v.log10()
        } else if self.base == std::f64::consts::E {
            v.ln()
        } else {
            v.ln() / self.base.ln()
        }
    }

    fn pows(&self, e: f64) -> f64 {
        if self.base == std::f64::consts::E { e.exp() } else { self.base.powf(e) }
    }
}

impl Scale for LogScale {
    #[inline]
    fn forward(&self, v: f64) -> f64 {
        let [l0, l1] = self.ln_domain;
        let [r0, r1] = self.range;
        lerp(r0, r1, normalize(l0, l1, v.ln()))
    }
    #[inline]
    fn invert(&self, r: f64) -> f64 {
        let [l0, l1] = self.ln_domain;
        let [r0, r1] = self.range;
        lerp(l0, l1, normalize(r0, r1, r)).exp()
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        let [mut u, mut v] = self.domain;
        let reverse = v < u;
        if reverse { std::mem::swap(&mut u, &mut v); }

        let n = count as f64;
        let mut i = self.logs(u);
        let mut j = self.logs(v);

        let mut out = Vec::new();
        if self.base.fract() == 0.0 && j - i < n {
            // Whole powers of the base, subdivided by the base's integer multiples.
            i = i.floor();
            j = j.ceil();
            let mut e = i;
            while e <= j {
                let mut k = 1.0;
                while k < self.base {
                    let t = if e < 0.0 { k / self.pows(-e) } else { k * self.pows(e) };
                    k += 1.0;
                    if t < u { continue; }
                    if t > v { break; }
                    out.push(t);
                }
                e += 1.0;
            }
            if (out.len() as f64) * 2.0 < n {
                out = ticks(u, v, n);
            }
        } else {
            out = ticks(i, j, (j - i).min(n)).into_iter().map(|t| self.pows(t)).collect();
        }

        if reverse { out.reverse(); }
        out
    }

    fn domain(&self) -> [f64; 2] { self.domain }
    fn range(&self) -> [f64; 2] { self.range }
}
