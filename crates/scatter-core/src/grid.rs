// File: crates/scatter-core/src/grid.rs
// Summary: Tick layout helpers producing "nice" round values across an interval.
// Notes:
// - Steps are 1, 2 or 5 times a power of ten, picked so roughly `count` values
//   cover [start, stop]. Every value returned lies inside the interval.
// - Negative powers are emitted as `i / inc` rather than `i * step` so that
//   values like 0.3 come out exact instead of 0.30000000000000004.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Round halves towards +inf; `f64::round` would send -2.5 to -3.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Integer tick indices `(i1, i2)` and the increment between them.
///
/// A negative increment means "divide by `-inc`" (sub-unit steps).
pub fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powi(power as i32);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powi(-power as i32) / factor;
        i1 = round_half_up(start * scale);
        i2 = round_half_up(stop * scale);
        if i1 / scale < start { i1 += 1.0; }
        if i2 / scale > stop { i2 -= 1.0; }
        inc = -scale;
    } else {
        inc = 10f64.powi(power as i32) * factor;
        i1 = round_half_up(start / inc);
        i2 = round_half_up(stop / inc);
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice tick values between `start` and `stop`, approximately `count` of them.
///
/// Returns ticks in the same direction as the input (descending when
/// `stop < start`). A non-positive or NaN count yields no ticks.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) { return Vec::new(); }
    if start == stop { return vec![start]; }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    if !(i2 >= i1) { return Vec::new(); }

    let n = (i2 - i1 + 1.0) as usize;
    let at = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    if reverse {
        (0..n).map(|k| at(i2 - k as f64)).collect()
    } else {
        (0..n).map(|k| at(i1 + k as f64)).collect()
    }
}
