use value_slider_ui::Visibility;

/// Relative tolerance used when checking that a step divides the range.
const DIVISIBILITY_EPSILON: f64 = 1e-9;

/// Absorbs representation error before truncating, so `0.57` maps to 57.
const PERCENT_EPSILON: f64 = 1e-9;

/// Most decimal places a grid point is rounded to.
const MAX_GRID_DECIMALS: usize = 15;

/// Snaps `value` to the step grid anchored at `min`.
///
/// Rounds to the nearest step; a remainder of exactly half a step rounds up.
/// The result is `min + k * step`, rounded to the decimal precision of `min`
/// and `step` so that fractional grids stay free of binary drift.
pub(super) fn calculate_steps(value: f64, min: f64, step: f64) -> f64 {
    let offset = value - min;
    let whole = (offset / step).floor();
    let remainder = offset - whole * step;
    let steps = if remainder >= step / 2.0 {
        whole + 1.0
    } else {
        whole
    };
    round_to_grid(min + steps * step, min, step)
}

/// Number of digits after the decimal point in the shortest representation
/// of `value`.
fn decimal_places(value: f64) -> usize {
    value
        .abs()
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
        .min(MAX_GRID_DECIMALS)
}

fn round_to_grid(value: f64, min: f64, step: f64) -> f64 {
    let decimals = decimal_places(min).max(decimal_places(step));
    if decimals == 0 {
        return value.round();
    }
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Clamps `value` into `[lower, upper]`.
pub(super) fn clip_value(value: f64, lower: f64, upper: f64) -> f64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Clips into the bounds, then quantizes. Both bounds must already lie on the
/// grid, so the snapped value cannot leave them; the final clamp only absorbs
/// floating point drift.
pub(super) fn clip_and_quantize(value: f64, lower: f64, upper: f64, min: f64, step: f64) -> f64 {
    let clipped = clip_value(value, lower, upper);
    clip_value(calculate_steps(clipped, min, step), lower, upper)
}

/// Maps a fractional track position to a raw value.
pub(super) fn percent_to_value(percent: f64, min: f64, max: f64) -> f64 {
    percent * (max - min) + min
}

/// Maps a value to its fractional track position.
pub(super) fn value_to_fraction(value: f64, min: f64, max: f64) -> f64 {
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Truncates a fraction to an integer percent in `0..=100`.
pub(super) fn fraction_to_percent(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 100.0 + PERCENT_EPSILON)
        .trunc()
        .min(100.0) as u8
}

/// Returns `true` if `step` fits a whole number of times into `range`.
pub(super) fn step_divides(range: f64, step: f64) -> bool {
    let steps = range / step;
    (steps - steps.round()).abs() <= DIVISIBILITY_EPSILON * steps.abs().max(1.0)
}

/// Reads the leading integer of a form string the way a lenient HTML form
/// parser would: optional whitespace and sign, then digits. Anything after
/// the digits is ignored.
pub(super) fn parse_leading_int(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<f64>().ok().map(|v| sign * v)
}

/// Mutable numeric state of a slider.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SliderState {
    pub(crate) right_value: f64,
    pub(crate) left_value: Option<f64>,
    pub(crate) buffered: Option<u8>,
    pub(crate) hover_position: Option<f64>,
    pub(crate) visibility: Visibility,
}
