//! Value <-> position math for [`GradientSlider`](super::GradientSlider).
//!
//! Everything here is pure so it can be exercised without a renderer.

use std::ops::RangeInclusive;

/// How a pointer proportion along the usable width is turned into a value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mapping {
    /// `lower + proportion * (upper - lower)`.
    #[default]
    Affine,
    /// `proportion * ((upper - lower) + lower)`.
    ///
    /// Only lines up with [`Mapping::Affine`] for ranges starting near zero.
    /// Kept for callers that need the exact numbers older builds produced.
    Legacy,
}

/// Returns `range` with its bounds in ascending order.
pub fn normalize(range: RangeInclusive<i32>) -> RangeInclusive<i32> {
    let (lower, upper) = range.into_inner();
    if lower <= upper {
        lower..=upper
    } else {
        upper..=lower
    }
}

pub fn clamp(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

/// Normalized position of `value` within `range`.
///
/// The value is clamped first so the result always lies in `[0, 1]`. A range with
/// a single value maps to `0.0`.
pub fn fraction(value: i32, range: &RangeInclusive<i32>) -> f64 {
    let (lower, upper) = (*range.start(), *range.end());
    if upper <= lower {
        return 0.0;
    }

    let value = clamp(value, range);
    (f64::from(value) - f64::from(lower)) / (f64::from(upper) - f64::from(lower))
}

/// Horizontal travel available to the thumb.
pub fn usable_width(width: f32, thumb_diameter: f32) -> f32 {
    width - thumb_diameter
}

/// Offset of the thumb's left edge from the control's left edge.
pub fn thumb_offset(
    value: i32,
    range: &RangeInclusive<i32>,
    width: f32,
    thumb_diameter: f32,
) -> f32 {
    let usable = usable_width(width, thumb_diameter).max(0.0);
    usable * fraction(value, range) as f32
}

/// Maps a drag position to a value in `range`.
///
/// `drag_x` is relative to the control's left edge and is not clamped, so positions
/// past either end of the track saturate at the bounds. Returns `None` when no
/// meaningful value can be computed (no usable width, non-finite input); callers keep
/// their previous value in that case.
pub fn value_at(
    drag_x: f32,
    usable_width: f32,
    range: &RangeInclusive<i32>,
    mapping: Mapping,
) -> Option<i32> {
    if !drag_x.is_finite() || !usable_width.is_finite() || usable_width <= 0.0 {
        return None;
    }

    let lower = f64::from(*range.start());
    let upper = f64::from(*range.end());
    let proportion = f64::from(drag_x) / f64::from(usable_width);

    let raw = match mapping {
        Mapping::Affine => lower + proportion * (upper - lower),
        Mapping::Legacy => proportion * ((upper - lower) + lower),
    };

    if !raw.is_finite() {
        return None;
    }

    Some(raw.trunc().clamp(lower, upper) as i32)
}

/// Moves `value` by `delta`, saturating at the bounds of `range`.
pub fn step(value: i32, delta: i32, range: &RangeInclusive<i32>) -> i32 {
    clamp(value.saturating_add(delta), range)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: RangeInclusive<i32> = 1..=100;

    #[test]
    fn fraction_stays_in_unit_interval() {
        for value in RANGE {
            let f = fraction(value, &RANGE);
            assert!((0.0..=1.0).contains(&f), "{value} -> {f}");
        }
        assert_eq!(fraction(1, &RANGE), 0.0);
        assert_eq!(fraction(100, &RANGE), 1.0);
    }

    #[test]
    fn fraction_of_degenerate_range_is_zero() {
        assert_eq!(fraction(5, &(5..=5)), 0.0);
    }

    #[test]
    fn drag_across_default_range() {
        assert_eq!(value_at(0.0, 300.0, &RANGE, Mapping::Affine), Some(1));
        assert_eq!(value_at(150.0, 300.0, &RANGE, Mapping::Affine), Some(50));
        assert_eq!(value_at(300.0, 300.0, &RANGE, Mapping::Affine), Some(100));
    }

    #[test]
    fn drag_past_either_end_is_clamped() {
        for drag_x in [-1000.0, -1.0, 301.0, 5000.0, f32::MAX] {
            let value = value_at(drag_x, 300.0, &RANGE, Mapping::Affine).unwrap();
            assert!(RANGE.contains(&value), "{drag_x} -> {value}");
        }
        assert_eq!(value_at(-40.0, 300.0, &RANGE, Mapping::Affine), Some(1));
        assert_eq!(value_at(900.0, 300.0, &RANGE, Mapping::Affine), Some(100));
    }

    #[test]
    fn every_pixel_lands_in_range() {
        let range = -7..=13;
        for px in -50..350 {
            for mapping in [Mapping::Affine, Mapping::Legacy] {
                let value = value_at(px as f32, 300.0, &range, mapping).unwrap();
                assert!(range.contains(&value), "{px} {mapping:?} -> {value}");
            }
        }
    }

    #[test]
    fn same_position_twice_gives_same_value() {
        let first = value_at(123.4, 256.0, &RANGE, Mapping::Affine);
        let second = value_at(123.4, 256.0, &RANGE, Mapping::Affine);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_usable_width_holds_value() {
        let width = 40.0;
        let usable = usable_width(width, 40.0);
        assert_eq!(value_at(10.0, usable, &RANGE, Mapping::Affine), None);
        assert_eq!(value_at(10.0, -4.0, &RANGE, Mapping::Affine), None);
    }

    #[test]
    fn non_finite_drag_holds_value() {
        assert_eq!(value_at(f32::NAN, 300.0, &RANGE, Mapping::Affine), None);
        assert_eq!(value_at(f32::INFINITY, 300.0, &RANGE, Mapping::Affine), None);
    }

    #[test]
    fn affine_mapping_honours_lower_bound() {
        let range = 10..=20;
        assert_eq!(value_at(150.0, 300.0, &range, Mapping::Affine), Some(15));
        assert_eq!(value_at(0.0, 300.0, &range, Mapping::Affine), Some(10));
        assert_eq!(value_at(300.0, 300.0, &range, Mapping::Affine), Some(20));
    }

    #[test]
    fn legacy_mapping_reproduces_old_output() {
        let range = 10..=20;
        // 0.5 * ((20 - 10) + 10) = 10
        assert_eq!(value_at(150.0, 300.0, &range, Mapping::Legacy), Some(10));
        // 0.75 * 20 = 15, where the affine mapping gives 17
        assert_eq!(value_at(225.0, 300.0, &range, Mapping::Legacy), Some(15));
        assert_eq!(value_at(225.0, 300.0, &range, Mapping::Affine), Some(17));
    }

    #[test]
    fn thumb_offset_tracks_fraction() {
        assert_eq!(thumb_offset(1, &RANGE, 340.0, 40.0), 0.0);
        assert_eq!(thumb_offset(100, &RANGE, 340.0, 40.0), 300.0);
        assert_eq!(thumb_offset(50, &RANGE, 0.0, 40.0), 0.0);
    }

    #[test]
    fn offset_then_drag_returns_the_value() {
        let (width, thumb) = (340.0, 40.0);
        for value in RANGE {
            let x = thumb_offset(value, &RANGE, width, thumb);
            // nudge past the pixel so truncation doesn't round down a step
            let back = value_at(x + 0.01, usable_width(width, thumb), &RANGE, Mapping::Affine);
            assert_eq!(back, Some(value));
        }
    }

    #[test]
    fn reversed_range_is_normalized() {
        assert_eq!(normalize(20..=10), 10..=20);
        assert_eq!(normalize(1..=100), 1..=100);
    }

    #[test]
    fn step_saturates() {
        assert_eq!(step(50, 1, &RANGE), 51);
        assert_eq!(step(100, 1, &RANGE), 100);
        assert_eq!(step(1, -1, &RANGE), 1);
        assert_eq!(step(i32::MAX, 1, &(i32::MIN..=i32::MAX)), i32::MAX);
    }
}
