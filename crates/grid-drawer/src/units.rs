//! Physical to drawing-space unit conversion.
//!
//! Everything downstream of [`PatternConfig::layout`](crate::config::PatternConfig::layout)
//! works in drawing units. The scale is applied once per physical input and
//! never again.

/// Drawing units per millimetre (about 96 DPI / 25.4 mm per inch).
pub const MM_TO_UNITS: f64 = 3.78;

/// Convert millimetres to drawing units.
///
/// Zero and negative inputs convert like any other number; whether they make
/// sense is the caller's problem.
#[inline]
pub fn to_drawing_units(mm: f64) -> f64 {
    mm * MM_TO_UNITS
}

/// Convert drawing units back to millimetres (for reporting only).
#[inline]
pub fn to_millimeters(units: f64) -> f64 {
    units / MM_TO_UNITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_width_in_units() {
        assert!((to_drawing_units(210.0) - 793.8).abs() < 1e-9);
    }

    #[test]
    fn zero_and_negative_pass_through() {
        assert_eq!(to_drawing_units(0.0), 0.0);
        assert!((to_drawing_units(-10.0) + 37.8).abs() < 1e-9);
    }

    #[test]
    fn millimeters_inverts_scale() {
        let mm = 12.5;
        assert!((to_millimeters(to_drawing_units(mm)) - mm).abs() < 1e-12);
    }
}
