pub const FEET_PER_MILE: f64 = 5_280.0;

/// Human-readable distance: whole feet under 1000 ft, miles with two
/// decimals under 10 mi, whole miles beyond. Presentation only; recomputed
/// on demand from the stored distance.
pub fn format_feet(feet: f64) -> String {
    if feet < 1_000.0 {
        return format!("{} ft", feet.round() as i64);
    }
    let miles = feet / FEET_PER_MILE;
    if miles < 10.0 {
        format!("{miles:.2} mi")
    } else {
        format!("{} mi", miles.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_distances_render_as_whole_feet() {
        assert_eq!(format_feet(500.0), "500 ft");
        assert_eq!(format_feet(0.4), "0 ft");
        assert_eq!(format_feet(999.4), "999 ft");
    }

    #[test]
    fn mid_distances_render_as_fractional_miles() {
        assert_eq!(format_feet(5_280.0), "1.00 mi");
        assert_eq!(format_feet(1_320.0), "0.25 mi");
        assert_eq!(format_feet(13_200.0), "2.50 mi");
    }

    #[test]
    fn long_distances_render_as_whole_miles() {
        assert_eq!(format_feet(52_800.0), "10 mi");
        assert_eq!(format_feet(60_000.0), "11 mi");
    }
}
