//! Hardcoded platform parameters

use crate::parameters::Parameters;

impl Parameters {
    /// Reference platform: base points at 15, 105, 135, 225, 255 and 345 degrees,
    /// platform points at 45, 75, 165, 195, 285 and 315 degrees, both on radius 50.
    pub fn reference() -> Self {
        Parameters {
            base_angles: [15.0, 105.0, 135.0, 225.0, 255.0, 345.0],
            base_radius: 50.0,
            base_height: 0.0,
            platform_angles: [45.0, 75.0, 165.0, 195.0, 285.0, 315.0],
            platform_radius: 50.0,
            platform_height: 0.0,
        }
    }

    /// The common hexapod layout: base points in three pairs centered at 0, 120 and 240
    /// degrees, platform points in three pairs centered at 60, 180 and 300 degrees.
    /// `base_spread` and `platform_spread` are the angular distances (degrees) between
    /// the two points of a pair and are expected to be below 120. Angles are listed in
    /// ascending order within [0, 360).
    pub fn symmetric(base_radius: f64, base_spread: f64, platform_radius: f64, platform_spread: f64) -> Self {
        Parameters {
            base_angles: paired_angles(0.0, base_spread),
            base_radius,
            base_height: 0.0,
            platform_angles: paired_angles(60.0, platform_spread),
            platform_radius,
            platform_height: 0.0,
        }
    }
}

fn paired_angles(first_center: f64, spread: f64) -> [f64; 6] {
    let mut angles: [f64; 6] = std::array::from_fn(|i| {
        let center = first_center + 120.0 * (i / 2) as f64;
        let side = if i % 2 == 0 { -0.5 } else { 0.5 };
        (center + side * spread).rem_euclid(360.0)
    });
    angles.sort_by(|a, b| a.total_cmp(b));
    angles
}
