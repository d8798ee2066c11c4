use std::f64::consts::{FRAC_PI_2, TAU};

/// Canvas center and ring radius used for parsed graphs.
pub const CENTER: (f64, f64) = (400.0, 300.0);
pub const RADIUS: f64 = 200.0;

/// Evenly spaced points on a circle, starting at twelve o'clock and going
/// clockwise. A single node sits in the center.
pub fn circle(count: usize) -> Vec<(f64, f64)> {
    if count == 1 {
        return vec![CENTER];
    }
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64 - FRAC_PI_2;
            (CENTER.0 + RADIUS * angle.cos(), CENTER.1 + RADIUS * angle.sin())
        })
        .collect()
}
