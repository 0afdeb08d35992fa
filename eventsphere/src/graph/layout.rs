//! Deterministic point placement on a sphere via the Fibonacci (Vogel
//! golden-angle) distribution: near-even coverage for any point count,
//! identical output for identical input.

/// Position of point `index` out of `count` on a sphere of `radius`
/// centered at the origin.
pub fn sphere_position(index: usize, count: usize, radius: f64) -> [f64; 3] {
    let phi = (1.0 - 2.0 * (index as f64 + 0.5) / count as f64).acos();
    let theta = std::f64::consts::PI * (1.0 + 5.0_f64.sqrt()) * index as f64;

    [
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    ]
}

/// Linear remap of `value` from the `from` interval onto `to`,
/// extrapolating outside it. Multiplying before dividing keeps the
/// interval endpoints exact.
pub fn remap(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    to.0 + (value - from.0) * (to.1 - to.0) / (from.1 - from.0)
}
