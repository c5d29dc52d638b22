/// Affine remap of `t` from `from = [a, b]` onto `to = [c, d]`.
///
/// No clamping: values outside `[a, b]` extrapolate past `[c, d]`, which is how an overshooting
/// spring slides an element past its target. `t == a` yields exactly `c` and `t == b` exactly
/// `d`. A degenerate input range (`a == b`) yields `c`.
pub fn remap(t: f64, from: [f64; 2], to: [f64; 2]) -> f64 {
    let [a, b] = from;
    let [c, d] = to;
    let span = b - a;
    if span == 0.0 {
        return c;
    }
    let u = (t - a) / span;
    // Blend form keeps both endpoints exact.
    (1.0 - u) * c + u * d
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
