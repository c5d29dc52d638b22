use crate::foundation::core::Fps;
use crate::foundation::error::{QuizreelError, QuizreelResult};

/// Physical parameters of a spring-driven entrance animation.
///
/// Progress is the displacement of a damped harmonic oscillator released from rest at 0 and
/// pulled toward 1, sampled in seconds (`frame / fps`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Friction coefficient; higher values settle without overshoot.
    pub damping: f64,
    /// Spring constant; higher values rise faster.
    pub stiffness: f64,
    /// Oscillator mass.
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Clamp progress to at most 1 (suppresses overshoot of under-damped springs).
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn default_mass() -> f64 {
    1.0
}

/// Spring used by every scene entrance: over-damped, settles in roughly three seconds.
pub const DEFAULT_SPRING: SpringConfig = SpringConfig::new(100.0, 200.0);

impl Default for SpringConfig {
    fn default() -> Self {
        DEFAULT_SPRING
    }
}

impl SpringConfig {
    /// Unit-mass spring without overshoot clamping.
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }

    /// Reject non-finite or non-positive parameters.
    pub fn validate(&self) -> QuizreelResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(QuizreelError::animation(format!(
                    "spring {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Damping ratio ζ; `>= 1` means the curve never overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt()).max(1e-9)
    }
}

/// Spring progress at `relative_frame` frames after the animation is triggered.
///
/// Returns exactly `0.0` for `relative_frame <= 0` and approaches `1.0` as the frame grows.
/// Under-damped configurations may exceed `1.0` transiently unless
/// [`SpringConfig::overshoot_clamping`] is set.
pub fn spring(relative_frame: i64, fps: Fps, config: SpringConfig) -> f64 {
    if relative_frame <= 0 {
        return 0.0;
    }
    let t = fps.frames_to_secs(relative_frame);
    let x = step_response(t, config.stiffness, config.damping, config.mass);
    if config.overshoot_clamping {
        x.min(1.0)
    } else {
        x
    }
}

fn step_response(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    // x(0) = 0, v(0) = 0, target 1.
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return 0.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
