//=========================================================================
// Input Tuning
//=========================================================================
//
// Thresholds used by the frame translator.
//
// Defaults match the feel of the original touch controls: a 0.1 joystick
// deadzone, half-deflection thresholds for jump/crouch and an integer
// horizontal speed scale of 0..=10.
//
//=========================================================================

//=== InputTuning =========================================================

/// Translator thresholds.
///
/// # Default Values
///
/// - **deadzone**: 0.1
/// - **jump_threshold**: -0.5 (stick pushed up)
/// - **crouch_threshold**: 0.5 (stick pushed down)
/// - **speed_scale**: 10
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputTuning {
    pub(crate) deadzone: f32,
    pub(crate) jump_threshold: f32,
    pub(crate) crouch_threshold: f32,
    pub(crate) speed_scale: f32,
}

impl InputTuning {
    pub const DEFAULT_DEADZONE: f32 = 0.1;
    pub const DEFAULT_JUMP_THRESHOLD: f32 = -0.5;
    pub const DEFAULT_CROUCH_THRESHOLD: f32 = 0.5;
    pub const DEFAULT_SPEED_SCALE: f32 = 10.0;

    /// Creates tuning with the default thresholds.
    pub const fn new() -> Self {
        Self {
            deadzone: Self::DEFAULT_DEADZONE,
            jump_threshold: Self::DEFAULT_JUMP_THRESHOLD,
            crouch_threshold: Self::DEFAULT_CROUCH_THRESHOLD,
            speed_scale: Self::DEFAULT_SPEED_SCALE,
        }
    }

    /// Sets the per-axis deadzone.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 <= deadzone < 1.0`.
    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        assert!(
            (0.0..1.0).contains(&deadzone),
            "Deadzone must be in [0, 1), got {}",
            deadzone
        );
        self.deadzone = deadzone;
        self
    }

    /// Sets the stick-up value below which a jump is issued.
    ///
    /// # Panics
    ///
    /// Panics unless `-1.0 <= threshold <= 0.0`.
    pub fn with_jump_threshold(mut self, threshold: f32) -> Self {
        assert!(
            (-1.0..=0.0).contains(&threshold),
            "Jump threshold must be in [-1, 0], got {}",
            threshold
        );
        self.jump_threshold = threshold;
        self
    }

    /// Sets the stick-down value above which a crouch is issued.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 <= threshold <= 1.0`.
    pub fn with_crouch_threshold(mut self, threshold: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "Crouch threshold must be in [0, 1], got {}",
            threshold
        );
        self.crouch_threshold = threshold;
        self
    }

    /// Sets the multiplier turning stick deflection into move units.
    ///
    /// # Panics
    ///
    /// Panics if `scale <= 0.0`.
    pub fn with_speed_scale(mut self, scale: f32) -> Self {
        assert!(scale > 0.0, "Speed scale must be positive, got {}", scale);
        self.speed_scale = scale;
        self
    }

    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    pub fn jump_threshold(&self) -> f32 {
        self.jump_threshold
    }

    pub fn crouch_threshold(&self) -> f32 {
        self.crouch_threshold
    }

    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }
}

impl Default for InputTuning {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let tuning = InputTuning::default();
        assert_eq!(tuning.deadzone(), 0.1);
        assert_eq!(tuning.jump_threshold(), -0.5);
        assert_eq!(tuning.crouch_threshold(), 0.5);
        assert_eq!(tuning.speed_scale(), 10.0);
    }

    #[test]
    fn builder_chaining() {
        let tuning = InputTuning::new()
            .with_deadzone(0.2)
            .with_jump_threshold(-0.7)
            .with_crouch_threshold(0.6)
            .with_speed_scale(4.0);

        assert_eq!(tuning.deadzone(), 0.2);
        assert_eq!(tuning.jump_threshold(), -0.7);
        assert_eq!(tuning.crouch_threshold(), 0.6);
        assert_eq!(tuning.speed_scale(), 4.0);
    }

    #[test]
    #[should_panic(expected = "Deadzone must be in [0, 1)")]
    fn deadzone_rejects_one() {
        InputTuning::new().with_deadzone(1.0);
    }

    #[test]
    #[should_panic(expected = "Jump threshold must be in [-1, 0]")]
    fn jump_threshold_rejects_positive() {
        InputTuning::new().with_jump_threshold(0.5);
    }

    #[test]
    #[should_panic(expected = "Crouch threshold must be in [0, 1]")]
    fn crouch_threshold_rejects_negative() {
        InputTuning::new().with_crouch_threshold(-0.5);
    }

    #[test]
    #[should_panic(expected = "Speed scale must be positive")]
    fn speed_scale_rejects_zero() {
        InputTuning::new().with_speed_scale(0.0);
    }
}
