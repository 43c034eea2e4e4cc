//! Widget configuration.

use crate::exit::ExitOutcome;

/// Number of equal bands the container is split into per axis; the outermost
/// band on each edge is the exit zone.
pub const SECTION_COUNT: f32 = 6.0;
pub const DURATION_FAST: u64 = 100;
pub const DURATION_SLOW: u64 = 200;
pub const ACCELERATE_FACTOR: f32 = 1.0;
pub const OVERSHOOT_TENSION: f32 = 1.5;

/// Reproductions of defects in the widget this one replaces.
///
/// All are off by default. Turn them on only where a host depends on the old
/// behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyQuirks {
    /// Vertical badge alpha is computed from the horizontal offset.
    pub vertical_alpha_uses_horizontal_offset: bool,
    /// A bottom exit notifies `on_swipe_top`.
    pub bottom_exit_reports_top: bool,
    /// Bottom boundary is `height * (n - 1/n)`, which lies far outside the
    /// container, so bottom exits never trigger.
    pub bottom_boundary_precedence_bug: bool,
}

impl LegacyQuirks {
    /// Every quirk enabled.
    pub fn parity() -> Self {
        Self {
            vertical_alpha_uses_horizontal_offset: true,
            bottom_exit_reports_top: true,
            bottom_boundary_precedence_bug: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    pub section_count: f32,
    /// Duration of the four directional exits.
    pub exit_duration_millis: u64,
    /// Duration of the snap back to the origin.
    pub reset_duration_millis: u64,
    pub accelerate_factor: f32,
    pub overshoot_tension: f32,
    pub quirks: LegacyQuirks,
}

impl SwipeConfig {
    pub fn with_section_count(mut self, section_count: f32) -> Self {
        self.section_count = section_count;
        self
    }

    pub fn with_exit_duration(mut self, millis: u64) -> Self {
        self.exit_duration_millis = millis;
        self
    }

    pub fn with_reset_duration(mut self, millis: u64) -> Self {
        self.reset_duration_millis = millis;
        self
    }

    pub fn with_accelerate_factor(mut self, factor: f32) -> Self {
        self.accelerate_factor = factor;
        self
    }

    pub fn with_overshoot_tension(mut self, tension: f32) -> Self {
        self.overshoot_tension = tension;
        self
    }

    pub fn with_quirks(mut self, quirks: LegacyQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn duration_for(&self, outcome: ExitOutcome) -> u64 {
        if outcome.is_exit() {
            self.exit_duration_millis
        } else {
            self.reset_duration_millis
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written as negated comparisons so NaN is rejected too.
        if !(self.section_count >= 2.0) {
            return Err(ConfigError::SectionCount {
                value: self.section_count,
            });
        }
        if self.exit_duration_millis == 0 {
            return Err(ConfigError::ZeroDuration { which: "exit" });
        }
        if self.reset_duration_millis == 0 {
            return Err(ConfigError::ZeroDuration { which: "reset" });
        }
        if !(self.accelerate_factor > 0.0) {
            return Err(ConfigError::AccelerateFactor {
                value: self.accelerate_factor,
            });
        }
        if !(self.overshoot_tension >= 0.0) {
            return Err(ConfigError::OvershootTension {
                value: self.overshoot_tension,
            });
        }
        Ok(())
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            section_count: SECTION_COUNT,
            exit_duration_millis: DURATION_FAST,
            reset_duration_millis: DURATION_SLOW,
            accelerate_factor: ACCELERATE_FACTOR,
            overshoot_tension: OVERSHOOT_TENSION,
            quirks: LegacyQuirks::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    SectionCount { value: f32 },
    ZeroDuration { which: &'static str },
    AccelerateFactor { value: f32 },
    OvershootTension { value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SectionCount { value } => {
                write!(f, "section count must be at least 2, got {value}")
            }
            ConfigError::ZeroDuration { which } => {
                write!(f, "{which} duration must be non-zero")
            }
            ConfigError::AccelerateFactor { value } => {
                write!(f, "accelerate factor must be positive, got {value}")
            }
            ConfigError::OvershootTension { value } => {
                write!(f, "overshoot tension must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
