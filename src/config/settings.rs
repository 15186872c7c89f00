use std::time::Duration;

use crate::geometry::Rect;

use super::types::*;

#[derive(Debug, Clone)]
pub struct Settings {
    pub stick: StickSettings,
    pub tap: TapSettings,
    pub monitor: MonitorKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stick: StickSettings::default(),
            tap: TapSettings::default(),
            monitor: MonitorKind::None,
        }
    }
}

impl Settings {
    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::Stick(s) => self.stick.apply(s),
            Setting::Tap(s) => self.tap.apply(s),
            Setting::Monitor(m) => self.monitor = m,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct StickSettings {
    /// Handle travel relative to the base radius.
    pub travel: f64,
    pub movable: bool,
    /// Where the base center may go, in surface coordinates.
    pub movable_bounds: Option<Rect>,
    /// Where the handle center may go, in stick coordinates.
    pub handle_constraint: Option<Rect>,
}

impl Default for StickSettings {
    fn default() -> Self {
        Self {
            travel: 1.,
            movable: false,
            movable_bounds: None,
            handle_constraint: None,
        }
    }
}

impl StickSettings {
    fn apply(&mut self, setting: StickSetting) {
        match setting {
            StickSetting::Travel(t) => {
                if t <= 0. {
                    log::warn!("travel {} leaves no room for the handle, the stick will stay idle", t);
                }
                self.travel = t;
            }
            StickSetting::Movable(m) => self.movable = m,
            StickSetting::MovableBounds(b) => self.movable_bounds = b,
            StickSetting::HandleConstraint(c) => self.handle_constraint = c,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TapSettings {
    /// A tap must be released strictly before this.
    pub max_duration: Duration,
    /// A tap must move strictly less than this, on each axis.
    pub max_distance: f64,
    /// Double tap moves a dragged base back to where it started.
    pub double_tap_reset: bool,
    pub double_tap_interval: Duration,
}

impl Default for TapSettings {
    fn default() -> Self {
        Self {
            max_duration: Duration::from_millis(100),
            max_distance: 2.,
            double_tap_reset: true,
            double_tap_interval: Duration::from_millis(300),
        }
    }
}

impl TapSettings {
    fn apply(&mut self, setting: TapSetting) {
        match setting {
            TapSetting::MaxDuration(d) => self.max_duration = d,
            TapSetting::MaxDistance(d) => self.max_distance = d,
            TapSetting::DoubleTapReset(r) => self.double_tap_reset = r,
            TapSetting::DoubleTapInterval(i) => self.double_tap_interval = i,
        }
    }
}
