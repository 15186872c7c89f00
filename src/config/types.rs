use std::time::Duration;

use clap::ValueEnum;

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cmd {
    Setting(Setting),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    Stick(StickSetting),
    Tap(TapSetting),
    Monitor(MonitorKind),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StickSetting {
    Travel(f64),
    Movable(bool),
    MovableBounds(Option<Rect>),
    HandleConstraint(Option<Rect>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapSetting {
    MaxDuration(Duration),
    MaxDistance(f64),
    DoubleTapReset(bool),
    DoubleTapInterval(Duration),
}

/// Which report shape the host wants from the stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MonitorKind {
    None,
    Polar,
    Xy,
}
