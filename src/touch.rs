use std::time::{Duration, Instant};

use cgmath::Point2;
use enum_map::Enum;

use crate::geometry::CoordinateSpace;

/// Host-assigned identifier of one finger on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum TouchPhase {
    Begin,
    Move,
    End,
    Cancel,
}

/// One lifecycle event delivered by the host surface, location in the shared space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub id: TouchId,
    pub location: Point2<f64>,
}

/// Upper bounds, both exclusive, for a touch to count as a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapThresholds {
    pub max_duration: Duration,
    /// Chebyshev distance between first and last location.
    pub max_distance: f64,
}

impl Default for TapThresholds {
    fn default() -> Self {
        Self {
            max_duration: Duration::from_millis(100),
            max_distance: 2.,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TouchSample {
    id: TouchId,
    begin_time: Instant,
    end_time: Instant,
    begin_location: Point2<f64>,
    end_location: Point2<f64>,
}

impl TouchSample {
    fn was_tap(&self, thresholds: &TapThresholds) -> bool {
        let duration = self.end_time.duration_since(self.begin_time);
        let distance = (self.begin_location.x - self.end_location.x)
            .abs()
            .max((self.begin_location.y - self.end_location.y).abs());
        duration < thresholds.max_duration && distance < thresholds.max_distance
    }
}

/// Outcome of a finished touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub was_tap: bool,
    pub duration: Duration,
}

/// Follows a single touch from begin to end or cancel.
///
/// The first touch observed owns the tracker until it is released; events for any
/// other touch id, and move/release events while idle, are ignored.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    sample: Option<TouchSample>,
    pub thresholds: TapThresholds,
}

impl TouchTracker {
    pub fn new(thresholds: TapThresholds) -> Self {
        Self {
            sample: None,
            thresholds,
        }
    }

    pub fn is_active(&self) -> bool {
        self.sample.is_some()
    }

    pub fn active_id(&self) -> Option<TouchId> {
        self.sample.map(|s| s.id)
    }

    /// Returns `false` if another touch is already being tracked.
    pub fn begin(&mut self, id: TouchId, location: Point2<f64>, now: Instant) -> bool {
        if let Some(active) = self.sample {
            log::debug!("ignoring touch {:?}, {:?} is active", id, active.id);
            return false;
        }
        self.sample = Some(TouchSample {
            id,
            begin_time: now,
            end_time: now,
            begin_location: location,
            end_location: location,
        });
        true
    }

    pub fn moved(&mut self, id: TouchId, location: Point2<f64>, now: Instant) -> bool {
        match self.sample {
            Some(ref mut sample) if sample.id == id => {
                sample.end_location = location;
                sample.end_time = now;
                true
            }
            _ => false,
        }
    }

    /// Ends or cancels the tracked touch and goes back to idle.
    pub fn release(&mut self, id: TouchId, location: Point2<f64>, now: Instant) -> Option<Release> {
        match self.sample {
            Some(mut sample) if sample.id == id => {
                sample.end_location = location;
                sample.end_time = now;
                self.sample = None;
                Some(Release {
                    was_tap: sample.was_tap(&self.thresholds),
                    duration: sample.end_time.duration_since(sample.begin_time),
                })
            }
            _ => None,
        }
    }

    /// Last known location of the active touch.
    pub fn location_in(&self, space: &impl CoordinateSpace) -> Option<Point2<f64>> {
        self.sample.map(|s| space.from_shared(s.end_location))
    }
}

/// Pairs consecutive taps released less than `interval` apart.
#[derive(Debug, Clone)]
pub struct DoubleTap {
    pub interval: Duration,
    last_tap: Option<Instant>,
}

impl DoubleTap {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tap: None,
        }
    }

    /// Registers a tap, returns `true` if it completes a double tap.
    pub fn tap(&mut self, now: Instant) -> bool {
        match self.last_tap.take() {
            Some(last) if now.duration_since(last) < self.interval => true,
            _ => {
                self.last_tap = Some(now);
                false
            }
        }
    }
}

impl Default for DoubleTap {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
