use std::fmt;

use cgmath::{vec2, Angle, Deg, Rad, Vector2};

/// Stick position as a compass angle and a displacement.
///
/// `angle` is 0° up (north), 90° right (east), growing clockwise. `displacement` is the distance from the base center over the stick
/// radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarReport {
    pub angle: Deg<f64>,
    pub displacement: f64,
}

/// Stick position as offsets from the base center, in stick radii.
///
/// Positive `y` means the handle is pushed up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyReport {
    pub x: f64,
    pub y: f64,
}

impl PolarReport {
    pub fn zero() -> Self {
        Self {
            angle: Deg(0.),
            displacement: 0.,
        }
    }

    pub fn to_xy(self) -> XyReport {
        let Rad(rad) = Rad::from(self.angle);
        XyReport {
            x: rad.sin() * self.displacement,
            y: rad.cos() * self.displacement,
        }
    }
}

impl XyReport {
    pub fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    pub fn to_polar(self) -> PolarReport {
        let displacement = (self.x * self.x + self.y * self.y).sqrt();
        if displacement == 0. {
            return PolarReport::zero();
        }
        PolarReport {
            angle: compass(vec2(self.x, -self.y)),
            displacement,
        }
    }
}

/// Compass bearing of an offset in screen space, y growing downward.
///
/// Same as `180° - atan2(dx, dy)`, without the rounding that turns straight up into
/// 359.99…°. Always in `[0, 360)`.
pub fn compass(offset: Vector2<f64>) -> Deg<f64> {
    let angle = Deg::from(Rad(offset.x.atan2(-offset.y))).normalize();
    // normalize() rounds tiny negative angles up to 360
    if angle.0 >= 360. {
        Deg(0.)
    } else {
        angle
    }
}

impl fmt::Display for PolarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "angle {:.2}° displacement {:.4}", self.angle.0, self.displacement)
    }
}

impl fmt::Display for XyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x {:.4} y {:.4}", self.x, self.y)
    }
}

/// Receiver of position reports. Only one kind is active at a time.
pub enum Monitor {
    None,
    Polar(Box<dyn FnMut(PolarReport)>),
    Xy(Box<dyn FnMut(XyReport)>),
}

impl Monitor {
    pub fn polar(f: impl FnMut(PolarReport) + 'static) -> Self {
        Monitor::Polar(Box::new(f))
    }

    pub fn xy(f: impl FnMut(XyReport) + 'static) -> Self {
        Monitor::Xy(Box::new(f))
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Monitor::None
    }
}

impl fmt::Debug for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Monitor::None => "Monitor::None",
            Monitor::Polar(_) => "Monitor::Polar(..)",
            Monitor::Xy(_) => "Monitor::Xy(..)",
        })
    }
}
