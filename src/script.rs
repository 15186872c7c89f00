//! Touch scripts, to drive a stick without a host surface.
//!
//! ```text
//! surface 0 0 400 300        # host surface frame in the shared space
//! layout 60 240 100 100      # base center on the surface, stick size
//! begin 0.00 1 60 240        # phase, seconds, touch id, shared-space location
//! move 0.05 1 80 200
//! end 0.40 1 80 200
//! ```

use std::time::{Duration, Instant};

use cgmath::{Point2, Vector2};
use enum_map::EnumMap;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{space1, u64 as decimal},
    combinator::{map, map_opt, value},
    number::complete::double,
    sequence::{preceded, tuple},
};

use crate::{
    config::parse::{parse_lines, rect, IRes, ParseError},
    geometry::Rect,
    joystick::Joystick,
    touch::{TouchEvent, TouchId, TouchPhase},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Surface(Rect),
    Layout {
        center: Point2<f64>,
        size: Vector2<f64>,
    },
    Touch {
        at: Duration,
        event: TouchEvent,
    },
}

pub fn parse_script(source: &str) -> (Vec<Step>, Vec<ParseError>) {
    parse_lines(source, step)
}

/// Feeds `steps` to `stick`, touch times being relative to `start`.
///
/// Returns how many touch events of each phase were delivered. Touches too far in the
/// future to be represented as an `Instant` are skipped.
pub fn replay(steps: &[Step], stick: &mut Joystick, start: Instant) -> EnumMap<TouchPhase, usize> {
    let mut counts = EnumMap::default();
    for step in steps {
        match *step {
            Step::Surface(surface) => stick.set_surface(surface),
            Step::Layout { center, size } => stick.layout(center, size),
            Step::Touch { at, ref event } => match start.checked_add(at) {
                Some(now) => {
                    log::debug!("{:?} at {:?}", event, at);
                    stick.touch(event, now);
                    counts[event.phase] += 1;
                }
                None => log::warn!("skipping {:?}, {:?} is out of range", event, at),
            },
        }
    }
    counts
}

fn step(input: &str) -> IRes<Step> {
    alt((
        map(preceded(keyword("surface"), rect), Step::Surface),
        map(preceded(keyword("layout"), rect), |r| Step::Layout {
            center: r.origin,
            size: r.size,
        }),
        touch,
    ))(input)
}

fn keyword<'a>(name: &'static str) -> impl FnMut(&'a str) -> IRes<'a, ()> {
    value((), tuple((tag_no_case(name), space1)))
}

fn phase(input: &str) -> IRes<TouchPhase> {
    alt((
        value(TouchPhase::Begin, tag_no_case("begin")),
        value(TouchPhase::Move, tag_no_case("move")),
        value(TouchPhase::End, tag_no_case("end")),
        value(TouchPhase::Cancel, tag_no_case("cancel")),
    ))(input)
}

fn seconds(input: &str) -> IRes<Duration> {
    map_opt(double, |s| Duration::try_from_secs_f64(s).ok())(input)
}

fn touch(input: &str) -> IRes<Step> {
    map(
        tuple((
            phase, space1, seconds, space1, decimal, space1, double, space1, double,
        )),
        |(phase, _, at, _, id, _, x, _, y)| Step::Touch {
            at,
            event: TouchEvent {
                phase,
                id: TouchId(id),
                location: Point2::new(x, y),
            },
        },
    )(input)
}
