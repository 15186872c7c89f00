use std::{fmt, time::Duration};

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{space0, space1, u64 as decimal},
    combinator::{map, opt, rest, value},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
};

use crate::geometry::Rect;

use super::types::*;

pub type Error<'a> = ErrorTree<&'a str>;
pub type IRes<'a, O> = IResult<&'a str, O, Error<'a>>;

/// A line that could not be parsed.
#[derive(Debug)]
pub struct ParseError {
    /// 1-based.
    pub line: usize,
    pub text: String,
    pub error: ErrorTree<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, \"{}\": {}", self.line, self.text, self.error)
    }
}

/// Parses `source` line by line with `parser`.
///
/// Blank lines and `#` comments are skipped, a comment may also end a line. A bad
/// line does not stop the parsing of the following ones.
pub fn parse_lines<'a, O>(
    source: &'a str,
    mut parser: impl FnMut(&'a str) -> IRes<'a, O>,
) -> (Vec<O>, Vec<ParseError>) {
    let mut items = Vec::new();
    let mut errors = Vec::new();
    for (i, text) in source.lines().enumerate() {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let result: Result<O, ErrorTree<Location>> = final_parser(delimited(
            space0,
            |input: &'a str| parser(input),
            pair(space0, opt(comment)),
        ))(text);
        match result {
            Ok(item) => items.push(item),
            Err(e) => {
                let line = i + 1;
                errors.push(ParseError {
                    line,
                    text: text.to_string(),
                    error: e.map_locations(|l| format!("line {}, column {}", line, l.column)),
                });
            }
        }
    }
    (items, errors)
}

pub fn config_parse(source: &str) -> (Vec<Cmd>, Vec<ParseError>) {
    parse_lines(source, cmd)
}

fn comment(input: &str) -> IRes<&str> {
    preceded(tag("#"), rest)(input)
}

fn cmd(input: &str) -> IRes<Cmd> {
    alt((
        map(setting, Cmd::Setting),
        value(Cmd::Reset, tag_no_case("RESET")),
    ))(input)
}

fn setting(input: &str) -> IRes<Setting> {
    alt((
        map(stick_setting, Setting::Stick),
        map(tap_setting, Setting::Tap),
        preceded(key("MONITOR"), map(monitor_kind, Setting::Monitor)),
    ))(input)
}

fn stick_setting(input: &str) -> IRes<StickSetting> {
    alt((
        preceded(key("TRAVEL"), map(double, StickSetting::Travel)),
        preceded(
            key("MOVABLE_BOUNDS"),
            map(optional_rect, StickSetting::MovableBounds),
        ),
        preceded(key("MOVABLE"), map(toggle, StickSetting::Movable)),
        preceded(
            key("HANDLE_CONSTRAINT"),
            map(optional_rect, StickSetting::HandleConstraint),
        ),
    ))(input)
}

fn tap_setting(input: &str) -> IRes<TapSetting> {
    alt((
        preceded(key("TAP_MAX_DURATION"), map(millis, TapSetting::MaxDuration)),
        preceded(key("TAP_MAX_DISTANCE"), map(double, TapSetting::MaxDistance)),
        preceded(key("DOUBLE_TAP_RESET"), map(toggle, TapSetting::DoubleTapReset)),
        preceded(
            key("DOUBLE_TAP_INTERVAL"),
            map(millis, TapSetting::DoubleTapInterval),
        ),
    ))(input)
}

/// `NAME =`, any case.
fn key<'a>(name: &'static str) -> impl FnMut(&'a str) -> IRes<'a, ()> {
    value((), tuple((tag_no_case(name), space0, tag("="), space0)))
}

fn toggle(input: &str) -> IRes<bool> {
    alt((
        value(true, tag_no_case("ON")),
        value(false, tag_no_case("OFF")),
    ))(input)
}

fn monitor_kind(input: &str) -> IRes<MonitorKind> {
    alt((
        value(MonitorKind::Polar, tag_no_case("POLAR")),
        value(MonitorKind::Xy, tag_no_case("XY")),
        value(MonitorKind::None, tag_no_case("NONE")),
    ))(input)
}

/// Milliseconds, with an optional `ms` suffix.
fn millis(input: &str) -> IRes<Duration> {
    map(
        terminated(decimal, opt(tag_no_case("ms"))),
        Duration::from_millis,
    )(input)
}

/// `x y width height`
pub fn rect(input: &str) -> IRes<Rect> {
    map(
        tuple((double, space1, double, space1, double, space1, double)),
        |(x, _, y, _, w, _, h)| Rect::new(x, y, w, h),
    )(input)
}

fn optional_rect(input: &str) -> IRes<Option<Rect>> {
    alt((value(None, tag_no_case("NONE")), map(rect, Some)))(input)
}
