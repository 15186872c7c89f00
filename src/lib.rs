//! Virtual on-screen joystick.
//!
//! A [`Joystick`](joystick::Joystick) follows one touch on a host surface and reports
//! the handle position, either as a compass angle and displacement or as x/y offsets,
//! to a [`Monitor`](report::Monitor).

pub mod config;
pub mod geometry;
pub mod joystick;
pub mod report;
pub mod script;
pub mod touch;
