use self::{
    parse::ParseError,
    settings::Settings,
    types::Cmd,
};

pub mod parse;
pub mod settings;
pub mod types;

/// Applies every valid line of `source` to `settings`, in order.
pub fn parse_file(source: &str, settings: &mut Settings) -> Vec<ParseError> {
    let (cmds, errors) = parse::config_parse(source);
    for cmd in cmds {
        match cmd {
            Cmd::Setting(setting) => settings.apply(setting),
            Cmd::Reset => settings.reset(),
        }
    }
    errors
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::*;
    use crate::{config::types::MonitorKind, geometry::Rect};

    #[test]
    fn parse_all_settings() {
        let settings_str = include_str!("all-settings-example");
        let mut settings = Settings::default();
        let errors = parse_file(settings_str, &mut settings);
        dbg!(&errors);
        assert!(errors.is_empty());
        assert_eq!(settings.stick.travel, 1.2);
        assert!(settings.stick.movable);
        assert_eq!(
            settings.stick.movable_bounds,
            Some(Rect::new(0., 100., 400., 200.))
        );
        assert_eq!(settings.stick.handle_constraint, None);
        assert_eq!(settings.tap.max_duration, Duration::from_millis(120));
        assert_eq!(settings.tap.max_distance, 3.);
        assert!(!settings.tap.double_tap_reset);
        assert_eq!(settings.tap.double_tap_interval, Duration::from_millis(250));
        assert_eq!(settings.monitor, MonitorKind::Xy);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut settings = Settings::default();
        let errors = parse_file("TRAVEL = 3\nMONITOR = POLAR\nRESET\nMOVABLE = ON", &mut settings);
        assert!(errors.is_empty());
        assert_eq!(settings.stick.travel, 1.);
        assert_eq!(settings.monitor, MonitorKind::None);
        assert!(settings.stick.movable);
    }
}
