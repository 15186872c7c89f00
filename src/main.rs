mod opts;

use std::{fs::File, io::Read, path::Path, time::Instant};

use anyhow::{bail, Context};
use cgmath::{vec2, Point2};
use clap::Parser;
use nom_supreme::error::{BaseErrorKind, ErrorTree};
use opts::{Cmd, Opts, Replay};
use touchstick::{
    config::{self, parse::ParseError, settings::Settings, types::MonitorKind},
    geometry::Rect,
    joystick::Joystick,
    script::{self, Step},
    touch::TouchPhase,
};

fn main() {
    std::panic::set_hook(Box::new(|p| {
        eprintln!("\n/!\\ A crash occured /!\\\n    {}", p);
        eprintln!("\nPlease report it along with the script and configuration used.")
    }));
    env_logger::init();

    if let Err(e) = do_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn do_main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    match opts.cmd {
        Cmd::Validate(v) => {
            let content = read_file(&v.config_file)?;
            let errors = config::parse_file(&content, &mut Settings::default());
            if errors.is_empty() {
                println!("{}: ok", v.config_file.display());
                Ok(())
            } else {
                print_parse_errors(&errors);
                bail!("{} invalid line(s)", errors.len())
            }
        }
        Cmd::Replay(r) => replay(r),
    }
}

fn replay(r: Replay) -> anyhow::Result<()> {
    let mut settings = Settings::default();
    if let Some(ref path) = r.config {
        let content = read_file(path)?;
        let errors = config::parse_file(&content, &mut settings);
        if !errors.is_empty() {
            print_parse_errors(&errors);
            bail!("invalid configuration file {}", path.display());
        }
    }

    let content = read_file(&r.script_file)?;
    let (steps, errors) = script::parse_script(&content);
    if !errors.is_empty() {
        print_parse_errors(&errors);
        bail!("invalid script {}", r.script_file.display());
    }
    if !steps.iter().any(|s| matches!(s, Step::Layout { .. })) {
        log::warn!("script has no layout line, the stick has no size and will ignore touches");
    }

    let mut stick = Joystick::new(Rect::new(0., 0., 0., 0.), Point2::new(0., 0.), vec2(0., 0.));
    stick.apply_settings(&settings);
    match r.monitor.unwrap_or(settings.monitor) {
        MonitorKind::Polar => stick.set_polar_monitor(|report| println!("{}", report)),
        MonitorKind::Xy => stick.set_xy_monitor(|report| println!("{}", report)),
        MonitorKind::None => stick.clear_monitor(),
    }
    stick.set_on_tap(|| println!("tap"));

    let counts = script::replay(&steps, &mut stick, Instant::now());
    println!(
        "{} touch events: {} begin, {} move, {} end, {} cancel",
        counts.iter().map(|(_, n)| n).sum::<usize>(),
        counts[TouchPhase::Begin],
        counts[TouchPhase::Move],
        counts[TouchPhase::End],
        counts[TouchPhase::Cancel],
    );
    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("opening file \"{}\"", path.display()))?;
    let mut buf = String::new();
    file.read_to_string(&mut buf)
        .with_context(|| format!("reading file \"{}\"", path.display()))?;
    Ok(buf)
}

fn print_parse_errors(errors: &[ParseError]) {
    for e in errors {
        eprintln!("Invalid line {}: \"{}\"", e.line, e.text);
        print_parse_error(&e.error);
    }
}

fn print_parse_error(e: &ErrorTree<String>) {
    match e {
        ErrorTree::Base { location, kind } => {
            eprintln!("  at {}: {}", location, kind);
        }
        ErrorTree::Stack { base, contexts } => {
            eprintln!("  {:?}", contexts);
            print_parse_error(base);
        }
        ErrorTree::Alt(alts) => {
            let mut last_loc = None;
            for alt in alts {
                if let ErrorTree::Base {
                    location,
                    kind: BaseErrorKind::Expected(exp),
                } = alt
                {
                    match last_loc.map(|l: &String| l == location) {
                        None => eprint!("  at {}: expected {}", location, exp),
                        Some(false) => eprint!("\n  at {}: expected {}", location, exp),
                        Some(true) => eprint!(" or {}", exp),
                    }
                    last_loc = Some(location);
                } else {
                    if last_loc.is_some() {
                        eprintln!();
                    }
                    print_parse_error(alt);
                    last_loc = None;
                }
            }
            if last_loc.is_some() {
                eprintln!();
            }
        }
    }
}
