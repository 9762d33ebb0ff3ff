extern crate hint_bounds as root;

use log::LevelFilter;
use root::parsing::load_config;
use root::prelude::*;
use root::report::write_report;

#[macro_use]
extern crate log;
extern crate simplelog;

use simplelog::{
    ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// refinement levels to report after the initial bracket [default: 5]
    pub iterations: Option<usize>,
    #[structopt(long, parse(from_os_str))]
    pub config_file: Option<PathBuf>,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
    #[structopt(long, parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "trace" => LevelFilter::Trace,
        "error" => LevelFilter::Error,
        "debug" => LevelFilter::Debug,
        _ => default,
    }
}

fn init_logging(opts: &Opt) -> anyhow::Result<()> {
    let term_log_level = parse_log_level(&opts.print_log_level, LevelFilter::Warn);
    let write_log_level = parse_log_level(&opts.write_log_level, LevelFilter::Info);

    // stdout carries the report
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = &opts.log_file {
        let file = File::create(path)
            .with_context(|| format!("couldn't create log file {}", path.to_string_lossy()))?;
        loggers.push(WriteLogger::new(
            write_log_level,
            simplelog::Config::default(),
            file,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    if let Err(e) = init_logging(&opts) {
        eprintln!("{:?}", e);
        process::exit(1);
    }

    let mut config = match load_config(opts.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("couldn't load configuration, {:?}", e);
            process::exit(1);
        }
    };
    // positional argument overrides the config file
    config.iterations = opts.iterations.unwrap_or(config.iterations);

    info!("iter = {}", config.iterations);
    info!("bracketing {:?} over {}", config.curve, config.domain);

    let mut sequence = HintSequence::new(config.curve, config.domain);
    let stdout = io::stdout();
    let last = match write_report(&mut stdout.lock(), &mut sequence, config.iterations) {
        Ok(last) => last,
        Err(e) => {
            error!("failed writing report, {}", e);
            process::exit(1);
        }
    };

    let profile = sequence.profile();
    info!(
        "{} boxes live at level {}, {} pruned in total",
        sequence.grid().len(),
        sequence.level(),
        profile.pruned
    );
    if let Some(bounds) = last {
        let exact = config.curve.integral(config.domain);
        if bounds.brackets(exact) {
            info!("exact integral {} lies within {}", exact, bounds);
        } else {
            warn!(
                "exact integral {} escaped {}, rounding error dominates the gap",
                exact, bounds
            );
        }
    }
}
