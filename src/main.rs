// std imports
use std::{
    io::{IsTerminal, Write, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use rewind::{App, Options, cli, config, error::*};

const REWIND_DEBUG_LOG: &str = "REWIND_DEBUG_LOG";
const REWIND_DEBUG_LOG_STYLE: &str = "REWIND_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(REWIND_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(REWIND_DEBUG_LOG).write_style(REWIND_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse();

    let (configs, no_default_configs) = opt.config_files();
    let settings = config::at(configs).no_default(no_default_configs).load()?;
    log::debug!("settings: {settings:?}");

    let colors = match opt.color {
        cli::ColorOption::Auto => stdout().is_terminal(),
        cli::ColorOption::Always => true,
        cli::ColorOption::Never => false,
    };

    let mut engine = settings.engine_options();
    if let Some(max_steps) = opt.max_steps {
        engine.max_steps = max_steps;
    }

    let app = App::new(Options {
        engine,
        mode: opt.mode(settings.playback.interval_ms),
        format: opt.output_format.into(),
        colors,
        indent: settings.formatting.indent.clone(),
    });

    let mut output = stdout().lock();
    match app.run(&opt.pattern, &opt.text, &mut output) {
        Ok(()) => Ok(output.flush()?),
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err),
    }
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
