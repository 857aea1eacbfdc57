// std imports
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use tl::{Loggable, Logger, cli, config, error::*, global, tl_fatal, tl_info, tl_value, tl_warning};

const TL_DEBUG_LOG: &str = "TINY_LOGGER_DEBUG_LOG";
const TL_DEBUG_LOG_STYLE: &str = "TINY_LOGGER_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(TL_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(TL_DEBUG_LOG).write_style(TL_DEBUG_LOG_STYLE))
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

    let opt = cli::Opt::parse_from(wild::args());

    let options = if opt.config.is_empty() {
        config::load()?
    } else {
        config::at(&opt.config).load()?
    };
    let options = opt.apply(options);

    if opt.demo {
        global::initialize(options);
        demo();
        return Ok(());
    }

    let mut logger = Logger::stdout(options);
    let template = opt.template.unwrap_or_default();
    let args = opt.args.iter().map(|arg| arg as &dyn Loggable).collect::<Vec<_>>();

    if opt.value {
        logger.log_value(&template, &args)?;
    } else {
        logger.log(*opt.severity, &template, &args)?;
    }

    Ok(())
}

fn demo() {
    struct Highlighted;

    impl Loggable for Highlighted {
        fn render(&self) -> String {
            "\x1b[35m[highlighted internal value]\x1b[0m".into()
        }
    }

    tl_info!("Hello, World!");
    tl_warning!("@, @, @", 42, "'WOW!'", false);
    tl_value!(123.456);
    tl_fatal!("Test value: @", Highlighted);
}

fn main() {
    if let Err(err) = run() {
        eprintln!("tiny-logger: {}", err);
        process::exit(1);
    }
}
