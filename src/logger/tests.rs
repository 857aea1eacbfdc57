use super::*;

use rstest::rstest;

use crate::{settings::ColorOption, testing::Sample};

struct Internal;

impl Loggable for Internal {
    fn render(&self) -> String {
        "\x1b[35m[internal value]\x1b[0m".into()
    }
}

struct Failing;

impl Write for Failing {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn output(logger: Logger<Vec<u8>>) -> String {
    String::from_utf8(logger.into_inner()).unwrap()
}

#[test]
fn test_log_without_prompt() {
    let mut logger = Logger::new(Options::default(), Vec::new());
    logger.log(Severity::Info, "Hello, World!", &[]).unwrap();
    assert_eq!(output(logger), "Hello, World!\n");
}

#[test]
fn test_log_with_prompt() {
    let mut logger = Logger::new(Options::sample(), Vec::new());
    logger.info("Hello, World!", &[]).unwrap();
    logger.warning("@, @, @", &[&42, &"'WOW!'", &false]).unwrap();
    logger.fatal("Test value: @", &[&Internal]).unwrap();
    assert_eq!(
        output(logger),
        concat!(
            " * tiny (\x1b[34mINFO\x1b[0m) | Hello, World!\n",
            " * tiny (\x1b[33mWARNING\x1b[0m) | 42, 'WOW!', false\n",
            " * tiny (\x1b[1;31mFATAL\x1b[0m) | Test value: \x1b[35m[internal value]\x1b[0m\n",
        )
    );
}

#[rstest]
#[case::fatal(Severity::Fatal, "[FATAL] x\n")]
#[case::error(Severity::Error, "[ERROR] x\n")]
#[case::warning(Severity::Warning, "[WARNING] x\n")]
#[case::info(Severity::Info, "[INFO] x\n")]
#[case::trace(Severity::Trace, "[TRACE] x\n")]
fn test_shorthands(#[case] severity: Severity, #[case] expected: &str) {
    let mut logger = Logger::new(Options::new("[{sev}] ").with_color(ColorOption::Never), Vec::new());
    let args: &[&dyn Loggable] = &[&"x"];
    let result = match severity {
        Severity::Fatal => logger.fatal("@", args),
        Severity::Error => logger.error("@", args),
        Severity::Warning => logger.warning("@", args),
        Severity::Info => logger.info("@", args),
        Severity::Trace => logger.trace("@", args),
    };
    result.unwrap();
    assert_eq!(output(logger), expected);
}

#[test]
fn test_prompt_first_marker_only() {
    let logger = Logger::new(Options::new("{sev}-{sev}").with_color(ColorOption::Never), Vec::new());
    assert_eq!(logger.prompt(Severity::Info), "INFO-{sev}");
}

#[test]
fn test_trace_is_unstyled() {
    let logger = Logger::new(Options::new("{sev}"), Vec::new());
    assert_eq!(logger.prompt(Severity::Trace), "TRACE");
    assert_eq!(logger.prompt(Severity::Error), "\x1b[31mERROR\x1b[0m");
}

#[test]
fn test_color_auto_on_non_terminal() {
    let logger = Logger::new(Options::new("{sev}").with_color(ColorOption::Auto), Vec::new());
    assert_eq!(logger.prompt(Severity::Warning), "WARNING");
    assert_eq!(logger.theme(), &Theme::plain());
}

#[test]
fn test_log_value() {
    let mut logger = Logger::new(Options::sample(), Vec::new());
    logger.log_value(&1, &[&2, &3]).unwrap();
    logger.log_value(&123.456, &[]).unwrap();
    logger.log_value(&"mixed", &[&'c', &true, &Internal]).unwrap();
    assert_eq!(
        output(logger),
        "1 2 3\n123.456\nmixed c true \x1b[35m[internal value]\x1b[0m\n"
    );
}

#[test]
fn test_log_value_custom_format_char() {
    let mut logger = Logger::new(Options::default().with_format_char('%'), Vec::new());
    logger.log_value(&"a@b", &[&"100%"]).unwrap();
    assert_eq!(output(logger), "a@b 100%\n");
}

#[test]
fn test_log_args_exhausted() {
    let mut logger = Logger::new(Options::default(), Vec::new());
    logger.error("@ of @", &[&1]).unwrap();
    logger.error("none", &[&1, &2]).unwrap();
    assert_eq!(output(logger), "1 of @\nnone\n");
}

#[test]
fn test_custom_format_char() {
    let mut logger = Logger::new(Options::default().with_format_char('#'), Vec::new());
    logger.info("user@host: #", &[&"ok"]).unwrap();
    assert_eq!(output(logger), "user@host: ok\n");
}

#[test]
fn test_initialize() {
    let mut logger = Logger::new(Options::new("{sev}: ").with_format_char('#'), Vec::new());
    logger.trace("#", &[&1]).unwrap();

    logger.initialize(Options::default());
    assert_eq!(logger.options(), &Options::default());
    logger.trace("@ #", &[&2]).unwrap();

    assert_eq!(output(logger), "TRACE: 1\n2 #\n");
}

#[test]
fn test_write_error_propagates() {
    let mut logger = Logger::new(Options::default(), Failing);
    let err = logger.info("x", &[]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    let err = logger.log_value(&1, &[]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_get_ref() {
    let mut logger = Logger::new(Options::default(), Vec::new());
    logger.info("abc", &[]).unwrap();
    assert_eq!(logger.get_ref().as_slice(), b"abc\n");
}
