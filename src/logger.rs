// std imports
use std::{
    borrow::Cow,
    io::{self, IsTerminal, Stdout, Write, stdout},
};

// local imports
use crate::{
    formatting::Formatter,
    loggable::{Loggable, render_all},
    prompt::build_prompt,
    settings::Options,
    severity::Severity,
    theme::Theme,
};

// ---

/// Logger writes severity-tagged and value-list lines to an output stream.
///
/// Every call builds a complete line, writes it at once and flushes the stream.
pub struct Logger<W = Stdout> {
    options: Options,
    formatter: Formatter,
    theme: Theme,
    is_terminal: bool,
    output: W,
}

impl Logger<Stdout> {
    /// Creates a logger writing to the standard output.
    pub fn stdout(options: Options) -> Self {
        let output = stdout();
        let is_terminal = output.is_terminal();
        Self::build(options, output, is_terminal)
    }
}

impl<W: Write> Logger<W> {
    /// Creates a logger writing to `output`, which is treated as a non-terminal sink.
    pub fn new(options: Options, output: W) -> Self {
        Self::build(options, output, false)
    }

    fn build(options: Options, output: W, is_terminal: bool) -> Self {
        Self {
            formatter: Formatter::new(options.format_char),
            theme: Theme::new(options.color.resolve(is_terminal)),
            options,
            is_terminal,
            output,
        }
    }

    /// Replaces the options, subsequent calls use the new ones.
    pub fn initialize(&mut self, options: Options) {
        self.formatter = Formatter::new(options.format_char);
        self.theme = Theme::new(options.color.resolve(self.is_terminal));
        self.options = options;
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders the configured prompt for `severity`.
    pub fn prompt(&self, severity: Severity) -> Cow<'_, str> {
        build_prompt(&self.options.prompt, self.theme.label(severity))
    }

    /// Writes the prompt for `severity` followed by `template` with its
    /// placeholders substituted by `args`.
    pub fn log(&mut self, severity: Severity, template: &str, args: &[&dyn Loggable]) -> io::Result<()> {
        let args = render_all(args);
        let mut line = String::with_capacity(self.options.prompt.len() + template.len() + 1);
        line.push_str(&self.prompt(severity));
        self.formatter.format(&mut line, template, &args);
        self.emit(line)
    }

    /// Writes `initial` and `rest` separated by spaces, without a prompt.
    pub fn log_value(&mut self, initial: &dyn Loggable, rest: &[&dyn Loggable]) -> io::Result<()> {
        let template = self.formatter.value_template(rest.len());
        let mut args = Vec::with_capacity(rest.len() + 1);
        args.push(initial.render());
        args.extend(render_all(rest));

        let mut line = String::with_capacity(template.len() + 1);
        self.formatter.format(&mut line, &template, &args);
        self.emit(line)
    }

    #[inline]
    pub fn fatal(&mut self, template: &str, args: &[&dyn Loggable]) -> io::Result<()> {
        self.log(Severity::Fatal, template, args)
    }

    #[inline]
    pub fn error(&mut self, template: &str, args: &[&dyn Loggable]) -> io::Result<()> {
        self.log(Severity::Error, template, args)
    }

    #[inline]
    pub fn warning(&mut self, template: &str, args: &[&dyn Loggable]) -> io::Result<()> {
        self.log(Severity::Warning, template, args)
    }

    #[inline]
    pub fn info(&mut self, template: &str, args: &[&dyn Loggable]) -> io::Result<()> {
        self.log(Severity::Info, template, args)
    }

    #[inline]
    pub fn trace(&mut self, template: &str, args: &[&dyn Loggable]) -> io::Result<()> {
        self.log(Severity::Trace, template, args)
    }

    pub fn get_ref(&self) -> &W {
        &self.output
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn emit(&mut self, mut line: String) -> io::Result<()> {
        line.push('\n');
        self.output.write_all(line.as_bytes())?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests;
