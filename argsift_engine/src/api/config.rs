use thiserror::Error;

use crate::api::OptionSpec;

/// A configuration problem, detected at the configuration boundary.
///
/// Parsing itself never fails; see [`crate::ParseResult`] for how anomalous input is reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An option type name other than `string`, `number`, `bool` or `auto`.
    #[error("Config error: unknown option type '{0}'.")]
    UnknownOptionType(String),
    /// `process` was invoked without a program name (see [`crate::Command::set_command`]).
    #[error("Config error: no program set; call `set_command` or `Config::program` before processing.")]
    MissingProgram,
    /// `process` was invoked without an argument list (see [`crate::Command::set_command`]).
    #[error("Config error: no args set; call `set_command` or `Config::args` before processing.")]
    MissingArguments,
}

/// The full configuration of a [`crate::Command`].
///
/// ### Example
/// ```
/// # use argsift_engine as argsift;
/// use argsift::{Config, OptionSpec, OptionType};
///
/// let config = Config::default()
///     .auto(false)
///     .option(OptionSpec::new("port").kind(OptionType::Number))
///     .usage("server [--port N] start|stop");
///
/// assert!(!config.is_auto());
/// assert_eq!(config.option_specs().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    auto: bool,
    options: Vec<OptionSpec>,
    usage: Option<String>,
    program: Option<String>,
    args: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto: true,
            options: Vec::default(),
            usage: None,
            program: None,
            args: None,
        }
    }
}

impl Config {
    /// Whether undeclared options are accepted into the result options (default `true`).
    /// When `false`, undeclared options are reported as unknowns instead.
    pub fn auto(mut self, auto: bool) -> Self {
        self.auto = auto;
        self
    }

    /// Declare an option.
    /// Declaration order matters only for collisions: a later name/alias shadows an earlier one.
    pub fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Replace all the option declarations.
    pub fn options(mut self, options: impl IntoIterator<Item = OptionSpec>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Document a custom usage line for the help message.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage.replace(usage.into());
        self
    }

    /// Set the program name directly (normally set via [`crate::Command::set_command`]).
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program.replace(program.into());
        self
    }

    /// Set the argument tokens directly, excluding the program (normally set via [`crate::Command::set_command`]).
    pub fn args<S: Into<String>>(mut self, args: impl IntoIterator<Item = S>) -> Self {
        self.args.replace(args.into_iter().map(Into::into).collect());
        self
    }

    /// Overlay another configuration onto this one.
    /// Only the keys set on the overlay replace the current values; `options` are replaced wholesale.
    ///
    /// ### Example
    /// ```
    /// # use argsift_engine as argsift;
    /// use argsift::{Config, ConfigOverlay};
    ///
    /// let config = Config::default()
    ///     .usage("tool <file>")
    ///     .merge(ConfigOverlay::default().auto(false));
    ///
    /// assert!(!config.is_auto());
    /// assert_eq!(config.usage_text(), Some("tool <file>"));
    /// ```
    pub fn merge(mut self, overlay: ConfigOverlay) -> Self {
        let ConfigOverlay {
            auto,
            options,
            usage,
            program,
            args,
        } = overlay;

        if let Some(auto) = auto {
            self.auto = auto;
        }

        if let Some(options) = options {
            self.options = options;
        }

        if usage.is_some() {
            self.usage = usage;
        }

        if program.is_some() {
            self.program = program;
        }

        if args.is_some() {
            self.args = args;
        }

        self
    }

    /// Whether undeclared options are accepted into the result options.
    pub fn is_auto(&self) -> bool {
        self.auto
    }

    /// The option declarations, in declaration order.
    pub fn option_specs(&self) -> &[OptionSpec] {
        &self.options
    }

    /// The custom usage line, if set.
    pub fn usage_text(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    /// The program name, if set.
    pub fn program_name(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// The argument tokens, if set.
    pub fn arguments(&self) -> Option<&[String]> {
        self.args.as_deref()
    }

    pub(crate) fn push_option(&mut self, option: OptionSpec) {
        self.options.push(option);
    }
}

/// A partial [`Config`]: each key that is set replaces the corresponding key via [`Config::merge`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverlay {
    auto: Option<bool>,
    options: Option<Vec<OptionSpec>>,
    usage: Option<String>,
    program: Option<String>,
    args: Option<Vec<String>>,
}

impl ConfigOverlay {
    /// Overlay the auto flag.
    pub fn auto(mut self, auto: bool) -> Self {
        self.auto.replace(auto);
        self
    }

    /// Overlay the option declarations.
    pub fn options(mut self, options: impl IntoIterator<Item = OptionSpec>) -> Self {
        self.options.replace(options.into_iter().collect());
        self
    }

    /// Overlay the usage line.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage.replace(usage.into());
        self
    }

    /// Overlay the program name.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program.replace(program.into());
        self
    }

    /// Overlay the argument tokens.
    pub fn args<S: Into<String>>(mut self, args: impl IntoIterator<Item = S>) -> Self {
        self.args.replace(args.into_iter().map(Into::into).collect());
        self
    }
}
