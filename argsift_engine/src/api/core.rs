use std::env;

use crate::api::{Config, ConfigError, ConfigOverlay, OptionSpec};
use crate::parser::{ConsoleInterface, ParseResult, Parser, Printer, UserInterface};

/// The Cli input, including the program as the first token.
///
/// A [`Arguments::Line`] is split on every single space character.
/// There is no quoting or escaping: `"a  b"` splits into `["a", "", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments {
    /// An un-split command line.
    Line(String),
    /// Pre-split tokens.
    Tokens(Vec<String>),
}

impl Arguments {
    /// The arguments of this process (see [`env::args`]).
    pub fn from_env() -> Self {
        Arguments::Tokens(env::args().collect())
    }

    /// All the tokens, including the program.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            Arguments::Line(line) => line.split(' ').map(str::to_string).collect(),
            Arguments::Tokens(tokens) => tokens,
        }
    }

    // Separate the program from the tokens to scan.
    fn split(self) -> (String, Vec<String>) {
        let mut tokens = self.into_tokens();

        if tokens.is_empty() {
            (String::default(), tokens)
        } else {
            let program = tokens.remove(0);
            (program, tokens)
        }
    }
}

impl From<&str> for Arguments {
    fn from(value: &str) -> Self {
        Arguments::Line(value.to_string())
    }
}

impl From<String> for Arguments {
    fn from(value: String) -> Self {
        Arguments::Line(value)
    }
}

impl From<Vec<String>> for Arguments {
    fn from(value: Vec<String>) -> Self {
        Arguments::Tokens(value)
    }
}

impl From<Vec<&str>> for Arguments {
    fn from(value: Vec<&str>) -> Self {
        Arguments::Tokens(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Arguments {
    fn from(value: &[&str]) -> Self {
        Arguments::Tokens(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Arguments {
    fn from(value: [&str; N]) -> Self {
        Arguments::Tokens(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Classify a Cli invocation against the option declarations of `config`.
///
/// The first token is taken as the program; the remaining tokens are scanned left to right.
/// Parsing never fails: unknown and invalid options are reported on the [`ParseResult`].
///
/// ### Example
/// ```
/// # use argsift_engine as argsift;
/// use argsift::{parse, Config, OptionSpec, OptionType, Value};
///
/// let config = Config::default()
///     .option(OptionSpec::new("port").alias("p").kind(OptionType::Number));
/// let result = parse("server -p 8080 start --verbose", &config);
///
/// assert_eq!(result.program, "server");
/// assert_eq!(result.commands, vec!["start"]);
/// assert_eq!(result.option("port"), Some(&Value::from(8080.0)));
/// assert_eq!(result.option("verbose"), Some(&Value::Bool(true)));
/// ```
pub fn parse(args: impl Into<Arguments>, config: &Config) -> ParseResult {
    let (program, tokens) = args.into().split();
    Parser::new(config.option_specs(), config.is_auto()).parse(program, &tokens)
}

/// Classify the program & args already set on `config`.
///
/// Returns `Err` if either the program or the args were never set.
///
/// ### Example
/// ```
/// # use argsift_engine as argsift;
/// use argsift::{process, Config, ConfigError};
///
/// let config = Config::default().program("tool").args(["build"]);
/// assert_eq!(process(&config).unwrap().commands, vec!["build"]);
///
/// assert_eq!(process(&Config::default()).unwrap_err(), ConfigError::MissingProgram);
/// ```
pub fn process(config: &Config) -> Result<ParseResult, ConfigError> {
    let program = config.program_name().ok_or(ConfigError::MissingProgram)?;
    let tokens = config.arguments().ok_or(ConfigError::MissingArguments)?;
    Ok(Parser::new(config.option_specs(), config.is_auto()).parse(program, tokens))
}

/// A configured command, carrying its option declarations from setup through to parsing & help.
///
/// ### Example
/// ```
/// # use argsift_engine as argsift;
/// use argsift::{Command, ConfigOverlay, OptionSpec, OptionType, Value};
///
/// let command = Command::default()
///     .add_option(OptionSpec::new("name").kind(OptionType::String))
///     .configure(ConfigOverlay::default().auto(false))
///     .set_command(vec!["greeter", "--name", "world", "--loud"]);
///
/// let result = command.process().unwrap();
/// assert_eq!(result.option("name"), Some(&Value::from("world")));
/// assert_eq!(result.unknowns.get("loud"), Some(&Value::Bool(true)));
/// ```
pub struct Command {
    config: Config,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("config", &self.config)
            .finish()
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Command {
    /// Create a command from its configuration.
    pub fn new(config: Config) -> Self {
        Self::with_interface(config, Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(config: Config, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            config,
            user_interface,
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`Command`] which is ready to [`Command::process`], for use in testing.
    ///
    /// ### Example
    /// ```
    /// # use argsift_engine as argsift;
    /// use argsift::{Command, OptionSpec, OptionType};
    ///
    /// // Function under test.
    /// // We want to make sure the setup_fn declares the right options.
    /// pub fn setup_fn(command: Command) -> Command {
    ///     command.add_option(OptionSpec::new("port").kind(OptionType::Number))
    /// }
    ///
    /// let result = setup_fn(Command::test_dummy()).process().unwrap();
    /// assert!(result.options.is_empty());
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy() -> Self {
        Self::new(Config::default().program("test-dummy").args(Vec::<String>::default()))
    }

    /// Declare an option.
    pub fn add_option(mut self, option: OptionSpec) -> Self {
        self.config.push_option(option);
        self
    }

    /// Overlay configuration keys onto this command (see [`Config::merge`]).
    pub fn configure(mut self, overlay: ConfigOverlay) -> Self {
        self.config = self.config.merge(overlay);
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the Cli invocation for [`Command::process`].
    /// The first token becomes the program; an empty invocation gives an empty program.
    pub fn set_command(mut self, args: impl Into<Arguments>) -> Self {
        let (program, tokens) = args.into().split();
        self.config = self.config.program(program).args(tokens);
        self
    }

    /// Classify a Cli invocation against this command's declarations.
    /// Equivalent to [`parse`] with this command's configuration.
    pub fn parse_command(&self, args: impl Into<Arguments>) -> ParseResult {
        parse(args, &self.config)
    }

    /// Classify the invocation set via [`Command::set_command`].
    /// Equivalent to [`process`] with this command's configuration.
    pub fn process(&self) -> Result<ParseResult, ConfigError> {
        process(&self.config)
    }

    /// Render the help message, given the (command, description) pairs to document.
    ///
    /// ### Example
    /// ```
    /// # use argsift_engine as argsift;
    /// use argsift::{Command, OptionSpec, OptionType};
    ///
    /// let help = Command::default()
    ///     .add_option(OptionSpec::new("port").alias("p").kind(OptionType::Number).title("Listen port."))
    ///     .set_command("server")
    ///     .help([("start", "Start the server."), ("stop", "Stop the server.")]);
    ///
    /// assert!(help.contains("USAGE\n  server <option> [command]\n"));
    /// assert!(help.contains("  start"));
    /// assert!(help.contains("  --port|-p"));
    /// ```
    pub fn help<K, V>(&self, commands: impl IntoIterator<Item = (K, V)>) -> String
    where
        K: Into<String>,
        V: Into<String>,
    {
        let commands = collect_commands(commands);
        Printer::terminal(&self.config).render(&commands).join("\n")
    }

    /// Print the help message (see [`Command::help`]) to stdout.
    pub fn output_help<K, V>(&self, commands: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let commands = collect_commands(commands);
        Printer::terminal(&self.config).print_help(&commands, &*self.user_interface);
    }
}

fn collect_commands<K, V>(commands: impl IntoIterator<Item = (K, V)>) -> Vec<(String, String)>
where
    K: Into<String>,
    V: Into<String>,
{
    commands
        .into_iter()
        .map(|(command, description)| (command.into(), description.into()))
        .collect()
}
