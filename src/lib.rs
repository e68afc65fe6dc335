//! `argsift` is a single-pass command line classifier for Rust.
//!
//! Most command line parsers want to own your program: they define the accepted grammar, reject everything else, and exit with an error.
//! `argsift` takes the opposite stance.
//! It reads whatever was passed, sorts every token into a bucket, and lets the program decide what to do about it.
//! Specifically, `argsift` attempts to prioritize the following design concerns:
//! * *Never fail*:
//! Parsing always succeeds.
//! Undeclared options are reported as *unknowns* and malformed values as *invalids*, alongside everything that did parse.
//! * *Light declarations*:
//! An option is declared with a name, an optional alias, a type, and a title for the help message.
//! Undeclared options are still accepted by default, with their values inferred.
//! * *Predictable coercion*:
//! `number` options take decimal literals, `bool` options take exactly `true` or `false`, and inferred values follow a small fixed set of rules.
//! * *Basic help output*:
//! A plain `USAGE` / `COMMANDS` / `OPTIONS` listing, wrapped to the terminal width.
//!
//! # Usage
//! Classify the current process arguments without declaring anything:
//! ```no_run
#![doc = include_str!("../demos/inspect.rs")]
//! ```
//!
//! ```console
//! $ inspect deploy --env=prod -v --retries 3 now
//! program: inspect
//! commands: ["deploy", "now"]
//! option env: prod
//! option retries: 3
//! option v: true
//! ```
//!
//! None of these options are declared, so their values are inferred.
//! `-v` is followed by another option, which makes it a flag.
//! `--retries` consumes the following token `3` as its value, and `now` is left over as a command.
//!
//! # Declaring options
//! Options are declared with [`OptionSpec`] and collected into a [`Config`] (or a [`Command`]).
//! There are four [`OptionType`]s:
//! * `string`: takes the explicit value (`--name=x`, `-nx`) or else the next token.
//! * `number`: as `string`, but the value must be a decimal literal.
//! Non-numeric (or missing) values are reported in [`ParseResult::invalids`].
//! * `bool`: takes *only* the explicit value, which must be exactly `true` or `false`.
//! * `auto`: infers the value; the default for both declared and undeclared options.
//!
//! ```no_run
#![doc = include_str!("../demos/server_flags.rs")]
//! ```
//!
//! # Strict mode
//! Turn off `auto` to report every undeclared option as an unknown.
//! ```no_run
#![doc = include_str!("../demos/strict.rs")]
//! ```
//!
//! # Testing
//! Enable the `unit_test` feature to access [`Command::test_dummy`], a command ready to [`Command::process`] without touching the real process arguments.
//!
//! # Debugging
//! Enable the `tracing_debug` feature to emit `tracing::debug!` events for each token as it is classified.
pub use argsift_engine::*;
