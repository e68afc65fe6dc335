use std::collections::HashMap;

use crate::api::OptionSpec;
use crate::matcher::*;
use crate::model::{OptionType, Value};
use crate::parser::coerce::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The classification of a Cli invocation.
///
/// Every token (after the program) lands in precisely one place:
/// * as a positional `command`,
/// * as the value of the option preceding it (lookahead), or
/// * as an option, recorded under its canonical name in one of `options`, `unknowns` or `invalids`.
///
/// A name never appears in more than one of `options`, `unknowns` & `invalids`; a repeated option is resolved by its final occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    /// The first token of the invocation.
    pub program: String,
    /// Successfully resolved option values.
    pub options: HashMap<String, Value>,
    /// Positional tokens, in order.
    pub commands: Vec<String>,
    /// Undeclared options, only populated when the config is not `auto`.
    pub unknowns: HashMap<String, Value>,
    /// Declared options whose value fails their type, with the offending value (`None` if there was no value at all).
    pub invalids: HashMap<String, Option<String>>,
}

impl ParseResult {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Get a resolved option value.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Whether the invocation had neither unknown nor invalid options.
    pub fn is_valid(&self) -> bool {
        self.unknowns.is_empty() && self.invalids.is_empty()
    }

    fn accept(&mut self, name: &str, value: Value) {
        self.unknowns.remove(name);
        self.invalids.remove(name);
        self.options.insert(name.to_string(), value);
    }

    fn reject_unknown(&mut self, name: &str, value: Value) {
        self.options.remove(name);
        self.invalids.remove(name);
        self.unknowns.insert(name.to_string(), value);
    }

    fn reject_invalid(&mut self, name: &str, value: Option<&str>) {
        self.options.remove(name);
        self.unknowns.remove(name);
        self.invalids.insert(name.to_string(), value.map(str::to_string));
    }
}

/// Whether an option took the following token as its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead {
    Consumed,
    Untouched,
}

impl Lookahead {
    fn width(&self) -> usize {
        match self {
            Lookahead::Consumed => 2,
            Lookahead::Untouched => 1,
        }
    }
}

/// The single pass scanner over the Cli tokens.
#[derive(Debug)]
pub(crate) struct Parser<'c> {
    registry: OptionRegistry<'c>,
    auto: bool,
}

impl<'c> Parser<'c> {
    pub(crate) fn new(options: &'c [OptionSpec], auto: bool) -> Self {
        Self {
            registry: OptionRegistry::new(options),
            auto,
        }
    }

    pub(crate) fn parse<S: AsRef<str>>(
        &self,
        program: impl Into<String>,
        tokens: &[S],
    ) -> ParseResult {
        let mut result = ParseResult::new(program);
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_ref();
            let next = tokens.get(i + 1).map(AsRef::as_ref);

            match Token::classify(token).option() {
                Some((key, value)) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token {i} '{token}' is option '{key}' (explicit value: {value:?}).");
                    }

                    let lookahead = self.resolve(&mut result, key, value, next);
                    i += lookahead.width();
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token {i} '{token}' is a command.");
                    }

                    result.commands.push(token.to_string());
                    i += 1;
                }
            }
        }

        result
    }

    fn resolve(
        &self,
        result: &mut ParseResult,
        key: &str,
        value: Option<&str>,
        next: Option<&str>,
    ) -> Lookahead {
        let (name, option_type) = match self.registry.get(key) {
            Some(spec) => (spec.name(), spec.option_type()),
            None => (key, OptionType::Auto),
        };
        // An empty explicit value (ex: `--key=`) doesn't stop the lookahead.
        let explicit = value.filter(|v| !v.is_empty());

        match option_type {
            OptionType::String => match (explicit, next) {
                (Some(v), _) => {
                    result.accept(name, Value::String(v.to_string()));
                    Lookahead::Untouched
                }
                (None, Some(n)) => {
                    result.accept(name, Value::String(n.to_string()));
                    Lookahead::Consumed
                }
                (None, None) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("String option '{name}' has no value; skipping.");
                    }

                    Lookahead::Untouched
                }
            },
            OptionType::Number => {
                let (candidate, lookahead) = match (explicit, next) {
                    (Some(v), _) => (Some(v), Lookahead::Untouched),
                    (None, Some(n)) => (Some(n), Lookahead::Consumed),
                    // Keep the raw `--key=` value so it is reported as given.
                    (None, None) => (value, Lookahead::Untouched),
                };

                match candidate.and_then(to_float) {
                    Some(number) => result.accept(name, Value::Number(number)),
                    None => result.reject_invalid(name, candidate),
                }

                lookahead
            }
            OptionType::Bool => {
                // Only the explicit value counts; `--flag true` leaves 'true' as a command.
                match value {
                    Some("true") => result.accept(name, Value::Bool(true)),
                    Some("false") => result.accept(name, Value::Bool(false)),
                    other => result.reject_invalid(name, other),
                }

                Lookahead::Untouched
            }
            OptionType::Auto => {
                let (resolved, lookahead) = match (explicit, next) {
                    (Some(v), _) => (auto_value(v), Lookahead::Untouched),
                    (None, Some(n)) if is_not_option(n) => (auto_value(n), Lookahead::Consumed),
                    _ => (Value::Bool(true), Lookahead::Untouched),
                };

                if !self.auto && !self.registry.contains(key) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Option '{name}' is undeclared; reporting as unknown.");
                    }

                    result.reject_unknown(name, resolved);
                } else {
                    result.accept(name, resolved);
                }

                lookahead
            }
        }
    }
}
