mod base;
mod coerce;
mod interface;
mod printer;

pub use base::ParseResult;
pub(crate) use base::Parser;
pub(crate) use interface::{ConsoleInterface, UserInterface};
pub(crate) use printer::Printer;

#[cfg(test)]
pub(crate) use interface::util;
