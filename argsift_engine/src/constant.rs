pub(crate) const USAGE_HEADING: &str = "USAGE";
pub(crate) const COMMANDS_HEADING: &str = "COMMANDS";
pub(crate) const OPTIONS_HEADING: &str = "OPTIONS";
pub(crate) const USAGE_SUFFIX: &str = "<option> [command]";
pub(crate) const PROGRAM_PLACEHOLDER: &str = "<program>";

pub(crate) const INDENT: usize = 2;
pub(crate) const COMMAND_COLUMN_WIDTH: usize = 20;
// The option column is preceded by the "--" of the long name.
pub(crate) const OPTION_COLUMN_WIDTH: usize = 18;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
