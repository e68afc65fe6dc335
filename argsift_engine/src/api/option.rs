use crate::model::OptionType;

/// The declaration of an option.
///
/// ### Example
/// ```
/// # use argsift_engine as argsift;
/// use argsift::{OptionSpec, OptionType};
///
/// let port = OptionSpec::new("port")
///     .alias("p")
///     .kind(OptionType::Number)
///     .title("The port to listen on.");
///
/// assert_eq!(port.name(), "port");
/// assert_eq!(port.alias_name(), Some("p"));
/// assert_eq!(port.option_type(), OptionType::Number);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    name: String,
    alias: Option<String>,
    option_type: OptionType,
    title: Option<String>,
}

impl OptionSpec {
    /// Declare an option by its canonical name.
    ///
    /// The name is matched by `--NAME` (or `-N`, for single character names).
    /// Results are always keyed by this name, even when matched via the alias.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            option_type: OptionType::default(),
            title: None,
        }
    }

    /// Declare the single additional lookup key for this option.
    /// If repeated, only the final alias will apply.
    /// In the help message a single character alias shows as `|-a`, and a longer one as `|--alias`.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias.replace(alias.into());
        self
    }

    /// Declare the value policy for this option (default: [`OptionType::Auto`]).
    pub fn kind(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Document the option in the help message.
    /// Without a title, the help message shows the option type instead.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title.replace(title.into());
        self
    }

    /// The canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias, if declared.
    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The value policy.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// The help message title, if declared.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let spec = OptionSpec::new("verbose");
        assert_eq!(spec.name(), "verbose");
        assert_eq!(spec.alias_name(), None);
        assert_eq!(spec.option_type(), OptionType::Auto);
        assert_eq!(spec.title_text(), None);
    }

    #[test]
    fn repeated_builders_keep_final() {
        let spec = OptionSpec::new("output")
            .alias("x")
            .alias("o")
            .kind(OptionType::Bool)
            .kind(OptionType::String)
            .title("--discarded--")
            .title("Where to write.");
        assert_eq!(spec.alias_name(), Some("o"));
        assert_eq!(spec.option_type(), OptionType::String);
        assert_eq!(spec.title_text(), Some("Where to write."));
    }
}
