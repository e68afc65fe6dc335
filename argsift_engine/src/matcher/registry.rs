use std::collections::HashMap;

use crate::api::OptionSpec;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Lookup from option name/alias to its declaration.
#[derive(Debug, Default)]
pub(crate) struct OptionRegistry<'c> {
    specs: HashMap<&'c str, &'c OptionSpec>,
}

impl<'c> OptionRegistry<'c> {
    pub(crate) fn new(options: &'c [OptionSpec]) -> Self {
        let mut specs = HashMap::default();

        for spec in options {
            // Later declarations shadow earlier ones, for both the name and the alias.
            if let Some(_previous) = specs.insert(spec.name(), spec) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option key '{}' re-declared; the later declaration wins.", spec.name());
                }
            }

            if let Some(alias) = spec.alias_name() {
                if let Some(_previous) = specs.insert(alias, spec) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Option key '{alias}' re-declared; the later declaration wins.");
                    }
                }
            }
        }

        Self { specs }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'c OptionSpec> {
        self.specs.get(key).copied()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.specs.contains_key(key)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.specs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionType;

    #[test]
    fn empty() {
        let registry = OptionRegistry::new(&[]);
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.get("a"), None);
        assert!(!registry.contains("a"));
    }

    #[test]
    fn name_and_alias() {
        let options = vec![
            OptionSpec::new("port").alias("p").kind(OptionType::Number),
            OptionSpec::new("verbose"),
        ];
        let registry = OptionRegistry::new(&options);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("port"), Some(&options[0]));
        assert_eq!(registry.get("p"), Some(&options[0]));
        assert_eq!(registry.get("verbose"), Some(&options[1]));
        assert!(registry.contains("p"));
        assert!(!registry.contains("v"));
    }

    #[test]
    fn later_declaration_wins() {
        let options = vec![
            OptionSpec::new("port").alias("p").kind(OptionType::Number),
            OptionSpec::new("path").alias("p").kind(OptionType::String),
            OptionSpec::new("port").kind(OptionType::Bool),
        ];
        let registry = OptionRegistry::new(&options);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("p"), Some(&options[1]));
        assert_eq!(registry.get("path"), Some(&options[1]));
        assert_eq!(registry.get("port"), Some(&options[2]));
    }

    #[test]
    fn alias_same_as_name() {
        let options = vec![OptionSpec::new("x").alias("x")];
        let registry = OptionRegistry::new(&options);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("x"), Some(&options[0]));
    }
}
