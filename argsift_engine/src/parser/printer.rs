use terminal_size::{terminal_size, Width};

use crate::api::{Config, OptionSpec};
use crate::constant::*;
use crate::parser::interface::{wrap, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) struct Printer<'c> {
    config: &'c Config,
    terminal_width: Option<usize>,
}

impl<'c> Printer<'c> {
    pub(crate) fn terminal(config: &'c Config) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(config, terminal_width)
    }

    pub(crate) fn new(config: &'c Config, terminal_width: Option<usize>) -> Self {
        Self {
            config,
            terminal_width,
        }
    }

    pub(crate) fn print_help(
        &self,
        commands: &[(String, String)],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render(commands) {
            user_interface.print(line);
        }
    }

    pub(crate) fn render(&self, commands: &[(String, String)]) -> Vec<String> {
        let usage = match self.config.usage_text() {
            Some(usage) => usage.to_string(),
            None => format!(
                "{p} {USAGE_SUFFIX}",
                p = self.config.program_name().unwrap_or(PROGRAM_PLACEHOLDER)
            ),
        };
        let mut lines = vec![
            "".to_string(),
            USAGE_HEADING.to_string(),
            format!("{:INDENT$}{usage}", ""),
        ];

        if !commands.is_empty() {
            lines.push("".to_string());
            lines.push(COMMANDS_HEADING.to_string());

            for (command, description) in commands {
                lines.extend(self.render_row(command, COMMAND_COLUMN_WIDTH, description));
            }
        }

        if !self.config.option_specs().is_empty() {
            lines.push("".to_string());
            lines.push(OPTIONS_HEADING.to_string());

            for option in self.config.option_specs() {
                let description = match option.title_text() {
                    Some(title) => title.to_string(),
                    None => option.option_type().to_string(),
                };
                lines.extend(self.render_row(
                    &option_flags(option),
                    OPTION_COLUMN_WIDTH + 2,
                    &description,
                ));
            }
        }

        lines.push("".to_string());
        lines.push("".to_string());
        lines
    }

    fn render_row(&self, left: &str, width: usize, description: &str) -> Vec<String> {
        // An overflowing left side still keeps 1 space before the description.
        let column = std::cmp::max(width, left.chars().count() + 1);
        let parts = match self.terminal_width {
            Some(terminal_width) => {
                let available = terminal_width.saturating_sub(INDENT + column);
                let description_width = std::cmp::max(available, MINIMUM_DESCRIPTION_WIDTH);
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminal {terminal_width} leaves {available} for '{left}'.  Selecting description width: {description_width}.");
                }

                wrap(description, description_width)
            }
            None if description.is_empty() => Vec::default(),
            None => vec![description.to_string()],
        };

        if parts.is_empty() {
            return vec![format!("{:INDENT$}{left}", "")];
        }

        parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                let label = if i == 0 { left } else { "" };
                format!("{:INDENT$}{:column$}{part}", "", label)
            })
            .collect()
    }
}

fn option_flags(option: &OptionSpec) -> String {
    match option.alias_name() {
        Some(alias) if alias.chars().count() == 1 => format!("--{}|-{alias}", option.name()),
        Some(alias) => format!("--{}|--{alias}", option.name()),
        None => format!("--{}", option.name()),
    }
}
