use argsift::{Arguments, Command, ConfigOverlay, OptionSpec, OptionType};

fn main() {
    let command = Command::default()
        .add_option(OptionSpec::new("count").alias("n").kind(OptionType::Number))
        .add_option(OptionSpec::new("name").kind(OptionType::String))
        .configure(ConfigOverlay::default().auto(false));

    let result = command.parse_command(Arguments::from_env());

    if !result.is_valid() {
        for (name, value) in &result.unknowns {
            eprintln!("unknown option '{name}' ({value})");
        }

        for (name, raw) in &result.invalids {
            match raw {
                Some(raw) => eprintln!("invalid value for '{name}': '{raw}'"),
                None => eprintln!("missing value for '{name}'"),
            }
        }

        std::process::exit(2);
    }

    println!("{result:?}");
}
