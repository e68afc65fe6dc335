use argsift::{Arguments, Command, OptionSpec, OptionType, Value};

fn main() {
    let command = Command::default()
        .add_option(
            OptionSpec::new("port")
                .alias("p")
                .kind(OptionType::Number)
                .title("The port to listen on."),
        )
        .add_option(
            OptionSpec::new("host")
                .kind(OptionType::String)
                .title("The interface to bind."),
        )
        .add_option(
            OptionSpec::new("verbose")
                .alias("v")
                .kind(OptionType::Bool)
                .title("Log every request (true/false)."),
        )
        .set_command(Arguments::from_env());

    let result = match command.process() {
        Ok(result) => result,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    if result.commands.is_empty() || result.option("help").is_some() {
        command.output_help([("start", "Start the server."), ("stop", "Stop the server.")]);
        return;
    }

    let port = result
        .option("port")
        .and_then(Value::as_number)
        .map(|n| n.as_f64())
        .unwrap_or(8080.0);
    let host = result.option("host").and_then(Value::as_str).unwrap_or("127.0.0.1");
    let verbose = result.option("verbose").and_then(Value::as_bool).unwrap_or(false);

    for (name, raw) in &result.invalids {
        eprintln!("ignoring invalid --{name}: {raw:?}");
    }

    println!("{} {host}:{port} (verbose: {verbose})", result.commands[0]);
}
