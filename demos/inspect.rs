use argsift::{parse, Arguments, Config};

fn main() {
    let result = parse(Arguments::from_env(), &Config::default());

    println!("program: {}", result.program);
    println!("commands: {:?}", result.commands);

    let mut options: Vec<_> = result.options.iter().collect();
    options.sort_by(|a, b| a.0.cmp(b.0));

    for (name, value) in options {
        println!("option {name}: {value}");
    }
}
