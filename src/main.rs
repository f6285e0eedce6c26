use std::io;

use highlighter_wrapper::cli;
use highlighter_wrapper::input::InputReader;

fn main() {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let code = cli::run(
        &args,
        InputReader::stdin(),
        io::stdout().lock(),
        io::stderr().lock(),
    );
    std::process::exit(code);
}
