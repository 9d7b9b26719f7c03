use std::process::ExitCode;

fn main() -> ExitCode {
    figcode::cli::run()
}
