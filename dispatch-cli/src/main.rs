//! Entry point for the `dispatch` command-line tool.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use dispatch_cli::CliError;

fn main() -> ExitCode {
    env_logger::init();
    match dispatch_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

#[expect(clippy::print_stderr, reason = "fatal CLI errors are reported on stderr")]
fn report(err: &CliError) {
    log::debug!("{err:?}");
    eprintln!("dispatch: {err}");
}
