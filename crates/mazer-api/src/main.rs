mod cli;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    match cli::run(args, stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
