//! Demo program for the rudder dispatch library.
//!
//! Registers three commands and hands the process argument vector to the
//! dispatcher. The integration tests drive this binary to observe exit
//! codes and stream output.

use std::env;
use std::process::ExitCode;

use rudder::{Cli, Command};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const GREET_USAGE: &str = "rudder-demo greet [options] {names}

    The options are:
        -name
            name to greet
        -shout
            greet loudly";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable;
/// the default is INFO.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rudder=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut cli = Cli::new("rudder-demo", "showcase for the rudder dispatch library", args);

    let mut greet = Command::new("greet", "g", "print a greeting", GREET_USAGE);
    let name = greet.flags_mut().string("name", "there", "name to greet");
    let shout = greet.flags_mut().switch("shout", false, "greet loudly");
    // State beyond the flags travels with the closure.
    let punctuation = String::from("!");
    let greet = greet.behavior(move |cmd| {
        let mut line = format!("hello, {}", name.get());
        if shout.get() {
            line = line.to_uppercase();
        }
        line.push_str(&punctuation);
        println!("{line}");
        for extra in cmd.flags().args() {
            println!("also greeting {extra}");
        }
        Ok(())
    });

    let version = Command::new("version", "v", "print the demo version", "rudder-demo version")
        .behavior(|_| {
            println!("rudder-demo {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        });

    let fail = Command::new("fail", "f", "always fails", "rudder-demo fail")
        .behavior(|_| Err(anyhow::anyhow!("this command always fails").into()));

    cli.register_all([greet, version, fail]);

    match cli.handle() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
