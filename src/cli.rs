//! The dispatch engine.
//!
//! [`Cli`] owns the registered [`Command`]s plus the program's own name,
//! description, and raw argument vector. [`Cli::handle`] inspects the first
//! argument and reaches exactly one of four outcomes: top-level usage,
//! per-command help, a command run, or the unknown-command message.

use std::io::{self, Write};
use std::process;

use tracing::debug;

use crate::command::Command;
use crate::error::Result;
use crate::usage;

/// The whole CLI program: name, description, arguments, and the ordered
/// collection of registered commands.
pub struct Cli {
    name: String,
    description: String,
    args: Vec<String>,
    commands: Vec<Command>,
}

impl Cli {
    /// Create a dispatcher.
    ///
    /// `args` is the raw argument vector with the program name already
    /// stripped; its first element, if present, selects the sub-command.
    pub fn new(name: &str, description: &str, args: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            args,
            commands: Vec::new(),
        }
    }

    /// Append a command to the collection.
    ///
    /// Duplicate names are not detected; when two commands share a name or
    /// short name the first registered wins at dispatch time.
    pub fn register(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Append several commands, preserving their order.
    pub fn register_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        self.commands.extend(commands);
    }

    /// Write the top-level usage listing to stdout.
    pub fn usage(&self) {
        let text = usage::cli_usage(&self.name, &self.description, &self.commands);
        write_or_die(io::stdout(), &text);
    }

    /// Route the first argument to a registered command.
    ///
    /// - no arguments, or a lone `help` → top-level usage, `Ok(())`
    /// - `help <target>` where `<target>` is a command's name or short name
    ///   → that command's usage on stderr, `Ok(())`; its flag-set is not
    ///   parsed and its behavior does not run
    /// - a command's name or short name → parse its flags against the
    ///   remaining arguments, then run it and return its result unchanged;
    ///   malformed flags print the command's usage and flag defaults to
    ///   stderr and terminate the process with a non-zero status
    /// - anything else → the unknown-command message on stdout, `Ok(())`
    pub fn handle(&mut self) -> Result<()> {
        if self.args.is_empty() || (self.args.len() == 1 && self.args[0] == "help") {
            self.usage();
            return Ok(());
        }

        if self.args[0] == "help" {
            let target = &self.args[1];
            if let Some(cmd) = self.commands.iter().find(|c| c.matches(target)) {
                debug!(command = %cmd.name(), "rendering command usage");
                cmd.usage();
                return Ok(());
            }
            self.unknown_command();
            return Ok(());
        }

        for cmd in &mut self.commands {
            if !cmd.matches(&self.args[0]) {
                continue;
            }
            debug!(command = %cmd.name(), "dispatching");
            if let Err(err) = cmd.flags_mut().parse(&self.args[1..]) {
                eprintln!("{err}");
                cmd.usage();
                eprint!("{}", cmd.flags().defaults());
                process::exit(1);
            }
            return cmd.run();
        }

        self.unknown_command();
        Ok(())
    }

    fn unknown_command(&self) {
        debug!(selector = %self.args[0], "no command matched");
        write_or_die(io::stdout(), &usage::unknown_command(&self.name));
    }
}

/// Write `text` to `stream`, or log and terminate the process.
fn write_or_die(mut stream: impl Write, text: &str) {
    if let Err(err) = stream.write_all(text.as_bytes()) {
        tracing::error!("failed to write usage text: {err}");
        process::exit(1);
    }
}
