//! Usage text rendering.
//!
//! Pure formatting functions for the top-level listing and the
//! unknown-command message. The dispatcher decides when to render and where
//! the text goes; nothing here touches a stream.

use crate::command::Command;

/// Render the top-level usage listing: program name, description, one line
/// per registered command, and the `help [command]` hint.
pub fn cli_usage(name: &str, description: &str, commands: &[Command]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{name} - {description}\n\n"));
    out.push_str("    Usage:\n        command [options] {arguments}\n\n");
    out.push_str("    The commands are:\n        ");
    for cmd in commands {
        out.push_str(&format!(
            " {}, {}     {}\n        ",
            cmd.name(),
            cmd.short_name(),
            cmd.description()
        ));
    }
    out.push_str(&format!(
        "\n    Use \"{name} help [command]\" for more information about a command.\n\n"
    ));
    out
}

/// Render the message printed when the first argument matches no command.
pub fn unknown_command(name: &str) -> String {
    format!("unknown command\n\nUse \"{name} help\" for usage information.\n\n")
}
