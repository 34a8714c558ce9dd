//! Sub-command records.
//!
//! A [`Command`] is a closure-holding record: identity fields, a usage
//! line, an exclusively-owned [`FlagSet`], and the behavior to run once the
//! flag-set has been parsed. Commands that need state beyond their flags
//! capture it in the behavior closure; there is no command trait to
//! implement.

use std::fmt;

use crate::error::Result;
use crate::flags::FlagSet;

/// Behavior invoked when a command is dispatched.
///
/// The borrow gives the behavior access to the command's flag-set (for the
/// positional remainder) and its usage text; flag values are read through
/// the [`FlagCell`](crate::FlagCell)s captured at registration time.
pub type Behavior = Box<dyn Fn(&Command) -> Result<()>>;

/// One invocable sub-command.
pub struct Command {
    name: String,
    short_name: String,
    description: String,
    usage_line: String,
    flags: FlagSet,
    behavior: Behavior,
}

impl Command {
    /// Create a command with an empty flag-set and a no-op behavior.
    ///
    /// Register flags first, then attach the behavior with
    /// [`Command::behavior`] so the closure can capture the flag cells.
    pub fn new(name: &str, short_name: &str, description: &str, usage_line: &str) -> Self {
        Self {
            name: name.to_string(),
            short_name: short_name.to_string(),
            description: description.to_string(),
            usage_line: usage_line.to_string(),
            flags: FlagSet::new(),
            behavior: Box::new(|_| Ok(())),
        }
    }

    /// Attach the behavior to run when this command is dispatched.
    pub fn behavior<F>(mut self, behavior: F) -> Self
    where
        F: Fn(&Command) -> Result<()> + 'static,
    {
        self.behavior = Box::new(behavior);
        self
    }

    /// The name that selects this command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The abbreviated name that also selects this command.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// One-line description shown in the top-level listing.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The usage text printed by [`Command::usage`].
    pub fn usage_line(&self) -> &str {
        &self.usage_line
    }

    /// Borrowed access to the owned flag-set.
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Mutable access to the owned flag-set, for registration and parsing.
    pub fn flags_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    /// Write the command's usage text to stderr.
    pub fn usage(&self) {
        eprintln!("usage: {}", self.usage_line);
    }

    /// Run the behavior with the currently bound flag values, returning its
    /// result unchanged.
    pub fn run(&self) -> Result<()> {
        (self.behavior)(self)
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.name == token || self.short_name == token
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("short_name", &self.short_name)
            .field("description", &self.description)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
