//! Rudder - minimal sub-command dispatch for command-line programs.
//!
//! A program hands a [`Cli`] its name, a description, and the raw argument
//! vector (program name already stripped). The first argument selects a
//! registered [`Command`]; that command's [`FlagSet`] is parsed against the
//! remaining arguments and its behavior runs. No argument, `help`, and
//! unrecognized tokens fall back to usage output instead.
//!
//! # Modules
//!
//! - [`cli`] - The dispatch engine
//! - [`command`] - Sub-command records
//! - [`error`] - Error types and result alias
//! - [`flags`] - Per-command flag sets
//! - [`usage`] - Usage text rendering
//!
//! # Example
//!
//! ```
//! use rudder::{Cli, Command};
//!
//! let args = vec!["greet".to_string(), "-name".to_string(), "world".to_string()];
//! let mut cli = Cli::new("demo", "a demo program", args);
//!
//! let mut greet = Command::new("greet", "g", "print a greeting", "demo greet [options]");
//! let name = greet.flags_mut().string("name", "there", "name to greet");
//! let greet = greet.behavior(move |_| {
//!     println!("hello, {}", name.get());
//!     Ok(())
//! });
//!
//! cli.register(greet);
//! cli.handle().unwrap();
//! ```

pub mod cli;
pub mod command;
pub mod error;
pub mod flags;
pub mod usage;

pub use cli::Cli;
pub use command::{Behavior, Command};
pub use error::{DispatchError, Result};
pub use flags::{FlagCell, FlagSet};
