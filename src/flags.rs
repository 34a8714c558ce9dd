//! Per-command flag sets.
//!
//! Each [`Command`](crate::Command) owns exactly one [`FlagSet`]. Flags are
//! registered up front; registration hands back a [`FlagCell`] that the
//! command's behavior keeps. Parsing writes through the same cells the
//! behavior holds, so flag-sets are only ever reached through borrows —
//! handing out a copy would detach the behavior from the values the parser
//! just bound.
//!
//! # Parse grammar
//!
//! - `-name value` and `-name=value` bind a string flag; `--name` is
//!   accepted as a spelling of `-name`
//! - a boolean flag never consumes the following token: `-b` binds `true`,
//!   `-b=false` binds `false`
//! - parsing stops at the first token that does not begin with `-`, or at a
//!   bare `-`; a literal `--` is consumed and stops parsing
//! - everything after the stop point is the positional remainder

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{DispatchError, Result};

/// Shared handle to one flag's bound value.
///
/// Cloning a cell clones the handle, not the value; every clone observes
/// the value written by the most recent parse.
#[derive(Debug, Clone)]
pub struct FlagCell<T>(Rc<RefCell<T>>);

impl<T: Clone> FlagCell<T> {
    fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// The currently bound value.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }

    fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

#[derive(Debug)]
struct Flag {
    name: String,
    usage: String,
    value: FlagValue,
}

#[derive(Debug)]
enum FlagValue {
    Text { cell: FlagCell<String>, default: String },
    Switch { cell: FlagCell<bool>, default: bool },
}

/// The mutable collection of named option bindings and leftover positional
/// arguments for one command.
#[derive(Debug, Default)]
pub struct FlagSet {
    flags: Vec<Flag>,
    args: Vec<String>,
}

impl FlagSet {
    /// Create an empty flag-set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a string flag and return its cell, initialized to
    /// `default`.
    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> FlagCell<String> {
        let cell = FlagCell::new(default.to_string());
        self.flags.push(Flag {
            name: name.to_string(),
            usage: usage.to_string(),
            value: FlagValue::Text {
                cell: cell.clone(),
                default: default.to_string(),
            },
        });
        cell
    }

    /// Register a boolean flag and return its cell, initialized to
    /// `default`. On the command line, `-name` binds `true` and
    /// `-name=false` binds `false`; the token after the flag is never
    /// consumed.
    pub fn switch(&mut self, name: &str, default: bool, usage: &str) -> FlagCell<bool> {
        let cell = FlagCell::new(default);
        self.flags.push(Flag {
            name: name.to_string(),
            usage: usage.to_string(),
            value: FlagValue::Switch {
                cell: cell.clone(),
                default,
            },
        });
        cell
    }

    /// Positional remainder recorded by the most recent parse.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The `index`th positional argument, if present.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Parse `args`, binding flag cells in place and recording the
    /// positional remainder.
    ///
    /// Re-parsing overwrites whatever the previous parse bound and replaces
    /// the remainder; flags absent from `args` keep their current values.
    /// Use [`FlagSet::reset`] to restore defaults between runs.
    pub fn parse(&mut self, args: &[String]) -> Result<()> {
        self.args.clear();
        let mut i = 0;
        while i < args.len() {
            let token = args[i].as_str();
            if token == "-" || !token.starts_with('-') {
                break;
            }
            i += 1;
            if token == "--" {
                break;
            }
            let stripped = token.strip_prefix("--").unwrap_or(&token[1..]);
            let (name, inline) = match stripped.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (stripped, None),
            };
            if name.is_empty() || name.starts_with('-') {
                return Err(DispatchError::BadFlagSyntax {
                    token: token.to_string(),
                });
            }
            let flag = self.flags.iter().find(|f| f.name == name).ok_or_else(|| {
                DispatchError::UnknownFlag {
                    name: name.to_string(),
                }
            })?;
            match &flag.value {
                FlagValue::Switch { cell, .. } => {
                    let value = match inline {
                        None => true,
                        Some(raw) => {
                            parse_bool(&raw).ok_or(DispatchError::InvalidBoolValue {
                                name: name.to_string(),
                                value: raw,
                            })?
                        }
                    };
                    cell.set(value);
                }
                FlagValue::Text { cell, .. } => {
                    let value = match inline {
                        Some(value) => value,
                        None => {
                            let Some(next) = args.get(i) else {
                                return Err(DispatchError::MissingValue {
                                    name: name.to_string(),
                                });
                            };
                            i += 1;
                            next.clone()
                        }
                    };
                    cell.set(value);
                }
            }
        }
        self.args.extend(args[i..].iter().cloned());
        Ok(())
    }

    /// Render the one-line-per-flag listing printed when a parse fails:
    /// name, usage text, and the default when it is not the zero value.
    pub fn defaults(&self) -> String {
        let mut out = String::new();
        for flag in &self.flags {
            out.push_str(&format!("  -{}\t{}", flag.name, flag.usage));
            match &flag.value {
                FlagValue::Text { default, .. } if !default.is_empty() => {
                    out.push_str(&format!(" (default {default:?})"));
                }
                FlagValue::Switch { default: true, .. } => {
                    out.push_str(" (default true)");
                }
                _ => {}
            }
            out.push('\n');
        }
        out
    }

    /// Restore every cell to its registered default and clear the
    /// positional remainder.
    pub fn reset(&mut self) {
        for flag in &self.flags {
            match &flag.value {
                FlagValue::Text { cell, default } => cell.set(default.clone()),
                FlagValue::Switch { cell, default } => cell.set(*default),
            }
        }
        self.args.clear();
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
