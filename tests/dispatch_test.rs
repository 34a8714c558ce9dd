//! Dispatch routing through [`rudder::Cli::handle`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rudder::{Cli, Command, FlagCell};

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn counting(name: &str, short: &str, hits: &Rc<Cell<u32>>) -> Command {
    let hits = hits.clone();
    Command::new(name, short, "counts invocations", "demo counting").behavior(move |_| {
        hits.set(hits.get() + 1);
        Ok(())
    })
}

/// A push command with a string flag `f`, reporting the flag value and the
/// positional remainder it ran with.
fn push_command(
    hits: &Rc<Cell<u32>>,
    seen: &Rc<RefCell<Vec<String>>>,
) -> (Command, FlagCell<String>) {
    let mut cmd = Command::new("push", "p", "update remote refs", "demo push [options]");
    let f = cmd.flags_mut().string("f", "", "ref to push");
    let hits = hits.clone();
    let seen = seen.clone();
    let cmd = cmd.behavior(move |cmd| {
        hits.set(hits.get() + 1);
        seen.borrow_mut().extend(cmd.flags().args().iter().cloned());
        Ok(())
    });
    (cmd, f)
}

#[test]
fn empty_args_invokes_no_behavior() {
    let hits = Rc::new(Cell::new(0));
    let mut cli = Cli::new("demo", "a demo program", Vec::new());
    cli.register(counting("push", "p", &hits));
    cli.register(counting("pull", "pl", &hits));
    assert!(cli.handle().is_ok());
    assert_eq!(hits.get(), 0);
}

#[test]
fn short_name_dispatches_and_binds_flags() {
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (push, f) = push_command(&hits, &seen);
    let other = Rc::new(Cell::new(0));

    let mut cli = Cli::new("demo", "a demo program", argv(&["p", "-f", "x"]));
    cli.register(push);
    cli.register(counting("pull", "pl", &other));
    cli.handle().unwrap();

    assert_eq!(hits.get(), 1);
    assert_eq!(other.get(), 0);
    assert_eq!(f.get(), "x");
}

#[test]
fn full_name_dispatches() {
    let hits = Rc::new(Cell::new(0));
    let pull_hits = Rc::new(Cell::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (push, _) = push_command(&hits, &seen);

    let mut cli = Cli::new("demo", "a demo program", argv(&["pull"]));
    cli.register(push);
    cli.register(counting("pull", "pl", &pull_hits));
    cli.handle().unwrap();

    assert_eq!(hits.get(), 0);
    assert_eq!(pull_hits.get(), 1);
}

#[test]
fn positional_remainder_reaches_the_behavior() {
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (push, _) = push_command(&hits, &seen);

    let mut cli = Cli::new("demo", "a demo program", argv(&["push", "-f", "x", "a", "b"]));
    cli.register(push);
    cli.handle().unwrap();

    assert_eq!(*seen.borrow(), ["a", "b"]);
}

#[test]
fn unknown_command_is_not_an_error() {
    let hits = Rc::new(Cell::new(0));
    let mut cli = Cli::new("demo", "a demo program", argv(&["bogus"]));
    cli.register(counting("push", "p", &hits));
    assert!(cli.handle().is_ok());
    assert_eq!(hits.get(), 0);
}

#[test]
fn help_renders_without_parsing_or_running() {
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (push, f) = push_command(&hits, &seen);

    let mut cli = Cli::new("demo", "a demo program", argv(&["help", "push"]));
    cli.register(push);
    cli.handle().unwrap();

    assert_eq!(hits.get(), 0);
    assert_eq!(f.get(), "");
}

#[test]
fn help_accepts_the_short_name() {
    let hits = Rc::new(Cell::new(0));
    let mut cli = Cli::new("demo", "a demo program", argv(&["help", "p"]));
    cli.register(counting("push", "p", &hits));
    cli.handle().unwrap();
    assert_eq!(hits.get(), 0);
}

#[test]
fn help_with_unmatched_target_is_not_an_error() {
    let hits = Rc::new(Cell::new(0));
    let mut cli = Cli::new("demo", "a demo program", argv(&["help", "bogus"]));
    cli.register(counting("push", "p", &hits));
    assert!(cli.handle().is_ok());
    assert_eq!(hits.get(), 0);
}

#[test]
fn first_registered_command_wins_dispatch() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let mut cli = Cli::new("demo", "a demo program", argv(&["push"]));
    cli.register(counting("push", "p", &first));
    cli.register(counting("push", "p", &second));
    cli.handle().unwrap();
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
}

#[test]
fn first_registered_short_name_wins_dispatch() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let mut cli = Cli::new("demo", "a demo program", argv(&["p"]));
    cli.register(counting("push", "p", &first));
    cli.register(counting("prune", "p", &second));
    cli.handle().unwrap();
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
}

#[test]
fn behavior_failure_surfaces_unchanged() {
    let cmd = Command::new("fail", "f", "always fails", "demo fail")
        .behavior(|_| Err(anyhow::anyhow!("boom").into()));
    let mut cli = Cli::new("demo", "a demo program", argv(&["fail"]));
    cli.register(cmd);
    let err = cli.handle().unwrap_err();
    assert_eq!(err.to_string(), "boom");
}
