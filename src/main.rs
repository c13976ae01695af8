// SPDX-License-Identifier: MPL-2.0
//! Interactive driver for the toast queue.
//!
//! Reads one command per line from stdin and prints the queue whenever it
//! changes. Type `help` for the command list.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;
use toast_queue::config;
use toast_queue::error::{Error, Result};
use toast_queue::notifications::{Clock, SystemClock, Toast, ToastId, ToastKind, ToastManager};

const HELP: &str = "\
commands:
  show <kind> <ms> <message>   show a toast (ms = 0 for sticky)
  <kind> <message>             show with the kind's default duration
  hide <id> | pause <id> | resume <id>
  clear | list | history | help | quit
kinds: success, error, warning, info";

#[derive(Debug, PartialEq)]
enum Command {
    Show {
        kind: ToastKind,
        duration: Option<Duration>,
        message: String,
    },
    Hide(u64),
    Pause(u64),
    Resume(u64),
    Clear,
    List,
    History,
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let line = line.trim();
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let id = |rest: &str| {
        rest.parse::<u64>()
            .map_err(|_| format!("expected a toast id, got `{rest}`"))
    };

    match head {
        "show" => {
            let mut parts = rest.splitn(3, ' ');
            let kind = parts.next().unwrap_or_default().parse::<ToastKind>()?;
            let millis = parts
                .next()
                .unwrap_or_default()
                .parse::<u64>()
                .map_err(|_| "expected a duration in milliseconds".to_string())?;
            Ok(Command::Show {
                kind,
                duration: Some(Duration::from_millis(millis)),
                message: parts.next().unwrap_or_default().to_string(),
            })
        }
        "hide" => id(rest).map(Command::Hide),
        "pause" => id(rest).map(Command::Pause),
        "resume" => id(rest).map(Command::Resume),
        "clear" => Ok(Command::Clear),
        "list" => Ok(Command::List),
        "history" => Ok(Command::History),
        "help" | "" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => match other.parse::<ToastKind>() {
            Ok(kind) => Ok(Command::Show {
                kind,
                duration: None,
                message: rest.to_string(),
            }),
            Err(_) => Err(format!("unknown command `{other}`, try `help`")),
        },
    }
}

fn render(toasts: &[Toast]) {
    let now = SystemClock.now();
    if toasts.is_empty() {
        println!("(no toasts)");
    }
    for toast in toasts {
        let countdown = match toast.time_left(now) {
            Some(left) => format!("{}ms left", left.as_millis()),
            None => "sticky".to_string(),
        };
        println!(
            "#{} [{}] {} ({:?}, {})",
            toast.id(),
            toast.kind(),
            toast.message(),
            toast.state(),
            countdown
        );
    }
}

fn find(manager: &ToastManager, raw: u64) -> Option<ToastId> {
    manager
        .snapshot()
        .iter()
        .map(Toast::id)
        .find(|id| id.value() == raw)
}

fn run_commands(manager: &ToastManager, input: impl BufRead) -> Result<()> {
    println!("{HELP}");
    for line in input.lines() {
        let command = match parse_command(&line?) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match command {
            Command::Show {
                kind,
                duration,
                message,
            } => {
                let id = match duration {
                    Some(duration) => manager.show(kind, message, Some(duration)),
                    None => match kind {
                        ToastKind::Success => manager.success(message, None),
                        ToastKind::Error => manager.error(message, None),
                        ToastKind::Warning => manager.warning(message, None),
                        ToastKind::Info => manager.info(message, None),
                    },
                };
                println!("shown #{id}");
            }
            Command::Hide(raw) => {
                if let Some(id) = find(manager, raw) {
                    manager.hide(id);
                }
            }
            Command::Pause(raw) => {
                if let Some(id) = find(manager, raw) {
                    manager.pause(id);
                }
            }
            Command::Resume(raw) => {
                if let Some(id) = find(manager, raw) {
                    manager.resume(id);
                }
            }
            Command::Clear => {
                println!("cleared {}", manager.clear());
            }
            Command::List => render(&manager.snapshot()),
            Command::History => {
                for record in manager.history() {
                    println!(
                        "{} #{} [{}] {} ({})",
                        record.dismissed_at.format("%H:%M:%S%.3f"),
                        record.toast.id(),
                        record.toast.kind(),
                        record.toast.message(),
                        record.reason
                    );
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("usage: toast_queue [--config <path>]\n\n{HELP}");
        return Ok(());
    }
    let config_path: Option<PathBuf> = args
        .opt_value_from_str("--config")
        .map_err(|err| Error::Config(err.to_string()))?;

    let config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };

    let manager = ToastManager::new(&config)?;

    let mut view = manager.subscribe();
    tokio::spawn(async move {
        while view.changed().await.is_ok() {
            let toasts = view.borrow_and_update().clone();
            render(&toasts);
        }
    });

    let driver = manager.clone();
    tokio::task::spawn_blocking(move || run_commands(&driver, io::stdin().lock()))
        .await
        .map_err(|err| Error::Runtime(err.to_string()))?
}
