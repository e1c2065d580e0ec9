//! Shell commands
//!
//! One command per input line, one JSON `CommandResult` per output line.
//! These stand in for the click callbacks of the navigation bar and the tab
//! strip.

pub mod tabs;
pub mod view;

use std::io::{BufRead, Write};

use thiserror::Error;

use erp_core::{OpenPolicy, Section, TabError};

use crate::state::AppState;
use tabs::CommandResult;

const HELP: &[&str] = &[
    "open <section> [title...]",
    "open-new <section> [title...]",
    "open-single <section>",
    "select <tab-id>",
    "close <tab-id>",
    "close-all",
    "tabs",
    "active",
    "view",
    "policy [multi|singleton]",
    "help",
    "quit",
];

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for `{command}`: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Tab(#[from] TabError),

    #[error("Unknown policy: {0} (expected `multi` or `singleton`)")]
    UnknownPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open {
        section: Section,
        title: Option<String>,
        policy: Option<OpenPolicy>,
    },
    Select(String),
    Close(String),
    CloseAll,
    Tabs,
    Active,
    View,
    Policy(Option<OpenPolicy>),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_lowercase();
        let rest = parts.next().map(str::trim).filter(|s| !s.is_empty());

        let command = match name.as_str() {
            "open" => Self::parse_open("open", rest, None)?,
            "open-new" => Self::parse_open("open-new", rest, Some(OpenPolicy::MultiInstance))?,
            "open-single" => {
                Self::parse_open("open-single", rest, Some(OpenPolicy::SingletonPerSection))?
            }
            "select" => Command::Select(require("select", "a tab id", rest)?.to_string()),
            "close" => Command::Close(require("close", "a tab id", rest)?.to_string()),
            "close-all" => Command::CloseAll,
            "tabs" => Command::Tabs,
            "active" => Command::Active,
            "view" => Command::View,
            "policy" => Command::Policy(rest.map(parse_policy).transpose()?),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::UnknownCommand(name)),
        };

        Ok(Some(command))
    }

    fn parse_open(
        command: &'static str,
        rest: Option<&str>,
        policy: Option<OpenPolicy>,
    ) -> Result<Self, CommandError> {
        let rest = require(command, "a section", rest)?;
        let mut parts = rest.splitn(2, char::is_whitespace);
        let section = parts.next().unwrap_or_default().parse::<Section>()?;
        let title = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Command::Open {
            section,
            title,
            policy,
        })
    }
}

fn require<'a>(
    command: &'static str,
    expected: &'static str,
    arg: Option<&'a str>,
) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command, expected })
}

fn parse_policy(raw: &str) -> Result<OpenPolicy, CommandError> {
    match raw.to_lowercase().as_str() {
        "multi" | "multi_instance" => Ok(OpenPolicy::MultiInstance),
        "singleton" | "single" | "singleton_per_section" => Ok(OpenPolicy::SingletonPerSection),
        _ => Err(CommandError::UnknownPolicy(raw.to_string())),
    }
}

/// Run a command and serialize its result
pub fn execute(state: &AppState, command: Command) -> serde_json::Result<String> {
    match command {
        Command::Open {
            section,
            title,
            policy,
        } => serde_json::to_string(&tabs::open_tab(state, section, title, policy)),
        Command::Select(id) => serde_json::to_string(&tabs::activate_tab(state, &id)),
        Command::Close(id) => serde_json::to_string(&tabs::close_tab(state, &id)),
        Command::CloseAll => serde_json::to_string(&tabs::close_all_tabs(state)),
        Command::Tabs => serde_json::to_string(&tabs::get_tabs(state)),
        Command::Active => serde_json::to_string(&tabs::get_active_tab(state)),
        Command::View => serde_json::to_string(&view::get_view(state)),
        Command::Policy(policy) => serde_json::to_string(&tabs::set_policy(state, policy)),
        Command::Help => serde_json::to_string(&CommandResult::ok(HELP)),
        Command::Quit => serde_json::to_string(&CommandResult::ok(())),
    }
}

/// Read commands from `input` until EOF or `quit`, writing one reply per line
pub fn run<R: BufRead, W: Write>(state: &AppState, input: R, mut output: W) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;

        let reply = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => {
                writeln!(output, "{}", execute(state, Command::Quit)?)?;
                break;
            }
            Ok(Some(command)) => {
                tracing::debug!(?command, "Executing command");
                execute(state, command)?
            }
            Err(e) => {
                tracing::warn!(input = %line.trim(), error = %e, "Rejected command");
                serde_json::to_string(&CommandResult::<()>::err(e.to_string()))?
            }
        };

        writeln!(output, "{reply}")?;
        output.flush()?;
    }

    Ok(())
}
