// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line-oriented console over the orchestrator
//!
//! One command per line. `log` switches to paste mode until a line holding
//! a single `.`. Nothing but `quit` or end of input ends the session.

use std::io::Write;
use std::str::FromStr;

use git_tutor_ai::GenerativeModel;
use git_tutor_github::HttpTransport;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::app::App;
use crate::render;
use crate::state::{Dispatch, Slot, View};

/// Ends a pasted log
pub const END_OF_PASTE: &str = ".";

/// Printed by `help`
pub const HELP: &str = "\
Commands:
  url <url>                   set the repository URL
  fetch                       load log and description from GitHub
  describe <text>             set the project description
  log                         paste a git log, end with a line holding a single '.'
  demo                        load the sample repository
  analyze                     analyse the log
  dashboard                   show the repository dashboard
  commits                     list analysed commits
  select <n>                  show commit n
  next | prev                 move through commits
  explain [student|expert]    explain the selected commit
  chat <text>                 ask the tutor about this repository
  history                     show the chat transcript
  help                        show this help
  quit                        leave";

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the repository URL
    Url(String),
    /// Load from GitHub
    Fetch,
    /// Set the description
    Describe(String),
    /// Start pasting a log
    Log,
    /// Load the demo
    Demo,
    /// Run the analysis
    Analyze,
    /// Show the dashboard
    Dashboard,
    /// List commits
    Commits,
    /// Select a commit, 1-based
    Select(usize),
    /// Select the following commit
    Next,
    /// Select the preceding commit
    Prev,
    /// Explain the selected commit, optionally switching tone
    Explain(Option<bool>),
    /// Send a chat message
    Chat(String),
    /// Show the transcript
    History,
    /// Show help
    Help,
    /// Leave
    Quit,
}

/// Why a line is not a command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Blank line
    #[error("empty command")]
    Empty,

    /// First word is not a command
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),

    /// Command needs an argument
    #[error("`{0}` needs an argument; type `help` for usage")]
    MissingArgument(&'static str),

    /// Argument has the wrong form
    #[error("invalid argument for `{command}`: {value}")]
    InvalidArgument {
        /// Command name
        command: &'static str,
        /// What was given
        value: String,
    },
}

fn required(command: &'static str, rest: &str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest.to_string())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "url" => required("url", rest).map(Self::Url),
            "fetch" => Ok(Self::Fetch),
            "describe" => required("describe", rest).map(Self::Describe),
            "log" => Ok(Self::Log),
            "demo" => Ok(Self::Demo),
            "analyze" | "analyse" => Ok(Self::Analyze),
            "dashboard" => Ok(Self::Dashboard),
            "commits" => Ok(Self::Commits),
            "select" => {
                let n = required("select", rest)?;
                match n.parse::<usize>() {
                    Ok(i) if i > 0 => Ok(Self::Select(i)),
                    _ => Err(CommandError::InvalidArgument {
                        command: "select",
                        value: n,
                    }),
                }
            }
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "explain" => match rest.to_ascii_lowercase().as_str() {
                "" => Ok(Self::Explain(None)),
                "student" => Ok(Self::Explain(Some(true))),
                "expert" => Ok(Self::Explain(Some(false))),
                _ => Err(CommandError::InvalidArgument {
                    command: "explain",
                    value: rest.to_string(),
                }),
            },
            "chat" => required("chat", rest).map(Self::Chat),
            "history" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Read lines until a lone `.` or end of input
async fn read_paste<R>(lines: &mut tokio::io::Lines<R>) -> std::io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut log = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == END_OF_PASTE {
            break;
        }
        log.push(line);
    }
    Ok(log.join("\n"))
}

fn ignored<W: Write>(out: &mut W, outcome: Dispatch, hint: &str) -> std::io::Result<bool> {
    if outcome == Dispatch::Ignored {
        writeln!(out, "{hint}")?;
        return Ok(true);
    }
    Ok(false)
}

/// Run the console until `quit` or end of input
///
/// # Errors
///
/// Returns an error only when reading `input` or writing `out` fails.
pub async fn run<T, M, R, W>(app: &App<T, M>, input: R, mut out: W) -> std::io::Result<()>
where
    T: HttpTransport,
    M: GenerativeModel,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    use crate::state::Action;

    writeln!(out, "AI Git Tutor. Type `help` for commands, `demo` to try it out.")?;
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        debug!(?command, "Console command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Url(url) => {
                app.dispatch(Action::SetRepoUrl(url)).await;
            }
            Command::Describe(text) => {
                app.dispatch(Action::SetDescription(text)).await;
            }
            Command::Log => {
                writeln!(out, "Paste the log, then a line with a single '{END_OF_PASTE}':")?;
                out.flush()?;
                let log = read_paste(&mut lines).await?;
                app.dispatch(Action::SetLog(log)).await;
                write!(out, "{}", render::landing(&app.snapshot().await))?;
            }
            Command::Demo => {
                app.load_demo().await;
                write!(out, "{}", render::landing(&app.snapshot().await))?;
            }
            Command::Fetch => {
                let outcome = app.load_github().await;
                if !ignored(&mut out, outcome, "Set a repository URL first with `url`.")? {
                    write!(out, "{}", render::landing(&app.snapshot().await))?;
                }
            }
            Command::Analyze => {
                writeln!(out, "Analyzing...")?;
                let outcome = app.analyze().await;
                if !ignored(&mut out, outcome, "Paste a log with `log` or load `demo` first.")? {
                    write!(out, "{}", render::view(&app.snapshot().await))?;
                }
            }
            Command::Dashboard => {
                let outcome = app.navigate(View::Dashboard).await;
                if !ignored(&mut out, outcome, "Run `analyze` first.")? {
                    write!(out, "{}", render::view(&app.snapshot().await))?;
                }
            }
            Command::Commits => {
                let state = app.snapshot().await;
                match state.analysis() {
                    Some(result) => {
                        write!(out, "{}", render::commit_list(result, state.selected_index()))?;
                    }
                    None => writeln!(out, "Run `analyze` first.")?,
                }
            }
            Command::Select(n) => {
                let outcome = app.select_commit(n - 1).await;
                if !ignored(&mut out, outcome, "No such commit.")? {
                    write!(out, "{}", render::view(&app.snapshot().await))?;
                }
            }
            Command::Next | Command::Prev => {
                let state = app.snapshot().await;
                let forward = command == Command::Next;
                let target = match (forward, state.selected_index()) {
                    (true, Some(i)) => Some(i + 1),
                    (false, Some(i)) => i.checked_sub(1),
                    (_, None) => Some(0),
                };
                let outcome = match target {
                    Some(i) => app.select_commit(i).await,
                    None => Dispatch::Ignored,
                };
                if !ignored(&mut out, outcome, "No more commits in that direction.")? {
                    write!(out, "{}", render::view(&app.snapshot().await))?;
                }
            }
            Command::Explain(mode) => {
                let outcome = app.explain_selected(mode).await;
                if !ignored(&mut out, outcome, "Select a commit first.")? {
                    write!(out, "{}", render::view(&app.snapshot().await))?;
                }
            }
            Command::Chat(text) => {
                let outcome = app.send_chat(text).await;
                if !ignored(&mut out, outcome, "Run `analyze` before chatting.")? {
                    let state = app.snapshot().await;
                    if let Some(reply) = state.transcript().last() {
                        writeln!(out, "tutor: {}", reply.content)?;
                    }
                }
            }
            Command::History => {
                let state = app.snapshot().await;
                if state.transcript().is_empty() {
                    writeln!(out, "No messages yet.")?;
                } else {
                    write!(out, "{}", render::transcript(state.transcript()))?;
                }
                if state.is_busy(Slot::Chat) {
                    writeln!(out, "(waiting for a reply)")?;
                }
            }
        }
    }

    writeln!(out, "Bye.")?;
    Ok(())
}
