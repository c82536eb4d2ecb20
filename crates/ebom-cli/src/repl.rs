//! Line-oriented interactive navigation.
//!
//! Each line is one command. Levels are numbered from 1 as in the rendered
//! view; a key is the rest of the line, so keys may contain spaces.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use ebom_core::Session;
use tracing::debug;

use crate::render::ViewFormat;

pub const HELP: &str = "\
commands:
  select <level> <key>   choose <key> at level <level> (1 = items under the root)
  part <part number>     choose a part under the current leaf
  window <n>             show <n> levels side by side
  show                   print the current view
  reset                  clear every selection
  help                   print this help
  quit                   leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Zero-based depth, converted from the one-based level typed by the user.
    Select { depth: usize, key: String },
    Part(String),
    Window(usize),
    Show,
    Reset,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_lowercase().as_str() {
        "select" | "s" => {
            let Some((level, key)) = rest.split_once(char::is_whitespace) else {
                bail!("usage: select <level> <key>");
            };
            let level: usize = level
                .parse()
                .with_context(|| format!("level must be a number, got '{level}'"))?;
            if level == 0 {
                bail!("levels start at 1");
            }
            ReplCommand::Select {
                depth: level - 1,
                key: key.trim().to_string(),
            }
        }
        "part" | "p" => {
            if rest.is_empty() {
                bail!("usage: part <part number>");
            }
            ReplCommand::Part(rest.to_string())
        }
        "window" | "w" => {
            let size: usize = rest
                .parse()
                .with_context(|| format!("window must be a number, got '{rest}'"))?;
            ReplCommand::Window(size)
        }
        "show" => ReplCommand::Show,
        "reset" => ReplCommand::Reset,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(Some(command))
}

/// Run commands from `input` against `session`, writing views to `output`.
///
/// Rejected selections and malformed commands print a warning and the loop
/// continues. Ends at `quit` or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    format: ViewFormat,
    input: R,
    mut output: W,
) -> Result<()> {
    print_view(session, format, &mut output)?;
    for line in input.lines() {
        let line = line.context("read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(output, "warning: {error:#}")?;
                continue;
            }
        };
        debug!(?command, "repl command");
        let outcome = match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            ReplCommand::Show => Ok(()),
            ReplCommand::Reset => {
                session.reset();
                Ok(())
            }
            ReplCommand::Window(size) => {
                session.set_window_size(size);
                Ok(())
            }
            ReplCommand::Select { depth, key } => session.select_at(depth, &key).map(|_| ()),
            ReplCommand::Part(part_number) => session.select_part(&part_number),
        };
        match outcome {
            Ok(()) => print_view(session, format, &mut output)?,
            Err(error) => writeln!(output, "warning: {error}")?,
        }
    }
    output.flush()?;
    Ok(())
}

fn print_view<W: Write>(session: &Session, format: ViewFormat, output: &mut W) -> Result<()> {
    let rendered = format.render(&session.view()).context("render view")?;
    writeln!(output, "{rendered}")?;
    Ok(())
}
