//! Interactive expense book shell
//!
//! Reads one request per line, tokenised like a POSIX shell and parsed with
//! the same clap definitions as the command line. The category view lives
//! as long as the session, so `switch` and `find` change what later
//! `delete` and `edit` numbers refer to.

use std::io::{BufRead, Write};

use clap::Parser;
use shell_words::split;
use tracing::debug;

use crate::error::BookResult;

use super::book::BookCommands;
use super::session::Session;

#[derive(Parser, Debug)]
#[command(name = "expense", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: BookCommands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Run the shell until `exit`, `quit` or end of input
///
/// With `interactive` set a prompt is printed before each line.
pub fn run_shell<R, W>(session: &mut Session, input: R, mut output: W, interactive: bool) -> BookResult<()>
where
    R: BufRead,
    W: Write,
{
    if interactive {
        writeln!(output, "Expense book shell. Type 'help' for commands, 'exit' to quit.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(output, "expense> ")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        if handle_line(session, &line?, &mut output)? == LoopControl::Exit {
            break;
        }
    }

    Ok(())
}

/// Handle one input line; request failures are reported, not returned
pub fn handle_line<W: Write>(session: &mut Session, line: &str, output: &mut W) -> BookResult<LoopControl> {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            writeln!(output, "Invalid command format! {}", err)?;
            return Ok(LoopControl::Continue);
        }
    };

    let Some(first) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };
    if matches!(first.as_str(), "exit" | "quit") {
        return Ok(LoopControl::Exit);
    }

    debug!(command = %first, "shell request");
    let parsed = match ShellLine::try_parse_from(&tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            write!(output, "{}", err.render())?;
            return Ok(LoopControl::Continue);
        }
    };

    match session.handle(parsed.command) {
        Ok(message) => writeln!(output, "{}", message)?,
        Err(err) => writeln!(output, "{}", err)?,
    }

    Ok(LoopControl::Continue)
}
