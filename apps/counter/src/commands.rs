//! # Counter Commands
//!
//! Operator input parsing and the interactive loop.
//!
//! ## Command Reference
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input          Aliases        Session call                            │
//! │  ─────          ───────        ────────────                            │
//! │  menu                          catalog().list_display_strings()        │
//! │  start          new            start_order()                           │
//! │  add <n>                       add_selection(n)     n = menu position  │
//! │  remove <n>     rm             remove_selection(n)  n = order line     │
//! │  show           ls, order      current_lines()                         │
//! │  finish         pay            finish_order() ──► receipt              │
//! │  cancel                        abandon_order()                         │
//! │  help           ?                                                      │
//! │  quit           exit, q                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mistakes are printed as `[CODE] message` and the loop keeps going.
//! Only a failure to read or write the terminal stops it.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use cafe_core::{render_receipt, Priced};

use crate::error::{CounterError, CounterResult};
use crate::session::{BilledOrder, CounterSession};

const HELP: &str = "\
Commands:
  menu        show the menu
  start       start a new order
  add <n>     add menu item n to the order
  remove <n>  remove line n from the order
  show        show the current order
  finish      bill the order and print the receipt
  cancel      abandon the current order
  help        show this help
  quit        leave the counter";

const PROMPT: &str = "> ";

/// One line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterCommand {
    Menu,
    Start,
    Add(usize),
    Remove(usize),
    Show,
    Finish,
    Cancel,
    Help,
    Quit,
}

impl FromStr for CounterCommand {
    type Err = CounterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let word = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        let number = |command: &str| -> CounterResult<usize> {
            arg.and_then(|a| a.parse().ok())
                .ok_or_else(|| CounterError::BadArgument {
                    command: command.to_string(),
                })
        };

        let command = match word.as_str() {
            "menu" => CounterCommand::Menu,
            "start" | "new" => CounterCommand::Start,
            "add" => CounterCommand::Add(number("add")?),
            "remove" | "rm" => CounterCommand::Remove(number("remove")?),
            "show" | "ls" | "order" => CounterCommand::Show,
            "finish" | "pay" => CounterCommand::Finish,
            "cancel" => CounterCommand::Cancel,
            "help" | "?" => CounterCommand::Help,
            "quit" | "exit" | "q" => CounterCommand::Quit,
            _ => return Err(CounterError::UnknownCommand(input.trim().to_string())),
        };

        if parts.next().is_some() {
            return Err(CounterError::UnknownCommand(input.trim().to_string()));
        }

        Ok(command)
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Prints the numbered menu.
pub fn print_menu<W: Write>(session: &CounterSession, out: &mut W) -> CounterResult<()> {
    writeln!(out, "Menu:")?;
    for (i, line) in session.catalog().list_display_strings().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, line)?;
    }
    Ok(())
}

/// Prints a billed order as text or JSON.
pub fn print_billed<W: Write>(
    session: &CounterSession,
    billed: &BilledOrder,
    json: bool,
    out: &mut W,
) -> CounterResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(billed)?)?;
    } else {
        writeln!(out, "{}", render_receipt(&billed.receipt, session.layout()))?;
        writeln!(
            out,
            "Order {} issued {}",
            billed.order_id,
            billed.issued_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
    }
    Ok(())
}

/// Runs a single command against the session.
pub fn execute<W: Write>(
    session: &mut CounterSession,
    command: CounterCommand,
    json: bool,
    out: &mut W,
) -> CounterResult<Flow> {
    debug!(?command, "Executing command");

    match command {
        CounterCommand::Menu => print_menu(session, out)?,
        CounterCommand::Start => {
            session.start_order();
            writeln!(out, "New order has been started!")?;
        }
        CounterCommand::Add(position) => {
            let item = session.add_selection(position)?;
            writeln!(out, "Added: {}", item.name())?;
        }
        CounterCommand::Remove(line) => {
            let item = session.remove_selection(line)?;
            writeln!(out, "Removed: {}", item.name())?;
        }
        CounterCommand::Show => {
            let lines = session.current_lines()?;
            writeln!(out, "Current Order:")?;
            if lines.is_empty() {
                writeln!(out, "  (empty)")?;
            }
            for line in &lines {
                writeln!(out, "  {}", line)?;
            }
            let subtotal = session.current_order()?.calculate_subtotal();
            writeln!(out, "Subtotal: {}", subtotal)?;
        }
        CounterCommand::Finish => {
            let billed = session.finish_order()?;
            print_billed(session, &billed, json, out)?;
        }
        CounterCommand::Cancel => {
            session.abandon_order()?;
            writeln!(out, "Order cancelled.")?;
        }
        CounterCommand::Help => writeln!(out, "{}", HELP)?,
        CounterCommand::Quit => {
            writeln!(out, "Goodbye.")?;
            return Ok(Flow::Quit);
        }
    }

    Ok(Flow::Continue)
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run_loop<R, W>(
    session: &mut CounterSession,
    input: R,
    out: &mut W,
    json: bool,
) -> CounterResult<()>
where
    R: BufRead,
    W: Write,
{
    print_menu(session, out)?;
    writeln!(out, "Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = line
            .parse::<CounterCommand>()
            .and_then(|command| execute(session, command, json, out));

        match outcome {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(CounterError::Io(e)) => return Err(CounterError::Io(e)),
            Err(e) => {
                warn!(error = %e, input = %line.trim(), "Command rejected");
                writeln!(out, "{}", e.user_message())?;
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
