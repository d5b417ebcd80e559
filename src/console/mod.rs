use std::io::{BufRead, Write};

use dto::club::Club;
use log::{debug, error};

use crate::console::error::ConsoleError;
use crate::error::{ApplicationError, Result};
use crate::registry::club_registry::ClubRegistry;

pub mod config;
pub mod error;

const MENU: &str = "Welcome to the club management program.\n\
 Press 1 to add a club.\n\
 Press 2 to remove a club.\n\
 Press 3 to list all clubs.\n\
 Press 4 to quit.";

/// What the loop should do once a selection has been handled.
enum Flow {
    Continue,
    Quit,
}

/// Runs the interactive menu until the user quits or the input ends.
/// Registry failures are logged and the loop keeps running; only I/O
/// failures abort it.
pub fn run<R, W>(registry: &mut ClubRegistry, input: &mut R, output: &mut W) -> Result<i32>
where
    R: BufRead,
    W: Write,
{
    loop {
        write_line(output, MENU)?;
        let Some(selection) = read_line(input)? else {
            debug!("Console input closed, shutting down.");
            return Ok(0);
        };

        match handle_selection(registry, &selection, input, output) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(0),
            Err(e @ ApplicationError::Console(_)) => return Err(e),
            Err(e) => error!("The last command failed; the console keeps running.\n{e:#?}"),
        }
    }
}

fn handle_selection<R, W>(
    registry: &mut ClubRegistry,
    selection: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Flow>
where
    R: BufRead,
    W: Write,
{
    match selection.trim() {
        "1" => add_club(registry, input, output),
        "2" => remove_club(registry, input, output),
        "3" => list_clubs(registry, output),
        "4" => quit(output),
        _ => {
            write_line(output, "Please try again. Input not recognized.")?;
            Ok(Flow::Continue)
        }
    }
}

fn add_club<R, W>(registry: &mut ClubRegistry, input: &mut R, output: &mut W) -> Result<Flow>
where
    R: BufRead,
    W: Write,
{
    if registry.size() == registry.capacity() {
        write_line(output, "I'm afraid I can't let you do that. The list is full. :(")?;
        return Ok(Flow::Continue);
    }

    write_line(output, "What is the name of the club you want to add?")?;
    let Some(name) = read_line(input)? else {
        return Ok(Flow::Continue);
    };

    let club = Club::new(registry.size() as u32, name.clone());
    if registry.add(club)? {
        write_line(output, &format!("Successfully added the {name} club"))?;
    } else {
        write_line(
            output,
            "Something went wrong adding the club. Please try again later.",
        )?;
    }
    Ok(Flow::Continue)
}

fn remove_club<R, W>(registry: &mut ClubRegistry, input: &mut R, output: &mut W) -> Result<Flow>
where
    R: BufRead,
    W: Write,
{
    write_line(output, "What is the name of the club you want to remove?")?;
    let Some(name) = read_line(input)? else {
        return Ok(Flow::Continue);
    };

    let club = Club::new(registry.size() as u32, name.clone());
    if registry.remove(&club) {
        write_line(output, &format!("Successfully removed the {name} club"))?;
    } else {
        write_line(
            output,
            "Something went wrong removing the club. Please try again later.",
        )?;
    }
    Ok(Flow::Continue)
}

fn list_clubs<W>(registry: &ClubRegistry, output: &mut W) -> Result<Flow>
where
    W: Write,
{
    write_line(output, "Printing all clubs")?;
    write_line(output, &registry.to_string())?;
    Ok(Flow::Continue)
}

fn quit<W>(output: &mut W) -> Result<Flow>
where
    W: Write,
{
    write_line(output, "Shutting down the program. Have a nice day.")?;
    Ok(Flow::Quit)
}

/// Reads one line, without its terminator. [None] means the input is closed.
fn read_line<R>(input: &mut R) -> Result<Option<String>, ConsoleError>
where
    R: BufRead,
{
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ConsoleError::Input(e.to_string()))?;
    if read == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn write_line<W>(output: &mut W, message: &str) -> Result<(), ConsoleError>
where
    W: Write,
{
    writeln!(output, "{message}").map_err(|e| ConsoleError::Output(e.to_string()))
}
