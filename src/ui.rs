// UI layer: menu rendering, prompts and input validation.
// Input comes through the `Prompt` trait so the flows can be driven by a
// script in tests; output goes to any `Write`.

use crate::error::RegistrationError;
use crate::storage::Registration;
use crate::MENU;
use anyhow::{Context, Result};
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};

/// Source of user input, one line per call.
pub trait Prompt {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Plain line reader for piped or redirected input. End of input is an
/// error so the menu loop cannot spin on it.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        LinePrompt { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read input for {:?}", prompt))?;
        if read == 0 {
            anyhow::bail!("Input closed while waiting for {:?}", prompt);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Console input: `dialoguer` on an interactive terminal, plain lines from
/// stdin otherwise.
pub struct Terminal;

impl Prompt for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            eprint!("{}: ", prompt);
            return LinePrompt::new(stdin.lock()).read_line(prompt);
        }

        // Empty input must reach the validators instead of being re-asked.
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read from the terminal")?;
        Ok(line)
    }
}

/// A parsed menu selection. `Invalid` stands in for anything that is not
/// one of the four listed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::Register,
            "2" => MenuChoice::Show,
            "3" => MenuChoice::Save,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

pub fn render_menu(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MENU)?;
    writeln!(out)
}

/// Print a message for the user and, when there is an underlying error,
/// a technical details block with its text and category. Write failures
/// are ignored.
pub fn render_error_message(
    out: &mut impl Write,
    message: &str,
    cause: Option<&RegistrationError>,
) {
    let _ = writeln!(out, "{}\n", message);
    if let Some(err) = cause {
        log::debug!("{}: {}", message, err);
        let _ = writeln!(out, "-- Technical Error Message -- ");
        let _ = writeln!(out, "{}", err);
        if let Some(source) = std::error::Error::source(err) {
            let _ = writeln!(out, "{}", source);
        }
        let _ = writeln!(out, "{}", err.kind());
    }
}

const INVALID_OPTION: &str = "Invalid option. Please only choose 1, 2, 3 or 4.";

/// Ask once for a menu choice. Invalid input is reported and returned as
/// `MenuChoice::Invalid`; the caller decides whether to ask again.
pub fn read_menu_choice(prompt: &mut impl Prompt, out: &mut impl Write) -> Result<MenuChoice> {
    let input = prompt.read_line("Enter menu choice")?;
    let choice = MenuChoice::parse(&input);
    if choice == MenuChoice::Invalid {
        let err = RegistrationError::Validation(INVALID_OPTION.to_string());
        render_error_message(out, &err.to_string(), Some(&err));
    }
    Ok(choice)
}

/// True for a non-empty string made only of letters.
pub fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

fn check_name(value: &str, reason: &str) -> crate::error::Result<()> {
    if is_alphabetic(value) {
        Ok(())
    } else {
        Err(RegistrationError::Validation(reason.to_string()))
    }
}

/// Collect a first name, last name and course, and append the registration
/// to `records`. A rejected name stops the flow and nothing is appended.
/// Returns whether a record was added.
pub fn read_new_record(
    prompt: &mut impl Prompt,
    out: &mut impl Write,
    records: &mut Vec<Registration>,
) -> Result<bool> {
    let first_name = prompt.read_line("Enter the student's first name")?;
    if let Err(e) = check_name(&first_name, "Only alphabetic characters are allowed.") {
        render_error_message(out, "That value is not the correct type of data!", Some(&e));
        return Ok(false);
    }

    let last_name = prompt.read_line("What is the student's last name?")?;
    if let Err(e) = check_name(&last_name, "The last name should not contain numbers.") {
        render_error_message(out, "That value is not the correct type of data!", Some(&e));
        return Ok(false);
    }

    // course names are free text
    let course_name = prompt.read_line("What is the name of the course?")?;

    let record = Registration::new(first_name, last_name, course_name);
    log::debug!("Registered {:?}", record);
    records.push(record);
    Ok(true)
}

/// Print every registration on its own line, in collection order.
pub fn render_records(out: &mut impl Write, records: &[Registration]) -> std::io::Result<()> {
    for r in records {
        writeln!(out, "{} {} {}", r.first_name, r.last_name, r.course_name)?;
    }
    Ok(())
}
