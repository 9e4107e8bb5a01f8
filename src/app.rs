// Driver loop: owns the in-memory registrations and dispatches menu
// choices to the storage and UI layers until the user picks "Exit".

use crate::error::RegistrationError;
use crate::storage::{self, Registration};
use crate::ui::{self, MenuChoice, Prompt};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;

/// Program state, built once in `main` and passed through the loop.
pub struct App {
    path: PathBuf,
    records: Vec<Registration>,
}

impl App {
    /// An app with an empty collection bound to the enrollment file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        App {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[Registration] {
        &self.records
    }

    /// Replace the collection with the file contents. On failure the error
    /// is reported and the current collection is kept.
    pub fn load(&mut self, out: &mut impl Write) -> Option<RegistrationError> {
        match storage::read_registrations(&self.path) {
            Ok(records) => {
                self.records = records;
                None
            }
            Err(e) => {
                let message = match e {
                    RegistrationError::FileMissing { .. } => {
                        "JSON file must exist before running this program!"
                    }
                    _ => "There was a non-specific error!",
                };
                ui::render_error_message(out, message, Some(&e));
                Some(e)
            }
        }
    }

    /// Write the whole collection to the enrollment file, reporting any
    /// failure instead of returning it to the loop.
    pub fn save(&self, out: &mut impl Write) -> Option<RegistrationError> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Saving...");

        let result = storage::write_registrations(&self.path, &self.records);
        spinner.finish_and_clear();

        match result {
            Ok(()) => None,
            Err(e) => {
                let message = match e {
                    RegistrationError::Serialization(_) => {
                        "Please check that the data is a valid JSON format"
                    }
                    _ => "There was a non-specific error!",
                };
                ui::render_error_message(out, message, Some(&e));
                Some(e)
            }
        }
    }

    /// Run the menu until the user exits. Only console failures escape;
    /// everything else is reported and the menu comes back.
    pub fn run(&mut self, prompt: &mut impl Prompt, out: &mut impl Write) -> Result<()> {
        loop {
            ui::render_menu(out)?;
            let choice = ui::read_menu_choice(prompt, out)?;
            log::debug!("Menu choice: {:?}", choice);

            match choice {
                MenuChoice::Register => {
                    ui::read_new_record(prompt, out, &mut self.records)?;
                    ui::render_records(out, &self.records)?;
                }
                MenuChoice::Show => ui::render_records(out, &self.records)?,
                MenuChoice::Save => {
                    self.save(out);
                }
                MenuChoice::Exit => break,
                MenuChoice::Invalid => writeln!(out, "Please only choose option 1, 2, 3 or 4")?,
            }
        }
        writeln!(out, "Program Ended")?;
        Ok(())
    }
}
