// Library root
// -----------
// The binary (`main.rs`) builds an `App` and hands it a terminal prompt.
//
// Module responsibilities:
// - `storage`: the registration record and JSON file read/write.
// - `ui`: menu, prompts, validation and rendering.
// - `app`: the menu loop that owns the in-memory registrations.
// - `error`: the failure categories reported to the user.
pub mod app;
pub mod error;
pub mod storage;
pub mod ui;

/// Enrollment file, resolved against the working directory.
pub const FILE_NAME: &str = "Enrollments.json";

pub const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------";
