// Storage module: reads and writes the whole enrollment list as one JSON
// array. There is no incremental I/O; every save rewrites the file.

use crate::error::{RegistrationError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// One student registered for one course. Field names on disk match the
/// keys the enrollment file has always used (`FirstName`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub course_name: String,
}

impl Registration {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Registration {
            first_name: first_name.into(),
            last_name: last_name.into(),
            course_name: course_name.into(),
        }
    }
}

/// Read every registration stored in `path`.
///
/// A missing file is reported as `FileMissing` so the caller can treat a
/// first run differently from a broken file.
pub fn read_registrations(path: &Path) -> Result<Vec<Registration>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RegistrationError::FileMissing {
            path: path.to_path_buf(),
            source: e,
        },
        _ => RegistrationError::io(path, e),
    })?;

    let records: Vec<Registration> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| RegistrationError::io(path, e))?;
    log::info!("Loaded {} registrations from {}", records.len(), path.display());
    Ok(records)
}

/// Overwrite `path` with `records` as a JSON array.
///
/// The file is truncated before encoding starts; a failure part way through
/// leaves it incomplete.
pub fn write_registrations(path: &Path, records: &[Registration]) -> Result<()> {
    let file = File::create(path).map_err(|e| RegistrationError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, records).map_err(|e| {
        if e.is_io() {
            RegistrationError::io(path, e)
        } else {
            RegistrationError::Serialization(e)
        }
    })?;
    writer.flush().map_err(|e| RegistrationError::io(path, e))?;

    log::info!("Saved {} registrations to {}", records.len(), path.display());
    Ok(())
}
