// src/persistence.rs
use crate::history::SearchHistory;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error};
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically writes the history store: serialize into a temp file in the
/// destination directory, then persist over the target. A crash mid-write
/// never leaves a truncated history behind.
pub fn save_history(history: &SearchHistory, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);

    bincode::serialize_into(writer, history)
        .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_history(path: &Path) -> Result<SearchHistory, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let history: SearchHistory = bincode::deserialize_from(reader)?;
    Ok(history)
}

/// Loads the history at `path`, falling back to an empty store when the file
/// is missing or unreadable.
pub fn load_or_default(path: &Path) -> SearchHistory {
    load_history(path).unwrap_or_else(|_| SearchHistory::new())
}
