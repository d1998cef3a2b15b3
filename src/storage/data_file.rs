//! Bulk loading and saving of a customer data file.
//!
//! A missing data file is not an error: it is reported as
//! [`LoadStatus::NotFound`] alongside an empty collection. Lines that cannot
//! be parsed are skipped and reported, and loading continues with the rest of
//! the file.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{Customer, storage::ParseError};

/// Whether a data file existed when it was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file existed and was read.
    Found,
    /// The file did not exist. The collection is empty.
    NotFound,
}

/// A line that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// One-based line number within the file.
    pub line_number: usize,
    /// Why the line could not be parsed.
    pub error: ParseError,
}

/// The result of loading a data file.
#[derive(Debug)]
pub struct Loaded {
    /// The parsed customers, in file order.
    pub customers: Vec<Customer>,
    /// Whether the file existed.
    pub status: LoadStatus,
    /// Lines that could not be parsed.
    pub skipped: Vec<SkippedLine>,
}

impl Loaded {
    const fn not_found() -> Self {
        Self {
            customers: Vec::new(),
            status: LoadStatus::NotFound,
            skipped: Vec::new(),
        }
    }
}

/// Load all customers from the data file at `path`.
///
/// Blank lines are ignored.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be opened or read.
#[instrument(level = "debug")]
pub fn load(path: &Path) -> Result<Loaded, LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No customer file at {}", path.display());
            return Ok(Loaded::not_found());
        }
        Err(source) => {
            return Err(LoadError {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let loaded = read(BufReader::new(file)).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "Loaded {} customers from {} ({} skipped)",
        loaded.customers.len(),
        path.display(),
        loaded.skipped.len()
    );

    Ok(loaded)
}

/// Read customers from newline-delimited record lines.
///
/// # Errors
///
/// Returns an error if the reader fails. Unparseable lines are not errors;
/// they are reported in [`Loaded::skipped`].
pub fn read<R: BufRead>(reader: R) -> io::Result<Loaded> {
    let mut customers = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Customer>() {
            Ok(customer) => customers.push(customer),
            Err(error) => {
                let line_number = index + 1;
                tracing::warn!("Skipping line {line_number}: {error}");
                skipped.push(SkippedLine { line_number, error });
            }
        }
    }

    Ok(Loaded {
        customers,
        status: LoadStatus::Found,
        skipped,
    })
}

/// Write customers as newline-terminated record lines, in order.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write<W: Write>(writer: &mut W, customers: &[Customer]) -> io::Result<()> {
    for customer in customers {
        writeln!(writer, "{}", customer.record())?;
    }
    writer.flush()
}

/// Save all customers to the data file at `path`, replacing its contents.
///
/// Parent directories are created automatically if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
#[instrument(level = "debug", skip(customers))]
pub fn save(path: &Path, customers: &[Customer]) -> Result<(), SaveError> {
    write_file(path, customers).map_err(|source| SaveError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved {} customers to {}", customers.len(), path.display());
    Ok(())
}

fn write_file(path: &Path, customers: &[Customer]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write(&mut BufWriter::new(file), customers)
}

/// An existing data file could not be read.
#[derive(Debug, thiserror::Error)]
#[error("failed to read customer file '{}'", .path.display())]
pub struct LoadError {
    /// The path of the data file.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: io::Error,
}

/// The data file could not be written.
#[derive(Debug, thiserror::Error)]
#[error("failed to write customer file '{}'", .path.display())]
pub struct SaveError {
    /// The path of the data file.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: io::Error,
}
