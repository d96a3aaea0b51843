use std::{
    fs::File,
    io,
    path::{Path, PathBuf}
};

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, info};

use crate::utils::progress_utils::{progress_span, ProgressReader};

pub const RATING_COLUMN: &str = "Rating";
pub const NB_PLAYS_COLUMN: &str = "NbPlays";

// Cell contents read as a missing value, on top of the empty cell
const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA",
    "NULL", "NaN", "None", "n/a", "nan", "null"
];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("Column `{0}` not found in dataset header")]
    MissingColumn(&'static str),

    #[error("Failed to parse dataset: invalid number `{value}` in column `{column}` at line {line}")]
    InvalidNumber {
        column: &'static str,
        value: String,
        line: u64
    },

    #[error("Failed to parse dataset: {0}")]
    Csv(#[from] csv::Error)
}

/// A single puzzle row. Columns other than `Rating` and `NbPlays` are skipped.
/// Empty cells, [`MISSING_MARKERS`] and cells past the end of a short row
/// are read as missing values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PuzzleRecord {
    pub rating: Option<f64>,
    pub nb_plays: Option<f64>
}

/// Positions of the columns a [`PuzzleRecord`] is read from
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    rating: usize,
    nb_plays: usize
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(DatasetError::MissingColumn(column))
        };

        Ok(ColumnIndex {
            rating: position(RATING_COLUMN)?,
            nb_plays: position(NB_PLAYS_COLUMN)?
        })
    }
}

impl PuzzleRecord {
    fn from_record(record: &csv::StringRecord, columns: ColumnIndex) -> Result<Self, DatasetError> {
        let line = record.position().map_or(0, |p| p.line());

        Ok(PuzzleRecord {
            rating: parse_cell(record.get(columns.rating), RATING_COLUMN, line)?,
            nb_plays: parse_cell(record.get(columns.nb_plays), NB_PLAYS_COLUMN, line)?
        })
    }
}

fn parse_cell(cell: Option<&str>, column: &'static str, line: u64) -> Result<Option<f64>, DatasetError> {
    match cell {
        None => Ok(None),
        Some(s) if s.is_empty() || MISSING_MARKERS.contains(&s) => Ok(None),
        Some(s) => s.parse::<f64>().map(Some).map_err(|_| DatasetError::InvalidNumber {
            column,
            value: s.to_string(),
            line
        })
    }
}

/// Reads the puzzle CSV at `path`, reporting bytes read on a progress bar unless `quiet`.
pub fn load_puzzles(path: &Path, quiet: bool) -> Result<Vec<PuzzleRecord>, DatasetError> {
    let io_err = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source
    };

    let file = File::open(path).map_err(io_err)?;
    let len = file.metadata().map_err(io_err)?.len();

    info!("Loading puzzles from {} ({} bytes)", path.display(), len);

    let puzzles = {
        let span = progress_span(len, quiet);
        read_puzzles(ProgressReader::new(file, span))?
    };
    info!("Loaded {} puzzles", puzzles.len());

    Ok(puzzles)
}

pub fn read_puzzles<R: io::Read>(reader: R) -> Result<Vec<PuzzleRecord>, DatasetError> {
    // Rows may be shorter than the header
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?;
    let columns = ColumnIndex::from_headers(headers)?;
    debug!("Dataset columns: {}", headers.iter().join(", "));

    let mut puzzles = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record)? {
        puzzles.push(PuzzleRecord::from_record(&record, columns)?);
    }

    Ok(puzzles)
}
