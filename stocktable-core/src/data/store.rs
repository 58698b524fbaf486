//! CSV store — per-ticker historical data files under one folder.
//!
//! Layout: `{data_dir}/{TICKER}_historical_data.csv`
//!
//! Reads are sequential and synchronous. A file is opened, fully parsed,
//! and closed within one call; a parse failure releases the handle the
//! same way a success does. Multi-ticker reads skip failing tickers and
//! only fail once nothing at all could be loaded.

use super::table::Table;
use log::{info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name suffix every historical data file carries.
pub const HISTORICAL_SUFFIX: &str = "_historical_data.csv";

/// Column appended by multi-ticker reads to tag each row's origin.
pub const COMPANY_COLUMN: &str = "Company";

/// Errors from the data store.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("no data file for ticker '{ticker}' at {}", .path.display())]
    NotFound { ticker: String, path: PathBuf },

    #[error("failed to parse data for ticker '{ticker}': {source}")]
    Parse {
        ticker: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to scan data directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no valid data files could be read for the requested tickers")]
    NoData,
}

/// Handle over a folder of per-ticker CSV files.
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Root directory of the store.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path for a ticker: `{data_dir}/{TICKER}_historical_data.csv`
    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.data_dir.join(format!("{ticker}{HISTORICAL_SUFFIX}"))
    }

    /// Read one ticker's file into a table.
    ///
    /// The returned rows mirror the file's data rows in file order; the
    /// header row names the columns. Fails with `NotFound` when the file
    /// is missing and `Parse` when it exists but cannot be read as
    /// header-plus-records CSV (malformed rows, I/O failure mid-read).
    pub fn read_single(&self, ticker: &str) -> Result<Table, DataError> {
        let path = self.path_for(ticker);
        if !path.exists() {
            return Err(DataError::NotFound {
                ticker: ticker.to_string(),
                path,
            });
        }

        let parse_err = |e: csv::Error| DataError::Parse {
            ticker: ticker.to_string(),
            source: e,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&path)
            .map_err(parse_err)?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(parse_err)?
            .iter()
            .map(str::to_owned)
            .collect();

        let mut table = Table::new(columns);
        for record in reader.records() {
            let record = record.map_err(parse_err)?;
            table.push_row(record.iter().map(|field| Some(field.to_owned())).collect());
        }

        info!("loaded {} rows for {ticker}", table.n_rows());
        Ok(table)
    }

    /// Read several tickers and combine them into one table.
    ///
    /// Each ticker is read independently, in the order given (duplicates
    /// are read again). A successful read gets a `Company` column set to
    /// its ticker; a failed one is logged and skipped. Rows of different
    /// tickers end up as contiguous blocks in request order. Fails with
    /// `NoData` only when not a single ticker could be read.
    pub fn read_many(&self, tickers: &[&str]) -> Result<Table, DataError> {
        let mut loaded: Vec<Table> = Vec::new();

        for ticker in tickers {
            match self.read_single(ticker) {
                Ok(mut table) => {
                    table.push_const_column(COMPANY_COLUMN, ticker);
                    loaded.push(table);
                }
                Err(e) => warn!("skipping {ticker}: {e}"),
            }
        }

        if loaded.is_empty() {
            return Err(DataError::NoData);
        }

        let succeeded = loaded.len();
        let combined = Table::concat(loaded);
        info!(
            "combined data for {succeeded}/{} requested tickers",
            tickers.len()
        );
        Ok(combined)
    }

    /// Tickers that have a data file in the store's folder, sorted.
    ///
    /// Entries not matching the naming convention are ignored.
    pub fn available_tickers(&self) -> Result<Vec<String>, DataError> {
        let read_dir_err = |e: std::io::Error| DataError::ReadDir {
            path: self.data_dir.clone(),
            source: e,
        };

        let mut tickers = Vec::new();
        for entry in std::fs::read_dir(&self.data_dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(ticker) = name.strip_suffix(HISTORICAL_SUFFIX) {
                if !ticker.is_empty() {
                    tickers.push(ticker.to_string());
                }
            }
        }

        tickers.sort();
        Ok(tickers)
    }
}
