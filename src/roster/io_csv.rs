// Primitives for reading the roster CSV file.

use csv::StringRecord;
use log::debug;
use snafu::prelude::*;

use name_tally::Builder;

use crate::roster::{CsvLineParseSnafu, CsvOpenSnafu, MissingNameColumnSnafu, RosterResult};

/// Reads the roster file and feeds every name cell to a builder.
/// Rows with a blank or missing name cell are dropped by the builder.
pub fn read_roster(path: &str, column: &str) -> RosterResult<Builder> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    let headers = rdr.headers().context(CsvOpenSnafu { path })?.clone();
    debug!("read_roster: header: {:?}", headers);
    let name_idx =
        find_name_column(&headers, column).context(MissingNameColumnSnafu { column, path })?;
    debug!("read_roster: column {:?} at index {:?}", column, name_idx);

    let mut builder = Builder::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { path })?;
        debug!("read_roster: line {:?}: {:?}", lineno, line);
        // A row too short to reach the name column counts as blank.
        let raw = line.get(name_idx).unwrap_or("");
        if !builder.add_name(raw) {
            debug!("read_roster: line {:?} has a blank name, dropping", lineno);
        }
    }
    Ok(builder)
}

fn find_name_column(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == column)
}
