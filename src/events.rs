//! Earthquake event loading.
//!
//! Reads USGS-style CSV exports into a dense [`PointStore`]. Only four columns
//! are used:
//!
//! | column | field     |
//! |--------|-----------|
//! | 1      | magnitude |
//! | 7      | latitude  |
//! | 8      | longitude |
//! | 10     | depth     |
//!
//! Each record gets `coords = [longitude, latitude]` and
//! `aux = [magnitude, depth]`; ids run from 1 in file order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::store::PointStore;

/// Index of the magnitude in [`crate::Record::aux`].
pub const MAGNITUDE: usize = 0;
/// Index of the depth in [`crate::Record::aux`].
pub const DEPTH: usize = 1;

const COL_MAGNITUDE: usize = 1;
const COL_LATITUDE: usize = 7;
const COL_LONGITUDE: usize = 8;
const COL_DEPTH: usize = 10;

/// Parse events from a reader.
///
/// Blank lines, `#` comments and a leading `time,...` header are skipped.
/// Input without a single event line is [`Error::EmptyInput`].
pub fn read_events<R: BufRead>(reader: R) -> Result<PointStore> {
    let mut store = PointStore::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let trimmed = line.trim_end_matches('\r');

        if trimmed.trim().is_empty() || trimmed.starts_with('#') {
            debug!("skipping line {lineno}");
            continue;
        }
        if store.is_empty() && trimmed.starts_with("time") {
            debug!("skipping header on line {lineno}");
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').collect();
        let magnitude = field(&fields, COL_MAGNITUDE, lineno)?;
        let latitude = field(&fields, COL_LATITUDE, lineno)?;
        let longitude = field(&fields, COL_LONGITUDE, lineno)?;
        let depth = field(&fields, COL_DEPTH, lineno)?;

        store.push([longitude, latitude], vec![magnitude, depth]);
    }

    if store.is_empty() {
        return Err(Error::EmptyInput);
    }
    debug!("loaded {} events", store.len());
    Ok(store)
}

/// Parse events from a file on disk.
pub fn read_events_file(path: impl AsRef<Path>) -> Result<PointStore> {
    let file = File::open(path)?;
    read_events(BufReader::new(file))
}

fn field(fields: &[&str], col: usize, line: usize) -> Result<f64> {
    let raw = fields.get(col).ok_or_else(|| Error::Parse {
        line,
        message: format!("expected at least {} columns, found {}", col + 1, fields.len()),
    })?;
    raw.trim().parse::<f64>().map_err(|e| Error::Parse {
        line,
        message: format!("column {col}: {e} ({raw:?})"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
# Pacific Northwest events
1,2.1,x,x,x,x,x,47.5,-122.3,x,12.0
2,3.4,x,x,x,x,x,45.1,-121.0,x,3.5

3,0.8,x,x,x,x,x,48.0,-123.9,x,25.25
";

    #[test]
    fn parses_columns_into_dense_records() {
        let store = read_events(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.is_dense());

        let first = store.get(1).unwrap();
        assert_eq!(first.coords, [-122.3, 47.5]);
        assert_eq!(first.aux[MAGNITUDE], 2.1);
        assert_eq!(first.aux[DEPTH], 12.0);
        assert_eq!(store.get(3).unwrap().aux[DEPTH], 25.25);
    }

    #[test]
    fn skips_header_row() {
        let input = "time,mag,a,b,c,d,e,latitude,longitude,f,depth\n\
                     t,1.0,x,x,x,x,x,1.0,2.0,x,3.0\n";
        let store = read_events(Cursor::new(input)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().coords, [2.0, 1.0]);
    }

    #[test]
    fn short_line_is_a_parse_error() {
        let input = "# c\n1,2.0,x\n";
        match read_events(Cursor::new(input)) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn bad_number_is_a_parse_error() {
        let input = "1,big,x,x,x,x,x,47.5,-122.3,x,12.0\n";
        assert!(matches!(
            read_events(Cursor::new(input)),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn input_without_events_is_empty() {
        let input = "# only comments\n\ntime,mag,a,b,c,d,e,latitude,longitude,f,depth\n";
        assert!(matches!(read_events(Cursor::new(input)), Err(Error::EmptyInput)));
        assert!(matches!(read_events(Cursor::new("")), Err(Error::EmptyInput)));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            read_events_file("/nonexistent/quakes.csv"),
            Err(Error::Io(_))
        ));
    }
}
