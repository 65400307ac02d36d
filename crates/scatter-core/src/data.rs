// File: crates/scatter-core/src/data.rs
// Summary: Point data model and CSV loading (bundled data set or external file).

use std::io::Read;
use std::path::Path;

use crate::error::DataError;

/// Raw `(x, y)` values in domain units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

const BUNDLED_CSV: &str = include_str!("../data/points.csv");

/// The data set compiled into the crate.
pub fn bundled() -> Result<Vec<DataPoint>, DataError> {
    parse_csv(BUNDLED_CSV.as_bytes())
}

/// Load points from a CSV file with an `x,y` header.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, DataError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    parse_csv(file)
}

/// Parse `x,y` rows. Any missing or non-numeric field fails the whole load.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<DataPoint>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let field = |ix: usize, name: &'static str| -> Result<f64, DataError> {
            let raw = rec.get(ix).filter(|s| !s.is_empty()).ok_or(DataError::MissingField { line, field: name })?;
            raw.parse::<f64>().map_err(|_| DataError::Malformed { line, field: name, value: raw.to_string() })
        };
        out.push(DataPoint::new(field(0, "x")?, field(1, "y")?));
    }
    tracing::debug!(points = out.len(), "point data parsed");
    Ok(out)
}
