// File: crates/raster-demo/src/batch.rs
// Summary: CSV batch mode; one calculation per row, failures reported and skipped.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use raster_core::{Mode, RasterError, SegmentFields, Session};
use raster_render::LineChart;

/// One CSV row: raw coordinate text plus the mode to run it with.
#[derive(Debug, PartialEq)]
pub struct BatchRow {
    pub line: u64,
    pub fields: SegmentFields,
    pub mode: Mode,
}

pub fn run(path: &Path, default_mode: Mode) -> Result<()> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let rows = load_rows(file, default_mode).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows from {}", rows.len(), path.display());

    let (ok, failed) = run_rows(&rows);
    println!("{ok} succeeded, {} failed", failed.len());
    if !failed.is_empty() {
        anyhow::bail!("{} of {} rows failed", failed.len(), rows.len());
    }
    Ok(())
}

/// Read rows with headers x1,y1,x2,y2 and an optional mode column. Header match is
/// case-insensitive; a missing coordinate column is an error, a blank cell is not.
pub fn load_rows(reader: impl Read, default_mode: Mode) -> Result<Vec<BatchRow>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).flexible(true).from_reader(reader);
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);

    let mut cols = [0usize; 4];
    for (slot, name) in cols.iter_mut().zip(["x1", "y1", "x2", "y2"]) {
        *slot = idx(name).with_context(|| format!("missing '{name}' column in headers {headers:?}"))?;
    }
    let i_mode = idx("mode");

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();
        let cell = |i: usize| rec.get(i).unwrap_or("").to_string();
        let mode = match i_mode.map(cell).filter(|m| !m.is_empty()) {
            Some(m) => m.parse::<Mode>().map_err(anyhow::Error::msg).with_context(|| format!("line {line}"))?,
            None => default_mode,
        };
        let fields = SegmentFields::new(cell(cols[0]), cell(cols[1]), cell(cols[2]), cell(cols[3]));
        out.push(BatchRow { line, fields, mode });
    }
    Ok(out)
}

/// Run each row through one session, printing its table. Returns the success count and the
/// failures by CSV line.
pub fn run_rows(rows: &[BatchRow]) -> (usize, Vec<(u64, RasterError)>) {
    let mut session = Session::new(LineChart::new());
    let mut ok = 0;
    let mut failed = Vec::new();
    for row in rows {
        session = session.with_fields(row.fields.clone()).with_mode(row.mode);
        match session.calculate() {
            Ok(_) => {
                ok += 1;
                println!("line {}:", row.line);
                print!("{}", session.presenter().table());
            }
            Err(e) => {
                log::warn!("line {}: {e}", row.line);
                failed.push((row.line, e));
            }
        }
    }
    (ok, failed)
}
