use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use thiserror::Error;

use crate::fixture::caseassembler::TestCaseSet;
use crate::math::lookup::lookuptable1d::TableError;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("table construction failed: {0}")]
    Table(#[from] TableError),
    #[error("could not write fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize fixture: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_cases(cases: &TestCaseSet, path: &Path) -> Result<(), FixtureError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, cases)?;
    Ok(())
}
