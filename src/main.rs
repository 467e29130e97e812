use std::path::Path;

use lutgen::fixture::caseassembler::{TestCaseSet, assemble};
use lutgen::fixture::casewriter::{FixtureError, write_cases};
use lutgen::fixture::randomtable::random_table;

const OUTPUT_PATH: &'static str = "lookup_table_1d_cases.json";
const TABLE_SIZES: [usize; 4] = [10, 20, 30, 40];

fn run() -> Result<(), FixtureError> {
    let mut cases = TestCaseSet {
        clamped: Vec::with_capacity(TABLE_SIZES.len()),
    };
    for length in TABLE_SIZES {
        let table = random_table(length)?;
        cases.clamped.push(assemble(&table));
        log::info!("assembled clamped case for table size {}", length);
    }
    write_cases(&cases, Path::new(OUTPUT_PATH))?;
    log::info!("wrote {}", OUTPUT_PATH);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        log::error!("fixture generation failed: {}", error);
        std::process::exit(1);
    }
}
