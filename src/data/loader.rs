use crate::data::encoding::parse_row;
use crate::data::{DataError, Sample};
use std::io::{BufRead, BufReader, Read};

/// Reads a whole dataset, one comma-separated sample per line. Blank lines
/// are skipped; any malformed row aborts the load.
pub fn load_samples<R: Read>(reader: R, input_width: usize) -> Result<Vec<Sample>, DataError> {
    let reader = BufReader::new(reader);
    let mut samples = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        samples.push(parse_row(&line, input_width)?);
    }

    Ok(samples)
}
