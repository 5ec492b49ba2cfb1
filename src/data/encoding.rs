use crate::data::{DataError, Sample};

/// Board-cell encoding: "x" is 1.0, anything else ("o" or "b") is 0.0.
pub fn encode_cell(token: &str) -> f64 {
    if token == "x" {
        1.0
    } else {
        0.0
    }
}

/// Label encoding. Unlike the cells, an unrecognized label is an error
/// rather than a silent default.
pub fn encode_label(token: &str) -> Result<f64, DataError> {
    match token {
        "positive" => Ok(1.0),
        "negative" => Ok(0.0),
        other => Err(DataError::BadLabel(other.to_string())),
    }
}

/// Parses one comma-separated row of `input_width` cell tokens followed by
/// a label token.
pub fn parse_row(line: &str, input_width: usize) -> Result<Sample, DataError> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() != input_width + 1 {
        return Err(DataError::BadRow {
            expected: input_width + 1,
            got: fields.len(),
        });
    }

    let features = fields[..input_width]
        .iter()
        .map(|token| encode_cell(token))
        .collect();
    let label = encode_label(fields[input_width])?;

    Ok(Sample { features, label })
}
