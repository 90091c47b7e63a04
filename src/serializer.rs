//! [Dataset] to pipe delimited text.

use crate::config::DEFAULT_FIELD_SEPARATOR;
use crate::dataset::Dataset;
use crate::error::TableError;

/// Serialize `dataset` as pipe delimited text.
///
/// The header is taken from the column names of the first row. Numbers are written in their
/// shortest decimal form, so `3` parsed as a number is written back as `3`. Lines are joined
/// with `\n`, without a trailing newline.
pub fn serialize(dataset: &Dataset) -> Result<String, TableError> {
    serialize_with_separator(dataset, DEFAULT_FIELD_SEPARATOR)
}

/// Serialize `dataset` using `field_separator` between fields.
pub fn serialize_with_separator(dataset: &Dataset, field_separator: char) -> Result<String, TableError> {
    let separator = field_separator.to_string();
    let header = dataset
        .header()
        .ok_or(TableError::EmptyDataset)?
        .join(separator.as_str());

    let mut lines = Vec::with_capacity(dataset.len() + 1);
    lines.push(header);
    for row in dataset.rows() {
        let line = row
            .values()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(separator.as_str());
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
