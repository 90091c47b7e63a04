//! Pipe delimited text to [Dataset].

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::TableError;
use crate::row::Row;
use crate::value::Value;

/// Parse pipe delimited text into a [Dataset].
///
/// The first line is the header, every following line is a record. Lines and the header are
/// trimmed of surrounding whitespace (a trailing `\r` included) and split on `|`. Each field is
/// typed separately, see [Value::infer]. When the separator is itself whitespace, such as a tab,
/// it is kept by the trim. Blank lines at the end of the text are dropped, any
/// other line must have exactly as many fields as the header.
///
/// # Examples
/// ```
/// use pipe_table_sort::parser::parse;
/// use pipe_table_sort::value::Value;
///
/// let dataset = parse("a|b\n1|x").unwrap();
/// assert_eq!(dataset.rows()[0].get("a"), Some(&Value::Number(1.0)));
/// assert_eq!(dataset.rows()[0].get("b"), Some(&Value::Text("x".to_string())));
///
/// assert!(parse("h1|h2\n1|2|3").is_err());
/// ```
pub fn parse(text: &str) -> Result<Dataset, TableError> {
    parse_with_config(text, &Config::default())
}

pub(crate) fn parse_with_config(text: &str, config: &Config) -> Result<Dataset, TableError> {
    let separator = config.field_separator();
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.len() > 1 && trim_line(lines[lines.len() - 1], separator).is_empty() {
        lines.pop();
    }

    let header: Vec<&str> = trim_line(lines[0], separator).split(separator).collect();
    let mut rows = Vec::with_capacity(lines.len() - 1);
    for (i, line) in lines.iter().enumerate().skip(1) {
        let line = trim_line(line, separator);
        if config.ignore_empty() && line.is_empty() {
            continue;
        }

        if let Some(r) = config.ignore_lines() {
            if r.is_match(line) {
                continue;
            }
        }

        let fields: Vec<&str> = line.split(separator).collect();
        if fields.len() != header.len() {
            return Err(
                TableError::Format {
                    line: i + 1,
                    expected: header.len(),
                    actual: fields.len(),
                }
            );
        }

        let mut row = Row::with_capacity(header.len());
        for (name, field) in header.iter().zip(fields) {
            row.insert(name.to_string(), Value::infer(field));
        }
        rows.push(row);
    }
    log::debug!("Parsed {} columns, {} rows", header.len(), rows.len());
    Ok(Dataset::new(rows))
}

/// Trim surrounding whitespace except the separator, so empty edge fields of a tab separated
/// line survive.
fn trim_line(line: &str, separator: char) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() && c != separator)
}
