use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use regex::Regex;
use tempfile::Builder;

use crate::config::{Config, DEFAULT_FIELD_SEPARATOR};
use crate::error::TableError;
use crate::order::Order;
use crate::parser::parse_with_config;
use crate::row::SUMMARY_SENTINEL;
use crate::serializer::serialize_with_separator;
use crate::sorter::{is_sorted, sort_by};

/// Sort a pipe delimited table file by a metric column
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use pipe_table_sort::order::Order;
/// use pipe_table_sort::sort::Sort;
///
/// fn sort_sales(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
///     let mut table_sort = Sort::new(input, output, "net_sales_units");
///     // descending is the default
///     table_sort.with_order(Order::Desc);
///     // skip blank lines anywhere in the input, not only at its end
///     table_sort.with_ignore_empty();
///     table_sort.sort()
/// }
/// ```
pub struct Sort {
    input: PathBuf,
    output: PathBuf,
    metric: String,
    field_separator: char,
    ignore_empty: bool,
    ignore_lines: Option<Regex>,
    order: Order,
    summary_sentinel: String,
}

impl Sort {
    /// Create a default Sort definition.
    ///
    /// * The default field separator is '|'
    /// * Rows are ordered by `metric`, descending
    /// * Rows containing `$total` in any field are pinned first
    /// * Blank lines at the end of the input are dropped, other blank lines are format errors
    /// * No lines are ignored
    pub fn new(input: PathBuf, output: PathBuf, metric: &str) -> Sort {
        Sort {
            input,
            output,
            metric: metric.to_string(),
            field_separator: DEFAULT_FIELD_SEPARATOR,
            ignore_empty: false,
            ignore_lines: None,
            order: Order::Desc,
            summary_sentinel: SUMMARY_SENTINEL.to_string(),
        }
    }

    /// Set the field separator. The default is '|'
    pub fn with_field_separator(&mut self, field_separator: char) {
        self.field_separator = field_separator
    }

    /// Direct the parser to skip blank record lines anywhere in the input. The default is false
    pub fn with_ignore_empty(&mut self) {
        self.ignore_empty = true;
    }

    /// Specify which record lines to ignore. Each line matching the regex will be skipped and will
    /// not appear in the output. The header is never skipped.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r)
    }

    /// Set [Order] of the metric column. Summary rows stay first in both orders.
    pub fn with_order(&mut self, order: Order) {
        self.order = order
    }

    /// Set the value that marks a summary row. The default is `$total`
    pub fn with_summary_sentinel(&mut self, summary_sentinel: &str) {
        self.summary_sentinel = summary_sentinel.to_string();
    }

    /// Sort the input file into the output file.
    ///
    /// Read, parse and sort failures are returned. A failure to write the output is logged and
    /// the call still succeeds.
    pub fn sort(&self) -> Result<(), anyhow::Error> {
        let config = self.create_config();
        log::info!("Start sorting {} by '{}'", self.input.to_string_lossy(), config.metric());
        let text = Self::read_input(&self.input)?;
        let sorted = Self::internal_sort(&text, &config)
            .with_context(|| format!("path: {}", self.input.to_string_lossy()))?;
        match Self::write_output(&self.output, &sorted) {
            Ok(()) => {
                log::info!("Finish sorting, output: {}", self.output.to_string_lossy());
            }
            Err(e) => {
                log::error!("Failed to write sorted table: {}", e);
            }
        }
        Ok(())
    }

    /// Run parse, sort and serialize over `text` with this definition's settings.
    pub fn sort_text(&self, text: &str) -> Result<String, TableError> {
        Self::internal_sort(text, &self.create_config())
    }

    /// Check whether the input file is already sorted.
    pub fn check(&self) -> Result<bool, anyhow::Error> {
        let config = self.create_config();
        let text = Self::read_input(&self.input)?;
        let dataset = parse_with_config(&text, &config)
            .with_context(|| format!("path: {}", self.input.to_string_lossy()))?;
        let result = is_sorted(&dataset, config.metric(), config.order(), config.summary_sentinel())?;
        log::info!("Checked {} rows of {}, sorted: {}", dataset.len(), self.input.to_string_lossy(), result);
        Ok(result)
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.metric.clone(),
            self.field_separator,
            self.ignore_empty,
            self.ignore_lines.clone(),
            self.order,
            self.summary_sentinel.clone(),
        )
    }

    fn internal_sort(text: &str, config: &Config) -> Result<String, TableError> {
        let mut dataset = parse_with_config(text, config)?;
        sort_by(&mut dataset, config.metric(), config.order(), config.summary_sentinel())?;
        serialize_with_separator(&dataset, config.field_separator())
    }

    fn read_input(path: &Path) -> Result<String, anyhow::Error> {
        fs::read_to_string(path).with_context(|| format!("read input, path: {}", path.to_string_lossy()))
    }

    fn write_output(path: &Path, text: &str) -> Result<(), TableError> {
        let persist_error = |message: String| TableError::Persist {
            path: path.to_string_lossy().to_string(),
            message,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut tmp_file = Builder::new()
            .prefix(".pipe-table-sort-")
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(|e| persist_error(format!("failed to create temp file in {}: {}", dir.to_string_lossy(), e)))?;
        tmp_file
            .write_all(text.as_bytes())
            .map_err(|e| persist_error(e.to_string()))?;
        Self::set_output_permissions(tmp_file.as_file(), path)
            .map_err(|e| persist_error(e.to_string()))?;
        tmp_file
            .persist(path)
            .map_err(|e| persist_error(e.error.to_string()))?;
        Ok(())
    }

    // temp files are owner only, replaced outputs keep their mode and new ones get 0644
    #[cfg(unix)]
    fn set_output_permissions(file: &fs::File, path: &Path) -> std::io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let permissions = match fs::metadata(path) {
            Ok(metadata) => metadata.permissions(),
            Err(_) => fs::Permissions::from_mode(0o644),
        };
        file.set_permissions(permissions)
    }

    #[cfg(not(unix))]
    fn set_output_permissions(_file: &fs::File, _path: &Path) -> std::io::Result<()> {
        Ok(())
    }
}
