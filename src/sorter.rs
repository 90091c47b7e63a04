//! Metric sort with summary rows pinned first.

use std::cmp::Ordering;

use crate::dataset::Dataset;
use crate::error::TableError;
use crate::order::Order;
use crate::row::{Row, SUMMARY_SENTINEL};
use crate::value::Value;

/// Sort `dataset` in place by `metric`, descending, with `$total` rows first.
///
/// The metric must be a column of the first row. Rows holding `$total` in any field precede all
/// other rows and are ordered among themselves by the metric as well. Rows whose metric is not a
/// number come after the numeric ones. The sort is stable, rows with equal keys keep their input
/// order.
///
/// # Examples
/// ```
/// use pipe_table_sort::parser::parse;
/// use pipe_table_sort::serializer::serialize;
/// use pipe_table_sort::sorter::sort;
///
/// let mut dataset = parse("name|units\nA|5\n$total|1\nB|10")?;
/// sort(&mut dataset, "units")?;
/// assert_eq!(serialize(&dataset)?, "name|units\n$total|1\nB|10\nA|5");
/// # Ok::<(), pipe_table_sort::error::TableError>(())
/// ```
pub fn sort<'a>(dataset: &'a mut Dataset, metric: &str) -> Result<&'a mut Dataset, TableError> {
    sort_by(dataset, metric, Order::Desc, SUMMARY_SENTINEL)
}

/// Sort `dataset` in place by `metric` in the given [Order], pinning rows that contain
/// `summary_sentinel` first.
pub fn sort_by<'a>(
    dataset: &'a mut Dataset,
    metric: &str,
    order: Order,
    summary_sentinel: &str,
) -> Result<&'a mut Dataset, TableError> {
    validate_metric(dataset, metric)?;
    let comparator = RowComparator::new(metric, order, summary_sentinel);
    dataset.rows_mut().sort_by(|a, b| comparator.compare(a, b));
    log::debug!("Sorted {} rows by '{}', order: {:?}", dataset.len(), metric, order);
    Ok(dataset)
}

/// Check whether `dataset` is already in the order [sort_by] would produce.
pub fn is_sorted(
    dataset: &Dataset,
    metric: &str,
    order: Order,
    summary_sentinel: &str,
) -> Result<bool, TableError> {
    validate_metric(dataset, metric)?;
    let comparator = RowComparator::new(metric, order, summary_sentinel);
    Ok(
        dataset
            .rows()
            .windows(2)
            .all(|pair| comparator.compare(&pair[0], &pair[1]) != Ordering::Greater)
    )
}

fn validate_metric(dataset: &Dataset, metric: &str) -> Result<(), TableError> {
    match dataset.rows().first() {
        Some(row) if row.contains(metric) => {
            Ok(())
        }
        _ => {
            Err(TableError::MetricNotFound { metric: metric.to_string() })
        }
    }
}

struct RowComparator<'a> {
    metric: &'a str,
    order: Order,
    summary_sentinel: Value,
}

impl<'a> RowComparator<'a> {
    fn new(metric: &'a str, order: Order, summary_sentinel: &'a str) -> RowComparator<'a> {
        RowComparator {
            metric,
            order,
            summary_sentinel: Value::infer(summary_sentinel),
        }
    }

    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        match (a.contains_value(&self.summary_sentinel), b.contains_value(&self.summary_sentinel)) {
            (true, false) => {
                Ordering::Less
            }
            (false, true) => {
                Ordering::Greater
            }
            _ => {
                self.compare_metric(a, b)
            }
        }
    }

    fn compare_metric(&self, a: &Row, b: &Row) -> Ordering {
        let a = a.get(self.metric);
        let b = b.get(self.metric);
        match (a.and_then(Value::as_number), b.and_then(Value::as_number)) {
            (Some(_), Some(_)) => {
                self.order.apply(Value::compare_metric(a, b))
            }
            // non numeric values go last whatever the order
            _ => {
                Value::compare_metric(a, b)
            }
        }
    }
}
