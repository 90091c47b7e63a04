use regex::Regex;

use crate::order::Order;
use crate::row::SUMMARY_SENTINEL;

pub(crate) const DEFAULT_FIELD_SEPARATOR: char = '|';

#[derive(Clone, Debug)]
pub(crate) struct Config {
    metric: String,
    field_separator: char,
    ignore_empty: bool,
    ignore_lines: Option<Regex>,
    order: Order,
    summary_sentinel: String,
}

impl Config {
    pub(crate) fn new(
        metric: String,
        field_separator: char,
        ignore_empty: bool,
        ignore_lines: Option<Regex>,
        order: Order,
        summary_sentinel: String,
    ) -> Config {
        Config {
            metric,
            field_separator,
            ignore_empty,
            ignore_lines,
            order,
            summary_sentinel,
        }
    }

    pub(crate) fn metric(&self) -> &String {
        &self.metric
    }

    pub(crate) fn field_separator(&self) -> char {
        self.field_separator
    }

    pub(crate) fn ignore_empty(&self) -> bool {
        self.ignore_empty
    }

    pub(crate) fn ignore_lines(&self) -> &Option<Regex> {
        &self.ignore_lines
    }

    pub(crate) fn order(&self) -> Order {
        self.order
    }

    pub(crate) fn summary_sentinel(&self) -> &String {
        &self.summary_sentinel
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(
            String::new(),
            DEFAULT_FIELD_SEPARATOR,
            false,
            None,
            Order::Desc,
            SUMMARY_SENTINEL.to_string(),
        )
    }
}
