use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::TableError;

/// Sort order applied to the metric column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl Order {
    /// Adjust an ascending comparison result to this order.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Order::Asc => {
                ordering
            }
            Order::Desc => {
                ordering.reverse()
            }
        }
    }
}

impl FromStr for Order {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Asc),
            "desc" | "descending" => Ok(Order::Desc),
            _ => Err(TableError::UnknownOrder(s.to_string())),
        }
    }
}
