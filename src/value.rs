use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

static NUMERIC_LITERAL: OnceLock<Regex> = OnceLock::new();

fn numeric_literal() -> &'static Regex {
    NUMERIC_LITERAL.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").unwrap()
    })
}

/// A field value in a [crate::row::Row].
///
/// The variant is inferred for every field occurrence separately, so the same column may hold
/// numbers in some rows and text in others.
///
/// # Examples
/// ```
/// use pipe_table_sort::value::Value;
///
/// assert_eq!(Value::infer("42"), Value::Number(42.0));
/// assert_eq!(Value::infer(" -1.5 "), Value::Number(-1.5));
/// assert_eq!(Value::infer("$total"), Value::Text("$total".to_string()));
/// assert_eq!(Value::infer(""), Value::Text(String::new()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 64 bit floating point number
    Number(f64),
    /// Anything that is not a plain signed integer or decimal literal
    Text(String),
}

impl Value {
    /// Infer the value of a raw field.
    ///
    /// The trimmed field becomes a [Value::Number] when it is an optionally signed integer or
    /// decimal literal. Otherwise the untrimmed field is kept as [Value::Text]; an empty field is
    /// text too.
    pub fn infer(field: &str) -> Value {
        let trimmed = field.trim();
        if numeric_literal().is_match(trimmed) {
            if let Ok(n) = f64::from_str(trimmed) {
                if n.is_finite() {
                    // keep -0 out of comparisons and output
                    return Value::Number(if n == 0.0 { 0.0 } else { n });
                }
            }
        }
        Value::Text(field.to_string())
    }

    /// Get the number, if this is a [Value::Number].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => {
                Some(*n)
            }
            Value::Text(_) => {
                None
            }
        }
    }

    /// Get the text, if this is a [Value::Text].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => {
                None
            }
            Value::Text(s) => {
                Some(s.as_str())
            }
        }
    }

    /// Compare two optional metric values in ascending order.
    ///
    /// Numbers compare numerically. A number is always less than a value that is missing or text,
    /// and two non numeric values are equal.
    pub(crate) fn compare_metric(a: Option<&Value>, b: Option<&Value>) -> Ordering {
        match (a.and_then(Value::as_number), b.and_then(Value::as_number)) {
            (Some(a), Some(b)) => {
                a.total_cmp(&b)
            }
            (Some(_), None) => {
                Ordering::Less
            }
            (None, Some(_)) => {
                Ordering::Greater
            }
            (None, None) => {
                Ordering::Equal
            }
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => {
                if *n == 0.0 {
                    write!(f, "0")
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Text(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
