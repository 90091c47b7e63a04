use crate::value::Value;

/// Default marker of a summary row.
pub const SUMMARY_SENTINEL: &str = "$total";

/// A single record: column names mapped to [Value]s, in insertion order.
///
/// # Examples
/// ```
/// use pipe_table_sort::row::Row;
/// use pipe_table_sort::value::Value;
///
/// let row: Row = vec![
///     ("name".to_string(), Value::from("$total")),
///     ("units".to_string(), Value::from(12.0)),
/// ].into_iter().collect();
///
/// assert!(row.is_summary("$total"));
/// assert_eq!(row.get("units"), Some(&Value::Number(12.0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty [Row]
    pub fn new() -> Row {
        Row {
            fields: Vec::new(),
        }
    }

    /// Create an empty [Row] with room for `capacity` fields
    pub fn with_capacity(capacity: usize) -> Row {
        Row {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Insert a field. When the name is already present its value is replaced and the name keeps
    /// its original position.
    pub fn insert(&mut self, name: String, value: Value) {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => {
                *v = value;
            }
            None => {
                self.fields.push((name, value));
            }
        }
    }

    /// Get the value of a column.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether the row has a column.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Column names in insertion order.
    pub fn names(&self) -> impl Iterator<Item=&str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item=&Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A summary row has at least one field equal to `sentinel`, in any column.
    ///
    /// The sentinel is typed like a parsed field, so a numeric sentinel such as `0` matches number
    /// fields by value and any other sentinel matches text fields exactly.
    pub fn is_summary(&self, sentinel: &str) -> bool {
        self.contains_value(&Value::infer(sentinel))
    }

    /// Check whether any field holds `value`.
    pub fn contains_value(&self, value: &Value) -> bool {
        self.values().any(|v| v == value)
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<T: IntoIterator<Item=(String, Value)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.insert(name, value);
        }
        row
    }
}
