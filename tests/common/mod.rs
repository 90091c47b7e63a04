use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use data_encoding::HEXLOWER;
use pipe_table_sort::dataset::Dataset;
use pipe_table_sort::value::Value;

#[allow(dead_code)]
pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

/// Values of `column` in row order.
#[allow(dead_code)]
pub fn column(dataset: &Dataset, column: &str) -> Vec<Value> {
    dataset
        .rows()
        .iter()
        .map(|row| row.get(column).cloned().unwrap())
        .collect()
}

#[allow(dead_code)]
pub fn numbers(values: &[f64]) -> Vec<Value> {
    values.iter().map(|n| Value::Number(*n)).collect()
}
