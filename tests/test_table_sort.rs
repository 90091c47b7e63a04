use std::fs;
use std::path::PathBuf;

use regex::Regex;
use pipe_table_sort::error::TableError;
use pipe_table_sort::order::Order;
use pipe_table_sort::sort::Sort;

mod common;

#[test]
fn test_sort_file() -> Result<(), anyhow::Error> {
    common::setup();
    let input_path = PathBuf::from("./tests/fixtures/sales.dat");
    let expected_path = PathBuf::from("./tests/fixtures/sales-sorted.dat");
    let output_path = common::temp_file_name("./target/results/");

    let table_sort = Sort::new(input_path, output_path.clone(), "net_sales_units");
    table_sort.sort()?;

    assert_eq!(fs::read_to_string(&output_path)?, fs::read_to_string(&expected_path)?);
    fs::remove_file(output_path)?;
    Ok(())
}

#[test]
fn test_check() -> Result<(), anyhow::Error> {
    common::setup();
    let sorted = Sort::new(
        PathBuf::from("./tests/fixtures/sales-sorted.dat"),
        PathBuf::new(),
        "net_sales_units",
    );
    assert!(sorted.check()?);

    let unsorted = Sort::new(
        PathBuf::from("./tests/fixtures/sales.dat"),
        PathBuf::new(),
        "net_sales_units",
    );
    assert!(!unsorted.check()?);

    let mut ascending = Sort::new(
        PathBuf::from("./tests/fixtures/sales-sorted.dat"),
        PathBuf::new(),
        "net_sales_units",
    );
    ascending.with_order(Order::Asc);
    assert!(!ascending.check()?);
    Ok(())
}

#[test]
fn test_write_failure_is_not_fatal() -> Result<(), anyhow::Error> {
    common::setup();
    let mut output_path = common::temp_file_name("./target/results/");
    output_path.push("missing-dir");
    output_path.push("sorted.dat");

    let table_sort = Sort::new(
        PathBuf::from("./tests/fixtures/sales.dat"),
        output_path.clone(),
        "net_sales_units",
    );
    table_sort.sort()?;
    assert!(!output_path.exists());
    Ok(())
}

#[test]
fn test_missing_metric_is_fatal() {
    common::setup();
    let output_path = common::temp_file_name("./target/results/");
    let table_sort = Sort::new(
        PathBuf::from("./tests/fixtures/sales.dat"),
        output_path.clone(),
        "gross_margin",
    );
    let err = table_sort.sort().unwrap_err();
    assert_eq!(
        err.downcast_ref::<TableError>(),
        Some(&TableError::MetricNotFound { metric: "gross_margin".to_string() })
    );
    assert!(!output_path.exists());
}

#[test]
fn test_missing_input_is_fatal() {
    let table_sort = Sort::new(
        PathBuf::from("./tests/fixtures/no-such-file.dat"),
        PathBuf::from("./target/results/never-written.dat"),
        "net_sales_units",
    );
    assert!(table_sort.sort().is_err());
}

#[test]
fn test_sort_text_options() -> Result<(), anyhow::Error> {
    let mut table_sort = Sort::new(PathBuf::new(), PathBuf::new(), "units");
    table_sort.with_field_separator(';');
    table_sort.with_ignore_empty();
    table_sort.with_ignore_lines(Regex::new("^#")?);
    table_sort.with_summary_sentinel("ALL");
    table_sort.with_order(Order::Asc);

    let sorted = table_sort.sort_text("name;units\nb;7\n\n# comment\nALL;9\na;2\n")?;
    assert_eq!(sorted, "name;units\nALL;9\na;2\nb;7");
    Ok(())
}

#[test]
fn test_sort_text_strict_by_default() {
    let table_sort = Sort::new(PathBuf::new(), PathBuf::new(), "units");
    let result = table_sort.sort_text("name|units\nb|7\n\na|2");
    assert_eq!(
        result.unwrap_err(),
        TableError::Format { line: 3, expected: 2, actual: 1 }
    );
}

#[test]
fn test_tab_separator_keeps_empty_edge_fields() -> Result<(), anyhow::Error> {
    let mut table_sort = Sort::new(PathBuf::new(), PathBuf::new(), "units");
    table_sort.with_field_separator('\t');

    let sorted = table_sort.sort_text("name\tunits\tnote\na\t5\t\nb\t7\tx")?;
    assert_eq!(sorted, "name\tunits\tnote\nb\t7\tx\na\t5\t");

    let sorted = table_sort.sort_text("note\tname\tunits\n\ta\t5\nx\tb\t7\n")?;
    assert_eq!(sorted, "note\tname\tunits\nx\tb\t7\n\ta\t5");
    Ok(())
}

#[test]
fn test_numeric_summary_sentinel() -> Result<(), anyhow::Error> {
    let mut table_sort = Sort::new(PathBuf::new(), PathBuf::new(), "units");
    table_sort.with_summary_sentinel("0");
    assert_eq!(table_sort.sort_text("id|units\n0|1\n5|9")?, "id|units\n0|1\n5|9");

    table_sort.with_summary_sentinel("$total");
    assert_eq!(table_sort.sort_text("id|units\n0|1\n5|9")?, "id|units\n5|9\n0|1");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_output_permissions() -> Result<(), anyhow::Error> {
    use std::os::unix::fs::PermissionsExt;

    common::setup();
    let output_path = common::temp_file_name("./target/results/");
    let table_sort = Sort::new(
        PathBuf::from("./tests/fixtures/sales.dat"),
        output_path.clone(),
        "net_sales_units",
    );
    table_sort.sort()?;
    assert_eq!(fs::metadata(&output_path)?.permissions().mode() & 0o777, 0o644);

    fs::set_permissions(&output_path, fs::Permissions::from_mode(0o640))?;
    table_sort.sort()?;
    assert_eq!(fs::metadata(&output_path)?.permissions().mode() & 0o777, 0o640);
    fs::remove_file(output_path)?;
    Ok(())
}
