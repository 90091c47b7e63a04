//! This crate sorts pipe delimited tables by a metric column, keeping summary rows on top.
//!
//! A table file is a header line of column names followed by record lines, all fields separated
//! by `|`, for example a sales report aggregated per product with a `$total` line:
//!
//! ```text
//! product|net_sales_units|net_sales_amount
//! apples|5|12.5
//! $total|16|40
//! pears|11|27.5
//! ```
//!
//! The table goes through three steps: [parser::parse] infers a number or text [value::Value]
//! for every field, [sorter::sort] orders the rows by the metric column, descending, with every
//! row holding `$total` pinned first, and [serializer::serialize] writes the rows back in the
//! same format. [sort::Sort] runs these steps from an input file to an output file.
//!
//! # Examples
//! ```
//! use pipe_table_sort::parser::parse;
//! use pipe_table_sort::serializer::serialize;
//! use pipe_table_sort::sorter::sort;
//!
//! let input = "product|net_sales_units\napples|5\n$total|16\npears|11";
//! let mut dataset = parse(input)?;
//! sort(&mut dataset, "net_sales_units")?;
//! assert_eq!(
//!     serialize(&dataset)?,
//!     "product|net_sales_units\n$total|16\npears|11\napples|5"
//! );
//! # Ok::<(), pipe_table_sort::error::TableError>(())
//! ```
//!

pub(crate) mod config;

pub mod dataset;
pub mod error;
pub mod order;
pub mod parser;
pub mod row;
pub mod serializer;
pub mod sort;
pub mod sorter;
pub mod value;
