//! Comparison table detection.
//!
//! Only the first table in the article is considered. Its nearest
//! `##`/`###` heading above becomes the title.

use crate::markdown::{is_section_heading, is_table_row, strip_heading_marker, table_cells};
use crate::result::{CellValue, ComparisonData, ComparisonRow};
use crate::Options;

const DEFAULT_TABLE_TITLE: &str = "比較表";

/// Extracts the first markdown table, if it has headers and at least one row.
#[must_use]
pub fn extract_comparison_table(lines: &[&str], options: &Options) -> Option<ComparisonData> {
    let table_start = lines.iter().position(|line| is_table_row(line))?;

    let title = lines[..table_start]
        .iter()
        .rev()
        .find(|line| is_section_heading(line))
        .map_or_else(
            || DEFAULT_TABLE_TITLE.to_string(),
            |line| strip_heading_marker(line).into_owned(),
        );

    // The first non-blank cell labels the row column and is not a header.
    let headers: Vec<String> = table_cells(lines[table_start])
        .into_iter()
        .skip(1)
        .map(|cell| cell.trim().to_string())
        .collect();

    let separator = table_start
        + 1
        + lines[table_start + 1..]
            .iter()
            .position(|line| line.contains("---"))?;

    let mut rows: Vec<ComparisonRow> = lines[separator + 1..]
        .iter()
        .take_while(|line| line.contains('|'))
        .filter_map(|line| parse_row(line))
        .collect();
    rows.truncate(options.max_table_rows);

    if headers.is_empty() || rows.is_empty() {
        return None;
    }

    Some(ComparisonData {
        title,
        headers,
        rows,
    })
}

/// A body row needs a label and at least one value.
fn parse_row(line: &str) -> Option<ComparisonRow> {
    let cells = table_cells(line);
    let (label, values) = cells.split_first()?;
    if values.is_empty() {
        return None;
    }
    Some(ComparisonRow {
        label: label.trim().to_string(),
        values: values.iter().map(|cell| CellValue::from_cell(cell)).collect(),
    })
}
