//! Pipe-table layout extraction.
//!
//! A table block is a header line, an alignment separator line, and any
//! number of data lines. Extraction works on plain cell strings; inline
//! markup inside cells is handled by the caller.

use crate::model::Alignment;

/// Layout of a pipe-delimited table, with cells as trimmed strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    /// Header cells
    pub headers: Vec<String>,

    /// One alignment per separator cell
    pub alignments: Vec<Alignment>,

    /// Data rows; lengths are not normalized against the header
    pub rows: Vec<Vec<String>>,
}

/// Check whether a line looks like a pipe-delimited table row.
pub fn is_table_row(line: &str) -> bool {
    let line = line.trim_end();
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// Extract a table from a run of lines.
///
/// Returns `None` when the run has fewer than two lines or the second line
/// is not an alignment separator (it must contain both `-` and `|`). The
/// caller then treats the lines as ordinary text.
pub fn extract_table<S: AsRef<str>>(lines: &[S]) -> Option<TableLayout> {
    let mut lines = lines
        .iter()
        .map(|l| l.as_ref())
        .skip_while(|l| l.trim().is_empty());

    let header_line = lines.next()?;
    let Some(separator_line) = lines.next() else {
        log::debug!("table declined: no separator line");
        return None;
    };

    if !separator_line.contains('-') || !separator_line.contains('|') {
        log::debug!("table declined: invalid separator {:?}", separator_line);
        return None;
    }

    let headers = split_cells(header_line);
    let alignments = split_cells(separator_line)
        .iter()
        .map(|cell| Alignment::from_separator(cell))
        .collect();
    let rows: Vec<Vec<String>> = lines
        .filter(|line| !line.trim().is_empty())
        .map(split_cells)
        .collect();

    log::trace!(
        "table extracted: {} headers, {} rows",
        headers.len(),
        rows.len()
    );

    Some(TableLayout {
        headers,
        alignments,
        rows,
    })
}

/// Split a row on `|`, dropping the empty fragments left by outer pipes.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.trim().split('|').collect();

    if cells.first().is_some_and(|c| c.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_table() {
        let lines = [
            "| Name | Score | Grade |",
            "|:-----|:-----:|------:|",
            "| Ada  | 98    | A     |",
            "| Bob  | 71    | C     |",
        ];
        let table = extract_table(&lines).unwrap();

        assert_eq!(table.headers, vec!["Name", "Score", "Grade"]);
        assert_eq!(
            table.alignments,
            vec![Alignment::Left, Alignment::Center, Alignment::Right]
        );
        assert_eq!(table.rows.len(), lines.len() - 2);
        assert_eq!(table.rows[1], vec!["Bob", "71", "C"]);
    }

    #[test]
    fn test_declines_without_separator() {
        let lines = ["| a | b |", "| c | d |"];
        assert!(extract_table(&lines).is_none());
        assert!(extract_table(&["| a | b |"]).is_none());
        let empty: [&str; 0] = [];
        assert!(extract_table(&empty).is_none());
    }

    #[test]
    fn test_blank_rows_skipped() {
        let lines = ["| a |", "|---|", "", "| 1 |", "   ", "| 2 |"];
        let table = extract_table(&lines).unwrap();
        assert_eq!(table.rows, vec![vec!["1"], vec!["2"]]);
    }

    #[test]
    fn test_ragged_rows_not_normalized() {
        let lines = ["| a | b | c |", "|---|---|", "| 1 |", "| 1 | 2 | 3 | 4 |"];
        let table = extract_table(&lines).unwrap();
        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.alignments.len(), 2);
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_interior_empty_cell_kept() {
        assert_eq!(split_cells("| a |  | b |"), vec!["a", "", "b"]);
        assert_eq!(split_cells("a | b"), vec!["a", "b"]);
    }

    #[test]
    fn test_is_table_row() {
        assert!(is_table_row("| a | b |"));
        assert!(is_table_row("|---|   "));
        assert!(!is_table_row("|"));
        assert!(!is_table_row("a | b"));
    }
}
