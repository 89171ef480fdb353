//! Delimiter-aware row tokenizer.
//!
//! Splits raw pasted text into rows of trimmed string cells, honoring
//! quoted fields that may contain the delimiter. This is deliberately the
//! naive quote-toggling scanner, not RFC 4180: quote characters flip state
//! and are dropped, and a doubled quote inside a quoted field is not
//! unescaped.

/// Untyped grid of string cells prior to header resolution.
///
/// Lives only within one ingestion call; row 0 is the candidate header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.rows.len() > 1 { &self.rows[1..] } else { &[] }
    }
}

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Tokenize raw text into a [`RawTable`].
///
/// Lines that are empty after trimming are dropped entirely, so blank rows
/// never reach later pipeline stages.
pub fn tokenize(text: &str) -> RawTable {
    let rows = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(tokenize_line)
        .collect();
    RawTable { rows }
}

fn tokenize_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                cells.push(buf.trim().to_string());
                buf.clear();
            }
            _ => buf.push(ch),
        }
    }
    cells.push(buf.trim().to_string());
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_trims_cells() {
        let table = tokenize("a, b ,c\n1,2,3");
        assert_eq!(
            table.rows,
            vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]
        );
    }

    #[test]
    fn quoted_field_keeps_the_delimiter() {
        let table = tokenize("title,price\n\"Zelda, The\",\"10,50\"");
        assert_eq!(table.rows[1], vec!["Zelda, The", "10,50"]);
    }

    #[test]
    fn blank_and_whitespace_lines_are_dropped() {
        let table = tokenize("a,b\n\n   \n1,2\n");
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn trailing_empty_cell_is_preserved() {
        let table = tokenize("a,b,");
        assert_eq!(table.rows[0], vec!["a", "b", ""]);
    }

    #[test]
    fn quote_characters_are_not_kept() {
        let table = tokenize("\"Game A\",SNES");
        assert_eq!(table.rows[0], vec!["Game A", "SNES"]);
    }
}
