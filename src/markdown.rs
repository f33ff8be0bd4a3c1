#![forbid(unsafe_code)]

//! Stateless Markdown building blocks
//!
//! Every helper returns a fresh `String`; nothing here depends on hidden state,
//! so identical input always renders identical text.

use std::collections::BTreeMap;

/// Cell values of a table row, keyed by column key
pub type Row = BTreeMap<String, String>;

/// Column alignment in a table break row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// A table column: the header title and the row key its cells come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    pub key: String,
    pub align: Option<Align>,
}

impl Column {
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
            align: None,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }
}

/// Markdown renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl Markdown {
    pub fn new() -> Self {
        Markdown
    }

    pub fn header(&self, value: &str, level: usize) -> String {
        format!("{} {value}\n", "#".repeat(level))
    }

    pub fn paragraph(&self, value: &str) -> String {
        format!("{value}\n")
    }

    pub fn link(&self, title: &str, link: &str) -> String {
        format!("[{title}]({link})")
    }

    pub fn bold(&self, text: &str) -> String {
        format!("**{text}**")
    }

    pub fn italic(&self, text: &str) -> String {
        format!("*{text}*")
    }

    pub fn code(&self, code: &str) -> String {
        format!("`{code}`")
    }

    pub fn unordered_list<S: AsRef<str>>(&self, items: &[S]) -> String {
        items
            .iter()
            .map(|item| format!("- {}", item.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Header row, break row and one row per entry of `rows`
    pub fn table(&self, columns: &[Column], rows: &[Row]) -> String {
        let mut lines = vec![
            self.table_header_row(columns),
            self.table_break_row(columns),
        ];
        lines.extend(rows.iter().map(|row| self.table_row(columns, row)));
        lines.join("\n")
    }

    pub fn table_header_row(&self, columns: &[Column]) -> String {
        join_cells(columns.iter().map(|col| self.table_cell(&col.title)))
    }

    pub fn table_break_row(&self, columns: &[Column]) -> String {
        join_cells(
            columns
                .iter()
                .map(|col| self.table_align_cell(col.title.chars().count(), col.align)),
        )
    }

    /// A data row; keys missing from `row` render as empty cells
    pub fn table_row(&self, columns: &[Column], row: &Row) -> String {
        join_cells(columns.iter().map(|col| {
            self.table_cell(row.get(&col.key).map(String::as_str).unwrap_or(""))
        }))
    }

    pub fn table_cell(&self, value: &str) -> String {
        format!("| {value} |")
    }

    /// Break cell at least three dashes wide, or as wide as the column title
    pub fn table_align_cell(&self, length: usize, align: Option<Align>) -> String {
        let dashes = "-".repeat(length.max(3));
        match align {
            Some(Align::Left) => format!("|:{dashes}|"),
            Some(Align::Right) => format!("|{dashes}:|"),
            Some(Align::Center) => format!("|:{dashes}:|"),
            None => format!("|{dashes}|"),
        }
    }
}

/// Concatenates `| v |` fragments, collapsing the doubled delimiters between them
fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<String>().replace("||", "|")
}

/// Escapes pipes so a value cannot split a table cell
pub fn escape_pipes(value: &str) -> String {
    value.replace('|', "\\|")
}
