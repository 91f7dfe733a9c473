//! Table rendering utilities for CLI outputs.
//!
//! Column widths grow with their content up to `max_width`; longer cells
//! wrap onto extra lines. ANSI colour codes do not count towards widths.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Display width of `s` ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    let mut plain = String::new();

    for ch in s.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
            continue;
        }
        if ch == '\x1b' {
            width += UnicodeWidthStr::width(plain.as_str());
            plain.clear();
            in_escape = true;
            continue;
        }
        plain.push(ch);
    }

    width + UnicodeWidthStr::width(plain.as_str())
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .max()
                    .unwrap_or(0);
                content
                    .max(visible_width(&col.header))
                    .min(col.max_width.max(visible_width(&col.header)))
            })
            .collect()
    }

    fn render_line(out: &mut String, cells: &[Vec<String>], widths: &[usize]) {
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);
        for line in 0..height {
            for (i, w) in widths.iter().enumerate() {
                let text = cells
                    .get(i)
                    .and_then(|c| c.get(line))
                    .map(String::as_str)
                    .unwrap_or("");
                out.push_str(&pad(text, *w));
                out.push(' ');
            }
            // trailing spaces are noise in captured output
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        }
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| vec![c.header.clone()])
            .collect();
        Self::render_line(&mut out, &header, &widths);

        let rule: Vec<Vec<String>> = widths.iter().map(|w| vec!["─".repeat(*w)]).collect();
        Self::render_line(&mut out, &rule, &widths);

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    // coloured cells are short labels; never wrap them
                    if cell.contains('\x1b') || visible_width(cell) <= *w {
                        vec![cell.to_string()]
                    } else {
                        textwrap::wrap(cell, *w)
                            .into_iter()
                            .map(|l| l.into_owned())
                            .collect()
                    }
                })
                .collect();
            Self::render_line(&mut out, &cells, &widths);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_codes_do_not_count() {
        assert_eq!(visible_width("\x1b[32mDisetujui\x1b[0m"), 9);
        assert_eq!(visible_width("abc"), 3);
    }

    #[test]
    fn long_cells_wrap() {
        let mut t = Table::new(vec![Column::new("ID", 10), Column::new("Alasan", 12)]);
        t.add_row(vec!["a1".into(), "Mengantar anggota keluarga berobat".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.len() > 3, "expected wrapped rows:\n{out}");
        assert!(lines[0].starts_with("ID"));
        assert!(out.contains("Mengantar"));
    }
}
