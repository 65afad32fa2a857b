//! Column-aligned plain text tables.

use shp_core::Result;
use std::io::{BufWriter, Write};

/// Gap between columns.
const COLUMN_GAP: usize = 2;

/// Buffers rows, then writes them left-aligned in columns.
///
/// Column widths always account for the header labels, so data lines are
/// identical whether or not the header is printed. The underlying
/// [`BufWriter`] flushes on drop, so output already written is not lost if
/// the writer is abandoned on an error path; [`TableWriter::finish`] flushes
/// explicitly and reports the error.
pub struct TableWriter<W: Write, const N: usize> {
    out: BufWriter<W>,
    header: [&'static str; N],
    show_header: bool,
    rows: Vec<[String; N]>,
}

impl<W: Write, const N: usize> TableWriter<W, N> {
    pub fn new(out: W, header: [&'static str; N], show_header: bool) -> Self {
        Self {
            out: BufWriter::new(out),
            header,
            show_header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: [String; N]) {
        self.rows.push(row);
    }

    /// Write the header (if enabled) and all rows, then flush.
    pub fn finish(mut self) -> Result<()> {
        let widths = self.column_widths();

        if self.show_header {
            let header = self.header;
            write_line(&mut self.out, &widths, header.iter().copied())?;
        }
        for row in &self.rows {
            write_line(&mut self.out, &widths, row.iter().map(String::as_str))?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn column_widths(&self) -> [usize; N] {
        let mut widths = self.header.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn write_line<'a, W: Write>(
    out: &mut W,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> std::io::Result<()> {
    let last = widths.len().saturating_sub(1);
    for (i, cell) in cells.enumerate() {
        if i == last {
            write!(out, "{cell}")?;
        } else {
            write!(out, "{:<width$}", cell, width = widths[i] + COLUMN_GAP)?;
        }
    }
    writeln!(out)
}
