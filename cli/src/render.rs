use std::io::{self, Write};

use sapper_core::{CellView, DisplayValue, Snapshot};

/// Something that can draw a board snapshot to a text stream.
pub trait Printer {
    fn print(&self, snapshot: &Snapshot, out: &mut dyn Write) -> io::Result<()>;
}

fn glyph(view: &CellView) -> char {
    match view.value {
        DisplayValue::Count(count) => char::from(b'0' + count),
        DisplayValue::Mine => '*',
        DisplayValue::Hidden if view.xray_mine => 'b',
        DisplayValue::Hidden if view.flagged => 'f',
        DisplayValue::Hidden => '.',
    }
}

/// One character per cell, one line per row.
#[derive(Copy, Clone, Debug, Default)]
pub struct SimplePrinter;

impl Printer for SimplePrinter {
    fn print(&self, snapshot: &Snapshot, out: &mut dyn Write) -> io::Result<()> {
        for row in snapshot.rows() {
            let line: String = row.iter().map(glyph).collect();
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Framed grid with spaced cells.
#[derive(Copy, Clone, Debug, Default)]
pub struct PrettyPrinter;

impl PrettyPrinter {
    fn print_edge(width: usize, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "+ {} +", "-".repeat(width * 2))
    }
}

impl Printer for PrettyPrinter {
    fn print(&self, snapshot: &Snapshot, out: &mut dyn Write) -> io::Result<()> {
        let width = usize::from(snapshot.size().0);

        Self::print_edge(width, out)?;
        for row in snapshot.rows() {
            write!(out, "| ")?;
            for view in row.iter() {
                write!(out, "{} ", glyph(view))?;
            }
            writeln!(out, " |")?;
        }
        Self::print_edge(width, out)
    }
}

/// The snapshot as a single line of JSON.
#[derive(Copy, Clone, Debug, Default)]
pub struct JsonPrinter;

impl Printer for JsonPrinter {
    fn print(&self, snapshot: &Snapshot, out: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *out, snapshot)?;
        writeln!(out)
    }
}
