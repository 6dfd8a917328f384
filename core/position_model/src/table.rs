use std::io::Write;

use log::debug;

use crate::{
    config::SimulationConfig,
    error::ModelError,
    simulation::{BufferSimulation, SimulationRow},
};

pub const HEADER: [&str; 6] = ["INPOS", "WRI", "REA", "BUF", "OUTPT", "OTPOS"];
pub const COLUMN_WIDTHS: [usize; 6] = [5, 3, 3, 4, 5, 5];

/// Floating counters are displayed as integers, truncated toward zero.
fn display_frames(value: f64) -> i64 {
    value as i64
}

fn join_columns<T: std::fmt::Display>(fields: [T; 6]) -> String {
    fields
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(field, width)| format!("{field:>width$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_header() -> String {
    join_columns(HEADER)
}

pub fn format_row(row: &SimulationRow) -> String {
    join_columns([
        row.input_song_pos as i64,
        row.written as i64,
        row.read as i64,
        display_frames(row.buf_frames),
        row.output_frame as i64,
        display_frames(row.output_song_pos),
    ])
}

/// Writes the simulation table, one line per row, to any byte sink.
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    sink: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_header(&mut self) -> Result<(), ModelError> {
        writeln!(self.sink, "{}", format_header())?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &SimulationRow) -> Result<(), ModelError> {
        writeln!(self.sink, "{}", format_row(row))?;
        Ok(())
    }

    /// Returns the number of rows written.
    pub fn write_all_rows(
        &mut self,
        rows: impl IntoIterator<Item = SimulationRow>,
    ) -> Result<usize, ModelError> {
        let mut count = 0;
        for row in rows {
            self.write_row(&row)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn flush(&mut self) -> Result<(), ModelError> {
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Run a full simulation and print its table (header first) into `sink`.
pub fn run<W: Write>(config: SimulationConfig, sink: W) -> Result<usize, ModelError> {
    let simulation = BufferSimulation::new(config)?;
    debug!("running buffer simulation with {config:?}");

    let mut writer = TableWriter::new(sink);
    writer.write_header()?;
    let rows = writer.write_all_rows(simulation)?;
    writer.flush()?;

    Ok(rows)
}
