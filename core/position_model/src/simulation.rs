use log::{debug, trace};

use crate::{config::SimulationConfig, error::ModelError};

/// The four counters the model tracks between iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationState {
    /// cumulative input frames written
    pub input_song_pos: u64,
    /// output position, advanced by `output_block / ratio` per read
    pub output_song_pos: f64,
    /// cumulative output frames read
    pub output_frame: u64,
    /// simulated stretcher fill level, never clamped
    pub buf_frames: f64,
}

/// Values of a single iteration, captured before the state update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRow {
    pub input_song_pos: u64,
    pub written: u64,
    pub read: u64,
    pub buf_frames: f64,
    pub output_frame: u64,
    pub output_song_pos: f64,
}

/// Approximates how a time-stretcher's internal buffer fills and drains when fixed
/// input blocks are written and output blocks are read at a fixed ratio.
///
/// This is a coarse model for reasoning about song position sync points, not a
/// reproduction of any real stretcher's latency behavior.
#[derive(Debug)]
pub struct BufferSimulation {
    config: SimulationConfig,
    state: SimulationState,
}

impl BufferSimulation {
    pub fn new(config: SimulationConfig) -> Result<Self, ModelError> {
        Self::resume(config, SimulationState::default())
    }

    /// Continue from an arbitrary snapshot. The buffer level is taken as-is, negative
    /// values included, but must be finite.
    pub fn resume(config: SimulationConfig, state: SimulationState) -> Result<Self, ModelError> {
        config.validate()?;

        // NaN never reads nor writes; infinity reads forever
        if !state.buf_frames.is_finite() {
            return Err(ModelError::InvalidState(format!(
                "buf_frames must be finite, got {}",
                state.buf_frames
            )));
        }
        if !state.output_song_pos.is_finite() {
            return Err(ModelError::InvalidState(format!(
                "output_song_pos must be finite, got {}",
                state.output_song_pos
            )));
        }

        // a full buffer has to visibly drain on each read, or it never drops back to a write
        let threshold = config.read_threshold();
        if state.buf_frames > config.input_block as f64
            && state.buf_frames - threshold >= state.buf_frames
        {
            return Err(ModelError::InvalidState(format!(
                "buf_frames {} is too large to drain by {threshold} per read",
                state.buf_frames
            )));
        }

        Ok(Self { config, state })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.input_song_pos >= self.config.stop_position
    }

    /// Run one iteration. Returns the pre-update row, or `None` once the input song
    /// position has reached the stop position.
    pub fn step(&mut self) -> Option<SimulationRow> {
        if self.is_finished() {
            return None;
        }

        let threshold = self.config.read_threshold();
        let state = &mut self.state;

        let read = if state.buf_frames >= threshold {
            self.config.output_block
        } else {
            0
        };
        let written = if state.buf_frames <= self.config.input_block as f64 {
            self.config.input_block
        } else {
            0
        };

        let row = SimulationRow {
            input_song_pos: state.input_song_pos,
            written,
            read,
            buf_frames: state.buf_frames,
            output_frame: state.output_frame,
            output_song_pos: state.output_song_pos,
        };

        state.buf_frames = state.buf_frames - read as f64 / self.config.ratio + written as f64;
        state.input_song_pos = state.input_song_pos.saturating_add(written);
        if read > 0 {
            state.output_frame = state.output_frame.saturating_add(read);
            state.output_song_pos += threshold;
        }

        trace!(
            "step: in={} wrote={} read={} buf={} -> {}",
            row.input_song_pos, written, read, row.buf_frames, state.buf_frames
        );

        if self.is_finished() {
            debug!(
                "simulation finished: input={} output_frame={} output_pos={}",
                self.state.input_song_pos, self.state.output_frame, self.state.output_song_pos
            );
        }

        Some(row)
    }
}

impl Iterator for BufferSimulation {
    type Item = SimulationRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

#[cfg(test)]
impl BufferSimulation {
    pub fn mock_set_buf_frames(&mut self, value: f64) {
        self.state.buf_frames = value;
    }
}
