use crate::{
    constants::{INPUT_BLOCK, OUTPUT_BLOCK, RATIO, STOP_POSITION},
    error::ModelError,
};

/// Block sizes and stretch ratio driving a [`crate::simulation::BufferSimulation`].
///
/// `Default` gives the fixed values the binary runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub input_block: u64,
    pub output_block: u64,
    pub ratio: f64,
    /// The run ends once the input song position reaches this frame.
    pub stop_position: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input_block: INPUT_BLOCK,
            output_block: OUTPUT_BLOCK,
            ratio: RATIO,
            stop_position: STOP_POSITION,
        }
    }
}

impl SimulationConfig {
    pub fn new(
        input_block: u64,
        output_block: u64,
        ratio: f64,
        stop_position: u64,
    ) -> Result<Self, ModelError> {
        let config = Self {
            input_block,
            output_block,
            ratio,
            stop_position,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        // a zero input block never advances the input position, so the loop never ends
        if self.input_block == 0 {
            return Err(ModelError::InvalidConfig(
                "input_block must be greater than zero".to_owned(),
            ));
        }

        if self.output_block == 0 {
            return Err(ModelError::InvalidConfig(
                "output_block must be greater than zero".to_owned(),
            ));
        }

        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(ModelError::InvalidConfig(format!(
                "ratio must be a positive finite number, got {}",
                self.ratio
            )));
        }

        // a buffer level between input_block and the read threshold would neither
        // read nor write, stalling the run
        if self.read_threshold() > self.input_block as f64 {
            return Err(ModelError::InvalidConfig(format!(
                "output_block / ratio ({}) must not exceed input_block ({})",
                self.read_threshold(),
                self.input_block
            )));
        }

        // input_song_pos stays below stop_position before a write, so this bounds it
        if self.stop_position.checked_add(self.input_block).is_none() {
            return Err(ModelError::InvalidConfig(format!(
                "stop_position ({}) + input_block ({}) overflows",
                self.stop_position, self.input_block
            )));
        }

        // the fullest reachable buffer must visibly shrink by one read
        let max_buffer = 2.0 * self.input_block as f64;
        if max_buffer - self.read_threshold() >= max_buffer {
            return Err(ModelError::InvalidConfig(format!(
                "read threshold {} is too small to drain a buffer of {max_buffer} frames",
                self.read_threshold()
            )));
        }

        Ok(())
    }

    /// Buffered frames needed before a read happens. Also the amount one read drains
    /// from the buffer and advances the output song position by.
    pub fn read_threshold(&self) -> f64 {
        self.output_block as f64 / self.ratio
    }
}
