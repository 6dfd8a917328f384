/// Frames pushed into the stretcher per write.
pub const INPUT_BLOCK: u64 = 512;

/// Frames pulled out of the stretcher per read.
pub const OUTPUT_BLOCK: u64 = 128;

/// Time-stretch factor (output frames per input frame).
pub const RATIO: f64 = 2.0;

/// The model stops once the input song position reaches this frame.
pub const STOP_POSITION: u64 = 5000;

/// Tolerance for comparing simulated frame counts.
pub const FRAME_EPSILON: f64 = 1e-9;
