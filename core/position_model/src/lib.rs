// used by the binary target only
use env_logger as _;

pub mod config;
pub mod constants;
pub mod error;
pub mod simulation;
pub mod table;
