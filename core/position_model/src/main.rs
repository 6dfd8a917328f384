use std::{io, process};

use log::error;
use position_model::{config::SimulationConfig, table};
// used by the library target only
use thiserror as _;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout().lock();
    if let Err(e) = table::run(SimulationConfig::default(), io::BufWriter::new(stdout)) {
        error!("Buffer simulation failed: {e}");
        process::exit(1);
    }
}
