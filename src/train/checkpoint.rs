//! Run directory layout and "last" checkpoint writes.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::io::ModelState;
use crate::model::{Decoder, Encoder};

/// File name for the most recent encoder snapshot.
pub const ENCODER_LAST: &str = "encoder_last.json";
/// File name for the most recent decoder snapshot.
pub const DECODER_LAST: &str = "decoder_last.json";

/// Create the timestamped directory for one training run.
///
/// The directory is `<base_dir>/run_<YYYYMMDD_HHMMSS>`, created once before
/// epoch 0 and reused for every checkpoint of the run. Two runs started in
/// the same wall-clock second would collide on the name; nothing guards
/// against that.
pub fn create_run_dir(base_dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("run_%Y%m%d_%H%M%S").to_string();
    let run_dir = base_dir.join(timestamp);
    std::fs::create_dir_all(&run_dir)?;
    Ok(run_dir)
}

/// Overwrite the "last" checkpoint pair for the current epoch.
///
/// Unconditional and idempotent; the early stopper's "best" pair is a
/// separate write path.
pub fn save_last_checkpoints(
    run_dir: &Path,
    encoder: &dyn Encoder,
    decoder: &dyn Decoder,
) -> Result<()> {
    ModelState::from_named(encoder.state()).save(run_dir.join(ENCODER_LAST))?;
    ModelState::from_named(decoder.state()).save(run_dir.join(DECODER_LAST))?;
    Ok(())
}
