//! Training loop orchestration.
//!
//! [`train_model`] runs the epoch loop: forward/backward over the training
//! batches, gradient clipping, optimizer step, per-epoch validation through
//! [`evaluate_model`], plateau LR scheduling, "last" checkpoint overwrites,
//! the early-stopping check, and a loss-curve plot at the end of the run.

mod checkpoint;
mod config;
mod early_stopping;
mod evaluate;
mod plot;
mod trainer;

pub use checkpoint::{create_run_dir, save_last_checkpoints, DECODER_LAST, ENCODER_LAST};
pub use config::{MetricsTracker, TrainConfig};
pub use early_stopping::{EarlyStopping, DECODER_BEST, ENCODER_BEST};
pub use evaluate::evaluate_model;
pub use plot::save_loss_plot;
pub use trainer::{train_model, TrainReport};
