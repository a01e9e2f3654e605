//! Training configuration and metrics tracking.

use std::path::PathBuf;

/// Configuration for a training run.
///
/// # Example
///
/// ```
/// use leyenda::train::TrainConfig;
///
/// let config = TrainConfig::new()
///     .with_num_epochs(80)
///     .with_patience(15)
///     .with_base_save_dir("state_dict");
/// assert_eq!(config.num_epochs, 80);
/// ```
#[derive(Clone, Debug)]
pub struct TrainConfig {
    /// Maximum number of epochs to train.
    pub num_epochs: usize,
    /// Early-stopping patience in epochs.
    pub patience: usize,
    /// Directory under which the timestamped run directory is created.
    pub base_save_dir: PathBuf,
    /// Maximum global gradient norm for the combined encoder+decoder group.
    pub max_grad_norm: f32,
    /// Output path for the loss-curve plot.
    pub plot_path: PathBuf,
}

impl TrainConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            num_epochs: 1,
            patience: 10,
            base_save_dir: PathBuf::from("state_dict"),
            max_grad_norm: 1.0,
            plot_path: PathBuf::from("loss_plot_ep80_p15.svg"),
        }
    }

    /// Set the maximum number of epochs.
    pub fn with_num_epochs(mut self, num_epochs: usize) -> Self {
        self.num_epochs = num_epochs;
        self
    }

    /// Set the early-stopping patience.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Set the base checkpoint directory.
    pub fn with_base_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_save_dir = dir.into();
        self
    }

    /// Set the gradient clipping norm.
    pub fn with_max_grad_norm(mut self, max_norm: f32) -> Self {
        self.max_grad_norm = max_norm;
        self
    }

    /// Set the loss-plot output path.
    pub fn with_plot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plot_path = path.into();
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Append-only per-epoch loss histories.
#[derive(Clone, Debug, Default)]
pub struct MetricsTracker {
    /// Mean training loss per epoch.
    pub train_losses: Vec<f32>,
    /// Mean validation loss per epoch.
    pub val_losses: Vec<f32>,
    /// Completed epoch count.
    pub epoch: usize,
}

impl MetricsTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one epoch's train and validation losses.
    pub fn record_epoch(&mut self, train_loss: f32, val_loss: f32) {
        self.train_losses.push(train_loss);
        self.val_losses.push(val_loss);
        self.epoch += 1;
    }
}
