//! Epoch loop.

use std::path::PathBuf;

use crate::autograd::backward;
use crate::error::Result;
use crate::model::{CaptionBatch, Decoder, Encoder, Mode};
use crate::optim::{clip_grad_norm, Optimizer, PlateauMode, ReduceLROnPlateau};

use super::checkpoint::{create_run_dir, save_last_checkpoints};
use super::config::{MetricsTracker, TrainConfig};
use super::early_stopping::EarlyStopping;
use super::evaluate::evaluate_model;
use super::plot::save_loss_plot;

/// Outcome of a training run.
#[derive(Clone, Debug)]
pub struct TrainReport {
    /// Mean training loss per completed epoch.
    pub train_losses: Vec<f32>,
    /// Mean validation loss per completed epoch.
    pub val_losses: Vec<f32>,
    /// Number of epochs actually run.
    pub final_epoch: usize,
    /// Whether the early stopper ended the run before `num_epochs`.
    pub stopped_early: bool,
    /// The timestamped directory holding this run's checkpoints.
    pub run_dir: PathBuf,
}

/// Train the encoder/decoder pair for up to `config.num_epochs` epochs.
///
/// Each epoch: forward/backward over every training batch with combined
/// gradient clipping and an optimizer step per batch, a validation pass,
/// a plateau scheduler step on the validation loss, an unconditional "last"
/// checkpoint overwrite, and the early-stopping check. After the loop the
/// loss curves are rendered to `config.plot_path`.
///
/// Any checkpoint or plot I/O failure aborts the run; there are no retries.
///
/// # Example
///
/// ```no_run
/// use leyenda::optim::AdamW;
/// use leyenda::train::{train_model, TrainConfig};
/// # use leyenda::model::{CaptionBatch, Decoder, Encoder};
/// # fn demo(encoder: &mut dyn Encoder, decoder: &mut dyn Decoder,
/// #         train_batches: Vec<CaptionBatch>, val_batches: Vec<CaptionBatch>) {
/// let mut optimizer = AdamW::default_params(1e-4);
/// let config = TrainConfig::new().with_num_epochs(80).with_patience(15);
///
/// let report = train_model(
///     encoder, decoder, &train_batches, &val_batches, &mut optimizer, &config,
/// ).unwrap();
/// println!("trained {} epochs", report.final_epoch);
/// # }
/// ```
pub fn train_model(
    encoder: &mut dyn Encoder,
    decoder: &mut dyn Decoder,
    train_batches: &[CaptionBatch],
    val_batches: &[CaptionBatch],
    optimizer: &mut dyn Optimizer,
    config: &TrainConfig,
) -> Result<TrainReport> {
    let run_dir = create_run_dir(&config.base_save_dir)?;

    let mut scheduler = ReduceLROnPlateau::new(PlateauMode::Min, 0.5, 15);
    let mut early_stopper = EarlyStopping::new(config.patience, &run_dir);
    let mut metrics = MetricsTracker::new();
    let mut stopped_early = false;

    // One flat parameter group: the tensors alias the models' storage, so
    // clipping and optimizer steps act on both models at once.
    let mut params = encoder.parameters();
    params.extend(decoder.parameters());

    for epoch in 0..config.num_epochs {
        encoder.set_mode(Mode::Train);
        decoder.set_mode(Mode::Train);

        let mut total_loss = 0.0;
        let mut num_batches = 0usize;

        for batch in train_batches {
            optimizer.zero_grad(&params);

            let features = encoder.forward(&batch.images);
            let output = decoder.forward(
                &features,
                &batch.input_ids,
                &batch.attention_mask,
                &batch.input_ids, // teacher forcing: labels are the inputs
            );

            backward(&output.loss, None);
            clip_grad_norm(&params, config.max_grad_norm);
            optimizer.step(&params);

            total_loss += output.loss.data()[0];
            num_batches += 1;
        }

        let avg_loss = if num_batches > 0 { total_loss / num_batches as f32 } else { 0.0 };
        let val_loss = evaluate_model(encoder, decoder, val_batches);

        metrics.record_epoch(avg_loss, val_loss);
        println!(
            "[Epoch {}] Train Loss: {:.4} | Val Loss: {:.4}",
            epoch + 1,
            avg_loss,
            val_loss
        );

        scheduler.step(val_loss, optimizer);
        save_last_checkpoints(&run_dir, encoder, decoder)?;

        // The stopper intentionally monitors train loss; the scheduler above
        // watches validation loss.
        early_stopper.update(avg_loss, encoder, decoder)?;
        if early_stopper.early_stop() {
            println!("[Epoch {}] Early stopping triggered", epoch + 1);
            stopped_early = true;
            break;
        }
    }

    save_loss_plot(&metrics.train_losses, &metrics.val_losses, &config.plot_path)?;

    Ok(TrainReport {
        final_epoch: metrics.epoch,
        train_losses: metrics.train_losses,
        val_losses: metrics.val_losses,
        stopped_early,
        run_dir,
    })
}
