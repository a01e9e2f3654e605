//! Early stopping with best-checkpoint persistence.

use std::path::PathBuf;

use crate::error::Result;
use crate::io::ModelState;
use crate::model::{Decoder, Encoder};

/// File name for the best-so-far encoder snapshot.
pub const ENCODER_BEST: &str = "encoder_best.json";
/// File name for the best-so-far decoder snapshot.
pub const DECODER_BEST: &str = "decoder_best.json";

/// Halt training when the monitored loss stops improving, keeping a "best"
/// checkpoint pair of the models at their lowest observed loss.
///
/// Called once per epoch via [`update`](EarlyStopping::update); the caller
/// reads [`early_stop`](EarlyStopping::early_stop) after each call and breaks
/// the epoch loop when it turns true.
pub struct EarlyStopping {
    /// Epochs without improvement tolerated before stopping.
    patience: usize,
    /// Minimum improvement to reset patience.
    min_delta: f32,
    /// Best loss seen so far.
    best_loss: f32,
    /// Epochs without improvement.
    epochs_without_improvement: usize,
    /// Where best checkpoints are written (the run directory).
    save_dir: PathBuf,
    early_stop: bool,
}

impl EarlyStopping {
    /// Create a stopper writing best checkpoints into `save_dir`.
    pub fn new(patience: usize, save_dir: impl Into<PathBuf>) -> Self {
        Self {
            patience,
            min_delta: 0.0,
            best_loss: f32::INFINITY,
            epochs_without_improvement: 0,
            save_dir: save_dir.into(),
            early_stop: false,
        }
    }

    /// Require at least this much improvement to reset patience.
    pub fn with_min_delta(mut self, min_delta: f32) -> Self {
        self.min_delta = min_delta;
        self
    }

    /// Whether the stop condition has been reached.
    pub fn early_stop(&self) -> bool {
        self.early_stop
    }

    /// Best loss observed so far.
    pub fn best_loss(&self) -> f32 {
        self.best_loss
    }

    /// Record one epoch's monitored loss.
    ///
    /// On improvement, resets the counter and overwrites the best checkpoint
    /// pair. Otherwise increments the counter and raises the stop flag once
    /// `patience` epochs have passed without improvement.
    pub fn update(
        &mut self,
        loss: f32,
        encoder: &dyn Encoder,
        decoder: &dyn Decoder,
    ) -> Result<()> {
        if loss < self.best_loss - self.min_delta {
            self.best_loss = loss;
            self.epochs_without_improvement = 0;
            ModelState::from_named(encoder.state()).save(self.save_dir.join(ENCODER_BEST))?;
            ModelState::from_named(decoder.state()).save(self.save_dir.join(DECODER_BEST))?;
        } else {
            self.epochs_without_improvement += 1;
            if self.epochs_without_improvement >= self.patience {
                eprintln!(
                    "Early stopping: no improvement for {} epochs (best loss: {:.4})",
                    self.patience, self.best_loss
                );
                self.early_stop = true;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Tensor;
    use crate::model::{DecoderOutput, Mode};

    struct StubEncoder {
        w: Tensor,
    }

    impl Encoder for StubEncoder {
        fn forward(&mut self, images: &Tensor) -> Tensor {
            images.clone()
        }
        fn parameters(&self) -> Vec<Tensor> {
            vec![self.w.clone()]
        }
        fn set_mode(&mut self, _mode: Mode) {}
        fn state(&self) -> Vec<(String, Tensor)> {
            vec![("w".to_string(), self.w.clone())]
        }
    }

    struct StubDecoder {
        v: Tensor,
    }

    impl Decoder for StubDecoder {
        fn forward(
            &mut self,
            _features: &Tensor,
            _input_ids: &[u32],
            _attention_mask: &[u8],
            _labels: &[u32],
        ) -> DecoderOutput {
            DecoderOutput { loss: Tensor::from_vec(vec![0.0], false) }
        }
        fn parameters(&self) -> Vec<Tensor> {
            vec![self.v.clone()]
        }
        fn set_mode(&mut self, _mode: Mode) {}
        fn state(&self) -> Vec<(String, Tensor)> {
            vec![("v".to_string(), self.v.clone())]
        }
    }

    fn models() -> (StubEncoder, StubDecoder) {
        (
            StubEncoder { w: Tensor::from_vec(vec![1.0], true) },
            StubDecoder { v: Tensor::from_vec(vec![2.0], true) },
        )
    }

    #[test]
    fn test_stops_after_patience_epochs() {
        let dir = tempfile::tempdir().unwrap();
        let (encoder, decoder) = models();
        let mut stopper = EarlyStopping::new(2, dir.path());

        stopper.update(1.0, &encoder, &decoder).unwrap();
        assert!(!stopper.early_stop());
        stopper.update(1.0, &encoder, &decoder).unwrap();
        assert!(!stopper.early_stop());
        stopper.update(1.0, &encoder, &decoder).unwrap();
        assert!(stopper.early_stop());
    }

    #[test]
    fn test_improvement_resets_counter() {
        let dir = tempfile::tempdir().unwrap();
        let (encoder, decoder) = models();
        let mut stopper = EarlyStopping::new(2, dir.path());

        stopper.update(1.0, &encoder, &decoder).unwrap();
        stopper.update(1.0, &encoder, &decoder).unwrap();
        stopper.update(0.5, &encoder, &decoder).unwrap();
        stopper.update(0.5, &encoder, &decoder).unwrap();
        assert!(!stopper.early_stop());
        assert_eq!(stopper.best_loss(), 0.5);
    }

    #[test]
    fn test_best_checkpoints_written_on_improvement() {
        let dir = tempfile::tempdir().unwrap();
        let (encoder, decoder) = models();
        let mut stopper = EarlyStopping::new(3, dir.path());

        stopper.update(1.0, &encoder, &decoder).unwrap();

        let enc = ModelState::load(dir.path().join(ENCODER_BEST)).unwrap();
        let dec = ModelState::load(dir.path().join(DECODER_BEST)).unwrap();
        assert_eq!(enc.param("w"), Some(&[1.0][..]));
        assert_eq!(dec.param("v"), Some(&[2.0][..]));
    }

    #[test]
    fn test_no_checkpoint_without_improvement() {
        let dir = tempfile::tempdir().unwrap();
        let (encoder, decoder) = models();
        let mut stopper = EarlyStopping::new(5, dir.path());

        stopper.update(1.0, &encoder, &decoder).unwrap();
        // Mutate the encoder, then report a worse loss.
        encoder.w.data_mut()[0] = 9.0;
        stopper.update(2.0, &encoder, &decoder).unwrap();

        // The snapshot still holds the value from the improving epoch.
        let enc = ModelState::load(dir.path().join(ENCODER_BEST)).unwrap();
        assert_eq!(enc.param("w"), Some(&[1.0][..]));
    }

    #[test]
    fn test_min_delta() {
        let dir = tempfile::tempdir().unwrap();
        let (encoder, decoder) = models();
        let mut stopper = EarlyStopping::new(1, dir.path()).with_min_delta(0.1);

        stopper.update(1.0, &encoder, &decoder).unwrap();
        // 0.95 is within min_delta: counts as no improvement.
        stopper.update(0.95, &encoder, &decoder).unwrap();
        assert!(stopper.early_stop());
    }
}
