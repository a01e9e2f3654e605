//! Validation pass.

use crate::model::{CaptionBatch, Decoder, Encoder, Mode};

/// Compute the mean validation loss over `val_batches`.
///
/// Switches both models to [`Mode::Eval`] and leaves them there; the trainer
/// restores [`Mode::Train`] at the top of the next epoch. The pass is
/// forward-only — `backward` is never invoked, so no gradients are produced
/// or consumed. Labels are the input ids themselves, the same teacher-forcing
/// scheme the training step uses.
///
/// An empty validation set yields 0.0.
pub fn evaluate_model(
    encoder: &mut dyn Encoder,
    decoder: &mut dyn Decoder,
    val_batches: &[CaptionBatch],
) -> f32 {
    encoder.set_mode(Mode::Eval);
    decoder.set_mode(Mode::Eval);

    let mut total_loss = 0.0;
    let mut num_batches = 0usize;

    for batch in val_batches {
        let features = encoder.forward(&batch.images);
        let output = decoder.forward(
            &features,
            &batch.input_ids,
            &batch.attention_mask,
            &batch.input_ids,
        );
        total_loss += output.loss.data()[0];
        num_batches += 1;
    }

    if num_batches > 0 {
        total_loss / num_batches as f32
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::Tensor;
    use crate::model::DecoderOutput;

    struct ModeTrackingEncoder {
        mode: Mode,
    }

    impl Encoder for ModeTrackingEncoder {
        fn forward(&mut self, images: &Tensor) -> Tensor {
            images.clone()
        }
        fn parameters(&self) -> Vec<Tensor> {
            vec![]
        }
        fn set_mode(&mut self, mode: Mode) {
            self.mode = mode;
        }
        fn state(&self) -> Vec<(String, Tensor)> {
            vec![]
        }
    }

    struct FixedLossDecoder {
        losses: Vec<f32>,
        calls: usize,
        mode: Mode,
    }

    impl Decoder for FixedLossDecoder {
        fn forward(
            &mut self,
            _features: &Tensor,
            _input_ids: &[u32],
            _attention_mask: &[u8],
            _labels: &[u32],
        ) -> DecoderOutput {
            let loss = self.losses[self.calls % self.losses.len()];
            self.calls += 1;
            DecoderOutput { loss: Tensor::from_vec(vec![loss], false) }
        }
        fn parameters(&self) -> Vec<Tensor> {
            vec![]
        }
        fn set_mode(&mut self, mode: Mode) {
            self.mode = mode;
        }
        fn state(&self) -> Vec<(String, Tensor)> {
            vec![]
        }
    }

    fn batch() -> CaptionBatch {
        CaptionBatch::new(Tensor::from_vec(vec![0.5], false), vec![0, 2, 1], vec![1, 1, 1], vec![0])
    }

    #[test]
    fn test_mean_loss_over_batches() {
        let mut encoder = ModeTrackingEncoder { mode: Mode::Train };
        let mut decoder =
            FixedLossDecoder { losses: vec![1.0, 3.0], calls: 0, mode: Mode::Train };

        let val = vec![batch(), batch()];
        let loss = evaluate_model(&mut encoder, &mut decoder, &val);
        assert!((loss - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_switches_models_to_eval() {
        let mut encoder = ModeTrackingEncoder { mode: Mode::Train };
        let mut decoder = FixedLossDecoder { losses: vec![1.0], calls: 0, mode: Mode::Train };

        evaluate_model(&mut encoder, &mut decoder, &[batch()]);
        assert_eq!(encoder.mode, Mode::Eval);
        assert_eq!(decoder.mode, Mode::Eval);
    }

    #[test]
    fn test_empty_validation_set() {
        let mut encoder = ModeTrackingEncoder { mode: Mode::Train };
        let mut decoder = FixedLossDecoder { losses: vec![1.0], calls: 0, mode: Mode::Train };

        let loss = evaluate_model(&mut encoder, &mut decoder, &[]);
        assert_eq!(loss, 0.0);
        assert_eq!(decoder.calls, 0);
    }
}
