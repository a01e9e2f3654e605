//! Contracts for the externally supplied encoder/decoder pair.
//!
//! The crate does not define model architectures. Training only needs the
//! seams below: a forward pass, a flat view of the trainable parameters, a
//! train/eval mode switch, and a named parameter snapshot for checkpoints.

mod batch;

pub use batch::CaptionBatch;

use crate::autograd::Tensor;

/// Model execution mode.
///
/// The evaluator switches both models to [`Mode::Eval`] and leaves them
/// there; the trainer switches back to [`Mode::Train`] at the top of every
/// epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Train,
    Eval,
}

/// Output of a decoder forward pass.
///
/// The decoder computes its own teacher-forcing loss internally; the trainer
/// only reads the scalar value and runs the backward pass attached to it.
pub struct DecoderOutput {
    /// Scalar loss tensor, with a backward op when gradients are wanted.
    pub loss: Tensor,
}

/// Vision feature extractor.
pub trait Encoder {
    /// Compute a feature representation for a batch of images.
    fn forward(&mut self, images: &Tensor) -> Tensor;

    /// Aliased handles to every trainable parameter.
    fn parameters(&self) -> Vec<Tensor>;

    /// Switch between training and inference behaviour.
    fn set_mode(&mut self, mode: Mode);

    /// Named parameter snapshot for checkpointing.
    fn state(&self) -> Vec<(String, Tensor)>;
}

/// Autoregressive text decoder.
pub trait Decoder {
    /// Run a teacher-forcing forward pass and return the loss.
    ///
    /// `labels` is the supervision target; the trainer always passes the
    /// input ids themselves (language-modeling loss).
    fn forward(
        &mut self,
        features: &Tensor,
        input_ids: &[u32],
        attention_mask: &[u8],
        labels: &[u32],
    ) -> DecoderOutput;

    /// Aliased handles to every trainable parameter.
    fn parameters(&self) -> Vec<Tensor>;

    /// Switch between training and inference behaviour.
    fn set_mode(&mut self, mode: Mode);

    /// Named parameter snapshot for checkpointing.
    fn state(&self) -> Vec<(String, Tensor)>;
}
