//! Caption batch data structure.

use crate::autograd::Tensor;

/// One dataloader batch for caption training.
///
/// Mirrors the `(images, input_ids, attention_mask, sample_ids)` tuple the
/// dataset yields. `sample_ids` identifies the source rows for debugging and
/// is never read by the trainer or evaluator.
#[derive(Clone)]
pub struct CaptionBatch {
    /// Flattened image tensor for the batch.
    pub images: Tensor,
    /// Caption token ids, used as both decoder input and labels.
    pub input_ids: Vec<u32>,
    /// 1 for real tokens, 0 for padding.
    pub attention_mask: Vec<u8>,
    /// Dataset row ids for the samples in this batch.
    pub sample_ids: Vec<usize>,
}

impl CaptionBatch {
    /// Create a new batch.
    pub fn new(
        images: Tensor,
        input_ids: Vec<u32>,
        attention_mask: Vec<u8>,
        sample_ids: Vec<usize>,
    ) -> Self {
        Self { images, input_ids, attention_mask, sample_ids }
    }

    /// Number of caption tokens in the batch.
    pub fn seq_len(&self) -> usize {
        self.input_ids.len()
    }
}
