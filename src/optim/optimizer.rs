//! Optimizer trait.

use crate::autograd::Tensor;

/// Trait for optimization algorithms.
///
/// Parameters are shared-storage tensors, so a `&[Tensor]` slice is enough to
/// update the models that own them.
pub trait Optimizer {
    /// Apply one update step to every parameter carrying a gradient.
    fn step(&mut self, params: &[Tensor]);

    /// Clear all gradients.
    fn zero_grad(&mut self, params: &[Tensor]) {
        for param in params {
            param.zero_grad();
        }
    }

    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}
