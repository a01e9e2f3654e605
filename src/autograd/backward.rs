//! Backward operation trait.

/// A deferred gradient computation attached to a loss tensor.
///
/// Decoder implementations build their loss however they like and attach one
/// of these to route gradients into the parameters the loss depends on. The
/// trainer only ever calls [`crate::autograd::backward`]; it never inspects
/// the op itself.
pub trait BackwardOp {
    /// Compute and accumulate gradients into the captured parameters.
    fn backward(&self);
}
