//! Parameter tensors with gradient storage.
//!
//! Models own their parameters as [`Tensor`] handles. Cloning a tensor aliases
//! its storage, so the trainer can collect one flat parameter list from the
//! encoder and decoder and run clipping and optimizer updates against it while
//! the models keep reading the same values.

mod backward;
mod tensor;

pub use backward::BackwardOp;
pub use tensor::Tensor;

/// Perform a backward pass from a loss tensor.
///
/// Seeds the loss gradient with `grad_output` (ones when `None`, the scalar
/// loss case) and fires the attached backward op, which is responsible for
/// writing gradients into the model parameters it captured.
pub fn backward(loss: &Tensor, grad_output: Option<ndarray::Array1<f32>>) {
    match grad_output {
        Some(grad) => loss.set_grad(grad),
        None => loss.set_grad(ndarray::Array1::ones(loss.len())),
    }

    if let Some(op) = loss.backward_op() {
        op.backward();
    }
}
