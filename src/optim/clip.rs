//! Gradient clipping.

use crate::autograd::Tensor;

/// Clip gradients by global norm.
///
/// Computes the L2 norm over every gradient in `params` taken together and,
/// when it exceeds `max_norm`, scales all gradients by `max_norm / norm` so
/// their relative magnitudes are preserved. The trainer passes the combined
/// encoder + decoder parameter list here, clipping both models as one group.
///
/// Returns the global norm before clipping.
pub fn clip_grad_norm(params: &[Tensor], max_norm: f32) -> f32 {
    let total_norm_sq: f32 = params
        .iter()
        .filter_map(Tensor::grad)
        .map(|grad| grad.iter().map(|&g| g * g).sum::<f32>())
        .sum();
    let global_norm = total_norm_sq.sqrt();

    if global_norm > max_norm {
        let clip_coef = max_norm / global_norm;
        for param in params {
            if let Some(grad) = param.grad() {
                param.set_grad(grad * clip_coef);
            }
        }
    }

    global_norm
}
