//! Optimization: optimizer trait, AdamW, gradient clipping, and the
//! plateau-based learning rate scheduler.

mod adamw;
mod clip;
mod optimizer;
mod plateau;

pub use adamw::AdamW;
pub use clip::clip_grad_norm;
pub use optimizer::Optimizer;
pub use plateau::{PlateauMode, ReduceLROnPlateau};
