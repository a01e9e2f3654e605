//! Korean image-caption training pipeline.
//!
//! Three layers, used in order:
//! - [`text`]: caption normalization and word-vocabulary construction,
//!   upstream of training;
//! - [`model`]: the trait seams for the externally supplied encoder/decoder
//!   pair and the batch shape the dataloader yields;
//! - [`train`]: the epoch loop with gradient clipping, plateau LR
//!   scheduling, last/best checkpointing, early stopping, and a loss-curve
//!   plot export.
//!
//! # Example
//!
//! ```
//! use leyenda::text::{normalize_caption, Vocab};
//!
//! let caption = normalize_caption("아이가  공을 찬다! (photo #3)");
//! assert_eq!(caption, "아이가 공을 찬다! 3");
//!
//! let mut vocab = Vocab::new();
//! vocab.build_vocab(&caption);
//! assert_eq!(vocab.index("아이가"), Some(2));
//! ```

pub mod autograd;
pub mod error;
pub mod io;
pub mod model;
pub mod optim;
pub mod text;
pub mod train;

pub use autograd::Tensor;
pub use error::{Error, Result};
