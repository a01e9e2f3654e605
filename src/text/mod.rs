//! Caption text preparation.
//!
//! Runs upstream of training: raw captions are normalized with
//! [`normalize_caption`], then fed to a [`Vocab`] to build the word↔index
//! mapping the dataloader uses. Neither piece is touched by the trainer.

mod normalize;
mod vocab;

pub use normalize::normalize_caption;
pub use vocab::{Vocab, EOS_INDEX, EOS_TOKEN, SOS_INDEX, SOS_TOKEN};
