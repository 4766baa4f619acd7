//! Message text for notices.
//!
//! The session produces typed [`Notice`](crate::events::Notice)s; a
//! [`MessageCatalog`] turns each into text. Where a catalog offers several
//! variants, the pick goes through a [`RandomSource`] so tests can pin it.

mod catalog;
mod random;

pub use catalog::{DefaultCatalog, MessageCatalog};
pub use random::{FixedChoice, RandomSource, SeededRandom, ThreadRandom};
