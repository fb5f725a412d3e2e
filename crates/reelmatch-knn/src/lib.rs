//! # reelmatch-knn
//!
//! Content-based recommendations over genre vectors.
//!
//! Each movie's genre set is one-hot encoded by a [`GenreBinarizer`]; a
//! user's preferred genres are encoded the same way and matched against the
//! catalog with a brute-force cosine search ([`CosineNeighbors`]). The
//! [`Recommender`] then scores candidates and mixes tailored picks with a
//! diversified slice of out-of-taste titles.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod binarizer;
pub mod neighbors;
mod proptests;
pub mod recommender;
pub mod scoring;

pub use binarizer::GenreBinarizer;
pub use neighbors::{CosineNeighbors, Neighbor, cosine_similarity};
pub use recommender::{RecommendParams, Recommender};
pub use scoring::{Scorer, round2};
