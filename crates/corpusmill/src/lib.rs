//! # `corpusmill` Corpus Preparation Library
//!
//! Turns cleaned corpus text into tokenized binary datasets for a
//! language-model training loop.
//!
//! See:
//! * [`cleaning`] for ordered regex cleanup of raw corpus text.
//! * [`vocab`] for the derived-character and fixed-subword vocabularies.
//! * [`split`] for the positional train/validation cut.
//! * [`artifact`] for the persisted `train.bin` / `val.bin` / `meta.json`
//!   layout consumed by the training loop.
//!
//! Corpus acquisition (listing-API and archive fetchers, raw-corpus caching,
//! and the pipeline entry point) lives in the `corpusmill-data` crate.
#![warn(missing_docs, unused)]

pub mod artifact;
pub mod cleaning;
pub mod errors;
pub mod split;
pub mod vocab;

pub use cleaning::Cleaner;
pub use errors::{CMResult, CorpusmillError};
pub use vocab::{CharVocab, CorpusVocab, Gpt2Vocab, TokenId, VocabMetadata};
