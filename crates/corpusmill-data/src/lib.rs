//! # `corpusmill-data` Corpus Acquisition
//!
//! Fetches raw document collections into local corpus files and drives the
//! full preparation pipeline.
//!
//! See:
//! * [`listing`] for the per-file concurrent fetcher behind a listing API.
//! * [`archive`] for the whole-archive fetcher.
//! * [`cache`] for the raw-corpus cache disposition.
//! * [`presets`] for the built-in corpus configurations.
//! * [`pipeline`] for the fetch → clean → encode → split → serialize run.
#![warn(missing_docs)]

pub mod archive;
pub mod cache;
pub mod listing;
pub mod pipeline;
pub mod presets;
pub mod progress;
