//! # Corpus Presets
//!
//! Fixed per-corpus configuration: remote source, cleaning profile,
//! vocabulary strategy, and split ratio. Corpus selection is a preset name;
//! nothing here is runtime-parsed input.

use corpusmill::cleaning::{Cleaner, profiles};

use crate::{archive::ArchiveSource, listing::ListingSource};

/// Fraction of the token stream assigned to the train split.
pub const TRAIN_FRACTION: f64 = 0.9;

/// File name of the raw corpus cache inside a dataset directory.
pub static RAW_CORPUS_FILE: &str = "input.txt";

/// Remote source configuration for a preset.
#[derive(Debug, Clone)]
pub enum SourceConfig {
    /// Per-file concurrent fetch through a listing API.
    Listing(ListingSource),

    /// Whole-archive fetch and extraction.
    Archive(ArchiveSource),
}

/// Cleaning profile applied by a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningProfile {
    /// RST/PEP document rules: metadata preamble, directives, boilerplate.
    RstDocument,

    /// Project Gutenberg ebook rules: front/back matter markers.
    GutenbergEbook,
}

/// Vocabulary strategy of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabStrategy {
    /// Character vocabulary derived by scanning the cleaned corpus.
    CharDerived,

    /// Fixed GPT-2 subword vocabulary.
    Gpt2,
}

/// One corpus configuration.
#[derive(Debug, Clone)]
pub struct CorpusPreset {
    /// Preset name; also names the dataset directory.
    pub name: &'static str,

    /// Remote source.
    pub source: SourceConfig,

    /// Cleaning profile.
    pub cleaning: CleaningProfile,

    /// Vocabulary strategy.
    pub vocab: VocabStrategy,

    /// Train split fraction.
    pub train_fraction: f64,
}

impl CorpusPreset {
    /// The cleaner for this preset's cleaning profile.
    pub fn cleaner(&self) -> Cleaner {
        match self.cleaning {
            CleaningProfile::RstDocument => profiles::rst_document(),
            CleaningProfile::GutenbergEbook => profiles::gutenberg_ebook(),
        }
    }
}

fn pep_listing_source(denylist: &[&str]) -> ListingSource {
    ListingSource {
        listing_url: "https://api.github.com/repos/python/peps/contents".to_string(),
        raw_base_url: "https://raw.githubusercontent.com/python/peps/main/".to_string(),
        name_prefix: "pep-".to_string(),
        extensions: vec![".txt".to_string(), ".rst".to_string()],
        denylist: denylist.iter().map(|name| name.to_string()).collect(),
    }
}

/// Python PEP corpus, GPT-2 subword encoding.
pub fn python_peps() -> CorpusPreset {
    CorpusPreset {
        name: "python-peps",
        source: SourceConfig::Listing(pep_listing_source(&[])),
        cleaning: CleaningProfile::RstDocument,
        vocab: VocabStrategy::Gpt2,
        train_fraction: TRAIN_FRACTION,
    }
}

/// Python PEP corpus, derived character encoding.
///
/// The denylist drops the governance PEPs whose formatting breaks the
/// character-level corpus.
pub fn python_peps_char() -> CorpusPreset {
    CorpusPreset {
        name: "python-peps-char",
        source: SourceConfig::Listing(pep_listing_source(&[
            "pep-8001.rst",
            "pep-8103.rst",
            "pep-8104.rst",
        ])),
        cleaning: CleaningProfile::RstDocument,
        vocab: VocabStrategy::CharDerived,
        train_fraction: TRAIN_FRACTION,
    }
}

/// Complete works of Jane Austen (Project Gutenberg #31100), derived
/// character encoding.
pub fn austen_char() -> CorpusPreset {
    CorpusPreset {
        name: "austen-char",
        source: SourceConfig::Archive(ArchiveSource {
            archive_url: "https://codeload.github.com/GITenberg/The-Complete-Project-Gutenberg-Works-of-Jane-Austen_31100/tar.gz/refs/heads/master"
                .to_string(),
            archive_name: "austen-31100.tar.gz".to_string(),
            member_prefix: "31100".to_string(),
            extensions: vec![".txt".to_string()],
            // Skip the duplicate 8-bit (Latin-1) edition of the ebook.
            deny_substring: Some("-8".to_string()),
        }),
        cleaning: CleaningProfile::GutenbergEbook,
        vocab: VocabStrategy::CharDerived,
        train_fraction: TRAIN_FRACTION,
    }
}

/// All built-in presets.
pub fn all_presets() -> Vec<CorpusPreset> {
    vec![python_peps(), python_peps_char(), austen_char()]
}

/// Look up a preset by name.
pub fn find_preset(name: &str) -> Option<CorpusPreset> {
    all_presets().into_iter().find(|preset| preset.name == name)
}
