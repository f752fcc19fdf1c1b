//! # Corpus Vocabularies
//!
//! A vocabulary is a bijection between text symbols and dense integer ids.
//! Two strategies are supported, selected once per corpus preset:
//!
//! * [`CharVocab`] — derived by scanning the cleaned corpus for its distinct
//!   characters; must be built before encoding.
//! * [`Gpt2Vocab`] — a fixed, externally defined subword vocabulary, used as
//!   an opaque capability.

pub mod char_vocab;
pub mod gpt2_vocab;

pub use char_vocab::{CharVocab, VocabMetadata};
pub use gpt2_vocab::Gpt2Vocab;

use crate::errors::CMResult;

/// Token id type used by the persisted artifacts.
///
/// `train.bin` / `val.bin` are contiguous little-endian arrays of this type,
/// so every supported vocabulary must fit its ids in a u16.
pub type TokenId = u16;

/// Common capability set shared by the vocabulary strategies.
pub trait CorpusVocab {
    /// The number of distinct token ids.
    fn vocab_size(&self) -> usize;

    /// Encode text into an ordered sequence of token ids.
    fn try_encode(
        &self,
        text: &str,
    ) -> CMResult<Vec<TokenId>>;

    /// Decode token ids back into text.
    fn try_decode(
        &self,
        ids: &[TokenId],
    ) -> CMResult<String>;

    /// Symbol tables to persist alongside the token streams, if any.
    ///
    /// Derived vocabularies return their tables so the consumer can recover
    /// the decode function; fixed vocabularies return `None` because the
    /// consumer already holds the external vocabulary.
    fn metadata(&self) -> Option<VocabMetadata> {
        None
    }
}
