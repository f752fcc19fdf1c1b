//! # Fixed GPT-2 Subword Vocabulary

use std::sync::Arc;

use tiktoken_rs::CoreBPE;

use crate::{
    errors::{CMResult, CorpusmillError},
    vocab::{CorpusVocab, TokenId},
};

/// Size of the GPT-2 encoding (50,256 BPE tokens plus the end-of-text token).
pub const GPT2_VOCAB_SIZE: usize = 50_257;

/// Fixed subword vocabulary backed by the GPT-2 BPE encoding.
///
/// The vocabulary is an opaque external capability: encoding is ordinary
/// (no special tokens inserted), and symbols outside the learned merges fall
/// back to the BPE's own byte-level handling rather than failing. All GPT-2
/// ids fit the u16 artifact encoding.
#[derive(Clone)]
pub struct Gpt2Vocab {
    inner: Arc<CoreBPE>,
}

impl Gpt2Vocab {
    /// Load the GPT-2 encoding.
    pub fn load() -> CMResult<Self> {
        let bpe = tiktoken_rs::get_bpe_from_tokenizer(tiktoken_rs::tokenizer::Tokenizer::Gpt2)
            .map_err(|e| CorpusmillError::External(format!("failed to load gpt2 encoding: {e}")))?;
        Ok(Self {
            inner: Arc::new(bpe),
        })
    }
}

impl CorpusVocab for Gpt2Vocab {
    fn vocab_size(&self) -> usize {
        GPT2_VOCAB_SIZE
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> CMResult<Vec<TokenId>> {
        self.inner
            .encode_ordinary(text)
            .into_iter()
            .map(|rank| {
                TokenId::try_from(rank).map_err(|_| CorpusmillError::TokenOutOfRange {
                    token: rank as usize,
                })
            })
            .collect()
    }

    fn try_decode(
        &self,
        ids: &[TokenId],
    ) -> CMResult<String> {
        let ranks = ids.iter().map(|&id| u32::from(id)).collect();
        self.inner
            .decode(ranks)
            .map_err(|e| CorpusmillError::External(format!("gpt2 decode failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let vocab = Gpt2Vocab::load().unwrap();
        let text = "The quick brown fox jumps over the lazy dog.";
        let ids = vocab.try_encode(text).unwrap();
        assert!(!ids.is_empty());
        assert!(ids.len() < text.len());
        assert_eq!(vocab.try_decode(&ids).unwrap(), text);
    }

    #[test]
    fn test_encoding_is_ordinary() {
        // Special-token text must pass through as plain text, not as a
        // single special id.
        let vocab = Gpt2Vocab::load().unwrap();
        let ids = vocab.try_encode("<|endoftext|>").unwrap();
        assert!(ids.len() > 1);
    }

    #[test]
    fn test_vocab_size() {
        let vocab = Gpt2Vocab::load().unwrap();
        assert_eq!(vocab.vocab_size(), 50_257);
    }

    #[test]
    fn test_no_metadata_for_fixed_vocab() {
        let vocab = Gpt2Vocab::load().unwrap();
        assert!(vocab.metadata().is_none());
    }
}
