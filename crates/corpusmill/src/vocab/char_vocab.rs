//! # Derived Character Vocabulary

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{CMResult, CorpusmillError},
    vocab::{CorpusVocab, TokenId},
};

/// Persisted symbol tables for a derived vocabulary.
///
/// Serialized as `meta.json`; the field names are part of the artifact
/// contract with the training-loop consumer and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabMetadata {
    /// The number of distinct token ids.
    pub vocab_size: usize,

    /// Token id to symbol.
    pub itos: BTreeMap<TokenId, char>,

    /// Symbol to token id.
    pub stoi: BTreeMap<char, TokenId>,
}

/// Character-level vocabulary derived by scanning a corpus.
///
/// Symbols are the distinct characters of the corpus, sorted by codepoint;
/// ids are dense positions in that order. Derivation involves no randomness:
/// the same corpus always yields the same tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharVocab {
    /// Table mapping id (position) to symbol.
    itos: Vec<char>,

    /// Map from symbol to id.
    stoi: BTreeMap<char, TokenId>,
}

impl CharVocab {
    /// Derive a vocabulary from corpus text.
    ///
    /// ## Errors
    /// [`CorpusmillError::VocabSizeOverflow`] if the corpus holds more
    /// distinct characters than the u16 id space.
    pub fn scan(text: &str) -> CMResult<Self> {
        let symbols: BTreeSet<char> = text.chars().collect();
        if symbols.len() > usize::from(TokenId::MAX) + 1 {
            return Err(CorpusmillError::VocabSizeOverflow {
                size: symbols.len(),
            });
        }

        let itos: Vec<char> = symbols.into_iter().collect();
        log::debug!("scanned {} distinct symbols", itos.len());

        let stoi: BTreeMap<char, TokenId> = itos
            .iter()
            .enumerate()
            .map(|(id, &symbol)| (symbol, id as TokenId))
            .collect();

        Ok(Self { itos, stoi })
    }

    /// Look up the id for a symbol.
    pub fn token_for(
        &self,
        symbol: char,
    ) -> Option<TokenId> {
        self.stoi.get(&symbol).copied()
    }

    /// Look up the symbol for an id.
    pub fn symbol_for(
        &self,
        id: TokenId,
    ) -> Option<char> {
        self.itos.get(usize::from(id)).copied()
    }
}

impl CorpusVocab for CharVocab {
    fn vocab_size(&self) -> usize {
        self.itos.len()
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> CMResult<Vec<TokenId>> {
        text.chars()
            .map(|symbol| {
                self.token_for(symbol)
                    .ok_or(CorpusmillError::UnknownSymbol { symbol })
            })
            .collect()
    }

    fn try_decode(
        &self,
        ids: &[TokenId],
    ) -> CMResult<String> {
        ids.iter()
            .map(|&id| {
                self.symbol_for(id).ok_or(CorpusmillError::UnknownToken {
                    id,
                    size: self.vocab_size(),
                })
            })
            .collect()
    }

    fn metadata(&self) -> Option<VocabMetadata> {
        Some(VocabMetadata {
            vocab_size: self.vocab_size(),
            itos: self
                .itos
                .iter()
                .enumerate()
                .map(|(id, &symbol)| (id as TokenId, symbol))
                .collect(),
            stoi: self.stoi.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_assigns_sorted_dense_ids() {
        let vocab = CharVocab::scan("aab").unwrap();
        assert_eq!(vocab.vocab_size(), 2);
        assert_eq!(vocab.token_for('a'), Some(0));
        assert_eq!(vocab.token_for('b'), Some(1));
        assert_eq!(vocab.symbol_for(0), Some('a'));
        assert_eq!(vocab.symbol_for(1), Some('b'));
    }

    #[test]
    fn test_encode_matches_scan_order() {
        let vocab = CharVocab::scan("aab").unwrap();
        assert_eq!(vocab.try_encode("aab").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        // Scan order of the source text must not affect id assignment.
        let a = CharVocab::scan("the quick brown fox").unwrap();
        let b = CharVocab::scan("quick the fox brown").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_trip() {
        let text = "hello, corpus \u{1F980} text";
        let vocab = CharVocab::scan(text).unwrap();
        let ids = vocab.try_encode(text).unwrap();
        assert_eq!(vocab.try_decode(&ids).unwrap(), text);
    }

    #[test]
    fn test_unknown_symbol_is_an_error() {
        let vocab = CharVocab::scan("ab").unwrap();
        assert!(matches!(
            vocab.try_encode("abc"),
            Err(CorpusmillError::UnknownSymbol { symbol: 'c' })
        ));
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let vocab = CharVocab::scan("ab").unwrap();
        assert!(matches!(
            vocab.try_decode(&[0, 7]),
            Err(CorpusmillError::UnknownToken { id: 7, size: 2 })
        ));
    }

    #[test]
    fn test_metadata_tables_are_inverse() {
        let vocab = CharVocab::scan("cab").unwrap();
        let meta = vocab.metadata().unwrap();
        assert_eq!(meta.vocab_size, 3);
        for (&id, &symbol) in &meta.itos {
            assert_eq!(meta.stoi[&symbol], id);
        }
    }
}
