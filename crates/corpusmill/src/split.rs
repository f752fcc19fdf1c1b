//! # Train/Validation Splitting

use crate::vocab::TokenId;

/// Train and validation streams cut from one encoded token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitStreams<'a> {
    /// Tokens before the cut point.
    pub train: &'a [TokenId],

    /// Tokens from the cut point onward.
    pub val: &'a [TokenId],
}

/// Cut a token stream at `floor(train_fraction * len)`.
///
/// The split is a direct positional cut, not random sampling; order is
/// preserved so documents keep their local context for sequential training.
///
/// ## Panics
/// If `train_fraction` is not within `0.0..=1.0`.
pub fn split_token_stream(
    ids: &[TokenId],
    train_fraction: f64,
) -> SplitStreams<'_> {
    assert!(
        (0.0..=1.0).contains(&train_fraction),
        "train_fraction {train_fraction} out of range"
    );

    let cut = (train_fraction * ids.len() as f64).floor() as usize;
    let (train, val) = ids.split_at(cut);

    SplitStreams { train, val }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_aab_scenario() {
        // vocab {'a': 0, 'b': 1}, corpus "aab", ratio 0.9.
        let ids = [0, 0, 1];
        let streams = split_token_stream(&ids, 0.9);
        assert_eq!(streams.train, &[0, 0]);
        assert_eq!(streams.val, &[1]);
    }

    #[test]
    fn test_split_is_exhaustive_and_exact() {
        for len in 1..=100usize {
            let ids: Vec<u16> = (0..len as u16).collect();
            let streams = split_token_stream(&ids, 0.9);

            assert_eq!(streams.train.len() + streams.val.len(), len);
            assert_eq!(streams.train.len(), (0.9 * len as f64).floor() as usize);
        }
    }

    #[test]
    fn test_split_empty_stream() {
        let streams = split_token_stream(&[], 0.9);
        assert!(streams.train.is_empty());
        assert!(streams.val.is_empty());
    }

    #[test]
    fn test_split_preserves_order() {
        let ids: Vec<u16> = (0..20).collect();
        let streams = split_token_stream(&ids, 0.5);
        assert_eq!(streams.train, &ids[..10]);
        assert_eq!(streams.val, &ids[10..]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_split_rejects_bad_fraction() {
        split_token_stream(&[0], 1.5);
    }
}
