//! # Persisted Dataset Artifacts
//!
//! On-disk layout consumed by the training loop:
//!
//! * [`TRAIN_BIN`] / [`VAL_BIN`] — contiguous arrays of little-endian u16
//!   token ids, no header.
//! * [`META_JSON`] — [`VocabMetadata`] symbol tables, written only for
//!   derived vocabularies.
//!
//! Unlike the raw-corpus fetch, serialization is not cached: every run
//! overwrites the artifact files.

use std::{
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use crate::{
    errors::{CMResult, CorpusmillError},
    vocab::{TokenId, VocabMetadata},
};

/// File name of the train split.
pub static TRAIN_BIN: &str = "train.bin";

/// File name of the validation split.
pub static VAL_BIN: &str = "val.bin";

/// File name of the vocabulary metadata.
pub static META_JSON: &str = "meta.json";

/// Artifact file paths for one dataset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Path of the train split.
    pub train: PathBuf,

    /// Path of the validation split.
    pub val: PathBuf,

    /// Path of the vocabulary metadata.
    pub meta: PathBuf,
}

impl ArtifactPaths {
    /// Artifact paths under `dataset_dir`.
    pub fn new(dataset_dir: &Path) -> Self {
        Self {
            train: dataset_dir.join(TRAIN_BIN),
            val: dataset_dir.join(VAL_BIN),
            meta: dataset_dir.join(META_JSON),
        }
    }
}

/// Write a token stream as a contiguous little-endian u16 array.
///
/// Overwrites any existing file.
pub fn write_token_file(
    path: &Path,
    ids: &[TokenId],
) -> CMResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for &id in ids {
        writer.write_all(&id.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a token stream written by [`write_token_file`].
pub fn read_token_file(path: &Path) -> CMResult<Vec<TokenId>> {
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;

    if bytes.len() % 2 != 0 {
        return Err(CorpusmillError::External(format!(
            "token file {} has odd length {}",
            path.display(),
            bytes.len(),
        )));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| TokenId::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Write the artifact files for one prepared dataset.
///
/// Writes `meta.json` only when `meta` is present (derived vocabularies).
pub fn write_dataset(
    dataset_dir: &Path,
    train: &[TokenId],
    val: &[TokenId],
    meta: Option<&VocabMetadata>,
) -> CMResult<ArtifactPaths> {
    fs::create_dir_all(dataset_dir)?;
    let paths = ArtifactPaths::new(dataset_dir);

    write_token_file(&paths.train, train)?;
    write_token_file(&paths.val, val)?;

    if let Some(meta) = meta {
        let mut writer = BufWriter::new(File::create(&paths.meta)?);
        serde_json::to_writer_pretty(&mut writer, meta)?;
        writer.flush()?;
    }

    Ok(paths)
}

/// Read `meta.json` back into [`VocabMetadata`].
pub fn read_metadata(path: &Path) -> CMResult<VocabMetadata> {
    let body = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;
    use crate::vocab::{CharVocab, CorpusVocab};

    #[test]
    fn test_token_file_round_trip() -> CMResult<()> {
        let tmpdir = TempDir::new("corpusmill-test")?;
        let path = tmpdir.path().join(TRAIN_BIN);

        let ids = vec![0u16, 1, 258, 65535];
        write_token_file(&path, &ids)?;
        assert_eq!(read_token_file(&path)?, ids);

        Ok(())
    }

    #[test]
    fn test_token_file_is_little_endian_u16() -> CMResult<()> {
        let tmpdir = TempDir::new("corpusmill-test")?;
        let path = tmpdir.path().join(TRAIN_BIN);

        write_token_file(&path, &[0x0102, 0x0304])?;
        assert_eq!(fs::read(&path)?, vec![0x02, 0x01, 0x04, 0x03]);

        Ok(())
    }

    #[test]
    fn test_odd_length_token_file_is_an_error() -> CMResult<()> {
        let tmpdir = TempDir::new("corpusmill-test")?;
        let path = tmpdir.path().join(TRAIN_BIN);
        fs::write(&path, [0u8, 1, 2])?;

        assert!(read_token_file(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_write_dataset_with_metadata() -> CMResult<()> {
        let tmpdir = TempDir::new("corpusmill-test")?;
        let dataset_dir = tmpdir.path().join("aab-char");

        let vocab = CharVocab::scan("aab")?;
        let meta = vocab.metadata();
        let paths = write_dataset(&dataset_dir, &[0, 0], &[1], meta.as_ref())?;

        assert_eq!(read_token_file(&paths.train)?, vec![0, 0]);
        assert_eq!(read_token_file(&paths.val)?, vec![1]);
        assert_eq!(read_metadata(&paths.meta)?, meta.unwrap());

        Ok(())
    }

    #[test]
    fn test_write_dataset_without_metadata() -> CMResult<()> {
        let tmpdir = TempDir::new("corpusmill-test")?;
        let dataset_dir = tmpdir.path().join("fixed");

        let paths = write_dataset(&dataset_dir, &[5, 6], &[7], None)?;
        assert!(paths.train.exists());
        assert!(paths.val.exists());
        assert!(!paths.meta.exists());

        Ok(())
    }

    #[test]
    fn test_write_dataset_overwrites() -> CMResult<()> {
        let tmpdir = TempDir::new("corpusmill-test")?;
        let dataset_dir = tmpdir.path().to_path_buf();

        write_dataset(&dataset_dir, &[1, 2, 3], &[4], None)?;
        let paths = write_dataset(&dataset_dir, &[9], &[8], None)?;

        assert_eq!(read_token_file(&paths.train)?, vec![9]);
        assert_eq!(read_token_file(&paths.val)?, vec![8]);

        Ok(())
    }

    #[test]
    fn test_metadata_json_field_names() -> CMResult<()> {
        // The consumer contract names these fields; they must not drift.
        let tmpdir = TempDir::new("corpusmill-test")?;
        let dataset_dir = tmpdir.path().to_path_buf();

        let vocab = CharVocab::scan("ba")?;
        let paths = write_dataset(&dataset_dir, &[0], &[1], vocab.metadata().as_ref())?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&paths.meta)?)?;
        assert_eq!(value["vocab_size"], 2);
        assert_eq!(value["itos"]["0"], "a");
        assert_eq!(value["stoi"]["b"], 1);

        Ok(())
    }
}
