//! # Archive Corpus Fetcher
//!
//! Fetches a document tree packed as a single gzip tarball: the archive is
//! streamed to disk, extracted into a scratch directory, and the matching
//! members are cleaned and appended to the raw corpus file in sorted order.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use corpusmill::Cleaner;
use downloader::{Download, Downloader};
use flate2::read::GzDecoder;
use tar::Archive;

use crate::listing::{DOCUMENT_SEPARATOR, verify_downloads};

/// A remote document tree packed as a gzip tarball.
#[derive(Debug, Clone)]
pub struct ArchiveSource {
    /// Archive URL.
    pub archive_url: String,

    /// File name the archive lands under in the scratch directory.
    pub archive_name: String,

    /// Member file-name prefix filter (empty accepts every name).
    pub member_prefix: String,

    /// Accepted member file-name suffixes.
    pub extensions: Vec<String>,

    /// Members whose file name contains this substring are skipped.
    pub deny_substring: Option<String>,
}

impl ArchiveSource {
    /// Whether an extracted file belongs to the corpus.
    pub fn matches(
        &self,
        file_name: &str,
    ) -> bool {
        file_name.starts_with(&self.member_prefix)
            && self
                .extensions
                .iter()
                .any(|ext| file_name.ends_with(ext.as_str()))
            && !self
                .deny_substring
                .as_ref()
                .is_some_and(|deny| file_name.contains(deny.as_str()))
    }
}

/// Recursively collect extracted files matching the source filter.
fn collect_members(
    dir: &Path,
    source: &ArchiveSource,
    members: &mut Vec<PathBuf>,
) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_members(&path, source, members)?;
        } else if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            if source.matches(name) {
                members.push(path);
            }
        }
    }
    Ok(())
}

/// Sort members by file name, breaking basename ties by full path.
///
/// `read_dir` traversal order is filesystem-dependent, so basename ties must
/// be broken on a stable key or concatenation order varies across hosts.
fn sort_members(members: &mut [PathBuf]) {
    members.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
}

/// Download and extract the archive, returning matching member paths sorted
/// by file name (ties broken by full path).
pub fn fetch_members(
    source: &ArchiveSource,
    scratch_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(scratch_dir)?;

    let tarball = scratch_dir.join(&source.archive_name);
    if tarball.exists() {
        fs::remove_file(&tarball)?;
    }

    log::info!("downloading archive {}...", source.archive_url);
    let mut downloader = Downloader::builder().build()?;
    let download = Download::new(&source.archive_url).file_name(&tarball);
    verify_downloads(downloader.download(&[download])?)?;

    let extract_dir = scratch_dir.join("extracted");
    if extract_dir.exists() {
        fs::remove_dir_all(&extract_dir)?;
    }
    fs::create_dir_all(&extract_dir)?;

    let tar_gz = File::open(&tarball)
        .with_context(|| format!("failed to open archive at {}", tarball.display()))?;
    Archive::new(GzDecoder::new(BufReader::new(tar_gz)))
        .unpack(&extract_dir)
        .with_context(|| format!("failed to extract {}", source.archive_url))?;

    let mut members = Vec::new();
    collect_members(&extract_dir, source, &mut members)?;
    sort_members(&mut members);

    if members.is_empty() {
        anyhow::bail!(
            "archive {} contained no matching documents",
            source.archive_url,
        );
    }

    Ok(members)
}

/// Append cleaned member texts, in sorted order, to the raw corpus file.
///
/// Archive members may predate UTF-8 (Gutenberg ships Latin-1 editions), so
/// decoding is lossy rather than fatal.
pub fn concatenate_members(
    members: &[PathBuf],
    cleaner: &Cleaner,
    raw_path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = raw_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(raw_path)?);
    for (idx, path) in members.iter().enumerate() {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read archive member {}", path.display()))?;
        let cleaned = cleaner.clean(&String::from_utf8_lossy(&bytes));

        if idx > 0 {
            writer.write_all(DOCUMENT_SEPARATOR.as_bytes())?;
        }
        writer.write_all(cleaned.as_bytes())?;
    }
    writer.flush()?;

    Ok(())
}

/// Materialize the raw corpus from an archive source.
///
/// Unlike the listing fetcher, cleaning happens per document here, before
/// concatenation; the cleaning rules are anchored to line boundaries, so the
/// two orderings agree.
pub fn fetch_raw_corpus(
    source: &ArchiveSource,
    cleaner: &Cleaner,
    raw_path: &Path,
    scratch_dir: &Path,
) -> anyhow::Result<()> {
    let members = fetch_members(source, scratch_dir)?;
    log::info!("extracted {} matching documents", members.len());
    concatenate_members(&members, cleaner, raw_path)?;
    Ok(())
}
