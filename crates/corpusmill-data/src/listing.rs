//! # Listing-API Corpus Fetcher
//!
//! Fetches a document collection one file at a time: a listing endpoint
//! names the documents, a bounded download pool fetches them into scratch
//! files, and the results are concatenated in listing order. Any failed
//! fetch is fatal for the run; rerunning from scratch is the recovery path.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, DownloadSummary, Downloader, Error as DownloadError};
use serde::Deserialize;

use crate::progress::BatchProgress;

/// Worker pool size for per-document fetches.
pub const FETCH_WORKERS: u16 = 16;

/// Delimiter between concatenated documents.
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

/// One entry of the remote listing response.
///
/// The listing endpoint returns a JSON array of objects; only the `name`
/// field is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    /// Document file name.
    pub name: String,
}

/// A remote document collection reachable through a listing API.
#[derive(Debug, Clone)]
pub struct ListingSource {
    /// Listing endpoint returning a JSON array of `{ "name": ... }` objects.
    pub listing_url: String,

    /// Base URL each document name is appended to.
    pub raw_base_url: String,

    /// Document name prefix filter.
    pub name_prefix: String,

    /// Accepted document name suffixes.
    pub extensions: Vec<String>,

    /// Known-bad document names to skip.
    pub denylist: Vec<String>,
}

impl ListingSource {
    /// Whether a listed name belongs to the fetch set.
    pub fn matches(
        &self,
        name: &str,
    ) -> bool {
        name.starts_with(&self.name_prefix)
            && self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
            && !self.denylist.iter().any(|deny| deny == name)
    }

    /// Filter a listing down to the documents to fetch, in listing order.
    pub fn select_documents(
        &self,
        listing: &[ListingEntry],
    ) -> Vec<String> {
        listing
            .iter()
            .filter(|entry| self.matches(&entry.name))
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Construct the raw-document URL for a listed name.
    pub fn document_url(
        &self,
        name: &str,
    ) -> String {
        format!("{}{}", self.raw_base_url, name)
    }
}

/// Check a batch of download results, failing on any error or non-2xx status.
pub(crate) fn verify_downloads(
    results: Vec<Result<DownloadSummary, DownloadError>>
) -> anyhow::Result<()> {
    for result in results {
        let summary = result.map_err(|e| anyhow::anyhow!("download failed: {e}"))?;
        if let Some((url, status)) = summary.status.last() {
            if *status < 200 || *status >= 300 {
                anyhow::bail!("fetch of {url} failed with status {status}");
            }
        }
    }
    Ok(())
}

/// Fetch and parse the remote listing.
pub fn fetch_listing(
    source: &ListingSource,
    scratch_dir: &Path,
) -> anyhow::Result<Vec<ListingEntry>> {
    fs::create_dir_all(scratch_dir)?;
    let listing_path = scratch_dir.join("listing.json");
    if listing_path.exists() {
        fs::remove_file(&listing_path)?;
    }

    let mut downloader = Downloader::builder().build()?;
    let download = Download::new(&source.listing_url).file_name(&listing_path);
    verify_downloads(downloader.download(&[download])?)?;

    let body = fs::read_to_string(&listing_path)
        .with_context(|| format!("failed to read listing at {}", listing_path.display()))?;
    let listing: Vec<ListingEntry> = serde_json::from_str(&body)
        .with_context(|| format!("failed to parse listing from {}", source.listing_url))?;

    Ok(listing)
}

/// Download the named documents into `scratch_dir` with a bounded pool.
///
/// All documents go through one [`FETCH_WORKERS`]-wide download batch; each
/// lands in a distinct scratch file keyed by its name, so completion order
/// cannot affect the corpus. Returns the scratch paths in listing order.
pub fn fetch_documents(
    source: &ListingSource,
    names: &[String],
    scratch_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(scratch_dir)?;

    let progress = BatchProgress::new(names.len() as u64);

    let mut paths = Vec::with_capacity(names.len());
    let mut downloads = Vec::with_capacity(names.len());
    for name in names {
        let path = scratch_dir.join(name);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        downloads.push(
            Download::new(&source.document_url(name))
                .file_name(&path)
                .progress(progress.clone()),
        );
        paths.push(path);
    }

    let mut downloader = Downloader::builder()
        .parallel_requests(FETCH_WORKERS)
        .build()?;

    let results = downloader.download(&downloads)?;
    progress.finish();
    verify_downloads(results)?;

    Ok(paths)
}

/// Concatenate fetched documents, in listing order, into the raw corpus file.
pub fn concatenate_documents(
    paths: &[PathBuf],
    raw_path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = raw_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(raw_path)?);
    for (idx, path) in paths.iter().enumerate() {
        if idx > 0 {
            writer.write_all(DOCUMENT_SEPARATOR.as_bytes())?;
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read fetched document {}", path.display()))?;
        writer.write_all(text.as_bytes())?;
    }
    writer.flush()?;

    Ok(())
}

/// Materialize the raw corpus for a listing source.
pub fn fetch_raw_corpus(
    source: &ListingSource,
    raw_path: &Path,
    scratch_dir: &Path,
) -> anyhow::Result<()> {
    let listing = fetch_listing(source, scratch_dir)?;
    let names = source.select_documents(&listing);

    log::info!("downloading {} documents...", names.len());
    let paths = fetch_documents(source, &names, scratch_dir)?;

    concatenate_documents(&paths, raw_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    fn test_source(denylist: &[&str]) -> ListingSource {
        ListingSource {
            listing_url: "https://example.test/contents".to_string(),
            raw_base_url: "https://example.test/raw/".to_string(),
            name_prefix: "pep-".to_string(),
            extensions: vec![".txt".to_string(), ".rst".to_string()],
            denylist: denylist.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn listing_of(names: &[&str]) -> Vec<ListingEntry> {
        names
            .iter()
            .map(|name| ListingEntry {
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_select_documents_filters_by_name() {
        let source = test_source(&[]);
        let listing = listing_of(&["pep-0001.txt", "pep-0008.rst", "README.md", "pep-0012.pdf"]);

        assert_eq!(
            source.select_documents(&listing),
            vec!["pep-0001.txt", "pep-0008.rst"],
        );
    }

    #[test]
    fn test_denylisted_names_are_omitted() {
        let source = test_source(&["pep-8103.rst"]);
        let listing = listing_of(&["pep-0001.txt", "pep-8103.rst", "pep-8102.rst"]);

        let names = source.select_documents(&listing);
        assert_eq!(names, vec!["pep-0001.txt", "pep-8102.rst"]);
    }

    #[test]
    fn test_select_documents_preserves_listing_order() {
        let source = test_source(&[]);
        let listing = listing_of(&["pep-0100.txt", "pep-0001.txt", "pep-0050.rst"]);

        assert_eq!(
            source.select_documents(&listing),
            vec!["pep-0100.txt", "pep-0001.txt", "pep-0050.rst"],
        );
    }

    #[test]
    fn test_document_url() {
        let source = test_source(&[]);
        assert_eq!(
            source.document_url("pep-0001.txt"),
            "https://example.test/raw/pep-0001.txt",
        );
    }

    #[test]
    fn test_listing_entry_parse() {
        let listing: Vec<ListingEntry> =
            serde_json::from_str(r#"[{"name": "pep-0001.txt", "size": 12}]"#).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "pep-0001.txt");
    }

    #[test]
    fn test_concatenate_documents_in_given_order() -> anyhow::Result<()> {
        let tmpdir = TempDir::new("corpusmill-data-test")?;
        let scratch = tmpdir.path();

        let a = scratch.join("pep-0002.txt");
        let b = scratch.join("pep-0001.txt");
        fs::write(&a, "second doc")?;
        fs::write(&b, "first doc")?;

        let raw_path = scratch.join("input.txt");
        concatenate_documents(&[b, a], &raw_path)?;

        assert_eq!(fs::read_to_string(&raw_path)?, "first doc\n\nsecond doc");
        Ok(())
    }
}
