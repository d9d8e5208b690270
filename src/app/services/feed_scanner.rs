//! Discovery of outage feed files for batch processing
//!
//! Walks a directory tree and collects the feed files beneath it, sorted for
//! a deterministic processing order.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::Result;
use crate::constants::FEED_FILE_EXTENSION;

/// Discover feed XML files beneath a directory
pub fn discover_feed_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut feed_files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(FEED_FILE_EXTENSION)
        {
            feed_files.push(path.to_path_buf());
        }
    }

    feed_files.sort();

    debug!(
        "Discovered {} feed files in {}",
        feed_files.len(),
        dir.display()
    );

    Ok(feed_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory_yields_no_files() {
        let temp_dir = TempDir::new().unwrap();
        let files = discover_feed_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discovers_nested_xml_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("archive");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(temp_dir.path().join("b.xml"), "<outages/>").unwrap();
        std::fs::write(nested.join("a.xml"), "<outages/>").unwrap();

        let files = discover_feed_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("archive/a.xml"));
        assert!(files[1].ends_with("b.xml"));
    }

    #[test]
    fn test_ignores_non_feed_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("feed.xml"), "<outages/>").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "not a feed").unwrap();

        let files = discover_feed_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("feed.xml"));
    }
}
