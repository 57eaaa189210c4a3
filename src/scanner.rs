//! Filesystem reconciliation against the catalog.

use std::path::Path;

use chrono::Local;
use walkdir::WalkDir;

use crate::catalog::Store;
use crate::error::Result;
use crate::metadata;

/// File name suffixes eligible for the catalog. Matching is
/// case-sensitive: `photo.JPG` is skipped.
pub const SCAN_SUFFIXES: &[&str] = &[".jpg", ".png"];

fn is_eligible(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| SCAN_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
        .unwrap_or(false)
}

/// Walk `root` and insert every eligible file the catalog has not seen
/// before. Symlinked directories are not followed, so a link cycle under
/// the image root cannot hang the scan.
///
/// Additive only: rows are never updated or removed, and a second run
/// over an unchanged tree inserts nothing. Returns the number of new
/// catalog entries.
pub fn reconcile(root: &Path, store: &Store) -> Result<usize> {
    let known = store.known_paths()?;
    let mut added = 0;

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() || !is_eligible(entry.path()) {
            continue;
        }

        let path = entry.path().to_string_lossy().to_string();
        if known.contains(&path) {
            continue;
        }

        // Occasion date: EXIF capture date, discovery time otherwise.
        let timestamp = match metadata::capture_date(entry.path()) {
            Some(ts) => ts,
            None => {
                tracing::debug!(%path, "no EXIF timestamp, using current time");
                Local::now().naive_local()
            }
        };

        println!("Adding {path}...");
        store.insert_image(&path, Some(timestamp))?;
        added += 1;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"not really image data").unwrap();
    }

    #[test]
    fn test_is_eligible() {
        assert!(is_eligible(Path::new("/pics/a.jpg")));
        assert!(is_eligible(Path::new("/pics/b.png")));
        assert!(!is_eligible(Path::new("/pics/notes.txt")));
        assert!(!is_eligible(Path::new("/pics/clip.webm")));
    }

    #[test]
    fn test_is_eligible_is_case_sensitive() {
        assert!(!is_eligible(Path::new("/pics/photo.JPG")));
        assert!(!is_eligible(Path::new("/pics/photo.Png")));
    }

    #[test]
    fn test_reconcile_catalogs_only_eligible_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));
        touch(&dir.path().join("b.png"));
        touch(&dir.path().join("notes.txt"));

        let store = Store::open_in_memory().unwrap();
        let added = reconcile(dir.path(), &store).unwrap();

        assert_eq!(added, 2);
        let known = store.known_paths().unwrap();
        assert_eq!(known.len(), 2);
        assert!(known.contains(&dir.path().join("a.jpg").to_string_lossy().to_string()));
        assert!(known.contains(&dir.path().join("b.png").to_string_lossy().to_string()));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));
        touch(&dir.path().join("b.png"));

        let store = Store::open_in_memory().unwrap();
        assert_eq!(reconcile(dir.path(), &store).unwrap(), 2);
        assert_eq!(reconcile(dir.path(), &store).unwrap(), 0);
        assert_eq!(reconcile(dir.path(), &store).unwrap(), 0);

        // No duplicate rows for any path.
        assert_eq!(store.image_count().unwrap(), 2);
        assert_eq!(store.known_paths().unwrap().len(), 2);
    }

    #[test]
    fn test_reconcile_only_adds_new_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));

        let store = Store::open_in_memory().unwrap();
        assert_eq!(reconcile(dir.path(), &store).unwrap(), 1);

        touch(&dir.path().join("late.png"));
        assert_eq!(reconcile(dir.path(), &store).unwrap(), 1);
        assert_eq!(store.image_count().unwrap(), 2);
    }

    #[test]
    fn test_reconcile_walks_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("autumn").join("2023");
        fs::create_dir_all(&nested).unwrap();
        touch(&nested.join("leaves.jpg"));

        let store = Store::open_in_memory().unwrap();
        assert_eq!(reconcile(dir.path(), &store).unwrap(), 1);
        assert!(store
            .known_paths()
            .unwrap()
            .contains(&nested.join("leaves.jpg").to_string_lossy().to_string()));
    }

    #[test]
    fn test_reconcile_never_removes_stale_entries() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone.jpg");
        touch(&gone);

        let store = Store::open_in_memory().unwrap();
        reconcile(dir.path(), &store).unwrap();

        fs::remove_file(&gone).unwrap();
        reconcile(dir.path(), &store).unwrap();

        // The deleted file's row persists until cleaned manually.
        assert_eq!(store.image_count().unwrap(), 1);
    }

    #[test]
    fn test_timestamp_falls_back_to_discovery_time() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("plain.jpg"));

        let before = Local::now().naive_local();
        let store = Store::open_in_memory().unwrap();
        reconcile(dir.path(), &store).unwrap();
        let after = Local::now().naive_local();

        let dated = store.dated_images().unwrap();
        assert_eq!(dated.len(), 1);
        assert!(dated[0].1 >= before && dated[0].1 <= after);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        let outside = tempfile::tempdir().unwrap();
        touch(&outside.path().join("linked.jpg"));

        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("real.jpg"));
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        let store = Store::open_in_memory().unwrap();
        assert_eq!(reconcile(dir.path(), &store).unwrap(), 1);
        assert!(store
            .known_paths()
            .unwrap()
            .contains(&dir.path().join("real.jpg").to_string_lossy().to_string()));
    }
}
