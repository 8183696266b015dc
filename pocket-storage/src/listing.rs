//! Directory listing filtered by extension
//!
//! Used by the ROM browser: list every `*.nes` (or similar) file in a
//! directory, sorted the way a user expects regardless of case.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use pocket_hal::Filesystem;

use crate::error::StorageError;

/// Upper bound on the number of names returned by [`list_files`]
pub const MAX_FILES: usize = 1024;

/// Compare two names ignoring ASCII case
///
/// A name that is a prefix of the other sorts first.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Check if `name` ends with `extension`, ignoring ASCII case
pub fn has_extension(name: &str, extension: &str) -> bool {
    let name = name.as_bytes();
    let extension = extension.as_bytes();
    name.len() >= extension.len()
        && name[name.len() - extension.len()..].eq_ignore_ascii_case(extension)
}

fn accepts(name: &str, extension: &str) -> bool {
    !name.starts_with('.') && has_extension(name, extension)
}

/// List the files in `path` whose name ends with `extension`
///
/// Hidden entries (leading `.`) are skipped. Matching is case-insensitive,
/// at most [`MAX_FILES`] names are collected in directory order, then the
/// result is sorted case-insensitively.
pub fn list_files<F>(fs: &mut F, path: &str, extension: &str) -> Result<Vec<String>, StorageError>
where
    F: Filesystem + ?Sized,
{
    if extension.is_empty() {
        error!("empty extension filter");
        return Err(StorageError::InvalidExtension);
    }

    let mut files: Vec<String> = Vec::new();
    let mut failure = None;

    let walk = fs.read_dir(path, &mut |name: &str| {
        if !accepts(name, extension) {
            return true;
        }
        match copy_name(name) {
            Ok(owned) => {
                if files.try_reserve(1).is_err() {
                    failure = Some(StorageError::Alloc);
                    return false;
                }
                files.push(owned);
                files.len() < MAX_FILES
            }
            Err(e) => {
                failure = Some(e);
                false
            }
        }
    });

    if let Err(e) = walk {
        error!("opendir failed: {}", e);
        return Err(StorageError::OpenDir(e));
    }
    if let Some(e) = failure {
        error!("listing aborted: {}", e);
        return Err(e);
    }

    files.sort_by(|a, b| compare_ignore_case(a, b));
    debug!("{} files matched", files.len());
    Ok(files)
}

fn copy_name(name: &str) -> Result<String, StorageError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(name.len())
        .map_err(|_| StorageError::Alloc)?;
    owned.push_str(name);
    Ok(owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockFilesystem;
    use pocket_hal::CardError;
    use proptest::prelude::*;

    #[test]
    fn test_filters_and_sorts() {
        let mut fs = MockFilesystem::with_dir(
            "/sd/roms/nes",
            &["zelda.nes", "Metroid.NES", ".hidden.nes", "readme.txt", "castlevania.Nes", "nes"],
        );
        let files = list_files(&mut fs, "/sd/roms/nes", ".nes").unwrap();
        assert_eq!(files, vec!["castlevania.Nes", "Metroid.NES", "zelda.nes"]);
    }

    #[test]
    fn test_name_shorter_than_extension_skipped() {
        let mut fs = MockFilesystem::with_dir("/roms", &["gb", "a.gb"]);
        assert_eq!(list_files(&mut fs, "/roms", ".gb").unwrap(), vec!["a.gb"]);
    }

    #[test]
    fn test_name_equal_to_extension_kept() {
        let mut fs = MockFilesystem::with_dir("/roms", &[".gb", "gb"]);
        // ".gb" is hidden, "gb" matches the bare extension
        assert_eq!(list_files(&mut fs, "/roms", "gb").unwrap(), vec!["gb"]);
    }

    #[test]
    fn test_empty_extension_rejected() {
        let mut fs = MockFilesystem::with_dir("/roms", &["a.nes"]);
        assert_eq!(
            list_files(&mut fs, "/roms", ""),
            Err(StorageError::InvalidExtension)
        );
        assert_eq!(fs.opened, 0);
    }

    #[test]
    fn test_missing_directory() {
        let mut fs = MockFilesystem::with_dir("/roms", &[]);
        assert_eq!(
            list_files(&mut fs, "/nope", ".nes"),
            Err(StorageError::OpenDir(CardError::NotFound))
        );
    }

    #[test]
    fn test_empty_directory() {
        let mut fs = MockFilesystem::with_dir("/roms", &[]);
        assert!(list_files(&mut fs, "/roms", ".nes").unwrap().is_empty());
    }

    #[test]
    fn test_capped_at_max_files() {
        let names: Vec<String> = (0..MAX_FILES + 50).map(|i| format!("rom{:04}.nes", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut fs = MockFilesystem::with_dir("/roms", &refs);

        let files = list_files(&mut fs, "/roms", ".nes").unwrap();
        assert_eq!(files.len(), MAX_FILES);
        assert_eq!(fs.visited, MAX_FILES);
        assert_eq!(files.last().map(String::as_str), Some("rom1023.nes"));
    }

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare_ignore_case("abc", "ABC"), Ordering::Equal);
        assert_eq!(compare_ignore_case("ab", "ABC"), Ordering::Less);
        assert_eq!(compare_ignore_case("B", "a"), Ordering::Greater);
        assert_eq!(compare_ignore_case("_", "a"), Ordering::Less);
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("game.GBC", ".gbc"));
        assert!(!has_extension("game.gb", ".gbc"));
        assert!(!has_extension("gbc", ".gbc"));
    }

    proptest! {
        #[test]
        fn test_listing_is_sorted_subset(names in proptest::collection::vec("[a-zA-Z.]{0,6}(\\.nes|\\.NES|\\.txt)?", 0..40)) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut fs = MockFilesystem::with_dir("/d", &refs);
            let files = list_files(&mut fs, "/d", ".nes").unwrap();

            let expected = names
                .iter()
                .filter(|n| !n.starts_with('.') && has_extension(n, ".nes"))
                .count();
            prop_assert_eq!(files.len(), expected);
            for pair in files.windows(2) {
                prop_assert_ne!(compare_ignore_case(&pair[0], &pair[1]), Ordering::Greater);
            }
        }
    }
}
