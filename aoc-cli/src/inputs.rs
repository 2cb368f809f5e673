//! Puzzle inputs stored on disk

use crate::error::InputStoreError;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::fs;

/// Read-only view of an input directory
///
/// Directory structure: `{dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Where the input for a year/day lives
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(year.to_string()).join(format!("day{day:02}.txt"))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputStoreError> {
        let path = self.path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputStoreError::Missing { path },
            _ => InputStoreError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));
        assert_eq!(store.path(2025, 8), PathBuf::from("/inputs/2025/day08.txt"));
        assert_eq!(store.path(2024, 25), PathBuf::from("/inputs/2024/day25.txt"));
    }

    #[test]
    fn test_read_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2025, 11));
        assert!(matches!(
            store.get(2025, 11),
            Err(InputStoreError::Missing { .. })
        ));

        fs::create_dir_all(temp.path().join("2025")).unwrap();
        fs::write(store.path(2025, 11), "you: out\n").unwrap();
        assert!(store.contains(2025, 11));
        assert_eq!(store.get(2025, 11).unwrap(), "you: out\n");
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(store.path(2025, 12)).unwrap();
        assert!(!store.contains(2025, 12));
        assert!(store.get(2025, 12).is_err());
    }
}
