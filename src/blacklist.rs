//! Common password list
//!
//! Loading and querying the denylist of common passwords. The list is an
//! immutable value handed to the evaluator; the built-in default is created
//! once per process.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Environment variable pointing at a replacement list file.
pub const COMMON_PASSWORDS_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";

/// Built-in list, matched case-insensitively.
pub const DEFAULT_COMMON_PASSWORDS: [&str; 20] = [
    "password",
    "123456",
    "123456789",
    "guest",
    "qwerty",
    "admin",
    "user",
    "administrator",
    "12345",
    "12345678",
    "test",
    "1234",
    "root",
    "love",
    "111111",
    "secret",
    "iloveyou",
    "football",
    "soccer",
    "welcome",
];

static DEFAULT_LIST: LazyLock<CommonPasswords> =
    LazyLock::new(|| CommonPasswords::new(DEFAULT_COMMON_PASSWORDS));

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Immutable set of lowercase common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// Builds a list from arbitrary entries. Entries are trimmed and
    /// lowercased; blank ones are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Shared built-in list.
    pub fn builtin() -> &'static CommonPasswords {
        &DEFAULT_LIST
    }

    /// Loads a list from a file, one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: Empty file {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        let list = Self::new(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    /// Uses the file named by `PWD_COMMON_PASSWORDS_PATH` when set,
    /// otherwise the built-in list.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match std::env::var_os(COMMON_PASSWORDS_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::builtin().clone()),
        }
    }

    /// Case-insensitive exact match.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_builtin_list() {
        let list = CommonPasswords::builtin();
        assert_eq!(list.len(), 20);
        assert!(list.contains("password"));
        assert!(list.contains("PassWord"));
        assert!(list.contains("111111"));
        assert!(!list.contains("baseball"));
        assert!(!list.contains("password1"));
        assert!(!list.contains(" password"));
    }

    #[test]
    fn test_new_normalizes_entries() {
        let list = CommonPasswords::new(["  Hunter2 ", "", "HUNTER2", "   "]);
        assert_eq!(list.len(), 1);
        assert!(list.contains("hunter2"));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = CommonPasswords::from_path("/nonexistent/path/common.txt");
        match result {
            Err(BlacklistError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/common.txt"));
            }
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "   ").expect("Failed to write");

        let result = CommonPasswords::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Password123").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");

        let list = CommonPasswords::from_path(temp_file.path()).expect("list should load");
        assert_eq!(list.len(), 2);
        assert!(list.contains("PASSWORD123"));
        assert!(!list.contains("password"));
    }

    #[test]
    #[serial]
    fn test_from_env_unset_uses_builtin() {
        remove_env(COMMON_PASSWORDS_ENV);

        let list = CommonPasswords::from_env().expect("builtin list");
        assert_eq!(&list, CommonPasswords::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "letmein").expect("Failed to write");
        set_env(COMMON_PASSWORDS_ENV, temp_file.path().to_str().unwrap());

        let list = CommonPasswords::from_env().expect("list from env");
        assert!(list.contains("LetMeIn"));
        assert!(!list.contains("password"));

        remove_env(COMMON_PASSWORDS_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_file() {
        set_env(COMMON_PASSWORDS_ENV, "/nonexistent/path/common.txt");

        let result = CommonPasswords::from_env();
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));

        remove_env(COMMON_PASSWORDS_ENV);
    }
}
