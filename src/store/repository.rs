// Passkeep — Credential Store Repository
//
// Load / lookup / upsert over the JSON data file. Every operation is a full
// read (and, for upsert, a full rewrite); nothing is cached between calls.
// The store never prompts and never retries: every failure goes back to the caller.

use std::path::{Path, PathBuf};

use super::file::DataFile;
use super::models::{CredentialDocument, CredentialRecord};
use super::StoreError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over credential storage operations.
pub trait CredentialStore {
    /// Load the full document.
    /// Fails with `NotFound` if there is no document yet, `CorruptData` if it cannot be parsed.
    fn load_all(&self) -> Result<CredentialDocument, StoreError>;

    /// Insert or fully replace the record for `website`.
    /// A missing document is treated as empty; a corrupt one is an error.
    fn upsert(&self, website: &str, email: &str, password: &str) -> Result<(), StoreError>;

    /// Exact-key lookup. Returns `NotFoundInStore` when the document loads
    /// but has no entry for `website`.
    fn lookup(&self, website: &str) -> Result<CredentialRecord, StoreError> {
        let mut document = self.load_all()?;
        document
            .remove(website)
            .ok_or_else(|| StoreError::NotFoundInStore(website.to_string()))
    }
}

/// Merge a single entry over `document`, replacing any existing record whole.
fn merge_entry(document: &mut CredentialDocument, website: &str, email: &str, password: &str) {
    document.insert(website.to_string(), CredentialRecord::new(email, password));
}

// ─── JSON File Implementation ────────────────────────────────────────────────

pub struct JsonFileStore {
    file: DataFile,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: DataFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self {
            file: DataFile::default(),
        }
    }
}

impl CredentialStore for JsonFileStore {
    fn load_all(&self) -> Result<CredentialDocument, StoreError> {
        self.file.read()
    }

    fn upsert(&self, website: &str, email: &str, password: &str) -> Result<(), StoreError> {
        let mut document = match self.load_all() {
            Ok(document) => document,
            // First run: no file yet.
            Err(StoreError::NotFound(_)) => CredentialDocument::new(),
            Err(e) => return Err(e),
        };

        merge_entry(&mut document, website, email, password);
        self.file.write(&document)
    }
}

// ─── In-Memory Mock for Testing ──────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;

    fn setup_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        (dir, store)
    }

    #[test]
    fn test_load_all_missing_file_is_not_found() {
        let (_dir, store) = setup_store();
        assert!(matches!(store.load_all(), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_load_all_corrupt_file_is_corrupt_data() {
        let (_dir, store) = setup_store();
        fs::write(store.path(), "not json at all").unwrap();

        let err = store.load_all().unwrap_err();
        assert!(
            matches!(err, StoreError::CorruptData { .. }),
            "Corrupt file must be distinguishable from a missing file, got {:?}",
            err
        );
    }

    #[test]
    fn test_first_upsert_creates_single_entry_document() {
        let (_dir, store) = setup_store();
        assert!(!store.path().exists());

        store.upsert("github.com", "me@example.com", "s3cret!").unwrap();

        let doc = store.load_all().unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.get("github.com"),
            Some(&CredentialRecord::new("me@example.com", "s3cret!"))
        );
    }

    #[test]
    fn test_upsert_replaces_whole_record() {
        let (_dir, store) = setup_store();

        store.upsert("w.com", "e1@w.com", "p1").unwrap();
        store.upsert("w.com", "e2@w.com", "p2").unwrap();

        let record = store.lookup("w.com").unwrap();
        assert_eq!(record, CredentialRecord::new("e2@w.com", "p2"));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_upsert_with_empty_email_replaces_old_email() {
        let (_dir, store) = setup_store();

        store.upsert("w.com", "old@w.com", "p1").unwrap();
        store.upsert("w.com", "", "p2").unwrap();

        assert_eq!(store.lookup("w.com").unwrap(), CredentialRecord::new("", "p2"));
    }

    #[test]
    fn test_lookup_missing_key_is_not_found_in_store() {
        let (_dir, store) = setup_store();
        store.upsert("a.com", "x@x.com", "p1").unwrap();

        match store.lookup("ghost.com") {
            Err(StoreError::NotFoundInStore(website)) => assert_eq!(website, "ghost.com"),
            other => panic!("Expected NotFoundInStore, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let (_dir, store) = setup_store();
        store.upsert("Example.com", "x@x.com", "p1").unwrap();

        assert!(matches!(
            store.lookup("example.com"),
            Err(StoreError::NotFoundInStore(_))
        ));
        assert!(matches!(
            store.lookup(" Example.com "),
            Err(StoreError::NotFoundInStore(_))
        ));
        assert!(store.lookup("Example.com").is_ok());
    }

    #[test]
    fn test_lookup_propagates_missing_and_corrupt_file() {
        let (_dir, store) = setup_store();
        assert!(matches!(store.lookup("a.com"), Err(StoreError::NotFound(_))));

        fs::write(store.path(), "{").unwrap();
        assert!(matches!(
            store.lookup("a.com"),
            Err(StoreError::CorruptData { .. })
        ));
    }

    #[test]
    fn test_upsert_over_corrupt_file_fails_and_leaves_file_untouched() {
        let (_dir, store) = setup_store();
        fs::write(store.path(), "{ broken").unwrap();

        let err = store.upsert("a.com", "x@x.com", "p1").unwrap_err();
        assert!(matches!(err, StoreError::CorruptData { .. }));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ broken");
    }

    #[test]
    fn test_directory_path_is_io_error_not_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Io(_)), "got {:?}", err);

        let err = store.upsert("a.com", "x@x.com", "p1").unwrap_err();
        assert!(
            matches!(err, StoreError::Io(_)),
            "An unreadable path must not be treated as a first run, got {:?}",
            err
        );
        assert!(store.path().is_dir());
    }

    #[test]
    fn test_upsert_under_regular_file_parent_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "plain file").unwrap();
        let store = JsonFileStore::new(blocker.join("data.json"));

        let err = store.upsert("a.com", "x@x.com", "p1").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)), "got {:?}", err);
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "plain file");
    }

    #[test]
    fn test_hand_written_file_then_upsert_scenario() {
        let (_dir, store) = setup_store();
        fs::write(
            store.path(),
            r#"{"a.com": {"email": "x@x.com", "password": "p1"}}"#,
        )
        .unwrap();

        let record = store.lookup("a.com").unwrap();
        assert_eq!(record.email, "x@x.com");
        assert_eq!(record.password, "p1");

        store.upsert("a.com", "y@y.com", "p2").unwrap();

        let expected: CredentialDocument = [(
            "a.com".to_string(),
            CredentialRecord::new("y@y.com", "p2"),
        )]
        .into_iter()
        .collect();
        assert_eq!(store.load_all().unwrap(), expected);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({ "a.com": { "email": "y@y.com", "password": "p2" } })
        );
    }

    #[test]
    fn test_memory_store_matches_file_store_contract() {
        let store = mock::MemoryStore::empty();
        assert!(matches!(store.load_all(), Err(StoreError::NotFound(_))));

        store.upsert("a.com", "x@x.com", "p1").unwrap();
        assert_eq!(store.lookup("a.com").unwrap().password, "p1");
        assert!(matches!(
            store.lookup("b.com"),
            Err(StoreError::NotFoundInStore(_))
        ));
        assert_eq!(store.snapshot().map(|d| d.len()), Some(1));
    }

    fn website() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9.-]{1,24}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_upsert_then_lookup_round_trips(
            site in website(),
            email in "[ -~]{0,32}",
            password in "[ -~]{1,32}",
        ) {
            let (_dir, store) = setup_store();
            store.upsert(&site, &email, &password).unwrap();

            let record = store.lookup(&site).unwrap();
            prop_assert_eq!(record.email, email);
            prop_assert_eq!(record.password, password);
        }

        #[test]
        fn prop_upsert_does_not_touch_other_keys(
            first in website(),
            second in website(),
            password in "[!-~]{1,16}",
        ) {
            prop_assume!(first != second);
            let (_dir, store) = setup_store();
            store.upsert(&second, "second@x.com", "original").unwrap();

            store.upsert(&first, "first@x.com", &password).unwrap();

            prop_assert_eq!(
                store.lookup(&second).unwrap(),
                CredentialRecord::new("second@x.com", "original")
            );
        }
    }
}
