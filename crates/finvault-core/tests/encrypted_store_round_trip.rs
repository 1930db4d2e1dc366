use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use finvault_core::crypto::{decrypt, encrypt, hash};
use finvault_core::storage::{FileBackend, SecureStorage};
use finvault_core::FinvaultError;

fn temp_store() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store.json");
    (dir, path)
}

#[test]
fn test_balance_example_scenario() {
    let blob = encrypt("balance:1000.00", "correct-pw").expect("encryption should succeed");

    assert_eq!(
        decrypt(&blob, "correct-pw").expect("decryption should succeed"),
        "balance:1000.00"
    );
    assert!(matches!(
        decrypt(&blob, "wrong-pw"),
        Err(FinvaultError::AuthenticationFailed)
    ));
}

#[test]
fn test_round_trip_for_assorted_plaintexts() {
    let plaintexts = [
        "",
        "a",
        "balance:1000.00",
        "{\"goal\":\"emergency fund\",\"target\":5000}",
        "ünïcödé ✓ 💰",
    ];
    for plaintext in plaintexts {
        let blob = encrypt(plaintext, "pw-for-round-trip").expect("encryption should succeed");
        assert_eq!(
            decrypt(&blob, "pw-for-round-trip").expect("decryption should succeed"),
            plaintext
        );
    }
}

#[test]
fn test_same_input_twice_gives_distinct_blobs() {
    let first = encrypt("savings", "shared-password").expect("encryption should succeed");
    let second = encrypt("savings", "shared-password").expect("encryption should succeed");

    assert_ne!(first, second);
    assert_eq!(decrypt(&first, "shared-password").unwrap(), "savings");
    assert_eq!(decrypt(&second, "shared-password").unwrap(), "savings");
}

#[test]
fn test_hash_is_deterministic_and_keyless() {
    assert_eq!(hash(b"account-123"), hash(b"account-123"));
    assert_ne!(hash(b"account-123"), hash(b"account-124"));
}

#[test]
fn test_file_store_round_trip() {
    let (_dir, path) = temp_store();
    let password = "store-password-123";

    {
        let backend = FileBackend::open(&path).expect("open should succeed");
        let mut storage = SecureStorage::with_secure_cipher(backend);
        storage
            .set_item("savings_goal", &vec![250u32, 500, 1000], password)
            .expect("set should succeed");
    }

    let backend = FileBackend::open(&path).expect("reopen should succeed");
    let storage = SecureStorage::with_secure_cipher(backend);
    let goal: Option<Vec<u32>> = storage
        .get_item("savings_goal", password)
        .expect("get should succeed");
    assert_eq!(goal, Some(vec![250, 500, 1000]));
}

#[test]
fn test_file_store_does_not_contain_plaintext() {
    let (_dir, path) = temp_store();

    let backend = FileBackend::open(&path).expect("open should succeed");
    let mut storage = SecureStorage::with_secure_cipher(backend);
    storage
        .set_item("note", "secret marker: PLAINTEXT_MARKER_123", "store-password-123")
        .expect("set should succeed");

    let on_disk = fs::read_to_string(&path).expect("read should succeed");
    assert!(!on_disk.contains("PLAINTEXT_MARKER_123"));
    assert!(on_disk.contains("\"note\""));
}

#[test]
fn test_file_store_wrong_password_fails() {
    let (_dir, path) = temp_store();

    let backend = FileBackend::open(&path).expect("open should succeed");
    let mut storage = SecureStorage::with_secure_cipher(backend);
    storage
        .set_item("pin", "4321", "correct-password-123")
        .expect("set should succeed");

    let result: finvault_core::Result<Option<String>> =
        storage.get_item("pin", "wrong-password-456");
    assert!(matches!(result, Err(FinvaultError::AuthenticationFailed)));
}
