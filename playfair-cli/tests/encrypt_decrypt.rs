#![allow(missing_docs)]
use std::fs;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_encrypt_worked_example_from_args() {
    Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("encrypt")
        .arg("--key").arg("MONARCHY")
        .arg("INSTRUMENTS")
        .assert().success()
        .stdout(predicate::str::contains("GA TL MZ CL RQ TX"));
}

#[test]
fn test_decrypt_keeps_fillers_from_encryption() {
    Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("decrypt")
        .arg("--key").arg("MONARCHY")
        .arg("GA TL MZ CL RQ TX")
        .assert().success()
        .stdout(predicate::str::contains("INSTRUMENTSZ"));
}

#[test]
fn test_matrix_display_grid() {
    Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("matrix")
        .arg("--key").arg("MONARCHY")
        .assert().success()
        .stdout(predicate::str::contains("M O N A R"))
        .stdout(predicate::str::contains("U V W X Z"));
}

#[test]
fn test_matrix_json_output() {
    Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("matrix")
        .arg("--key").arg("MONARCHY")
        .arg("--json")
        .assert().success()
        .stdout(predicate::str::contains("\"cells\""))
        .stdout(predicate::str::contains("\"M\""));
}

#[test]
fn test_encrypt_reads_stdin_when_no_text_given() {
    Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("encrypt")
        .arg("--key").arg("MONARCHY")
        .write_stdin("INSTRUMENTS")
        .assert().success()
        .stdout(predicate::str::contains("GA TL MZ CL RQ TX"));
}

#[test]
fn test_file_round_trip() {
    // 1. Setup a temporary directory with a plaintext file
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("input.txt");
    let encrypted_path = temp_dir.path().join("encrypted.txt");
    let decrypted_path = temp_dir.path().join("decrypted.txt");

    let input_content = "Hide the gold in the tree stump";
    fs::write(&input_path, input_content).expect("Failed to write input file");

    // 2. Encrypt the file
    Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("encrypt")
        .arg("--key").arg("KEYWORD")
        .arg("--input").arg(&input_path)
        .arg("--output").arg(&encrypted_path)
        .assert().success();
    assert!(encrypted_path.exists(), "Encrypted file should exist");

    // 3. Decrypt it again
    Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("decrypt")
        .arg("--key").arg("KEYWORD")
        .arg("--input").arg(&encrypted_path)
        .arg("--output").arg(&decrypted_path)
        .assert().success();

    // 4. The recovered text is the prepared plaintext, fillers included
    let recovered = fs::read_to_string(&decrypted_path).expect("Failed to read decrypted file");
    assert_eq!(recovered, playfair_core::cipher::prepare(input_content));
}

#[test]
fn test_encrypt_with_different_keys_differs() {
    let first = Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("encrypt")
        .arg("--key").arg("MONARCHY")
        .arg("HELLO")
        .output().expect("Failed to run encrypt");
    let second = Command::cargo_bin("playfair-cli").expect("Failed to find playfair-cli binary")
        .arg("encrypt")
        .arg("--key").arg("KEYWORD")
        .arg("HELLO")
        .output().expect("Failed to run encrypt");

    assert!(first.status.success());
    assert!(second.status.success());
    assert_ne!(first.stdout, second.stdout);
}
