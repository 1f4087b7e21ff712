use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

#[test]
fn demo_without_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dna-minhash")?;

    cmd.assert()
        .success()
        .stdout(contains("The minhash value is "));

    Ok(())
}

#[test]
fn minhash_single_shingle() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dna-minhash")?;

    cmd.arg("minhash")
        .arg("ACG")
        .args(&["-k", "3"])
        .assert()
        .success()
        .stdout(contains("The minhash value is 6"));

    Ok(())
}

#[test]
fn invalid_input_reports_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dna-minhash")?;

    cmd.arg("minhash")
        .arg("AACXT")
        .args(&["-k", "2"])
        .assert()
        .success()
        .stdout(contains("'X' at position 4"))
        .stdout(contains("The minhash value is None"));

    Ok(())
}

#[test]
fn non_integer_ksize() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dna-minhash")?;

    cmd.arg("minhash")
        .arg("ACGT")
        .args(&["-k", "2.5"])
        .assert()
        .success()
        .stdout(contains("should be a positive integer"))
        .stdout(contains("The minhash value is None"));

    Ok(())
}

#[test]
fn json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("dna-minhash")?;

    cmd.arg("minhash")
        .arg("ACG")
        .args(&["-k", "3", "--seed", "1", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""minhash":6"#));

    Ok(())
}

#[test]
fn encode_and_shingles() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("dna-minhash")?
        .args(&["encode", "ACGT"])
        .assert()
        .success()
        .stdout(contains("27"));

    Command::cargo_bin("dna-minhash")?
        .args(&["decode", "27", "-k", "4"])
        .assert()
        .success()
        .stdout(contains("ACGT"));

    Command::cargo_bin("dna-minhash")?
        .args(&["shingles", "CGTA", "-k", "2"])
        .assert()
        .success()
        .stdout(contains("GT\t11"));

    Ok(())
}

#[test]
fn encode_rejects_bad_symbol() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("dna-minhash")?
        .args(&["encode", "ACNT"])
        .assert()
        .failure();

    Ok(())
}
