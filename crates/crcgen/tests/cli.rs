//! Drives the `crc64-iso` binary.

use std::{fs, process::Command};

fn bin() -> Command {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_crc64-iso"));
  cmd.env_remove("RUST_LOG").env_remove("CRC64_ISO_FORCE");
  cmd
}

#[test]
fn string_mode() {
  let out = bin().args(["--string", "123456789"]).output().unwrap();
  assert!(out.status.success());
  assert_eq!(String::from_utf8(out.stdout).unwrap(), "46A5A9388A5BEFFE\n");
}

#[test]
fn generate_then_check() {
  let dir = tempfile::tempdir().unwrap();
  let file = dir.path().join("data.bin");
  fs::write(&file, "hello world").unwrap();

  let out = bin().arg(&file).output().unwrap();
  assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
  assert_eq!(fs::read_to_string(dir.path().join("data.bin.crc")).unwrap(), "4630C0FBD52653C1");

  let out = bin().arg("--check").arg(&file).output().unwrap();
  assert!(out.status.success());
  assert!(String::from_utf8(out.stdout).unwrap().ends_with(": OK\n"));

  fs::write(&file, "goodbye").unwrap();
  let out = bin().arg("-c").arg(&file).output().unwrap();
  assert!(!out.status.success());
}

#[test]
fn print_mode_writes_nothing() {
  let dir = tempfile::tempdir().unwrap();
  let file = dir.path().join("a");
  fs::write(&file, "a").unwrap();

  let out = bin().arg("--print").arg(&file).output().unwrap();
  assert!(out.status.success());
  let stdout = String::from_utf8(out.stdout).unwrap();
  assert!(stdout.starts_with("5BB0000000000000  "), "{stdout}");
  assert!(!dir.path().join("a.crc").exists());
}

#[test]
fn dir_with_extension_filter() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("keep.txt"), "1").unwrap();
  fs::write(dir.path().join("skip.bin"), "2").unwrap();

  let out = bin().arg("-d").arg(dir.path()).args(["-e", "txt"]).output().unwrap();
  assert!(out.status.success());
  assert!(dir.path().join("keep.txt.crc").exists());
  assert!(!dir.path().join("skip.bin.crc").exists());
}

#[test]
fn missing_file_fails() {
  let dir = tempfile::tempdir().unwrap();
  let out = bin().arg(dir.path().join("nope")).output().unwrap();
  assert!(!out.status.success());
  assert!(String::from_utf8_lossy(&out.stderr).contains("Error while generating the CRC file"));
}

#[test]
fn no_arguments_is_an_error() {
  let out = bin().output().unwrap();
  assert!(!out.status.success());
}

#[test]
fn dir_rerun_skips_crc_outputs() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("a.txt"), "a").unwrap();

  for _ in 0..2 {
    let out = bin().arg("-d").arg(dir.path()).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
  }

  let mut names: Vec<String> = fs::read_dir(dir.path())
    .unwrap()
    .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  names.sort();
  assert_eq!(names, ["a.txt", "a.txt.crc"]);
}

#[cfg(unix)]
#[test]
fn non_utf8_file_name() {
  use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

  let dir = tempfile::tempdir().unwrap();
  let file = dir.path().join(OsStr::from_bytes(b"caf\xE9.bin"));
  // Some filesystems (e.g. macOS APFS) reject such names.
  if fs::write(&file, "123456789").is_err() {
    return;
  }

  let out = bin().arg(&file).output().unwrap();
  assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
  let crc = dir.path().join(OsStr::from_bytes(b"caf\xE9.bin.crc"));
  assert_eq!(fs::read_to_string(crc).unwrap(), "46A5A9388A5BEFFE");
}
