//! File and reader sources, exercised against real files on disk.

use std::{fs, io::Write};

use checksum::{ByteSource, Checksum, ChecksumErrorKind, Crc64Iso, compute, compute_file, compute_reader};

#[test]
fn file_matches_buffer() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(b"123456789").unwrap();
  file.flush().unwrap();

  assert_eq!(compute_file(file.path()).unwrap(), "46A5A9388A5BEFFE");
  assert_eq!(compute(Some(ByteSource::File(file.path()))).unwrap(), "46A5A9388A5BEFFE");
}

#[test]
fn empty_file() {
  let file = tempfile::NamedTempFile::new().unwrap();
  assert_eq!(compute_file(file.path()).unwrap(), "0000000000000000");
}

#[test]
fn large_file_streams() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("big.bin");
  let data: Vec<u8> = (0..1_000_003u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
  fs::write(&path, &data).unwrap();

  assert_eq!(compute_file(&path).unwrap(), Crc64Iso::hex_of(&data));
  assert_eq!(compute_reader(fs::File::open(&path).unwrap()).unwrap(), Crc64Iso::hex_of(&data));
}

#[test]
fn missing_file_is_io_failure() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("absent.txt");

  let err = compute_file(&path).unwrap_err();
  assert_eq!(err.kind(), ChecksumErrorKind::IoFailure);
  assert!(err.to_string().starts_with("could not find file "), "{err}");
  assert!(err.to_string().contains("absent.txt"), "{err}");
  assert!(std::error::Error::source(&err).is_some());
}

#[cfg(unix)]
#[test]
fn directory_is_io_failure() {
  let dir = tempfile::tempdir().unwrap();
  let err = compute_file(dir.path()).unwrap_err();
  assert_eq!(err.kind(), ChecksumErrorKind::IoFailure);
}

#[test]
fn writer_tees_into_file() {
  let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
  let file = tempfile::NamedTempFile::new().unwrap();

  let mut writer = Crc64Iso::writer(file.reopen().unwrap());
  for chunk in data.chunks(4099) {
    writer.write_all(chunk).unwrap();
  }
  writer.flush().unwrap();
  let (_, crc) = writer.into_parts();

  assert_eq!(crc, Crc64Iso::checksum(&data));
  assert_eq!(compute_file(file.path()).unwrap(), Crc64Iso::hex_of(&data));
}
