//! End-to-end batch generation against a temporary directory tree.

use std::{fs, path::Path};

use crcgen::{
  BatchReport, Destination, GENERATION_ERROR_PREFIX, GenerationBatch, GenerationStatus, Verification,
};

fn write(path: &Path, contents: &str) {
  fs::write(path, contents).unwrap();
}

#[test]
fn generates_next_to_sources() {
  let dir = tempfile::tempdir().unwrap();
  let a = dir.path().join("a.txt");
  let b = dir.path().join("b.txt");
  write(&a, "123456789");
  write(&b, "");

  let mut batch = GenerationBatch::new([&a, &b], Destination::SameDirectory);
  assert!(batch.is_valid());
  assert!(batch.requires_action());

  let report = batch.run(&mut |_: u64, _: GenerationStatus| {});
  assert_eq!(
    report,
    BatchReport {
      succeeded: 2,
      failed: 0,
      skipped: 0
    }
  );
  assert!(!batch.requires_action());

  assert_eq!(fs::read_to_string(dir.path().join("a.txt.crc")).unwrap(), "46A5A9388A5BEFFE");
  assert_eq!(fs::read_to_string(dir.path().join("b.txt.crc")).unwrap(), "0000000000000000");
}

#[test]
fn generates_into_crc_directory() {
  let root = tempfile::tempdir().unwrap();
  let src = root.path().join("src");
  fs::create_dir(&src).unwrap();
  fs::create_dir(root.path().join("CRC")).unwrap();
  let file = src.join("IHATEMATH");
  write(&file, "IHATEMATH");

  let mut batch = GenerationBatch::new([&file], Destination::CrcDirectory);
  assert_eq!(batch.elements()[0].destination(), root.path().join("CRC").join("IHATEMATH.crc"));

  assert!(batch.run(&mut |_: u64, _: GenerationStatus| {}).is_success());
  assert_eq!(
    fs::read_to_string(root.path().join("CRC/IHATEMATH.crc")).unwrap(),
    "E3DCADD69B01ADD1"
  );
}

#[test]
fn missing_crc_directory_makes_batch_invalid() {
  let root = tempfile::tempdir().unwrap();
  let file = root.path().join("x.bin");
  write(&file, "x");

  let batch = GenerationBatch::new([&file], Destination::CrcDirectory);
  assert!(!batch.is_valid());
  assert_eq!(batch.missing_directories().len(), 1);
}

#[test]
fn failure_is_recorded_and_batch_continues() {
  let dir = tempfile::tempdir().unwrap();
  let missing = dir.path().join("missing.bin");
  let present = dir.path().join("present.bin");
  write(&present, "a");

  let mut batch = GenerationBatch::new([&missing, &present], Destination::SameDirectory);
  let mut transitions = Vec::new();
  let report = batch.run(&mut |id: u64, status: GenerationStatus| transitions.push((id, status)));

  assert_eq!(report.failed, 1);
  assert_eq!(report.succeeded, 1);
  assert!(!report.is_success());

  let failed = &batch.elements()[0];
  assert_eq!(failed.status(), GenerationStatus::Failed);
  let description = failed.error_description().unwrap();
  assert!(description.starts_with(GENERATION_ERROR_PREFIX), "{description}");
  assert!(description.contains("could not find file"), "{description}");
  assert!(!failed.destination().exists());

  let ok = &batch.elements()[1];
  assert_eq!(ok.status(), GenerationStatus::Success);
  assert_eq!(fs::read_to_string(ok.destination()).unwrap(), "5BB0000000000000");

  assert_eq!(
    transitions,
    [
      (failed.id(), GenerationStatus::Pending),
      (failed.id(), GenerationStatus::Failed),
      (ok.id(), GenerationStatus::Pending),
      (ok.id(), GenerationStatus::Success),
    ]
  );
}

#[test]
fn rerun_skips_successes_and_retries_failures() {
  let dir = tempfile::tempdir().unwrap();
  let late = dir.path().join("late.bin");
  let early = dir.path().join("early.bin");
  write(&early, "early");

  let mut batch = GenerationBatch::new([&early, &late], Destination::SameDirectory);
  let first = batch.run(&mut |_: u64, _: GenerationStatus| {});
  assert_eq!((first.succeeded, first.failed, first.skipped), (1, 1, 0));
  assert!(batch.requires_action());

  write(&late, "late");
  let second = batch.run(&mut |_: u64, _: GenerationStatus| {});
  assert_eq!((second.succeeded, second.failed, second.skipped), (1, 0, 1));
  assert!(!batch.requires_action());
  assert!(batch.elements()[1].error_description().is_none());
}

#[test]
fn custom_directory_and_verify() {
  let src = tempfile::tempdir().unwrap();
  let out = tempfile::tempdir().unwrap();
  let file = src.path().join("doc.txt");
  write(&file, "The quick brown fox jumps over the lazy dog");

  let mut batch = GenerationBatch::new([&file], Destination::Custom(out.path().to_path_buf()));
  assert!(batch.run(&mut |_: u64, _: GenerationStatus| {}).is_success());
  assert_eq!(
    fs::read_to_string(out.path().join("doc.txt.crc")).unwrap(),
    "B10EB1B03E5A1D71"
  );

  let results = batch.verify();
  assert!(matches!(results[0].1, Ok(Verification::Match(_))));

  write(&file, "changed");
  let results = batch.verify();
  assert!(matches!(results[0].1, Ok(Verification::Mismatch { .. })));
}
