//! Picking source files out of a directory by extension.

use std::{
  collections::BTreeSet,
  fs, io,
  path::{Path, PathBuf},
};

use crate::destination::CRC_FILE_EXTENSION;

/// Extension of a file name: the text after the last `.`, if non-empty.
fn extension_of(name: &str) -> Option<&str> {
  name.rsplit_once('.').map(|(_, ext)| ext).filter(|ext| !ext.is_empty())
}

fn regular_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
  let mut files = Vec::new();
  for entry in fs::read_dir(dir)? {
    let entry = entry?;
    if entry.file_type()?.is_file() {
      files.push(entry.path());
    }
  }
  Ok(files)
}

/// Distinct extensions of the regular files directly inside `dir`, sorted.
pub fn list_extensions(dir: &Path) -> io::Result<Vec<String>> {
  let mut extensions = BTreeSet::new();
  for path in regular_files(dir)? {
    if let Some(ext) = path.file_name().and_then(|n| n.to_str()).and_then(extension_of) {
      extensions.insert(ext.to_owned());
    }
  }
  Ok(extensions.into_iter().collect())
}

fn is_crc_file(path: &Path) -> bool {
  path
    .file_name()
    .is_some_and(|name| name.as_encoded_bytes().ends_with(CRC_FILE_EXTENSION.as_bytes()))
}

/// Regular files directly inside `dir` whose name ends in `.<ext>` for any of
/// `extensions`, sorted by file name.
///
/// An empty `extensions` selects every file except existing `.crc` files, so a
/// second run over the same directory does not checksum its own output.
pub fn files_with_extensions<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> io::Result<Vec<PathBuf>> {
  let mut files: Vec<PathBuf> = regular_files(dir)?
    .into_iter()
    .filter(|path| {
      if extensions.is_empty() {
        return !is_crc_file(path);
      }
      let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
      };
      extensions
        .iter()
        .any(|ext| name.strip_suffix(ext.as_ref()).is_some_and(|stem| stem.ends_with('.')))
    })
    .collect();
  files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
  Ok(files)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), name).unwrap();
  }

  #[test]
  fn extension_rules() {
    assert_eq!(extension_of("a.txt"), Some("txt"));
    assert_eq!(extension_of("a.tar.gz"), Some("gz"));
    assert_eq!(extension_of(".bashrc"), Some("bashrc"));
    assert_eq!(extension_of("trailing."), None);
    assert_eq!(extension_of("plain"), None);
  }

  #[test]
  fn lists_sorted_unique_extensions() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.txt", "a.txt", "c.bin", "d.tar.gz", "README"] {
      touch(dir.path(), name);
    }
    fs::create_dir(dir.path().join("sub.dir")).unwrap();

    assert_eq!(list_extensions(dir.path()).unwrap(), ["bin", "gz", "txt"]);
  }

  #[test]
  fn filters_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.txt", "a.txt", "c.bin", "d.tar.gz", "footxt"] {
      touch(dir.path(), name);
    }

    let names = |files: Vec<PathBuf>| -> Vec<String> {
      files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
    };

    assert_eq!(names(files_with_extensions(dir.path(), &["txt"]).unwrap()), ["a.txt", "b.txt"]);
    assert_eq!(
      names(files_with_extensions(dir.path(), &["txt", "gz", "tar.gz"]).unwrap()),
      ["a.txt", "b.txt", "d.tar.gz"]
    );
    assert_eq!(names(files_with_extensions::<&str>(dir.path(), &[]).unwrap()).len(), 5);
  }

  #[test]
  fn no_filter_skips_crc_files() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.txt", "a.txt.crc", "b", "b.crc", "crc"] {
      touch(dir.path(), name);
    }

    let all: Vec<PathBuf> = files_with_extensions::<&str>(dir.path(), &[]).unwrap();
    let names: Vec<_> = all.iter().filter_map(|p| p.file_name()?.to_str()).collect();
    assert_eq!(names, ["a.txt", "b", "crc"]);

    let crc_only = files_with_extensions(dir.path(), &["crc"]).unwrap();
    assert_eq!(crc_only.len(), 2);
  }

  #[test]
  fn missing_directory_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_extensions(&dir.path().join("nope")).is_err());
  }
}
