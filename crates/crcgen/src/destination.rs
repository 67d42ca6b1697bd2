//! Where `.crc` files go.

use std::{
  ffi::OsString,
  path::{self, Component, Path, PathBuf},
};

/// Suffix appended to the source file name.
pub const CRC_FILE_EXTENSION: &str = ".crc";

/// The shared CRC directory, relative to a source directory.
pub const CRC_DIR_RELATIVE_PATH: &str = "../CRC";

/// Target directory policy for generated files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Destination {
  /// Next to the source file.
  #[default]
  SameDirectory,
  /// In the `CRC` directory beside the source directory.
  CrcDirectory,
  /// In a directory of the caller's choosing.
  Custom(PathBuf),
}

impl Destination {
  /// Directory that receives the `.crc` file for `source`.
  #[must_use]
  pub fn directory_for(&self, source: &Path) -> PathBuf {
    let source_dir = normalize(source).parent().map(Path::to_path_buf).unwrap_or_default();
    match self {
      Self::SameDirectory => source_dir,
      Self::CrcDirectory => normalize(&source_dir.join(CRC_DIR_RELATIVE_PATH)),
      Self::Custom(dir) => normalize(dir),
    }
  }

  /// Full path of the `.crc` file for `source`.
  #[must_use]
  pub fn crc_file_for(&self, source: &Path) -> PathBuf {
    self.directory_for(source).join(crc_file_name(source))
  }
}

/// `<source file name>.crc`.
#[must_use]
pub fn crc_file_name(source: &Path) -> OsString {
  let mut name = normalize(source).file_name().map(ToOwned::to_owned).unwrap_or_default();
  name.push(CRC_FILE_EXTENSION);
  name
}

/// Make `path` absolute and resolve `.` and `..` lexically.
///
/// Symlinks are not followed; `..` at the root stays at the root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
  let absolute = path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
  let mut out = PathBuf::new();
  for component in absolute.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        out.pop();
      }
      other => out.push(other.as_os_str()),
    }
  }
  out
}
