//! One unit of work: a source file, its `.crc` file and where it stands.

use core::{
  fmt,
  sync::atomic::{AtomicU64, Ordering},
};
use std::path::{Path, PathBuf};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
  NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Progress of a single element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenerationStatus {
  #[default]
  Todo,
  Pending,
  Success,
  Failed,
}

impl GenerationStatus {
  /// Human-readable label.
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Todo => "To do",
      Self::Pending => "Pending...",
      Self::Success => "Generated",
      Self::Failed => "Failed",
    }
  }
}

impl fmt::Display for GenerationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// A source file paired with the `.crc` file generated for it.
///
/// Every element gets a process-unique id at construction.
#[derive(Debug)]
pub struct GenerationElement {
  id: u64,
  source: PathBuf,
  destination: PathBuf,
  status: GenerationStatus,
  error_description: Option<String>,
}

impl GenerationElement {
  #[must_use]
  pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
    Self {
      id: next_id(),
      source: source.into(),
      destination: destination.into(),
      status: GenerationStatus::Todo,
      error_description: None,
    }
  }

  #[inline]
  #[must_use]
  pub fn id(&self) -> u64 {
    self.id
  }

  #[inline]
  #[must_use]
  pub fn source(&self) -> &Path {
    &self.source
  }

  #[inline]
  #[must_use]
  pub fn destination(&self) -> &Path {
    &self.destination
  }

  #[inline]
  #[must_use]
  pub fn status(&self) -> GenerationStatus {
    self.status
  }

  /// Why the last attempt failed, if it did.
  #[inline]
  #[must_use]
  pub fn error_description(&self) -> Option<&str> {
    self.error_description.as_deref()
  }

  pub(crate) fn set_status(&mut self, status: GenerationStatus) {
    self.status = status;
    if status != GenerationStatus::Failed {
      self.error_description = None;
    }
  }

  pub(crate) fn fail(&mut self, description: String) {
    self.status = GenerationStatus::Failed;
    self.error_description = Some(description);
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn labels() {
    assert_eq!(GenerationStatus::Todo.to_string(), "To do");
    assert_eq!(GenerationStatus::Pending.to_string(), "Pending...");
    assert_eq!(GenerationStatus::Success.to_string(), "Generated");
    assert_eq!(GenerationStatus::Failed.to_string(), "Failed");
  }

  #[test]
  fn new_element_is_todo() {
    let element = GenerationElement::new("a.bin", "a.bin.crc");
    assert_eq!(element.status(), GenerationStatus::Todo);
    assert_eq!(element.source(), Path::new("a.bin"));
    assert_eq!(element.destination(), Path::new("a.bin.crc"));
    assert!(element.error_description().is_none());
  }

  #[test]
  fn ids_are_unique_across_threads() {
    let handles: Vec<_> = (0..4)
      .map(|_| {
        std::thread::spawn(|| {
          (0..100)
            .map(|_| GenerationElement::new("x", "x.crc").id())
            .collect::<Vec<_>>()
        })
      })
      .collect();

    let mut seen = HashSet::new();
    for handle in handles {
      for id in handle.join().unwrap() {
        assert!(seen.insert(id), "duplicate id {id}");
      }
    }
  }

  #[test]
  fn retry_clears_error() {
    let mut element = GenerationElement::new("a", "a.crc");
    element.fail("Error while generating the CRC file: boom".to_string());
    assert_eq!(element.status(), GenerationStatus::Failed);
    assert!(element.error_description().is_some());

    element.set_status(GenerationStatus::Pending);
    assert!(element.error_description().is_none());
  }
}
