//! Sequential generation of `.crc` files for a list of sources.

use std::{
  collections::BTreeSet,
  fs,
  path::{Path, PathBuf},
};

use checksum::{HexChecksum, compute_file};
use log::{debug, info, warn};

use crate::{
  destination::Destination,
  element::{GenerationElement, GenerationStatus},
  error::GenerationError,
  verify::{Verification, verify},
};

/// Prefix of the description recorded on a failed element.
pub const GENERATION_ERROR_PREFIX: &str = "Error while generating the CRC file: ";

/// Receives every status change of every element during [`GenerationBatch::run`].
pub trait StatusListener {
  fn status_changed(&mut self, id: u64, status: GenerationStatus);
}

impl<F> StatusListener for F
where
  F: FnMut(u64, GenerationStatus),
{
  #[inline]
  fn status_changed(&mut self, id: u64, status: GenerationStatus) {
    self(id, status);
  }
}

/// Outcome counts of one [`GenerationBatch::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
  pub succeeded: usize,
  pub failed: usize,
  /// Elements already generated by an earlier run.
  pub skipped: usize,
}

impl BatchReport {
  #[inline]
  #[must_use]
  pub fn is_success(&self) -> bool {
    self.failed == 0
  }
}

/// Checksum `source` and write its hex form as the whole content of `destination`.
pub fn generate(source: &Path, destination: &Path) -> Result<HexChecksum, GenerationError> {
  let hex = compute_file(source)?;
  fs::write(destination, hex.as_bytes()).map_err(|source| GenerationError::Write {
    path: destination.to_path_buf(),
    source,
  })?;
  Ok(hex)
}

/// A set of sources sharing one destination policy.
#[derive(Debug)]
pub struct GenerationBatch {
  destination: Destination,
  elements: Vec<GenerationElement>,
}

impl GenerationBatch {
  /// One element per source, each with its `.crc` path resolved through `destination`.
  #[must_use]
  pub fn new<I>(sources: I, destination: Destination) -> Self
  where
    I: IntoIterator,
    I::Item: Into<PathBuf>,
  {
    let elements = sources
      .into_iter()
      .map(|source| {
        let source = source.into();
        let crc_file = destination.crc_file_for(&source);
        GenerationElement::new(source, crc_file)
      })
      .collect();
    Self { destination, elements }
  }

  #[inline]
  #[must_use]
  pub fn destination(&self) -> &Destination {
    &self.destination
  }

  #[inline]
  #[must_use]
  pub fn elements(&self) -> &[GenerationElement] {
    &self.elements
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Destination directories that do not exist as directories, deduplicated and sorted.
  #[must_use]
  pub fn missing_directories(&self) -> Vec<PathBuf> {
    self
      .elements
      .iter()
      .filter_map(|e| e.destination().parent())
      .filter(|dir| !dir.is_dir())
      .map(Path::to_path_buf)
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }

  /// At least one element, and every destination directory exists.
  #[must_use]
  pub fn is_valid(&self) -> bool {
    !self.elements.is_empty() && self.missing_directories().is_empty()
  }

  /// Some element has not been generated yet.
  #[must_use]
  pub fn requires_action(&self) -> bool {
    self.elements.iter().any(|e| e.status() != GenerationStatus::Success)
  }

  /// Generate every element that is not already [`GenerationStatus::Success`].
  ///
  /// A failing element is marked [`GenerationStatus::Failed`] with its error
  /// description and the batch moves on.
  pub fn run<L>(&mut self, listener: &mut L) -> BatchReport
  where
    L: StatusListener + ?Sized,
  {
    let mut report = BatchReport::default();
    info!("generating {} CRC file(s)", self.elements.len());

    for element in &mut self.elements {
      if element.status() == GenerationStatus::Success {
        report.skipped += 1;
        continue;
      }

      transition(element, GenerationStatus::Pending, listener);
      match generate(element.source(), element.destination()) {
        Ok(hex) => {
          debug!("{} -> {} ({hex})", element.source().display(), element.destination().display());
          transition(element, GenerationStatus::Success, listener);
          report.succeeded += 1;
        }
        Err(err) => {
          warn!("{}: {err}", element.source().display());
          element.fail(format!("{GENERATION_ERROR_PREFIX}{err}"));
          debug!("element {}: {}", element.id(), GenerationStatus::Failed);
          listener.status_changed(element.id(), GenerationStatus::Failed);
          report.failed += 1;
        }
      }
    }

    info!(
      "{} generated, {} failed, {} skipped",
      report.succeeded, report.failed, report.skipped
    );
    report
  }

  /// Check every element's existing `.crc` file against its source.
  #[must_use]
  pub fn verify(&self) -> Vec<(&GenerationElement, Result<Verification, GenerationError>)> {
    self
      .elements
      .iter()
      .map(|element| (element, verify(element.source(), element.destination())))
      .collect()
  }
}

fn transition<L>(element: &mut GenerationElement, status: GenerationStatus, listener: &mut L)
where
  L: StatusListener + ?Sized,
{
  element.set_status(status);
  debug!("element {}: {status}", element.id());
  listener.status_changed(element.id(), status);
}
