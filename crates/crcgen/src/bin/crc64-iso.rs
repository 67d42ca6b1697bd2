//! Generate or verify CRC-64/ISO `.crc` files.
//!
//! Usage:
//!   crc64-iso data/*.bin
//!   crc64-iso --crc-dir --dir data --ext bin
//!   crc64-iso --check data/*.bin
//!   crc64-iso --string 123456789

use std::{env, ffi::OsString, path::PathBuf, process::ExitCode};

use checksum::{compute_file, compute_str};
use crcgen::{Destination, GenerationBatch, GenerationStatus, Verification, source};
use log::{LevelFilter, debug};

/// CLI arguments.
#[derive(Debug, Default, PartialEq)]
struct Args {
  /// Source files given on the command line.
  files: Vec<PathBuf>,

  /// Checksum this text instead of files.
  text: Option<String>,

  /// Directory to take source files from.
  dir: Option<PathBuf>,

  /// Extensions selecting files in `dir` (all files when empty).
  extensions: Vec<String>,

  /// List the extensions present in `dir`.
  list_extensions: bool,

  /// Print checksums instead of writing files.
  print: bool,

  /// Verify existing `.crc` files.
  check: bool,

  /// Write into the sibling `../CRC` directory.
  crc_dir: bool,

  /// Write into this directory.
  out_dir: Option<PathBuf>,

  /// Verbose output.
  verbose: bool,

  /// Show help.
  help: bool,
}

impl Args {
  fn destination(&self) -> Result<Destination, String> {
    match (&self.out_dir, self.crc_dir) {
      (Some(_), true) => Err("--crc-dir and --out-dir are mutually exclusive".to_string()),
      (Some(dir), false) => Ok(Destination::Custom(dir.clone())),
      (None, true) => Ok(Destination::CrcDirectory),
      (None, false) => Ok(Destination::SameDirectory),
    }
  }
}

fn value<I>(iter: &mut I, flag: &str) -> Result<OsString, String>
where
  I: Iterator<Item = OsString>,
{
  iter.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn text_value<I>(iter: &mut I, flag: &str) -> Result<String, String>
where
  I: Iterator<Item = OsString>,
{
  value(iter, flag)?
    .into_string()
    .map_err(|raw| format!("{flag} value is not valid UTF-8: {}", raw.to_string_lossy()))
}

fn parse_args<I>(argv: I) -> Result<Args, String>
where
  I: IntoIterator<Item = OsString>,
{
  let mut args = Args::default();
  let mut iter = argv.into_iter();
  let mut only_files = false;

  while let Some(arg) = iter.next() {
    if only_files {
      args.files.push(PathBuf::from(arg));
      continue;
    }
    // Paths need not be UTF-8; no flag is spelled that way.
    let Some(flag) = arg.to_str() else {
      args.files.push(PathBuf::from(arg));
      continue;
    };
    match flag {
      "--" => only_files = true,
      "--help" | "-h" => args.help = true,
      "--verbose" | "-v" => args.verbose = true,
      "--print" => args.print = true,
      "--check" | "-c" => args.check = true,
      "--crc-dir" => args.crc_dir = true,
      "--list-ext" => args.list_extensions = true,
      "--string" | "-s" => args.text = Some(text_value(&mut iter, "--string")?),
      "--dir" | "-d" => args.dir = Some(PathBuf::from(value(&mut iter, "--dir")?)),
      "--ext" | "-e" => {
        let raw = text_value(&mut iter, "--ext")?;
        let ext = raw.trim_start_matches('*').trim_start_matches('.');
        if ext.is_empty() {
          return Err(format!("Invalid extension: {raw}"));
        }
        args.extensions.push(ext.to_string());
      }
      "--out-dir" | "-o" => args.out_dir = Some(PathBuf::from(value(&mut iter, "--out-dir")?)),
      other if other.starts_with('-') && other.len() > 1 => {
        return Err(format!("Unknown argument: {other}"));
      }
      _ => args.files.push(PathBuf::from(arg)),
    }
  }

  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
crc64-iso: CRC-64/ISO-3309 checksum files

USAGE:
    crc64-iso [OPTIONS] [FILE]...

    Writes <FILE>.crc holding the 16 uppercase hex digits of each file's checksum.

OPTIONS:
    -s, --string TEXT     Print the checksum of TEXT and exit
    -d, --dir DIR         Take source files from DIR
    -e, --ext EXT         With --dir, only files ending in .EXT (repeatable)
        --list-ext        With --dir, list the file extensions found and exit
        --print           Print \"HEX  FILE\" lines instead of writing .crc files
    -c, --check           Verify existing .crc files against their sources
        --crc-dir         Use the CRC directory beside each source directory (../CRC)
    -o, --out-dir DIR     Use DIR for .crc files
    -v, --verbose         Debug logging (RUST_LOG overrides the default filter)
    -h, --help            Show this help message

ENVIRONMENT:
    CRC64_ISO_FORCE       Pin a kernel: auto, split-word, slice8, reference
    RUST_LOG              Log filter, e.g. crcgen=debug
"
  );
}

fn init_logger(verbose: bool) {
  let mut builder = pretty_env_logger::formatted_timed_builder();
  if let Ok(filters) = env::var("RUST_LOG") {
    builder.parse_filters(&filters);
  } else {
    builder
      .filter_module("crcgen", LevelFilter::Info)
      .filter_module("crc64_iso", LevelFilter::Info);
  }
  if verbose {
    builder
      .filter_module("crcgen", LevelFilter::Debug)
      .filter_module("crc64_iso", LevelFilter::Debug);
  }
  builder.init();
}

fn collect_sources(args: &Args) -> Result<Vec<PathBuf>, String> {
  let mut sources = args.files.clone();
  if let Some(dir) = &args.dir {
    let selected = source::files_with_extensions(dir, &args.extensions)
      .map_err(|e| format!("could not list directory {}: {e}", dir.display()))?;
    debug!("{} file(s) selected in {}", selected.len(), dir.display());
    sources.extend(selected);
  } else if !args.extensions.is_empty() {
    return Err("--ext requires --dir".to_string());
  }
  Ok(sources)
}

fn print_checksums(sources: &[PathBuf]) -> ExitCode {
  let mut failed = false;
  for path in sources {
    match compute_file(path) {
      Ok(hex) => println!("{hex}  {}", path.display()),
      Err(err) => {
        eprintln!("{err}");
        failed = true;
      }
    }
  }
  if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn check(batch: &GenerationBatch) -> ExitCode {
  let mut failed = false;
  for (element, outcome) in batch.verify() {
    let source = element.source().display();
    match outcome {
      Ok(Verification::Match(_)) => println!("{source}: OK"),
      Ok(Verification::Mismatch { expected, actual }) => {
        println!("{source}: FAILED (recorded {expected}, computed {actual})");
        failed = true;
      }
      Ok(Verification::Malformed) => {
        println!("{source}: FAILED ({} is not a checksum file)", element.destination().display());
        failed = true;
      }
      Err(err) => {
        eprintln!("{source}: {err}");
        failed = true;
      }
    }
  }
  if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn generate(batch: &mut GenerationBatch) -> Result<ExitCode, String> {
  let missing = batch.missing_directories();
  if !missing.is_empty() {
    let list: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
    return Err(format!("destination directory does not exist: {}", list.join(", ")));
  }

  let total = batch.elements().len();
  let mut finished = 0usize;
  let report = batch.run(&mut |id: u64, status: GenerationStatus| {
    if matches!(status, GenerationStatus::Success | GenerationStatus::Failed) {
      finished += 1;
      debug!("[{finished}/{total}] element {id}: {status}");
    }
  });

  for element in batch.elements() {
    match element.status() {
      GenerationStatus::Success => println!("{}", element.destination().display()),
      _ => eprintln!(
        "{}: {}",
        element.source().display(),
        element.error_description().unwrap_or(element.status().label())
      ),
    }
  }

  Ok(if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn run(args: &Args) -> Result<ExitCode, String> {
  if let Some(text) = &args.text {
    let hex = compute_str(Some(text.as_str())).map_err(|e| e.to_string())?;
    println!("{hex}");
    return Ok(ExitCode::SUCCESS);
  }

  if args.list_extensions {
    let Some(dir) = &args.dir else {
      return Err("--list-ext requires --dir".to_string());
    };
    let extensions =
      source::list_extensions(dir).map_err(|e| format!("could not list directory {}: {e}", dir.display()))?;
    for ext in extensions {
      println!("{ext}");
    }
    return Ok(ExitCode::SUCCESS);
  }

  let sources = collect_sources(args)?;
  if sources.is_empty() {
    return Err("no input files".to_string());
  }

  if args.print {
    return Ok(print_checksums(&sources));
  }

  let mut batch = GenerationBatch::new(sources, args.destination()?);
  if args.check {
    return Ok(check(&batch));
  }
  generate(&mut batch)
}

fn main() -> ExitCode {
  let args = match parse_args(env::args_os().skip(1)) {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("Error: {msg}");
      eprintln!("Run with --help for usage information.");
      return ExitCode::FAILURE;
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }

  init_logger(args.verbose);

  match run(&args) {
    Ok(code) => code,
    Err(msg) => {
      eprintln!("Error: {msg}");
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(argv: &[&str]) -> Result<Args, String> {
    parse_args(argv.iter().map(OsString::from))
  }

  #[test]
  fn files_and_flags() {
    let args = parse(&["-v", "a.bin", "--crc-dir", "b.bin"]).unwrap();
    assert!(args.verbose);
    assert!(args.crc_dir);
    assert_eq!(args.files, [PathBuf::from("a.bin"), PathBuf::from("b.bin")]);
    assert_eq!(args.destination().unwrap(), Destination::CrcDirectory);
  }

  #[test]
  fn values() {
    let args = parse(&["-s", "123456789", "-d", "src", "-e", "*.txt", "--ext", ".bin", "-o", "out"]).unwrap();
    assert_eq!(args.text.as_deref(), Some("123456789"));
    assert_eq!(args.dir, Some(PathBuf::from("src")));
    assert_eq!(args.extensions, ["txt", "bin"]);
    assert_eq!(args.destination().unwrap(), Destination::Custom(PathBuf::from("out")));
  }

  #[test]
  fn double_dash_ends_options() {
    let args = parse(&["--", "-weird-name"]).unwrap();
    assert_eq!(args.files, [PathBuf::from("-weird-name")]);
  }

  #[test]
  fn errors() {
    assert_eq!(parse(&["--bogus"]).unwrap_err(), "Unknown argument: --bogus");
    assert_eq!(parse(&["--string"]).unwrap_err(), "--string requires a value");
    assert!(parse(&["-e", "*."]).is_err());
    assert!(parse(&["--crc-dir", "-o", "x"]).unwrap().destination().is_err());
  }

  #[test]
  fn lone_dash_is_a_file() {
    assert_eq!(parse(&["-"]).unwrap().files, [PathBuf::from("-")]);
  }

  #[cfg(unix)]
  #[test]
  fn non_utf8_paths_are_files() {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let name = OsString::from_vec(b"caf\xE9.bin".to_vec());
    let args = parse_args([OsString::from("-d"), name.clone(), name.clone()]).unwrap();
    assert_eq!(args.dir.as_deref().map(|p| p.as_os_str().as_bytes()), Some(&b"caf\xE9.bin"[..]));
    assert_eq!(args.files, [PathBuf::from(name.clone())]);

    let err = parse_args([OsString::from("-s"), name]).unwrap_err();
    assert!(err.starts_with("--string value is not valid UTF-8"), "{err}");
  }
}
