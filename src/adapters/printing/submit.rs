//! Job submission through `lp`

use super::queues::clean_printer_name;
use super::runner::CommandRunner;
use crate::domain::{LecternError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Long-edge duplex, the `lp` option used for two-sided jobs
pub const TWO_SIDED_OPTION: &str = "sides=two-sided-long-edge";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub printer: String,
    pub copies: u32,
    pub two_sided: bool,
}

/// Outcome of one submitted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub file: PathBuf,
    pub success: bool,
    /// Job message on success, tool output or error text on failure
    pub message: String,
}

/// Files to print under `path`
///
/// A file is taken as is. A directory yields its files whose extension is
/// in `extensions` (case-insensitive), sorted by name.
pub fn collect_files(path: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(LecternError::Print(format!(
            "Path does not exist: {}",
            path.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let file = entry?.path();
        let matches = file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
        if matches && file.is_file() {
            files.push(file);
        }
    }

    files.sort();
    Ok(files)
}

/// `lp` arguments for one file
pub fn lp_args(options: &PrintOptions, file: &Path) -> Vec<String> {
    let mut args = vec!["-d".to_string(), clean_printer_name(&options.printer)];
    if options.two_sided {
        args.push("-o".to_string());
        args.push(TWO_SIDED_OPTION.to_string());
    }
    if options.copies > 1 {
        args.push("-n".to_string());
        args.push(options.copies.to_string());
    }
    args.push(file.display().to_string());
    args
}

/// Submits each file as its own job
///
/// A failed job is recorded and the remaining files are still submitted.
pub fn submit<R>(
    runner: &R,
    lp: &Path,
    options: &PrintOptions,
    files: &[PathBuf],
) -> Vec<JobOutcome>
where
    R: CommandRunner + ?Sized,
{
    files
        .iter()
        .map(|file| {
            let outcome = match runner.run(lp, &lp_args(options, file)) {
                Ok(output) if output.success => JobOutcome {
                    file: file.clone(),
                    success: true,
                    message: output.stdout.trim().to_string(),
                },
                Ok(output) => JobOutcome {
                    file: file.clone(),
                    success: false,
                    message: output.combined().trim().to_string(),
                },
                Err(e) => JobOutcome {
                    file: file.clone(),
                    success: false,
                    message: e.to_string(),
                },
            };

            if outcome.success {
                tracing::info!(
                    file = %file.display(),
                    printer = %options.printer,
                    "Print job submitted"
                );
            } else {
                tracing::warn!(
                    file = %file.display(),
                    printer = %options.printer,
                    message = %outcome.message,
                    "Print job failed"
                );
            }
            outcome
        })
        .collect()
}
