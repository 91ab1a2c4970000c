//! Timing extraction and matching for many files at once.
//!
//! Files are independent of each other and are read in parallel.
//! Each file opens its own handle, and a file that fails does not
//! affect the others.

use std::path::{Path, PathBuf};

use log::warn;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{mp4::extract_timing, Candidate, CoverageMatcher, TcError, Timing};

/// Timing for a single file, or `None` if
/// it could not be extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTiming {
    pub path: PathBuf,
    pub timing: Option<Timing>,
}

impl FileTiming {
    /// Returns the first candidate that covers this file.
    /// `None` if timing is missing or nothing matches.
    pub fn find_match<'a, T>(
        &self,
        matcher: &CoverageMatcher,
        candidates: &'a [Candidate<T>],
    ) -> Result<Option<&'a Candidate<T>>, TcError> {
        match &self.timing {
            Some(timing) => matcher.find(&timing.interval()?, candidates),
            None => Ok(None),
        }
    }
}

/// Extracts timing for all `paths`, in parallel.
/// Output order matches input order.
pub fn try_extract_timings<P>(paths: &[P]) -> Vec<(PathBuf, Result<Timing, TcError>)>
where
    P: AsRef<Path> + Sync,
{
    paths.par_iter()
        .map(|p| {
            let path = p.as_ref();
            (path.to_owned(), extract_timing(path))
        })
        .collect()
}

/// Extracts timing for all `paths`, in parallel.
/// Failures are logged and returned as `None` timing.
/// Output order matches input order.
pub fn extract_timings<P>(paths: &[P]) -> Vec<FileTiming>
where
    P: AsRef<Path> + Sync,
{
    try_extract_timings(paths)
        .into_iter()
        .map(|(path, result)| {
            let timing = match result {
                Ok(t) => Some(t),
                Err(err) => {
                    warn!("Could not extract timing information for {}: {err}", path.display());
                    None
                }
            };
            FileTiming { path, timing }
        })
        .collect()
}
