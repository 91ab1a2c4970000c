//! Matches the time range of a file against logged takes,
//! by how much of the file each take covers.
//!
//! ```ignore
//! use tcmatch::{Candidate, CoverageMatcher, Mp4, TB_23976};
//!
//! let mut mp4 = Mp4::new(Path::new("A001C003.MOV"))?;
//! let file = mp4.timing()?.interval()?;
//!
//! let takes = vec![
//!     Candidate::from_millis("take 1", 36_000_000, 36_060_000, TB_23976)?,
//!     Candidate::from_millis("take 2", 36_060_000, 36_300_000, TB_23976)?,
//! ];
//!
//! let matched = CoverageMatcher::default().find(&file, &takes)?;
//! ```

use log::debug;

use crate::{consts::DEFAULT_COVERAGE, Interval, TcError, Time, TimeBase};

/// A logged take, or any other record with an ID and a time range.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    pub id: T,
    pub interval: Interval,
}

impl<T> Candidate<T> {
    pub fn new(id: T, interval: Interval) -> Self {
        Self { id, interval }
    }

    /// Candidate from start and exclusive end
    /// in milliseconds since midnight.
    pub fn from_millis(
        id: T,
        start_ms: i64,
        end_ms: i64,
        base: TimeBase
    ) -> Result<Self, TcError> {
        let interval = Interval::from_end_tc(
            Time::from_millis(start_ms, base),
            Time::from_millis(end_ms, base)
        )?;
        Ok(Self::new(id, interval))
    }
}

/// Finds the candidate that covers a file's time range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageMatcher {
    required_coverage: f64,
}

impl Default for CoverageMatcher {
    fn default() -> Self {
        Self { required_coverage: DEFAULT_COVERAGE }
    }
}

impl CoverageMatcher {
    /// Matcher that requires coverage strictly above
    /// `required_coverage`, which must be within `(0, 1]`.
    pub fn new(required_coverage: f64) -> Result<Self, TcError> {
        if !(required_coverage > 0.0 && required_coverage <= 1.0) {
            return Err(TcError::InvalidCoverage(required_coverage))
        }
        Ok(Self { required_coverage })
    }

    pub fn required_coverage(&self) -> f64 {
        self.required_coverage
    }

    /// Returns the part of `file` that `candidate` covers,
    /// as a ratio of realtime seconds, or `None` if these do not
    /// overlap or `file` has zero length. Bases must match.
    pub fn coverage(file: &Interval, candidate: &Interval) -> Result<Option<f64>, TcError> {
        let file_secs = file.duration().realtime_seconds();
        let intersection = file.intersect(candidate)?;

        match intersection {
            Some(i) if file_secs > 0.0 => Ok(Some(i.duration().realtime_seconds() / file_secs)),
            _ => Ok(None),
        }
    }

    /// Returns the first candidate, in iteration order,
    /// whose coverage of `file` exceeds the required coverage.
    ///
    /// Later candidates are not considered once one matches,
    /// even if these would cover more of the file.
    /// Returns `Ok(None)` if nothing matches, and an error if a
    /// candidate's base differs from that of `file`.
    pub fn find<'a, T>(
        &self,
        file: &Interval,
        candidates: impl IntoIterator<Item = &'a Candidate<T>>
    ) -> Result<Option<&'a Candidate<T>>, TcError>
    where
        T: 'a
    {
        for candidate in candidates {
            let coverage = Self::coverage(file, &candidate.interval)?;
            debug!("{} covers {coverage:?} of {file}", candidate.interval);
            if coverage.is_some_and(|c| c > self.required_coverage) {
                return Ok(Some(candidate))
            }
        }
        Ok(None)
    }

    /// Same as `find()`, but returns only the candidate ID.
    pub fn find_id<'a, T>(
        &self,
        file: &Interval,
        candidates: impl IntoIterator<Item = &'a Candidate<T>>
    ) -> Result<Option<&'a T>, TcError>
    where
        T: 'a
    {
        Ok(self.find(file, candidates)?.map(|c| &c.id))
    }
}
