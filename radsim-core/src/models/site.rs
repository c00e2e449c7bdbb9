use std::cmp::Ordering;
use std::fmt::{self, Display};

///
/// A window of the reference that a simulated sequencing run reads, `(start, stop)`.
///
/// Coordinates are signed offsets into the chromosome sequence: windows around cut sites close to either end of the sequence are
/// not clamped, so `start` can be negative and `stop` can run past the end.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct SequencedSite {
    pub start: i64,
    pub stop: i64,
}

impl SequencedSite {
    pub fn new(start: i64, stop: i64) -> Self {
        SequencedSite { start, stop }
    }

    ///
    /// Number of bases covered by the site
    ///
    #[inline]
    pub fn width(&self) -> i64 {
        self.stop - self.start
    }

    /// Open interval test: `start < pos < stop`. Both endpoints are excluded.
    #[inline]
    pub fn contains_strictly(&self, pos: i64) -> bool {
        self.start < pos && pos < self.stop
    }

    ///
    /// Get file string of the site
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}", self.start, self.stop)
    }
}

impl From<(i64, i64)> for SequencedSite {
    fn from(value: (i64, i64)) -> Self {
        SequencedSite::new(value.0, value.1)
    }
}

impl Ord for SequencedSite {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.stop.cmp(&other.stop))
    }
}

impl PartialOrd for SequencedSite {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for SequencedSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
