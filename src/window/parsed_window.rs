use super::{DashRun, Segments};

/// Canonical segmentation: segment count, dash pattern and dash offset.
///
/// Invariants: `segments >= 1`, every dash length is `>= 1`, and a pattern with more than one
/// entry has even length so that runs alternate on/off starting with "on".
///
/// Deserialized windows are normalized again, so arbitrary input still upholds these.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawWindow")
)]
pub struct ParsedWindow {
    segments: usize,
    dashes: Vec<usize>,
    offset: isize,
}

/// Normalize a raw segmentation into its canonical triple
///
/// # Example
/// ```
/// use curvo_strip::prelude::*;
///
/// let window = parse_window((7, vec![3]));
/// assert_eq!(window.segments(), 7);
/// assert_eq!(window.dashes(), &[3, 3]);
/// assert_eq!(window.offset(), 0);
/// ```
pub fn parse_window(input: impl Into<Segments>) -> ParsedWindow {
    ParsedWindow::parse(input)
}

impl ParsedWindow {
    pub fn parse(input: impl Into<Segments>) -> Self {
        match input.into() {
            Segments::Count(count) => Self::continuous(count),
            Segments::Dashed {
                count,
                dashes,
                offset,
            } => {
                let segments = to_count(count);
                let mut dashes: Vec<usize> = dashes
                    .into_iter()
                    .filter(|d| *d >= 1.)
                    .map(|d| d.floor() as usize)
                    .collect();
                let offset = if offset.is_finite() {
                    offset.floor() as isize
                } else {
                    0
                };
                // an unshifted single run spanning the rail means no dashing
                let spans_rail = dashes.len() == 1 && dashes[0] >= segments && offset == 0;
                if dashes.is_empty() || spans_rail {
                    dashes = vec![segments];
                } else if dashes.len() % 2 == 1 {
                    dashes.extend_from_within(..);
                }
                Self {
                    segments,
                    dashes,
                    offset,
                }
            }
        }
    }

    /// One continuous run over the whole rail
    pub fn continuous(count: f64) -> Self {
        let segments = to_count(count);
        Self {
            segments,
            dashes: vec![segments],
            offset: 0,
        }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn dashes(&self) -> &[usize] {
        &self.dashes
    }

    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Number of samples on the rail (`segments + 1`)
    pub fn samples(&self) -> usize {
        self.segments + 1
    }

    pub fn is_dashed(&self) -> bool {
        self.dashes.len() > 1
    }

    /// Resolve the dash pattern into "on" runs along the rail.
    ///
    /// Segment `k` (between samples `k` and `k + 1`) reads the pattern at
    /// `(offset + k) mod total`, wrapped to non-negative. Runs are clipped at the rail end.
    pub fn runs(&self) -> Vec<DashRun> {
        if !self.is_dashed() {
            return vec![DashRun::new(0, self.segments)];
        }

        // dash lengths may be as large as usize::MAX, so the pattern is walked in u128
        let period: u128 = self.dashes.iter().map(|d| *d as u128).sum();
        let start = (self.offset as i128).rem_euclid(period as i128) as u128;

        // locate the dash that contains the starting position
        let mut dash = 0;
        let mut remaining = 0;
        let mut acc = 0;
        for (i, d) in self.dashes.iter().enumerate() {
            let end = acc + *d as u128;
            if start < end {
                dash = i;
                remaining = end - start;
                break;
            }
            acc = end;
        }

        let mut runs = vec![];
        let mut k = 0;
        while k < self.segments {
            let len = remaining.min((self.segments - k) as u128) as usize;
            if dash % 2 == 0 {
                runs.push(DashRun::new(k, k + len));
            }
            k += len;
            dash = (dash + 1) % self.dashes.len();
            remaining = self.dashes[dash] as u128;
        }
        runs
    }
}

impl Default for ParsedWindow {
    fn default() -> Self {
        Self::continuous(1.)
    }
}

impl From<usize> for ParsedWindow {
    fn from(count: usize) -> Self {
        Self::parse(count)
    }
}

/// Serialized shape of [`ParsedWindow`], re-parsed on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWindow {
    segments: usize,
    dashes: Vec<usize>,
    offset: isize,
}

#[cfg(feature = "serde")]
impl From<RawWindow> for ParsedWindow {
    fn from(raw: RawWindow) -> Self {
        Self::parse(Segments::Dashed {
            count: raw.segments as f64,
            dashes: raw.dashes.into_iter().map(|d| d as f64).collect(),
            offset: raw.offset as f64,
        })
    }
}

fn to_count(count: f64) -> usize {
    // NaN collapses to the minimum as well
    count.floor().max(1.) as usize
}
