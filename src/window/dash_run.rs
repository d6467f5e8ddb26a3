/// A contiguous "on" run of a strip, spanning rail samples `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashRun {
    start: usize,
    end: usize,
}

impl DashRun {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// First rail sample of the run
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last rail sample of the run (inclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of segments covered by the run
    pub fn segments(&self) -> usize {
        self.end - self.start
    }

    /// Number of samples emitted for the run
    pub fn samples(&self) -> usize {
        self.segments() + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }
}
