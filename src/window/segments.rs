use super::ParsedWindow;

/// Raw segmentation of a strip: a bare segment count, or a count with a dash pattern
/// (alternating on/off run lengths, measured in segments) and an offset into that pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Segments {
    Count(f64),
    Dashed {
        count: f64,
        dashes: Vec<f64>,
        offset: f64,
    },
}

impl Segments {
    pub fn dashed(count: impl Into<f64>, dashes: Vec<f64>) -> Self {
        Self::Dashed {
            count: count.into(),
            dashes,
            offset: 0.,
        }
    }

    pub fn with_offset(self, offset: impl Into<f64>) -> Self {
        match self {
            Self::Count(count) => Self::Dashed {
                count,
                dashes: vec![count],
                offset: offset.into(),
            },
            Self::Dashed { count, dashes, .. } => Self::Dashed {
                count,
                dashes,
                offset: offset.into(),
            },
        }
    }
}

impl From<f64> for Segments {
    fn from(count: f64) -> Self {
        Self::Count(count)
    }
}

impl From<usize> for Segments {
    fn from(count: usize) -> Self {
        Self::Count(count as f64)
    }
}

impl From<i32> for Segments {
    fn from(count: i32) -> Self {
        Self::Count(count as f64)
    }
}

impl From<(usize, Vec<usize>)> for Segments {
    fn from((count, dashes): (usize, Vec<usize>)) -> Self {
        Self::dashed(count as f64, dashes.into_iter().map(|d| d as f64).collect())
    }
}

impl From<(usize, Vec<usize>, isize)> for Segments {
    fn from((count, dashes, offset): (usize, Vec<usize>, isize)) -> Self {
        Self::from((count, dashes)).with_offset(offset as f64)
    }
}

impl From<(f64, Vec<f64>)> for Segments {
    fn from((count, dashes): (f64, Vec<f64>)) -> Self {
        Self::dashed(count, dashes)
    }
}

impl From<(f64, Vec<f64>, f64)> for Segments {
    fn from((count, dashes, offset): (f64, Vec<f64>, f64)) -> Self {
        Self::dashed(count, dashes).with_offset(offset)
    }
}

impl From<ParsedWindow> for Segments {
    fn from(window: ParsedWindow) -> Self {
        Self::from(&window)
    }
}

impl From<&ParsedWindow> for Segments {
    fn from(window: &ParsedWindow) -> Self {
        Self::from((
            window.segments(),
            window.dashes().to_vec(),
            window.offset(),
        ))
    }
}
