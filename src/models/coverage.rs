use clap::ValueEnum;
use serde::Serialize;

/// Media-coverage category requested for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize)]
pub enum Coverage {
    Social,
    Photo,
    Video,
    Press,
}

/// Separator used in the `coverage` column.
pub const COVERAGE_SEPARATOR: &str = ", ";

impl Coverage {
    pub const ALL: [Coverage; 4] = [
        Coverage::Social,
        Coverage::Photo,
        Coverage::Video,
        Coverage::Press,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Coverage::Social => "Social",
            Coverage::Photo => "Photo",
            Coverage::Video => "Video",
            Coverage::Press => "Press",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Coverage::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
    }
}

/// Set of coverage tags, kept sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CoverageSet(Vec<Coverage>);

impl CoverageSet {
    pub fn new<I: IntoIterator<Item = Coverage>>(tags: I) -> Self {
        let mut v: Vec<Coverage> = tags.into_iter().collect();
        v.sort();
        v.dedup();
        Self(v)
    }

    pub fn tags(&self) -> &[Coverage] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert set → DB string ("Social, Video")
    pub fn to_db_string(&self) -> String {
        self.0
            .iter()
            .map(Coverage::label)
            .collect::<Vec<_>>()
            .join(COVERAGE_SEPARATOR)
    }

    /// Convert DB string → set. Unknown tokens are dropped.
    pub fn from_db_str(s: &str) -> Self {
        Self::new(s.split(',').filter_map(Coverage::from_label))
    }
}
