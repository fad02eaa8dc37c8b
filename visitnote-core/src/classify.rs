//! Ordering keys and presentation tags for free-text labels.
//!
//! Labels come straight from the processing service, so every lookup is
//! case-insensitive and total: unknown input falls into a fallback bucket
//! instead of failing.

use serde::{Deserialize, Serialize};

/// A record carrying a free-text label used for sorting and tagging.
pub trait Classifiable {
    fn category(&self) -> Option<&str>;
}

/// Rank given to records with a missing or unrecognized severity.
pub const UNSPECIFIED_SEVERITY_RANK: u8 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Sort key for a severity label: high 0, medium 1, low 2, anything else 3.
pub fn severity_rank(label: Option<&str>) -> u8 {
    label
        .and_then(Severity::from_str)
        .map(|s| s.rank())
        .unwrap_or(UNSPECIFIED_SEVERITY_RANK)
}

/// Stable sort by severity, most severe first.
///
/// Records sharing a rank, including every unknown one, keep their
/// relative order.
pub fn sort_by_severity<T: Classifiable>(records: &mut [T]) {
    records.sort_by_key(|r| severity_rank(r.category()));
}

/// Presentation tag for an action item category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Medication,
    Test,
    Procedure,
    Other,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medication => "medication",
            Self::Test => "test",
            Self::Procedure => "procedure",
            Self::Other => "other",
        }
    }

    pub fn sort_weight(&self) -> u8 {
        match self {
            Self::Medication => 0,
            Self::Test => 1,
            Self::Procedure => 2,
            Self::Other => 3,
        }
    }

    /// Icon name used by the clients for this tag.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Medication => "pill",
            Self::Test => "flask-conical",
            Self::Procedure => "stethoscope",
            Self::Other => "clipboard-list",
        }
    }

    /// Accent colour class used for the item's left border.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Medication => "blue",
            Self::Test => "green",
            Self::Procedure => "purple",
            Self::Other => "orange",
        }
    }
}

/// Map a category label to its tag. Never fails.
pub fn classify(label: &str) -> Tag {
    match label.to_ascii_lowercase().as_str() {
        "medication" => Tag::Medication,
        "tests" | "test" => Tag::Test,
        "procedure" => Tag::Procedure,
        _ => Tag::Other,
    }
}

/// Stable sort by tag weight; records without a label sort as `other`.
pub fn sort_by_tag<T: Classifiable>(records: &mut [T]) {
    records.sort_by_key(|r| r.category().map(classify).unwrap_or(Tag::Other).sort_weight());
}

/// Priority of a plan or action item.
///
/// Deserialized through [`Importance::from_str`], so `"High"` is accepted the
/// same way severity labels are.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Importance {
    High,
    #[default]
    Low,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl TryFrom<String> for Importance {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value).ok_or_else(|| format!("unknown importance: {value}"))
    }
}

/// Stable sort putting high-importance items first.
pub fn sort_by_importance<T>(items: &mut [T], importance: impl Fn(&T) -> Importance) {
    items.sort_by_key(|item| importance(item) != Importance::High);
}
