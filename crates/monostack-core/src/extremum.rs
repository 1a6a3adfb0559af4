use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Extremum
// ---------------------------------------------------------------------------

/// Which extremum a subarray contributes: its minimum or its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extremum {
    Min,
    Max,
}

impl Extremum {
    /// Relation used to find the left boundary. The nearest element to the
    /// left that strictly dominates `seq[i]` stops the span.
    pub fn left_relation(self) -> Relation {
        match self {
            Self::Min => Relation::Less,
            Self::Max => Relation::Greater,
        }
    }

    /// Relation used to find the right boundary. Equal values stop the span
    /// here, so a run of duplicates is owned by its rightmost member.
    pub fn right_relation(self) -> Relation {
        match self {
            Self::Min => Relation::LessOrEqual,
            Self::Max => Relation::GreaterOrEqual,
        }
    }
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
        }
    }
}

impl std::str::FromStr for Extremum {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" | "minimum" => Ok(Self::Min),
            "max" | "maximum" => Ok(Self::Max),
            _ => Err(format!("invalid extremum: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Previous,
    Next,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "previous" | "prev" | "left" => Ok(Self::Previous),
            "next" | "right" => Ok(Self::Next),
            _ => Err(format!("invalid side: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// Comparison a candidate `seq[j]` must satisfy against `seq[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Relation {
    /// Whether `candidate REL current` holds.
    #[inline]
    pub fn holds<T: Ord>(self, candidate: &T, current: &T) -> bool {
        match self {
            Self::Less => candidate < current,
            Self::LessOrEqual => candidate <= current,
            Self::Greater => candidate > current,
            Self::GreaterOrEqual => candidate >= current,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Less => write!(f, "lt"),
            Self::LessOrEqual => write!(f, "le"),
            Self::Greater => write!(f, "gt"),
            Self::GreaterOrEqual => write!(f, "ge"),
        }
    }
}

impl std::str::FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lt" | "<" | "less" | "smaller" => Ok(Self::Less),
            "le" | "<=" | "less_or_equal" => Ok(Self::LessOrEqual),
            "gt" | ">" | "greater" => Ok(Self::Greater),
            "ge" | ">=" | "greater_or_equal" => Ok(Self::GreaterOrEqual),
            _ => Err(format!("invalid relation: {s}")),
        }
    }
}
