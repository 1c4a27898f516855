use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating status of a lift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LiftStatus {
    Open,
    Closed,
    Hold,
}

impl LiftStatus {
    pub const ALL: [LiftStatus; 3] = [LiftStatus::Open, LiftStatus::Closed, LiftStatus::Hold];

    pub fn as_str(&self) -> &'static str {
        match self {
            LiftStatus::Open => "OPEN",
            LiftStatus::Closed => "CLOSED",
            LiftStatus::Hold => "HOLD",
        }
    }
}

impl FromStr for LiftStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LiftStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid LiftStatus", s))
    }
}

/// Whether a trail can be skied right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrailStatus {
    Open,
    Closed,
}

impl TrailStatus {
    pub const ALL: [TrailStatus; 2] = [TrailStatus::Open, TrailStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrailStatus::Open => "OPEN",
            TrailStatus::Closed => "CLOSED",
        }
    }
}

impl FromStr for TrailStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrailStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid TrailStatus", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid Difficulty", s))
    }
}

/// A lift record as stored in the lifts data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lift {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<LiftStatus>,
    pub capacity: i32,
    #[serde(default)]
    pub night: Option<bool>,
    pub elevation_gain: i32,
    /// Ids of the trails this lift serves; only used to derive `trailAccess`
    #[serde(default)]
    pub trails: Vec<String>,
}

/// A trail record as stored in the trails data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub id: String,
    pub name: String,
    /// Ids of the lifts that reach this trail
    #[serde(default)]
    pub lift: Vec<String>,
    pub difficulty: Difficulty,
    pub status: TrailStatus,
    #[serde(default)]
    pub groomed: Option<bool>,
    #[serde(default)]
    pub snowmaking: Option<bool>,
    #[serde(default)]
    pub trees: Option<bool>,
    #[serde(default)]
    pub night: Option<bool>,
}

/// A stored cross reference that points at no existing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// A lift lists a trail id that does not exist
    Trail { lift_id: String, trail_id: String },
    /// A trail lists a lift id that does not exist
    Lift { trail_id: String, lift_id: String },
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DanglingReference::Trail { lift_id, trail_id } => {
                write!(f, "lift '{}' references unknown trail '{}'", lift_id, trail_id)
            }
            DanglingReference::Lift { trail_id, lift_id } => {
                write!(f, "trail '{}' references unknown lift '{}'", trail_id, lift_id)
            }
        }
    }
}
