//! Journey domain entity
//!
//! A persona-specific growth path ("jornada") expressed as a milestone
//! timeline: quick wins first, then recurring products, then projects.

use serde::{Deserialize, Serialize};

/// Unique identifier for a journey (e.g. `startup_series_a`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyId(pub String);

impl JourneyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JourneyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for JourneyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyMetrics {
    pub success: String,
    pub roi: String,
}

/// A timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub week: u32,
    pub milestone: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    pub id: JourneyId,
    pub name: String,
    pub description: String,
    pub persona: String,
    pub context: String,
    #[serde(rename = "quickWins", default)]
    pub quick_wins: Vec<String>,
    #[serde(rename = "mrrTarget", default)]
    pub mrr_target: Vec<String>,
    #[serde(rename = "projetos", default)]
    pub projects: Vec<String>,
    pub metrics: JourneyMetrics,
    /// Milestones in display order
    #[serde(default)]
    pub timeline: Vec<Milestone>,
}

impl Journey {
    pub fn find_milestone(&self, label: &str) -> Option<&Milestone> {
        self.timeline.iter().find(|m| m.milestone == label)
    }
}
