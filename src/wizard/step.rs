//! Wizard step machine — tracks which screen of the triage flow is active.

use serde::{Deserialize, Serialize};

/// The steps of the symptom-triage wizard.
///
/// Progresses linearly: Symptoms → Duration → Severity → Results.
/// Results is absorbing; the only way out is a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Symptoms,
    Duration,
    Severity,
    Results,
}

impl WizardStep {
    /// Get the next step in the linear progression, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            Self::Symptoms => Some(Self::Duration),
            Self::Duration => Some(Self::Severity),
            Self::Severity => Some(Self::Results),
            Self::Results => None,
        }
    }

    /// Get the previous step, if any.
    ///
    /// The results screen has no "back" — only reset leaves it.
    pub fn back(&self) -> Option<WizardStep> {
        match self {
            Self::Symptoms => None,
            Self::Duration => Some(Self::Symptoms),
            Self::Severity => Some(Self::Duration),
            Self::Results => None,
        }
    }

    /// Whether this step is terminal (analysis results are showing).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Results)
    }

    /// 1-based position for progress trackers (Symptoms = 1 … Results = 4).
    pub fn number(&self) -> u8 {
        match self {
            Self::Symptoms => 1,
            Self::Duration => 2,
            Self::Severity => 3,
            Self::Results => 4,
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Symptoms
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Symptoms => "symptoms",
            Self::Duration => "duration",
            Self::Severity => "severity",
            Self::Results => "results",
        };
        write!(f, "{s}")
    }
}
