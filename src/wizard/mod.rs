//! Symptom-triage wizard: a linear multi-step flow collecting symptoms,
//! duration, and severity, ending in a mock assessment.

pub mod analysis;
pub mod catalog;
pub mod controller;
pub mod step;

pub use analysis::{AnalysisResult, derive_result};
pub use controller::{WizardController, WizardSnapshot};
pub use step::WizardStep;
