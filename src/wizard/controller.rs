//! WizardController — owns the triage wizard state and its transition gates.
//!
//! Invalid transition attempts are rejected silently (no mutation, no error):
//! the UI disables the corresponding buttons, so rejection here is a guard,
//! not a failure. `can_advance()` makes the gate observable so callers never
//! need to guess why `advance()` returned false.

use serde::Serialize;
use tracing::debug;

use super::analysis::{AnalysisResult, derive_result};
use super::step::WizardStep;

/// Owned state of one wizard session.
///
/// Each session is exclusively owned by one interaction stream; nothing is
/// persisted across sessions.
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    step: WizardStep,
    /// Selected symptom labels, in selection order.
    symptoms: Vec<String>,
    duration: Option<String>,
    severity: Option<String>,
    result: Option<AnalysisResult>,
}

/// Immutable view of the wizard state after an operation, for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub symptoms: Vec<String>,
    pub duration: Option<String>,
    pub severity: Option<String>,
    pub result: Option<AnalysisResult>,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Add `label` to the symptom selection. Legal only on the Symptoms step.
    pub fn select_symptom(&mut self, label: &str) -> bool {
        if self.step != WizardStep::Symptoms {
            debug!(step = %self.step, label, "Symptom selection ignored off the symptoms step");
            return false;
        }
        if !self.symptoms.iter().any(|s| s == label) {
            self.symptoms.push(label.to_string());
        }
        true
    }

    /// Remove `label` from the symptom selection. Legal only on the Symptoms step.
    pub fn deselect_symptom(&mut self, label: &str) -> bool {
        if self.step != WizardStep::Symptoms {
            debug!(step = %self.step, label, "Symptom deselection ignored off the symptoms step");
            return false;
        }
        self.symptoms.retain(|s| s != label);
        true
    }

    /// Toggle `label` in the symptom selection, mirroring the selection chips.
    pub fn toggle_symptom(&mut self, label: &str) -> bool {
        if self.symptoms.iter().any(|s| s == label) {
            self.deselect_symptom(label)
        } else {
            self.select_symptom(label)
        }
    }

    /// Overwrite the duration answer. Ignored off the Duration step.
    pub fn set_duration(&mut self, label: &str) -> bool {
        if self.step != WizardStep::Duration {
            debug!(step = %self.step, label, "Duration ignored off the duration step");
            return false;
        }
        self.duration = Some(label.to_string());
        true
    }

    /// Overwrite the severity answer. Ignored off the Severity step.
    pub fn set_severity(&mut self, label: &str) -> bool {
        if self.step != WizardStep::Severity {
            debug!(step = %self.step, label, "Severity ignored off the severity step");
            return false;
        }
        self.severity = Some(label.to_string());
        true
    }

    /// Whether the current step's gate is satisfied.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Symptoms => !self.symptoms.is_empty(),
            WizardStep::Duration => self.duration.is_some(),
            WizardStep::Severity => self.severity.is_some(),
            WizardStep::Results => false,
        }
    }

    /// Move to the next step.
    ///
    /// Returns false with no state change when the gate is unmet or the
    /// wizard is already showing results. Advancing off the Severity step
    /// derives the assessment and enters the terminal Results step.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            debug!(step = %self.step, "Advance rejected: gate unmet");
            return false;
        }
        // can_advance() is false on Results, so next() is always Some here
        let Some(next) = self.step.next() else {
            return false;
        };
        if next.is_terminal() {
            self.result = Some(derive_result(&self.symptoms));
        }
        debug!(from = %self.step, to = %next, "Wizard advanced");
        self.step = next;
        true
    }

    /// Move one step back, floored at the Symptoms step.
    ///
    /// No-op on the Results step: the results screen only offers reset.
    pub fn retreat(&mut self) -> bool {
        match self.step.back() {
            Some(prev) => {
                debug!(from = %self.step, to = %prev, "Wizard retreated");
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Return to the Symptoms step with all answers and the result cleared.
    pub fn reset(&mut self) {
        debug!(step = %self.step, "Wizard reset");
        *self = Self::default();
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            step: self.step,
            symptoms: self.symptoms.clone(),
            duration: self.duration.clone(),
            severity: self.severity.clone(),
            result: self.result.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a fresh wizard to the Severity step with valid answers.
    fn wizard_at_severity() -> WizardController {
        let mut wizard = WizardController::new();
        wizard.toggle_symptom("Headache");
        assert!(wizard.advance());
        assert!(wizard.set_duration("1-3 days"));
        assert!(wizard.advance());
        assert!(wizard.set_severity("Mild"));
        wizard
    }

    #[test]
    fn advance_rejected_until_symptoms_selected() {
        let mut wizard = WizardController::new();
        assert!(!wizard.can_advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), WizardStep::Symptoms);

        wizard.toggle_symptom("Fever");
        assert!(wizard.can_advance());
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::Duration);
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut wizard = WizardController::new();
        wizard.toggle_symptom("Cough");
        assert_eq!(wizard.symptoms(), ["Cough".to_string()]);
        wizard.toggle_symptom("Cough");
        assert!(wizard.symptoms().is_empty());
    }

    #[test]
    fn select_is_idempotent_deselect_unknown_is_noop() {
        let mut wizard = WizardController::new();
        wizard.select_symptom("Rash");
        wizard.select_symptom("Rash");
        assert_eq!(wizard.symptoms().len(), 1);
        wizard.deselect_symptom("Fever");
        assert_eq!(wizard.symptoms().len(), 1);
    }

    #[test]
    fn duration_and_severity_gated_by_step() {
        let mut wizard = WizardController::new();
        // Still on Symptoms: both ignored, state untouched
        assert!(!wizard.set_duration("1-3 days"));
        assert!(!wizard.set_severity("Mild"));
        assert!(wizard.duration().is_none());
        assert!(wizard.severity().is_none());

        wizard.toggle_symptom("Rash");
        wizard.advance();
        assert!(wizard.set_duration("4-7 days"));
        // Severity still out of reach on the Duration step
        assert!(!wizard.set_severity("Mild"));
        assert!(wizard.severity().is_none());
    }

    #[test]
    fn duration_overwrites_previous_choice() {
        let mut wizard = WizardController::new();
        wizard.toggle_symptom("Rash");
        wizard.advance();
        wizard.set_duration("1-3 days");
        wizard.set_duration("More than 2 weeks");
        assert_eq!(wizard.duration(), Some("More than 2 weeks"));
    }

    #[test]
    fn advance_from_severity_derives_result() {
        let mut wizard = wizard_at_severity();
        assert!(wizard.result().is_none());
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::Results);
        let result = wizard.result().expect("result derived on terminal step");
        assert_eq!(result.condition, "General Malaise");
        assert!((70..=99).contains(&result.confidence));
    }

    #[test]
    fn results_step_is_absorbing() {
        let mut wizard = wizard_at_severity();
        wizard.advance();
        assert!(!wizard.can_advance());
        assert!(!wizard.advance());
        assert!(!wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::Results);
    }

    #[test]
    fn selection_frozen_outside_symptoms_step() {
        let mut wizard = wizard_at_severity();
        assert!(!wizard.toggle_symptom("Fever"));
        assert_eq!(wizard.symptoms(), ["Headache".to_string()]);
    }

    #[test]
    fn retreat_idempotent_at_first_step() {
        let mut wizard = WizardController::new();
        assert!(!wizard.retreat());
        assert!(!wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::Symptoms);
    }

    #[test]
    fn retreat_walks_back_and_keeps_answers() {
        let mut wizard = wizard_at_severity();
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::Duration);
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::Symptoms);
        // Answers survive going back; only reset clears them
        assert_eq!(wizard.symptoms(), ["Headache".to_string()]);
        assert_eq!(wizard.duration(), Some("1-3 days"));
    }

    #[test]
    fn reset_after_results_clears_everything() {
        let mut wizard = wizard_at_severity();
        wizard.advance();
        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Symptoms);
        assert!(wizard.symptoms().is_empty());
        assert!(wizard.duration().is_none());
        assert!(wizard.severity().is_none());
        assert!(wizard.result().is_none());
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut wizard = wizard_at_severity();
        wizard.advance();
        let snapshot = wizard.snapshot();
        assert_eq!(snapshot.step, WizardStep::Results);
        assert_eq!(snapshot.symptoms, ["Headache".to_string()]);
        assert_eq!(snapshot.duration.as_deref(), Some("1-3 days"));
        assert_eq!(snapshot.severity.as_deref(), Some("Mild"));
        assert!(snapshot.result.is_some());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["step"], "results");
    }
}
