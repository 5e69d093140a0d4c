//! Static option tables for the triage wizard screens.

/// Symptoms offered on the first wizard screen.
pub const COMMON_SYMPTOMS: &[&str] = &[
    "Headache",
    "Fever",
    "Cough",
    "Fatigue",
    "Sore Throat",
    "Shortness of Breath",
    "Muscle Pain",
    "Loss of Taste or Smell",
    "Nausea",
    "Diarrhea",
    "Chest Pain",
    "Runny Nose",
    "Dizziness",
    "Abdominal Pain",
    "Rash",
    "Joint Pain",
    "Chills",
    "Vomiting",
];

/// Duration choices for the second screen, shortest first.
pub const DURATION_OPTIONS: &[&str] = &[
    "Less than 24 hours",
    "1-3 days",
    "4-7 days",
    "1-2 weeks",
    "More than 2 weeks",
];

/// A severity choice: the short value stored as the answer plus the long
/// label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Severity choices for the third screen, mildest first.
pub const SEVERITY_OPTIONS: &[SeverityOption] = &[
    SeverityOption {
        value: "Mild",
        label: "Mild - Noticeable but not interfering with daily activities",
    },
    SeverityOption {
        value: "Moderate",
        label: "Moderate - Somewhat interfering with daily activities",
    },
    SeverityOption {
        value: "Severe",
        label: "Severe - Significantly interfering with daily activities",
    },
    SeverityOption {
        value: "Very Severe",
        label: "Very Severe - Unable to perform daily activities",
    },
];

/// Whether `value` is one of the severity values.
pub fn is_severity_value(value: &str) -> bool {
    SEVERITY_OPTIONS.iter().any(|o| o.value == value)
}

/// Whether `label` is one of the duration options.
pub fn is_duration_option(label: &str) -> bool {
    DURATION_OPTIONS.contains(&label)
}
