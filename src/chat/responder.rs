//! Keyword-matched canned responses for the chat assistant.
//!
//! The rule table is **ordered**: the first rule with any trigger substring
//! contained in the lower-cased input wins. Ordering is a deliberate
//! priority policy (e.g. "sore throat" mentions both "throat" and "sore",
//! and "headache" must reach the migraine rule before any later rule), so
//! the default order is load-bearing and tested.

use tracing::debug;

/// Queries offered as suggestion bubbles in the chat UI.
pub const SUGGESTED_QUERIES: &[&str] = &[
    "What are symptoms of a cold?",
    "How to reduce a fever?",
    "What causes migraines?",
    "Is my cough serious?",
    "How to improve sleep?",
    "What's good for a sore throat?",
];

const COLD_RESPONSE: &str = "Common cold symptoms include runny nose, sore throat, coughing, and sneezing. Rest, stay hydrated, and consider over-the-counter medications for symptom relief. If symptoms persist for more than 10 days or are severe, consult a healthcare professional.";

const FEVER_RESPONSE: &str = "To reduce a fever: take acetaminophen or ibuprofen as directed, stay hydrated, rest, and dress in lightweight clothing. If the fever is above 103\u{b0}F (39.4\u{b0}C), lasts more than three days, or is accompanied by severe symptoms, seek medical attention.";

const MIGRAINE_RESPONSE: &str = "Migraines are often caused by genetic factors, hormonal changes, stress, certain foods, weather changes, or sleep disruptions. Triggers vary from person to person. Managing stress, maintaining a regular sleep schedule, and avoiding personal triggers can help prevent migraines.";

const COUGH_RESPONSE: &str = "A cough can be caused by various conditions from minor irritations to more serious issues. If your cough persists for more than three weeks, produces discolored mucus, or is accompanied by shortness of breath, chest pain, or fever, it's advisable to consult a healthcare professional for proper evaluation.";

const SLEEP_RESPONSE: &str = "To improve sleep: maintain a consistent sleep schedule, create a relaxing bedtime routine, ensure your bedroom is dark and cool, limit screen time before bed, avoid caffeine and large meals in the evening, and exercise regularly (but not close to bedtime).";

const THROAT_RESPONSE: &str = "For a sore throat, try: gargling with warm salt water, staying hydrated, using throat lozenges, drinking warm liquids like tea with honey, using a humidifier, and resting your voice. If the sore throat is severe, lasts longer than a week, or is accompanied by difficulty swallowing or breathing, seek medical attention.";

const FALLBACK_RESPONSE: &str = "I apologize, but I don't have specific information about that query. For accurate medical advice, please consult with a healthcare professional.";

/// A single trigger group mapped to a canned reply.
#[derive(Debug, Clone)]
pub struct ResponseRule {
    /// Short identifier for logging.
    pub topic: String,
    /// Any of these substrings in the input fires the rule.
    pub triggers: Vec<String>,
    pub reply: String,
}

impl ResponseRule {
    pub fn new(topic: &str, triggers: &[&str], reply: &str) -> Self {
        Self {
            topic: topic.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            reply: reply.to_string(),
        }
    }

    fn matches(&self, input_lower: &str) -> bool {
        self.triggers.iter().any(|t| input_lower.contains(t.as_str()))
    }
}

/// Maps free-text input to one of a fixed set of canned replies.
pub struct ResponseMatcher {
    rules: Vec<ResponseRule>,
    fallback: String,
}

impl ResponseMatcher {
    /// Create a matcher with the default health-topic rule table.
    pub fn default_rules() -> Self {
        let rules = vec![
            ResponseRule::new("cold", &["cold", "flu", "runny nose"], COLD_RESPONSE),
            ResponseRule::new("fever", &["fever", "temperature"], FEVER_RESPONSE),
            ResponseRule::new("migraine", &["migraine", "headache"], MIGRAINE_RESPONSE),
            ResponseRule::new("cough", &["cough"], COUGH_RESPONSE),
            ResponseRule::new("sleep", &["sleep", "insomnia"], SLEEP_RESPONSE),
            ResponseRule::new("throat", &["throat", "sore"], THROAT_RESPONSE),
        ];
        Self {
            rules,
            fallback: FALLBACK_RESPONSE.to_string(),
        }
    }

    /// Create a matcher with no rules (for testing).
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            fallback: FALLBACK_RESPONSE.to_string(),
        }
    }

    /// Append a rule. Later rules only fire when no earlier rule matches.
    pub fn push_rule(&mut self, rule: ResponseRule) {
        self.rules.push(rule);
    }

    /// Match `input` against the rule table, first match wins.
    ///
    /// Matching is case-insensitive; unmatched input gets the fixed
    /// consult-a-professional fallback. Pure: no side effects beyond a
    /// debug log on the matched topic.
    pub fn reply_to(&self, input: &str) -> &str {
        let input_lower = input.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&input_lower) {
                debug!(topic = %rule.topic, "Input matched response rule");
                return &rule.reply;
            }
        }
        debug!("No response rule matched, using fallback");
        &self.fallback
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for ResponseMatcher {
    fn default() -> Self {
        Self::default_rules()
    }
}
