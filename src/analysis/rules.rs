use regex::Regex;

/// A (pattern, label) pair in an ordered rule table
///
/// Tables of these are evaluated first-match-wins so the tie-break order is
/// visible in the table itself rather than buried in conditionals.
pub struct LabelRule {
    pattern: Regex,
    label: &'static str,
}

impl LabelRule {
    /// Compile a rule from a pattern literal. Panics on an invalid pattern,
    /// which only happens for a malformed hardcoded table entry.
    pub fn new(pattern: &str, label: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            label,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Evaluate an ordered rule table against the text, stopping at the first
/// pattern that matches
pub fn first_label(rules: &[LabelRule], text: &str) -> Option<&'static str> {
    rules.iter().find(|rule| rule.matches(text)).map(|rule| rule.label)
}

/// Ordered set of phrases: preserves first-seen order, rejects exact
/// (case-sensitive) duplicates
#[derive(Debug, Clone, Default)]
pub struct PhraseSet {
    phrases: Vec<String>,
}

impl PhraseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase if not already present; returns whether it was added
    pub fn insert(&mut self, phrase: &str) -> bool {
        if self.phrases.iter().any(|existing| existing == phrase) {
            return false;
        }
        self.phrases.push(phrase.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.phrases
    }
}
