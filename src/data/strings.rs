use std::collections::HashMap;

const DEFAULT_STRINGS: [(&str, &str); 8] = [
    ("app_name", "GeoQuiz"),
    ("question_oceans", "The Pacific Ocean is larger than the Atlantic Ocean."),
    (
        "question_mideast",
        "The Suez Canal connects the Red Sea and the Indian Ocean.",
    ),
    ("question_africa", "The source of the Nile River is in Egypt."),
    (
        "question_americas",
        "The Amazon River is the longest river in the Americas.",
    ),
    (
        "question_asia",
        "Lake Baikal is the world's oldest and deepest freshwater lake.",
    ),
    ("correct_toast", "Correct!"),
    ("incorrect_toast", "Incorrect!"),
];

/// Display text keyed by resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    entries: HashMap<String, String>,
}

impl Strings {
    /// Text for `key`, or the key itself when no entry exists.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Layer `overrides` on top of the current entries.
    pub fn extend(&mut self, overrides: HashMap<String, String>) {
        self.entries.extend(overrides);
    }
}

impl Default for Strings {
    fn default() -> Self {
        let entries = DEFAULT_STRINGS
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        Self { entries }
    }
}
