use serde::{Deserialize, Serialize};

/// All words known for a single letter. `letter` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub letter: String,
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

impl WordRecord {
    pub fn new(letter: impl Into<String>, words: Vec<WordEntry>) -> Self {
        Self {
            letter: letter.into(),
            words,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    pub image_url: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            image_url: image_url.into(),
        }
    }
}
