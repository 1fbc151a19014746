use serde::{Deserialize, Serialize};

/// A known quotation. Two quotes are the same quote when their bodies match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    pub body: String,
    pub author: String,
    #[serde(rename = "category", default)]
    pub categories: Vec<String>,
}

impl Quote {
    pub fn new(body: impl Into<String>, author: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            body: body.into(),
            author: author.into(),
            categories,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

impl PartialEq for Quote {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

impl Eq for Quote {}

impl std::hash::Hash for Quote {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.body.hash(state);
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "body: {}, author: {}, category: {}",
            self.body,
            self.author,
            self.categories.join(", ")
        )
    }
}
