use serde::{Deserialize, Serialize};

/// A single course-content translation request, built from one form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub subject: String,
    pub content_type: String,
    pub academic_level: String,
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub document_filename: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl TranslationRequest {
    /// Pasted text, or an empty string when none was given.
    pub fn text(&self) -> &str {
        self.text_content.as_deref().unwrap_or("")
    }
}

/// Rendered output of one translation. All four section fields are always set,
/// either to extracted content or to a "not found" placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub glossary: String,
    pub cultural_notes: String,
    pub technical_notes: String,
    pub source_language: String,
    pub target_language: String,
    pub subject: String,
}

/// Output of the external generation backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    pub text: Option<String>,
    pub sections: Option<SectionPayload>,
}

impl Generation {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sections: None,
        }
    }

    /// True when neither a structured payload nor non-blank text is present.
    pub fn is_empty(&self) -> bool {
        let has_text = self.text.as_deref().is_some_and(|t| !t.trim().is_empty());
        let has_sections = self.sections.as_ref().is_some_and(|s| !s.is_empty());
        !has_text && !has_sections
    }
}

/// Structured per-section body, for upstreams that return one field per section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionPayload {
    #[serde(default)]
    pub translated_content: Option<String>,
    #[serde(default)]
    pub glossary: Option<String>,
    #[serde(default)]
    pub cultural_notes: Option<String>,
    #[serde(default)]
    pub technical_notes: Option<String>,
}

impl SectionPayload {
    pub fn is_empty(&self) -> bool {
        [
            &self.translated_content,
            &self.glossary,
            &self.cultural_notes,
            &self.technical_notes,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, |v| v.trim().is_empty()))
    }
}
