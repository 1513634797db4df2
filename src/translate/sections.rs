//! Section extraction from model output.
//!
//! Two response shapes are understood. A structured body carrying one field
//! per section is used directly. Plain text is scanned line by line for the
//! labeled headers the prompt asks for:
//!
//! - a line whose lowercase form contains the keyword starts collection and is
//!   itself skipped (so a repeated keyword line is skipped as well);
//! - while collecting, a line starting with `GLOSSARY`, `CULTURAL` or
//!   `TECHNICAL` ends the scan;
//! - blank lines are ignored and kept lines are trimmed.
//!
//! Reordered sections still parse as long as each one is followed by one of
//! those stop headers or the end of the text. A new section header must be
//! added to [`STOP_HEADERS`] or it will bleed into the preceding section.

use super::interface::{SectionPayload, TranslationResult};

const STOP_HEADERS: [&str; 3] = ["GLOSSARY", "CULTURAL", "TECHNICAL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    TranslatedContent,
    Glossary,
    CulturalNotes,
    TechnicalNotes,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::TranslatedContent,
        Section::Glossary,
        Section::CulturalNotes,
        Section::TechnicalNotes,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Section::TranslatedContent => "translated content",
            Section::Glossary => "glossary",
            Section::CulturalNotes => "cultural context",
            Section::TechnicalNotes => "technical accuracy",
        }
    }

    pub fn placeholder(self) -> String {
        not_found(self.keyword())
    }
}

/// Collect the lines belonging to the section labeled by `keyword`.
pub fn extract_section(text: &str, keyword: &str) -> String {
    let keyword = keyword.to_lowercase();
    let mut collected: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in text.trim().split('\n') {
        if line.to_lowercase().contains(&keyword) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if STOP_HEADERS.iter().any(|header| line.starts_with(header)) {
            break;
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            collected.push(trimmed);
        }
    }

    if collected.is_empty() {
        not_found(&keyword)
    } else {
        collected.join("\n")
    }
}

fn not_found(keyword: &str) -> String {
    format!("{} section not found.", capitalize(keyword))
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The four section bodies, in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub translated_text: String,
    pub glossary: String,
    pub cultural_notes: String,
    pub technical_notes: String,
}

impl Sections {
    pub fn from_text(raw: &str) -> Self {
        let [translated_text, glossary, cultural_notes, technical_notes] =
            Section::ALL.map(|section| extract_section(raw, section.keyword()));
        Self {
            translated_text,
            glossary,
            cultural_notes,
            technical_notes,
        }
    }

    pub fn from_payload(payload: SectionPayload) -> Self {
        let pick = |value: Option<String>, section: Section| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| section.placeholder())
        };
        Self {
            translated_text: pick(payload.translated_content, Section::TranslatedContent),
            glossary: pick(payload.glossary, Section::Glossary),
            cultural_notes: pick(payload.cultural_notes, Section::CulturalNotes),
            technical_notes: pick(payload.technical_notes, Section::TechnicalNotes),
        }
    }

    pub fn into_result(
        self,
        source_language: &str,
        target_language: &str,
        subject: &str,
    ) -> TranslationResult {
        TranslationResult {
            translated_text: self.translated_text,
            glossary: self.glossary,
            cultural_notes: self.cultural_notes,
            technical_notes: self.technical_notes,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            subject: subject.to_string(),
        }
    }
}
