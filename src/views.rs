use askama::Template;
use axum::http::StatusCode;

use crate::translate::{TranslationRequest, TranslationResult};

/// Languages offered as suggestions on the form. Any other value is accepted.
pub const LANGUAGES: &[&str] = &[
    "English", "Hindi", "Marathi", "Tamil", "Bengali", "Telugu", "Gujarati", "Kannada",
    "Malayalam", "Punjabi", "Urdu",
];

pub const CONTENT_TYPES: &[&str] = &[
    "Lecture Notes", "Textbook Chapter", "Assignment", "Quiz", "Syllabus", "Lab Manual",
];

pub const ACADEMIC_LEVELS: &[&str] = &[
    "Primary", "Secondary", "Higher Secondary", "Undergraduate", "Postgraduate",
];

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub languages: &'static [&'static str],
}

impl Default for HomeTemplate {
    fn default() -> Self {
        Self { languages: LANGUAGES }
    }
}

/// Values used to pre-fill the input form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub source_language: String,
    pub target_language: String,
    pub subject: String,
    pub content_type: String,
    pub academic_level: String,
    pub text_content: String,
    pub feedback: String,
}

#[derive(Template)]
#[template(path = "form.html")]
pub struct FormTemplate<'a> {
    pub values: &'a FormValues,
    pub notice: &'a str,
    pub languages: &'static [&'static str],
    pub content_types: &'static [&'static str],
    pub academic_levels: &'static [&'static str],
}

impl<'a> FormTemplate<'a> {
    pub fn new(values: &'a FormValues, notice: &'a str) -> Self {
        Self {
            values,
            notice,
            languages: LANGUAGES,
            content_types: CONTENT_TYPES,
            academic_levels: ACADEMIC_LEVELS,
        }
    }
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate<'a> {
    pub result: &'a TranslationResult,
    pub content_type: &'a str,
    pub academic_level: &'a str,
    pub text_content: &'a str,
    pub feedback: &'a str,
    pub document_filename: &'a str,
}

impl<'a> ResultTemplate<'a> {
    pub fn new(result: &'a TranslationResult, request: &'a TranslationRequest) -> Self {
        Self {
            result,
            content_type: &request.content_type,
            academic_level: &request.academic_level,
            text_content: request.text(),
            feedback: request.feedback.as_deref().unwrap_or(""),
            document_filename: request.document_filename.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    status: u16,
    reason: &'a str,
    message: &'a str,
}

/// Error page markup. Falls back to plain text if the template cannot render.
pub fn render_error(status: StatusCode, message: &str) -> String {
    let template = ErrorTemplate {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Error"),
        message,
    };
    template
        .render()
        .unwrap_or_else(|_| format!("{} {}", status, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_links_to_form() {
        let html = HomeTemplate::default().render().unwrap();
        assert!(html.contains("Telugu"));
        assert!(html.contains("href=\"/form\""));
    }

    #[test]
    fn form_prefills_and_escapes() {
        let values = FormValues {
            subject: "Physics".to_string(),
            feedback: "<b>more formal".to_string(),
            ..FormValues::default()
        };
        let html = FormTemplate::new(&values, "").render().unwrap();
        assert!(html.contains("value=\"Physics\""));
        assert!(html.contains("&lt;b&gt;more formal"));
        assert!(!html.contains("<b>more formal"));
        assert!(html.contains("action=\"/result\""));
        assert!(html.contains("enctype=\"multipart/form-data\""));
    }

    #[test]
    fn result_shows_sections_and_document() {
        let result = TranslationResult {
            translated_text: "Hola".to_string(),
            glossary: "- hola: hello".to_string(),
            cultural_notes: "- Spain".to_string(),
            technical_notes: "Technical accuracy section not found.".to_string(),
            source_language: "English".to_string(),
            target_language: "Spanish".to_string(),
            subject: "Greetings".to_string(),
        };
        let request = TranslationRequest {
            source_language: "English".to_string(),
            target_language: "Spanish".to_string(),
            subject: "Greetings".to_string(),
            content_type: "Quiz".to_string(),
            academic_level: "Primary".to_string(),
            text_content: Some("Hello".to_string()),
            document_filename: Some("quiz.pdf".to_string()),
            feedback: None,
        };
        let html = ResultTemplate::new(&result, &request).render().unwrap();
        for needle in ["Hola", "- hola: hello", "- Spain", "Technical accuracy section not found.", "quiz.pdf", "English", "Spanish"] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn error_page_carries_status_and_message() {
        let html = render_error(StatusCode::BAD_REQUEST, "Missing required field: subject");
        assert!(html.contains("400"));
        assert!(html.contains("Bad Request"));
        assert!(html.contains("Missing required field: subject"));
    }
}
