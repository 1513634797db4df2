use askama::Template;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::Html;
use std::collections::HashMap;
use tracing::info;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::translate::TranslationRequest;
use crate::utils::uploads::{existing_upload, store_upload};
use crate::views::{FormTemplate, FormValues, HomeTemplate, ResultTemplate};

const DOCUMENT_FIELD: &str = "course_document";

/// Hidden field the result page uses to carry an earlier upload into a resubmission
const PREVIOUS_DOCUMENT_FIELD: &str = "document_filename";

const FEEDBACK_NOTICE: &str =
    "Your previous request is filled in below. Adjust the feedback and submit to translate again.";

/// An uploaded file part as received, before sanitization.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Text fields and the optional document of one multipart submission.
#[derive(Debug, Default)]
pub struct SubmittedForm {
    fields: HashMap<String, String>,
    pub document: Option<UploadedFile>,
}

impl SubmittedForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = SubmittedForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if name == DOCUMENT_FIELD {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                // Browsers send an empty part when no file was chosen
                if !filename.is_empty() {
                    form.document = Some(UploadedFile { filename, data });
                }
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Trimmed value of a field, `None` when absent or blank.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn required(&self, name: &str) -> Result<String> {
        self.optional(name)
            .ok_or_else(|| AppError::MissingField(name.to_string()))
    }

    /// Build the request from the text fields, reporting the first required
    /// field that is missing. The document is attached by the caller.
    pub fn into_request(&self) -> Result<TranslationRequest> {
        Ok(TranslationRequest {
            source_language: self.required("source_language")?,
            target_language: self.required("target_language")?,
            subject: self.required("subject")?,
            content_type: self.required("content_type")?,
            academic_level: self.required("academic_level")?,
            text_content: self.optional("text_content"),
            document_filename: None,
            feedback: self.optional("feedback"),
        })
    }

    pub fn form_values(&self) -> FormValues {
        let get = |name: &str| self.optional(name).unwrap_or_default();
        FormValues {
            source_language: get("source_language"),
            target_language: get("target_language"),
            subject: get("subject"),
            content_type: get("content_type"),
            academic_level: get("academic_level"),
            text_content: get("text_content"),
            feedback: get("feedback"),
        }
    }
}

pub async fn home() -> Result<Html<String>> {
    Ok(Html(HomeTemplate::default().render()?))
}

pub async fn form_page() -> Result<Html<String>> {
    let values = FormValues::default();
    Ok(Html(FormTemplate::new(&values, "").render()?))
}

pub async fn result(State(state): State<AppState>, multipart: Multipart) -> Result<Html<String>> {
    let form = SubmittedForm::from_multipart(multipart).await?;
    let request = form.into_request()?;
    let upload_dir = state.config.system_config.upload_path();

    let document_filename = match &form.document {
        Some(doc) => store_upload(&upload_dir, &doc.filename, &doc.data).await?,
        None => match form.optional(PREVIOUS_DOCUMENT_FIELD) {
            Some(previous) => existing_upload(&upload_dir, &previous).await,
            None => None,
        },
    };

    let request = TranslationRequest {
        document_filename,
        ..request
    };
    info!(
        "Translating {} content from {} to {}",
        request.subject, request.source_language, request.target_language
    );

    let result = state.orchestrator.translate(&request).await;
    Ok(Html(ResultTemplate::new(&result, &request).render()?))
}

/// Re-open the form with a previous submission filled in, so the user can
/// revise the feedback and resubmit to `/result`.
pub async fn feedback(multipart: Multipart) -> Result<Html<String>> {
    let form = SubmittedForm::from_multipart(multipart).await?;
    let values = form.form_values();
    Ok(Html(FormTemplate::new(&values, FEEDBACK_NOTICE).render()?))
}
