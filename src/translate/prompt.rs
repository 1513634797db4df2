use super::interface::TranslationRequest;

/// Build the instruction string sent to the generation model.
///
/// The trailing template fixes the order of the four output sections; the
/// section extractor depends on that order.
pub fn build_prompt(request: &TranslationRequest) -> String {
    let TranslationRequest {
        source_language,
        target_language,
        subject,
        content_type,
        academic_level,
        ..
    } = request;

    let mut prompt = format!(
        "You are an expert academic translator specializing in {subject} education.

TASK: Translate the following course content from {source_language} to {target_language}.

CONTEXT:
- Subject: {subject}
- Content Type: {content_type}
- Academic Level: {academic_level}

IMPORTANT REQUIREMENTS:
1. Maintain technical accuracy and educational context
2. Use appropriate academic terminology for {subject}
3. Preserve pedagogical structure and learning objectives
4. Ensure cultural sensitivity and regional language nuances
5. Include subject-specific glossary terms where applicable

CONTENT TO TRANSLATE:
{text}
",
        text = request.text(),
    );

    if let Some(filename) = &request.document_filename {
        prompt.push_str(&format!(
            "\n\nDOCUMENT REFERENCE: A document named '{filename}' has been uploaded for translation."
        ));
    }

    if let Some(feedback) = &request.feedback {
        prompt.push_str(&format!(
            "\n\nUSER FEEDBACK: \"{feedback}\". Please incorporate these suggestions in your translation."
        ));
    }

    prompt.push_str(&format!(
        "

ACADEMIC CONTEXT:
- Subject-specific terminology for {subject}
- {target_language} curriculum frameworks
- Educational standards for {academic_level} level
- Regional language variations and cultural context

TRANSLATION GUIDELINES:
1. Provide the translated content
2. Include a glossary of key terms
3. Add cultural context notes where relevant
4. Maintain original formatting and structure

Please provide the response in this exact format:
TRANSLATED CONTENT:
[translated text here]

GLOSSARY OF KEY TERMS:
[glossary items here]

CULTURAL CONTEXT NOTES:
[cultural notes here]

TECHNICAL ACCURACY NOTES:
[technical notes here]
"
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TranslationRequest {
        TranslationRequest {
            source_language: "English".to_string(),
            target_language: "Hindi".to_string(),
            subject: "Biology".to_string(),
            content_type: "Lecture Notes".to_string(),
            academic_level: "Undergraduate".to_string(),
            text_content: Some("Cells are the unit of life.".to_string()),
            document_filename: None,
            feedback: None,
        }
    }

    #[test]
    fn includes_metadata_and_content() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("specializing in Biology education"));
        assert!(prompt.contains("from English to Hindi"));
        assert!(prompt.contains("- Content Type: Lecture Notes"));
        assert!(prompt.contains("- Academic Level: Undergraduate"));
        assert!(prompt.contains("Cells are the unit of life."));
        assert!(!prompt.contains("DOCUMENT REFERENCE"));
        assert!(!prompt.contains("USER FEEDBACK"));
    }

    #[test]
    fn sections_requested_in_fixed_order() {
        let prompt = build_prompt(&request());
        let positions: Vec<usize> = [
            "TRANSLATED CONTENT:",
            "GLOSSARY OF KEY TERMS:",
            "CULTURAL CONTEXT NOTES:",
            "TECHNICAL ACCURACY NOTES:",
        ]
        .iter()
        .map(|header| prompt.find(header).expect("header present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn document_and_feedback_notes() {
        let mut req = request();
        req.document_filename = Some("week1.pdf".to_string());
        req.feedback = Some("Use simpler words".to_string());
        let prompt = build_prompt(&req);
        assert!(prompt.contains("A document named 'week1.pdf' has been uploaded"));
        assert!(prompt.contains("USER FEEDBACK: \"Use simpler words\"."));
        assert!(prompt.find("DOCUMENT REFERENCE").unwrap() < prompt.find("USER FEEDBACK").unwrap());
        assert!(prompt.find("USER FEEDBACK").unwrap() < prompt.find("ACADEMIC CONTEXT").unwrap());
    }
}
