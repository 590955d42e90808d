//! Wire shapes of the conversational API

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    prompt: Prompt<'a>,
}

#[derive(Debug, Serialize)]
struct Prompt<'a> {
    text: &'a str,
}

/// `{"prompt": {"text": <prompt>}}`
pub fn request_body(prompt: &str) -> serde_json::Value {
    serde_json::to_value(MessageRequest {
        prompt: Prompt { text: prompt },
    })
    .unwrap_or_else(|_| serde_json::json!({ "prompt": { "text": prompt } }))
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// `generateMessage` candidates carry a plain string; `generateContent`
/// candidates carry `{ "parts": [{ "text": ... }] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CandidateContent {
    Text(String),
    Parts { parts: Vec<Part> },
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl Candidate {
    fn into_text(self) -> Option<String> {
        match self.content {
            Some(CandidateContent::Text(text)) => return Some(text),
            Some(CandidateContent::Parts { parts }) => {
                let texts: Vec<String> = parts.into_iter().filter_map(|p| p.text).collect();
                if !texts.is_empty() {
                    return Some(texts.concat());
                }
            }
            None => {}
        }
        self.output.or(self.text)
    }
}

/// Text of the first candidate, verbatim. `None` when the body is not JSON,
/// has no candidates, or the first candidate carries no text.
pub fn first_candidate_text(body: &str) -> Option<String> {
    let response: MessageResponse = serde_json::from_str(body).ok()?;
    response.candidates.into_iter().next()?.into_text()
}
