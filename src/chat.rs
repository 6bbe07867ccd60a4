//! Chat completion service for the portfolio assistant.
//!
//! Stateless request/response collaborator: prior turns plus the new user
//! text go to the hosted Gemini `generateContent` endpoint, the first
//! candidate's text comes back. Every failure mode degrades to a fixed
//! fallback string so the widget never surfaces an error.

use log::warn;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::{Request, RequestInit, Response};

use crate::content::{EXPERIENCES, PERSONAL_INFO, PROJECTS, SKILLS};

/// Who authored a transcript turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
	/// The site visitor.
	User,
	/// The portfolio assistant.
	Assistant,
}

/// One transcript turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
	/// Turn author.
	pub role: Role,
	/// Turn text.
	pub content: String,
}

const MODEL: &str = "gemini-3-flash-preview";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Shown in place of a reply whenever the completion call fails.
pub const FALLBACK_REPLY: &str = "I'm sorry, I'm having a bit of trouble connecting to my brain right now. Please try again or reach out to Richard directly!";

/// Build-time API key. Absence is handled like any other request failure.
fn api_key() -> Option<&'static str> {
	option_env!("GEMINI_API_KEY")
}

#[derive(Serialize)]
struct GenerateRequest {
	system_instruction: SystemInstruction,
	contents: Vec<Content>,
}

#[derive(Serialize)]
struct SystemInstruction {
	parts: Vec<Part>,
}

#[derive(Serialize)]
struct Content {
	role: &'static str,
	parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
	text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
	content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
	#[serde(default)]
	parts: Vec<Part>,
}

fn system_prompt() -> String {
	let experience = EXPERIENCES
		.iter()
		.map(|e| {
			format!(
				"- {} at {} ({}): {}",
				e.role,
				e.company,
				e.period,
				e.description.join(" ")
			)
		})
		.collect::<Vec<_>>()
		.join("\n");
	let projects = PROJECTS
		.iter()
		.map(|p| format!("- {}: {}", p.title, p.description))
		.collect::<Vec<_>>()
		.join("\n");
	let skills = SKILLS
		.iter()
		.map(|s| format!("- {}: {}", s.category, s.items.join(", ")))
		.collect::<Vec<_>>()
		.join("\n");

	format!(
		"You are the AI assistant for {name}'s personal portfolio.\n\
		Your goal is to represent {name} professionally and answer questions about his experience, skills, projects, and contact information.\n\
		\n\
		{name}'s Information:\n\
		- Name: {name}\n\
		- Title: {title}\n\
		- Bio: {bio}\n\
		- LinkedIn: {linkedin}\n\
		\n\
		Experience Summary:\n{experience}\n\
		\n\
		Key Projects:\n{projects}\n\
		\n\
		Technical Skills:\n{skills}\n\
		\n\
		Guidelines:\n\
		1. Be friendly, polite, and professional.\n\
		2. If you don't know an answer, suggest the user contact {name} directly via LinkedIn or Email.\n\
		3. Keep responses concise and focused.\n\
		4. If asked about salary or personal life, politely decline to answer and steer back to his professional profile.\n\
		5. You can speak multiple languages if the user asks, but maintain the professional tone.",
		name = PERSONAL_INFO.name,
		title = PERSONAL_INFO.title,
		bio = PERSONAL_INFO.bio,
		linkedin = PERSONAL_INFO.linkedin,
	)
}

/// Map the transcript plus the new user turn into wire-format contents.
/// Assistant turns use the API's `model` role; the new turn goes last.
fn build_contents(history: &[Message], user_text: &str) -> Vec<Content> {
	history
		.iter()
		.map(|m| Content {
			role: match m.role {
				Role::User => "user",
				Role::Assistant => "model",
			},
			parts: vec![Part {
				text: m.content.clone(),
			}],
		})
		.chain(std::iter::once(Content {
			role: "user",
			parts: vec![Part {
				text: user_text.to_string(),
			}],
		}))
		.collect()
}

/// Request a reply for `user_text` given the prior transcript. Never fails:
/// any error is logged and replaced by [`FALLBACK_REPLY`].
pub async fn chat_reply(history: &[Message], user_text: &str) -> String {
	match request_completion(history, user_text).await {
		Ok(text) => text,
		Err(err) => {
			warn!("chat: completion failed: {err:?}");
			FALLBACK_REPLY.to_string()
		}
	}
}

async fn request_completion(history: &[Message], user_text: &str) -> Result<String, JsValue> {
	let key = api_key().ok_or_else(|| JsValue::from_str("GEMINI_API_KEY not set"))?;
	let payload = GenerateRequest {
		system_instruction: SystemInstruction {
			parts: vec![Part {
				text: system_prompt(),
			}],
		},
		contents: build_contents(history, user_text),
	};
	let body =
		serde_json::to_string(&payload).map_err(|e| JsValue::from_str(&e.to_string()))?;

	let opts = RequestInit::new();
	opts.set_method("POST");
	opts.set_body(&JsValue::from_str(&body));
	let url = format!("{API_BASE}/{MODEL}:generateContent?key={key}");
	let request = Request::new_with_str_and_init(&url, &opts)?;
	request.headers().set("Content-Type", "application/json")?;

	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let response: Response = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(JsValue::from_str(&format!("http status {}", response.status())));
	}

	let text = wasm_bindgen_futures::JsFuture::from(response.text()?)
		.await?
		.as_string()
		.ok_or_else(|| JsValue::from_str("response body is not text"))?;
	let parsed: GenerateResponse =
		serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;

	parsed
		.candidates
		.into_iter()
		.next()
		.and_then(|c| c.content.parts.into_iter().next())
		.map(|p| p.text)
		.ok_or_else(|| JsValue::from_str("empty candidate list"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn history_roles_map_to_wire_roles_and_new_turn_goes_last() {
		let history = vec![
			Message {
				role: Role::Assistant,
				content: "hello".into(),
			},
			Message {
				role: Role::User,
				content: "hi".into(),
			},
		];
		let contents = build_contents(&history, "what do you build?");
		assert_eq!(contents.len(), 3);
		assert_eq!(contents[0].role, "model");
		assert_eq!(contents[1].role, "user");
		assert_eq!(contents[2].role, "user");
		assert_eq!(contents[2].parts[0].text, "what do you build?");
	}

	#[test]
	fn system_prompt_carries_the_content_tables() {
		let prompt = system_prompt();
		assert!(prompt.contains(PERSONAL_INFO.name));
		assert!(prompt.contains(EXPERIENCES[0].company));
		assert!(prompt.contains(PROJECTS[0].title));
		assert!(prompt.contains(SKILLS[0].category));
	}

	#[test]
	fn request_payload_serializes_to_the_expected_shape() {
		let payload = GenerateRequest {
			system_instruction: SystemInstruction {
				parts: vec![Part { text: "sys".into() }],
			},
			contents: build_contents(&[], "ping"),
		};
		let json: serde_json::Value =
			serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();
		assert_eq!(json["system_instruction"]["parts"][0]["text"], "sys");
		assert_eq!(json["contents"][0]["role"], "user");
		assert_eq!(json["contents"][0]["parts"][0]["text"], "ping");
	}

	#[test]
	fn response_with_candidates_yields_the_first_part() {
		let raw = r#"{"candidates":[{"content":{"parts":[{"text":"reply"}],"role":"model"}}]}"#;
		let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
		let text = parsed
			.candidates
			.into_iter()
			.next()
			.and_then(|c| c.content.parts.into_iter().next())
			.map(|p| p.text);
		assert_eq!(text.as_deref(), Some("reply"));
	}

	#[test]
	fn empty_response_parses_without_candidates() {
		let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
		assert!(parsed.candidates.is_empty());
	}
}
