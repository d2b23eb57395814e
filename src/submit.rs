//! Contact form submission.
//!
//! The form posts a JSON payload to a mock email endpoint. The transport
//! contract is deliberately thin: POST JSON, any 2xx response counts as
//! delivered. Nothing else about the endpoint is assumed.

use std::fmt;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Relative endpoint the form posts to.
const ENDPOINT: &str = "/api/contact";

/// Structured contact message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
	pub name: String,
	pub email: String,
	pub message: String,
}

impl ContactPayload {
	/// A payload is sendable once every field has content.
	pub fn is_complete(&self) -> bool {
		!self.name.trim().is_empty()
			&& !self.email.trim().is_empty()
			&& !self.message.trim().is_empty()
	}
}

/// Why a submission failed.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
	/// Payload could not be serialized.
	Encode(String),
	/// The request never completed (offline, CORS, aborted).
	Network(String),
	/// The endpoint answered with a non-2xx status.
	Status(u16),
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SubmitError::Encode(e) => write!(f, "could not encode message: {e}"),
			SubmitError::Network(e) => write!(f, "transmission failed: {e}"),
			SubmitError::Status(code) => write!(f, "endpoint rejected message (status {code})"),
		}
	}
}

fn js_error(value: JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// POST the payload to the mock endpoint and await the verdict.
pub async fn send_contact(payload: &ContactPayload) -> Result<(), SubmitError> {
	let body = serde_json::to_string(payload).map_err(|e| SubmitError::Encode(e.to_string()))?;

	let opts = RequestInit::new();
	opts.set_method("POST");
	opts.set_body(&JsValue::from_str(&body));

	let request = Request::new_with_str_and_init(ENDPOINT, &opts)
		.map_err(|e| SubmitError::Network(js_error(e)))?;
	request
		.headers()
		.set("Content-Type", "application/json")
		.map_err(|e| SubmitError::Network(js_error(e)))?;

	let window = web_sys::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|e| SubmitError::Network(js_error(e)))?;
	let response: Response = response
		.dyn_into()
		.map_err(|e| SubmitError::Network(js_error(e)))?;

	if response.ok() {
		Ok(())
	} else {
		Err(SubmitError::Status(response.status()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn payload_serializes_to_flat_json() {
		let payload = ContactPayload {
			name: "Ada".into(),
			email: "ada@example.com".into(),
			message: "hello".into(),
		};
		let json = serde_json::to_string(&payload).unwrap();
		assert_eq!(
			json,
			r#"{"name":"Ada","email":"ada@example.com","message":"hello"}"#
		);
	}

	#[test]
	fn completeness_requires_every_field() {
		let mut payload = ContactPayload {
			name: "Ada".into(),
			email: "ada@example.com".into(),
			message: "hello".into(),
		};
		assert!(payload.is_complete());

		payload.message = "   ".into();
		assert!(!payload.is_complete());
	}

	#[test]
	fn errors_render_for_the_status_banner() {
		assert_eq!(
			SubmitError::Status(503).to_string(),
			"endpoint rejected message (status 503)"
		);
		assert!(
			SubmitError::Network("offline".into())
				.to_string()
				.contains("offline")
		);
	}
}
