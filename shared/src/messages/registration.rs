// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Path of the endpoint that accepts waitlist registrations
pub const REGISTER_ENDPOINT: &str = "/api/register";

/// Data sent by the client to join the waitlist
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
	pub full_name: String,
	pub email: String,
}

/// Response data from the server for a registration attempt
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationResponse {
	pub success: bool,
	pub message: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_uses_wire_field_names() {
		let request = RegistrationRequest {
			full_name: String::from("Jane Doe"),
			email: String::from("jane@example.com"),
		};
		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(json, serde_json::json!({ "fullName": "Jane Doe", "email": "jane@example.com" }));
	}

	#[test]
	fn response_rejects_missing_fields() {
		let result: Result<RegistrationResponse, _> = serde_json::from_str(r#"{"message":"hi"}"#);
		assert!(result.is_err());
	}
}
