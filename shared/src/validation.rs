// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Syntactic checks applied to the waitlist form before anything is sent to the server.

use crate::messages::registration::RegistrationRequest;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const FULL_NAME_MIN_LENGTH: usize = 2;

static EMAIL_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// An input field of the waitlist form
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
	FullName,
	Email,
}

impl Field {
	pub const ALL: [Field; 2] = [Field::FullName, Field::Email];

	/// The element ID of the input for this field
	pub fn id(&self) -> &'static str {
		match self {
			Self::FullName => "fullName",
			Self::Email => "email",
		}
	}

	/// The element ID of the inline message shown next to this field
	pub fn feedback_id(&self) -> String {
		format!("{}Feedback", self.id())
	}
}

/// Every problem found in one validation pass, keyed by field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors {
	errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn get(&self, field: Field) -> Option<&'static str> {
		self.errors.get(&field).copied()
	}

	pub fn contains(&self, field: Field) -> bool {
		self.errors.contains_key(&field)
	}

	fn insert(&mut self, field: Field, message: &'static str) {
		self.errors.insert(field, message);
	}
}

/// Checks the full name. The value is expected to be trimmed already.
pub fn check_full_name(full_name: &str) -> Result<(), &'static str> {
	if full_name.chars().count() < FULL_NAME_MIN_LENGTH {
		return Err("Please enter your full name");
	}
	Ok(())
}

/// Checks the email address against the basic `local@domain.tld` shape. The value is expected to be trimmed already.
pub fn check_email(email: &str) -> Result<(), &'static str> {
	if !EMAIL_PATTERN.is_match(email) {
		return Err("Please enter a valid email address");
	}
	Ok(())
}

/// Validates both form fields independently and builds the request from the trimmed values.
///
/// # Errors
///
/// Returns every failing field at once rather than stopping at the first one.
pub fn validate(full_name: &str, email: &str) -> Result<RegistrationRequest, FieldErrors> {
	let full_name = full_name.trim();
	let email = email.trim();

	let mut errors = FieldErrors::default();
	if let Err(message) = check_full_name(full_name) {
		errors.insert(Field::FullName, message);
	}
	if let Err(message) = check_email(email) {
		errors.insert(Field::Email, message);
	}

	if !errors.is_empty() {
		return Err(errors);
	}
	Ok(RegistrationRequest {
		full_name: full_name.to_string(),
		email: email.to_string(),
	})
}
