use super::transport::RawResponse;
use crate::error::SubmitError;
use waitlist_shared::messages::registration::RegistrationResponse;

/// What the server decided about a registration
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
	Registered(String),
	Rejected(String),
}

/// Interprets a reply from the registration endpoint.
///
/// A well-formed `success: false` body is a rejection whatever the status code, since the server answers
/// duplicate registrations with a 400 and a message for the user.
///
/// # Errors
///
/// Any other non-2xx reply, or a 2xx reply whose body isn't a registration response.
pub fn interpret(response: &RawResponse) -> Result<Outcome, SubmitError> {
	let successful_status = (200..300).contains(&response.status);
	let body: Result<RegistrationResponse, _> = serde_json::from_str(&response.body);
	match body {
		Ok(body) if !body.success => Ok(Outcome::Rejected(body.message)),
		Ok(body) if successful_status => Ok(Outcome::Registered(body.message)),
		Err(error) if successful_status => Err(error.into()),
		_ => Err(SubmitError::Status(response.status)),
	}
}
