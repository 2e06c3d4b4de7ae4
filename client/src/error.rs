use std::fmt;

/// Failures between sending a registration and understanding the reply
#[derive(Debug)]
pub enum SubmitError {
	Transport(gloo_net::Error),
	Decode(serde_json::Error),
	Status(u16),
}

impl From<gloo_net::Error> for SubmitError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Transport(error)
	}
}

impl From<serde_json::Error> for SubmitError {
	fn from(error: serde_json::Error) -> Self {
		Self::Decode(error)
	}
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transport(error) => write!(f, "Failed to reach the registration endpoint: {}", error),
			Self::Decode(error) => write!(f, "The registration response was malformed: {}", error),
			Self::Status(status) => write!(f, "The registration endpoint answered with HTTP {}", status),
		}
	}
}

/// Problems binding to the page's elements
#[derive(Debug, Eq, PartialEq)]
pub enum DomError {
	NoDocument,
	MissingElement(&'static str),
	WrongElementType(&'static str),
	Listener(String),
}

impl fmt::Display for DomError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoDocument => write!(f, "The browser document is unavailable"),
			Self::MissingElement(id) => write!(f, "The page has no element with ID \"{}\"", id),
			Self::WrongElementType(id) => write!(f, "The element with ID \"{}\" is not of the expected type", id),
			Self::Listener(error) => write!(f, "Failed to attach an event listener: {}", error),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_errors_convert_with_question_mark() {
		fn parse() -> Result<serde_json::Value, SubmitError> {
			Ok(serde_json::from_str("<html>")?)
		}
		assert!(matches!(parse(), Err(SubmitError::Decode(_))));
	}

	#[test]
	fn messages_name_the_problem() {
		assert_eq!(
			SubmitError::Status(502).to_string(),
			"The registration endpoint answered with HTTP 502"
		);
		assert_eq!(
			DomError::MissingElement("submitButton").to_string(),
			"The page has no element with ID \"submitButton\""
		);
	}
}
