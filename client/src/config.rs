use waitlist_shared::messages::registration::REGISTER_ENDPOINT;

/// Height of the fixed page header, subtracted when scrolling to an anchor target
pub const HEADER_OFFSET: f64 = 70.0;

pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Class the page stylesheet uses to hide an element
pub const HIDDEN_CLASS: &str = "d-none";

/// Class the page stylesheet uses to mark an input as invalid
pub const INVALID_CLASS: &str = "is-invalid";

/// Settings for the page behaviors set up at startup
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
	pub endpoint: String,
	pub header_offset: f64,
	pub fallback_message: String,
	pub hidden_class: String,
	pub invalid_class: String,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			endpoint: String::from(REGISTER_ENDPOINT),
			header_offset: HEADER_OFFSET,
			fallback_message: String::from(FALLBACK_ERROR_MESSAGE),
			hidden_class: String::from(HIDDEN_CLASS),
			invalid_class: String::from(INVALID_CLASS),
		}
	}
}
