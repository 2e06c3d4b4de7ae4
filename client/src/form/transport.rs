use crate::error::SubmitError;
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use waitlist_shared::messages::registration::RegistrationRequest;

/// The status and body of a reply from the registration endpoint, before interpretation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawResponse {
	pub status: u16,
	pub body: String,
}

/// Sends a registration to the server.
///
/// The browser implementation is [`FetchTransport`]; anything else only exists to stand in for the server.
pub trait RegistrationTransport {
	fn send<'a>(&'a self, request: &'a RegistrationRequest) -> LocalBoxFuture<'a, Result<RawResponse, SubmitError>>;
}

/// Posts registrations as JSON using the browser's fetch API
pub struct FetchTransport {
	endpoint: String,
}

impl FetchTransport {
	pub fn new(endpoint: &str) -> Self {
		Self {
			endpoint: endpoint.to_string(),
		}
	}
}

impl RegistrationTransport for FetchTransport {
	fn send<'a>(&'a self, request: &'a RegistrationRequest) -> LocalBoxFuture<'a, Result<RawResponse, SubmitError>> {
		async move {
			// Sets the JSON content type along with the body
			let response = Request::post(&self.endpoint).json(request)?.send().await?;
			let status = response.status();
			let body = response.text().await?;
			Ok(RawResponse { status, body })
		}
		.boxed_local()
	}
}
