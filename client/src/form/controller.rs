// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::outcome::{interpret, Outcome};
use super::state::UiState;
use super::transport::RegistrationTransport;
use std::cell::{Cell, RefCell};
use std::fmt;
use waitlist_shared::validation::validate;

/// Something that can display the form's state
pub trait FormView {
	fn render(&self, state: &UiState);

	/// Empties the input fields after a successful registration
	fn clear_fields(&self);
}

/// Returned when a submission is attempted while another is still waiting on the server
#[derive(Debug, Eq, PartialEq)]
pub struct AlreadySubmitting;

impl fmt::Display for AlreadySubmitting {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "A registration is already being submitted")
	}
}

/// Holds the single submission slot for a form. Settling it frees the slot and shows the final state; dropping it
/// unsettled (the submission future was dropped early) frees the slot and puts the form back to idle.
struct InFlight<'a, T: RegistrationTransport, V: FormView> {
	form: &'a FormController<T, V>,
	settled: bool,
}

impl<'a, T: RegistrationTransport, V: FormView> InFlight<'a, T, V> {
	fn acquire(form: &'a FormController<T, V>) -> Option<Self> {
		if form.in_flight.replace(true) {
			None
		} else {
			Some(Self { form, settled: false })
		}
	}

	fn settle(mut self, state: UiState) {
		self.settled = true;
		self.form.in_flight.set(false);
		self.form.transition(state);
	}
}

impl<T: RegistrationTransport, V: FormView> Drop for InFlight<'_, T, V> {
	fn drop(&mut self) {
		self.form.in_flight.set(false);
		if !self.settled {
			log::debug!("Waitlist submission abandoned before the server answered");
			self.form.transition(UiState::Idle);
		}
	}
}

/// Runs the waitlist form: validation, submission, and the resulting state for the view.
pub struct FormController<T, V> {
	transport: T,
	view: V,
	fallback_message: String,
	state: RefCell<UiState>,
	in_flight: Cell<bool>,
}

impl<T: RegistrationTransport, V: FormView> FormController<T, V> {
	pub fn new(transport: T, view: V, fallback_message: &str) -> Self {
		Self {
			transport,
			view,
			fallback_message: fallback_message.to_string(),
			state: RefCell::new(UiState::Idle),
			in_flight: Cell::new(false),
		}
	}

	pub fn state(&self) -> UiState {
		self.state.borrow().clone()
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn is_submitting(&self) -> bool {
		self.in_flight.get()
	}

	/// Hides any banners and field errors. Does nothing while a submission is in flight.
	pub fn reset(&self) {
		if self.is_submitting() {
			log::debug!("Not resetting the waitlist form while a submission is in flight");
			return;
		}
		self.transition(UiState::Idle);
	}

	/// Validates the field values and, if they pass, sends the registration and shows the result.
	///
	/// Returns the state the form ends in.
	///
	/// # Errors
	///
	/// Only when another submission is still waiting on the server; nothing about the form changes in that case.
	pub async fn submit(&self, full_name: &str, email: &str) -> Result<UiState, AlreadySubmitting> {
		let Some(token) = InFlight::acquire(self) else {
			log::debug!("Ignoring waitlist submission: {}", AlreadySubmitting);
			return Err(AlreadySubmitting);
		};

		self.transition(UiState::Idle);

		let request = match validate(full_name, email) {
			Ok(request) => request,
			Err(errors) => {
				token.settle(UiState::FieldErrors(errors));
				return Ok(self.state());
			}
		};

		self.transition(UiState::Submitting);
		let result = self
			.transport
			.send(&request)
			.await
			.and_then(|response| interpret(&response));

		match result {
			Ok(Outcome::Registered(message)) => {
				token.settle(UiState::Success(message));
				self.view.clear_fields();
			}
			Ok(Outcome::Rejected(message)) => {
				log::info!("Waitlist registration rejected: {}", message);
				token.settle(UiState::Error(message));
			}
			Err(error) => {
				log::error!("Waitlist registration failed: {}", error);
				token.settle(UiState::Error(self.fallback_message.clone()));
			}
		}
		Ok(self.state())
	}

	fn transition(&self, state: UiState) {
		self.view.render(&state);
		*self.state.borrow_mut() = state;
	}
}
