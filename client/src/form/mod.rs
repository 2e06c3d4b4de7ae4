// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::PageConfig;
use crate::error::DomError;
use std::rc::Rc;
use waitlist_shared::validation::Field;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

pub mod controller;
pub mod dom;
pub mod outcome;
pub mod state;
pub mod transport;

use controller::FormController;
use dom::DomFormView;
use transport::FetchTransport;

pub type WaitlistForm = FormController<FetchTransport, DomFormView>;

/// Keeps the waitlist form's controller and submit listener alive
pub struct FormHandle {
	controller: Rc<WaitlistForm>,
	_submit_listener: Closure<dyn FnMut(Event)>,
}

impl FormHandle {
	pub fn controller(&self) -> &WaitlistForm {
		&self.controller
	}
}

/// Binds the waitlist form in the document so its submissions go through the controller.
///
/// Returns `Ok(None)` when the page has no waitlist form.
///
/// # Errors
///
/// When the form is missing one of its elements or the listener can't be attached.
pub fn initialize(document: &Document, config: &PageConfig) -> Result<Option<FormHandle>, DomError> {
	let Some(view) = DomFormView::locate(document, config)? else {
		log::debug!("No waitlist form on this page");
		return Ok(None);
	};
	let form = view.form().clone();
	let controller = Rc::new(FormController::new(
		FetchTransport::new(&config.endpoint),
		view,
		&config.fallback_message,
	));

	let listener_controller = Rc::clone(&controller);
	let submit_listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		event.prevent_default();

		let full_name = listener_controller.view().field_value(Field::FullName);
		let email = listener_controller.view().field_value(Field::Email);
		let controller = Rc::clone(&listener_controller);
		spawn_local(async move {
			// Repeated submits are logged by the controller and otherwise ignored
			let _ = controller.submit(&full_name, &email).await;
		});
	});
	form.add_event_listener_with_callback("submit", submit_listener.as_ref().unchecked_ref())
		.map_err(|error| DomError::Listener(format!("{:?}", error)))?;

	log::debug!("Waitlist form bound to {}", config.endpoint);
	Ok(Some(FormHandle {
		controller,
		_submit_listener: submit_listener,
	}))
}
