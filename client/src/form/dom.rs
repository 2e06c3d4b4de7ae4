// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::controller::FormView;
use super::state::{Presentation, UiState};
use crate::config::PageConfig;
use crate::error::DomError;
use wasm_bindgen::JsCast;
use waitlist_shared::validation::Field;
use web_sys::{
	Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
	ScrollLogicalPosition,
};

pub const FORM_ID: &str = "waitlistForm";
pub const SUBMIT_BUTTON_ID: &str = "submitButton";
pub const SUBMIT_SPINNER_ID: &str = "submitSpinner";
pub const SUCCESS_MESSAGE_ID: &str = "successMessage";
pub const ERROR_MESSAGE_ID: &str = "errorMessage";

struct FieldElements {
	field: Field,
	input: HtmlInputElement,
	feedback: Option<Element>,
}

/// Draws the form's state onto the elements already present in the page
pub struct DomFormView {
	form: HtmlFormElement,
	submit_button: HtmlButtonElement,
	spinner: Element,
	success_banner: Element,
	error_banner: Element,
	fields: Vec<FieldElements>,
	hidden_class: String,
	invalid_class: String,
}

impl DomFormView {
	/// Finds the form and its elements in the document.
	///
	/// Returns `Ok(None)` when the page has no waitlist form.
	///
	/// # Errors
	///
	/// When the form exists but one of the elements it works with is missing or of the wrong kind.
	pub fn locate(document: &Document, config: &PageConfig) -> Result<Option<Self>, DomError> {
		let Some(form) = document.get_element_by_id(FORM_ID) else {
			return Ok(None);
		};
		let form: HtmlFormElement = form.dyn_into().map_err(|_| DomError::WrongElementType(FORM_ID))?;

		let mut fields = Vec::with_capacity(Field::ALL.len());
		for field in Field::ALL {
			fields.push(FieldElements {
				field,
				input: required(document, field.id())?,
				feedback: document.get_element_by_id(&field.feedback_id()),
			});
		}

		Ok(Some(Self {
			form,
			submit_button: required(document, SUBMIT_BUTTON_ID)?,
			spinner: required(document, SUBMIT_SPINNER_ID)?,
			success_banner: required(document, SUCCESS_MESSAGE_ID)?,
			error_banner: required(document, ERROR_MESSAGE_ID)?,
			fields,
			hidden_class: config.hidden_class.clone(),
			invalid_class: config.invalid_class.clone(),
		}))
	}

	pub fn form(&self) -> &HtmlFormElement {
		&self.form
	}

	/// The current text of a field's input
	pub fn field_value(&self, field: Field) -> String {
		self.fields
			.iter()
			.find(|elements| elements.field == field)
			.map(|elements| elements.input.value())
			.unwrap_or_default()
	}

	fn apply(&self, presentation: &Presentation) {
		self.submit_button.set_disabled(presentation.submit_disabled);
		set_class(&self.spinner, &self.hidden_class, !presentation.spinner_visible);
		self.apply_banner(&self.success_banner, presentation.success_banner.as_deref());
		self.apply_banner(&self.error_banner, presentation.error_banner.as_deref());

		for elements in self.fields.iter() {
			let message = presentation.field_errors.get(elements.field);
			set_class(&elements.input, &self.invalid_class, message.is_some());
			if let (Some(feedback), Some(message)) = (&elements.feedback, message) {
				feedback.set_text_content(Some(message));
			}
		}
	}

	fn apply_banner(&self, banner: &Element, message: Option<&str>) {
		if let Some(message) = message {
			banner.set_text_content(Some(message));
		}
		set_class(banner, &self.hidden_class, message.is_none());
	}
}

impl FormView for DomFormView {
	fn render(&self, state: &UiState) {
		self.apply(&state.presentation());
		match state {
			UiState::Success(_) => scroll_to_center(&self.success_banner),
			UiState::Error(_) => scroll_to_center(&self.error_banner),
			_ => (),
		}
	}

	fn clear_fields(&self) {
		self.form.reset();
	}
}

fn required<T: JsCast>(document: &Document, id: &'static str) -> Result<T, DomError> {
	document
		.get_element_by_id(id)
		.ok_or(DomError::MissingElement(id))?
		.dyn_into()
		.map_err(|_| DomError::WrongElementType(id))
}

fn set_class(element: &Element, class: &str, enabled: bool) {
	let class_list = element.class_list();
	let result = if enabled {
		class_list.add_1(class)
	} else {
		class_list.remove_1(class)
	};
	if let Err(error) = result {
		log::warn!("Failed to update class \"{}\" on #{}: {:?}", class, element.id(), error);
	}
}

fn scroll_to_center(element: &Element) {
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Center);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}
