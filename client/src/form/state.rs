use waitlist_shared::validation::FieldErrors;

/// Where the form is in a submission attempt
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum UiState {
	#[default]
	Idle,
	FieldErrors(FieldErrors),
	Submitting,
	Success(String),
	Error(String),
}

/// What the page should show for a [`UiState`], independent of how it's drawn
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Presentation {
	pub submit_disabled: bool,
	pub spinner_visible: bool,
	pub success_banner: Option<String>,
	pub error_banner: Option<String>,
	pub field_errors: FieldErrors,
}

impl UiState {
	pub fn presentation(&self) -> Presentation {
		match self {
			Self::Idle => Presentation::default(),
			Self::FieldErrors(errors) => Presentation {
				field_errors: errors.clone(),
				..Presentation::default()
			},
			Self::Submitting => Presentation {
				submit_disabled: true,
				spinner_visible: true,
				..Presentation::default()
			},
			Self::Success(message) => Presentation {
				success_banner: Some(message.clone()),
				..Presentation::default()
			},
			Self::Error(message) => Presentation {
				error_banner: Some(message.clone()),
				..Presentation::default()
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use waitlist_shared::validation::{validate, Field};

	fn every_state() -> Vec<UiState> {
		vec![
			UiState::Idle,
			UiState::FieldErrors(validate("", "").unwrap_err()),
			UiState::Submitting,
			UiState::Success(String::from("You're on the list!")),
			UiState::Error(String::from("Email already registered")),
		]
	}

	#[test]
	fn never_shows_both_banners() {
		for state in every_state() {
			let presentation = state.presentation();
			assert!(
				presentation.success_banner.is_none() || presentation.error_banner.is_none(),
				"{:?}",
				state
			);
		}
	}

	#[test]
	fn submit_is_disabled_only_while_submitting() {
		for state in every_state() {
			let presentation = state.presentation();
			assert_eq!(presentation.submit_disabled, state == UiState::Submitting, "{:?}", state);
			assert_eq!(presentation.spinner_visible, presentation.submit_disabled);
		}
	}

	#[test]
	fn idle_clears_everything() {
		let presentation = UiState::Idle.presentation();
		assert!(presentation.field_errors.is_empty());
		assert!(presentation.success_banner.is_none());
		assert!(presentation.error_banner.is_none());
		assert!(!presentation.submit_disabled);
	}

	#[test]
	fn field_errors_are_carried_through() {
		let state = UiState::FieldErrors(validate("Jane Doe", "abc").unwrap_err());
		let presentation = state.presentation();
		assert!(presentation.field_errors.contains(Field::Email));
		assert!(!presentation.field_errors.contains(Field::FullName));
	}
}
