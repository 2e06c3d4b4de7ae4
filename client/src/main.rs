// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod config;
mod error;
mod form;
mod scroll;
use config::PageConfig;

fn main() {
	console_error_panic_hook::set_once();
	let log_level = if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));

	let Some(window) = web_sys::window() else {
		log::error!("Unable to load: no browser window context");
		return;
	};
	let Some(document) = window.document() else {
		log::error!("Unable to load: {}", error::DomError::NoDocument);
		return;
	};
	let config = PageConfig::default();

	// The handles own the event listeners, which have to outlive main
	match form::initialize(&document, &config) {
		Ok(Some(handle)) => {
			handle.controller().reset();
			std::mem::forget(handle);
		}
		Ok(None) => (),
		Err(error) => log::error!("Unable to set up the waitlist form: {}", error),
	}

	match scroll::initialize(&window, &config) {
		Ok(handle) => {
			log::debug!("Smooth scrolling enabled for {} in-page links", handle.anchor_count());
			std::mem::forget(handle);
		}
		Err(error) => log::error!("Unable to set up smooth scrolling: {}", error),
	}
}
