//! Smooth scrolling for links to other parts of the same page.

use crate::config::PageConfig;
use crate::error::DomError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

const IN_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Keeps the anchor click listener alive
pub struct ScrollHandle {
	anchor_count: u32,
	_click_listener: Closure<dyn FnMut(Event)>,
}

impl ScrollHandle {
	pub fn anchor_count(&self) -> u32 {
		self.anchor_count
	}
}

/// Gets the selector for the element an in-page link points to, if the link has a fragment to follow
pub fn fragment_selector(href: &str) -> Option<&str> {
	match href.strip_prefix('#') {
		Some(id) if !id.is_empty() => Some(href),
		_ => None,
	}
}

/// Gets the window position that puts a target just below the fixed header
pub fn scroll_target_top(target_offset_top: f64, header_offset: f64) -> f64 {
	target_offset_top - header_offset
}

/// Makes every in-page link in the document scroll smoothly to its target instead of jumping.
///
/// # Errors
///
/// When the window has no document or a listener can't be attached.
pub fn initialize(window: &Window, config: &PageConfig) -> Result<ScrollHandle, DomError> {
	let document = window.document().ok_or(DomError::NoDocument)?;
	let header_offset = config.header_offset;

	let listener_window = window.clone();
	let listener_document = document.clone();
	let click_listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		event.prevent_default();

		let Some(anchor) = event.current_target().and_then(|target| target.dyn_into::<Element>().ok()) else {
			return;
		};
		let Some(href) = anchor.get_attribute("href") else {
			return;
		};
		let Some(selector) = fragment_selector(&href) else {
			return;
		};
		// Fragments that aren't valid selectors resolve to nothing, same as missing targets
		let Ok(Some(target)) = listener_document.query_selector(selector) else {
			log::debug!("In-page link target {} not found", href);
			return;
		};
		let Ok(target) = target.dyn_into::<HtmlElement>() else {
			return;
		};

		let options = ScrollToOptions::new();
		options.set_top(scroll_target_top(f64::from(target.offset_top()), header_offset));
		options.set_behavior(ScrollBehavior::Smooth);
		listener_window.scroll_to_with_scroll_to_options(&options);
	});

	let anchors = document
		.query_selector_all(IN_PAGE_LINK_SELECTOR)
		.map_err(|error| DomError::Listener(format!("{:?}", error)))?;
	for index in 0..anchors.length() {
		let Some(anchor) = anchors.item(index) else {
			continue;
		};
		anchor
			.add_event_listener_with_callback("click", click_listener.as_ref().unchecked_ref())
			.map_err(|error| DomError::Listener(format!("{:?}", error)))?;
	}

	Ok(ScrollHandle {
		anchor_count: anchors.length(),
		_click_listener: click_listener,
	})
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use super::*;
	use wasm_bindgen_test::*;
	use web_sys::EventInit;

	wasm_bindgen_test_configure!(run_in_browser);

	/// Dispatches a cancelable click, returning whether the default action was left alone
	fn click(element: &Element) -> bool {
		let init = EventInit::new();
		init.set_bubbles(true);
		init.set_cancelable(true);
		let event = Event::new_with_event_init_dict("click", &init).unwrap();
		element.dispatch_event(&event).unwrap()
	}

	#[wasm_bindgen_test]
	fn in_page_links_are_intercepted() {
		let window = web_sys::window().unwrap();
		let document = window.document().unwrap();
		document.body().unwrap().set_inner_html(
			r##"
			<a id="toFeatures" href="#features">Features</a>
			<a id="toNowhere" href="#missing">Missing</a>
			<a id="external" href="https://example.com/">Elsewhere</a>
			<div id="features" style="margin-top: 2000px">Features</div>
			"##,
		);

		let handle = initialize(&window, &PageConfig::default()).unwrap();
		assert_eq!(handle.anchor_count(), 2);

		let to_features = document.get_element_by_id("toFeatures").unwrap();
		assert!(!click(&to_features));
		let to_nowhere = document.get_element_by_id("toNowhere").unwrap();
		assert!(!click(&to_nowhere));
	}
}
