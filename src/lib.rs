//! ra-portfolio: single-page personal portfolio site.
//!
//! A Leptos CSR app: animated constellation background, scroll-aware navbar,
//! static content sections, and a floating chat widget backed by a hosted
//! language-model API.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub mod chat;
pub mod components;
pub mod content;

use components::chatbot::ChatBot;
use components::constellation::Constellation;
use components::navbar::Navbar;
use components::sections::{Contact, Footer, Hero, Projects, Skills, Timeline};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ra-portfolio: logging initialized");
}

/// Reveal-on-scroll: add the `active` class to `.reveal` elements once they
/// intersect the viewport.
fn observe_reveals() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};

	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		|entries: js_sys::Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let _ = entry.target().class_list().add_1("active");
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(0.1));
	let Ok(observer) =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
	else {
		return;
	};

	if let Ok(elements) = document.query_selector_all(".reveal") {
		for i in 0..elements.length() {
			if let Some(node) = elements.item(i) {
				if let Ok(element) = node.dyn_into::<web_sys::Element>() {
					observer.observe(&element);
				}
			}
		}
	}

	// `on_cleanup` requires `Send + Sync`; the wasm types captured here are
	// neither, but the app is single-threaded, so `SendWrapper` is sound.
	let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(move || {
		observer.disconnect();
		drop(callback);
	});
	on_cleanup(move || cleanup.take()());
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Elements exist only after the first render.
	Effect::new(move |_| observe_reveals());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Richard Akintunde — System Architect" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<Constellation />
			<Navbar />
			<main>
				<Hero />
				<Skills />
				<Projects />
				<Timeline />
				<Contact />
			</main>
			<Footer />
			<ChatBot />
		</div>
	}
}
