//! Light/dark theme switch, remembered across visits.

use leptos::prelude::*;
use log::debug;

const THEME_KEY: &str = "pattern-lock.theme";

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// Dark strokes on a light page.
	#[default]
	Light,
	/// Light text on a dark page.
	Dark,
}

impl ThemeMode {
	/// Value used for the `data-theme` attribute and in storage.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	/// Parses a stored value; anything unknown is `None`.
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim() {
			"light" => Some(ThemeMode::Light),
			"dark" => Some(ThemeMode::Dark),
			_ => None,
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}
}

fn load_theme_mode() -> ThemeMode {
	let Some(window) = web_sys::window() else {
		return ThemeMode::default();
	};
	let Ok(Some(storage)) = window.local_storage() else {
		return ThemeMode::default();
	};
	storage
		.get_item(THEME_KEY)
		.ok()
		.flatten()
		.and_then(|value| ThemeMode::parse(&value))
		.unwrap_or_default()
}

fn persist_theme_mode(mode: ThemeMode) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Ok(Some(storage)) = window.local_storage() else {
		return;
	};
	let _ = storage.set_item(THEME_KEY, mode.as_str());
}

fn apply_theme_mode(mode: ThemeMode) {
	let Some(root) = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.document_element())
	else {
		return;
	};
	let _ = root.set_attribute("data-theme", mode.as_str());
}

/// Button that flips the page theme and stores the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let (mode, set_mode) = signal(load_theme_mode());

	Effect::new(move |_| {
		let mode = mode.get();
		apply_theme_mode(mode);
		persist_theme_mode(mode);
		debug!("Theme set to {}", mode.as_str());
	});

	view! {
		<button
			class="theme-toggle"
			on:click=move |_| set_mode.update(|m| *m = m.toggled())
		>
			{move || match mode.get() {
				ThemeMode::Light => "Dark mode",
				ThemeMode::Dark => "Light mode",
			}}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stored_values_round_trip() {
		for mode in [ThemeMode::Light, ThemeMode::Dark] {
			assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
		}
		assert_eq!(ThemeMode::parse("system"), None);
		assert_eq!(ThemeMode::parse(""), None);
	}

	#[test]
	fn toggling_twice_is_identity() {
		assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
		assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
	}
}
