use leptos::prelude::*;

use crate::components::pattern_lock::PatternLockCanvas;
use crate::components::theme_toggle::ThemeToggle;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main class="pattern-page">
			<header class="pattern-header">
				<h1>"Pattern Lock"</h1>
				<ThemeToggle />
			</header>
			<p class="subtitle">"Tap the keys or type digits. Repeat visits add rings."</p>
			<PatternLockCanvas />
		</main>
	}
}
