use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use super::layout::KeyLayout;
use super::model::build_model;
use super::palette::BACKDROP;
use super::render;
use super::scale::{self, SurfaceSize};
use super::sequence::InputSequence;
use super::types::Token;

/// Keypad order: 1-9 in three rows, 0 centered underneath.
const KEYPAD: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	keypad: HtmlElement,
}

impl CanvasSurface {
	fn measure(&self, window: &Window) -> SurfaceSize {
		SurfaceSize::new(
			self.keypad.client_width() as f64,
			self.keypad.client_height() as f64,
			scale::current_scale(window),
		)
	}

	fn refit(&self, window: &Window) -> Option<SurfaceSize> {
		let size = self.measure(window);
		match scale::fit_canvas(&self.canvas, &self.ctx, size) {
			Ok(()) => {
				debug!(
					"Surface fitted to {}x{} px (scale {})",
					size.pixel_width(),
					size.pixel_height(),
					size.scale
				);
				Some(size)
			}
			Err(err) => {
				warn!("Failed to fit pattern surface: {:?}", err);
				None
			}
		}
	}
}

/// Numbered keypad with a canvas overlay that draws the entered pattern.
#[component]
pub fn PatternLockCanvas() -> impl IntoView {
	let keypad_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (sequence, set_sequence) = signal(InputSequence::default());
	let (text, set_text) = signal(String::new());
	let (surface_size, set_surface_size) = signal(None::<SurfaceSize>);

	let surface: Rc<RefCell<Option<CanvasSurface>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (surface_init, resize_cb_init) = (surface.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let (Some(keypad), Some(canvas)) = (keypad_ref.get(), canvas_ref.get()) else {
			return;
		};
		if surface_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let keypad: HtmlElement = keypad.into();
		let canvas: HtmlCanvasElement = canvas.into();

		let ctx = match canvas.get_context("2d") {
			Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>().ok(),
			_ => None,
		};
		let Some(ctx) = ctx else {
			warn!("2d canvas context unavailable; pattern will not be drawn");
			return;
		};

		if let Err(err) = keypad.style().set_property("background-color", BACKDROP.as_str()) {
			warn!("Failed to set keypad backdrop: {:?}", err);
		}

		let fitted = CanvasSurface {
			canvas,
			ctx,
			keypad,
		};
		let size = fitted.refit(&window);
		*surface_init.borrow_mut() = Some(fitted);
		set_surface_size.set(size);

		let surface_resize = surface_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			// Refit before the repaint so key centers and pixels agree.
			if let Some(ref s) = *surface_resize.borrow() {
				set_surface_size.set(s.refit(&win));
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			if let Some(viewport) = window.visual_viewport() {
				let _ =
					viewport.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let surface_paint = surface.clone();
	Effect::new(move |_| {
		let sequence = sequence.get();
		if surface_size.get().is_none() {
			return;
		}
		let guard = surface_paint.borrow();
		let Some(s) = guard.as_ref() else {
			return;
		};
		let layout = KeyLayout::snapshot(&s.keypad);
		let model = build_model(sequence.tokens(), |token| layout.center_of(token));
		debug!(
			"Rebuilt pattern: {} tokens, {} nodes, {} lines",
			sequence.len(),
			model.nodes.len(),
			model.lines.len()
		);
		if let Err(err) = render::paint(&s.ctx, &model) {
			warn!("Failed to paint pattern: {:?}", err);
		}
	});

	let push_token = move |token: Token| {
		set_sequence.update(|seq| seq.push(token));
		set_text.set(sequence.get_untracked().to_string());
	};

	let on_input = move |ev: Event| {
		let raw = event_target_value(&ev);
		set_sequence.update(|seq| seq.replace_from_text(&raw));
		set_text.set(raw);
	};

	let on_clear = move |_: MouseEvent| {
		set_sequence.update(InputSequence::clear);
		set_text.set(String::new());
	};

	let keys = KEYPAD
		.iter()
		.filter_map(|&digit| Token::from_char(digit))
		.map(|token| {
			view! {
				<button
					class="key"
					data-number=token.to_string()
					on:click=move |_| push_token(token)
				>
					{token.to_string()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="pattern-lock">
			<div class="keypad" node_ref=keypad_ref>
				{keys}
				<canvas node_ref=canvas_ref class="pattern-canvas" />
			</div>
			<div class="pattern-controls">
				<input
					type="text"
					inputmode="numeric"
					class="number-display"
					placeholder="Tap keys or type digits"
					prop:value=move || text.get()
					on:input=on_input
				/>
				<button class="clear" on:click=on_clear>
					"Clear"
				</button>
			</div>
		</div>
	}
}
