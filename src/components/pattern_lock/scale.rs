//! Maps the logical (CSS pixel) drawing space onto the canvas backing store.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Logical size of the drawing surface and the factor to physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	pub css_width: f64,
	pub css_height: f64,
	pub scale: f64,
}

impl SurfaceSize {
	pub fn new(css_width: f64, css_height: f64, scale: f64) -> Self {
		let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
		Self {
			css_width: css_width.max(0.0),
			css_height: css_height.max(0.0),
			scale,
		}
	}

	pub fn pixel_width(&self) -> u32 {
		(self.css_width * self.scale).round().max(1.0) as u32
	}

	pub fn pixel_height(&self) -> u32 {
		(self.css_height * self.scale).round().max(1.0) as u32
	}
}

/// Device pixel ratio combined with pinch zoom. Zooming out below 1.0 never
/// shrinks the backing store.
pub fn combined_scale(device_pixel_ratio: f64, viewport_zoom: Option<f64>) -> f64 {
	let zoom = viewport_zoom.filter(|z| z.is_finite()).unwrap_or(1.0).max(1.0);
	let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
		device_pixel_ratio
	} else {
		1.0
	};
	dpr * zoom
}

pub fn current_scale(window: &Window) -> f64 {
	combined_scale(
		window.device_pixel_ratio(),
		window.visual_viewport().map(|viewport| viewport.scale()),
	)
}

/// Resets the canvas pixel dimensions and transform so that drawing in CSS
/// pixels lands on physical pixels. Resizing also wipes the canvas.
pub fn fit_canvas(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	size: SurfaceSize,
) -> Result<(), JsValue> {
	canvas.set_width(size.pixel_width());
	canvas.set_height(size.pixel_height());
	let style = canvas.style();
	style.set_property("width", &format!("{}px", size.css_width))?;
	style.set_property("height", &format!("{}px", size.css_height))?;
	ctx.set_transform(size.scale, 0.0, 0.0, size.scale, 0.0, 0.0)
}
