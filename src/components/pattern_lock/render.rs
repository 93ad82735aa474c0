//! Paints a pattern model onto a 2D surface.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::types::{Color, PatternModel, Point};

/// Stroke width for lines and rings.
pub const LINE_WIDTH: f64 = 2.0;
/// Font for node labels.
pub const LABEL_FONT: &str = "14px sans-serif";

/// A 2D drawing target in logical coordinates.
pub trait Surface {
	/// Failure reported by the backend.
	type Error;

	/// Clears every pixel, ignoring any transform.
	fn clear(&self) -> Result<(), Self::Error>;
	/// Strokes a straight line, which may have zero length.
	fn stroke_line(&self, from: Point, to: Point, color: Color, width: f64)
	-> Result<(), Self::Error>;
	/// Strokes a circle outline without filling it.
	fn stroke_circle(
		&self,
		center: Point,
		radius: f64,
		color: Color,
		width: f64,
	) -> Result<(), Self::Error>;
	/// Text centered on `at` both horizontally and vertically.
	fn fill_label(&self, text: &str, at: Point, color: Color, font: &str)
	-> Result<(), Self::Error>;
}

/// Repaints the whole surface from the model: lines first, then circles,
/// then labels on top.
pub fn paint<S: Surface>(surface: &S, model: &PatternModel) -> Result<(), S::Error> {
	surface.clear()?;
	for line in &model.lines {
		surface.stroke_line(line.from, line.to, line.color, LINE_WIDTH)?;
	}
	for node in &model.nodes {
		for circle in &node.circles {
			surface.stroke_circle(node.center, circle.radius, circle.color, LINE_WIDTH)?;
		}
	}
	for node in &model.nodes {
		if let Some(color) = node.label_color() {
			surface.fill_label(&node.token.to_string(), node.center, color, LABEL_FONT)?;
		}
	}
	Ok(())
}

impl Surface for CanvasRenderingContext2d {
	type Error = JsValue;

	fn clear(&self) -> Result<(), JsValue> {
		let Some(canvas) = self.canvas() else {
			return Ok(());
		};
		self.save();
		self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
		self.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
		self.restore();
		Ok(())
	}

	fn stroke_line(&self, from: Point, to: Point, color: Color, width: f64) -> Result<(), JsValue> {
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.set_stroke_style_str(color.as_str());
		self.set_line_width(width);
		self.stroke();
		Ok(())
	}

	fn stroke_circle(
		&self,
		center: Point,
		radius: f64,
		color: Color,
		width: f64,
	) -> Result<(), JsValue> {
		self.begin_path();
		self.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
		self.set_stroke_style_str(color.as_str());
		self.set_line_width(width);
		self.stroke();
		Ok(())
	}

	fn fill_label(&self, text: &str, at: Point, color: Color, font: &str) -> Result<(), JsValue> {
		self.set_fill_style_str(color.as_str());
		self.set_font(font);
		self.set_text_align("center");
		self.set_text_baseline("middle");
		self.fill_text(text, at.x, at.y)
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;
	use std::convert::Infallible;

	use super::*;
	use crate::components::pattern_lock::model::build_model;
	use crate::components::pattern_lock::palette::color_for_step;
	use crate::components::pattern_lock::sequence::InputSequence;
	use crate::components::pattern_lock::types::Token;

	#[derive(Clone, Debug, PartialEq)]
	enum DrawOp {
		Clear,
		Line(Point, Point, Color, f64),
		Circle(Point, f64, Color, f64),
		Label(String, Point, Color, String),
	}

	#[derive(Default)]
	struct Recorder {
		ops: RefCell<Vec<DrawOp>>,
	}

	impl Recorder {
		fn take(&self) -> Vec<DrawOp> {
			self.ops.take()
		}
	}

	impl Surface for Recorder {
		type Error = Infallible;

		fn clear(&self) -> Result<(), Infallible> {
			self.ops.borrow_mut().push(DrawOp::Clear);
			Ok(())
		}

		fn stroke_line(&self, from: Point, to: Point, color: Color, width: f64) -> Result<(), Infallible> {
			self.ops.borrow_mut().push(DrawOp::Line(from, to, color, width));
			Ok(())
		}

		fn stroke_circle(
			&self,
			center: Point,
			radius: f64,
			color: Color,
			width: f64,
		) -> Result<(), Infallible> {
			self.ops
				.borrow_mut()
				.push(DrawOp::Circle(center, radius, color, width));
			Ok(())
		}

		fn fill_label(&self, text: &str, at: Point, color: Color, font: &str) -> Result<(), Infallible> {
			self.ops
				.borrow_mut()
				.push(DrawOp::Label(text.into(), at, color, font.into()));
			Ok(())
		}
	}

	fn model_for(text: &str) -> PatternModel {
		let layout: HashMap<Token, Point> = [('1', 10.0, 10.0), ('2', 20.0, 20.0), ('5', 50.0, 50.0)]
			.into_iter()
			.map(|(c, x, y)| (Token::from_char(c).unwrap(), Point { x, y }))
			.collect();
		let seq = InputSequence::from_text(text);
		build_model(seq.tokens(), |t| layout.get(&t).copied())
	}

	#[test]
	fn empty_model_only_clears() {
		let surface = Recorder::default();
		paint(&surface, &model_for("")).unwrap();
		assert_eq!(surface.take(), vec![DrawOp::Clear]);
	}

	#[test]
	fn paints_lines_then_circles_then_labels() {
		let surface = Recorder::default();
		paint(&surface, &model_for("121")).unwrap();

		let (p1, p2) = (Point { x: 10.0, y: 10.0 }, Point { x: 20.0, y: 20.0 });
		assert_eq!(
			surface.take(),
			vec![
				DrawOp::Clear,
				DrawOp::Line(p1, p2, color_for_step(1), LINE_WIDTH),
				DrawOp::Line(p2, p1, color_for_step(2), LINE_WIDTH),
				DrawOp::Circle(p1, 10.0, color_for_step(0), LINE_WIDTH),
				DrawOp::Circle(p1, 13.0, color_for_step(2), LINE_WIDTH),
				DrawOp::Circle(p2, 10.0, color_for_step(1), LINE_WIDTH),
				DrawOp::Label("1".into(), p1, color_for_step(2), LABEL_FONT.into()),
				DrawOp::Label("2".into(), p2, color_for_step(1), LABEL_FONT.into()),
			]
		);
	}

	#[test]
	fn repainting_is_idempotent() {
		let surface = Recorder::default();
		let model = model_for("1251215");
		paint(&surface, &model).unwrap();
		let first = surface.take();
		paint(&surface, &model).unwrap();
		assert_eq!(first, surface.take());
	}

	#[test]
	fn zero_length_self_loops_are_stroked() {
		let surface = Recorder::default();
		paint(&surface, &model_for("5555555555")).unwrap();
		let ops = surface.take();
		let loops = ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Line(from, to, ..) if from == to))
			.count();
		assert_eq!(loops, 9);
		assert_eq!(ops.iter().filter(|op| matches!(op, DrawOp::Circle(..))).count(), 9);
	}
}
