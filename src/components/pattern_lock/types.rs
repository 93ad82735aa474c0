//! Drawable model types shared by the builder and the painter.

use std::fmt;

/// A single digit key of the pattern pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token(char);

impl Token {
	/// Returns `None` for anything other than an ASCII digit.
	pub fn from_char(c: char) -> Option<Self> {
		c.is_ascii_digit().then_some(Self(c))
	}

	/// The digit character.
	pub fn as_char(self) -> char {
		self.0
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Logical (CSS pixel) coordinate relative to the keypad.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the keypad's left edge.
	pub x: f64,
	/// Vertical offset from the keypad's top edge.
	pub y: f64,
}

impl Point {
	/// Point with both coordinates rounded to the nearest pixel.
	pub fn rounded(x: f64, y: f64) -> Self {
		Self {
			x: x.round(),
			y: y.round(),
		}
	}
}

/// A CSS color string taken from the fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub(crate) &'static str);

impl Color {
	/// The CSS color string.
	pub fn as_str(self) -> &'static str {
		self.0
	}
}

/// One ring of a node, added by one visit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
	/// Radius in CSS pixels.
	pub radius: f64,
	/// Color of the visit that added the ring.
	pub color: Color,
}

/// One distinct token of the sequence with its stack of visit circles.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternNode {
	/// Key this node stands for.
	pub token: Token,
	/// Rounded key center.
	pub center: Point,
	/// Strictly increasing radii, one per recorded visit.
	pub circles: Vec<Circle>,
}

impl PatternNode {
	/// Color of the most recent recorded visit.
	pub fn label_color(&self) -> Option<Color> {
		self.circles.last().map(|circle| circle.color)
	}
}

/// Straight stroke between two consecutively visited keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
	/// Center of the earlier key.
	pub from: Point,
	/// Center of the later key.
	pub to: Point,
	/// Color for `step`.
	pub color: Color,
	/// Index in the sequence of the segment's end token.
	pub step: usize,
}

/// Drawable model derived from one input sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternModel {
	/// Nodes in order of first appearance.
	pub nodes: Vec<PatternNode>,
	/// Segments in sequence order.
	pub lines: Vec<LineSegment>,
}

impl PatternModel {
	/// Node for `token`, if it was visited and resolved.
	pub fn node(&self, token: Token) -> Option<&PatternNode> {
		self.nodes.iter().find(|node| node.token == token)
	}

	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.lines.is_empty()
	}
}
