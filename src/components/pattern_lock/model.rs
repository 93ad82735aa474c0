//! Turns a digit sequence into positioned ring stacks and colored segments.

use super::palette::color_for_step;
use super::types::{Circle, LineSegment, PatternModel, PatternNode, Point, Token};

/// Radius of a node's first ring.
pub const BASE_RADIUS: f64 = 10.0;
/// Growth per revisit.
pub const RADIUS_INCREMENT: f64 = 3.0;
/// Revisits that would grow a node past this radius add no circle.
pub const MAX_RADIUS: f64 = 36.0;

/// Builds a fresh drawable model from the sequence.
///
/// Tokens that `position_of` cannot resolve get no node, and any segment
/// touching them is dropped. Node lookup is a linear scan, which is fine for
/// a keypad of ten keys.
pub fn build_model<F>(tokens: &[Token], position_of: F) -> PatternModel
where
	F: Fn(Token) -> Option<Point>,
{
	let mut nodes: Vec<PatternNode> = Vec::new();

	for (step, &token) in tokens.iter().enumerate() {
		let Some(position) = position_of(token) else {
			continue;
		};
		let color = color_for_step(step);

		match nodes.iter_mut().find(|node| node.token == token) {
			Some(node) => {
				let last = node.circles.last().map_or(BASE_RADIUS, |c| c.radius);
				let radius = last + RADIUS_INCREMENT;
				if radius <= MAX_RADIUS {
					node.circles.push(Circle { radius, color });
				}
			}
			None => nodes.push(PatternNode {
				token,
				center: Point::rounded(position.x, position.y),
				circles: vec![Circle {
					radius: BASE_RADIUS,
					color,
				}],
			}),
		}
	}

	let center_of = |token: Token| {
		nodes
			.iter()
			.find(|node| node.token == token)
			.map(|node| node.center)
	};
	let lines = tokens
		.windows(2)
		.enumerate()
		.filter_map(|(i, pair)| {
			let (from, to) = (center_of(pair[0])?, center_of(pair[1])?);
			let step = i + 1;
			Some(LineSegment {
				from,
				to,
				color: color_for_step(step),
				step,
			})
		})
		.collect();

	PatternModel { nodes, lines }
}
