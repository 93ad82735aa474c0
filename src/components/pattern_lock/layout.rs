//! Live key positions read from the keypad DOM.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::types::{Point, Token};

const KEY_SELECTOR: &str = ".key[data-number]";

/// Centers of the on-screen keys, relative to the keypad element.
#[derive(Clone, Debug, Default)]
pub struct KeyLayout {
	centers: HashMap<Token, Point>,
}

impl KeyLayout {
	/// Reads the live layout of every key inside `keypad`. Keys whose
	/// `data-number` is not a single digit are ignored.
	pub fn snapshot(keypad: &HtmlElement) -> Self {
		let Ok(keys) = keypad.query_selector_all(KEY_SELECTOR) else {
			return Self::default();
		};
		let centers = (0..keys.length())
			.filter_map(|i| keys.item(i)?.dyn_into::<HtmlElement>().ok())
			.filter_map(|key| {
				let token = parse_token(&key.get_attribute("data-number")?)?;
				let x = key.offset_left() as f64 + key.offset_width() as f64 / 2.0;
				let y = key.offset_top() as f64 + key.offset_height() as f64 / 2.0;
				Some((token, Point { x, y }))
			})
			.collect();
		Self { centers }
	}

	/// Center of the key for `token`, or `None` when no such key exists.
	pub fn center_of(&self, token: Token) -> Option<Point> {
		self.centers.get(&token).copied()
	}
}

impl FromIterator<(Token, Point)> for KeyLayout {
	fn from_iter<I: IntoIterator<Item = (Token, Point)>>(iter: I) -> Self {
		Self {
			centers: iter.into_iter().collect(),
		}
	}
}

fn parse_token(value: &str) -> Option<Token> {
	let mut chars = value.trim().chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => Token::from_char(c),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_single_digit_attributes() {
		assert_eq!(parse_token("7"), Token::from_char('7'));
		assert_eq!(parse_token(" 0 "), Token::from_char('0'));
		assert_eq!(parse_token("10"), None);
		assert_eq!(parse_token(""), None);
		assert_eq!(parse_token("x"), None);
	}

	#[test]
	fn lookup_misses_unknown_keys() {
		let one = Token::from_char('1').unwrap();
		let layout: KeyLayout = [(one, Point { x: 5.0, y: 6.0 })].into_iter().collect();
		assert_eq!(layout.center_of(one), Some(Point { x: 5.0, y: 6.0 }));
		assert_eq!(layout.center_of(Token::from_char('2').unwrap()), None);
	}
}
