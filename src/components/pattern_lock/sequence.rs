//! The user's digit sequence and its three mutations.

use std::fmt;

use super::types::Token;

/// The ordered digit sequence entered by the user. Repeats are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSequence {
	tokens: Vec<Token>,
}

impl InputSequence {
	/// Keeps the digits of free-form text in order and drops everything else.
	pub fn from_text(text: &str) -> Self {
		text.chars().filter_map(Token::from_char).collect()
	}

	/// Appends one clicked key.
	pub fn push(&mut self, token: Token) {
		self.tokens.push(token);
	}

	/// Replaces the whole sequence with the digits of `text`.
	pub fn replace_from_text(&mut self, text: &str) {
		*self = Self::from_text(text);
	}

	/// Empties the sequence.
	pub fn clear(&mut self) {
		self.tokens.clear();
	}

	/// Tokens in entry order.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// Number of entered tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// True before any token is entered.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

impl FromIterator<Token> for InputSequence {
	fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
		Self {
			tokens: iter.into_iter().collect(),
		}
	}
}

/// Textual mirror shown in the number field.
impl fmt::Display for InputSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.tokens.iter().try_for_each(|token| write!(f, "{token}"))
	}
}
