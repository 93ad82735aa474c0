//! Step-indexed stroke colors.

use super::types::Color;

/// Five shades each of blue, green, orange and purple.
pub const PALETTE: [Color; 20] = [
	Color("#0b3d91"),
	Color("#1565c0"),
	Color("#1e88e5"),
	Color("#3f9cf0"),
	Color("#64b5f6"),
	Color("#1b5e20"),
	Color("#2e7d32"),
	Color("#43a047"),
	Color("#66bb6a"),
	Color("#81c784"),
	Color("#e65100"),
	Color("#ef6c00"),
	Color("#f57c00"),
	Color("#fb8c00"),
	Color("#ffa726"),
	Color("#4a148c"),
	Color("#6a1b9a"),
	Color("#7b1fa2"),
	Color("#8e24aa"),
	Color("#ab47bc"),
];

/// Fill behind the keypad in every page theme. All palette shades are darker
/// than it.
pub const BACKDROP: Color = Color("#f4f4f8");

/// Color for a position in the sequence, independent of which token sits there.
pub fn color_for_step(step: usize) -> Color {
	PALETTE[step % PALETTE.len()]
}
