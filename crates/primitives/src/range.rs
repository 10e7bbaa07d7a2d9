use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A position in the text, measured in characters (not bytes).
///
/// This is the canonical coordinate space for Redline.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// This is distinct from CharIdx to avoid accidentally passing an index
/// where a length is expected or vice versa.
pub type CharLen = usize;

/// A half-open text span `[from, to)`.
///
/// Unlike a selection range, a span has no direction: `from <= to` always
/// holds for spans built through [`Span::new`].
///
/// Deserialization refuses reversed ends instead of normalizing them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan")]
pub struct Span {
	/// Inclusive start of the span.
	pub from: CharIdx,
	/// Exclusive end of the span.
	pub to: CharIdx,
}

/// A span whose `from` lies after its `to`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("span end {to} precedes start {from}")]
pub struct InvertedSpan {
	pub from: CharIdx,
	pub to: CharIdx,
}

#[derive(Deserialize)]
struct RawSpan {
	from: CharIdx,
	to: CharIdx,
}

impl TryFrom<RawSpan> for Span {
	type Error = InvertedSpan;

	fn try_from(RawSpan { from, to }: RawSpan) -> Result<Self, Self::Error> {
		Self::checked(from, to)
	}
}

impl Span {
	/// Creates a span, swapping the ends if they are reversed.
	pub fn new(from: CharIdx, to: CharIdx) -> Self {
		if from <= to { Self { from, to } } else { Self { from: to, to: from } }
	}

	/// Creates a span from ends already in order, refusing reversed input.
	pub fn checked(from: CharIdx, to: CharIdx) -> Result<Self, InvertedSpan> {
		if from <= to { Ok(Self { from, to }) } else { Err(InvertedSpan { from, to }) }
	}

	/// Returns true if `from <= to`.
	///
	/// Always holds for spans from [`Span::new`], [`Span::checked`] or
	/// deserialization; the fields are public, so literal spans may break it.
	#[inline]
	pub fn is_ordered(&self) -> bool {
		self.from <= self.to
	}

	/// Creates a zero-width span at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self { from: pos, to: pos }
	}

	/// Returns the length of the span in characters.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.to.saturating_sub(self.from)
	}

	/// Returns true if the span covers no characters.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.from >= self.to
	}

	/// Returns true if the position is within the span (exclusive of `to`).
	pub fn contains(&self, pos: CharIdx) -> bool {
		pos >= self.from && pos < self.to
	}

	/// Returns true if the two spans share at least one character.
	///
	/// Two empty spans at the same position also count as overlapping.
	pub fn overlaps(&self, other: &Span) -> bool {
		if self.from < other.to && other.from < self.to {
			return true;
		}

		self.is_empty() && other.is_empty() && self.from == other.from
	}

	/// Clamps both ends to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self::new(self.from.min(max_char), self.to.min(max_char))
	}

	/// Shifts both ends by a signed delta, saturating at zero.
	pub fn shift(&self, delta: isize) -> Self {
		let f = |pos: CharIdx| pos.saturating_add_signed(delta);
		Self {
			from: f(self.from),
			to: f(self.to),
		}
	}

	/// Converts into a standard library range for rope slicing.
	pub fn as_range(&self) -> std::ops::Range<CharIdx> {
		self.from..self.to
	}
}

impl From<std::ops::Range<CharIdx>> for Span {
	fn from(range: std::ops::Range<CharIdx>) -> Self {
		Self::new(range.start, range.end)
	}
}
