//! Per-character "typing" reveal of detail text.
//!
//! Each field reveals independently at its own rate, one grapheme cluster at a
//! time. The reveal holds no clock of its own: the owner feeds it frame deltas,
//! so dropping the owner stops it.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use crate::detail::{DetailField, DetailRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldReveal {
    total: usize,
    per_grapheme: Duration,
}

impl FieldReveal {
    fn shown(self, elapsed: Duration) -> usize {
        if self.per_grapheme.is_zero() {
            return self.total;
        }
        let steps = elapsed.as_nanos() / self.per_grapheme.as_nanos();
        usize::try_from(steps).unwrap_or(usize::MAX).min(self.total)
    }
}

/// Reveal progress for the four fields of one [`DetailRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailReveal {
    fields: [FieldReveal; 4],
    elapsed: Duration,
    instant: bool,
}

impl DetailReveal {
    /// Start revealing `detail` from nothing.
    #[must_use]
    pub fn new(detail: &DetailRecord) -> Self {
        Self::build(detail, false)
    }

    /// A reveal that is already complete (reduced motion).
    #[must_use]
    pub fn completed(detail: &DetailRecord) -> Self {
        Self::build(detail, true)
    }

    fn build(detail: &DetailRecord, instant: bool) -> Self {
        let fields = DetailField::ALL.map(|field| FieldReveal {
            total: detail.field(field).graphemes(true).count(),
            per_grapheme: Self::rate(field),
        });
        Self {
            fields,
            elapsed: Duration::ZERO,
            instant,
        }
    }

    /// Time to reveal one grapheme of `field`.
    #[must_use]
    pub const fn rate(field: DetailField) -> Duration {
        match field {
            DetailField::Description => Duration::from_millis(5),
            DetailField::Substance | DetailField::Usage => Duration::from_millis(15),
            DetailField::FunFact => Duration::from_millis(10),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.instant
            || self
                .fields
                .iter()
                .all(|field| field.shown(self.elapsed) >= field.total)
    }

    /// The visible prefix of `field` in `detail`.
    ///
    /// `detail` must be the record this reveal was built from; a different
    /// record is still sliced safely on grapheme boundaries.
    #[must_use]
    pub fn visible<'a>(&self, detail: &'a DetailRecord, field: DetailField) -> &'a str {
        let text = detail.field(field);
        if self.instant {
            return text;
        }
        let reveal = self.fields[Self::index(field)];
        let shown = reveal.shown(self.elapsed);
        match text.grapheme_indices(true).nth(shown) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }

    const fn index(field: DetailField) -> usize {
        match field {
            DetailField::Description => 0,
            DetailField::Substance => 1,
            DetailField::Usage => 2,
            DetailField::FunFact => 3,
        }
    }
}
