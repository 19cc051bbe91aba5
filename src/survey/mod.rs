// SPDX-License-Identifier: MPL-2.0
//! Survey domain: the fixed rating categories and the gesture state that
//! drives the selection.
//!
//! - [`Rating`] - the three categories, in fixed order
//! - [`track`] - track geometry, zone partition, and the drag controller
//! - [`pager`] - the paged label list kept in sync with the selection

pub mod pager;
pub mod track;

use iced::Color;

/// One of the three survey answers, in fixed left-to-right track order.
///
/// The set is closed: the whole screen (zone partition, interpolation
/// domains, pager pages) is built around exactly three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Bad,
    NotBad,
    Good,
}

/// All ratings in track order. Index `i` is also the pager page index.
pub const RATINGS: [Rating; 3] = [Rating::Bad, Rating::NotBad, Rating::Good];

impl Rating {
    /// Stable identifier handed to the form-submission collaborator.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Rating::Bad => "1",
            Rating::NotBad => "2",
            Rating::Good => "3",
        }
    }

    /// Large title shown by the pager.
    #[must_use]
    pub fn main_title(self) -> &'static str {
        match self {
            Rating::Bad => "BAD",
            Rating::NotBad => "NOT BAD",
            Rating::Good => "GOOD",
        }
    }

    /// Small label shown under the track dot.
    #[must_use]
    pub fn progress_title(self) -> &'static str {
        match self {
            Rating::Bad => "Bad",
            Rating::NotBad => "Not bad",
            Rating::Good => "Good",
        }
    }

    /// Background color associated with the category.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Rating::Bad => Color::from_rgba8(255, 25, 0, 0.7),
            Rating::NotBad => Color::from_rgba8(231, 177, 60, 0.5),
            Rating::Good => Color::from_rgba8(117, 231, 60, 0.5),
        }
    }

    /// Pager page index for this rating.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Rating::Bad => 0,
            Rating::NotBad => 1,
            Rating::Good => 2,
        }
    }

    /// Rating for a pager page index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        RATINGS.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_ordered_and_indexed() {
        for (i, rating) in RATINGS.iter().enumerate() {
            assert_eq!(rating.index(), i);
            assert_eq!(Rating::from_index(i), Some(*rating));
        }
        assert_eq!(Rating::from_index(3), None);
    }

    #[test]
    fn ids_are_stable() {
        assert_eq!(Rating::Bad.id(), "1");
        assert_eq!(Rating::NotBad.id(), "2");
        assert_eq!(Rating::Good.id(), "3");
    }

    #[test]
    fn titles_match_the_screen_copy() {
        assert_eq!(Rating::NotBad.main_title(), "NOT BAD");
        assert_eq!(Rating::NotBad.progress_title(), "Not bad");
    }
}
