//! Four-segment strength meter.
//!
//! The segment colors are built as a pipeline: the fill rule paints every
//! segment, then the escalation overrides run in order, each one free to
//! repaint what the previous step produced.

use std::fmt;

use crate::types::MAX_SCORE;

pub const SEGMENTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeterColor {
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
}

impl MeterColor {
    /// Fill color for a score; anything out of range is gray.
    pub fn for_score(score: u8) -> Self {
        match score {
            1 | 2 => MeterColor::Red,
            3 => MeterColor::Orange,
            4 => MeterColor::Yellow,
            5 => MeterColor::Green,
            _ => MeterColor::Gray,
        }
    }

    pub fn is_filled(self) -> bool {
        self != MeterColor::Gray
    }
}

impl fmt::Display for MeterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeterColor::Gray => "gray",
            MeterColor::Red => "red",
            MeterColor::Orange => "orange",
            MeterColor::Yellow => "yellow",
            MeterColor::Green => "green",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    pub segments: [MeterColor; SEGMENTS],
}

impl Meter {
    pub fn filled(&self) -> usize {
        self.segments.iter().filter(|c| c.is_filled()).count()
    }
}

/// Escalation overrides: (score strictly above, segments below, color).
const ESCALATIONS: [(u8, usize, MeterColor); 3] = [
    (2, 2, MeterColor::Orange),
    (3, 3, MeterColor::Yellow),
    (4, 4, MeterColor::Green),
];

/// Maps a score to segment colors.
pub fn meter_for_score(score: u8) -> Meter {
    let score = score.min(MAX_SCORE);
    let fill = MeterColor::for_score(score);
    let threshold = f64::from(score) / 1.5;

    let mut segments = [MeterColor::Gray; SEGMENTS];
    for (index, segment) in segments.iter_mut().enumerate() {
        if (index as f64) < threshold {
            *segment = fill;
        }
    }

    for (above, below, color) in ESCALATIONS {
        if score > above {
            for segment in segments.iter_mut().take(below) {
                *segment = color;
            }
        }
    }

    Meter { segments }
}
