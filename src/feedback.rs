//! Headless feedback rendering and input masking.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::meter::Meter;
use crate::types::{RuleResult, StrengthReport};

pub const PLACEHOLDER: &str = "Feedback will appear here.";

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Pass,
    Fail,
}

impl Indicator {
    pub fn symbol(self) -> char {
        match self {
            Indicator::Pass => '✓',
            Indicator::Fail => '✗',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackLine {
    pub indicator: Indicator,
    pub message: String,
}

impl From<&RuleResult> for FeedbackLine {
    fn from(result: &RuleResult) -> Self {
        Self {
            indicator: if result.satisfied {
                Indicator::Pass
            } else {
                Indicator::Fail
            },
            message: result.description.clone(),
        }
    }
}

impl fmt::Display for FeedbackLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.indicator.symbol(), self.message)
    }
}

/// What the feedback panel shows for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackView {
    Placeholder,
    Lines(Vec<FeedbackLine>),
}

impl fmt::Display for FeedbackView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackView::Placeholder => f.write_str(PLACEHOLDER),
            FeedbackView::Lines(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", line)?;
                }
                Ok(())
            }
        }
    }
}

/// Feedback panel plus meter, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub view: FeedbackView,
    pub meter: Meter,
}

/// Renders a report. An empty report shows the placeholder and an empty meter.
pub fn render(report: &StrengthReport) -> Rendered {
    if report.is_empty() {
        return Rendered {
            view: FeedbackView::Placeholder,
            meter: crate::meter::meter_for_score(0),
        };
    }

    Rendered {
        view: FeedbackView::Lines(report.results.iter().map(FeedbackLine::from).collect()),
        meter: report.meter(),
    }
}

/// Display mode of the raw password input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Visible,
}

impl Visibility {
    pub fn toggle(&mut self) {
        *self = match self {
            Visibility::Masked => Visibility::Visible,
            Visibility::Visible => Visibility::Masked,
        };
    }

    /// Text shown in the input field.
    ///
    /// Masking emits one bullet per UTF-16 code unit, so the masked width
    /// tracks the length the evaluator scores.
    pub fn display(self, password: &SecretString) -> String {
        let raw = password.expose_secret();
        match self {
            Visibility::Masked => raw.encode_utf16().map(|_| MASK_CHAR).collect(),
            Visibility::Visible => raw.to_string(),
        }
    }
}
