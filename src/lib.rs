//! Password strength feedback library
//!
//! Evaluates a password against a small set of heuristic rules and turns
//! the result into feedback lines and a four-segment strength meter.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: file replacing the built-in common password
//!   list, read by [`CommonPasswords::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_feedback::{CommonPasswords, PasswordEvaluator, render};
//! use secrecy::SecretString;
//!
//! let evaluator = PasswordEvaluator::new(CommonPasswords::default());
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let report = evaluator.evaluate(&password);
//! assert_eq!(report.score, 5);
//!
//! println!("{}", render(&report).view);
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod feedback;
#[cfg(feature = "async")]
mod live;
mod meter;
mod sections;
mod types;

// Public API
pub use blacklist::{
    BlacklistError, COMMON_PASSWORDS_ENV, CommonPasswords, DEFAULT_COMMON_PASSWORDS,
};
pub use evaluator::{PasswordEvaluator, evaluate_password_strength};
pub use feedback::{
    FeedbackLine, FeedbackView, Indicator, PLACEHOLDER, Rendered, Visibility, render,
};
pub use meter::{Meter, MeterColor, SEGMENTS, meter_for_score};
pub use types::{MAX_SCORE, RuleResult, StrengthReport};

#[cfg(feature = "async")]
pub use evaluator::DEFAULT_DEBOUNCE;
#[cfg(feature = "async")]
pub use live::LiveEvaluator;
