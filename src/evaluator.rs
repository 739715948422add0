//! Password strength evaluator - main evaluation logic.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::CommonPasswords;
use crate::sections::{
    Candidate, ScoredSection, blacklist_section, digit_section, length_section,
    lowercase_section, repetition_section, sequence_section, symbol_section, uppercase_section,
};
use crate::types::StrengthReport;

/// Delay before a live evaluation runs, so fast typing only evaluates once.
#[cfg(feature = "async")]
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Scored criteria in display order.
const SCORED_SECTIONS: [(&str, ScoredSection); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
];

/// Evaluates passwords against a fixed common-password list.
#[derive(Debug, Clone)]
pub struct PasswordEvaluator {
    common: Arc<CommonPasswords>,
}

impl PasswordEvaluator {
    pub fn new(common: CommonPasswords) -> Self {
        Self {
            common: Arc::new(common),
        }
    }

    /// Shares an already loaded list.
    pub fn with_shared(common: Arc<CommonPasswords>) -> Self {
        Self { common }
    }

    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Evaluates password strength and returns the feedback report.
    ///
    /// Never fails: an empty password yields an empty report with score 0.
    pub fn evaluate(&self, password: &SecretString) -> StrengthReport {
        evaluate_with(password.expose_secret(), &self.common)
    }

    /// Debounced evaluation that sends its report via channel.
    ///
    /// Nothing is sent if `token` is cancelled before the report is handed
    /// to the channel, which is how a newer input supersedes this one.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<StrengthReport>,
        debounce: Duration,
    ) {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation is about to start...");

        tokio::time::sleep(debounce).await;
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before start");
            return;
        }

        let report = self.evaluate(password);

        // A full channel must not hold a stale report past cancellation.
        let permit = tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("evaluation superseded while waiting to send");
                return;
            }
            permit = tx.reserve() => permit,
        };

        match permit {
            Ok(permit) => permit.send(report),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password evaluation result: {}", _e);
            }
        }
    }
}

impl Default for PasswordEvaluator {
    fn default() -> Self {
        Self::new(CommonPasswords::default())
    }
}

/// Evaluates a password against the built-in common-password list.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    evaluate_with(password.expose_secret(), CommonPasswords::builtin())
}

fn evaluate_with(password: &str, common: &CommonPasswords) -> StrengthReport {
    let candidate = Candidate::new(password);
    if candidate.is_empty() {
        return StrengthReport::empty();
    }

    let mut results = Vec::with_capacity(SCORED_SECTIONS.len() + 3);
    let mut score = 0u8;

    // Orchestrator: scored sections first, in display order
    for (_section_name, section_fn) in SCORED_SECTIONS {
        let result = section_fn(&candidate);
        #[cfg(feature = "tracing")]
        tracing::trace!("section {} satisfied={}", _section_name, result.satisfied);
        if result.satisfied {
            score += 1;
        }
        results.push(result);
    }

    results.push(blacklist_section(&candidate, common));
    results.extend(repetition_section(&candidate));
    results.extend(sequence_section(&candidate));

    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluated: score={} entries={}", score, results.len());

    StrengthReport { results, score }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_report() {
        let evaluator = PasswordEvaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluator
            .evaluate_tx(&secret("TestPass123!"), token, tx, DEFAULT_DEBOUNCE)
            .await;

        let report = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(report.score, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_with_cancellation() {
        let evaluator = PasswordEvaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluator
            .evaluate_tx(&secret("TestPass123!"), token, tx, DEFAULT_DEBOUNCE)
            .await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_waits_for_debounce() {
        let evaluator = PasswordEvaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let start = tokio::time::Instant::now();

        evaluator
            .evaluate_tx(&secret("abc"), CancellationToken::new(), tx, DEFAULT_DEBOUNCE)
            .await;

        assert!(start.elapsed() >= DEFAULT_DEBOUNCE);
        assert!(rx.recv().await.is_some());
    }
}
