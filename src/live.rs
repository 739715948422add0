//! Live evaluation driven by "input changed" events.
//!
//! Each new input cancels the evaluation still pending for the previous
//! one, so only the latest input ever publishes a report.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::evaluator::{DEFAULT_DEBOUNCE, PasswordEvaluator};
use crate::types::StrengthReport;

pub struct LiveEvaluator {
    evaluator: Arc<PasswordEvaluator>,
    tx: mpsc::Sender<StrengthReport>,
    debounce: Duration,
    current: Option<CancellationToken>,
}

impl LiveEvaluator {
    pub fn new(evaluator: PasswordEvaluator, tx: mpsc::Sender<StrengthReport>) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
            tx,
            debounce: DEFAULT_DEBOUNCE,
            current: None,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Supersedes any pending evaluation and schedules one for `password`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn input_changed(&mut self, password: SecretString) -> JoinHandle<()> {
        self.cancel();

        let token = CancellationToken::new();
        self.current = Some(token.clone());

        let evaluator = Arc::clone(&self.evaluator);
        let tx = self.tx.clone();
        let debounce = self.debounce;

        #[cfg(feature = "tracing")]
        tracing::debug!("input changed, scheduling evaluation in {:?}", debounce);

        tokio::spawn(async move {
            evaluator.evaluate_tx(&password, token, tx, debounce).await;
        })
    }

    /// Cancels the pending evaluation, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

impl Drop for LiveEvaluator {
    fn drop(&mut self) {
        self.cancel();
    }
}
