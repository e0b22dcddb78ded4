//! Test doubles for grammar correction.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Result, SurveyError};

use super::corrector::GrammarCorrector;

/// Corrector that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCorrector;

impl IdentityCorrector {
    /// Create a new identity corrector.
    pub fn new() -> Self {
        Self
    }
}

impl GrammarCorrector for IdentityCorrector {
    fn correct(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "identity"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Failure {
    #[default]
    Never,
    OnCall(usize),
    Always,
}

/// Mock corrector with scripted fixes and failures.
///
/// Fixes are literal `(from, to)` replacements applied in order. Every input
/// is recorded so tests can assert what reached the correction stage.
#[derive(Debug, Default)]
pub struct MockCorrector {
    fixes: Vec<(String, String)>,
    failure: Failure,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl MockCorrector {
    /// Create a mock that behaves like the identity corrector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal replacement.
    pub fn with_fix(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.fixes.push((from.into(), to.into()));
        self
    }

    /// Fail on the given 1-based call.
    pub fn failing_on_call(mut self, call: usize) -> Self {
        self.failure = Failure::OnCall(call);
        self
    }

    /// Fail on every call, as if the service were down.
    pub fn unavailable() -> Self {
        Self {
            failure: Failure::Always,
            ..Self::default()
        }
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Inputs received so far, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("mock input log poisoned").clone()
    }
}

impl GrammarCorrector for MockCorrector {
    fn correct(&self, text: &str) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.seen
            .lock()
            .expect("mock input log poisoned")
            .push(text.to_string());

        match self.failure {
            Failure::Always => {
                return Err(SurveyError::correction(self.name(), "service unavailable"));
            }
            Failure::OnCall(n) if n == call => {
                return Err(SurveyError::correction(
                    self.name(),
                    format!("scripted failure on call {}", call),
                ));
            }
            _ => {}
        }

        let corrected = self
            .fixes
            .iter()
            .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to));
        Ok(corrected)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passes_through() {
        assert_eq!(IdentityCorrector::new().correct("as is").unwrap(), "as is");
    }

    #[test]
    fn test_mock_applies_fixes_and_records() {
        let mock = MockCorrector::new()
            .with_fix("Do you with", "Do you have")
            .with_fix("  ", " ");

        let out = mock.correct("Do you with  asthma").unwrap();
        assert_eq!(out, "Do you have asthma");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.seen(), vec!["Do you with  asthma".to_string()]);
    }

    #[test]
    fn test_mock_records_failed_calls() {
        let mock = MockCorrector::unavailable();
        let _ = mock.correct("first");
        let _ = mock.correct("second");
        assert_eq!(mock.seen(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    #[should_panic(expected = "poisoned")]
    fn test_poisoned_input_log_is_reported() {
        let mock = std::sync::Arc::new(MockCorrector::new());
        let shared = mock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.seen.lock().unwrap();
            panic!("holder died");
        })
        .join();
        mock.seen();
    }

    #[test]
    fn test_mock_fails_on_scripted_call() {
        let mock = MockCorrector::new().failing_on_call(2);
        assert!(mock.correct("one").is_ok());
        let err = mock.correct("two").unwrap_err();
        assert!(matches!(err, SurveyError::CorrectionService { .. }));
        assert!(mock.correct("three").is_ok());
    }

    #[test]
    fn test_unavailable_always_fails() {
        let mock = MockCorrector::unavailable();
        assert!(mock.correct("a").is_err());
        assert!(mock.correct("b").is_err());
        assert_eq!(mock.call_count(), 2);
    }
}
