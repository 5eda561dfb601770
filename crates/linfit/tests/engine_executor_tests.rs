#![cfg(feature = "dev")]
//! Tests for the fit execution engine.
//!
//! These tests drive `FitExecutor::run` directly with explicit configurations
//! and check its tracing instrumentation.
//!
//! ## Test Organization
//!
//! 1. **Configuration** - Guard selection and optional outputs
//! 2. **Guard Order** - Which check fires first
//! 3. **Tracing** - Span emission and recorded fields

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;

use linfit::internals::algorithms::ols::DegeneracyGuard;
use linfit::internals::engine::executor::{FitConfig, FitExecutor};
use linfit::internals::primitives::errors::FitError;

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test the default configuration.
#[test]
fn test_default_config() {
    let config: FitConfig<f64> = FitConfig::default();

    assert_eq!(config.guard, DegeneracyGuard::Absolute(1e-6));
    assert!(!config.require_finite);
    assert!(!config.return_residuals);
    assert!(!config.return_diagnostics);
}

/// Test a fully enabled run.
#[test]
fn test_run_with_all_outputs() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let y = [2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
    let config = FitConfig {
        guard: DegeneracyGuard::Relative(1e-12),
        require_finite: true,
        return_residuals: true,
        return_diagnostics: true,
    };

    let result = FitExecutor::run(&x, &y, &config).unwrap();

    assert_relative_eq!(result.intercept, 0.1, epsilon = 1e-10);
    assert_relative_eq!(result.slope, 1.975, epsilon = 1e-10);
    assert_relative_eq!(result.sigma, 0.224_536_559_755_124_85, max_relative = 1e-9);
    assert_relative_eq!(result.sigma_intercept, 0.174_957_477_827_096_87, max_relative = 1e-9);
    assert_relative_eq!(result.sigma_slope, 0.034_646_743_359_179_19, max_relative = 1e-9);

    let residuals = result.residuals.as_ref().unwrap();
    assert_eq!(residuals.len(), 8);
    let diag = result.diagnostics.unwrap();
    assert_relative_eq!(diag.rss, 0.3025, epsilon = 1e-10);
}

/// Test the reported threshold for the relative guard.
#[test]
fn test_degenerate_reports_effective_threshold() {
    let x = [3.0, 3.0, 3.0];
    let y = [1.0, 2.0, 3.0];
    let config = FitConfig {
        guard: DegeneracyGuard::Relative(1e-9),
        ..FitConfig::default()
    };

    match FitExecutor::run(&x, &y, &config) {
        Err(FitError::DegenerateInput {
            denominator,
            threshold,
        }) => {
            assert_eq!(denominator, 0.0);
            // 1e-9 * 3 * 27
            assert_relative_eq!(threshold, 8.1e-8, max_relative = 1e-12);
        }
        other => panic!("Expected DegenerateInput, got {:?}", other),
    }
}

// ============================================================================
// Guard Order Tests
// ============================================================================

/// Test insufficient data wins over non-finite values.
#[test]
fn test_insufficient_before_finite() {
    let config = FitConfig {
        require_finite: true,
        ..FitConfig::default()
    };

    let res = FitExecutor::run(&[f64::NAN, 1.0], &[1.0, 2.0], &config);

    assert!(matches!(res, Err(FitError::InsufficientData { .. })));
}

/// Test non-finite values win over degeneracy when checked.
#[test]
fn test_finite_before_degenerate() {
    let config = FitConfig {
        require_finite: true,
        ..FitConfig::default()
    };

    let res = FitExecutor::run(&[1.0, 1.0, 1.0], &[1.0, f64::INFINITY, 2.0], &config);

    assert!(matches!(res, Err(FitError::InvalidNumericValue(_))));
}

// ============================================================================
// Tracing Tests
// ============================================================================

/// Test that a run emits a `linfit.fit` span.
#[test]
fn test_run_emits_fit_span() {
    struct SpanChecker {
        saw_fit_span: Arc<AtomicBool>,
    }

    impl tracing::Subscriber for SpanChecker {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            if span.metadata().name() == "linfit.fit" {
                self.saw_fit_span.store(true, Ordering::Relaxed);
            }
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}
        fn event(&self, _event: &tracing::Event<'_>) {}
        fn enter(&self, _span: &tracing::span::Id) {}
        fn exit(&self, _span: &tracing::span::Id) {}
    }

    let saw_it = Arc::new(AtomicBool::new(false));
    let subscriber = SpanChecker {
        saw_fit_span: Arc::clone(&saw_it),
    };
    let _guard = tracing::subscriber::set_default(subscriber);

    let _ = FitExecutor::run(&[1.0, 2.0, 3.0], &[1.0, 2.0, 2.5], &FitConfig::default());

    assert!(
        saw_it.load(Ordering::Relaxed),
        "run() must emit a 'linfit.fit' tracing span"
    );
}

/// Test that the fitted slope is recorded on the span.
#[test]
fn test_run_records_fitted_slope() {
    struct RecordChecker {
        slope: Arc<Mutex<Option<f64>>>,
    }

    struct SlopeVisitor(Arc<Mutex<Option<f64>>>);

    impl tracing::field::Visit for SlopeVisitor {
        fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
            if field.name() == "slope" {
                if let Ok(mut slot) = self.0.lock() {
                    *slot = Some(value);
                }
            }
        }
        fn record_debug(&mut self, _field: &tracing::field::Field, _value: &dyn fmt::Debug) {}
    }

    impl tracing::Subscriber for RecordChecker {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _span: &tracing::span::Id, values: &tracing::span::Record<'_>) {
            let mut visitor = SlopeVisitor(Arc::clone(&self.slope));
            values.record(&mut visitor);
        }
        fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}
        fn event(&self, _event: &tracing::Event<'_>) {}
        fn enter(&self, _span: &tracing::span::Id) {}
        fn exit(&self, _span: &tracing::span::Id) {}
    }

    let slope = Arc::new(Mutex::new(None));
    let subscriber = RecordChecker {
        slope: Arc::clone(&slope),
    };
    let _guard = tracing::subscriber::set_default(subscriber);

    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 2.0, 4.0];
    FitExecutor::run(&x, &y, &FitConfig::default()).unwrap();

    let recorded = slope.lock().unwrap().expect("slope should be recorded");
    assert_relative_eq!(recorded, 0.8, epsilon = 1e-12);
}

/// Test that a rejected fit emits an event and records no slope.
#[test]
fn test_rejected_run_emits_event() {
    struct EventCounter {
        events: Arc<AtomicUsize>,
        records: Arc<AtomicUsize>,
    }

    impl tracing::Subscriber for EventCounter {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {
            self.records.fetch_add(1, Ordering::Relaxed);
        }
        fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}
        fn event(&self, _event: &tracing::Event<'_>) {
            self.events.fetch_add(1, Ordering::Relaxed);
        }
        fn enter(&self, _span: &tracing::span::Id) {}
        fn exit(&self, _span: &tracing::span::Id) {}
    }

    let events = Arc::new(AtomicUsize::new(0));
    let records = Arc::new(AtomicUsize::new(0));
    let subscriber = EventCounter {
        events: Arc::clone(&events),
        records: Arc::clone(&records),
    };
    let _guard = tracing::subscriber::set_default(subscriber);

    let res = FitExecutor::run(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], &FitConfig::default());

    assert!(matches!(res, Err(FitError::DegenerateInput { .. })));
    assert_eq!(events.load(Ordering::Relaxed), 1);
    assert_eq!(records.load(Ordering::Relaxed), 0);
}
