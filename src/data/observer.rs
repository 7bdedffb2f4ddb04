//! Translation outcome reporting.
//!
//! Translation failures never reach the caller, so this is the only place an
//! operator can tell a rewritten description from a passed-through one.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::TranslationStyle;

/// Why a translation fell back to the original description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No response (connect error, timeout, ...).
    Transport(String),
    /// Non-2xx status.
    Status(u16),
    /// 2xx body that does not match the expected schema.
    MalformedBody(String),
    /// Well-formed body in which the provider reports no successful translation.
    ProviderFailure(String),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Transport(msg) => write!(f, "transport error: {msg}"),
            FallbackReason::Status(status) => write!(f, "status {status}"),
            FallbackReason::MalformedBody(msg) => write!(f, "malformed body: {msg}"),
            FallbackReason::ProviderFailure(msg) => write!(f, "provider failure: {msg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated { style: TranslationStyle },
    Degraded { style: TranslationStyle, reason: FallbackReason },
}

impl TranslationOutcome {
    pub fn style(&self) -> TranslationStyle {
        match self {
            TranslationOutcome::Translated { style } | TranslationOutcome::Degraded { style, .. } => *style,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, TranslationOutcome::Degraded { .. })
    }
}

/// Receives exactly one outcome per `translate` call.
pub trait TranslationObserver: Send + Sync {
    fn observe(&self, outcome: &TranslationOutcome);
}

/// Default observer: emits a `tracing` event per outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TranslationObserver for LogObserver {
    fn observe(&self, outcome: &TranslationOutcome) {
        match outcome {
            TranslationOutcome::Translated { style } => {
                tracing::info!(style = style.label(), "description translated");
            }
            TranslationOutcome::Degraded { style, reason } => {
                tracing::warn!(style = style.label(), %reason, "translation unavailable, using original description");
            }
        }
    }
}

/// Counts outcomes. Safe to share across threads.
#[derive(Debug, Default)]
pub struct CountingObserver {
    translated: AtomicU64,
    degraded: AtomicU64,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translated(&self) -> u64 {
        self.translated.load(Ordering::Relaxed)
    }

    pub fn degraded(&self) -> u64 {
        self.degraded.load(Ordering::Relaxed)
    }
}

impl TranslationObserver for CountingObserver {
    fn observe(&self, outcome: &TranslationOutcome) {
        let counter = if outcome.is_degraded() {
            &self.degraded
        } else {
            &self.translated
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}
