// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot readiness wait for the indexing backend.
//!
//! The backend is checked every `poll_interval` until it reports ready or
//! `timeout` has passed. Whichever comes first is final: a gate that timed out
//! stays timed out even if the backend shows up later, and the session runs on
//! fallback search for the rest of its life.
//!
//! [`ReadinessGate`] is the pure state machine. [`wait_ready`] drives it as a
//! future, generic over the sleep so the same loop runs on a browser timer or a
//! tokio runtime. Elapsed time is the sum of the sleeps, not a wall clock.

use crate::config::GateConfig;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GateState {
    Waiting {
        #[serde(rename = "nextPollMs", serialize_with = "as_millis")]
        next_poll: Duration,
    },
    Ready,
    TimedOut,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl GateState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, GateState::Waiting { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReadinessGate {
    config: GateConfig,
    resolved: Option<GateState>,
}

impl ReadinessGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            resolved: None,
        }
    }

    /// Record one check taken `elapsed` after the wait started.
    pub fn poll(&mut self, elapsed: Duration, available: bool) -> GateState {
        if let Some(state) = self.resolved {
            return state;
        }
        let state = if available {
            GateState::Ready
        } else if elapsed >= self.config.timeout() {
            GateState::TimedOut
        } else {
            return GateState::Waiting {
                next_poll: self.config.poll_interval(),
            };
        };
        self.resolved = Some(state);
        state
    }

    pub fn outcome(&self) -> Option<GateState> {
        self.resolved
    }
}

/// Poll until the backend is available or the gate times out.
pub async fn wait_ready<P, S, F>(config: &GateConfig, mut is_ready: P, mut sleep: S) -> GateState
where
    P: FnMut() -> bool,
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut gate = ReadinessGate::new(config.clone());
    let mut elapsed = Duration::ZERO;
    loop {
        match gate.poll(elapsed, is_ready()) {
            GateState::Waiting { next_poll } => {
                sleep(next_poll).await;
                elapsed += next_poll;
            }
            resolved => {
                tracing::debug!(?resolved, elapsed_ms = elapsed.as_millis() as u64, "backend gate resolved");
                return resolved;
            }
        }
    }
}
