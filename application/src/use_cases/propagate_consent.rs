//! Consent propagation client
//!
//! Browser-side half of the consent layer. Clarity is loaded by someone
//! else and may show up before or after this client starts, so the client
//! waits for `window.clarity` and calls it once with the consent payload.
//!
//! # State machine
//!
//! ```text
//! Idle ──ready──▶ Polling ──entry point found──▶ Applied
//!   │                │      └─call threw───────▶ Failed
//!   │                └──max attempts reached───▶ TimedOut
//!   └── admin page / no payload: stays Idle
//! ```
//!
//! The window load fallback may start one more polling round when the
//! first one timed out. It never starts a round while one is running or
//! after the call was made, so Clarity is invoked at most once per page.

use crate::config::PollParams;
use crate::ports::consent_host::ConsentHost;
use consent_domain::{APPLIED_EVENT, CONSENT_COMMAND, ConsentPayload};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::time::{Instant, interval_at};
use tracing::{debug, error, info, warn};

/// Lifecycle of the client for one page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientState {
    /// Not started, or skipped for this page
    Idle,
    /// Waiting for the entry point
    Polling,
    /// Consent was handed to Clarity
    Applied,
    /// The entry point never appeared
    TimedOut,
    /// The entry point threw; not retried
    Failed,
}

impl ClientState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ClientState::Applied | ClientState::TimedOut | ClientState::Failed
        )
    }
}

/// What triggered a polling round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Ready,
    WindowLoad,
}

#[derive(Debug)]
struct Inner {
    state: ClientState,
    fallback_used: bool,
}

/// Waits for Clarity and applies the consent decision once
pub struct ConsentPropagationClient<H: ConsentHost> {
    host: Arc<H>,
    params: PollParams,
    inner: Mutex<Inner>,
}

impl<H: ConsentHost> ConsentPropagationClient<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self::with_params(host, PollParams::default())
    }

    pub fn with_params(host: Arc<H>, params: PollParams) -> Self {
        Self {
            host,
            params,
            inner: Mutex::new(Inner {
                state: ClientState::Idle,
                fallback_used: false,
            }),
        }
    }

    pub fn state(&self) -> ClientState {
        self.lock().state
    }

    /// Entry point for the document-ready event
    pub async fn on_ready(&self) -> ClientState {
        self.run(Trigger::Ready).await
    }

    /// Entry point for the window load event
    ///
    /// Does nothing unless consent has not been applied yet and no round
    /// is in progress.
    pub async fn on_window_load(&self) -> ClientState {
        {
            let inner = self.lock();
            match inner.state {
                ClientState::Polling | ClientState::Applied | ClientState::Failed => {
                    return inner.state;
                }
                ClientState::TimedOut if inner.fallback_used => return inner.state,
                _ => {}
            }
        }
        debug!("Window load fallback triggered");
        self.run(Trigger::WindowLoad).await
    }

    async fn run(&self, trigger: Trigger) -> ClientState {
        let Some(payload) = self.host.payload().await else {
            warn!("Clarity consent configuration not found; consent script was not configured");
            return self.state();
        };

        if self.host.is_admin_context().await {
            debug!("Admin page detected, skipping consent application");
            return self.state();
        }

        if !self.begin_polling(trigger) {
            return self.state();
        }

        self.poll(payload).await
    }

    /// Move to `Polling`, returning false when this round must not start
    fn begin_polling(&self, trigger: Trigger) -> bool {
        let mut inner = self.lock();
        let allowed = match (inner.state, trigger) {
            (ClientState::Idle, _) => true,
            (ClientState::TimedOut, Trigger::WindowLoad) => !inner.fallback_used,
            _ => false,
        };
        if allowed {
            if trigger == Trigger::WindowLoad {
                inner.fallback_used = true;
            }
            inner.state = ClientState::Polling;
        }
        allowed
    }

    async fn poll(&self, payload: ConsentPayload) -> ClientState {
        if self.host.entry_point_available().await {
            return self.apply(payload).await;
        }

        let period = self.params.interval;
        let mut ticker = interval_at(Instant::now() + period, period);

        for attempt in 1..=self.params.max_attempts {
            ticker.tick().await;
            if self.host.entry_point_available().await {
                debug!("Clarity available after {} checks", attempt);
                return self.apply(payload).await;
            }
        }

        warn!(
            "Microsoft Clarity not found after {:?}; consent not applied",
            self.params.window()
        );
        self.set_state(ClientState::TimedOut)
    }

    async fn apply(&self, payload: ConsentPayload) -> ClientState {
        let args = payload.command_args();
        match self.host.invoke(CONSENT_COMMAND, &args).await {
            Ok(()) => {
                self.set_state(ClientState::Applied);
                info!(
                    "Consent applied: ad_Storage={}, analytics_Storage={}",
                    args.ad_storage, args.analytics_storage
                );
                self.host.dispatch_event(APPLIED_EVENT, &payload).await;
                ClientState::Applied
            }
            Err(e) => {
                error!("Error applying Clarity consent: {}", e);
                self.set_state(ClientState::Failed)
            }
        }
    }

    fn set_state(&self, state: ClientState) -> ClientState {
        self.lock().state = state;
        state
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // The guarded data is plain state; a poisoned lock still holds a valid value
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
