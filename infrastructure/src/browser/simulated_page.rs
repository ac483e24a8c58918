//! Simulated browser page
//!
//! In-process [`ConsentHost`] used to dry-run the consent client from the
//! command line. The Clarity global appears after a configurable number of
//! availability checks, and every call and event is recorded.

use async_trait::async_trait;
use consent_application::{ConsentHost, InvocationError};
use consent_domain::{ConsentCommandArgs, ConsentPayload};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// When the Clarity entry point shows up on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Never loads (blocked or not installed)
    Missing,
    /// Present before the client starts
    Loaded,
    /// Becomes available on the given availability check (1-based)
    AppearsOnCheck(u32),
}

/// A recorded `window.clarity(command, args)` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub command: String,
    pub args: ConsentCommandArgs,
}

/// A recorded document event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchedEvent {
    pub name: String,
    pub detail: ConsentPayload,
}

#[derive(Debug, Default)]
struct PageLog {
    checks: u32,
    invocations: Vec<Invocation>,
    events: Vec<DispatchedEvent>,
}

/// In-process browser page
#[derive(Debug)]
pub struct SimulatedPage {
    payload: Option<ConsentPayload>,
    admin: bool,
    entry_point: EntryPoint,
    failure: Option<String>,
    log: Mutex<PageLog>,
}

impl SimulatedPage {
    /// A public page carrying the given payload, with Clarity already loaded
    pub fn new(payload: Option<ConsentPayload>) -> Self {
        Self {
            payload,
            admin: false,
            entry_point: EntryPoint::Loaded,
            failure: None,
            log: Mutex::new(PageLog::default()),
        }
    }

    pub fn with_entry_point(mut self, entry_point: EntryPoint) -> Self {
        self.entry_point = entry_point;
        self
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Make the Clarity call throw with the given message
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of availability checks made so far
    pub fn checks(&self) -> u32 {
        self.lock().checks
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.lock().invocations.clone()
    }

    pub fn events(&self) -> Vec<DispatchedEvent> {
        self.lock().events.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PageLog> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ConsentHost for SimulatedPage {
    async fn payload(&self) -> Option<ConsentPayload> {
        self.payload
    }

    async fn is_admin_context(&self) -> bool {
        self.admin
    }

    async fn entry_point_available(&self) -> bool {
        let mut log = self.lock();
        log.checks += 1;
        match self.entry_point {
            EntryPoint::Missing => false,
            EntryPoint::Loaded => true,
            EntryPoint::AppearsOnCheck(n) => log.checks >= n,
        }
    }

    async fn invoke(
        &self,
        command: &str,
        args: &ConsentCommandArgs,
    ) -> Result<(), InvocationError> {
        self.lock().invocations.push(Invocation {
            command: command.to_string(),
            args: *args,
        });
        match &self.failure {
            Some(message) => Err(InvocationError::Threw(message.clone())),
            None => Ok(()),
        }
    }

    async fn dispatch_event(&self, name: &str, detail: &ConsentPayload) {
        self.lock().events.push(DispatchedEvent {
            name: name.to_string(),
            detail: *detail,
        });
    }
}
