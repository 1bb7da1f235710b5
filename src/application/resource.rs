//! Asynchronous job-list fetch machine for the home screen.
//!
//! The screen mounts, calls [`JobListResource::start`] with a fetch closure,
//! and then observes the phase through [`JobListResource::state`] on every
//! re-render. The fetch runs on a worker thread; its result is applied from
//! the event loop via [`JobListResource::poll`], never from the worker
//! itself.

use crate::domain::{ApiError, JobSummary, RawJobRecord};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// The landing view shows at most this many job cards; a dedicated listing
/// screen would page through the rest.
pub const FEATURED_JOB_LIMIT: usize = 6;

/// Discrete state of the fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Point-in-time snapshot of the job list fetch.
///
/// Exactly one phase holds at a time: `items` is non-empty only in
/// `Success`, `error_message` is non-`None` only in `Error`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResourceState {
    pub phase: Phase,
    pub items: Vec<JobSummary>,
    pub error_message: Option<String>,
}

impl ListResourceState {
    fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            items: Vec::new(),
            error_message: None,
        }
    }
}

/// Owns one fetch cycle of the remote job list.
///
/// Dropping the resource drops the result channel, so a result that arrives
/// after teardown has nowhere to land and is discarded by the worker's
/// failed send.
pub struct JobListResource {
    state: ListResourceState,
    in_flight: Option<Receiver<Result<Vec<RawJobRecord>, ApiError>>>,
}

impl Default for JobListResource {
    fn default() -> Self {
        Self::new()
    }
}

impl JobListResource {
    pub fn new() -> Self {
        Self {
            state: ListResourceState::idle(),
            in_flight: None,
        }
    }

    /// Current snapshot. The rendering layer re-reads this after every event.
    pub fn state(&self) -> &ListResourceState {
        &self.state
    }

    /// Kicks off the fetch on a worker thread and enters `Loading`.
    ///
    /// A `start` while a fetch is already outstanding is ignored, keeping at
    /// most one in-flight fetch per instance. Retrying after an error is a
    /// fresh `start`, normally triggered by remounting the home screen.
    pub fn start<F>(&mut self, fetch: F)
    where
        F: FnOnce() -> Result<Vec<RawJobRecord>, ApiError> + Send + 'static,
    {
        if self.state.phase == Phase::Loading {
            return;
        }

        self.state = ListResourceState {
            phase: Phase::Loading,
            items: Vec::new(),
            error_message: None,
        };

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // A torn-down resource has dropped the receiver; the failed send
            // discards the late result.
            let _ = tx.send(fetch());
        });
        self.in_flight = Some(rx);
    }

    /// Applies an arrived fetch result, if any. Returns true when the phase
    /// changed.
    ///
    /// Success maps every raw record through the [`JobSummary`] derivation
    /// and keeps the first [`FEATURED_JOB_LIMIT`] entries; failure surfaces
    /// the error's message verbatim.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.in_flight.as_ref() else {
            return false;
        };

        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                Err(ApiError::RequestFailed("job fetch was interrupted".to_string()))
            }
        };

        self.in_flight = None;
        match outcome {
            Ok(records) => {
                self.state = ListResourceState {
                    phase: Phase::Success,
                    items: records
                        .iter()
                        .map(JobSummary::from_raw)
                        .take(FEATURED_JOB_LIMIT)
                        .collect(),
                    error_message: None,
                };
            }
            Err(err) => {
                self.state = ListResourceState {
                    phase: Phase::Error,
                    items: Vec::new(),
                    error_message: Some(err.to_string()),
                };
            }
        }
        true
    }
}
