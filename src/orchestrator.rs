//! Query orchestration: geocode, then forecast, then one terminal state.
//!
//! [`QueryOrchestrator`] is the single owner of [`RequestState`]. A lookup is
//! split into three steps so the network part can run elsewhere while the
//! state stays put:
//!
//! 1. [`QueryOrchestrator::begin`] validates the query, enters `Loading` and
//!    hands out a [`Ticket`] tagged with a fresh [`RequestId`].
//! 2. [`Pipeline::run`] performs the two awaited calls and returns an
//!    [`Outcome`]; it never touches state.
//! 3. [`QueryOrchestrator::complete`] applies the outcome, unless a newer
//!    request has been started or the lookup was abandoned since.
//!
//! [`QueryOrchestrator::submit`] chains the three for sequential callers.

use crate::api::{ForecastFetcher, GeocodeResolver};
use crate::error::ErrorKind;
use crate::models::WeatherSnapshot;
use crate::{Result, WeatherError};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Monotonic tag of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a lookup ended in [`RequestState::Failed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReason {
    kind: ErrorKind,
}

impl ErrorReason {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// One of the two messages shown to the user
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.kind.user_message()
    }
}

impl From<&WeatherError> for ErrorReason {
    fn from(err: &WeatherError) -> Self {
        Self { kind: err.kind() }
    }
}

/// Lifecycle of the current lookup
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(WeatherSnapshot),
    Failed(ErrorReason),
}

impl RequestState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            RequestState::Success(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            RequestState::Failed(reason) => Some(reason.message()),
            _ => None,
        }
    }
}

/// An accepted submission, ready to be run by a [`Pipeline`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: RequestId,
    /// Query with surrounding whitespace removed
    pub query: String,
}

/// Result of running one ticket
#[derive(Debug)]
pub struct Outcome {
    pub id: RequestId,
    pub result: Result<WeatherSnapshot>,
}

/// What [`QueryOrchestrator::begin`] did with a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Empty after trimming; nothing happened
    Empty,
    /// A lookup is already loading; nothing happened
    Busy,
    Started(Ticket),
}

/// The two network steps, shareable with a spawned task
pub struct Pipeline<G, F> {
    resolver: Arc<G>,
    fetcher: Arc<F>,
}

impl<G, F> Clone for Pipeline<G, F> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<G: GeocodeResolver, F: ForecastFetcher> Pipeline<G, F> {
    pub fn new(resolver: G, fetcher: F) -> Self {
        Self {
            resolver: Arc::new(resolver),
            fetcher: Arc::new(fetcher),
        }
    }

    /// Resolve then fetch; the forecast call only starts after geocoding succeeded
    #[instrument(name = "lookup", skip(self, ticket), fields(id = %ticket.id, query = %ticket.query))]
    pub async fn run(&self, ticket: Ticket) -> Outcome {
        let result = self.lookup(&ticket.query).await;
        match &result {
            Ok(snapshot) => info!("Lookup succeeded for {}", snapshot.location_label()),
            Err(e) => warn!("Lookup failed: {}", e),
        }
        Outcome {
            id: ticket.id,
            result,
        }
    }

    async fn lookup(&self, query: &str) -> Result<WeatherSnapshot> {
        let location = self.resolver.resolve(query).await?;
        let (current, daily) = self
            .fetcher
            .fetch(location.latitude, location.longitude)
            .await?;
        Ok(WeatherSnapshot::new(location, current, daily))
    }
}

/// Single owner of the lookup state
pub struct QueryOrchestrator<G, F> {
    pipeline: Pipeline<G, F>,
    state: RequestState,
    last_issued: u64,
    /// Id whose outcome will be accepted, if any
    in_flight: Option<RequestId>,
}

impl<G: GeocodeResolver, F: ForecastFetcher> QueryOrchestrator<G, F> {
    pub fn new(resolver: G, fetcher: F) -> Self {
        Self {
            pipeline: Pipeline::new(resolver, fetcher),
            state: RequestState::Idle,
            last_issued: 0,
            in_flight: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Handle for running tickets off the owner's task
    #[must_use]
    pub fn pipeline(&self) -> Pipeline<G, F> {
        self.pipeline.clone()
    }

    /// Accept a query and enter `Loading`.
    ///
    /// Empty queries and submissions while loading leave the state untouched.
    pub fn begin(&mut self, query: &str) -> Submission {
        let query = query.trim();
        if query.is_empty() {
            return Submission::Empty;
        }
        if self.state.is_loading() {
            debug!("Ignoring '{}' while a lookup is loading", query);
            return Submission::Busy;
        }

        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        self.in_flight = Some(id);
        self.state = RequestState::Loading;
        debug!("Started lookup {} for '{}'", id, query);

        Submission::Started(Ticket {
            id,
            query: query.to_string(),
        })
    }

    /// Apply an outcome. Returns `false` when it was stale and discarded.
    pub fn complete(&mut self, outcome: Outcome) -> bool {
        if self.in_flight != Some(outcome.id) {
            debug!("Discarding stale outcome {}", outcome.id);
            return false;
        }

        self.in_flight = None;
        self.state = match outcome.result {
            Ok(snapshot) => RequestState::Success(snapshot),
            Err(e) => RequestState::Failed(ErrorReason::from(&e)),
        };
        true
    }

    /// Give up on the loading lookup; its outcome will be discarded
    pub fn abandon(&mut self) -> bool {
        match self.in_flight.take() {
            Some(id) => {
                info!("Abandoned lookup {}", id);
                self.state = RequestState::Idle;
                true
            }
            None => false,
        }
    }

    /// Run a whole lookup in place
    pub async fn submit(&mut self, query: &str) -> &RequestState {
        if let Submission::Started(ticket) = self.begin(query) {
            let outcome = self.pipeline.run(ticket).await;
            self.complete(outcome);
        }
        &self.state
    }
}
