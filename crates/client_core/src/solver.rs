use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{SolveRequest, SolveResponse};
use tracing::{debug, info};
use url::Url;

use crate::error::SolverError;

/// One round-trip to whatever computes the timetable.
#[async_trait]
pub trait SolverTransport: Send + Sync {
    async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolverError>;
}

/// Posts the snapshot as JSON to the solver endpoint. Single attempt, no retry.
pub struct HttpSolverClient {
    http: Client,
    solver_url: Url,
}

impl HttpSolverClient {
    pub fn new(solver_url: &str) -> Result<Self, SolverError> {
        Self::with_timeout(solver_url, None)
    }

    pub fn with_timeout(solver_url: &str, timeout: Option<Duration>) -> Result<Self, SolverError> {
        let parsed = Url::parse(solver_url).map_err(|source| SolverError::InvalidUrl {
            url: solver_url.to_string(),
            source,
        })?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(SolverError::Transport)?;
        Ok(Self {
            http,
            solver_url: parsed,
        })
    }

    pub fn solver_url(&self) -> &Url {
        &self.solver_url
    }
}

#[async_trait]
impl SolverTransport for HttpSolverClient {
    async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolverError> {
        debug!(
            url = %self.solver_url,
            teachers = request.teachers.len(),
            rooms = request.rooms.len(),
            classes = request.classes.len(),
            time_slots = request.time_slots.len(),
            "posting solve request"
        );
        let res = self
            .http
            .post(self.solver_url.clone())
            .json(request)
            .send()
            .await
            .map_err(SolverError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            return Err(SolverError::Status(status));
        }

        let body: SolveResponse = res.json().await.map_err(SolverError::Decode)?;
        info!(
            status = %body.status,
            entries = body.schedule.len(),
            "solver responded"
        );
        Ok(body)
    }
}

#[cfg(test)]
#[path = "tests/solver_tests.rs"]
mod tests;
