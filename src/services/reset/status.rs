//! Estado observable del reinicio y reloj inyectable

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::utils::dates::serialize_timestamp_opt;

/// Copia del estado del reinicio tal como la ve `GET /api/reset/status`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResetStatus {
    pub in_progress: bool,
    #[serde(serialize_with = "serialize_timestamp_opt")]
    pub started_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "serialize_timestamp_opt")]
    pub finished_at: Option<NaiveDateTime>,
    pub last_error: Option<String>,
}

impl ResetStatus {
    /// Idle -> Running
    pub(crate) fn begin(&mut self, now: NaiveDateTime) {
        self.in_progress = true;
        self.started_at = Some(now);
        self.finished_at = None;
        self.last_error = None;
    }

    /// Running -> Idle
    pub(crate) fn finish(&mut self, now: NaiveDateTime, error: Option<String>) {
        self.in_progress = false;
        self.finished_at = Some(now);
        self.last_error = error;
    }
}

/// Resultado de pedir un reinicio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Accepted,
    AlreadyRunning,
}

impl ResetOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ResetOutcome::Accepted => "Reset started",
            ResetOutcome::AlreadyRunning => "Reset already in progress",
        }
    }
}

/// Fuente de la hora local
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reloj del sistema en hora local
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
