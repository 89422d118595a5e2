//! Session controller — owns the per-browser lesson-plan state.
//!
//! Each browser session (cookie `rpm_session`) has one `Session`: the form
//! draft, the current `Phase`, and the last user-facing error. Views only
//! ever get clones.
//!
//! Locking: the store's mutex is held for bookkeeping only, never across the
//! generator call. The call itself runs in a task owned by the store, so it
//! finishes and records its outcome even when the submitting request is
//! dropped. An `epoch` counter detects a reset that happened while a
//! generation was in flight; the late result is then discarded. At most one
//! call per session is in flight, reset or not.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::generation::generator::{ContentGenerator, GenerationError};
use crate::lesson::validation::ValidationResult;
use crate::lesson::{FormState, LessonPlanContent, LessonPlanRequest};

/// A validated request together with the content generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    pub request: LessonPlanRequest,
    pub content: LessonPlanContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Generating,
    Ready(Box<GeneratedPlan>),
}

#[derive(Debug, Clone)]
pub struct Session {
    pub form: FormState,
    pub phase: Phase,
    pub error: Option<String>,
    last_seen: Instant,
    epoch: u64,
    in_flight: bool,
}

impl Session {
    fn new() -> Self {
        Self {
            form: FormState::default(),
            phase: Phase::Editing,
            error: None,
            last_seen: Instant::now(),
            epoch: 0,
            in_flight: false,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.phase == Phase::Generating
    }

    pub fn plan(&self) -> Option<&GeneratedPlan> {
        match &self.phase {
            Phase::Ready(plan) => Some(&**plan),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form is incomplete")]
    Invalid(ValidationResult),

    #[error("a generation is already in progress for this session")]
    Busy,

    #[error("session was reset while generating")]
    Discarded,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(validation) => validation.summary(),
            SubmitError::Busy => "RPM sedang dibuat. Mohon tunggu.".to_string(),
            SubmitError::Discarded => "Pembuatan RPM dibatalkan.".to_string(),
            SubmitError::Generation(e) => e.user_message().to_string(),
        }
    }
}

/// In-memory session table. Cloning shares the table.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drops sessions idle for longer than the TTL, except ones that are
    /// waiting on the generator.
    fn prune(&self, sessions: &mut HashMap<Uuid, Session>) {
        let before = sessions.len();
        let ttl = self.ttl;
        sessions.retain(|_, s| s.in_flight || s.last_seen.elapsed() < ttl);
        let pruned = before - sessions.len();
        if pruned > 0 {
            debug!("Pruned {pruned} idle session(s)");
        }
    }

    /// Fetches (creating when absent) and touches a session.
    fn entry<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, Session>,
        id: Uuid,
    ) -> &'a mut Session {
        self.prune(sessions);
        let session = sessions.entry(id).or_insert_with(Session::new);
        session.last_seen = Instant::now();
        session
    }

    /// A read-only copy of the session, created fresh when unknown.
    pub fn snapshot(&self, id: Uuid) -> Session {
        let mut sessions = self.lock();
        self.entry(&mut sessions, id).clone()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Validates `form`, runs the generator once, and records the outcome.
    ///
    /// The form is stored as typed, so it survives every failure. An invalid
    /// form never reaches the generator; a session with a call still in
    /// flight is rejected with `Busy`.
    pub async fn submit(
        &self,
        id: Uuid,
        form: FormState,
        generator: Arc<dyn ContentGenerator>,
    ) -> Result<GeneratedPlan, SubmitError> {
        let (request, epoch) = {
            let mut sessions = self.lock();
            let session = self.entry(&mut sessions, id);
            if session.in_flight {
                return Err(SubmitError::Busy);
            }
            session.form = form;
            match session.form.submit() {
                Ok(request) => {
                    session.phase = Phase::Generating;
                    session.error = None;
                    session.in_flight = true;
                    (request, session.epoch)
                }
                Err(validation) => {
                    session.error = Some(validation.summary());
                    return Err(SubmitError::Invalid(validation));
                }
            }
        };

        let store = self.clone();
        let task = tokio::spawn(async move {
            let outcome = generator.generate(&request).await;
            store.finish(id, epoch, request, outcome)
        });

        match task.await {
            Ok(result) => result,
            Err(e) => {
                error!("Generation task for session {id} failed: {e}");
                let failure = GenerationError::Service(e.to_string());
                self.abandon(id, epoch, &failure);
                Err(SubmitError::Generation(failure))
            }
        }
    }

    /// Records a finished generator call. Runs inside the generation task.
    fn finish(
        &self,
        id: Uuid,
        epoch: u64,
        request: LessonPlanRequest,
        outcome: Result<LessonPlanContent, GenerationError>,
    ) -> Result<GeneratedPlan, SubmitError> {
        let mut sessions = self.lock();
        let Some(session) = sessions.get_mut(&id) else {
            return Err(SubmitError::Discarded);
        };
        session.in_flight = false;
        if session.epoch != epoch {
            info!("Session {id} was reset during generation; result discarded");
            return Err(SubmitError::Discarded);
        }
        session.last_seen = Instant::now();

        match outcome {
            Ok(content) => {
                let plan = GeneratedPlan { request, content };
                session.phase = Phase::Ready(Box::new(plan.clone()));
                session.error = None;
                Ok(plan)
            }
            Err(e) => {
                warn!("Generation failed for session {id}: {e}");
                session.phase = Phase::Editing;
                session.error = Some(e.user_message().to_string());
                Err(SubmitError::Generation(e))
            }
        }
    }

    /// Releases a session whose generation task died before `finish`.
    fn abandon(&self, id: Uuid, epoch: u64, failure: &GenerationError) {
        let mut sessions = self.lock();
        if let Some(session) = sessions.get_mut(&id) {
            session.in_flight = false;
            if session.epoch == epoch {
                session.phase = Phase::Editing;
                session.error = Some(failure.user_message().to_string());
            }
        }
    }

    /// "Buat Baru": back to an empty form. Any in-flight result is discarded.
    pub fn reset(&self, id: Uuid) {
        let mut sessions = self.lock();
        let session = self.entry(&mut sessions, id);
        let epoch = session.epoch.wrapping_add(1);
        let in_flight = session.in_flight;
        *session = Session::new();
        session.epoch = epoch;
        session.in_flight = in_flight;
    }
}
