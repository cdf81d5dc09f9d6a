//! Root application module.
//!
//! Contains [`AppContext`], the shared handle every host callback goes
//! through. It wraps the synchronous [`Session`] and owns the async parts:
//! runner initialization, run delays and banner timers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::delays;
use crate::core::engine::{RunnerProbe, runner_transcript, simulate};
use crate::core::{RunMode, Session, ShortcutOutcome};
use crate::models::DismissTicket;
use crate::utils::timer;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide session handle.
///
/// Cheap to clone; all clones share one [`Session`]. Borrows never span an
/// await point, so callbacks may interleave freely between suspensions.
///
/// Natively, [`update`](Self::update) spawns banner timers with
/// `tokio::task::spawn_local`: inside a tokio runtime it must run within a
/// `LocalSet`; outside any runtime banners simply stay up.
#[derive(Clone, Default)]
pub struct AppContext {
    session: Rc<RefCell<Session>>,
}

impl AppContext {
    pub fn new(session: Session) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
        }
    }

    /// Read the session.
    pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.session.borrow())
    }

    /// Mutate the session, then arm the dismiss timer for any banner the
    /// mutation showed.
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let (result, ticket) = {
            let mut session = self.session.borrow_mut();
            let result = f(&mut session);
            (result, session.take_pending_dismiss())
        };
        if let Some(ticket) = ticket {
            schedule_dismiss(Rc::downgrade(&self.session), ticket);
        }
        result
    }

    /// Connect to the runner and record the outcome on the console.
    pub async fn init_runner<P: RunnerProbe>(&self, probe: &P) {
        match probe.connect().await {
            Ok(languages) => self.update(|s| s.runner_ready(languages)),
            Err(err) => self.update(|s| s.runner_failed(&err)),
        }
    }

    /// Run the active file. Returns `false` when the run was refused.
    pub async fn run(&self) -> bool {
        let Some(plan) = self.update(Session::begin_run) else {
            return false;
        };

        let result = match plan.mode {
            RunMode::Local => simulate(plan.language, &plan.source),
            RunMode::Runner => {
                timer::sleep(delays::RUNNER_EXEC_MS).await;
                Ok(runner_transcript(plan.language, &plan.source))
            }
        };

        self.update(|s| s.finish_run(result));
        true
    }

    /// Dispatch a key combination, running the active file when it is bound
    /// to Run.
    pub async fn handle_key(&self, combo: &str) -> ShortcutOutcome {
        let outcome = self.update(|s| s.dispatch_shortcut(combo));
        if outcome == ShortcutOutcome::RunRequested {
            self.run().await;
        }
        outcome
    }
}

fn schedule_dismiss(session: Weak<RefCell<Session>>, ticket: DismissTicket) {
    timer::spawn_local(async move {
        timer::sleep(delays::FEEDBACK_MS).await;
        if let Some(session) = session.upgrade() {
            session.borrow_mut().dismiss_feedback(ticket);
        }
    });
}
