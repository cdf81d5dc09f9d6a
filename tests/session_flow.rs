//! Async session flows: runner handshake, run delays and banner timers.
//!
//! Every test runs on a paused clock inside a `LocalSet`, since banner
//! timers are spawned as local tasks.

use std::future::Future;
use std::time::Duration;

use codepad::AppContext;
use codepad::Session;
use codepad::config::{RUN_BUSY, RUN_END_BANNER, RUN_NO_FILE, RUN_START_BANNER, RUNNER_INIT_FAILED};
use codepad::core::ShortcutOutcome;
use codepad::core::engine::{RunnerProbe, RunnerStatus, SimulatedRunner};
use codepad::core::error::RunnerError;
use codepad::models::{EntryId, Language};
use tokio::task::LocalSet;
use tokio::time::{Instant, sleep};

struct OfflineRunner;

impl RunnerProbe for OfflineRunner {
    async fn connect(&self) -> Result<Vec<Language>, RunnerError> {
        Err(RunnerError::Unreachable("connection refused".to_string()))
    }
}

async fn local<F: Future<Output = ()>>(f: F) {
    LocalSet::new().run_until(f).await;
}

fn texts(ctx: &AppContext) -> Vec<String> {
    ctx.read(|s| {
        s.console()
            .entries()
            .iter()
            .map(|e| e.text.clone())
            .collect()
    })
}

fn open_sample_file(ctx: &AppContext) {
    assert!(ctx.update(|s| s.open_file(&EntryId::from("file-1"))));
}

#[tokio::test(start_paused = true)]
async fn test_runner_becomes_ready_after_delay() {
    local(async {
        let ctx = AppContext::new(Session::default());
        let runner_ctx = ctx.clone();
        tokio::task::spawn_local(async move {
            runner_ctx.init_runner(&SimulatedRunner::default()).await;
        });

        sleep(Duration::from_millis(999)).await;
        assert_eq!(ctx.read(|s| s.runner().clone()), RunnerStatus::Pending);

        sleep(Duration::from_millis(2)).await;
        assert!(ctx.read(|s| s.runner().supports(Language::TypeScript)));
        assert_eq!(
            texts(&ctx),
            ["Code execution environment is ready. Supported languages: python, javascript, typescript"]
        );
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_runner_run_waits_for_execution_delay() {
    local(async {
        let ctx = AppContext::new(Session::default());
        ctx.init_runner(&SimulatedRunner::default()).await;
        open_sample_file(&ctx);

        let started = Instant::now();
        assert!(ctx.run().await);
        assert!(started.elapsed() >= Duration::from_millis(1500));

        assert_eq!(
            texts(&ctx)[1..],
            [
                RUN_START_BANNER,
                "Running Python code...",
                "Hello, World!\n",
                RUN_END_BANNER
            ]
        );
        assert!(!ctx.read(Session::is_running));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_failed_runner_falls_back_to_local() {
    local(async {
        let ctx = AppContext::new(Session::default());
        ctx.init_runner(&OfflineRunner).await;
        assert_eq!(ctx.read(|s| s.runner().clone()), RunnerStatus::Unavailable);

        open_sample_file(&ctx);
        let started = Instant::now();
        assert!(ctx.run().await);
        assert_eq!(started.elapsed(), Duration::ZERO);

        assert_eq!(
            texts(&ctx),
            [
                RUNNER_INIT_FAILED,
                RUN_START_BANNER,
                "Hello, World!\n",
                RUN_END_BANNER
            ]
        );
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_run_is_rejected() {
    local(async {
        let ctx = AppContext::new(Session::default());
        ctx.init_runner(&SimulatedRunner::default()).await;
        open_sample_file(&ctx);

        let first_ctx = ctx.clone();
        let first = tokio::task::spawn_local(async move { first_ctx.run().await });

        sleep(Duration::from_millis(10)).await;
        assert!(ctx.read(Session::is_running));
        assert!(!ctx.run().await);

        assert!(first.await.unwrap());
        let lines = texts(&ctx);
        assert_eq!(lines.iter().filter(|t| *t == RUN_START_BANNER).count(), 1);
        assert_eq!(lines.iter().filter(|t| *t == RUN_END_BANNER).count(), 1);
        assert_eq!(
            lines[1..],
            [
                RUN_START_BANNER,
                "Running Python code...",
                RUN_BUSY,
                "Hello, World!\n",
                RUN_END_BANNER
            ]
        );
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_new_banner_supersedes_old_timer() {
    local(async {
        let ctx = AppContext::new(Session::default());
        open_sample_file(&ctx);

        sleep(Duration::from_millis(2000)).await;
        ctx.update(|s| s.toggle_folder(&EntryId::from("folder-2")));

        // The first banner's timer fires here but is stale
        sleep(Duration::from_millis(1500)).await;
        ctx.read(|s| {
            assert!(s.feedback().visible);
            assert_eq!(s.feedback().message, "docs folder opened");
        });

        sleep(Duration::from_millis(2000)).await;
        assert!(!ctx.read(|s| s.feedback().visible));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn test_run_shortcut_without_file() {
    local(async {
        let ctx = AppContext::new(Session::default());
        assert_eq!(ctx.handle_key("F5").await, ShortcutOutcome::RunRequested);
        assert_eq!(texts(&ctx), [RUN_NO_FILE]);
    })
    .await;
}
