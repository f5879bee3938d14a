use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::PollConfig;
use crate::diag::DiagnosticsSink;
use crate::dispatch::Dispatcher;
use crate::editor::EditorHost;
use crate::protocol::{decode, Decoded};
use crate::source::CommandSource;

/// Drives the retrieval cadence: one fetch per tick, decoded and handed to
/// the dispatcher.
///
/// Back-pressure policy is skip-the-tick: each retrieval is awaited to
/// completion before the next tick fires, so at most one request is ever in
/// flight and dispatch order matches source order. Transport and decode
/// failures are reported and never stop the cadence; only `stop()` does.
pub struct Poller {
    config: PollConfig,
    source: Arc<dyn CommandSource>,
    dispatcher: Arc<Dispatcher>,
    host: Arc<Mutex<dyn EditorHost>>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    stopping: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn new(
        config: PollConfig,
        source: Arc<dyn CommandSource>,
        dispatcher: Dispatcher,
        host: Arc<Mutex<dyn EditorHost>>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            config,
            source,
            dispatcher: Arc::new(dispatcher),
            host,
            diagnostics,
            stopping: Arc::new(AtomicBool::new(false)),
            task: None,
        }
    }

    /// Begin the cadence. Idempotent: a second call while a cadence is
    /// already active is reported and ignored, so there is never more than
    /// one active timer.
    pub fn start(&mut self) {
        if self.is_active() {
            self.diagnostics.append_line("poll cadence already active");
            return;
        }

        self.stopping.store(false, Ordering::SeqCst);

        let config = self.config.clone();
        let source = Arc::clone(&self.source);
        let dispatcher = Arc::clone(&self.dispatcher);
        let host = Arc::clone(&self.host);
        let diagnostics = Arc::clone(&self.diagnostics);
        let stopping = Arc::clone(&self.stopping);

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config.interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if stopping.load(Ordering::SeqCst) {
                    break;
                }

                // ureq is a blocking client; keep it off the async threads
                let fetch_source = Arc::clone(&source);
                let fetched =
                    tokio::task::spawn_blocking(move || fetch_source.fetch_next()).await;
                let raw = match fetched {
                    Ok(Ok(body)) => body,
                    Ok(Err(err)) => {
                        diagnostics.append_line(&format!("poll error: {:#}", err));
                        continue;
                    }
                    // Blocking task cancelled or panicked during shutdown
                    Err(_) => continue,
                };

                match decode(&raw) {
                    Ok(Decoded::Empty) => {}
                    Ok(Decoded::Command(command)) => {
                        diagnostics.append_line(&format!("received {}", command.kind));
                        let mut host = match host.lock() {
                            Ok(guard) => guard,
                            Err(poisoned) => poisoned.into_inner(),
                        };
                        dispatcher.dispatch(&command, host.active_editor());
                    }
                    Err(err) => {
                        diagnostics.append_line(&format!("parse error: {}", err));
                    }
                }
            }
        }));
    }

    /// Cancel the cadence. No new retrieval is initiated after this returns;
    /// an in-flight one may still complete and its result is dropped.
    /// A no-op when nothing is running.
    pub fn stop(&mut self) {
        self.stopping.store(true, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
