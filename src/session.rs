use std::sync::{Arc, Mutex};

use crate::config::PollConfig;
use crate::diag::DiagnosticsSink;
use crate::dispatch::Dispatcher;
use crate::editor::EditorHost;
use crate::poller::Poller;
use crate::registry::Registry;
use crate::source::{CommandSource, HttpSource};

/// One remote-control session over an editor host.
///
/// The whole exposed lifecycle: `activate()` begins polling, `deactivate()`
/// stops it. Neither returns an error; every failure inside a cycle surfaces
/// only as diagnostics lines.
pub struct Session {
    poller: Poller,
}

impl Session {
    /// Session with the HTTP transport and the builtin action set
    pub fn new(
        config: PollConfig,
        host: Arc<Mutex<dyn EditorHost>>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        let source = Arc::new(HttpSource::new(config.endpoint.clone()));
        Self::with_parts(config, source, Registry::builtin(), host, diagnostics)
    }

    /// Session with a caller-supplied transport and registry
    pub fn with_parts(
        config: PollConfig,
        source: Arc<dyn CommandSource>,
        registry: Registry,
        host: Arc<Mutex<dyn EditorHost>>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        let dispatcher = Dispatcher::new(registry, diagnostics.clone());
        Self {
            poller: Poller::new(config, source, dispatcher, host, diagnostics),
        }
    }

    /// Begin polling. Safe to call repeatedly; one cadence at a time.
    pub fn activate(&mut self) {
        self.poller.start();
    }

    /// Stop polling. Safe to call repeatedly or before activation.
    pub fn deactivate(&mut self) {
        self.poller.stop();
    }

    pub fn is_active(&self) -> bool {
        self.poller.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::MemorySink;
    use crate::editor::{BufferView, SingleEditorHost};

    #[tokio::test]
    async fn session_lifecycle_activates_and_deactivates() {
        let host: Arc<Mutex<dyn EditorHost>> =
            Arc::new(Mutex::new(SingleEditorHost::new(BufferView::new(10))));
        let sink = Arc::new(MemorySink::new());

        // Default endpoint has nothing listening; transport errors are
        // contained, so the lifecycle itself must still work
        let mut session = Session::new(PollConfig::default(), host, sink);
        assert!(!session.is_active());

        session.activate();
        assert!(session.is_active());

        session.deactivate();
        assert!(!session.is_active());
        session.deactivate();
    }
}
