use std::sync::Arc;

use crate::action::ActionKind;
use crate::diag::DiagnosticsSink;
use crate::editor::EditorSurface;
use crate::protocol::Command;
use crate::registry::Registry;

/// Resolves a decoded command against the registry and invokes exactly one
/// executor, containing every failure.
///
/// Nothing above this boundary ever observes an error: missing surface,
/// unknown kind and executor failures all end as diagnostic lines, and the
/// caller's loop keeps running.
pub struct Dispatcher {
    registry: Registry,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl Dispatcher {
    pub fn new(registry: Registry, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            registry,
            diagnostics,
        }
    }

    /// Dispatch one command against the current surface, if any.
    ///
    /// The surface may be absent (no focused editor); that is an expected
    /// environment condition, reported and skipped.
    pub fn dispatch(&self, command: &Command, editor: Option<&mut dyn EditorSurface>) {
        let Some(editor) = editor else {
            self.diagnostics.append_line("no active editor");
            return;
        };

        let executor = ActionKind::from_kind(&command.kind)
            .and_then(|kind| self.registry.get(kind));
        let Some(executor) = executor else {
            self.diagnostics
                .append_line(&format!("unknown command kind: {}", command.kind));
            return;
        };

        match executor.execute(editor, &command.params) {
            Ok(()) => {
                self.diagnostics
                    .append_line(&format!("executed {}", command.kind));
            }
            Err(err) => {
                self.diagnostics
                    .append_line(&format!("error in executor for {}: {:#}", command.kind, err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::MemorySink;
    use crate::editor::{BufferView, Position};
    use serde_json::json;

    fn dispatcher(sink: Arc<MemorySink>) -> Dispatcher {
        Dispatcher::new(Registry::builtin(), sink)
    }

    #[test]
    fn no_surface_logs_and_skips() {
        let sink = Arc::new(MemorySink::new());
        let dispatcher = dispatcher(sink.clone());

        let command = Command::new("SCROLL", vec![json!("down")]);
        dispatcher.dispatch(&command, None);

        assert_eq!(sink.lines(), vec!["no active editor"]);
    }

    #[test]
    fn unknown_kind_logs_and_leaves_editor_untouched() {
        let sink = Arc::new(MemorySink::new());
        let dispatcher = dispatcher(sink.clone());
        let mut view = BufferView::with_cursor(100, Position::new(7, 2));

        let command = Command::new("TELEPORT", vec![]);
        dispatcher.dispatch(&command, Some(&mut view));

        assert_eq!(sink.lines(), vec!["unknown command kind: TELEPORT"]);
        assert_eq!(view.cursor(), Position::new(7, 2));
        assert!(view.builtins().is_empty());
    }

    #[test]
    fn unregistered_kind_logs_unknown() {
        // A known wire kind with no executor in a custom registry
        let sink = Arc::new(MemorySink::new());
        let dispatcher = Dispatcher::new(Registry::new(), sink.clone());
        let mut view = BufferView::new(10);

        dispatcher.dispatch(&Command::new("SCROLL", vec![json!("down")]), Some(&mut view));

        assert_eq!(sink.lines(), vec!["unknown command kind: SCROLL"]);
    }

    #[test]
    fn successful_dispatch_logs_executed() {
        let sink = Arc::new(MemorySink::new());
        let dispatcher = dispatcher(sink.clone());
        let mut view = BufferView::new(100);

        dispatcher.dispatch(&Command::new("JUMP_TO_LINE", vec![json!("5")]), Some(&mut view));

        assert_eq!(view.cursor(), Position::new(4, 0));
        assert_eq!(sink.lines(), vec!["executed JUMP_TO_LINE"]);
    }

    #[test]
    fn executor_failure_is_contained_and_logged_with_kind() {
        let sink = Arc::new(MemorySink::new());
        let dispatcher = dispatcher(sink.clone());
        let mut view = BufferView::new(100);

        let command = Command::new("MOVE_CURSOR", vec![json!("line"), json!("three"), json!("down")]);
        dispatcher.dispatch(&command, Some(&mut view));

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("error in executor for MOVE_CURSOR:"));
        assert_eq!(view.cursor(), Position::new(0, 0));
    }

    #[test]
    fn dispatcher_survives_failure_and_handles_next_command() {
        let sink = Arc::new(MemorySink::new());
        let dispatcher = dispatcher(sink.clone());
        let mut view = BufferView::new(100);

        dispatcher.dispatch(&Command::new("MOVE_CURSOR", vec![json!("line")]), Some(&mut view));
        dispatcher.dispatch(&Command::new("SCROLL", vec![json!("down")]), Some(&mut view));

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("error in executor for MOVE_CURSOR:"));
        assert_eq!(lines[1], "executed SCROLL");
        assert_eq!(view.viewport_top(), 5);
    }
}
