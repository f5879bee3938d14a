use serde_json::Value;

/// Zero-based cursor position within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A span between two positions; `start == end` denotes a collapsed range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Collapsed range at a single position
    pub fn at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// How a revealed range should be placed in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Scroll the minimum amount needed to bring the range into view
    Default,
    /// Center the viewport on the range
    Center,
}

/// The live, focused editable surface a command acts upon.
///
/// Executors mutate editor state exclusively through this trait; the crate
/// never touches document text. Out-of-range positions are the surface's own
/// concern — implementations clamp however the host editor does.
pub trait EditorSurface {
    /// Current cursor (the active end of the selection)
    fn cursor(&self) -> Position;

    /// Replace the selection; `anchor == active` collapses it to a caret
    fn set_selection(&mut self, anchor: Position, active: Position);

    /// Bring a range into view
    fn reveal_range(&mut self, range: Range, mode: Reveal);

    /// Invoke a named built-in editor action (e.g. a compound scroll)
    fn execute_builtin(&mut self, name: &str, options: &Value) -> anyhow::Result<()>;
}

/// Provider of the currently focused surface.
///
/// `None` means no surface has focus, which is an expected condition at
/// dispatch time, not an error.
pub trait EditorHost: Send {
    fn active_editor(&mut self) -> Option<&mut dyn EditorSurface>;
}

/// Host holding at most one focused surface.
///
/// Covers the common embedding case of a single document view; `unfocused()`
/// models the no-active-surface condition.
pub struct SingleEditorHost<S: EditorSurface + Send> {
    surface: Option<S>,
}

impl<S: EditorSurface + Send> SingleEditorHost<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Host with no focused surface
    pub fn unfocused() -> Self {
        Self { surface: None }
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }
}

impl<S: EditorSurface + Send> EditorHost for SingleEditorHost<S> {
    fn active_editor(&mut self) -> Option<&mut dyn EditorSurface> {
        self.surface
            .as_mut()
            .map(|s| s as &mut dyn EditorSurface)
    }
}

/// Minimal in-memory surface for tests and headless hosts.
///
/// Tracks cursor, selection and a viewport top line over a fixed number of
/// lines, and records every built-in invocation. Positions past the last line
/// clamp to it, mirroring how real editor surfaces treat out-of-range input.
#[derive(Debug)]
pub struct BufferView {
    line_count: usize,
    selection: (Position, Position),
    viewport_top: usize,
    revealed: Vec<(Range, Reveal)>,
    builtins: Vec<(String, Value)>,
}

impl BufferView {
    pub fn new(line_count: usize) -> Self {
        Self {
            line_count,
            selection: (Position::new(0, 0), Position::new(0, 0)),
            viewport_top: 0,
            revealed: Vec::new(),
            builtins: Vec::new(),
        }
    }

    pub fn with_cursor(line_count: usize, cursor: Position) -> Self {
        let mut view = Self::new(line_count);
        view.selection = (cursor, cursor);
        view
    }

    fn clamp(&self, pos: Position) -> Position {
        let last = self.line_count.saturating_sub(1);
        Position::new(pos.line.min(last), pos.column)
    }

    pub fn selection(&self) -> (Position, Position) {
        self.selection
    }

    pub fn viewport_top(&self) -> usize {
        self.viewport_top
    }

    pub fn revealed(&self) -> &[(Range, Reveal)] {
        &self.revealed
    }

    /// Built-in actions executed against this view, in call order
    pub fn builtins(&self) -> &[(String, Value)] {
        &self.builtins
    }
}

impl EditorSurface for BufferView {
    fn cursor(&self) -> Position {
        self.selection.1
    }

    fn set_selection(&mut self, anchor: Position, active: Position) {
        self.selection = (self.clamp(anchor), self.clamp(active));
    }

    fn reveal_range(&mut self, range: Range, mode: Reveal) {
        self.revealed.push((range, mode));
        // Center on the range start; otherwise scroll just far enough
        match mode {
            Reveal::Center => {
                self.viewport_top = range.start.line;
            }
            Reveal::Default => {
                if range.start.line < self.viewport_top {
                    self.viewport_top = range.start.line;
                }
            }
        }
    }

    fn execute_builtin(&mut self, name: &str, options: &Value) -> anyhow::Result<()> {
        if name == "editorScroll" {
            let step = options
                .get("value")
                .and_then(|v| v.as_u64())
                .unwrap_or(1) as usize;
            match options.get("to").and_then(|v| v.as_str()) {
                Some("down") => {
                    let last = self.line_count.saturating_sub(1);
                    self.viewport_top = (self.viewport_top + step).min(last);
                }
                _ => {
                    self.viewport_top = self.viewport_top.saturating_sub(step);
                }
            }
        }
        self.builtins.push((name.to_string(), options.clone()));
        Ok(())
    }
}
