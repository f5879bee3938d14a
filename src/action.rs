use serde_json::Value;

use crate::editor::EditorSurface;

/// The closed set of editing actions this crate knows how to execute.
///
/// Wire kinds are free-form strings; resolving one that has no variant here is
/// a recoverable dispatch-time condition, never a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Translate the cursor along the line or character axis
    MoveCursor,
    /// Move the cursor to column 0 of a 1-based line number
    JumpToLine,
    /// Scroll the viewport by a fixed step
    Scroll,
}

impl ActionKind {
    /// Resolve a wire kind string; `None` means "unknown kind"
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "MOVE_CURSOR" => Some(Self::MoveCursor),
            "JUMP_TO_LINE" => Some(Self::JumpToLine),
            "SCROLL" => Some(Self::Scroll),
            _ => None,
        }
    }

    /// The wire identifier for this kind
    pub fn as_kind(&self) -> &'static str {
        match self {
            Self::MoveCursor => "MOVE_CURSOR",
            Self::JumpToLine => "JUMP_TO_LINE",
            Self::Scroll => "SCROLL",
        }
    }
}

/// One registered editor mutation.
///
/// Executors validate and coerce their own positional params; a returned error
/// is contained at the dispatcher boundary and reported, never propagated into
/// the poll loop.
pub trait ActionExecutor: Send + Sync {
    fn execute(&self, editor: &mut dyn EditorSurface, params: &[Value]) -> anyhow::Result<()>;
}
