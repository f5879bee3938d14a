use serde_json::{json, Value};

use crate::action::ActionExecutor;
use crate::editor::EditorSurface;

/// Lines scrolled per SCROLL command
pub const SCROLL_STEP: u64 = 5;

/// SCROLL: move the viewport by a fixed step via the editor's compound scroll
/// built-in.
///
/// params: [direction]. Exactly `"down"` scrolls down; any other value,
/// including a missing or non-string param, scrolls up. The default-to-up
/// policy is deliberate ("Down" scrolls up), not a validation gap.
pub struct Scroll;

impl ActionExecutor for Scroll {
    fn execute(&self, editor: &mut dyn EditorSurface, params: &[Value]) -> anyhow::Result<()> {
        let direction = match params.first().and_then(|v| v.as_str()) {
            Some("down") => "down",
            _ => "up",
        };
        editor.execute_builtin(
            "editorScroll",
            &json!({"to": direction, "by": "line", "value": SCROLL_STEP}),
        )
    }
}
