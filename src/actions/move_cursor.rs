use anyhow::bail;
use serde_json::Value;

use super::{int_param, str_param};
use crate::action::ActionExecutor;
use crate::editor::{EditorSurface, Position, Range, Reveal};

/// MOVE_CURSOR: translate the cursor by a quantity along one axis.
///
/// params: [unit ("line"|"char"), quantity (integer), direction
/// ("up"|"down"|"left"|"right")]. A unit/direction pair that does not belong
/// to the same axis is a no-op move: the selection is still collapsed at the
/// unchanged position and revealed.
pub struct MoveCursor;

impl ActionExecutor for MoveCursor {
    fn execute(&self, editor: &mut dyn EditorSurface, params: &[Value]) -> anyhow::Result<()> {
        let unit = str_param(params, 0, "unit")?;
        let qty = int_param(params, 1, "quantity")?;
        let direction = str_param(params, 2, "direction")?;

        let current = editor.cursor();
        let mut line = current.line as i64;
        let mut column = current.column as i64;

        match (unit, direction) {
            ("line", "down") => line += qty,
            ("line", "up") => line -= qty,
            ("char", "right") => column += qty,
            ("char", "left") => column -= qty,
            _ => {}
        }

        if line < 0 || column < 0 {
            bail!("move lands before the document start (line {}, column {})", line, column);
        }

        let target = Position::new(line as usize, column as usize);
        editor.set_selection(target, target);
        editor.reveal_range(Range::at(target), Reveal::Default);
        Ok(())
    }
}
