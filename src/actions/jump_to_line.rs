use anyhow::bail;
use serde_json::Value;

use super::int_param;
use crate::action::ActionExecutor;
use crate::editor::{EditorSurface, Position, Range, Reveal};

/// JUMP_TO_LINE: move the cursor to column 0 of a 1-based line number and
/// center the viewport there.
///
/// params: [line number (integer, 1-based)]. Lines past the end of the
/// document are left to the surface's own clamping; lines below 1 are an
/// executor error.
pub struct JumpToLine;

impl ActionExecutor for JumpToLine {
    fn execute(&self, editor: &mut dyn EditorSurface, params: &[Value]) -> anyhow::Result<()> {
        let line = int_param(params, 0, "line number")?;
        if line < 1 {
            bail!("line number must be 1-based, got {}", line);
        }

        let target = Position::new((line - 1) as usize, 0);
        editor.set_selection(target, target);
        editor.reveal_range(Range::at(target), Reveal::Center);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::BufferView;
    use serde_json::json;

    #[test]
    fn jump_moves_to_zero_based_line_column_zero() {
        let mut view = BufferView::with_cursor(100, Position::new(70, 12));
        JumpToLine.execute(&mut view, &[json!("5")]).unwrap();
        assert_eq!(view.cursor(), Position::new(4, 0));
    }

    #[test]
    fn jump_centers_the_viewport() {
        let mut view = BufferView::new(100);
        JumpToLine.execute(&mut view, &[json!("41")]).unwrap();
        assert_eq!(view.revealed(), &[(Range::at(Position::new(40, 0)), Reveal::Center)]);
        assert_eq!(view.viewport_top(), 40);
    }

    #[test]
    fn jump_past_end_is_clamped_by_the_surface() {
        let mut view = BufferView::new(10);
        JumpToLine.execute(&mut view, &[json!("500")]).unwrap();
        assert_eq!(view.cursor(), Position::new(9, 0));
    }

    #[test]
    fn jump_accepts_json_number() {
        let mut view = BufferView::new(100);
        JumpToLine.execute(&mut view, &[json!(8)]).unwrap();
        assert_eq!(view.cursor(), Position::new(7, 0));
    }

    #[test]
    fn jump_to_line_zero_errors() {
        let mut view = BufferView::with_cursor(100, Position::new(3, 3));
        assert!(JumpToLine.execute(&mut view, &[json!("0")]).is_err());
        assert_eq!(view.cursor(), Position::new(3, 3));
    }

    #[test]
    fn non_numeric_line_errors() {
        let mut view = BufferView::new(100);
        assert!(JumpToLine.execute(&mut view, &[json!("ten")]).is_err());
    }

    #[test]
    fn missing_param_errors() {
        let mut view = BufferView::new(100);
        assert!(JumpToLine.execute(&mut view, &[]).is_err());
    }
}
