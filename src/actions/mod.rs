// Executors for the built-in action kinds, one per file.
// Shared positional-parameter coercion lives here.

pub mod jump_to_line;
pub mod move_cursor;
pub mod scroll;

pub use jump_to_line::JumpToLine;
pub use move_cursor::MoveCursor;
pub use scroll::Scroll;

use anyhow::{anyhow, bail};
use serde_json::Value;

/// Required string slot at `index`
pub(crate) fn str_param<'a>(params: &'a [Value], index: usize, name: &str) -> anyhow::Result<&'a str> {
    params
        .get(index)
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow!("missing or non-string param {} ({})", index, name))
}

/// Required integer slot at `index`; accepts a JSON number or a numeric string
pub(crate) fn int_param(params: &[Value], index: usize, name: &str) -> anyhow::Result<i64> {
    let value = params
        .get(index)
        .ok_or_else(|| anyhow!("missing param {} ({})", index, name))?;
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| anyhow!("param {} ({}) is not an integer: {}", index, name, n)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| anyhow!("param {} ({}) is not a number: {:?}", index, name, s)),
        other => bail!("param {} ({}) has unsupported type: {}", index, name, other),
    }
}
