use serde::Deserialize;
use serde_json::Value;

/// Reserved `type` value meaning the source has no command pending.
pub const EMPTY_SENTINEL: &str = "EMPTY";

/// One command retrieved from the command source.
///
/// Built fresh from each poll response and discarded after a single dispatch
/// attempt; there is no queueing, retry or acknowledgment.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Kind identifier selecting the executor (e.g. "MOVE_CURSOR")
    pub kind: String,
    /// Positional parameters; each executor interprets its own slots
    pub params: Vec<Value>,
}

impl Command {
    pub fn new(kind: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            kind: kind.into(),
            params,
        }
    }
}

/// Raw payload shape as sent by the source
#[derive(Debug, Deserialize)]
struct WirePayload {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    params: Vec<Value>,
}

/// Result of decoding one poll response body
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A pending command to dispatch
    Command(Command),
    /// The reserved empty sentinel: nothing pending this cycle
    Empty,
}

/// Decode a raw response body into a command or the empty marker.
///
/// The only structural requirement is a `type` field; `params` defaults to an
/// empty list and unknown fields are ignored. Parameter validation belongs to
/// the executors, not here.
pub fn decode(raw: &str) -> Result<Decoded, serde_json::Error> {
    let payload: WirePayload = serde_json::from_str(raw)?;
    if payload.kind == EMPTY_SENTINEL {
        return Ok(Decoded::Empty);
    }
    Ok(Decoded::Command(Command {
        kind: payload.kind,
        params: payload.params,
    }))
}
