use std::collections::HashMap;
use std::sync::Arc;

use anyhow::bail;

use crate::action::{ActionExecutor, ActionKind};
use crate::actions::{JumpToLine, MoveCursor, Scroll};

/// Lookup table from action kind to executor.
///
/// Populated once at startup and immutable afterwards; each kind has exactly
/// one executor. Lookup is total — a missing kind is `None`, never a panic.
pub struct Registry {
    executors: HashMap<ActionKind, Arc<dyn ActionExecutor>>,
}

impl Registry {
    /// Empty registry, for hosts that install their own executor set
    pub fn new() -> Self {
        Self {
            executors: HashMap::new(),
        }
    }

    /// The fixed production set: MOVE_CURSOR, JUMP_TO_LINE, SCROLL
    pub fn builtin() -> Self {
        let mut executors: HashMap<ActionKind, Arc<dyn ActionExecutor>> = HashMap::new();
        executors.insert(ActionKind::MoveCursor, Arc::new(MoveCursor));
        executors.insert(ActionKind::JumpToLine, Arc::new(JumpToLine));
        executors.insert(ActionKind::Scroll, Arc::new(Scroll));
        Self { executors }
    }

    /// Install an executor for a kind. Duplicate kinds are rejected so no
    /// kind can ever resolve to two executors.
    pub fn register(
        &mut self,
        kind: ActionKind,
        executor: Arc<dyn ActionExecutor>,
    ) -> anyhow::Result<()> {
        if self.executors.contains_key(&kind) {
            bail!("executor already registered for kind {}", kind.as_kind());
        }
        self.executors.insert(kind, executor);
        Ok(())
    }

    pub fn get(&self, kind: ActionKind) -> Option<&Arc<dyn ActionExecutor>> {
        self.executors.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
