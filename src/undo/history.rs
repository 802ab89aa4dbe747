//! Bounded linear command history
//!
//! One stack, one cursor. Executed commands occupy indices `0..applied`;
//! anything at `applied..` is the redo branch and is discarded the moment a
//! new command executes. When the stack outgrows its limit the oldest entry
//! is evicted, silently giving up the deepest undo step — accepted lossy
//! behavior, the host shows at most `max_size` undo steps anyway.

use std::collections::VecDeque;

use super::commands::DesignerCommand;
use super::MAX_HISTORY_SIZE;
use crate::models::DesignerState;

/// Undo/redo history over [`DesignerCommand`]s
#[derive(Debug)]
pub struct CommandHistory {
    /// Executed commands, oldest first
    commands: VecDeque<DesignerCommand>,
    /// Number of commands currently applied to the document
    applied: usize,
    /// Maximum number of commands to keep
    max_size: usize,
    /// Set while a command runs; history calls made from inside a command's
    /// own execute/undo are rejected
    executing: bool,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(MAX_HISTORY_SIZE)
    }
}

impl CommandHistory {
    /// Create a history keeping at most `max_size` commands
    pub fn new(max_size: usize) -> Self {
        Self {
            commands: VecDeque::new(),
            applied: 0,
            max_size,
            executing: false,
        }
    }

    /// Execute a command against the document and record it
    ///
    /// Any redo branch is discarded first. Returns false, touching nothing,
    /// when called re-entrantly while another command is in flight.
    pub fn execute(&mut self, mut command: DesignerCommand, state: &mut DesignerState) -> bool {
        if self.executing {
            log::warn!(
                "rejected re-entrant command execution: {}",
                command.description()
            );
            return false;
        }

        // Discard the redo branch
        self.commands.truncate(self.applied);

        self.executing = true;
        command.execute(state);
        self.executing = false;

        self.commands.push_back(command);
        self.applied = self.commands.len();

        // Enforce the size limit. Eviction only ever happens here, right
        // after the redo branch was truncated, so the cursor equals the
        // stack length and a plain decrement keeps every invariant.
        if self.commands.len() > self.max_size {
            self.commands.pop_front();
            self.applied = self.applied.saturating_sub(1);
        }
        true
    }

    /// Undo the most recently applied command
    ///
    /// Returns false at the boundary (nothing applied) instead of failing.
    pub fn undo(&mut self, state: &mut DesignerState) -> bool {
        if self.executing || self.applied == 0 {
            return false;
        }
        self.applied -= 1;
        self.executing = true;
        self.commands[self.applied].undo(state);
        self.executing = false;
        true
    }

    /// Re-apply the most recently undone command
    ///
    /// Returns false at the boundary (no redo branch) instead of failing.
    pub fn redo(&mut self, state: &mut DesignerState) -> bool {
        if self.executing || self.applied >= self.commands.len() {
            return false;
        }
        self.executing = true;
        self.commands[self.applied].execute(state);
        self.executing = false;
        self.applied += 1;
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.applied < self.commands.len()
    }

    /// Label of the command the next `undo` would revert
    pub fn undo_description(&self) -> Option<String> {
        self.applied
            .checked_sub(1)
            .map(|i| self.commands[i].description())
    }

    /// Label of the command the next `redo` would reapply
    pub fn redo_description(&self) -> Option<String> {
        self.commands.get(self.applied).map(|c| c.description())
    }

    /// Number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.applied
    }

    /// Number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.commands.len() - self.applied
    }

    /// Total number of commands held, applied or redoable
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all history without touching the document
    pub fn clear(&mut self) {
        self.commands.clear();
        self.applied = 0;
        self.executing = false;
    }
}
