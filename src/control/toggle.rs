//! Relay loop toggle: a two-state machine driven by control-switch edges.
//!
//! ```text
//!            rising edge
//!   Stopped ────────────▶ Running
//!      ▲                     │
//!      └─────────────────────┘
//!            rising edge
//! ```

use log::info;

/// Toggle controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// What the relay scheduler must do in response to an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    Start,
    Stop,
}

#[derive(Debug, Clone)]
pub struct ToggleController {
    state: LoopState,
}

impl Default for ToggleController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleController {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
        }
    }

    /// Flip the armed flag exactly once and say what the relay must do.
    pub fn on_rising_edge(&mut self) -> LoopCommand {
        let (next, cmd) = match self.state {
            LoopState::Stopped => (LoopState::Running, LoopCommand::Start),
            LoopState::Running => (LoopState::Stopped, LoopCommand::Stop),
        };
        info!("Toggle: {:?} -> {:?}", self.state, next);
        self.state = next;
        cmd
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == LoopState::Running
    }
}
