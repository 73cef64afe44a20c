use std::time::Duration;

pub const DEFAULT_MAX_VISIBLE_PARTICIPANTS: usize = 8;
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Presentation knobs for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSettings {
    /// Participants listed per card before collapsing into "+N more".
    pub max_visible_participants: usize,
    /// How long a status message stays visible.
    pub status_timeout: Duration,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            max_visible_participants: DEFAULT_MAX_VISIBLE_PARTICIPANTS,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }
}
