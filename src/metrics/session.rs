use std::time::{Duration, Instant};

/// Stats for the current process lifetime; nothing here is persisted
pub struct SessionMetrics {
    pub game_start: Instant,
    pub elapsed: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            game_start: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the elapsed clock; called once per rendered frame
    pub fn update(&mut self) {
        self.elapsed = self.game_start.elapsed();
    }

    /// Restart the per-game clock
    pub fn on_restart(&mut self) {
        self.game_start = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
