//! HUD readout: timer and objective line

use std::fmt;

use serde::Serialize;

use crate::sim::{GameSession, SessionPhase};

/// Objective line shown under the timer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Objective {
    ReachGoal,
    Paused,
    Completed { secs: f32 },
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::ReachGoal => write!(f, "Roll the ball to the goal"),
            Objective::Paused => write!(f, "Paused - press P to resume"),
            Objective::Completed { secs } => {
                write!(f, "Goal reached in {secs:.2}s! Press N for a new maze")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudSnapshot {
    /// Elapsed run time; `None` when the timer HUD is disabled
    pub elapsed_secs: Option<f32>,
    pub objective: Objective,
    pub won: bool,
}

impl HudSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let objective = match session.phase {
            SessionPhase::Won => Objective::Completed {
                secs: session.elapsed_secs,
            },
            SessionPhase::Paused => Objective::Paused,
            SessionPhase::Idle | SessionPhase::Running => Objective::ReachGoal,
        };
        Self {
            elapsed_secs: session
                .config
                .enable_timer_hud
                .then_some(session.elapsed_secs),
            objective,
            won: session.is_won(),
        }
    }

    /// Timer text, e.g. `"12.3s"`
    pub fn timer_text(&self) -> Option<String> {
        self.elapsed_secs.map(|secs| format!("{secs:.1}s"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SessionConfig;
    use crate::sim::{Ball, Grid, tick};

    fn session(timer: bool) -> GameSession {
        let grid = Grid::from_rows(&["#####", "#S..#", "###.#", "#..G#", "#####"]).unwrap();
        let config = SessionConfig {
            enable_timer_hud: timer,
            ..SessionConfig::default()
        };
        GameSession::with_grid(config, grid).unwrap()
    }

    #[test]
    fn test_objective_follows_phase() {
        let mut s = session(true);
        assert_eq!(HudSnapshot::capture(&s).objective, Objective::ReachGoal);

        s.toggle_pause();
        assert_eq!(HudSnapshot::capture(&s).objective, Objective::Paused);
        s.toggle_pause();

        s.elapsed_secs = 4.25;
        s.phase = SessionPhase::Running;
        s.ball = Ball::on_tile(3, 3, 5);
        tick(&mut s, 0.25);
        let hud = HudSnapshot::capture(&s);
        assert!(hud.won);
        assert_eq!(hud.objective, Objective::Completed { secs: 4.5 });
        assert_eq!(hud.timer_text().as_deref(), Some("4.5s"));
        assert_eq!(
            hud.objective.to_string(),
            "Goal reached in 4.50s! Press N for a new maze"
        );
    }

    #[test]
    fn test_timer_hidden_when_disabled() {
        let hud = HudSnapshot::capture(&session(false));
        assert_eq!(hud.elapsed_secs, None);
        assert_eq!(hud.timer_text(), None);
    }
}
