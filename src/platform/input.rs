//! Input mapping
//!
//! Everything here is a pure function of the event payload, so the wasm glue
//! and the native demo share it.

use crate::sim::{Command, Nudge, Tilt};

/// Tilt from a pointer position inside a viewport.
///
/// The centre of the viewport is level; each edge is 45 degrees. A
/// zero-sized viewport gives a level board.
pub fn pointer_tilt(x: f32, y: f32, width: f32, height: f32) -> Tilt {
    if width <= 0.0 || height <= 0.0 {
        return Tilt::default();
    }
    Tilt::new((x / width - 0.5) * 90.0, (y / height - 0.5) * 90.0)
}

/// Tilt from device orientation: gamma (left/right) drives X, beta
/// (front/back) drives Z.
pub fn orientation_tilt(gamma: f32, beta: f32) -> Tilt {
    if !gamma.is_finite() || !beta.is_finite() {
        return Tilt::default();
    }
    Tilt::new(gamma, beta)
}

/// Command bound to a key, matching on `KeyboardEvent.key`
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key.to_lowercase().as_str() {
        "w" => Command::Nudge(Nudge::Forward),
        "s" => Command::Nudge(Nudge::Back),
        "d" => Command::Nudge(Nudge::Right),
        "a" => Command::Nudge(Nudge::Left),
        "e" => Command::Nudge(Nudge::Up),
        "q" => Command::Nudge(Nudge::Down),
        "p" => Command::TogglePause,
        "c" => Command::CycleCamera,
        "r" => Command::ResetRun,
        "n" => Command::NewLevel,
        "+" | "=" => Command::ResizeMaze(1),
        "-" | "_" => Command::ResizeMaze(-1),
        "l" => Command::ToggleLighting,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_centre_is_level() {
        assert_eq!(pointer_tilt(400.0, 300.0, 800.0, 600.0), Tilt::new(0.0, 0.0));
    }

    #[test]
    fn test_pointer_edges_clamp() {
        assert_eq!(pointer_tilt(0.0, 600.0, 800.0, 600.0), Tilt::new(-45.0, 45.0));
        // Outside the viewport still clamps
        assert_eq!(pointer_tilt(2000.0, -500.0, 800.0, 600.0), Tilt::new(45.0, -45.0));
        assert_eq!(pointer_tilt(10.0, 10.0, 0.0, 600.0), Tilt::default());
    }

    #[test]
    fn test_orientation() {
        assert_eq!(orientation_tilt(12.5, -80.0), Tilt::new(12.5, -45.0));
        assert_eq!(orientation_tilt(f32::NAN, 3.0), Tilt::default());
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key("P"), Some(Command::TogglePause));
        assert_eq!(command_for_key("w"), Some(Command::Nudge(Nudge::Forward)));
        assert_eq!(command_for_key("+"), Some(Command::ResizeMaze(1)));
        assert_eq!(command_for_key("-"), Some(Command::ResizeMaze(-1)));
        assert_eq!(command_for_key("Escape"), None);
    }
}
