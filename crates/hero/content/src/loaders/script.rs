//! Input script loader.
//!
//! Scripts are RON files listing `(date_ms, step)` pairs:
//!
//! ```ron
//! (
//!     duration: 3000,
//!     events: [
//!         (0, Press(Right)),
//!         (400, Release(Right)),
//!         (500, Hurt(from: Some((-20, 0)), damage: 2)),
//!         (900, Suspend(true)),
//!     ],
//! )
//! ```

use std::path::Path;

use hero_core::{Command, Point, Tick};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::script::{InputScript, ScriptEvent, ScriptStep};

/// Script data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScriptDataRon {
    #[serde(default)]
    duration: u64,
    events: Vec<(u64, StepRon)>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum StepRon {
    Press(Command),
    Release(Command),
    Hurt {
        #[serde(default)]
        from: Option<(i32, i32)>,
        damage: u32,
    },
    Suspend(bool),
    Freeze,
    Unfreeze,
}

impl From<StepRon> for ScriptStep {
    fn from(step: StepRon) -> Self {
        match step {
            StepRon::Press(command) => ScriptStep::Press(command),
            StepRon::Release(command) => ScriptStep::Release(command),
            StepRon::Hurt { from, damage } => ScriptStep::Hurt {
                source: from.map(|(x, y)| Point::new(x, y)),
                damage,
            },
            StepRon::Suspend(suspended) => ScriptStep::Suspend(suspended),
            StepRon::Freeze => ScriptStep::Freeze,
            StepRon::Unfreeze => ScriptStep::Unfreeze,
        }
    }
}

/// Loader for input scripts from RON files.
pub struct ScriptLoader;

impl ScriptLoader {
    /// Load an input script from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the script
    ///
    /// # Returns
    ///
    /// Returns the events sorted by date. The script lasts at least until its
    /// last event.
    pub fn load(path: &Path) -> LoadResult<InputScript> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an input script from RON text.
    pub fn parse(content: &str) -> LoadResult<InputScript> {
        let data: ScriptDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script RON: {}", e))?;

        let events = data
            .events
            .into_iter()
            .map(|(at, step)| ScriptEvent {
                at: Tick(at),
                step: step.into(),
            })
            .collect();

        Ok(InputScript::new(events, Tick(data.duration)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_every_step_kind() {
        let script = ScriptLoader::parse(
            r#"(
                duration: 3000,
                events: [
                    (0, Press(Right)),
                    (400, Release(Right)),
                    (500, Hurt(from: Some((-20, 0)), damage: 2)),
                    (600, Hurt(damage: 1)),
                    (900, Suspend(true)),
                    (950, Freeze),
                    (990, Unfreeze),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(script.duration(), Tick(3000));
        let steps: Vec<_> = script.events().iter().map(|event| event.step).collect();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Press(Command::Right),
                ScriptStep::Release(Command::Right),
                ScriptStep::Hurt {
                    source: Some(Point::new(-20, 0)),
                    damage: 2
                },
                ScriptStep::Hurt {
                    source: None,
                    damage: 1
                },
                ScriptStep::Suspend(true),
                ScriptStep::Freeze,
                ScriptStep::Unfreeze,
            ]
        );
    }

    #[test]
    fn duration_defaults_to_last_event() {
        let script = ScriptLoader::parse("(events: [(1200, Press(Action))])").unwrap();

        assert_eq!(script.duration(), Tick(1200));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = ScriptLoader::parse("(events: [(0, Press(Jump))])").unwrap_err();

        assert!(err.to_string().contains("Failed to parse script RON"));
    }

    #[test]
    fn load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.ron");
        std::fs::write(&path, "(events: [(10, Press(Item1))])").unwrap();

        let script = ScriptLoader::load(&path).unwrap();
        assert_eq!(script.events()[0].step, ScriptStep::Press(Command::Item1));
    }
}
