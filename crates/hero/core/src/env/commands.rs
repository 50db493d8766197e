use crate::types::Direction8;

/// Game commands the player can press.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Command {
    Action,
    Attack,
    Item1,
    Item2,
    Pause,
    Right,
    Up,
    Left,
    Down,
}

/// Command input layer.
pub trait Commands {
    fn is_pressed(&self, command: Command) -> bool;

    /// Direction formed by the directional commands currently pressed.
    fn wanted_direction8(&self) -> Option<Direction8>;
}

/// Hint shown to the player about what the action command would do.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionEffect {
    #[default]
    None,
    Throw,
    Lift,
    Grab,
}
