use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use hero_core::{Command, Commands, Direction8};

/// Command state driven by an input script.
///
/// Clones share the pressed set, so the simulator presses and releases
/// through its own handle.
#[derive(Clone, Debug, Default)]
pub struct ScriptedCommands(Rc<RefCell<HashSet<Command>>>);

impl ScriptedCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, command: Command) {
        self.0.borrow_mut().insert(command);
    }

    pub fn release(&self, command: Command) {
        self.0.borrow_mut().remove(&command);
    }

    pub fn release_all(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Commands for ScriptedCommands {
    fn is_pressed(&self, command: Command) -> bool {
        self.0.borrow().contains(&command)
    }

    /// Opposite directional commands cancel each other.
    fn wanted_direction8(&self) -> Option<Direction8> {
        let pressed = self.0.borrow();
        let axis = |positive: Command, negative: Command| {
            i32::from(pressed.contains(&positive)) - i32::from(pressed.contains(&negative))
        };
        let dx = axis(Command::Right, Command::Left);
        let dy = axis(Command::Down, Command::Up);

        Direction8::ALL
            .into_iter()
            .find(|direction| {
                let unit = direction.unit();
                (unit.dx, unit.dy) == (dx, dy)
            })
    }
}
