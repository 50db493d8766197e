use std::cell::RefCell;
use std::rc::Rc;

use hero_core::{Audio, Sound};
use tracing::debug;

/// Logs and records every sound instead of playing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio(Rc<RefCell<Vec<Sound>>>);

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Sound> {
        self.0.borrow().clone()
    }
}

impl Audio for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        debug!(%sound, "sound");
        self.0.borrow_mut().push(sound);
    }
}
