//! Decoded user input and how it maps onto editing operations.
//!
//! Polling a window system is the host's job; it hands the engine already
//! decoded [`InputEvent`]s.

use crate::float::Float;
use crate::simulation::Simulation;
use crate::vec::Vec2;

/// Keys the engine reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Remove the newest point and spring (`r`).
    Undo,
    /// Stop the host loop (escape).
    Quit,
    Other,
}

impl Key {
    pub fn from_char(c: char) -> Self {
        match c {
            'r' | 'R' => Key::Undo,
            '\u{1b}' => Key::Quit,
            _ => Key::Other,
        }
    }
}

/// One input event in simulation coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent<F: Float> {
    /// Left click: extend the chain.
    PrimaryClick(Vec2<F>),
    /// Right click: push nearby points away.
    SecondaryClick(Vec2<F>),
    KeyDown(Key),
    /// The window was closed.
    Close,
}

/// What the host loop should do after an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

impl<F: Float> Simulation<F> {
    /// Apply a decoded input event. Call between steps, never during one.
    pub fn handle_input(&mut self, event: InputEvent<F>) -> Control {
        match event {
            InputEvent::PrimaryClick(pos) => {
                self.add_point_and_spring(pos, false);
            }
            InputEvent::SecondaryClick(pos) => {
                let magnitude = self.config.push_magnitude;
                self.push_nearby_points(pos, magnitude);
            }
            InputEvent::KeyDown(Key::Undo) => {
                self.remove_last_point_and_spring();
            }
            InputEvent::KeyDown(Key::Quit) | InputEvent::Close => return Control::Quit,
            InputEvent::KeyDown(Key::Other) => {}
        }
        Control::Continue
    }
}
