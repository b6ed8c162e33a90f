//! InputManager - turns keyboard & window events into game commands, in arrival order.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::collections::VecDeque;

use crate::Command;

pub struct InputManager {
    pending: VecDeque<Command>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(16),
        }
    }

    /// Queue the command for an event, if any.
    /// Key repeats count as new presses, so holding a key keeps walking.
    pub fn handle_event(&mut self, event: &Event) {
        let cmd = match event {
            Event::Quit { .. } => Some(Command::Quit),
            Event::KeyDown { keycode: Some(key), .. } => key2command(*key),
            _ => None,
        };
        if let Some(cmd) = cmd {
            self.pending.push_back(cmd);
        }
    }

    #[inline]
    pub fn next_command(&mut self) -> Option<Command> {
        self.pending.pop_front()
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

//------------------
//  Internal stuff

#[inline]
fn key2command(key: Keycode) -> Option<Command> {
    match key {
        Keycode::Left | Keycode::A => Some(Command::TurnLeft),
        Keycode::Right | Keycode::D => Some(Command::TurnRight),
        Keycode::Up | Keycode::W => Some(Command::MoveForward),
        Keycode::Down | Keycode::S => Some(Command::MoveBackward),
        Keycode::Escape => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(key: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    fn key_up(key: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 1,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn commands_keep_event_order() {
        let mut inputs = InputManager::new();
        for key in [Keycode::Up, Keycode::Left, Keycode::Down, Keycode::Right] {
            inputs.handle_event(&key_down(key, false));
            inputs.handle_event(&key_up(key));
        }
        let cmds: Vec<Command> = std::iter::from_fn(|| inputs.next_command()).collect();
        assert_eq!(
            vec![
                Command::MoveForward,
                Command::TurnLeft,
                Command::MoveBackward,
                Command::TurnRight
            ],
            cmds
        );
        assert!(!inputs.has_pending());
    }

    #[test]
    fn repeats_and_aliases() {
        let mut inputs = InputManager::new();
        inputs.handle_event(&key_down(Keycode::W, false));
        inputs.handle_event(&key_down(Keycode::W, true));
        inputs.handle_event(&key_down(Keycode::D, false));
        assert_eq!(Some(Command::MoveForward), inputs.next_command());
        assert_eq!(Some(Command::MoveForward), inputs.next_command());
        assert_eq!(Some(Command::TurnRight), inputs.next_command());
        assert_eq!(None, inputs.next_command());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut inputs = InputManager::new();
        inputs.handle_event(&key_down(Keycode::Space, false));
        inputs.handle_event(&key_down(Keycode::F1, false));
        assert!(!inputs.has_pending());
    }

    #[test]
    fn quit_from_window_and_escape() {
        let mut inputs = InputManager::new();
        inputs.handle_event(&Event::Quit { timestamp: 0 });
        inputs.handle_event(&key_down(Keycode::Escape, false));
        assert_eq!(Some(Command::Quit), inputs.next_command());
        assert_eq!(Some(Command::Quit), inputs.next_command());
    }
}
