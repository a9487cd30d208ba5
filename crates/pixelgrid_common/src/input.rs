use std::collections::{HashMap, HashSet};

use crate::key::Key;

/// Per-frame key state fed by the host.
///
/// `held` counts the frames elapsed since each currently-down key was
/// pressed; it is 0 on the press frame.
#[derive(Default, Debug)]
pub struct Input {
    held: HashMap<Key, u32>,
    pressed: HashSet<Key>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        if key == Key::None || self.held.contains_key(&key) {
            return;
        }
        self.held.insert(key, 0);
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// True only on the frame the key went down, even if it was already
    /// released again within that frame.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Like `is_pressed`, but a key held for `hold` frames fires again every
    /// `repeat` frames. Either being 0 disables the repetition.
    pub fn is_pressed_repeat(&self, key: Key, hold: u32, repeat: u32) -> bool {
        if self.is_pressed(key) {
            return true;
        }
        if hold == 0 || repeat == 0 {
            return false;
        }
        match self.held.get(&key) {
            Some(&elapsed) => elapsed >= hold && (elapsed - hold) % repeat == 0,
            None => false,
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains_key(&key)
    }

    /// Close the current frame: clear press edges and age held keys.
    pub fn advance(&mut self) {
        self.pressed.clear();
        for elapsed in self.held.values_mut() {
            *elapsed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_edge_triggered() {
        let mut input = Input::new();
        input.press(Key::N);
        assert!(input.is_pressed(Key::N));
        input.advance();
        assert!(!input.is_pressed(Key::N));
        assert!(input.is_down(Key::N));
    }

    #[test]
    fn click_released_within_the_frame_still_counts() {
        let mut input = Input::new();
        input.press(Key::MouseLeft);
        input.release(Key::MouseLeft);
        assert!(input.is_pressed(Key::MouseLeft));
        assert!(!input.is_down(Key::MouseLeft));
    }

    #[test]
    fn repeated_press_while_down_is_ignored() {
        let mut input = Input::new();
        input.press(Key::Up);
        input.advance();
        input.press(Key::Up);
        assert!(!input.is_pressed(Key::Up));
    }

    #[test]
    fn held_key_repeats_after_hold() {
        let mut input = Input::new();
        input.press(Key::Right);
        let mut fired = Vec::new();
        for frame in 0..16 {
            if input.is_pressed_repeat(Key::Right, 8, 2) {
                fired.push(frame);
            }
            input.advance();
        }
        assert_eq!(fired, vec![0, 8, 10, 12, 14]);
    }

    #[test]
    fn zero_hold_disables_repeat() {
        let mut input = Input::new();
        input.press(Key::Left);
        input.advance();
        for _ in 0..10 {
            assert!(!input.is_pressed_repeat(Key::Left, 0, 2));
            input.advance();
        }
    }

    #[test]
    fn none_key_is_never_recorded() {
        let mut input = Input::new();
        input.press(Key::None);
        assert!(!input.is_pressed(Key::None));
        assert!(!input.is_down(Key::None));
    }
}
