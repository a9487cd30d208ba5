/// Host-independent key identifiers. Mouse buttons are keys too, so the
/// same edge-triggered queries cover clicks and key presses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    N,
    R,
    S,
    Left,
    Right,
    Up,
    Down,
    MouseLeft,
    MouseRight,
    None,
}
