use crate::color::Color;
use crate::input::Input;
use crate::key::Key;

/// A primitive queued by a draw hook for the host to execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    StrokeRect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    FillCircle {
        x: i32,
        y: i32,
        r: i32,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Color,
    },
}

/// Host state handed to every hook: frame counter, pointer, input edges and
/// the draw-command sink.
#[derive(Default, Debug)]
pub struct Context {
    frame_count: u64,
    pointer: (i32, i32),
    pointer_visible: bool,
    input: Input,
    commands: Vec<DrawCommand>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Pointer position in canvas pixels.
    #[inline]
    pub fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
    }

    pub fn show_pointer(&mut self, visible: bool) {
        self.pointer_visible = visible;
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.input.is_pressed(key)
    }

    pub fn is_pressed_repeat(&self, key: Key, hold: u32, repeat: u32) -> bool {
        self.input.is_pressed_repeat(key, hold, repeat)
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.commands
            .push(DrawCommand::StrokeRect { x, y, w, h, color });
    }

    pub fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { x, y, r, color });
    }

    pub fn text(&mut self, x: i32, y: i32, text: impl Into<String>, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            color,
        });
    }

    /// Commands queued by the most recent draw phase.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub(crate) fn begin_draw(&mut self) {
        self.commands.clear();
    }

    pub(crate) fn end_frame(&mut self) {
        self.frame_count += 1;
        self.input.advance();
    }
}
