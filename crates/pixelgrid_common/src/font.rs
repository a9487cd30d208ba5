/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: i32 = 3;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: i32 = 5;
/// Horizontal distance between consecutive characters.
pub const GLYPH_ADVANCE: i32 = 4;
/// Vertical distance between lines.
pub const LINE_HEIGHT: i32 = 6;

// Each glyph is five rows of three bits, most significant bit on the left.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b001, 0b001, 0b001], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

const LETTERS: [[u8; 5]; 26] = [
    [0b010, 0b101, 0b111, 0b101, 0b101], // A
    [0b110, 0b101, 0b110, 0b101, 0b110], // B
    [0b011, 0b100, 0b100, 0b100, 0b011], // C
    [0b110, 0b101, 0b101, 0b101, 0b110], // D
    [0b111, 0b100, 0b110, 0b100, 0b111], // E
    [0b111, 0b100, 0b110, 0b100, 0b100], // F
    [0b011, 0b100, 0b101, 0b101, 0b011], // G
    [0b101, 0b101, 0b111, 0b101, 0b101], // H
    [0b111, 0b010, 0b010, 0b010, 0b111], // I
    [0b001, 0b001, 0b001, 0b101, 0b010], // J
    [0b101, 0b101, 0b110, 0b101, 0b101], // K
    [0b100, 0b100, 0b100, 0b100, 0b111], // L
    [0b101, 0b111, 0b111, 0b101, 0b101], // M
    [0b110, 0b101, 0b101, 0b101, 0b101], // N
    [0b010, 0b101, 0b101, 0b101, 0b010], // O
    [0b110, 0b101, 0b110, 0b100, 0b100], // P
    [0b010, 0b101, 0b101, 0b110, 0b011], // Q
    [0b110, 0b101, 0b110, 0b101, 0b101], // R
    [0b011, 0b100, 0b010, 0b001, 0b110], // S
    [0b111, 0b010, 0b010, 0b010, 0b010], // T
    [0b101, 0b101, 0b101, 0b101, 0b111], // U
    [0b101, 0b101, 0b101, 0b101, 0b010], // V
    [0b101, 0b101, 0b111, 0b111, 0b101], // W
    [0b101, 0b101, 0b010, 0b101, 0b101], // X
    [0b101, 0b101, 0b010, 0b010, 0b010], // Y
    [0b111, 0b001, 0b010, 0b100, 0b111], // Z
];

const UNKNOWN: [u8; 5] = [0b111, 0b001, 0b010, 0b000, 0b010];

pub fn glyph(ch: char) -> [u8; 5] {
    match ch.to_ascii_uppercase() {
        c @ '0'..='9' => DIGITS[c as usize - '0' as usize],
        c @ 'A'..='Z' => LETTERS[c as usize - 'A' as usize],
        ' ' => [0; 5],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        _ => UNKNOWN,
    }
}

/// Lit pixels of `text` drawn with its top-left corner at `(x, y)`.
/// A `'\n'` starts a new line at `x`.
pub fn text_pixels(x: i32, y: i32, text: &str) -> Vec<(i32, i32)> {
    let mut pixels = Vec::new();
    let (mut cx, mut cy) = (x, y);
    for ch in text.chars() {
        if ch == '\n' {
            cx = x;
            cy += LINE_HEIGHT;
            continue;
        }
        for (dy, bits) in glyph(ch).iter().enumerate() {
            for dx in 0..GLYPH_WIDTH {
                if bits & (0b100 >> dx) != 0 {
                    pixels.push((cx + dx, cy + dy as i32));
                }
            }
        }
        cx += GLYPH_ADVANCE;
    }
    pixels
}
