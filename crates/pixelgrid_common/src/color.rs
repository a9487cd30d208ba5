#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // The 16-entry default palette the games are drawn with.
    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const NAVY: Color = Color::from_hex(0x2B335F);
    pub const PURPLE: Color = Color::from_hex(0x7E2072);
    pub const GREEN: Color = Color::from_hex(0x19959C);
    pub const BROWN: Color = Color::from_hex(0x8B4852);
    pub const DARK_BLUE: Color = Color::from_hex(0x395C98);
    pub const LIGHT_BLUE: Color = Color::from_hex(0xA9C1FF);
    pub const WHITE: Color = Color::from_hex(0xEEEEEE);
    pub const RED: Color = Color::from_hex(0xD4186C);
    pub const ORANGE: Color = Color::from_hex(0xD38441);
    pub const YELLOW: Color = Color::from_hex(0xE9C35B);
    pub const LIME: Color = Color::from_hex(0x70C6A9);
    pub const CYAN: Color = Color::from_hex(0x7696DE);
    pub const GRAY: Color = Color::from_hex(0xA3A3A3);
    pub const GREY: Color = Color::GRAY;
    pub const PINK: Color = Color::from_hex(0xFF9798);
    pub const PEACH: Color = Color::from_hex(0xEDC7B0);

    pub const PALETTE: [Color; 16] = [
        Color::BLACK,
        Color::NAVY,
        Color::PURPLE,
        Color::GREEN,
        Color::BROWN,
        Color::DARK_BLUE,
        Color::LIGHT_BLUE,
        Color::WHITE,
        Color::RED,
        Color::ORANGE,
        Color::YELLOW,
        Color::LIME,
        Color::CYAN,
        Color::GRAY,
        Color::PINK,
        Color::PEACH,
    ];

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    #[inline]
    pub const fn from_hex(rgb: u32) -> Color {
        Color::new_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Palette entry by index, wrapping past the last color.
    #[inline]
    pub const fn palette(index: usize) -> Color {
        Color::PALETTE[index % Color::PALETTE.len()]
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[inline]
    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}
