use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use pixelgrid_common::{Color, Context, Grid, GridApp, GridResult, Key, Layout};

pub const FPS: u32 = 60;

pub const ROWS: usize = 10;
pub const COLS: usize = 20;

pub const CELL_DIM: i32 = 16;
pub const INNER_PADDING: i32 = 3;
pub const PADDING: i32 = 18;
pub const HEAD: i32 = 5;
pub const FOOT: i32 = 25;

pub const HP_INIT: i32 = 100;
/// HP lost each time the decay timer runs out.
pub const HP_DECAY: i32 = 6;
/// HP at which the bar is full.
pub const HP_BAR_FULL: i32 = 1000;

const ROTTEN_MULTIPLIER: i32 = -10;
const FRESH_MULTIPLIER: i32 = 5;
const GREAT_BASE: i32 = 3;
const BASE: i32 = 1;

/// How many of each fruit are scattered on the board.
const DISTRIBUTION: [(FruitKind, bool, usize); 6] = [
    (FruitKind::Mango, false, 4),
    (FruitKind::Banana, false, 4),
    (FruitKind::Apple, false, 1),
    (FruitKind::Mango, true, 3),
    (FruitKind::Banana, true, 3),
    (FruitKind::Apple, true, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FruitKind {
    Mango,
    Banana,
    Apple,
}

impl FruitKind {
    pub fn is_great(&self) -> bool {
        matches!(self, FruitKind::Apple)
    }

    fn color(&self) -> Color {
        match self {
            FruitKind::Mango => Color::ORANGE,
            FruitKind::Banana => Color::YELLOW,
            FruitKind::Apple => Color::RED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fruit {
    pub kind: FruitKind,
    pub rotten: bool,
}

impl Fruit {
    pub const fn new(kind: FruitKind, rotten: bool) -> Self {
        Fruit { kind, rotten }
    }

    /// HP change from eating this fruit. Rotten fruit hurts.
    pub fn hp_delta(&self) -> i32 {
        let base = if self.kind.is_great() { GREAT_BASE } else { BASE };
        let multiplier = if self.rotten {
            ROTTEN_MULTIPLIER
        } else {
            FRESH_MULTIPLIER
        };
        base * multiplier
    }
}

/// Frames between HP decrements, `frames` after the game started. Shrinks
/// as the game goes on and bottoms out at 5.
pub fn frame_wait_for_frame(frames: u64) -> i64 {
    let fps = FPS as f64;
    let frames = frames as f64;
    let slowdown = (90.0 / 60.0 * 1.25 / (1.7 * frames / fps / 60.0 + 1.25)).max(1.0 / 4.5);
    let base = (fps / 5.0 * 6.0 * slowdown).round_ties_even() as i64;
    let minutes = (frames / fps / 60.0) as i64;
    base - (minutes - 4).clamp(0, 11)
}

/// Click to eat the 3x3 block under the pointer before HP runs out.
pub struct FruitApp {
    layout: Layout,
    grid: Grid<Option<Fruit>>,
    rng: StdRng,
    score: i32,
    hp: i32,
    game_over: bool,
    frame_start: u64,
    frame_last: u64,
    frame_wait: i64,
}

impl FruitApp {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        FruitApp {
            layout: Layout::builder()
                .rows(ROWS)
                .cols(COLS)
                .pad_left(PADDING)
                .pad_right(PADDING)
                .pad_top(PADDING + HEAD + INNER_PADDING)
                .pad_bottom(INNER_PADDING + FOOT + PADDING)
                .dim(CELL_DIM)
                .build(),
            grid: Grid::new(ROWS, COLS, None),
            rng,
            score: 0,
            hp: HP_INIT,
            game_over: false,
            frame_start: 0,
            frame_last: 0,
            frame_wait: frame_wait_for_frame(0),
        }
    }

    pub fn grid(&self) -> &Grid<Option<Fruit>> {
        &self.grid
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn new_game(&mut self, frame: u64) {
        self.frame_start = frame;
        self.score = 0;
        self.game_over = false;
        self.hp = HP_INIT;
        self.reset_wait(frame);
        self.distribute_fruits();
        log::info!("Fruit new game");
    }

    fn reset_wait(&mut self, frame: u64) {
        self.frame_last = frame;
        self.frame_wait = frame_wait_for_frame(frame - self.frame_start);
    }

    /// Clear the board and scatter a fresh set of fruit on distinct cells.
    pub fn distribute_fruits(&mut self) {
        self.grid.fill(None);
        let mut cells: Vec<(i32, i32)> = self.grid.iter().map(|(pos, _)| pos).collect();
        cells.shuffle(&mut self.rng);

        let mut cells = cells.into_iter();
        for (kind, rotten, count) in DISTRIBUTION {
            for (row, col) in cells.by_ref().take(count) {
                if let Ok(cell) = self.grid.get_mut(row, col) {
                    *cell = Some(Fruit::new(kind, rotten));
                }
            }
        }
    }

    /// Eat every fruit in the 3x3 block centred on `(row, col)`. Returns
    /// whether anything was eaten; if so the board is redistributed.
    pub fn consume(&mut self, row: i32, col: i32) -> GridResult<bool> {
        let mut ate = false;
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                let (r, c) = (row + d_row, col + d_col);
                if !self.grid.in_bounds(r, c) {
                    continue;
                }
                if let Some(fruit) = self.grid.get(r, c)?.as_ref() {
                    let delta = fruit.hp_delta();
                    self.score += delta.max(0);
                    self.hp += delta;
                    ate = true;
                }
            }
        }

        if ate {
            log::debug!("Ate around ({}, {}): score {}, hp {}", row, col, self.score, self.hp);
            self.distribute_fruits();
        }
        Ok(ate)
    }

    fn logic_update(&mut self, ctx: &Context) -> GridResult<()> {
        if ctx.is_pressed(Key::MouseLeft) {
            let (row, col) = self.layout.pointer_cell(ctx);
            self.consume(row, col)?;
        }

        let frame = ctx.frame_count();
        if (frame - self.frame_last) as i64 >= self.frame_wait {
            self.reset_wait(frame);
            self.hp -= HP_DECAY;
        }

        if self.hp <= 0 && !self.game_over {
            self.game_over = true;
            log::info!("Fruit game over, score {}", self.score);
        }
        Ok(())
    }

    fn draw_fruit(ctx: &mut Context, fruit: Fruit, x: i32, y: i32, dim: i32) {
        let color = if fruit.rotten {
            Color::BROWN
        } else {
            fruit.kind.color()
        };
        let (cx, cy) = (x + dim / 2, y + dim / 2);
        match fruit.kind {
            FruitKind::Mango => ctx.fill_circle(cx, cy, dim / 2 - 2, color),
            FruitKind::Banana => ctx.fill_rect(x + 3, y + dim / 3, dim - 6, dim / 3, color),
            FruitKind::Apple => {
                ctx.fill_circle(cx, cy + 1, dim / 2 - 3, color);
                ctx.fill_rect(cx, y + 1, 2, 3, Color::GREEN);
            }
        }
        if fruit.rotten {
            ctx.fill_rect(cx - 1, cy - 1, 2, 2, Color::PURPLE);
        }
    }
}

impl GridApp for FruitApp {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn title(&self) -> String {
        "Fruit".to_string()
    }

    fn init(&mut self, ctx: &mut Context) -> Result<()> {
        ctx.show_pointer(true);
        self.new_game(ctx.frame_count());
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context) -> Result<()> {
        if ctx.is_pressed(Key::N) {
            self.new_game(ctx.frame_count());
        }

        if !self.game_over {
            self.logic_update(ctx)?;
        }
        Ok(())
    }

    fn pre_draw_grid(&self, ctx: &mut Context) -> Result<()> {
        ctx.clear(Color::BLACK);

        let outline = 2;
        let dim = self.layout.dim();
        ctx.stroke_rect(
            self.layout.pad_left() - outline,
            self.layout.pad_top() - outline,
            dim * COLS as i32 + outline * 2,
            dim * ROWS as i32 + outline * 2,
            Color::DARK_BLUE,
        );
        Ok(())
    }

    fn draw_cell(&self, ctx: &mut Context, row: i32, col: i32, x: i32, y: i32) -> Result<()> {
        let dim = self.layout.dim();
        if !self.game_over {
            let (pointer_row, pointer_col) = self.layout.pointer_cell(ctx);
            if (pointer_row - row).abs().max((pointer_col - col).abs()) <= 1 {
                ctx.stroke_rect(x, y, dim, dim, Color::PINK);
            }
        }

        if let Some(fruit) = *self.grid.get(row, col)? {
            Self::draw_fruit(ctx, fruit, x, y, dim);
        }
        Ok(())
    }

    fn post_draw_grid(&self, ctx: &mut Context) -> Result<()> {
        let grid_width = self.layout.dim() * COLS as i32;
        ctx.text(PADDING, PADDING, self.score.to_string(), Color::NAVY);
        ctx.text(
            self.layout.pad_left() + grid_width * 2 / 3,
            PADDING,
            "N = NEW GAME",
            Color::NAVY,
        );
        if self.game_over {
            ctx.text(
                self.layout.pad_left() + grid_width / 3,
                PADDING,
                "GAME OVER!",
                Color::RED,
            );
        }

        let fraction = (self.hp as f64 / HP_BAR_FULL as f64).clamp(0.0, 1.0);
        ctx.fill_rect(
            PADDING,
            self.layout.y(ROWS as i32) + INNER_PADDING,
            (fraction * grid_width as f64) as i32,
            FOOT,
            Color::GREEN,
        );
        Ok(())
    }
}
