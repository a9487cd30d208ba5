use anyhow::Result;

use crate::context::Context;
use crate::layout::Layout;

/// Hooks a grid application supplies to the runner.
///
/// `update` is the only hook allowed to mutate the application; the draw
/// hooks see it read-only and emit primitives into the context.
pub trait GridApp {
    fn layout(&self) -> &Layout;
    fn title(&self) -> String;

    fn init(&mut self, ctx: &mut Context) -> Result<()>;
    fn update(&mut self, ctx: &mut Context) -> Result<()>;

    fn pre_draw_grid(&self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    fn draw_cell(&self, ctx: &mut Context, row: i32, col: i32, x: i32, y: i32) -> Result<()>;

    fn post_draw_grid(&self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    fn should_exit(&self) -> bool {
        false
    }

    fn exit(&mut self) {}
}
