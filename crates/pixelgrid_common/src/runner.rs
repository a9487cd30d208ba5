use anyhow::Result;

use crate::app::GridApp;
use crate::context::{Context, DrawCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Uninitialized,
    Running,
}

/// Drives a `GridApp` one frame at a time.
///
/// The first `tick` runs `init`; every tick then runs `update` followed by a
/// full draw phase. Hook errors are returned as-is and end the run.
pub struct Runner<A: GridApp> {
    app: A,
    ctx: Context,
    state: RunState,
}

impl<A: GridApp> Runner<A> {
    pub fn new(app: A) -> Self {
        Runner {
            app,
            ctx: Context::new(),
            state: RunState::Uninitialized,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn tick(&mut self) -> Result<&[DrawCommand]> {
        if self.state == RunState::Uninitialized {
            log::info!("{} init", self.app.title());
            self.app.init(&mut self.ctx)?;
            self.state = RunState::Running;
        }

        self.app.update(&mut self.ctx)?;
        self.draw()?;
        self.ctx.end_frame();

        Ok(self.ctx.commands())
    }

    fn draw(&mut self) -> Result<()> {
        let layout = *self.app.layout();
        self.ctx.begin_draw();
        self.app.pre_draw_grid(&mut self.ctx)?;
        for row in 0..layout.rows() as i32 {
            for col in 0..layout.cols() as i32 {
                let (x, y) = layout.cell_to_pixel(row, col);
                self.app.draw_cell(&mut self.ctx, row, col, x, y)?;
            }
        }
        self.app.post_draw_grid(&mut self.ctx)?;
        Ok(())
    }

    pub fn into_app(self) -> A {
        self.app
    }
}
