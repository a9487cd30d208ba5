use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::rect::{Point, Rect};
use sdl2::render::WindowCanvas;
use typed_builder::TypedBuilder;

pub use pixelgrid_common;
pub use sdl2;

use pixelgrid_common::font;
use pixelgrid_common::{Color, DrawCommand, GridApp, Key, Runner};

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub title: String,
    #[builder(default = 30)]
    pub fps: u32,
    #[builder(default = 3)]
    pub scale: u32,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, app: impl GridApp) -> Result<()> {
        let SdlInitInfo { title, fps, scale } = sdl_init_info;
        let layout = *app.layout();
        layout.validate()?;
        let (width, height) = layout.canvas_size();
        let (width, height) = (width as u32, height as u32);

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;
        log::info!("Opened '{}' at {}x{} (scale {})", title, width, height, scale);

        let mouse = sdl_context.mouse();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let mut runner = Runner::new(app);

        let target_frame = Duration::from_secs(1) / fps.max(1);
        let mut last_frame = Instant::now();
        let scale = scale.max(1) as i32;

        loop {
            if runner.app().should_exit() {
                runner.app_mut().exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => {
                        runner.app_mut().exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => runner
                        .context_mut()
                        .input_mut()
                        .press(map_keycode(keycode)),
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => runner
                        .context_mut()
                        .input_mut()
                        .release(map_keycode(keycode)),
                    Event::MouseButtonDown { mouse_btn, .. } => runner
                        .context_mut()
                        .input_mut()
                        .press(map_mouse_button(mouse_btn)),
                    Event::MouseButtonUp { mouse_btn, .. } => runner
                        .context_mut()
                        .input_mut()
                        .release(map_mouse_button(mouse_btn)),
                    _ => {}
                }
            }
            let mouse_state = event_pump.mouse_state();
            runner
                .context_mut()
                .set_pointer(mouse_state.x() / scale, mouse_state.y() / scale);

            let commands = runner.tick()?;
            render_commands(&mut canvas, commands)?;
            canvas.present();
            mouse.show_cursor(runner.context().pointer_visible());

            let elapsed = last_frame.elapsed();
            if elapsed < target_frame {
                std::thread::sleep(target_frame - elapsed);
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}

fn render_commands(canvas: &mut WindowCanvas, commands: &[DrawCommand]) -> Result<()> {
    for command in commands {
        match command {
            DrawCommand::Clear(color) => {
                canvas.set_draw_color(map_color(*color));
                canvas.clear();
            }
            DrawCommand::FillRect { x, y, w, h, color } => {
                if *w > 0 && *h > 0 {
                    canvas.set_draw_color(map_color(*color));
                    canvas
                        .fill_rect(Rect::new(*x, *y, *w as u32, *h as u32))
                        .map_err(|e| anyhow!(e))?;
                }
            }
            DrawCommand::StrokeRect { x, y, w, h, color } => {
                if *w > 0 && *h > 0 {
                    canvas.set_draw_color(map_color(*color));
                    canvas
                        .draw_rect(Rect::new(*x, *y, *w as u32, *h as u32))
                        .map_err(|e| anyhow!(e))?;
                }
            }
            DrawCommand::FillCircle { x, y, r, color } => {
                canvas.set_draw_color(map_color(*color));
                let points: Vec<Point> = circle_pixels(*x, *y, *r)
                    .into_iter()
                    .map(|(px, py)| Point::new(px, py))
                    .collect();
                canvas.draw_points(points.as_slice()).map_err(|e| anyhow!(e))?;
            }
            DrawCommand::Text { x, y, text, color } => {
                canvas.set_draw_color(map_color(*color));
                let points: Vec<Point> = font::text_pixels(*x, *y, text)
                    .into_iter()
                    .map(|(px, py)| Point::new(px, py))
                    .collect();
                canvas.draw_points(points.as_slice()).map_err(|e| anyhow!(e))?;
            }
        }
    }
    Ok(())
}

/// Pixels of a filled circle: every `(x + dx, y + dy)` with `dx² + dy² <= r²`.
pub fn circle_pixels(x: i32, y: i32, r: i32) -> Vec<(i32, i32)> {
    let r = r.max(0);
    let mut pixels = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                pixels.push((x + dx, y + dy));
            }
        }
    }
    pixels
}

pub fn map_color(color: Color) -> sdl2::pixels::Color {
    let (r, g, b, a) = color.rgba();
    sdl2::pixels::Color::RGBA(r, g, b, a)
}

pub fn map_mouse_button(button: MouseButton) -> Key {
    match button {
        MouseButton::Left => Key::MouseLeft,
        MouseButton::Right => Key::MouseRight,
        _ => Key::None,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::N => Key::N,
        Keycode::R => Key::R,
        Keycode::S => Key::S,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        _ => Key::None,
    }
}
