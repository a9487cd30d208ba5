//! Animated cloud pattern drawn over cells the player has not seen.

use pixelgrid_common::{Color, Context};

/// Sub-squares per cell side.
const CLOUD_RES: i32 = 3;
const CLOUD_THRESHOLD: f64 = 0.1;

/// Smooth lattice value noise in `[-1, 1]`.
pub fn noise(x: f64, y: f64, z: f64) -> f64 {
    let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
    let (tx, ty, tz) = (fade(x - x0), fade(y - y0), fade(z - z0));
    let (ix, iy, iz) = (x0 as i64, y0 as i64, z0 as i64);

    let corner = |dx: i64, dy: i64, dz: i64| lattice(ix + dx, iy + dy, iz + dz);
    let lerp = |a: f64, b: f64, t: f64| a + (b - a) * t;

    let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), tx);
    let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), tx);
    let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), tx);
    let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), tx);
    lerp(lerp(x00, x10, ty), lerp(x01, x11, ty), tz)
}

fn fade(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lattice(x: i64, y: i64, z: i64) -> f64 {
    let mut h = (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
        ^ (z as u64).wrapping_mul(0x1656_67B1_9E37_79F9);
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;
    (h >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
}

/// Fill the `dim`-sized cell at `(x, y)` with drifting clouds.
pub fn draw_clouds(ctx: &mut Context, x: i32, y: i32, dim: i32) {
    let step = dim / CLOUD_RES;
    let time = ctx.frame_count() as f64 / 80.0;
    let scale = 4.0 * dim as f64;
    for dy in 0..CLOUD_RES {
        for dx in 0..CLOUD_RES {
            let cx = x + dx * step;
            let cy = y + dy * step;
            let color = if noise(cx as f64 / scale, cy as f64 / scale, time) >= CLOUD_THRESHOLD {
                Color::NAVY
            } else {
                Color::BLACK
            };
            ctx.fill_rect(cx, cy, step, step, color);
        }
    }
}
