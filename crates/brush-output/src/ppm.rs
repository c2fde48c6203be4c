//! Binary-PPM frame dumps of the light buffer.
//!
//! PPM (P6) needs no codec dependency and every image viewer opens it,
//! which is all a headless run wants from a frame dump.  Components are
//! clamped from linear f32 to 8-bit; the alpha channel is dropped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use brush_core::Tick;
use brush_paint::LightBuffer;

use crate::OutputResult;

/// Write `light` to `dir/frame_NNNNNN.ppm` and return the path.
pub fn write_frame(dir: &Path, tick: Tick, light: &LightBuffer) -> OutputResult<PathBuf> {
    let path = dir.join(format!("frame_{:06}.ppm", tick.0));
    let file = File::create(&path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "P6")?;
    writeln!(out, "{} {}", light.width(), light.height())?;
    writeln!(out, "255")?;

    let mut row = Vec::with_capacity(light.width() * 3);
    for chunk in light.cells().chunks(light.width()) {
        row.clear();
        for texel in chunk {
            row.push(to_byte(texel.r));
            row.push(to_byte(texel.g));
            row.push(to_byte(texel.b));
        }
        out.write_all(&row)?;
    }
    out.flush()?;
    Ok(path)
}

#[inline]
fn to_byte(component: f32) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}
