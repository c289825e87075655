// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Textual module grid to monochrome raster image.
//!
//! The renderer emits a newline-separated grid where every module is a
//! 2-character token: `██` for black, anything else for white. Rasterization
//! maps module `(mx, my)` onto the pixel rectangle
//! `[mx·scale, (mx+1)·scale) × [my·scale, (my+1)·scale)`.
//!
//! Parsing is permissive, matching the renderer contract rather than
//! policing it: width is `max(row char-length) / 2`, an incomplete trailing
//! token on an odd-length row is skipped, short rows pad out to white, and
//! unrecognized tokens stay white. The one hard failure is a grid with no
//! rows or no complete module column, which cannot describe a QR code at
//! all. Row widths count characters, not bytes; `█` is 3 bytes of UTF-8.

use image::{GrayImage, Luma};

use crate::config::BLACK_MODULE;
use crate::error::HarnessError;

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

/// Rasterize a textual module grid at `scale` pixels per module side.
///
/// The result has exactly `(width·scale, height·scale)` pixels where `width`
/// and `height` are the module dimensions of the parsed grid.
///
/// # Panics
///
/// Panics if `scale` is zero.
pub fn rasterize(grid_text: &str, scale: u32) -> Result<GrayImage, HarnessError> {
    assert!(scale > 0, "module scale must be positive");

    let rows: Vec<Vec<char>> = grid_text.lines().map(|line| line.chars().collect()).collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0) / 2;
    let height = rows.len();

    if width == 0 || height == 0 {
        return Err(HarnessError::MalformedGrid {
            detail: format!("{} rows, {} module columns", height, width),
        });
    }

    // White background: a module the renderer never drew degrades to white
    // rather than to an undefined pixel.
    let mut image = GrayImage::from_pixel(width as u32 * scale, height as u32 * scale, WHITE);

    let token: Vec<char> = BLACK_MODULE.chars().collect();
    for (y, row) in rows.iter().enumerate() {
        let mut x = 0;
        while x + 1 < row.len() {
            if row[x] == token[0] && row[x + 1] == token[1] {
                fill_module(&mut image, (x / 2) as u32, y as u32, scale);
            }
            x += 2;
        }
    }

    Ok(image)
}

/// Fill the `scale × scale` pixel block of module `(mx, my)` with black.
fn fill_module(image: &mut GrayImage, mx: u32, my: u32, scale: u32) {
    for sy in 0..scale {
        for sx in 0..scale {
            image.put_pixel(mx * scale + sx, my * scale + sy, BLACK);
        }
    }
}
