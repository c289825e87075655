//! Shared test helpers.

use qrcode::types::Color;
use qrcode::QrCode;

/// Quiet-zone width in modules. The QR standard requires 4; the external
/// renderer provides its own margin, so the reference grid must too or the
/// decoder rejects the image.
pub const QUIET: usize = 4;

/// Grid text for `text` in the renderer's stdout format: 2-character
/// tokens, `██` for black, quiet zone included.
pub fn reference_grid(text: &str) -> String {
    let code = QrCode::new(text.as_bytes()).expect("reference encoder rejected input");
    let width = code.width();
    let colors = code.to_colors();
    let total = width + 2 * QUIET;

    let mut out = String::new();
    for y in 0..total {
        for x in 0..total {
            let in_code =
                (QUIET..QUIET + width).contains(&y) && (QUIET..QUIET + width).contains(&x);
            let dark = in_code && colors[(y - QUIET) * width + (x - QUIET)] == Color::Dark;
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}
