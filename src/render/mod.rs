//! Rendering module for writing label documents to PDF, text and JSON.

mod font;
mod json;
mod options;
mod pdf;
mod text;

pub use font::{encode_win_ansi, string_width, win_ansi_code, FONT_NAME};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use pdf::{
    layout, PdfRenderer, PlacedLine, RenderedPdf, Sheet, BOTTOM_MARGIN, CELL_MARGIN, FONT_SIZE,
    LINE_HEIGHT, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
};
pub use text::{to_text, PAGE_SEPARATOR};
