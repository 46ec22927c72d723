//! Terminal rendering module.
//!
//! Renders into a simple framebuffer of styled character cells which is then
//! flushed to the terminal in one pass. The board is tiny and frames are
//! driven by input, so a full redraw per frame is plenty.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::TerminalRenderer;
