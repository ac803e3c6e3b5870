//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Lay the components out into a frame string
//!
//! The Zellij shim prints the frame; tests inspect it with
//! [`helpers::strip_ansi`](crate::ui::helpers::strip_ansi).

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI into a string of ANSI-styled, cursor-positioned text.
///
/// ```rust
/// use inkpane::app::{AppState, Settings};
/// use inkpane::ui::{icons::GlyphSet, render_to_string, theme::Theme};
///
/// let state = AppState::new(Theme::default(), GlyphSet::Ascii, Settings::default());
/// let frame = render_to_string(&state, 24, 80);
/// assert!(frame.contains("Inkpane"));
/// ```
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut frame = String::with_capacity(rows * cols * 2);
    components::render_layout(&mut frame, &viewmodel, &state.theme, state.glyphs, rows, cols);
    frame
}

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; the host redraws the pane on each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}
