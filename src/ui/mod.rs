mod controls;
mod info_dialog;
pub mod layout;
mod readout;
mod status_bar;
mod theme;
mod title_bar;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use theme::Theme;

pub const APP_NAME: &str = "Stopwatch";
pub const AUTHOR_CREDIT: &str = "Developed by DeNicks21";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = Theme::for_mode(state.config.ui.theme);
    let screen = layout::compute_layout(area);

    frame.render_widget(Block::default().style(theme.screen()), area);

    title_bar::render(frame, &screen, &theme);
    readout::render(frame, screen.readout, state, &theme);
    controls::render(frame, &screen, state, &theme);
    status_bar::render(frame, screen.footer, state, &theme);

    // Popup last so it draws over everything
    info_dialog::render(frame, state, &theme);
}
