use crate::app::state::AppState;
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Label for the start/pause button given the current state.
pub fn primary_label(running: bool) -> &'static str {
    if running {
        "Pause"
    } else {
        "Start"
    }
}

pub fn render(frame: &mut Frame, screen: &ScreenLayout, state: &AppState, theme: &Theme) {
    let running = state.stopwatch.is_running();
    let primary_style = if running {
        theme.readout(state.stopwatch.state())
    } else {
        theme.accent()
    };
    render_button(frame, screen.primary_button, primary_label(running), primary_style, theme);
    render_button(frame, screen.reset_button, "Reset", theme.title(), theme);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(theme.border());
    let paragraph = Paragraph::new(Span::styled(label.to_string(), style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
