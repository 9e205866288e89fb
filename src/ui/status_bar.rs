use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::AUTHOR_CREDIT;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = "space start/pause  r reset  i info  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        theme.readout(state.stopwatch.state()),
    )];

    if state.config.ui.show_hints {
        parts.push(Span::styled(format!(" {} ", HINTS), theme.hint()));
    }

    // Pad so the credit sits flush right
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let credit = format!(" {} ", AUTHOR_CREDIT);
    let remaining = (area.width as usize).saturating_sub(used + credit.chars().count());
    parts.push(Span::raw(" ".repeat(remaining)));
    parts.push(Span::styled(credit, theme.hint()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
