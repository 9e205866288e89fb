use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use crate::ui::{APP_NAME, AUTHOR_CREDIT};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 20;

pub const AUTHOR_PROFILE: &str = "https://github.com/ndenicolais";
pub const SERIES_NOTE: &str = "#3 of 20 Android app ideas";

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    if !state.show_info {
        return;
    }

    let popup_area = centered(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Info — Esc to close ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(Style::default().fg(theme.accent))
        .padding(Padding::horizontal(1))
        .style(theme.dialog());

    let rule = Line::styled("─".repeat((DIALOG_WIDTH as usize).saturating_sub(4)), theme.border());

    let lines = vec![
        Line::styled(APP_NAME, theme.accent()).alignment(Alignment::Center),
        Line::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            theme.hint(),
        )
        .alignment(Alignment::Center),
        Line::default(),
        rule.clone(),
        Line::styled(SERIES_NOTE, theme.title()).alignment(Alignment::Center),
        Line::from("This app shows a stopwatch").alignment(Alignment::Center),
        rule,
        Line::default(),
        key_line(theme, "space", "start / pause"),
        key_line(theme, "r", "reset"),
        key_line(theme, "i", "toggle this dialog"),
        key_line(theme, "q", "quit"),
        Line::default(),
        Line::styled("My GitHub", theme.title()).alignment(Alignment::Center),
        Line::styled(AUTHOR_PROFILE, theme.accent()).alignment(Alignment::Center),
        Line::default(),
        Line::styled(AUTHOR_CREDIT, theme.hint()).alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}

fn key_line<'a>(theme: &Theme, key: &'a str, what: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), theme.accent()),
        Span::raw("  "),
        Span::raw(what),
    ])
}
