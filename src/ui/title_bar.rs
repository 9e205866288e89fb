use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;
use crate::ui::APP_NAME;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, screen: &ScreenLayout, theme: &Theme) {
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(APP_NAME, theme.title()),
    ]))
    .style(theme.title_bar());
    frame.render_widget(title, screen.title_bar);

    let info = Paragraph::new(Line::from(vec![
        Span::styled("[i]", theme.accent()),
        Span::raw(" Info "),
    ]))
    .alignment(Alignment::Right)
    .style(theme.title_bar());
    frame.render_widget(info, screen.info_action);
}
