use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the `[i] Info` action at the right end of the title bar.
const INFO_ACTION_WIDTH: u16 = 10;
const BUTTON_WIDTH: u16 = 12;
const BUTTON_HEIGHT: u16 = 3;
/// Big glyphs are 5 rows, plus a blank row above and below.
pub const READOUT_HEIGHT: u16 = 7;

pub struct ScreenLayout {
    pub title_bar: Rect,
    pub info_action: Rect,
    pub readout: Rect,
    pub primary_button: Rect,
    pub reset_button: Rect,
    pub footer: Rect,
}

pub fn compute_layout(area: Rect) -> ScreenLayout {
    // Main vertical split: title | body | footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(4),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let body = main_chunks[1];
    let footer = main_chunks[2];

    let info_w = INFO_ACTION_WIDTH.min(title_bar.width);
    let info_action = Rect::new(
        title_bar.right().saturating_sub(info_w),
        title_bar.y,
        info_w,
        title_bar.height,
    );

    // Body: readout and controls, vertically centered
    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(READOUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Fill(1),
        ])
        .split(body);

    let readout = body_chunks[1];
    let controls = body_chunks[3];

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Fill(1),
        ])
        .split(controls);

    ScreenLayout {
        title_bar,
        info_action,
        readout,
        primary_button: button_chunks[1],
        reset_button: button_chunks[3],
        footer,
    }
}

/// Center a `width` x `height` box inside `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_do_not_overlap() {
        let l = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(l.title_bar.y, 0);
        assert_eq!(l.footer.y, 23);
        assert_eq!(l.info_action.right(), 80);
        assert_eq!(l.primary_button.width, BUTTON_WIDTH);
        assert!(l.primary_button.right() <= l.reset_button.x);
        assert_eq!(l.primary_button.y, l.reset_button.y);
        assert!(l.readout.bottom() <= l.primary_button.y);
        assert!(l.primary_button.bottom() <= l.footer.y);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(2, 3, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(7, 6, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
