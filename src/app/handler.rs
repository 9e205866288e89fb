use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::stopwatch::StopwatchState;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    // A tick can still be queued behind a pause; ignore it then
    if state.stopwatch.is_running() {
        state.stopwatch.refresh();
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.viewport = Rect::new(0, 0, w, h);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Info dialog captures all input when visible
    if state.show_info {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i') => close_info(state),
            KeyCode::Char('q') => return vec![Action::Quit],
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Char(' ') => toggle(state),
        KeyCode::Char('s') => start(state),
        KeyCode::Char('p') => pause(state),
        KeyCode::Char('r') => reset(state),
        KeyCode::Char('i') => {
            open_info(state);
            vec![]
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let pos = Position::new(mouse.column, mouse.row);

    if state.show_info {
        // Any click dismisses the dialog
        close_info(state);
        return vec![];
    }

    let screen = layout::compute_layout(state.viewport);
    if screen.info_action.contains(pos) {
        open_info(state);
        vec![]
    } else if screen.primary_button.contains(pos) {
        toggle(state)
    } else if screen.reset_button.contains(pos) {
        reset(state)
    } else {
        vec![]
    }
}

fn start(state: &mut AppState) -> Vec<Action> {
    if !state.stopwatch.start() {
        return vec![];
    }
    after_transition(state)
}

fn pause(state: &mut AppState) -> Vec<Action> {
    if !state.stopwatch.pause() {
        return vec![];
    }
    after_transition(state)
}

fn reset(state: &mut AppState) -> Vec<Action> {
    state.stopwatch.reset();
    after_transition(state)
}

fn toggle(state: &mut AppState) -> Vec<Action> {
    if !state.stopwatch.toggle() {
        return vec![];
    }
    after_transition(state)
}

/// Log the new state and keep the ticker in step with it.
fn after_transition(state: &mut AppState) -> Vec<Action> {
    let sw_state = state.stopwatch.state();
    let shown = state.stopwatch.formatted_time().to_string();
    tracing::info!(state = %sw_state, elapsed = %shown, "stopwatch transition");

    match sw_state {
        StopwatchState::Running => {
            state.set_status("Running");
            vec![Action::StartTicker]
        }
        StopwatchState::Paused => {
            state.set_status(format!("Paused at {}", shown));
            vec![Action::StopTicker]
        }
        StopwatchState::Stopped => {
            state.set_status("Reset");
            vec![Action::StopTicker]
        }
    }
}

fn open_info(state: &mut AppState) {
    state.show_info = true;
    state.dirty = true;
}

fn close_info(state: &mut AppState) {
    state.show_info = false;
    state.dirty = true;
}
