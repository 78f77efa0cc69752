pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Focus};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    // Main layout: info bar, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::home::render(frame, layout[1], state);
    render_bottom_bar(frame, layout[2], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            "Копилка",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " — управляйте своими финансами",
            Style::default().fg(theme.text_muted),
        ),
        Span::raw("  "),
        Span::styled("Записей", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", state.ledger.len())),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = get_context_hints(state, theme);

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("Ctrl+C", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" выход"));

    if let Some(status) = &state.status {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.push(Span::styled(
            status.clone(),
            Style::default().fg(theme.error),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Returns keyboard hints for the current focus.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match state.focus {
        Focus::Description | Focus::Amount => vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" поле  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" добавить  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" к списку"),
        ],
        Focus::Category => vec![
            Span::styled("←/→", Style::default().fg(theme.accent)),
            Span::raw(" категория  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" добавить  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" к списку"),
        ],
        Focus::List => vec![
            Span::styled("j/k", Style::default().fg(theme.accent)),
            Span::raw(" выбор  "),
            Span::styled("d", Style::default().fg(theme.accent)),
            Span::raw(" удалить  "),
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::raw(" новый расход  "),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::raw(" выход"),
        ],
    }
}
