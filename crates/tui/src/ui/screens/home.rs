use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use engine::{Category, Record, Statistics};

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{
            card::{Card, StatCard},
            charts::ascii_bar,
            money::amount_span,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    // Main layout: form and statistics side by side, history below
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(13), Constraint::Min(5)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[0]);

    render_form(frame, top[0], state, &theme);
    render_stats(frame, top[1], state, &theme);
    render_expenses(frame, layout[1], state, &theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let in_form = state.focus != Focus::List;
    let card = Card::new("Добавить расход", theme).focused(in_form);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description label
            Constraint::Length(1), // Description input
            Constraint::Length(1), // Amount label
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Category label
            Constraint::Length(1), // Category selector
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Validation message
        ])
        .split(inner);

    render_label(frame, rows[0], "Описание", theme);
    render_input(
        frame,
        rows[1],
        &state.form.description,
        "Например: Продукты в магазине",
        state.focus == Focus::Description,
        theme,
    );

    render_label(frame, rows[2], "Сумма (₽)", theme);
    render_input(
        frame,
        rows[3],
        &state.form.amount,
        "0.00",
        state.focus == Focus::Amount,
        theme,
    );

    render_label(frame, rows[4], "Категория", theme);
    render_category_selector(frame, rows[5], state, theme);

    if let Some(message) = &state.form.message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            )),
            rows[7],
        );
    }
}

fn render_label(frame: &mut Frame<'_>, area: Rect, label: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(theme.text_muted))),
        area,
    );
}

/// Renders an input field: value and cursor, placeholder while empty.
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    if value.is_empty() && !focused {
        frame.render_widget(
            Paragraph::new(Span::styled(
                placeholder.to_string(),
                Style::default().fg(theme.dim),
            )),
            area,
        );
        return;
    }

    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    frame.render_widget(
        Paragraph::new(Span::styled(format!("{value}{cursor}"), style)),
        area,
    );
}

fn render_category_selector(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::Category;
    let category = Category::ALL[state.form.category];

    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled("‹ ", Style::default().fg(theme.dim)),
        Span::styled(category.label(), style),
        Span::styled(" ›", Style::default().fg(theme.dim)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_stats(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    // Recomputed on every frame; the ledger is small and the reduction is O(n).
    let stats = Statistics::compute(&state.ledger);

    let card = Card::new("Статистика", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    StatCard::new("Всего расходов", stats.total.to_string(), theme).render(frame, tiles[0]);
    StatCard::new("Количество", stats.count.to_string(), theme).render(frame, tiles[1]);
    StatCard::new("Средний расход", stats.average.to_string(), theme).render(frame, tiles[2]);

    render_breakdown(frame, rows[1], &stats, theme);
}

fn render_breakdown(frame: &mut Frame<'_>, area: Rect, stats: &Statistics, theme: &Theme) {
    if stats.by_category.is_empty() || area.height == 0 {
        return;
    }

    let max_total = stats
        .by_category
        .iter()
        .map(|entry| entry.total.minor().unsigned_abs())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from(Span::styled(
        "По категориям",
        Style::default().fg(theme.text_muted),
    ))];

    for entry in stats
        .by_category
        .iter()
        .take((area.height as usize).saturating_sub(1))
    {
        let bar = ascii_bar(entry.total.minor().unsigned_abs(), max_total, 12);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", entry.category.label()),
                Style::default().fg(theme.text),
            ),
            amount_span(entry.total, theme),
            Span::raw("  "),
            Span::styled(bar, Style::default().fg(theme.dim)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_expenses(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::List;
    let card = Card::new("История расходов", theme).focused(focused);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if state.ledger.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Нет расходов", Style::default().fg(theme.dim))),
                Line::from(Span::styled(
                    "Добавьте свой первый расход используя форму выше",
                    Style::default().fg(theme.dim),
                )),
            ]),
            inner,
        );
        return;
    }

    // Keep the selected row visible: the window starts far enough back.
    let height = inner.height as usize;
    let offset = state.selected.saturating_sub(height.saturating_sub(1));

    let items: Vec<ListItem> = state
        .ledger
        .records()
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(index, record)| expense_row(record, index == state.selected, focused, state, theme))
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn expense_row(
    record: &Record,
    selected: bool,
    list_focused: bool,
    state: &AppState,
    theme: &Theme,
) -> ListItem<'static> {
    let marker = if selected && list_focused {
        Span::styled("❯ ", Style::default().fg(theme.accent))
    } else {
        Span::raw("  ")
    };

    let date = record
        .date
        .with_timezone(&state.tz)
        .format("%d.%m.%Y %H:%M")
        .to_string();

    let description_style = if selected && list_focused {
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    ListItem::new(Line::from(vec![
        marker,
        Span::styled(format!("{date}  "), Style::default().fg(theme.dim)),
        Span::styled(
            format!("{:<12}", record.category.label()),
            Style::default().fg(theme.accent),
        ),
        Span::styled(format!("{}  ", record.description), description_style),
        amount_span(record.amount, theme),
    ]))
}
