use engine::Money;
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Span for an expense amount. Spending is always shown in the negative
/// color, the sign is implied by context.
#[must_use]
pub fn amount_span(amount: Money, theme: &Theme) -> Span<'static> {
    Span::styled(amount.to_string(), Style::default().fg(theme.negative))
}
