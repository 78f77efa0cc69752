/// Text-based proportion bar, `███░░░░` style.
///
/// `max` is the largest value among the rows sharing the bar; a zero `max`
/// yields an empty string.
#[must_use]
pub fn ascii_bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 || width == 0 {
        return String::new();
    }

    let ratio = value as f64 / max as f64;
    let mut filled = (ratio * width as f64).round() as usize;
    if value > 0 {
        filled = filled.max(1);
    }
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_still_show_one_block() {
        let bar = ascii_bar(1, 1000, 10);
        assert!(bar.starts_with('█'));
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn zero_max_renders_nothing() {
        assert_eq!(ascii_bar(0, 0, 10), "");
    }
}
