use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::message::{DeliveryStatus, Message};
use super::view::px_to_cols;
use crate::theme::ThemeColors;

/// Widest a bubble gets, in CSS pixels.
pub const BUBBLE_MAX_WIDTH_PX: u32 = 240;
const AVATAR: &str = " CS ";
const AVATAR_GAP: &str = " ";

/// Greedy word wrap by character count. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if row_len > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_len = 0;
                }
                rows.push(word.drain(..width).collect());
            }
            if word.is_empty() {
                continue;
            }
            let needed = if row_len == 0 { word.len() } else { row_len + 1 + word.len() };
            if needed > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            if row_len > 0 {
                row.push(' ');
                row_len += 1;
            }
            row.extend(word.iter());
            row_len += word.len();
        }
        rows.push(row);
    }

    rows
}

fn avatar_width() -> usize {
    AVATAR.chars().count() + AVATAR_GAP.chars().count()
}

/// Character budget for bubble text in a message list `area_width` wide.
fn text_width(area_width: u16, received: bool) -> usize {
    let reserved = if received { avatar_width() } else { 0 } + 2;
    let cap = px_to_cols(BUBBLE_MAX_WIDTH_PX) as usize;
    (area_width as usize).saturating_sub(reserved).min(cap).max(1)
}

fn bubble_rows(rows: &[String], style: Style) -> Vec<Span<'static>> {
    let inner = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            let pad = inner - row.chars().count();
            Span::styled(format!(" {}{} ", row, " ".repeat(pad)), style)
        })
        .collect()
}

/// Lines for one chat bubble: sent messages right-aligned on the `sent`
/// color with white text, received ones left-aligned behind a "CS" avatar.
pub fn bubble_lines(message: &Message, colors: &ThemeColors, area_width: u16) -> Vec<Line<'static>> {
    let received = !message.is_sent();
    let rows = wrap_text(&message.message, text_width(area_width, received));

    let bubble_style = if received {
        Style::default().fg(colors.text.to_color()).bg(colors.received.to_color())
    } else {
        Style::default().fg(Color::White).bg(colors.sent.to_color())
    };
    let avatar_style = Style::default()
        .fg(Color::White)
        .bg(colors.primary.to_color())
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = bubble_rows(&rows, bubble_style)
        .into_iter()
        .enumerate()
        .map(|(i, span)| {
            if received {
                let lead = if i == 0 {
                    Span::styled(AVATAR, avatar_style)
                } else {
                    Span::raw(" ".repeat(AVATAR.chars().count()))
                };
                Line::from(vec![lead, Span::raw(AVATAR_GAP), span])
            } else {
                Line::from(span).alignment(Alignment::Right)
            }
        })
        .collect();

    if let Some(caption) = message.caption() {
        let color = match message.status {
            Some(DeliveryStatus::Failed) => Color::Red,
            _ => colors.text_secondary.to_color(),
        };
        let caption = Span::styled(caption, Style::default().fg(color));
        lines.push(if received {
            Line::from(vec![Span::raw(" ".repeat(avatar_width())), caption])
        } else {
            Line::from(caption).alignment(Alignment::Right)
        });
    }

    lines
}

/// The typing indicator, drawn as a received bubble holding the dots.
pub fn typing_line(frame: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            AVATAR,
            Style::default()
                .fg(Color::White)
                .bg(colors.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(AVATAR_GAP),
        Span::styled(
            format!(" {} ", frame),
            Style::default()
                .fg(colors.text_secondary.to_color())
                .bg(colors.received.to_color()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeCatalog;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[rstest]
    #[case("hello world", 5, vec!["hello", "world"])]
    #[case("hello world", 11, vec!["hello world"])]
    #[case("abcdefgh", 3, vec!["abc", "def", "gh"])]
    #[case("a\nb", 10, vec!["a", "b"])]
    #[case("", 10, vec![""])]
    fn test_wrap_text(#[case] text: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(wrap_text(text, width), expected);
    }

    #[test]
    fn test_received_bubble_has_avatar_and_colors() {
        let theme = ThemeCatalog::builtin().resolve_or_default("forest-green");
        let message = Message::received(1, "Hello there");
        let lines = bubble_lines(&message, &theme.colors, 40);

        assert!(line_text(&lines[0]).starts_with(" CS "));
        assert!(line_text(&lines[0]).contains("Hello there"));
        let bubble = &lines[0].spans[2];
        assert_eq!(bubble.style.bg, Some(theme.colors.received.to_color()));
        assert_eq!(bubble.style.fg, Some(theme.colors.text.to_color()));
        // caption row
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_sent_bubble_is_right_aligned_white_on_sent() {
        let theme = ThemeCatalog::builtin().resolve_or_default("gaming");
        let message = Message::sent(2, "Hi", DeliveryStatus::Sent);
        let lines = bubble_lines(&message, &theme.colors, 40);

        assert_eq!(lines[0].alignment, Some(Alignment::Right));
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::White));
        assert_eq!(lines[0].spans[0].style.bg, Some(theme.colors.sent.to_color()));
        assert_eq!(line_text(&lines[0]), " Hi ");
    }

    #[test]
    fn test_bubble_width_is_capped() {
        let theme = ThemeCatalog::builtin().resolve_or_default("zen");
        let message = Message::sent(3, "word ".repeat(40), DeliveryStatus::Sent);
        let lines = bubble_lines(&message, &theme.colors, 200);
        let widest = lines.iter().map(|l| line_text(l).chars().count()).max().unwrap();
        assert!(widest <= px_to_cols(BUBBLE_MAX_WIDTH_PX) as usize + 2);
    }
}
