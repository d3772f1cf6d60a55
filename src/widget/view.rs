//! Drawing the widget into a ratatui frame. Sizes in the theme are CSS
//! pixels; they are scaled to cells at [`PX_PER_COL`] x [`PX_PER_ROW`].

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::bubble::{bubble_lines, typing_line};
use super::ChatWidget;
use crate::host::Position;
use crate::theme::Theme;

pub const PX_PER_COL: u32 = 8;
pub const PX_PER_ROW: u32 = 16;
/// Panel height not available to the message list (header, composer, footer).
pub const MESSAGE_CHROME_PX: u32 = 140;
const EDGE_PX: u32 = 20;

const TOGGLE_WIDTH: u16 = 7;
const TOGGLE_HEIGHT: u16 = 3;
const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 1;
const SEND_WIDTH: u16 = 3;

pub const ERROR_PLACEHOLDER: &str = "Error loading widget";
pub const THEME_ERROR: &str = "Theme Error";

pub fn px_to_cols(px: u32) -> u16 {
    (px / PX_PER_COL).min(u16::MAX as u32) as u16
}

pub fn px_to_rows(px: u32) -> u16 {
    (px / PX_PER_ROW).min(u16::MAX as u32) as u16
}

fn edge_cols() -> u16 {
    px_to_cols(EDGE_PX)
}

fn edge_rows() -> u16 {
    px_to_rows(EDGE_PX).max(1)
}

/// Rect of size `w` x `h` at (`x`, `y`), shifted and shrunk to stay inside
/// `area`.
fn fit(area: Rect, x: i32, y: i32, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    let max_x = (area.right() - w) as i32;
    let max_y = (area.bottom() - h) as i32;
    let x = x.clamp(area.x as i32, max_x) as u16;
    let y = y.clamp(area.y as i32, max_y) as u16;
    Rect::new(x, y, w, h)
}

/// Where the floating toggle button sits for `position`.
pub fn toggle_area(area: Rect, position: Position) -> Rect {
    let x = if position.is_left() {
        area.x as i32 + edge_cols() as i32
    } else {
        area.right() as i32 - edge_cols() as i32 - TOGGLE_WIDTH as i32
    };
    let y = match position {
        Position::BottomRight | Position::BottomLeft => {
            area.bottom() as i32 - edge_rows() as i32 - TOGGLE_HEIGHT as i32
        }
        Position::TopRight | Position::TopLeft => area.y as i32 + edge_rows() as i32,
        Position::CenterRight | Position::CenterLeft => area.y as i32 + (area.height / 2) as i32,
    };
    fit(area, x, y, TOGGLE_WIDTH, TOGGLE_HEIGHT)
}

fn message_rows(theme: &Theme) -> u16 {
    px_to_rows(theme.height.saturating_sub(MESSAGE_CHROME_PX)).max(1)
}

/// The open chat panel: anchored to the toggle's outer edge, above it when
/// there is room, below it otherwise.
pub fn panel_area(area: Rect, position: Position, widget: &ChatWidget) -> Rect {
    let theme = widget.theme();
    let toggle = toggle_area(area, position);
    let width = px_to_cols(theme.width).min(area.width.saturating_sub(edge_cols() * 2));
    let height = HEADER_ROWS + message_rows(theme) + composer_rows(widget) + FOOTER_ROWS;

    let x = if position.is_left() {
        toggle.x as i32
    } else {
        toggle.right() as i32 - width as i32
    };

    let room_above = toggle.y.saturating_sub(area.y + 1);
    let room_below = area.bottom().saturating_sub(toggle.bottom() + 1);
    let place_above = match position {
        Position::TopRight | Position::TopLeft => false,
        _ => room_above >= height.min(room_below.max(room_above)),
    };
    let (y, height) = if place_above {
        let h = height.min(room_above);
        (toggle.y as i32 - 1 - h as i32, h)
    } else {
        (toggle.bottom() as i32 + 1, height.min(room_below))
    };

    fit(area, x, y, width, height)
}

fn composer_rows(widget: &ChatWidget) -> u16 {
    widget.composer().visible_rows() + 2
}

/// Red inline box shown in place of the widget when it cannot be drawn.
pub fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let width = text.chars().count() as u16 + 4;
    let x = area.right() as i32 - edge_cols() as i32 - width as i32;
    let y = area.bottom() as i32 - edge_rows() as i32 - 1;
    let rect = fit(area, x, y, width, 1);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(format!("  {}  ", text))
            .style(Style::default().fg(Color::White).bg(Color::Red)),
        rect,
    );
}

pub fn render(widget: &ChatWidget, frame: &mut Frame, area: Rect) {
    let theme = widget.theme();
    if theme.colors.primary.is_empty() {
        tracing::warn!("Theme colors missing primary color");
        render_placeholder(frame, area, THEME_ERROR);
        return;
    }

    let position = widget.position();
    if widget.is_open() {
        render_panel(widget, frame, panel_area(area, position, widget));
    }
    render_toggle(widget, frame, toggle_area(area, position));
}

fn render_toggle(widget: &ChatWidget, frame: &mut Frame, rect: Rect) {
    let colors = &widget.theme().colors;
    let background = if widget.is_open() {
        colors.primary_hover.to_color()
    } else {
        colors.primary.to_color()
    };
    let icon = if widget.is_open() { "✕" } else { "✉" };

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(vec![Line::raw(""), Line::raw(icon), Line::raw("")])
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(background).add_modifier(Modifier::BOLD)),
        rect,
    );
}

fn render_panel(widget: &ChatWidget, frame: &mut Frame, rect: Rect) {
    let theme = widget.theme();
    let colors = &theme.colors;

    frame.render_widget(Clear, rect);
    frame.render_widget(Block::default().style(Style::default().bg(colors.background.to_color())), rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(1),
            Constraint::Length(composer_rows(widget)),
            Constraint::Length(FOOTER_ROWS),
        ])
        .split(rect);

    render_header(theme, frame, chunks[0]);
    render_messages(widget, frame, chunks[1]);
    render_composer(widget, frame, chunks[2]);
    render_footer(theme, frame, chunks[3]);
}

fn render_header(theme: &Theme, frame: &mut Frame, rect: Rect) {
    let colors = &theme.colors;
    let white = Style::default().fg(Color::White);
    // Two-row stand-in for the primary -> primaryHover gradient.
    let lines = vec![
        Line::from(vec![
            Span::styled(" ✉ ", white.add_modifier(Modifier::BOLD)),
            Span::styled(theme.branding.support_title.clone(), white.add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().bg(colors.primary.to_color())),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(theme.branding.support_subtitle.clone(), white),
        ])
        .style(Style::default().bg(colors.primary_hover.to_color())),
    ];
    frame.render_widget(Paragraph::new(lines), rect);
}

fn render_messages(widget: &ChatWidget, frame: &mut Frame, rect: Rect) {
    let colors = &widget.theme().colors;
    let inner_width = rect.width.saturating_sub(2);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in widget.messages() {
        lines.extend(bubble_lines(message, colors, inner_width));
        lines.push(Line::raw(""));
    }
    if widget.is_typing() {
        lines.push(typing_line(widget.typing().current_frame(), colors));
    }

    let total = lines.len() as u16;
    let max_offset = total.saturating_sub(rect.height);
    let offset = max_offset.saturating_sub(widget.scroll());

    let block = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().bg(colors.secondary.to_color()));
    let inner = Rect::new(rect.x + 1, rect.y, inner_width, rect.height);
    frame.render_widget(block, rect);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn render_composer(widget: &ChatWidget, frame: &mut Frame, rect: Rect) {
    let theme = widget.theme();
    let colors = &theme.colors;
    let composer = widget.composer();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.primary.to_color()))
        .style(Style::default().bg(colors.background.to_color()));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_WIDTH)])
        .split(inner);

    let text = if composer.is_empty() {
        Paragraph::new(theme.branding.placeholder.clone())
            .style(Style::default().fg(colors.text_secondary.to_color()))
    } else {
        let lines: Vec<Line> = composer.lines().iter().map(|l| Line::raw(l.as_str())).collect();
        Paragraph::new(lines)
            .scroll((composer.scroll_offset(), 0))
            .style(Style::default().fg(colors.text.to_color()))
    };
    frame.render_widget(text, chunks[0]);

    let send_color = if composer.can_send() {
        colors.primary.to_color()
    } else {
        colors.text_secondary.to_color()
    };
    frame.render_widget(
        Paragraph::new("➤")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(send_color)),
        Rect {
            height: chunks[1].height.min(1),
            ..chunks[1]
        },
    );

    if widget.is_open() {
        let (line, col) = composer.cursor();
        let row = (line as u16).saturating_sub(composer.scroll_offset());
        let x = chunks[0].x + (col as u16).min(chunks[0].width.saturating_sub(1));
        let y = chunks[0].y + row.min(chunks[0].height.saturating_sub(1));
        frame.set_cursor_position((x, y));
    }
}

fn render_footer(theme: &Theme, frame: &mut Frame, rect: Rect) {
    let colors = &theme.colors;
    frame.render_widget(
        Paragraph::new(footer_text(theme))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(colors.text_secondary.to_color())
                    .bg(colors.background.to_color()),
            ),
        rect,
    );
}

pub fn footer_text(theme: &Theme) -> String {
    format!(
        "Powered by {} • {}",
        theme.branding.company_name, theme.branding.footer_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Attributes, ThemeResolver, WidgetConfig};
    use crate::theme::{ColorValue, ThemeCatalog};
    use crate::widget::WidgetContext;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn widget(attrs: &[(&str, &str)], open: bool) -> ChatWidget {
        let attributes: Attributes = attrs.iter().copied().collect();
        let props = ThemeResolver::new(Arc::new(ThemeCatalog::builtin())).props(&WidgetConfig::parse(&attributes));
        let mut widget = ChatWidget::new(props, &WidgetContext::default()).unwrap();
        widget.set_open(open);
        widget
    }

    fn draw(widget: &ChatWidget, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(widget, frame, frame.area())).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_pixel_scaling() {
        assert_eq!(px_to_cols(360), 45);
        assert_eq!(px_to_rows(500), 31);
        assert_eq!(px_to_rows(0), 0);
    }

    #[test]
    fn test_open_widget_shows_header_messages_and_footer() {
        let widget = widget(&[("company-name", "Acme"), ("width", "600"), ("height", "800")], true);
        let text = buffer_text(&draw(&widget, 100, 60));

        assert!(text.contains("Customer Support"));
        assert!(text.contains("Hello! Welcome to our support"));
        assert!(text.contains("Powered by Acme • We typically reply in a few minutes"));
        assert!(text.contains("Type your message..."));
    }

    #[test]
    fn test_closed_widget_only_draws_toggle() {
        let widget = widget(&[], false);
        let buffer = draw(&widget, 80, 30);
        let text = buffer_text(&buffer);
        assert!(!text.contains("Customer Support"));

        let toggle = toggle_area(buffer.area, Position::BottomRight);
        let cell = &buffer[(toggle.x, toggle.y)];
        assert_eq!(cell.bg, widget.theme().colors.primary.to_color());
    }

    #[test]
    fn test_toggle_follows_position() {
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(toggle_area(area, Position::BottomRight), Rect::new(71, 26, 7, 3));
        assert_eq!(toggle_area(area, Position::TopLeft), Rect::new(2, 1, 7, 3));
        assert_eq!(toggle_area(area, Position::CenterLeft), Rect::new(2, 15, 7, 3));
    }

    #[test]
    fn test_panel_sits_above_bottom_toggle_and_below_top_toggle() {
        let area = Rect::new(0, 0, 100, 45);
        let bottom = widget(&[], true);
        let toggle = toggle_area(area, Position::BottomRight);
        let panel = panel_area(area, Position::BottomRight, &bottom);
        assert!(panel.bottom() < toggle.y);
        assert_eq!(panel.right(), toggle.right());
        assert_eq!(panel.width, 45);

        let top = widget(&[("position", "top-left")], true);
        let toggle = toggle_area(area, Position::TopLeft);
        let panel = panel_area(area, Position::TopLeft, &top);
        assert!(panel.y > toggle.bottom());
        assert_eq!(panel.x, toggle.x);
    }

    #[test]
    fn test_empty_primary_renders_theme_error() {
        let mut widget = widget(&[], true);
        let mut props = widget.props().clone();
        props.theme.colors.primary = ColorValue::new("");
        widget.set_props(props).unwrap();

        let text = buffer_text(&draw(&widget, 60, 20));
        assert!(text.contains(THEME_ERROR));
        assert!(!text.contains("Customer Support"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let widget = widget(&[("width", "2000"), ("height", "4000")], true);
        draw(&widget, 10, 5);
    }

    #[test]
    fn test_footer_text() {
        let theme = ThemeCatalog::builtin().resolve_or_default("forest-green");
        assert_eq!(
            footer_text(&theme),
            "Powered by EcoTech • We typically reply in a few minutes"
        );
    }
}
