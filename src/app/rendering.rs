// Rendering - host page backdrop, the mounted widget and the status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Preview};
use crate::error::{Result, WidgetError};
use crate::host::RootContent;
use crate::widget::view;

const KEY_HINTS: &str = "^T theme  ^P position  ^R render  ^D mount  ^Q quit";

impl App {
    pub(super) fn draw(&mut self) -> Result<()> {
        let preview = &self.preview;
        self.terminal
            .draw(|frame| preview.render(frame))
            .map_err(|e| WidgetError::Terminal(e.to_string()))?;
        Ok(())
    }
}

impl Preview {
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        let page = self.render_page(frame, chunks[0]);
        match self.host.root().map(|root| root.content()) {
            Some(RootContent::Widget(widget)) => view::render(widget, frame, page),
            Some(RootContent::Error(message)) => view::render_placeholder(frame, page, message),
            Some(RootContent::Empty) => {}
            None => {
                let text = Paragraph::new("<chat-widget> is not on the page (^D to add it)")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray));
                let y = page.y + page.height / 2;
                frame.render_widget(text, Rect::new(page.x, y, page.width, 1.min(page.height)));
            }
        }

        self.render_status(frame, chunks[1]);
    }

    /// The host page frame. Returns the area the widget floats in.
    fn render_page(&self, frame: &mut Frame, area: Rect) -> Rect {
        let title = match &self.options.document {
            Some(path) => format!(" {} ", path.display()),
            None => " (no host document) ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let theme = self
            .host
            .widget()
            .map(|w| w.theme().name.clone())
            .unwrap_or_else(|| "-".to_string());
        let mut state = format!("{:?}", self.host.state()).to_lowercase();
        if self.is_watching() {
            state.push_str(", watching");
        }

        let key_style = Style::default().fg(Color::Black).bg(Color::Gray);
        let line = Line::from(vec![
            Span::styled(format!(" {} ", theme), key_style.add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {} ", self.host.position()), key_style),
            Span::raw(format!(" {} | renders: {} | ", state, self.host.render_count())),
            Span::styled(self.status.clone(), Style::default().fg(Color::Yellow)),
        ]);

        let hints_width = (KEY_HINTS.len() as u16 + 1).min(area.width / 2);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(hints_width)])
            .split(area);

        frame.render_widget(Paragraph::new(line), chunks[0]);
        frame.render_widget(
            Paragraph::new(KEY_HINTS)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
    }
}
