use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Labeled horizontal meter: the reading's share of `max` maps onto
/// the filled bar width. An optional badge renders the qualitative
/// band or level next to the value.
pub struct MeterWidget<'a> {
    title: &'a str,
    value: f64,
    max: f64,
    unit: &'a str,
    color: Color,
    badge: Option<&'a str>,
    precision: usize,
}

impl<'a> MeterWidget<'a> {
    pub fn new(title: &'a str, value: f64, max: f64) -> Self {
        Self {
            title,
            value,
            max,
            unit: "",
            color: Theme::ACCENT,
            badge: None,
            precision: 1,
        }
    }

    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn badge(mut self, badge: &'a str) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Widget for MeterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let value_str = format!("{:.prec$}{}", self.value, self.unit, prec = self.precision);
        let mut spans = vec![Span::styled(value_str, Style::default().fg(self.color))];
        if let Some(badge) = self.badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(badge, Style::default().fg(self.color)));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        // Bar on the second line if space allows
        if inner.height >= 2 {
            let bar_area = Rect {
                x: inner.x,
                y: inner.y + 1,
                width: inner.width,
                height: 1,
            };

            let ratio = if self.max > 0.0 {
                (self.value / self.max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let filled = (bar_area.width as f64 * ratio) as u16;

            for x in bar_area.x..bar_area.x + bar_area.width {
                let ch = if x < bar_area.x + filled { '█' } else { '░' };
                buf[(x, bar_area.y)].set_char(ch).set_fg(self.color);
            }
        }
    }
}
