use crate::i18n::{label, Lang, MessageKey};
use crate::models::GeoLocation;
use crate::ui::components::InputWidget;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct LocationScreen<'a> {
    pub lang: Lang,
    pub input: &'a str,
    pub editing: bool,
    pub location: Option<&'a GeoLocation>,
    pub loading: bool,
    pub reference_label: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

impl<'a> LocationScreen<'a> {
    pub fn new(lang: Lang, input: &'a str, editing: bool) -> Self {
        Self {
            lang,
            input,
            editing,
            location: None,
            loading: false,
            reference_label: None,
            status_message: None,
        }
    }

    pub fn with_reference(mut self, reference_label: Option<&'a str>) -> Self {
        self.reference_label = reference_label;
        self
    }

    pub fn with_location(mut self, location: Option<&'a GeoLocation>) -> Self {
        self.location = location;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for LocationScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Manual entry
                Constraint::Length(4), // Device GPS
                Constraint::Min(5),    // Current selection
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(label(self.lang, MessageKey::AppTitle), Theme::title()),
            Span::styled(
                format!(" - {}", label(self.lang, MessageKey::TabLocation)),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_manual_entry(chunks[1], buf);
        self.render_gps(chunks[2], buf);
        self.render_current(chunks[3], buf);
        self.render_status_message(chunks[4], buf);
        self.render_nav(chunks[5], buf);
    }
}

impl LocationScreen<'_> {
    fn render_manual_entry(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        InputWidget::new(label(self.lang, MessageKey::EnterLocation), self.input)
            .placeholder(label(self.lang, MessageKey::LocationPlaceholder))
            .focused(self.editing)
            .render(rows[0], buf);

        let hint = Line::from(vec![
            Span::styled("[e]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::ManualEntry)),
                Theme::nav_label(),
            ),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled(label(self.lang, MessageKey::Submit), Theme::nav_label()),
        ]);
        Paragraph::new(hint).render(rows[1], buf);
    }

    fn render_gps(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::UseGps),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(vec![
            Span::styled("[g] ", Theme::nav_key()),
            Span::styled(label(self.lang, MessageKey::GpsHint), Theme::normal()),
        ])];
        if let Some(reference) = self.reference_label {
            lines.push(Line::from(Span::styled(
                format!("{} {}", reference, crate::models::FALLBACK_MARKER),
                Theme::dim(),
            )));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_current(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::LocationLabel),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        match self.location {
            Some(location) => {
                let address_style = if location.is_fallback() {
                    Theme::warning()
                } else {
                    Theme::normal()
                };
                let mut lines = vec![
                    Line::from(Span::styled(location.address.as_str(), address_style)),
                    Line::from(Span::styled(location.coordinate_label(), Theme::dim())),
                    Line::from(Span::styled(location.source.as_str(), Theme::dim())),
                ];
                if self.loading {
                    lines.push(Line::from(Span::styled(
                        label(self.lang, MessageKey::FetchingAdvisory),
                        Theme::warning(),
                    )));
                }
                Paragraph::new(lines).render(inner, buf);
            }
            None => {
                let text = if self.loading {
                    label(self.lang, MessageKey::GettingLocation)
                } else {
                    label(self.lang, MessageKey::NoLocation)
                };
                Paragraph::new(Span::styled(text, Theme::dim())).render(inner, buf);
            }
        }
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let para = Paragraph::new(Span::styled(msg, Theme::success()));
            para.render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[2]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::TabWeather)),
                Theme::nav_label(),
            ),
            Span::styled("[3]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::TabSoil)),
                Theme::nav_label(),
            ),
            Span::styled("[4]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::TabCrops)),
                Theme::nav_label(),
            ),
            Span::styled("[5]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::TabDashboard)),
                Theme::nav_label(),
            ),
            Span::styled("[l]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::TabLanguage)),
                Theme::nav_label(),
            ),
            Span::styled("[v]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::Listen)),
                Theme::nav_label(),
            ),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);

        Paragraph::new(nav).render(area, buf);
    }
}
