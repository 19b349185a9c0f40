use crate::i18n::{label, template, Lang, MessageKey};
use crate::logic::classify;
use crate::models::{GeoLocation, SoilBand, SoilParameter, SoilSample};
use crate::ui::components::MeterWidget;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct SoilScreen<'a> {
    pub lang: Lang,
    pub soil: Option<&'a SoilSample>,
    pub location: Option<&'a GeoLocation>,
    pub loading: bool,
}

impl<'a> SoilScreen<'a> {
    pub fn new(lang: Lang, soil: Option<&'a SoilSample>) -> Self {
        Self {
            lang,
            soil,
            location: None,
            loading: false,
        }
    }

    pub fn with_location(mut self, location: Option<&'a GeoLocation>) -> Self {
        self.location = location;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for SoilScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Sample header
                Constraint::Length(4), // Parameter meters
                Constraint::Min(4),    // Amendment advice
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        let title = Line::from(Span::styled(
            label(self.lang, MessageKey::SoilAnalysis),
            Theme::title(),
        ));
        Paragraph::new(title).render(chunks[0], buf);

        match self.soil {
            Some(soil) => {
                self.render_header(soil, chunks[1], buf);
                self.render_meters(soil, chunks[2], buf);
                self.render_advice(soil, chunks[3], buf);
            }
            None => {
                let key = if self.loading {
                    MessageKey::FetchingAdvisory
                } else {
                    MessageKey::NoLocation
                };
                Paragraph::new(Span::styled(label(self.lang, key), Theme::dim()))
                    .render(chunks[1], buf);
            }
        }

        self.render_nav(chunks[4], buf);
    }
}

impl SoilScreen<'_> {
    fn render_header(&self, soil: &SoilSample, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::SoilTypeLabel),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            label(self.lang, soil.soil_type.message_key()),
            Theme::highlight(),
        ))];

        if let Some(location) = self.location {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", label(self.lang, MessageKey::LocationLabel)),
                    Theme::dim(),
                ),
                Span::styled(location.address.as_str(), Theme::normal()),
                Span::styled(format!(" ({})", location.coordinate_label()), Theme::dim()),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_meters(&self, soil: &SoilSample, area: Rect, buf: &mut Buffer) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ])
            .split(area);

        for (parameter, cell) in SoilParameter::ALL.into_iter().zip(cells.iter()) {
            let value = soil.value(parameter);
            let band = classify(parameter, value);
            let unit = parameter
                .unit_key()
                .map(|key| label(self.lang, key))
                .unwrap_or("");

            MeterWidget::new(
                label(self.lang, parameter.message_key()),
                value,
                parameter.display_max(),
            )
            .unit(unit)
            .color(band.color())
            .badge(label(self.lang, band.message_key()))
            .render(*cell, buf);
        }
    }

    fn render_advice(&self, soil: &SoilSample, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::SoilAdvice),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(Span::styled(
            template(
                self.lang,
                MessageKey::HintSoilType,
                &[("soil", label(self.lang, soil.soil_type.message_key()))],
            ),
            Theme::normal(),
        ))];

        // Amendment hints only when the band leaves room to improve.
        if classify(SoilParameter::Ph, soil.ph) != SoilBand::Excellent {
            lines.push(Line::from(Span::styled(
                label(self.lang, MessageKey::HintPh),
                Theme::warning(),
            )));
        }
        if classify(SoilParameter::Organic, soil.organic_pct) != SoilBand::Excellent {
            lines.push(Line::from(Span::styled(
                label(self.lang, MessageKey::HintOrganic),
                Theme::warning(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[1-5]", Theme::nav_key()),
            Span::styled("Tabs ", Theme::nav_label()),
            Span::styled("[v]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::Listen)),
                Theme::nav_label(),
            ),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled(
                label(self.lang, MessageKey::TabLocation),
                Theme::nav_label(),
            ),
        ]);
        Paragraph::new(nav).render(area, buf);
    }
}
