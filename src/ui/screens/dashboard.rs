use crate::i18n::{label, Lang, MessageKey};
use crate::logic::narration::compact;
use crate::logic::{bucket, classify};
use crate::models::{AdvisoryBundle, GeoLocation, SoilParameter};
use crate::ui::components::MeterWidget;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct DashboardScreen<'a> {
    pub lang: Lang,
    pub bundle: Option<&'a AdvisoryBundle>,
    pub location: Option<&'a GeoLocation>,
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(lang: Lang, bundle: Option<&'a AdvisoryBundle>) -> Self {
        Self {
            lang,
            bundle,
            location: None,
            status_message: None,
        }
    }

    pub fn with_location(mut self, location: Option<&'a GeoLocation>) -> Self {
        self.location = location;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Key metric tiles
                Constraint::Min(9),    // Charts
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);

        match self.bundle {
            Some(bundle) => {
                self.render_tiles(bundle, chunks[1], buf);
                self.render_charts(bundle, chunks[2], buf);
            }
            None => {
                Paragraph::new(Span::styled(
                    label(self.lang, MessageKey::NoLocation),
                    Theme::dim(),
                ))
                .render(chunks[1], buf);
            }
        }

        self.render_status_message(chunks[3], buf);
        self.render_nav(chunks[4], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            label(self.lang, MessageKey::TabDashboard),
            Theme::title(),
        )];
        if let Some(location) = self.location {
            spans.push(Span::styled(
                format!(" - {}", location.address),
                Theme::dim(),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn tile(&self, area: Rect, buf: &mut Buffer, key: MessageKey, value: String, sub: String) {
        let block = Block::default()
            .title(Span::styled(label(self.lang, key), Theme::dim()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(value, Theme::header())),
            Line::from(Span::styled(sub, Theme::dim())),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_tiles(&self, bundle: &AdvisoryBundle, area: Rect, buf: &mut Buffer) {
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        if let Some(top) = bundle.top_crop() {
            self.tile(
                tiles[0],
                buf,
                MessageKey::TopCrop,
                top.display_name(self.lang).to_string(),
                format!(
                    "{}% {}",
                    top.suitability_score,
                    label(self.lang, MessageKey::SuitabilityScore)
                ),
            );
        }

        self.tile(
            tiles[1],
            buf,
            MessageKey::Temperature,
            format!(
                "{}{}",
                compact(bundle.weather.temperature_c),
                label(self.lang, MessageKey::UnitCelsius)
            ),
            format!(
                "{}: {}{}",
                label(self.lang, MessageKey::Humidity),
                compact(bundle.weather.humidity_pct),
                label(self.lang, MessageKey::UnitPercent)
            ),
        );

        self.tile(
            tiles[2],
            buf,
            MessageKey::PhLevel,
            compact(bundle.soil.ph),
            label(self.lang, bundle.soil.soil_type.message_key()).to_string(),
        );
    }

    fn render_charts(&self, bundle: &AdvisoryBundle, area: Rect, buf: &mut Buffer) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.render_crop_chart(bundle, halves[0], buf);
        self.render_nutrient_chart(bundle, halves[1], buf);
    }

    fn render_crop_chart(&self, bundle: &AdvisoryBundle, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::CropSuitabilityChart),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                bundle
                    .crops
                    .iter()
                    .map(|_| Constraint::Length(3))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (crop, row) in bundle.crops.iter().zip(rows.iter()) {
            let level = bucket(crop.suitability_score);
            MeterWidget::new(
                crop.display_name(self.lang),
                crop.suitability_score as f64,
                100.0,
            )
            .unit(label(self.lang, MessageKey::UnitPercent))
            .precision(0)
            .color(level.color())
            .render(*row, buf);
        }
    }

    fn render_nutrient_chart(&self, bundle: &AdvisoryBundle, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::SoilNutrients),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let nutrients = [
            SoilParameter::Nitrogen,
            SoilParameter::Phosphorus,
            SoilParameter::Potassium,
        ];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(inner);

        for (parameter, row) in nutrients.into_iter().zip(rows.iter()) {
            let value = bundle.soil.value(parameter);
            let band = classify(parameter, value);
            MeterWidget::new(
                label(self.lang, parameter.message_key()),
                value,
                parameter.display_max(),
            )
            .unit(label(self.lang, MessageKey::UnitPpm))
            .precision(0)
            .color(band.color())
            .badge(label(self.lang, band.message_key()))
            .render(*row, buf);
        }
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            Paragraph::new(Span::styled(msg, Theme::success())).render(area, buf);
        }
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
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(area, buf);
    }
}
