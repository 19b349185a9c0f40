use crate::i18n::{label, template, Lang, MessageKey};
use crate::logic::narration::compact;
use crate::models::WeatherSnapshot;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct WeatherScreen<'a> {
    pub lang: Lang,
    pub weather: Option<&'a WeatherSnapshot>,
    pub loading: bool,
}

impl<'a> WeatherScreen<'a> {
    pub fn new(lang: Lang, weather: Option<&'a WeatherSnapshot>) -> Self {
        Self {
            lang,
            weather,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for WeatherScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Current readings
                Constraint::Length(5), // Forecast cards
                Constraint::Min(5),    // Insights
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        let title = Line::from(Span::styled(
            label(self.lang, MessageKey::CurrentWeather),
            Theme::title(),
        ));
        Paragraph::new(title).render(chunks[0], buf);

        match self.weather {
            Some(weather) => {
                self.render_readings(weather, chunks[1], buf);
                self.render_forecast(weather, chunks[2], buf);
                self.render_insights(weather, chunks[3], buf);
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

impl WeatherScreen<'_> {
    fn tile(&self, area: Rect, buf: &mut Buffer, key: MessageKey, value: String) {
        let block = Block::default()
            .title(Span::styled(label(self.lang, key), Theme::dim()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Span::styled(value, Theme::header())).render(inner, buf);
    }

    fn render_readings(&self, weather: &WeatherSnapshot, area: Rect, buf: &mut Buffer) {
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        self.tile(
            tiles[0],
            buf,
            MessageKey::Temperature,
            format!(
                "{}{}",
                compact(weather.temperature_c),
                label(self.lang, MessageKey::UnitCelsius)
            ),
        );
        self.tile(
            tiles[1],
            buf,
            MessageKey::Humidity,
            format!(
                "{}{}",
                compact(weather.humidity_pct),
                label(self.lang, MessageKey::UnitPercent)
            ),
        );
        self.tile(
            tiles[2],
            buf,
            MessageKey::WindSpeed,
            format!(
                "{} {}",
                compact(weather.wind_speed_kmh),
                label(self.lang, MessageKey::UnitKmh)
            ),
        );
        self.tile(
            tiles[3],
            buf,
            MessageKey::WindDirection,
            weather.wind_direction.as_str().to_string(),
        );
    }

    fn render_forecast(&self, weather: &WeatherSnapshot, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::Forecast),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if weather.forecast.is_empty() {
            return;
        }

        let per_day = (100 / weather.forecast.len().max(1)) as u16;
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                weather
                    .forecast
                    .iter()
                    .map(|_| Constraint::Percentage(per_day))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (day, card) in weather.forecast.iter().zip(cards.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    day.date.format("%d %b").to_string(),
                    Theme::header(),
                )),
                Line::from(vec![
                    Span::raw(format!("{} ", day.condition.symbol())),
                    Span::styled(
                        label(self.lang, day.condition.message_key()),
                        Theme::normal(),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "{}{}",
                        compact(day.temp_c),
                        label(self.lang, MessageKey::UnitCelsius)
                    ),
                    Theme::highlight(),
                )),
            ];
            Paragraph::new(lines).render(*card, buf);
        }
    }

    fn render_insights(&self, weather: &WeatherSnapshot, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::WeatherInsights),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                template(
                    self.lang,
                    MessageKey::InsightHumidity,
                    &[("humidity", &compact(weather.humidity_pct))],
                ),
                Theme::normal(),
            )),
            Line::from(Span::styled(
                template(
                    self.lang,
                    MessageKey::InsightTemperature,
                    &[("temp", &compact(weather.temperature_c))],
                ),
                Theme::normal(),
            )),
            Line::from(Span::styled(
                template(
                    self.lang,
                    MessageKey::InsightWind,
                    &[("wind", &compact(weather.wind_speed_kmh))],
                ),
                Theme::normal(),
            )),
        ];

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
