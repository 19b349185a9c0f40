use crate::i18n::{label, Lang, MessageKey};
use crate::logic::bucket;
use crate::models::CropSuitability;
use crate::ui::components::MeterWidget;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct CropsScreen<'a> {
    pub lang: Lang,
    pub crops: &'a [CropSuitability],
    pub selected_index: usize,
    pub loading: bool,
}

impl<'a> CropsScreen<'a> {
    pub fn new(lang: Lang, crops: &'a [CropSuitability]) -> Self {
        Self {
            lang,
            crops,
            selected_index: 0,
            loading: false,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for CropsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Insight strip
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled(
                label(self.lang, MessageKey::CropRecommendations),
                Theme::title(),
            ),
            Span::styled(format!(" ({})", self.crops.len()), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        if self.crops.is_empty() {
            let key = if self.loading {
                MessageKey::FetchingAdvisory
            } else {
                MessageKey::NoLocation
            };
            Paragraph::new(Span::styled(label(self.lang, key), Theme::dim()))
                .render(chunks[1], buf);
        } else {
            let content = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(chunks[1]);

            self.render_list(content[0], buf);
            self.render_details(content[1], buf);

            Paragraph::new(Span::styled(
                label(self.lang, MessageKey::TopCropInsight),
                Theme::dim(),
            ))
            .render(chunks[2], buf);
        }

        self.render_nav(chunks[3], buf);
    }
}

impl CropsScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::TabCrops),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .crops
            .iter()
            .enumerate()
            .map(|(i, crop)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let level = bucket(crop.suitability_score);
                let level_style = Style::default().fg(level.color());

                let line = Line::from(vec![
                    Span::styled(crop.display_name(self.lang), Theme::normal()),
                    Span::raw(" "),
                    Span::styled(
                        format!(
                            "{}{}",
                            crop.suitability_score,
                            label(self.lang, MessageKey::UnitPercent)
                        ),
                        level_style,
                    ),
                    Span::raw(" "),
                    Span::styled(label(self.lang, level.message_key()), level_style),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let Some(crop) = self.crops.get(self.selected_index) else {
            return;
        };

        let block = Block::default()
            .title(Span::styled(crop.display_name(self.lang), Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(inner);

        let level = bucket(crop.suitability_score);
        MeterWidget::new(
            label(self.lang, MessageKey::Suitability),
            crop.suitability_score as f64,
            100.0,
        )
        .unit(label(self.lang, MessageKey::UnitPercent))
        .precision(0)
        .color(level.color())
        .badge(label(self.lang, level.message_key()))
        .render(rows[0], buf);

        let field = |key: MessageKey, value: &str| {
            Line::from(vec![
                Span::styled(format!("{}: ", label(self.lang, key)), Theme::dim()),
                Span::styled(value.to_string(), Theme::normal()),
            ])
        };

        let mut lines = vec![
            field(MessageKey::PlantingWindow, &crop.planting_window),
            field(MessageKey::HarvestWindow, &crop.harvest_window),
            field(MessageKey::Irrigation, &crop.irrigation_advice),
            field(MessageKey::Fertilizer, &crop.fertilizer_advice),
            field(MessageKey::PestControl, &crop.pest_control_advice),
        ];

        // The Hindi table keeps the English crop name as a subtitle.
        if self.lang == Lang::Hi {
            lines.push(Line::from(Span::styled(
                crop.common_name.as_str(),
                Theme::dim(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(rows[1], buf);
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
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
