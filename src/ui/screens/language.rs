use crate::i18n::{catalog, label, Lang, MessageKey};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct LanguageScreen<'a> {
    pub lang: Lang,
    pub selected_index: usize,
    pub status_message: Option<&'a str>,
}

impl<'a> LanguageScreen<'a> {
    pub fn new(lang: Lang, selected_index: usize) -> Self {
        Self {
            lang,
            selected_index,
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for LanguageScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Title
                Constraint::Min(10),    // Selector list
                Constraint::Length(1),  // Status message
                Constraint::Length(1),  // Nav bar
            ])
            .split(area);

        let title = Line::from(Span::styled(
            label(self.lang, MessageKey::ChooseLanguage),
            Theme::title(),
        ));
        Paragraph::new(title).render(chunks[0], buf);

        self.render_list(chunks[1], buf);
        self.render_status_message(chunks[2], buf);
        self.render_nav(chunks[3], buf);
    }
}

impl LanguageScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                label(self.lang, MessageKey::TabLanguage),
                Theme::header(),
            ))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = Lang::ALL
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let row_style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let translated = catalog().supports(*entry);
                let name_style = if translated {
                    Theme::normal()
                } else {
                    Theme::dim()
                };

                let mut spans = vec![
                    Span::styled(
                        if *entry == self.lang { "● " } else { "  " },
                        Theme::highlight(),
                    ),
                    Span::styled(entry.native_name(), name_style),
                    Span::styled(format!(" ({})", entry.code()), Theme::dim()),
                ];
                if !translated {
                    spans.push(Span::styled(
                        format!(" - {}", label(self.lang, MessageKey::LanguageUnavailable)),
                        Theme::dim(),
                    ));
                }

                ListItem::new(Line::from(spans)).style(row_style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            Paragraph::new(Span::styled(msg, Theme::warning())).render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled(
                format!("{} ", label(self.lang, MessageKey::Submit)),
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
