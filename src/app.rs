use crate::config::Config;
use crate::error::Result;
use crate::i18n::{catalog, label, Lang, MessageKey};
use crate::logic::narration;
use crate::models::{AdvisoryBundle, GeoLocation};
use crate::providers::AdvisoryEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Location,
    Weather,
    Soil,
    Crops,
    Dashboard,
    Language,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Location),
            '2' => Some(Screen::Weather),
            '3' => Some(Screen::Soil),
            '4' => Some(Screen::Crops),
            '5' => Some(Screen::Dashboard),
            'l' | 'L' => Some(Screen::Language),
            _ => None,
        }
    }

    /// Everything past the location tab needs a location selection
    /// first (the data tabs are disabled until then).
    pub fn needs_location(&self) -> bool {
        matches!(
            self,
            Screen::Weather | Screen::Soil | Screen::Crops | Screen::Dashboard
        )
    }
}

/// A location acquisition the key handler queued for the async side of
/// the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationRequest {
    Manual(String),
    Device,
}

pub struct LocationState {
    pub input: String,
    pub editing: bool,
}

impl LocationState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            editing: false,
        }
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
    }

    /// Submission is prevented while the buffer is empty.
    pub fn finish_editing(&mut self) -> Option<String> {
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }
        self.editing = false;
        Some(text.to_string())
    }
}

pub struct CropsState {
    pub selected_index: usize,
}

impl CropsState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct LanguageState {
    pub selected_index: usize,
}

impl LanguageState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self) {
        if self.selected_index < Lang::ALL.len() - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn highlighted(&self) -> Lang {
        Lang::ALL[self.selected_index]
    }
}

/// The single state container. Views read from it and request
/// mutations through the key handlers; they never own state.
pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,
    pub language: Lang,

    // Data
    pub location: Option<GeoLocation>,
    pub advisory: Option<AdvisoryBundle>,
    pub loading: bool,
    pub pending_request: Option<u64>,

    // Screen states
    pub location_state: LocationState,
    pub crops_state: CropsState,
    pub language_state: LanguageState,

    // Work queued for the async side of the loop
    pub pending_location: Option<LocationRequest>,
    pub pending_narration: Option<String>,

    // UI state
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let language = config.language()?;
        Ok(Self {
            screen: Screen::Location,
            should_quit: false,
            config,
            language,
            location: None,
            advisory: None,
            loading: false,
            pending_request: None,
            location_state: LocationState::new(),
            crops_state: CropsState::new(),
            language_state: LanguageState::new(),
            pending_location: None,
            pending_narration: None,
            status_message: None,
        })
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        if screen.needs_location() && self.location.is_none() {
            self.set_status(label(self.language, MessageKey::NoLocation));
            return;
        }
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// A new location replaces the old one wholesale and starts the
    /// loading indicator; the advisory fetch itself is issued by the
    /// event loop.
    pub fn set_location(&mut self, location: GeoLocation) {
        self.location = Some(location);
        self.loading = true;
        self.set_status(label(self.language, MessageKey::FetchingAdvisory));
    }

    /// Apply a completed fetch. Deliveries that don't match the most
    /// recent request are stale and dropped.
    pub fn apply_advisory(&mut self, event: AdvisoryEvent) {
        if self.pending_request != Some(event.request_id) {
            tracing::debug!(request_id = event.request_id, "Dropped stale advisory delivery");
            return;
        }
        self.advisory = Some(event.bundle);
        self.loading = false;
        self.pending_request = None;
        self.clear_status();
        // Mirror the submit flow: land on the weather view once data
        // is in.
        self.screen = Screen::Weather;
    }

    /// Switch language if a table ships for it. Refusals keep the
    /// current language and surface a status message in it.
    pub fn select_language(&mut self, lang: Lang) {
        if catalog().supports(lang) {
            self.language = lang;
            self.set_status(label(lang, MessageKey::LanguageChanged));
        } else {
            self.set_status(label(self.language, MessageKey::LanguageUnavailable));
        }
    }

    /// Sentence for the active view, ready for the synthesizer.
    pub fn narration_for_screen(&self) -> Option<String> {
        match self.screen {
            Screen::Location | Screen::Language => {
                Some(label(self.language, MessageKey::AppTitle).to_string())
            }
            Screen::Weather => self
                .advisory
                .as_ref()
                .map(|a| narration::weather_summary(self.language, &a.weather)),
            Screen::Soil => self
                .advisory
                .as_ref()
                .map(|a| narration::soil_summary(self.language, &a.soil)),
            Screen::Crops => self.advisory.as_ref().and_then(|a| {
                a.crops
                    .get(self.crops_state.selected_index)
                    .map(|crop| narration::crop_summary(self.language, crop))
            }),
            Screen::Dashboard => self
                .advisory
                .as_ref()
                .and_then(|a| narration::dashboard_summary(self.language, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    fn event(request_id: u64) -> AdvisoryEvent {
        AdvisoryEvent {
            request_id,
            bundle: data::sample_bundle(),
        }
    }

    #[test]
    fn data_tabs_are_gated_until_a_location_is_set() {
        let mut app = app();
        app.switch_screen(Screen::Weather);
        assert_eq!(app.screen, Screen::Location);
        assert!(app.status_message.is_some());

        app.set_location(GeoLocation::manual("Delhi", 28.6139, 77.2090));
        app.switch_screen(Screen::Soil);
        assert_eq!(app.screen, Screen::Soil);
    }

    #[test]
    fn advisory_applies_only_for_the_live_request() {
        let mut app = app();
        app.set_location(GeoLocation::manual("Delhi", 28.6139, 77.2090));
        app.pending_request = Some(2);

        // A stale delivery (superseded request) must not land.
        app.apply_advisory(event(1));
        assert!(app.advisory.is_none());
        assert!(app.loading);

        app.apply_advisory(event(2));
        assert!(app.advisory.is_some());
        assert!(!app.loading);
        assert_eq!(app.screen, Screen::Weather);
    }

    #[test]
    fn selecting_an_untranslated_language_is_refused() {
        let mut app = app();
        assert_eq!(app.language, Lang::Hi);
        app.select_language(Lang::Ta);
        assert_eq!(app.language, Lang::Hi);
        assert_eq!(
            app.status_message.as_deref(),
            Some(label(Lang::Hi, MessageKey::LanguageUnavailable))
        );

        app.select_language(Lang::En);
        assert_eq!(app.language, Lang::En);
    }

    #[test]
    fn empty_manual_input_cannot_be_submitted() {
        let mut state = LocationState::new();
        state.start_editing();
        assert_eq!(state.finish_editing(), None);
        assert!(state.editing);

        state.input = "  Jaipur  ".into();
        assert_eq!(state.finish_editing(), Some("Jaipur".to_string()));
        assert!(!state.editing);
    }

    #[test]
    fn narration_follows_the_active_screen() {
        let mut app = app();
        app.set_location(GeoLocation::manual("Delhi", 28.6139, 77.2090));
        assert!(app.narration_for_screen().is_some()); // title on location tab

        app.pending_request = Some(1);
        app.apply_advisory(event(1));
        app.screen = Screen::Crops;
        let text = app.narration_for_screen().unwrap();
        assert!(text.contains("चावल"));
    }
}
