use crate::config::SpeechConfig;
use std::process::Stdio;
use tokio::process::Command;

/// Synthesizer commands probed in order when none is configured.
const CANDIDATES: &[&str] = &["espeak-ng", "espeak", "say"];

/// Best-effort wrapper around an on-device speech synthesizer.
/// Availability is feature-detected once at startup; when nothing is
/// found, every request is silently skipped.
pub struct SpeechService {
    command: Option<String>,
}

impl SpeechService {
    pub fn new(config: &SpeechConfig) -> Self {
        if !config.enabled {
            tracing::info!("Spoken summaries disabled in config");
            return Self { command: None };
        }

        let command = match &config.command {
            Some(cmd) if Self::probe(cmd) => Some(cmd.clone()),
            Some(cmd) => {
                tracing::warn!("Configured speech command '{}' not found", cmd);
                None
            }
            None => CANDIDATES
                .iter()
                .find(|cmd| Self::probe(cmd))
                .map(|cmd| (*cmd).to_string()),
        };

        match &command {
            Some(cmd) => tracing::info!("Speech synthesizer: {}", cmd),
            None => tracing::warn!("No speech synthesizer found - spoken summaries will be skipped"),
        }

        Self { command }
    }

    fn probe(program: &str) -> bool {
        std::process::Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    pub fn available(&self) -> bool {
        self.command.is_some()
    }

    /// Fire-and-forget playback of `text` under a BCP-47 language tag.
    /// Overlapping requests queue or interrupt per the synthesizer's
    /// own behavior; nothing here sequences them.
    pub fn speak(&self, text: &str, language_tag: &str) {
        let Some(program) = &self.command else {
            tracing::debug!("Speech unavailable - narration skipped");
            return;
        };

        let mut cmd = Command::new(program);
        if program.contains("espeak") {
            // espeak voices go by primary subtag ("hi", "en").
            let voice = language_tag.split('-').next().unwrap_or(language_tag);
            cmd.arg("-v").arg(voice);
        }
        cmd.arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match cmd.spawn() {
            Ok(_) => tracing::debug!(tag = language_tag, "Narration dispatched"),
            Err(e) => tracing::debug!("Speech synthesis failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_rejects_missing_binaries() {
        assert!(!SpeechService::probe("krishi-no-such-synthesizer"));
    }

    #[test]
    fn disabled_config_means_unavailable() {
        let service = SpeechService::new(&SpeechConfig {
            enabled: false,
            command: None,
        });
        assert!(!service.available());
        // Skipping must be silent, not a panic.
        service.speak("hello", "en-US");
    }

    #[test]
    fn misconfigured_command_degrades_to_unavailable() {
        let service = SpeechService::new(&SpeechConfig {
            enabled: true,
            command: Some("krishi-no-such-synthesizer".into()),
        });
        assert!(!service.available());
    }
}
