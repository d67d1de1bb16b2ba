use crate::io::translator::TranslatorRequest;
use std::path::PathBuf;

/// Art einer Statusmeldung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Für den Benutzer sichtbare Rückmeldung der letzten Aktion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Letzte Statusmeldung
    pub status: Option<StatusMessage>,
    /// Eine Translator-Anfrage ist unterwegs
    pub translator_pending: bool,
    /// Vom Host abzuholende Translator-Anfrage
    pub outgoing_translator_request: Option<TranslatorRequest>,
    /// Pfad des zuletzt geschriebenen Exports
    pub last_export_path: Option<PathBuf>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Statusmeldung
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Entnimmt eine wartende Translator-Anfrage (Host sendet sie ab)
    pub fn take_translator_request(&mut self) -> Option<TranslatorRequest> {
        self.outgoing_translator_request.take()
    }
}
