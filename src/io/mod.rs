//! Datei- und Schnittstellenformate: Projektdatensatz und Translator-Vertrag.

pub mod project;
pub mod translator;

pub use project::{ProjectRecord, RouteRecord};
pub use translator::{parse_response, TranslatorAction, TranslatorRequest, TranslatorResponse};
