//! Localization
//!
//! A small phrase table keyed by dotted string keys, plus typed helpers for
//! the phrases the view models need. Unknown keys echo the key back so a
//! missing phrase is visible in the UI instead of panicking.

use serde::{Deserialize, Serialize};
use std::fmt;
use tally_core::NotificationPreference;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocaleTag {
    /// English (US)
    #[default]
    EnUs,
    /// Spanish (Spain)
    EsEs,
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "en-US"),
            Self::EsEs => write!(f, "es-ES"),
        }
    }
}

/// Phrase lookup for a single locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locale {
    tag: LocaleTag,
}

impl Locale {
    /// Create a locale for the given tag.
    pub fn new(tag: LocaleTag) -> Self {
        Self { tag }
    }

    /// The locale tag.
    pub fn tag(&self) -> LocaleTag {
        self.tag
    }

    /// Look up a phrase by key.
    ///
    /// Falls back to English for keys missing from a locale, and to the key
    /// itself when no locale has it.
    pub fn translate(&self, key: &str) -> String {
        lookup(self.tag, key)
            .or_else(|| lookup(LocaleTag::EnUs, key))
            .map_or_else(|| key.to_string(), str::to_string)
    }

    /// Display label for a notification preference option.
    pub fn preference_label(&self, preference: NotificationPreference) -> String {
        self.translate(&format!(
            "notification_settings.preference.{}",
            preference.as_str()
        ))
    }

    /// Header title for the notification settings screen.
    pub fn notification_settings_title(&self) -> String {
        self.translate("notification_settings.header")
    }
}

fn lookup(tag: LocaleTag, key: &str) -> Option<&'static str> {
    match tag {
        LocaleTag::EnUs => match key {
            "notification_settings.header" => Some("Notify me about new messages"),
            "notification_settings.preference.always" => Some("Immediately"),
            "notification_settings.preference.daily" => Some("Daily"),
            "notification_settings.preference.mute" => Some("Mute"),
            "notification_settings.preference.hidden" => Some("Hidden"),
            "report.not_found" => Some("This report could not be found"),
            _ => None,
        },
        LocaleTag::EsEs => match key {
            "notification_settings.header" => Some("Avisarme sobre nuevos mensajes"),
            "notification_settings.preference.always" => Some("Inmediatamente"),
            "notification_settings.preference.daily" => Some("Cada día"),
            "notification_settings.preference.mute" => Some("Silenciar"),
            "notification_settings.preference.hidden" => Some("Oculto"),
            "report.not_found" => Some("No se pudo encontrar este informe"),
            _ => None,
        },
    }
}
