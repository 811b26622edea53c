//! Locale state: current culture and language, and the active table set.
//!
//! [`Localization`] owns the configured table sources, the latest pool
//! snapshot, and the tables currently in use. Every state change that
//! matters runs one resolution pass, which swaps the active set and then
//! notifies subscribers synchronously.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use tracing::{debug, info};

use crate::culture::Culture;
use crate::pool::TablePool;
use crate::resolver::{ResolvedLocale, resolve};
use crate::settings::LocalizationSettings;
use crate::types::LocalizationTable;

/// Handle returned by [`Localization::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut() + Send>;

/// Current culture, current language, and the tables selected for that
/// language.
///
/// Culture (formatting conventions) and language (which translations are
/// active) are independent. Setting either to a new value runs one
/// resolution pass; setting either to its current value does nothing.
///
/// # Example
///
/// ```
/// use loctab::{Culture, Localization, LocalizationSettings, LocalizationTable};
/// use std::sync::Arc;
///
/// let mut settings = LocalizationSettings::new();
/// settings.add_table(Arc::new(LocalizationTable::new("en")));
/// settings.add_table(Arc::new(LocalizationTable::new("fr")));
///
/// let mut localization =
///     Localization::initialize_with(settings, Culture::parse("fr-CA").unwrap());
/// assert_eq!(localization.active_locale().unwrap().locale.as_str(), "fr");
///
/// localization.set_current_language(Culture::parse("de").unwrap());
/// assert_eq!(localization.active_locale().unwrap().locale.as_str(), "en");
/// ```
pub struct Localization {
    culture: Culture,
    language: Culture,
    settings: LocalizationSettings,
    pool: TablePool,
    active: Vec<Arc<LocalizationTable>>,
    active_locale: Option<ResolvedLocale>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    passes: u64,
}

impl Localization {
    /// Seed culture and language from the host locale and run the first
    /// resolution pass.
    pub fn initialize(settings: LocalizationSettings) -> Self {
        Localization::initialize_with(settings, Culture::system())
    }

    /// Seed culture and language from `culture` and run the first
    /// resolution pass.
    pub fn initialize_with(settings: LocalizationSettings, culture: Culture) -> Self {
        info!("Initializing localization for {}", culture);
        let mut localization = Localization {
            language: culture.clone(),
            culture,
            settings,
            pool: TablePool::new(),
            active: Vec::new(),
            active_locale: None,
            observers: Vec::new(),
            next_subscription: 0,
            passes: 0,
        };
        localization.on_localization_changed();
        localization
    }

    // =========================================================================
    // Culture and Language
    // =========================================================================

    /// The culture used for formatting conventions.
    pub fn current_culture(&self) -> &Culture {
        &self.culture
    }

    /// Change the formatting culture. No-op if `value` is already current.
    pub fn set_current_culture(&mut self, value: Culture) {
        if self.culture == value {
            return;
        }

        info!("Changing current culture to: {}", value);
        self.culture = value;
        self.on_localization_changed();
    }

    /// The language used to select translations.
    pub fn current_language(&self) -> &Culture {
        &self.language
    }

    /// Change the translation language. No-op if `value` is already current.
    pub fn set_current_language(&mut self, value: Culture) {
        if self.language == value {
            return;
        }

        info!("Changing current language to: {}", value);
        self.language = value;
        self.on_localization_changed();
    }

    /// Set culture and language to the same value with a single resolution
    /// pass. No-op only if both already equal `value`.
    pub fn set_current_language_culture(&mut self, value: Culture) {
        if self.culture == value && self.language == value {
            return;
        }

        info!("Changing current language and culture to: {}", value);
        self.language = value.clone();
        self.culture = value;
        self.on_localization_changed();
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// The configured table sources.
    pub fn settings(&self) -> &LocalizationSettings {
        &self.settings
    }

    /// Replace the configured table sources and run a resolution pass.
    pub fn apply_settings(&mut self, settings: LocalizationSettings) {
        self.settings = settings;
        self.on_localization_changed();
    }

    /// Run a resolution pass without changing any state.
    ///
    /// Useful after a pending table finishes loading. Subscribers are
    /// notified even if the active set comes out the same.
    pub fn refresh(&mut self) {
        self.on_localization_changed();
    }

    // =========================================================================
    // Active Set
    // =========================================================================

    /// Tables currently in use, in configuration order.
    ///
    /// All tables share one locale. Empty when nothing matched. The slice is a
    /// snapshot valid until the next change notification.
    pub fn active_tables(&self) -> &[Arc<LocalizationTable>] {
        &self.active
    }

    /// The locale the active tables were selected for.
    pub fn active_locale(&self) -> Option<&ResolvedLocale> {
        self.active_locale.as_ref()
    }

    /// The pool built by the most recent resolution pass.
    pub fn pool(&self) -> &TablePool {
        &self.pool
    }

    /// Number of resolution passes run so far, including the initial one.
    pub fn resolution_count(&self) -> u64 {
        self.passes
    }

    // =========================================================================
    // Change Notification
    // =========================================================================

    /// Register a callback fired once after every resolution pass.
    ///
    /// Callbacks run synchronously, on the thread that triggered the pass,
    /// in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut() + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Rebuild the pool, re-resolve the active set, and notify.
    fn on_localization_changed(&mut self) {
        self.pool = self.settings.build_pool();

        let (matched, tables) = resolve(&self.pool, &self.language).into_parts();
        match &matched {
            Some(resolved) => info!(
                "Using localization for {} ({} match, {} tables)",
                resolved.locale,
                resolved.kind,
                tables.len()
            ),
            None => debug!("No localization tables available for {}", self.language),
        }
        self.active = tables;
        self.active_locale = matched;
        self.passes += 1;

        for (_, observer) in &mut self.observers {
            observer();
        }
    }
}

impl Debug for Localization {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Localization")
            .field("culture", &self.culture)
            .field("language", &self.language)
            .field("settings", &self.settings)
            .field("active_locale", &self.active_locale)
            .field("active", &self.active.len())
            .field("observers", &self.observers.len())
            .field("passes", &self.passes)
            .finish()
    }
}
