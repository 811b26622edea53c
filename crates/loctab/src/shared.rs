//! Thread-safe handle to a [`Localization`].
//!
//! Each setter holds one lock across the whole change: state update, pool
//! rebuild, active set swap and notification. Concurrent callers are
//! serialized, so every net change produces exactly one resolution pass.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::Localization;
use crate::culture::Culture;
use crate::resolver::ResolvedLocale;
use crate::service::SubscriptionId;
use crate::settings::LocalizationSettings;
use crate::types::LocalizationTable;

/// Cloneable, mutex-guarded [`Localization`].
///
/// Subscribers run while the lock is held and must not call back into the
/// same handle.
#[derive(Debug, Clone)]
pub struct SharedLocalization {
    inner: Arc<Mutex<Localization>>,
}

impl SharedLocalization {
    pub fn new(localization: Localization) -> Self {
        SharedLocalization {
            inner: Arc::new(Mutex::new(localization)),
        }
    }

    /// Provides read access to the localization state.
    pub fn with<T>(&self, f: impl FnOnce(&Localization) -> T) -> T {
        f(&self.lock())
    }

    /// Provides write access to the localization state.
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut Localization) -> T) -> T {
        f(&mut self.lock())
    }

    pub fn current_culture(&self) -> Culture {
        self.with(|l| l.current_culture().clone())
    }

    pub fn set_current_culture(&self, value: Culture) {
        self.with_mut(|l| l.set_current_culture(value));
    }

    pub fn current_language(&self) -> Culture {
        self.with(|l| l.current_language().clone())
    }

    pub fn set_current_language(&self, value: Culture) {
        self.with_mut(|l| l.set_current_language(value));
    }

    pub fn set_current_language_culture(&self, value: Culture) {
        self.with_mut(|l| l.set_current_language_culture(value));
    }

    pub fn apply_settings(&self, settings: LocalizationSettings) {
        self.with_mut(|l| l.apply_settings(settings));
    }

    pub fn refresh(&self) {
        self.with_mut(Localization::refresh);
    }

    /// Snapshot of the active tables.
    pub fn active_tables(&self) -> Vec<Arc<LocalizationTable>> {
        self.with(|l| l.active_tables().to_vec())
    }

    pub fn active_locale(&self) -> Option<ResolvedLocale> {
        self.with(|l| l.active_locale().cloned())
    }

    pub fn subscribe(&self, observer: impl FnMut() + Send + 'static) -> SubscriptionId {
        self.with_mut(|l| l.subscribe(observer))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.with_mut(|l| l.unsubscribe(id))
    }

    fn lock(&self) -> MutexGuard<'_, Localization> {
        self.inner.lock().expect("localization lock poisoned")
    }
}

impl From<Localization> for SharedLocalization {
    fn from(localization: Localization) -> Self {
        SharedLocalization::new(localization)
    }
}
