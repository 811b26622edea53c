//! Integration tests for locale state, resolution passes, and notifications.

use loctab::{
    Culture, Localization, LocalizationSettings, LocalizationTable, MatchKind, TableSlot,
};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

fn culture(name: &str) -> Culture {
    Culture::parse(name).unwrap()
}

fn table(locale: &str, name: &str) -> Arc<LocalizationTable> {
    Arc::new(
        LocalizationTable::builder()
            .locale(locale)
            .name(name)
            .build(),
    )
}

fn settings(tables: &[(&str, &str)]) -> LocalizationSettings {
    let mut settings = LocalizationSettings::new();
    for (locale, name) in tables {
        settings.add_table(table(locale, name));
    }
    settings
}

fn localization(tables: &[(&str, &str)], language: &str) -> Localization {
    Localization::initialize_with(settings(tables), culture(language))
}

/// Subscribe a counter and return it.
fn count_notifications(localization: &mut Localization) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    localization.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    count
}

fn active_names(localization: &Localization) -> Vec<String> {
    localization
        .active_tables()
        .iter()
        .map(|t| t.display_name().to_string())
        .collect()
}

fn active_locale(localization: &Localization) -> Option<&str> {
    localization.active_locale().map(|m| m.locale.as_str())
}

// =========================================================================
// Initialization
// =========================================================================

#[test]
fn initialize_with_seeds_culture_and_language() {
    let localization = localization(&[("en", "ui")], "pl-PL");
    assert_eq!(localization.current_culture(), &culture("pl-PL"));
    assert_eq!(localization.current_language(), &culture("pl-PL"));
    assert_eq!(localization.resolution_count(), 1);
}

#[test]
fn initialize_runs_first_resolution() {
    let localization = localization(&[("en", "ui"), ("pl-PL", "ui")], "pl-PL");
    assert_eq!(active_locale(&localization), Some("pl-PL"));
}

#[test]
fn initialize_uses_host_locale() {
    let localization = Localization::initialize(settings(&[("en", "ui")]));
    assert_eq!(localization.current_culture(), &Culture::system());
    assert_eq!(localization.current_language(), &Culture::system());
    assert_eq!(localization.resolution_count(), 1);
}

// =========================================================================
// Fallback Tiers
// =========================================================================

#[test]
fn exact_bucket_selected() {
    let localization = localization(&[("en", "a"), ("en-GB", "b"), ("fr", "c")], "en-GB");
    let matched = localization.active_locale().unwrap();
    assert_eq!(matched.locale.as_str(), "en-GB");
    assert_eq!(matched.kind, MatchKind::Exact);
    assert_eq!(active_names(&localization), ["b"]);
}

#[test]
fn parent_bucket_selected() {
    let localization = localization(&[("en", "a"), ("fr", "c")], "en-GB");
    let matched = localization.active_locale().unwrap();
    assert_eq!(matched.locale.as_str(), "en");
    assert_eq!(matched.kind, MatchKind::Parent);
}

#[test]
fn sibling_dialect_never_selected() {
    let localization = localization(&[("en", "default"), ("es-MX", "mexico")], "es-AR");
    let matched = localization.active_locale().unwrap();
    assert_eq!(matched.locale.as_str(), "en");
    assert_eq!(matched.kind, MatchKind::Default);
    assert_eq!(active_names(&localization), ["default"]);
}

#[test]
fn no_bucket_leaves_active_set_empty_and_still_notifies() {
    let mut localization = localization(&[("fr", "a"), ("de", "b")], "en");
    let notifications = count_notifications(&mut localization);

    localization.set_current_language(culture("es"));

    assert!(localization.active_tables().is_empty());
    assert_eq!(localization.active_locale(), None);
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}

#[test]
fn bucket_keeps_configuration_order() {
    let localization = localization(
        &[
            ("en", "menus"),
            ("fr", "menus"),
            ("de", "menus"),
            ("en", "dialogs"),
            ("fr", "dialogs"),
            ("en", "credits"),
        ],
        "en-US",
    );
    assert_eq!(active_names(&localization), ["menus", "dialogs", "credits"]);
}

#[test]
fn active_set_never_mixes_locales() {
    let localization = localization(&[("en", "a"), ("en-GB", "b"), ("en", "c")], "en-GB");
    assert!(
        localization
            .active_tables()
            .iter()
            .all(|t| t.locale().as_str() == "en-GB")
    );
}

// =========================================================================
// Redundant Updates
// =========================================================================

#[test]
fn setting_same_language_is_a_no_op() {
    let mut localization = localization(&[("en", "a")], "en-GB");
    let notifications = count_notifications(&mut localization);

    localization.set_current_language(culture("en-GB"));
    localization.set_current_language(culture("en_gb"));

    assert_eq!(localization.resolution_count(), 1);
    assert_eq!(notifications.load(Ordering::SeqCst), 0);
}

#[test]
fn setting_same_culture_is_a_no_op() {
    let mut localization = localization(&[("en", "a")], "de-DE");
    let notifications = count_notifications(&mut localization);

    localization.set_current_culture(culture("de-DE"));

    assert_eq!(localization.resolution_count(), 1);
    assert_eq!(notifications.load(Ordering::SeqCst), 0);
}

#[test]
fn each_language_change_runs_one_pass() {
    let mut localization = localization(&[("en", "a"), ("fr", "b")], "en");
    let notifications = count_notifications(&mut localization);

    localization.set_current_language(culture("fr"));
    localization.set_current_language(culture("fr"));
    localization.set_current_language(culture("en"));

    assert_eq!(notifications.load(Ordering::SeqCst), 2);
    assert_eq!(localization.resolution_count(), 3);
}

// =========================================================================
// Culture vs Language
// =========================================================================

#[test]
fn culture_change_keeps_language() {
    let mut localization = localization(&[("en", "a"), ("fr", "b")], "fr");
    let notifications = count_notifications(&mut localization);

    localization.set_current_culture(culture("de-CH"));

    assert_eq!(localization.current_culture(), &culture("de-CH"));
    assert_eq!(localization.current_language(), &culture("fr"));
    assert_eq!(active_locale(&localization), Some("fr"));
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}

#[test]
fn language_culture_sets_both_with_one_pass() {
    let mut localization = localization(&[("en", "a"), ("fr", "b")], "en");
    let notifications = count_notifications(&mut localization);

    localization.set_current_language_culture(culture("fr-FR"));

    assert_eq!(localization.current_culture(), &culture("fr-FR"));
    assert_eq!(localization.current_language(), &culture("fr-FR"));
    assert_eq!(active_locale(&localization), Some("fr"));
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}

#[test]
fn language_culture_updates_when_only_one_differs() {
    let mut localization = localization(&[("en", "a")], "en");
    localization.set_current_culture(culture("de"));
    let notifications = count_notifications(&mut localization);

    localization.set_current_language_culture(culture("en"));

    assert_eq!(localization.current_culture(), &culture("en"));
    assert_eq!(notifications.load(Ordering::SeqCst), 1);
}

#[test]
fn language_culture_no_op_when_both_equal() {
    let mut localization = localization(&[("en", "a")], "en");
    let notifications = count_notifications(&mut localization);

    localization.set_current_language_culture(culture("en"));

    assert_eq!(notifications.load(Ordering::SeqCst), 0);
}

// =========================================================================
// Refresh and Settings
// =========================================================================

#[test]
fn refresh_is_idempotent_but_notifies_each_time() {
    let mut localization = localization(&[("en", "a"), ("en", "b")], "en");
    let notifications = count_notifications(&mut localization);

    localization.refresh();
    let first = localization.active_tables().to_vec();
    localization.refresh();
    let second = localization.active_tables().to_vec();

    assert_eq!(first.len(), 2);
    assert!(first.iter().zip(&second).all(|(a, b)| Arc::ptr_eq(a, b)));
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[test]
fn apply_settings_rebuilds_pool_from_scratch() {
    let mut localization = localization(&[("en", "old"), ("fr", "old")], "fr");
    assert_eq!(active_locale(&localization), Some("fr"));

    localization.apply_settings(settings(&[("en", "new")]));

    assert!(!localization.pool().contains("fr"));
    assert_eq!(active_locale(&localization), Some("en"));
    assert_eq!(active_names(&localization), ["new"]);
}

#[test]
fn pending_table_picked_up_on_next_pass() {
    let slot = TableSlot::named("ui.fr");
    let mut settings = settings(&[("en", "ui.en")]);
    settings.add_table(slot.clone());

    let mut localization = Localization::initialize_with(settings, culture("fr"));
    assert_eq!(active_locale(&localization), Some("en"));
    assert_eq!(localization.pool().skipped(), 1);

    slot.complete(LocalizationTable::builder().locale("fr").name("ui.fr").build());
    localization.refresh();

    assert_eq!(active_locale(&localization), Some("fr"));
    assert_eq!(active_names(&localization), ["ui.fr"]);
    assert_eq!(localization.pool().skipped(), 0);
}

// =========================================================================
// Subscriptions
// =========================================================================

#[test]
fn unsubscribe_stops_notifications() {
    let mut localization = localization(&[("en", "a")], "en");
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let id = localization.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    localization.refresh();
    assert!(localization.unsubscribe(id));
    assert!(!localization.unsubscribe(id));
    localization.refresh();

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn subscribers_run_in_subscription_order() {
    let mut localization = localization(&[("en", "a")], "en");
    let order = Arc::new(Mutex::new(Vec::new()));
    for index in 0..3 {
        let order = Arc::clone(&order);
        localization.subscribe(move || order.lock().unwrap().push(index));
    }

    localization.refresh();

    assert_eq!(*order.lock().unwrap(), [0, 1, 2]);
}
