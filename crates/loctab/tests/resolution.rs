//! Tests for pool building and fallback resolution.

use insta::assert_snapshot;
use loctab::{
    Culture, LocaleTag, LocalizationSettings, LocalizationTable, MatchKind, TableLoadError,
    TableManifest, TablePool, TableSlot, fallback_chain, resolve,
};
use std::sync::Arc;

fn culture(name: &str) -> Culture {
    Culture::parse(name).unwrap()
}

fn pool(locales: &[&str]) -> TablePool {
    let tables: Vec<Arc<LocalizationTable>> = locales
        .iter()
        .map(|locale| Arc::new(LocalizationTable::new(*locale)))
        .collect();
    TablePool::build(&tables)
}

fn chain(name: &str) -> String {
    fallback_chain(&culture(name))
        .iter()
        .map(|(tag, kind)| format!("{kind}:{tag}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

// =========================================================================
// Fallback Chain
// =========================================================================

#[test]
fn chain_for_regional_language() {
    assert_snapshot!(chain("en-GB"), @"exact:en-GB -> parent:en -> default:en");
}

#[test]
fn chain_for_script_and_region() {
    assert_snapshot!(chain("zh-Hant-TW"), @"exact:zh-Hant-TW -> parent:zh-Hant -> default:en");
}

#[test]
fn chain_for_bare_language() {
    assert_snapshot!(chain("pl"), @"exact:pl -> default:en");
}

#[test]
fn chain_normalizes_posix_names() {
    assert_snapshot!(chain("pt_BR.UTF-8"), @"exact:pt-BR -> parent:pt -> default:en");
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn exact_beats_parent_and_default() {
    let resolution = resolve(&pool(&["en", "en-GB", "fr"]), &culture("en-GB"));
    let matched = resolution.matched().unwrap();
    assert_eq!(matched.locale, LocaleTag::new("en-GB"));
    assert_eq!(matched.kind, MatchKind::Exact);
    assert_eq!(resolution.tables().len(), 1);
}

#[test]
fn parent_beats_default() {
    let resolution = resolve(&pool(&["en", "zh-Hant"]), &culture("zh-Hant-HK"));
    let matched = resolution.matched().unwrap();
    assert_eq!(matched.locale.as_str(), "zh-Hant");
    assert_eq!(matched.kind, MatchKind::Parent);
}

#[test]
fn grandparent_is_not_considered() {
    let resolution = resolve(&pool(&["zh", "en"]), &culture("zh-Hant-HK"));
    assert_eq!(resolution.matched().unwrap().kind, MatchKind::Default);
}

#[test]
fn sibling_is_not_considered() {
    let resolution = resolve(&pool(&["es-MX"]), &culture("es-AR"));
    assert!(resolution.matched().is_none());
    assert!(resolution.is_empty());
}

#[test]
fn empty_pool_resolves_to_nothing() {
    let resolution = resolve(&TablePool::new(), &culture("en"));
    assert!(resolution.is_empty());
}

#[test]
fn table_locales_are_normalized_before_grouping() {
    let resolution = resolve(&pool(&["en_gb", "EN-GB"]), &culture("en-GB"));
    assert_eq!(resolution.tables().len(), 2);
}

#[test]
fn resolution_is_deterministic() {
    let pool = pool(&["en", "fr", "fr-CA", "de"]);
    let first = resolve(&pool, &culture("fr-CA"));
    let second = resolve(&pool, &culture("fr-CA"));
    assert_eq!(first.matched(), second.matched());
    assert!(
        first
            .tables()
            .iter()
            .zip(second.tables())
            .all(|(a, b)| Arc::ptr_eq(a, b))
    );
}

// =========================================================================
// Unavailable Sources
// =========================================================================

#[test]
fn failed_exact_table_falls_back() {
    let mut settings = LocalizationSettings::new();
    settings.add_table(Arc::new(LocalizationTable::new("en")));
    settings.add_table(TableSlot::failed(TableLoadError::Failed {
        source_name: "ui.fr".to_string(),
        reason: "checksum mismatch".to_string(),
    }));

    let pool = settings.build_pool();
    let resolution = resolve(&pool, &culture("fr"));

    assert_eq!(pool.skipped(), 1);
    assert_eq!(resolution.matched().unwrap().kind, MatchKind::Default);
}

#[test]
fn manifest_round_trips_through_resolution() {
    let manifest = TableManifest::from_json(
        r#"{
            "language": "de-AT",
            "tables": [
                { "locale": "en", "name": "menus" },
                { "locale": "de", "name": "menus", "entries": { "quit": "Beenden" } },
                { "locale": "de-AT", "name": "menus", "status": "pending" },
                { "locale": "de", "name": "dialogs" }
            ]
        }"#,
    )
    .unwrap();
    let language = manifest.language().unwrap().unwrap();
    let pool = manifest.into_settings().build_pool();

    let resolution = resolve(&pool, &language);
    let matched = resolution.matched().unwrap();
    assert_eq!(matched.locale.as_str(), "de");
    assert_eq!(matched.kind, MatchKind::Parent);

    let names: Vec<&str> = resolution
        .tables()
        .iter()
        .map(|t| t.display_name())
        .collect();
    assert_eq!(names, ["menus", "dialogs"]);
    assert_eq!(resolution.tables()[0].len(), 1);
}
