//! Integration tests for the page driver
//!
//! A counting page source stands in for the PDF decoder so the tests can
//! see exactly when each page's resources are given back.

mod common;

use fabula_import::driver::{
    Driver, DriverConfig, DriverError, JsonSink, LoadedPage, PageCategory, PageEntry, PageLease,
    PageRecords, PageReport, PageSource, PageTable,
};
use fabula_import::combinator::Token;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory pages whose leases count their releases
struct CountingSource {
    pages: BTreeMap<u32, Vec<Token>>,
    loads: AtomicUsize,
    released: Arc<AtomicUsize>,
}

impl CountingSource {
    fn new(pages: impl IntoIterator<Item = (u32, Vec<Token>)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            loads: AtomicUsize::new(0),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl PageSource for CountingSource {
    fn load(&self, page: u32) -> Result<LoadedPage, DriverError> {
        let tokens = self.pages.get(&page).cloned().ok_or(DriverError::PageSource {
            page,
            message: "missing".to_string(),
        })?;
        self.loads.fetch_add(1, Ordering::SeqCst);
        let released = Arc::clone(&self.released);
        Ok(LoadedPage {
            tokens,
            lease: PageLease::new(page, move || {
                released.fetch_add(1, Ordering::SeqCst);
            }),
        })
    }
}

fn equipment_table() -> PageTable {
    PageTable::new()
        .with_page(108, PageEntry::new(PageCategory::Consumables, &["Equipment", "Consumables"]))
        .with_page(136, PageEntry::new(PageCategory::Armor, &["Equipment", "Armors", "Basic"]))
        .with_page(137, PageEntry::new(PageCategory::Shields, &["Equipment", "Shields", "Basic"]))
        .with_page(342, PageEntry::new(PageCategory::Bestiary, &["Bestiary"]))
}

fn driver() -> Driver {
    Driver::new(DriverConfig::new(), equipment_table())
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_success_carries_records_and_provenance() {
    let source = CountingSource::new([(108, common::consumables_page())]);
    let report = driver().run_page(&source, 108);

    let Ok(PageReport::Success { page, records, save, .. }) = &report else {
        panic!("expected success, got {:?}", report);
    };
    assert_eq!(*page, 108);
    assert_eq!(records.names(), ["Elixir", "Remedy", "Magic Tent"]);
    assert_eq!(save.provenance.source, "FUCR106");
    assert_eq!(save.provenance.folders, ["Equipment", "Consumables"]);
}

#[test]
fn test_failure_collects_errors() {
    let mut tokens = common::armor_page();
    tokens.truncate(tokens.len() - 2);
    let source = CountingSource::new([(136, tokens)]);

    let report = driver().run_page(&source, 136);
    match report {
        Ok(PageReport::Failure { page, errors }) => {
            assert_eq!(page, 136);
            assert!(!errors.is_empty());
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_wrong_grammar_for_page_fails() {
    // shield tokens filed under an armor page
    let source = CountingSource::new([(136, common::shield_page())]);
    let report = driver().run_page(&source, 136);
    assert!(matches!(report, Ok(PageReport::Failure { .. })));
}

#[test]
fn test_bestiary_page_through_driver() {
    let source = CountingSource::new([(342, common::bestiary_page(&["Goblin", "Orc"]))]);
    let report = driver().run_page(&source, 342);
    let names = report.as_ref().ok().and_then(PageReport::records).map(PageRecords::names);
    assert_eq!(names, Some(vec!["Goblin", "Orc"]));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_page_loads_nothing() {
    let source = CountingSource::new([(999, common::armor_page())]);
    let report = driver().run_page(&source, 999);
    assert!(matches!(report, Err(DriverError::UnknownPage { page: 999 })));
    assert_eq!(source.loads(), 0);
}

#[test]
fn test_missing_page_is_a_source_error() {
    let source = CountingSource::new(Vec::new());
    let report = driver().run_page(&source, 108);
    assert!(matches!(report, Err(DriverError::PageSource { page: 108, .. })));
}

#[test]
fn test_oversized_page_is_refused_and_released() {
    let source = CountingSource::new([(136, common::armor_page())]);
    let driver = Driver::new(DriverConfig::new().with_max_page_tokens(5), equipment_table());
    let report = driver.run_page(&source, 136);
    match report {
        Err(DriverError::PageTooLarge { page, max_tokens, .. }) => {
            assert_eq!(page, 136);
            assert_eq!(max_tokens, 5);
        }
        other => panic!("expected page too large, got {:?}", other),
    }
    assert_eq!(source.released(), 1);
}

// ============================================================================
// Resource lifetime
// ============================================================================

#[test]
fn test_success_holds_lease_until_report_drops() {
    let source = CountingSource::new([(137, common::shield_page())]);
    let report = driver().run_page(&source, 137);
    assert!(report.as_ref().is_ok_and(PageReport::is_success));
    assert_eq!(source.released(), 0);

    drop(report);
    assert_eq!(source.released(), 1);
}

#[test]
fn test_failure_releases_before_returning() {
    let source = CountingSource::new([(137, vec![common::art()])]);
    let report = driver().run_page(&source, 137);
    assert!(matches!(report, Ok(PageReport::Failure { .. })));
    assert_eq!(source.released(), 1);

    drop(report);
    assert_eq!(source.released(), 1);
}

// ============================================================================
// Batches
// ============================================================================

#[test]
fn test_run_pages_keeps_order() {
    let source = CountingSource::new([
        (108, common::consumables_page()),
        (136, common::armor_page()),
        (137, common::shield_page()),
    ]);
    let pages = [137, 999, 108, 136];
    let reports = driver().run_pages(&source, &pages);

    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].as_ref().map(PageReport::page).ok(), Some(137));
    assert!(matches!(reports[1], Err(DriverError::UnknownPage { page: 999 })));
    assert_eq!(reports[2].as_ref().map(PageReport::page).ok(), Some(108));
    assert_eq!(reports[3].as_ref().map(PageReport::page).ok(), Some(136));
    assert!(reports.iter().flatten().all(PageReport::is_success));

    drop(reports);
    assert_eq!(source.released(), 3);
}

#[test]
fn test_run_all_covers_the_table() {
    let source = CountingSource::new([(108, common::consumables_page())]);
    let reports = driver().run_all(&source);
    assert_eq!(reports.len(), 4);
    let succeeded = reports.iter().flatten().filter(|r| r.is_success()).count();
    assert_eq!(succeeded, 1);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_json_sink_writes_records() {
    let source = CountingSource::new([(136, common::armor_page())]);
    let report = driver().run_page(&source, 136);
    let Ok(report) = report else {
        panic!("driver error");
    };

    let asset_dir = std::env::temp_dir().join(format!("fabula-import-test-{}", std::process::id()));
    let written = report.persist(&JsonSink, &asset_dir);
    let path = match written {
        Ok(Some(path)) => path,
        other => panic!("expected a written file, got {:?}", other),
    };
    assert!(path.ends_with("Equipment/Armors/Basic/FUCR134.json"));

    let body = std::fs::read_to_string(&path).unwrap_or_default();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
    assert_eq!(json["source"], "FUCR134");
    assert_eq!(json["page"], 136);
    assert_eq!(json["records"]["kind"], "armor");
    assert_eq!(json["records"]["items"][1]["name"], "Bronze Plate");
    assert_eq!(json["records"]["items"][1]["def"], 11);

    let _ = std::fs::remove_dir_all(&asset_dir);
}

#[test]
fn test_failed_page_has_nothing_to_persist() {
    let source = CountingSource::new([(136, vec![common::art()])]);
    let report = driver().run_page(&source, 136);
    let persisted = report.map(|r| r.persist(&JsonSink, std::path::Path::new("/nonexistent")));
    assert!(matches!(persisted, Ok(Ok(None))));
}
