//! Integration tests for persistence
//!
//! Round-trips a session through the JSON file store, covering restart,
//! corrupt-record recovery, and the ledger-as-source-of-truth reload rule.

mod common;

use common::{ana_vip_form, luis_general_form};
use rust_decimal_macros::dec;
use taquilla::{Category, JsonFileStore, PriceList, Session, Summary};

fn file_store(dir: &tempfile::TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("taquilla.json"))
}

#[test]
fn test_round_trip_across_sessions() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = Session::open(PriceList::default(), file_store(&dir)).unwrap();
    let ana = session.record_sale(&ana_vip_form()).unwrap();
    let luis = session.record_sale(&luis_general_form()).unwrap();
    drop(session);

    let reopened = Session::open(PriceList::default(), file_store(&dir)).unwrap();
    assert_eq!(reopened.sales(), &[ana, luis][..]);
    assert_eq!(reopened.summary().grand_total().count, 5);
    assert_eq!(reopened.summary().grand_total().revenue, dec!(145.00));
    assert_eq!(
        reopened.summary(),
        &Summary::recompute_from(reopened.sales())
    );
}

#[test]
fn test_removal_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = Session::open(PriceList::default(), file_store(&dir)).unwrap();
    let ana = session.record_sale(&ana_vip_form()).unwrap();
    session.record_sale(&luis_general_form()).unwrap();
    session.remove_sale(ana.id).unwrap();
    drop(session);

    let reopened = Session::open(PriceList::default(), file_store(&dir)).unwrap();
    assert_eq!(reopened.sales().len(), 1);
    assert_eq!(reopened.summary().category(Category::Vip).count, 0);
    assert_eq!(reopened.summary().grand_total().revenue, dec!(45.00));
}

#[test]
fn test_corrupt_record_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let record_path = dir.path().join("taquilla.json");
    std::fs::write(&record_path, "{\"sales\": garbage").unwrap();

    let session = Session::open(PriceList::default(), file_store(&dir)).unwrap();
    assert!(session.sales().is_empty());
    assert_eq!(session.summary(), &Summary::new());
    // The corrupt record was discarded.
    assert!(!record_path.exists());
}

#[test]
fn test_clear_all_deletes_the_record() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = Session::open(PriceList::default(), file_store(&dir)).unwrap();
    session.record_sale(&ana_vip_form()).unwrap();
    session.clear_all();
    drop(session);

    assert!(!dir.path().join("taquilla.json").exists());
    let reopened = Session::open(PriceList::default(), file_store(&dir)).unwrap();
    assert!(reopened.sales().is_empty());
}

#[test]
fn test_sale_snapshot_price_survives_price_change() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = Session::open(PriceList::default(), file_store(&dir)).unwrap();
    let ana = session.record_sale(&ana_vip_form()).unwrap();
    assert_eq!(ana.total, dec!(100.00));
    drop(session);

    // Reopen with a different VIP price; the recorded sale keeps its total.
    let mut prices = std::collections::BTreeMap::new();
    for category in Category::ALL {
        prices.insert(category, "99.00".parse().unwrap());
    }
    let reopened = Session::open(PriceList::new(prices), file_store(&dir)).unwrap();

    let restored = &reopened.sales()[0];
    assert_eq!(restored.total, dec!(100.00));
    assert_eq!(restored.unit_price_at_sale.value(), dec!(50.00));
    assert!(restored.is_consistent());
}
