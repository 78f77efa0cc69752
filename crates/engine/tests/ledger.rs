use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{TimeZone, Utc};

use engine::{Category, EngineError, Ledger, LedgerStore, Money, Statistics};

static STORE_SEQ: AtomicU32 = AtomicU32::new(0);

fn store_in_target() -> LedgerStore {
    let root =
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_ledgers");
    std::fs::create_dir_all(&root).unwrap();

    let seq = STORE_SEQ.fetch_add(1, Ordering::Relaxed);
    let path = root.join(format!("ledger_{}_{seq}.json", std::process::id()));
    LedgerStore::new(path)
}

fn at(secs: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn add_increases_length_by_one_and_prepends() {
    let ledger = Ledger::default();
    let ledger = ledger
        .add("Продукты в магазине", "1250.40", Category::Groceries, at(10))
        .unwrap();
    assert_eq!(ledger.len(), 1);

    let ledger = ledger
        .add("Проездной", "2170", Category::Transport, at(20))
        .unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.records()[0].description, "Проездной");
    assert_eq!(ledger.records()[1].description, "Продукты в магазине");
}

#[test]
fn add_rejects_empty_description() {
    let ledger = Ledger::default();
    assert_eq!(
        ledger.add("", "150", Category::Groceries, at(1)),
        Err(EngineError::InvalidDescription)
    );
    assert_eq!(
        ledger.add("   ", "150", Category::Groceries, at(1)),
        Err(EngineError::InvalidDescription)
    );
    assert!(ledger.is_empty());
}

#[test]
fn add_rejects_bad_amounts() {
    let ledger = Ledger::default();
    for amount in ["", "  ", "abc", "12,345", "0", "0.00", "-5"] {
        assert!(
            matches!(
                ledger.add("Кофе", amount, Category::Groceries, at(1)),
                Err(EngineError::InvalidAmount(_))
            ),
            "amount {amount:?} should be rejected"
        );
    }
    assert!(ledger.is_empty());
}

#[test]
fn remove_is_idempotent() {
    let ledger = Ledger::default()
        .add("Кофе", "150", Category::Groceries, at(1))
        .unwrap()
        .add("Кино", "600", Category::Entertainment, at(2))
        .unwrap();
    let id = ledger.records()[1].id.clone();

    let once = ledger.remove(&id);
    let twice = once.remove(&id);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
    assert_eq!(once.records()[0].description, "Кино");
}

#[test]
fn total_is_sum_of_amounts_including_empty() {
    let empty = Ledger::default();
    let stats = Statistics::compute(&empty);
    assert_eq!(stats.total, Money::ZERO);
    assert_eq!(stats.count, 0);
    assert_eq!(stats.average, Money::ZERO);
    assert!(stats.by_category.is_empty());

    let ledger = empty
        .add("Кофе", "150.50", Category::Groceries, at(1))
        .unwrap()
        .add("Метро", "62", Category::Transport, at(2))
        .unwrap();
    let stats = Statistics::compute(&ledger);
    assert_eq!(stats.total, Money::new(21_250));
}

#[test]
fn scenario_single_coffee() {
    let ledger = Ledger::default()
        .add("Coffee", "150", Category::Groceries, at(1))
        .unwrap();

    let stats = Statistics::compute(&ledger);
    assert_eq!(stats.total, Money::new(15_000));
    assert_eq!(stats.count, 1);
    assert_eq!(stats.average, Money::new(15_000));
    assert_eq!(stats.by_category.len(), 1);
    assert_eq!(stats.by_category[0].category, Category::Groceries);
    assert_eq!(stats.by_category[0].total, Money::new(15_000));
}

#[test]
fn scenario_two_categories() {
    let ledger = Ledger::default()
        .add("Продукты", "100", Category::Groceries, at(1))
        .unwrap()
        .add("Такси", "200", Category::Transport, at(2))
        .unwrap();

    let stats = Statistics::compute(&ledger);
    assert_eq!(stats.total, Money::new(30_000));
    assert_eq!(stats.average, Money::new(15_000));
    assert_eq!(stats.by_category.len(), 2);
    assert_eq!(stats.by_category[0].category, Category::Groceries);
    assert_eq!(stats.by_category[0].total, Money::new(10_000));
    assert_eq!(stats.by_category[1].category, Category::Transport);
    assert_eq!(stats.by_category[1].total, Money::new(20_000));
}

#[test]
fn scenario_delete_only_record() {
    let ledger = Ledger::default()
        .add("Кофе", "150", Category::Groceries, at(1))
        .unwrap();
    let id = ledger.records()[0].id.clone();

    let ledger = ledger.remove(&id);
    let stats = Statistics::compute(&ledger);
    assert!(ledger.is_empty());
    assert_eq!(stats.total, Money::ZERO);
    assert_eq!(stats.count, 0);
    assert!(stats.by_category.is_empty());
}

#[test]
fn round_trip_reproduces_the_ledger() {
    let store = store_in_target();
    let ledger = Ledger::default()
        .add("Продукты в магазине", "1250.40", Category::Groceries, at(10))
        .unwrap()
        .add("Стрижка", "800", Category::Other, at(20))
        .unwrap()
        .add("Абонемент в зал", "2300", Category::Health, at(30))
        .unwrap();

    store.save(&ledger).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, ledger);
}

#[test]
fn load_missing_file_yields_empty_ledger() {
    let store = store_in_target();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn load_malformed_blob_yields_empty_ledger() {
    let store = store_in_target();
    std::fs::write(store.path(), "{not json").unwrap();
    assert!(store.load().unwrap().is_empty());

    // Valid JSON of the wrong shape falls back the same way.
    std::fs::write(store.path(), "{\"expenses\": 3}").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn persisted_blob_matches_the_original_layout() {
    let store = store_in_target();
    let ledger = Ledger::default()
        .add("Кофе", "150.5", Category::Groceries, at(1_700_000_000))
        .unwrap();
    store.save(&ledger).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];
    assert_eq!(entry["id"], "1700000000000");
    assert_eq!(entry["description"], "Кофе");
    assert_eq!(entry["amount"], 150.5);
    assert_eq!(entry["category"], "Продукты");
    assert!(entry["date"].as_str().unwrap().starts_with("2023-11-14T22:13:20"));
}

#[test]
fn loads_a_blob_written_by_the_original_app() {
    let store = store_in_target();
    std::fs::write(
        store.path(),
        r#"[{"id":"1716822000000","description":"Продукты в магазине","amount":150,"category":"Продукты","date":"2024-05-27T15:00:00.000Z"}]"#,
    )
    .unwrap();

    let ledger = store.load().unwrap();
    assert_eq!(ledger.len(), 1);
    let record = &ledger.records()[0];
    assert_eq!(record.id, "1716822000000");
    assert_eq!(record.amount, Money::new(15_000));
    assert_eq!(record.category, Category::Groceries);
}
