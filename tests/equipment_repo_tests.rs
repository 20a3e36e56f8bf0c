mod common;
use common::{admin_session, setup_data_dir, test_config};

use commtrack::errors::AppError;
use commtrack::models::Equipment;
use commtrack::repo::equipment;
use commtrack::store::RecordStore;
use std::fs;
use std::path::PathBuf;

fn sample(tag: &str, name: &str) -> Equipment {
    Equipment {
        tag_no: tag.to_string(),
        name: name.to_string(),
        sub_system: "SS-02".to_string(),
        po_no: "PO-7001".to_string(),
        module: "M11".to_string(),
        deck: "Main Deck".to_string(),
        dac: "2024-03-01".to_string(),
        smcc: "2024-05-01".to_string(),
    }
}

#[test]
fn add_appends_and_persists() {
    let dir = setup_data_dir("eq_add");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    equipment::add(&mut store, &session, sample("P-102A", "Booster Pump A")).unwrap();
    assert_eq!(store.equipment.len(), 5);

    let reloaded = RecordStore::open(&cfg).unwrap();
    assert_eq!(reloaded.equipment.len(), 5);
    assert_eq!(reloaded.equipment[4].tag_no, "P-102A");
}

#[test]
fn add_rejects_empty_fields_and_bad_dates() {
    let dir = setup_data_dir("eq_add_invalid");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    let mut rec = sample("P-102B", "Booster Pump B");
    rec.deck = "  ".to_string();
    assert!(matches!(
        equipment::add(&mut store, &session, rec).unwrap_err(),
        AppError::Validation(_)
    ));

    let mut rec = sample("P-102B", "Booster Pump B");
    rec.dac = "next month".to_string();
    assert!(matches!(
        equipment::add(&mut store, &session, rec).unwrap_err(),
        AppError::InvalidDate(_)
    ));

    // nothing landed
    assert_eq!(store.equipment.len(), 4);
}

#[test]
fn tags_are_distinct_in_first_seen_order_and_lookups_return_sets() {
    let dir = setup_data_dir("eq_tags");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    // a second physical instance sharing the nominal tag
    equipment::add(&mut store, &session, sample("K-201", "Gas Compressor Spare")).unwrap();

    let tags = equipment::list_tags(&store);
    assert_eq!(tags, vec!["P-101A", "P-101B", "K-201", "V-305"]);

    let found = equipment::find_by_tag(&store, "K-201");
    assert_eq!(found.len(), 2);

    let names = equipment::names_for_tag(&store, "K-201");
    assert_eq!(names, vec!["Gas Compressor", "Gas Compressor Spare"]);

    assert!(equipment::find_by_tag(&store, "X-999").is_empty());
}

#[test]
fn bulk_merge_appends_a_well_shaped_batch() {
    let dir = setup_data_dir("eq_merge");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    let batch = PathBuf::from(&dir).join("batch.csv");
    fs::write(
        &batch,
        "Tag No,Equipment Name,Sub-System,PO No,Module,Deck,DAC,SMCC\n\
         E-401,Heat Exchanger,SS-11,PO-3300,M20,Upper Deck,2024-02-10,2024-06-01\n\
         E-402,Heat Exchanger,SS-11,PO-3300,M20,Upper Deck,2024-02-12,2024-06-01\n",
    )
    .unwrap();

    let merged = equipment::bulk_merge(&mut store, &session, &batch).unwrap();
    assert_eq!(merged, 2);
    assert_eq!(store.equipment.len(), 6);

    let reloaded = RecordStore::open(&cfg).unwrap();
    assert_eq!(reloaded.equipment.len(), 6);
}

#[test]
fn bulk_merge_rejects_a_column_mismatch_up_front() {
    let dir = setup_data_dir("eq_merge_mismatch");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    let batch = PathBuf::from(&dir).join("bad.csv");
    fs::write(
        &batch,
        "Tag,Name,System\nE-401,Heat Exchanger,SS-11\n",
    )
    .unwrap();

    let before = fs::read_to_string(cfg.equipment_path()).unwrap();
    let err = equipment::bulk_merge(&mut store, &session, &batch).unwrap_err();
    assert!(matches!(err, AppError::ColumnMismatch(_)));

    // neither the table nor the durable copy changed
    assert_eq!(store.equipment.len(), 4);
    assert_eq!(fs::read_to_string(cfg.equipment_path()).unwrap(), before);
}
