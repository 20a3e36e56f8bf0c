mod common;
use common::{admin_session, setup_data_dir, test_config};

use chrono::NaiveDate;
use commtrack::errors::AppError;
use commtrack::models::{Status, WorkType};
use commtrack::repo::task;
use commtrack::store::RecordStore;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn add_assigns_next_id_and_due_date() {
    let dir = setup_data_dir("task_add");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    let id = task::add(
        &mut store,
        &session,
        "P-101A",
        WorkType::RoutineInspection,
        "MER-010",
        "Weekly check.",
        d("2024-02-27"),
    )
    .unwrap();

    // seed holds 3 tasks
    assert_eq!(id, 4);

    let t = task::find_by_id(&store, 4).unwrap();
    assert_eq!(t.title, "Routine Inspection - MER-010");
    assert_eq!(t.status, Status::BeforeStart);
    assert_eq!(t.created_date, "2024-02-27");
    // leap year: +7 days crosses the end of February
    assert_eq!(t.due_date, "2024-03-05");

    // the registration was committed to disk
    let reloaded = RecordStore::open(&cfg).unwrap();
    assert_eq!(reloaded.tasks.len(), 4);
}

#[test]
fn ids_stay_strictly_increasing() {
    let dir = setup_data_dir("task_ids");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    for expected in 4..=8u32 {
        let id = task::add(
            &mut store,
            &session,
            "K-201",
            WorkType::TestRun,
            &format!("MER-{expected:03}"),
            "",
            d("2024-01-10"),
        )
        .unwrap();
        assert_eq!(id, expected);
    }
}

#[test]
fn update_status_changes_only_the_status_field() {
    let dir = setup_data_dir("task_status");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    let before = task::find_by_id(&store, 3).unwrap().clone();
    task::update_status(&mut store, &session, 3, Status::Ongoing).unwrap();
    let after = task::find_by_id(&store, 3).unwrap().clone();

    assert_eq!(after.status, Status::Ongoing);
    let mut expected = before;
    expected.status = Status::Ongoing;
    assert_eq!(after, expected);
}

#[test]
fn update_status_unknown_id_is_not_found() {
    let dir = setup_data_dir("task_status_missing");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();
    let session = admin_session();

    let err = task::update_status(&mut store, &session, 99, Status::Completed).unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(99)));
}

#[test]
fn work_type_filter_skips_rows_without_a_work_type() {
    let dir = setup_data_dir("task_wt_filter");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();

    // simulate an imported row carrying no work type
    store.tasks[0].work_type = String::new();

    let punch = task::filter_by_work_type_contains(&store, "Punch List", false);
    assert_eq!(punch.len(), 1);
    assert_eq!(punch[0].id, 3);

    // the blanked row matches nothing, but also breaks nothing
    let any = task::filter_by_work_type_contains(&store, "", false);
    assert_eq!(any.len(), 2);
}

#[test]
fn work_type_filter_case_sensitivity_is_configurable() {
    let dir = setup_data_dir("task_wt_case");
    let cfg = test_config(&dir);
    let store = RecordStore::open(&cfg).unwrap();

    assert_eq!(task::filter_by_work_type_contains(&store, "punch list", false).len(), 1);
    assert_eq!(task::filter_by_work_type_contains(&store, "punch list", true).len(), 0);
}

#[test]
fn due_range_is_inclusive_and_skips_unparseable_dates() {
    let dir = setup_data_dir("task_due_range");
    let cfg = test_config(&dir);
    let mut store = RecordStore::open(&cfg).unwrap();

    // seed due dates: #1 2023-11-25, #2 2023-11-22, #3 2023-11-30
    let hit: Vec<u32> = task::filter_by_due_range(&store, d("2023-11-22"), d("2023-11-25"))
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(hit, vec![1, 2]);

    store.tasks[0].due_date = "TBC".to_string();
    let hit: Vec<u32> = task::filter_by_due_range(&store, d("2023-11-22"), d("2023-11-25"))
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(hit, vec![2]);
}

#[test]
fn created_since_is_a_lower_bound() {
    let dir = setup_data_dir("task_created_since");
    let cfg = test_config(&dir);
    let store = RecordStore::open(&cfg).unwrap();

    // seed created dates: #1 2023-11-20, #2 2023-11-21, #3 2023-11-23
    let hit: Vec<u32> = task::filter_by_created_since(&store, d("2023-11-21"))
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(hit, vec![2, 3]);
}

#[test]
fn search_matches_any_field_case_insensitively() {
    let dir = setup_data_dir("task_search");
    let cfg = test_config(&dir);
    let store = RecordStore::open(&cfg).unwrap();

    let hit: Vec<u32> = task::search(&store, "k-201", None).iter().map(|t| t.id).collect();
    assert_eq!(hit, vec![2]);

    // match on the description field
    let hit: Vec<u32> = task::search(&store, "touch-up", None).iter().map(|t| t.id).collect();
    assert_eq!(hit, vec![3]);

    // empty text matches everything
    assert_eq!(task::search(&store, "", None).len(), 3);
}

#[test]
fn search_intersects_with_an_exact_work_type() {
    let dir = setup_data_dir("task_search_wt");
    let cfg = test_config(&dir);
    let store = RecordStore::open(&cfg).unwrap();

    let hit: Vec<u32> = task::search(&store, "", Some("Installation Check"))
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(hit, vec![2]);

    // text and work type must both hold
    assert!(task::search(&store, "P-101A", Some("Installation Check")).is_empty());
}
