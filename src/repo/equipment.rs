//! Equipment Repository: CRUD and queries over the Equipment table.
//! Mutations check the session role before touching the store, commit with
//! `save()`, then write the operation log.

use crate::errors::{AppError, AppResult};
use crate::models::Equipment;
use crate::session::Session;
use crate::store::RecordStore;
use crate::utils::date;
use std::path::Path;

/// Append one validated record. Every field is required; DAC and SMCC must
/// be well-formed dates on manual entry (they are stored as strings anyway).
pub fn add(store: &mut RecordStore, session: &Session, rec: Equipment) -> AppResult<Equipment> {
    session.require_admin("equipment add")?;
    validate(&rec)?;

    store.equipment.push(rec.clone());
    store.save()?;
    store.log("equipment_add", &rec.tag_no, &rec.name)?;
    Ok(rec)
}

/// Merge an externally produced CSV batch into the table.
///
/// The batch must carry exactly the table's column set; a shape mismatch is
/// rejected up front so a misaligned import can never land sparse rows.
/// Row values themselves are taken as-is, same as the observed import flow.
pub fn bulk_merge(store: &mut RecordStore, session: &Session, path: &Path) -> AppResult<usize> {
    session.require_admin("equipment import")?;

    let mut rdr = csv::Reader::from_path(path)?;
    check_columns(rdr.headers()?)?;

    let mut batch = Vec::new();
    for rec in rdr.deserialize::<Equipment>() {
        batch.push(rec?);
    }

    let merged = batch.len();
    store.equipment.extend(batch);
    store.save()?;
    store.log(
        "equipment_import",
        &path.display().to_string(),
        &format!("{merged} rows merged"),
    )?;
    Ok(merged)
}

pub fn list_all(store: &RecordStore) -> &[Equipment] {
    &store.equipment
}

/// Distinct Tag No values in first-seen order.
pub fn list_tags(store: &RecordStore) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for rec in &store.equipment {
        if !tags.contains(&rec.tag_no) {
            tags.push(rec.tag_no.clone());
        }
    }
    tags
}

/// All records carrying the given tag. Tags are not unique, so this returns
/// zero, one, or many records.
pub fn find_by_tag<'a>(store: &'a RecordStore, tag: &str) -> Vec<&'a Equipment> {
    store.equipment.iter().filter(|e| e.tag_no == tag).collect()
}

/// Distinct Equipment Name values among the records with the given tag.
pub fn names_for_tag(store: &RecordStore, tag: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for rec in find_by_tag(store, tag) {
        if !names.contains(&rec.name) {
            names.push(rec.name.clone());
        }
    }
    names
}

fn validate(rec: &Equipment) -> AppResult<()> {
    for (col, val) in Equipment::COLUMNS.iter().zip(rec.row().iter()) {
        if val.trim().is_empty() {
            return Err(AppError::Validation(format!("'{col}' must not be empty")));
        }
    }
    if date::parse_date(&rec.dac).is_none() {
        return Err(AppError::InvalidDate(rec.dac.clone()));
    }
    if date::parse_date(&rec.smcc).is_none() {
        return Err(AppError::InvalidDate(rec.smcc.clone()));
    }
    Ok(())
}

fn check_columns(headers: &csv::StringRecord) -> AppResult<()> {
    let mut got: Vec<&str> = headers.iter().map(str::trim).collect();
    let mut expected: Vec<&str> = Equipment::COLUMNS.to_vec();
    got.sort_unstable();
    expected.sort_unstable();

    if got != expected {
        let missing: Vec<&str> = expected
            .iter()
            .filter(|c| !got.contains(c))
            .copied()
            .collect();
        let unexpected: Vec<&str> = got
            .iter()
            .filter(|c| !expected.contains(c))
            .copied()
            .collect();
        return Err(AppError::ColumnMismatch(format!(
            "missing [{}], unexpected [{}]",
            missing.join(", "),
            unexpected.join(", ")
        )));
    }
    Ok(())
}
