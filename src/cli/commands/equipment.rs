use crate::cli::parser::EquipmentAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Equipment;
use crate::repo::equipment as repo;
use crate::session::Session;
use crate::store::RecordStore;
use crate::ui::messages;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(action: &EquipmentAction, cfg: &Config, session: &Session) -> AppResult<()> {
    let mut store = RecordStore::open(cfg)?;

    match action {
        EquipmentAction::List => {
            print_equipment(repo::list_all(&store));
        }

        EquipmentAction::Add {
            tag,
            name,
            sub_system,
            po,
            module,
            deck,
            dac,
            smcc,
        } => {
            let rec = Equipment {
                tag_no: tag.clone(),
                name: name.clone(),
                sub_system: sub_system.clone(),
                po_no: po.clone(),
                module: module.clone(),
                deck: deck.clone(),
                dac: dac.clone(),
                smcc: smcc.clone(),
            };
            let rec = repo::add(&mut store, session, rec)?;
            messages::success(format!("Equipment '{}' added", rec.tag_no));
        }

        EquipmentAction::Import { file } => {
            let merged = repo::bulk_merge(&mut store, session, Path::new(file))?;
            messages::success(format!("Data merged: {merged} rows"));
        }

        EquipmentAction::Tags => {
            for tag in repo::list_tags(&store) {
                println!("{tag}");
            }
        }

        EquipmentAction::Find { tag } => {
            let found = repo::find_by_tag(&store, tag);
            if found.is_empty() {
                return Err(AppError::TagNotFound(tag.clone()));
            }
            print_equipment(&found.iter().map(|e| (*e).clone()).collect::<Vec<_>>());
            let names = repo::names_for_tag(&store, tag);
            messages::info(format!("Distinct names: {}", names.join(", ")));
        }
    }
    Ok(())
}

fn print_equipment(rows: &[Equipment]) {
    if rows.is_empty() {
        println!("No equipment records.");
        return;
    }
    let mut table = Table::new(Equipment::COLUMNS.to_vec());
    for rec in rows {
        table.add_row(rec.row().to_vec());
    }
    print!("{}", table.render());
}
