//! Fixed seed dataset, written out the first time the tool runs against an
//! empty data directory.

use crate::models::{Equipment, Status, Task};

pub fn equipment() -> Vec<Equipment> {
    let rows = [
        ("P-101A", "Feed Water Pump A", "SS-01", "PO-9981", "M10", "Main Deck", "2023-11-30", "2024-02-01"),
        ("P-101B", "Feed Water Pump B", "SS-01", "PO-9981", "M10", "Main Deck", "2023-12-05", "2024-02-01"),
        ("K-201", "Gas Compressor", "SS-05", "PO-5521", "M12", "Upper Deck", "2023-12-10", "2024-03-15"),
        ("V-305", "Separator Vessel", "SS-09", "PO-1102", "M15", "Cellar Deck", "2024-01-15", "2024-04-20"),
    ];

    rows.iter()
        .map(|(tag, name, ss, po, module, deck, dac, smcc)| Equipment {
            tag_no: tag.to_string(),
            name: name.to_string(),
            sub_system: ss.to_string(),
            po_no: po.to_string(),
            module: module.to_string(),
            deck: deck.to_string(),
            dac: dac.to_string(),
            smcc: smcc.to_string(),
        })
        .collect()
}

pub fn tasks() -> Vec<Task> {
    let rows = [
        (
            1u32, "P-101A", "Vibration Issue", "Test Run / Commissioning", "MER-001",
            "High vibration observed at DE.", Status::Ongoing, "2023-11-20", "2023-11-25",
        ),
        (
            2, "K-201", "Alignment Check", "Installation Check", "MER-002",
            "Coupling alignment required.", Status::Completed, "2023-11-21", "2023-11-22",
        ),
        (
            3, "V-305", "Painting Defect", "Punch List (Defect)", "MER-005",
            "Touch-up required on shell.", Status::BeforeStart, "2023-11-23", "2023-11-30",
        ),
    ];

    rows.iter()
        .map(|(id, tag, title, wt, mer, desc, status, created, due)| Task {
            id: *id,
            tag_no: tag.to_string(),
            title: title.to_string(),
            work_type: wt.to_string(),
            mer_no: mer.to_string(),
            description: desc.to_string(),
            status: *status,
            created_date: created.to_string(),
            due_date: due.to_string(),
        })
        .collect()
}
