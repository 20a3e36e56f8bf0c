use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the Equipment table.
///
/// Every field is kept as a string, exactly as it sits in the CSV: DAC and
/// SMCC look like dates but are never coerced on load, so free-text values in
/// imported data survive a save/load cycle byte for byte. Tag No is NOT
/// unique — several physical items may share a nominal tag — so lookups by
/// tag always return a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(rename = "Tag No")]
    pub tag_no: String,
    #[serde(rename = "Equipment Name")]
    pub name: String,
    #[serde(rename = "Sub-System")]
    pub sub_system: String,
    #[serde(rename = "PO No")]
    pub po_no: String,
    #[serde(rename = "Module")]
    pub module: String,
    #[serde(rename = "Deck")]
    pub deck: String,
    #[serde(rename = "DAC")]
    pub dac: String,
    #[serde(rename = "SMCC")]
    pub smcc: String,
}

impl Equipment {
    /// Header row of the durable CSV, in column order.
    pub const COLUMNS: [&'static str; 8] = [
        "Tag No",
        "Equipment Name",
        "Sub-System",
        "PO No",
        "Module",
        "Deck",
        "DAC",
        "SMCC",
    ];

    /// Delivery-acceptance target as a typed date, None if unparseable.
    pub fn dac_date(&self) -> Option<NaiveDate> {
        date::parse_date(&self.dac)
    }

    /// Mechanical-completion target as a typed date, None if unparseable.
    pub fn smcc_date(&self) -> Option<NaiveDate> {
        date::parse_date(&self.smcc)
    }

    pub fn row(&self) -> [String; 8] {
        [
            self.tag_no.clone(),
            self.name.clone(),
            self.sub_system.clone(),
            self.po_no.clone(),
            self.module.clone(),
            self.deck.clone(),
            self.dac.clone(),
            self.smcc.clone(),
        ]
    }
}
