//! Table rendering for record sets. Pure formatting: builds a
//! [`comfy_table::Table`], leaving printing (and the empty-set message) to
//! the CLI layer.

use crate::model::{Record, FIELDS};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};

pub fn record_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            FIELDS
                .iter()
                .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
        );

    for record in records {
        table.add_row([
            &record.tool,
            &record.command,
            &record.description,
            &record.tags,
        ]);
    }

    table
}
