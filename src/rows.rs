//! Pure builders turning canonical entities into ordered table rows.
//!
//! Every builder is a plain function from an entity slice to a row list.
//! Builders with a header row always emit it, even for empty input, so a
//! table's row count is one plus its data-row count.  The follow-up builder
//! has no header and expands each record into a fixed four-row block.

use crate::document::{Cell, Row};
use crate::model::{
    DispositionRecord, FollowupRecord, KindProfile, PartyColumns, PartyRecord, ReportHeader,
    TrackingBlock,
};

/// Header labels for party tables that track read state.
pub const PARTY_HEADER: [&str; 4] = ["No", "Date", "Name", "Read"];

/// Header labels for the three-column party table variant.
pub const PARTY_HEADER_PLAIN: [&str; 3] = ["No", "Date", "Name"];

/// Header labels for the disposition log.
pub const DISPOSITION_HEADER: [&str; 3] = ["Forwarded To", "Disposition Note", "Date"];

/// Number of physical rows one follow-up record expands into.
pub const FOLLOWUP_BLOCK_ROWS: usize = 4;

/// Builds the party table rows from partition-indexed records.
///
/// The display index comes from the partition classifier, not from the
/// record's position in the source payload.
pub fn party_rows(columns: PartyColumns, entries: &[(usize, &PartyRecord)]) -> Vec<Row> {
    let header = match columns {
        PartyColumns::WithReadState => Row::from_texts(PARTY_HEADER),
        PartyColumns::Plain => Row::from_texts(PARTY_HEADER_PLAIN),
    };

    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(header);
    for (index, record) in entries {
        let mut cells = vec![
            Cell::new(index.to_string()),
            Cell::new(record.date.clone()),
            Cell::new(record.name.clone()),
        ];
        if columns == PartyColumns::WithReadState {
            cells.push(Cell::new(record.read.display_text()));
        }
        rows.push(Row(cells));
    }
    rows
}

/// Builds the disposition log rows: a header plus one row per record.
pub fn disposition_rows(records: &[DispositionRecord]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(Row::from_texts(DISPOSITION_HEADER));
    for record in records {
        rows.push(Row(vec![
            Cell::new(record.name.clone()),
            Cell::new(record.note.clone()),
            Cell::new(record.date.clone()),
        ]));
    }
    rows
}

/// Expands follow-up records into their four-row blocks.
///
/// Per record: a bold name row spanning two columns with the 1-based
/// sequence number in the first cell, a date/read row, a spanning label row,
/// and a spanning note row.  Spanned-over cells stay present but blank.
pub fn followup_rows(records: &[FollowupRecord]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(records.len() * FOLLOWUP_BLOCK_ROWS);
    for (position, record) in records.iter().enumerate() {
        rows.push(Row(vec![
            Cell::new((position + 1).to_string()),
            Cell::spanned(record.name.clone(), 2).bold(),
            Cell::blank(),
        ]));
        rows.push(Row(vec![
            Cell::blank(),
            Cell::new(format!("Sent {}", record.date)),
            Cell::new(record.read.display_text()),
        ]));
        rows.push(Row(vec![
            Cell::blank(),
            Cell::spanned("Follow-up note:", 2).with_margin_top(5.0),
            Cell::blank(),
        ]));
        rows.push(Row(vec![
            Cell::blank(),
            Cell::spanned(record.note.clone(), 2),
            Cell::blank(),
        ]));
    }
    rows
}

fn flag_text(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Builds the two-row tracking summary: label / `: value` pairs.
pub fn tracking_rows(tracking: &TrackingBlock) -> Vec<Row> {
    vec![
        Row(vec![
            Cell::new("Received"),
            Cell::new(format!(": {}", tracking.received)),
            Cell::new("Deadline"),
            Cell::new(format!(": {}", tracking.deadline)),
            Cell::new("Archive"),
            Cell::new(format!(": {}", flag_text(tracking.archive))),
        ]),
        Row(vec![
            Cell::new("Agenda No"),
            Cell::new(format!(": {}", tracking.agenda)),
            Cell::new("File Name"),
            Cell::new(format!(": {}", tracking.filename)),
            Cell::new("Code"),
            Cell::new(format!(": {}", tracking.archive_code)),
        ]),
    ]
}

fn blank_detail_row() -> Row {
    Row(vec![Cell::blank(), Cell::blank(), Cell::blank()])
}

fn detail_row(label: &str, value: &str) -> Row {
    Row(vec![Cell::new(label), Cell::new(":"), Cell::new(value)])
}

/// Builds the report-detail key/value rows for a kind profile.
///
/// Framed profiles (the memo layout) pad the block with two leading and two
/// trailing blank rows so the rule pattern of
/// [`crate::style::RuleSet::MemoDetailBlock`] frames the content.
pub fn detail_rows(header: &ReportHeader, profile: &KindProfile) -> Vec<Row> {
    let labels = &profile.detail_labels;
    let mut rows = Vec::new();
    if profile.framed_details {
        rows.push(blank_detail_row());
        rows.push(blank_detail_row());
    }
    rows.push(detail_row(labels.reference, &header.ref_number));
    rows.push(detail_row(labels.sent, &header.sent));
    rows.push(detail_row(labels.sender, &header.sender));
    if profile.has_function_line {
        rows.push(detail_row(labels.function, &header.function));
    }
    rows.push(detail_row(labels.subject, &header.subject));
    if profile.framed_details {
        rows.push(blank_detail_row());
        rows.push(blank_detail_row());
    }
    rows
}
