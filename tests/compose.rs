use serde_json::json;
use tracking_report::compose::{build_document, Institution};
use tracking_report::document::{Node, TextStyleRef};
use tracking_report::style::RuleSet;
use tracking_report::{Error, ReportKind, ReportPayload};

fn institution() -> Institution {
    Institution::new(
        "LAMONGAN GENERAL HOSPITAL",
        "76 Jaksa Agung Suprapto St, Lamongan",
        "Phone 0322-322834",
    )
}

fn memo_payload() -> serde_json::Value {
    json!({
        "id": "MI-2024-031",
        "title": "INTERNAL MEMO TRACKING",
        "refNumber": "031/MI/2024",
        "sent": "2024-03-04",
        "sender": "Head of Pharmacy",
        "function": "Department Head",
        "subject": "Cold-chain audit",
        "received": "2024-03-05",
        "deadline": "2024-03-12",
        "archive": false,
        "agenda": "A-121",
        "filename": "memo-031.pdf",
        "archiveCode": "F2",
        "expeditions": [
            { "date": "2024-03-05", "name": "Director's Office", "type": 2, "read": true },
            { "date": "2024-03-05", "name": "External Auditor", "type": 1, "read": false }
        ],
        "dispositions": [
            { "name": "Quality Unit", "note": "Verify storage logs", "date": "2024-03-06" }
        ],
        "followups": [
            {
                "name": "Quality Unit",
                "date": "2024-03-08",
                "read": "2024-03-09",
                "note": "Logs verified, two excursions flagged"
            },
            {
                "name": "Facilities",
                "date": "2024-03-09",
                "read": false,
                "note": "Sensor recalibration scheduled"
            }
        ]
    })
}

#[test]
fn memo_tree_contains_every_section() {
    let payload = ReportPayload::from_value(memo_payload()).unwrap();
    let tree = build_document(payload, ReportKind::InternalMemo, &institution()).unwrap();

    let rules: Vec<_> = tree
        .content
        .iter()
        .filter_map(|node| match node {
            Node::Table(table) => Some(table.rules),
            Node::Text(_) => None,
        })
        .collect();
    assert_eq!(
        rules,
        vec![
            RuleSet::TrackingSummary,
            RuleSet::MemoDetailBlock,
            RuleSet::Dispositions,
            RuleSet::Followups,
            RuleSet::PartyList,
        ]
    );

    let followups = tree
        .content
        .iter()
        .find_map(|node| match node {
            Node::Table(table) if table.rules == RuleSet::Followups => Some(table),
            _ => None,
        })
        .unwrap();
    assert_eq!(followups.rows.len(), 2 * 4);
}

#[test]
fn building_twice_from_the_same_payload_yields_identical_trees() {
    let payload = ReportPayload::from_value(memo_payload()).unwrap();
    let first =
        build_document(payload.clone(), ReportKind::InternalMemo, &institution()).unwrap();
    let second = build_document(payload, ReportKind::InternalMemo, &institution()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_subject_aborts_without_a_tree() {
    let mut value = memo_payload();
    value.as_object_mut().unwrap().remove("subject");
    let payload = ReportPayload::from_value(value).unwrap();
    let err = build_document(payload, ReportKind::InternalMemo, &institution()).unwrap_err();
    match err {
        Error::Validation { field } => assert_eq!(field, "subject"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(err.is_client_fault());
}

#[test]
fn empty_party_list_still_produces_header_only_tables() {
    let mut value = memo_payload();
    value["expeditions"] = json!([]);
    value["followups"] = json!([]);
    let payload = ReportPayload::from_value(value).unwrap();
    let tree = build_document(payload, ReportKind::InternalMemo, &institution()).unwrap();

    for node in &tree.content {
        if let Node::Table(table) = node {
            match table.rules {
                RuleSet::PartyList => assert_eq!(table.rows.len(), 1),
                RuleSet::Followups => assert!(table.rows.is_empty()),
                _ => {}
            }
        }
    }
}

#[test]
fn letter_kind_partitions_parties_into_separate_tables() {
    let value = json!({
        "id": "SU-2024-006",
        "title": "LETTER TRACKING",
        "refNumber": "006/SU/2024",
        "sent": "2024-02-20",
        "sender": "Provincial Office",
        "subject": "Accreditation visit",
        "received": "2024-02-21",
        "deadline": "2024-02-28",
        "agenda": "A-88",
        "filename": "letter-006.pdf",
        "expeditions": [
            { "date": "2024-02-21", "name": "Partner Co", "type": 1, "read": false },
            { "date": "2024-02-21", "name": "Registry", "type": 2, "read": true },
            { "date": "2024-02-22", "name": "Courier Service", "type": 1, "read": false }
        ]
    });
    let payload = ReportPayload::from_value(value).unwrap();
    let tree = build_document(payload, ReportKind::GeneralLetter, &institution()).unwrap();

    let party_tables: Vec<_> = tree
        .content
        .iter()
        .filter_map(|node| match node {
            Node::Table(table) if table.rules == RuleSet::PartyList => Some(table),
            _ => None,
        })
        .collect();
    assert_eq!(party_tables.len(), 2);

    // External table first: both external records, renumbered 1 and 2.
    let external = party_tables[0];
    assert_eq!(external.rows.len(), 3);
    assert_eq!(external.rows[1].0[0].text, "1");
    assert_eq!(external.rows[1].0[2].text, "Partner Co");
    assert_eq!(external.rows[2].0[0].text, "2");
    assert_eq!(external.rows[2].0[2].text, "Courier Service");

    let internal = party_tables[1];
    assert_eq!(internal.rows.len(), 2);
    assert_eq!(internal.rows[1].0[0].text, "1");
    assert_eq!(internal.rows[1].0[2].text, "Registry");

    // Exactly one section label for the party section.
    let labels: Vec<_> = tree
        .content
        .iter()
        .filter_map(|node| match node {
            Node::Text(text) if text.style == TextStyleRef::SectionLabel => {
                Some(text.text.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["Disposition Results"]);
}
