//! Assembles a normalized report into the final document tree.
//!
//! The composer walks the report's kind profile and emits content nodes in a
//! fixed order: title block, institution identity, tracking summary, report
//! details, then each data section with its label.  It performs no I/O and
//! raises no errors of its own; everything it needs was validated upstream.

use crate::document::{
    ColumnWidth, DocumentTree, NamedStyles, Node, PageSettings, Spacing, TableNode, TextStyleRef,
};
use crate::error::Error;
use crate::model::{PartyColumns, Report, ReportKind};
use crate::partition;
use crate::payload::ReportPayload;
use crate::rows;
use crate::style::RuleSet;

/// Institution identity printed in the letterhead.
///
/// Injected by the caller so the engine carries no hard-coded organization
/// literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Institution {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Institution {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    /// The single contact line shown under the institution name.
    pub fn contact_line(&self) -> String {
        format!("{}, {}", self.address, self.phone)
    }
}

fn party_widths(columns: PartyColumns) -> Vec<ColumnWidth> {
    match columns {
        PartyColumns::WithReadState => vec![
            ColumnWidth::Auto,
            ColumnWidth::Auto,
            ColumnWidth::Fill,
            ColumnWidth::Auto,
        ],
        PartyColumns::Plain => vec![ColumnWidth::Auto, ColumnWidth::Auto, ColumnWidth::Fill],
    }
}

fn party_table(columns: PartyColumns, entries: &[(usize, &crate::model::PartyRecord)]) -> Node {
    Node::Table(TableNode {
        widths: party_widths(columns),
        rows: rows::party_rows(columns, entries),
        rules: RuleSet::PartyList,
        spacing: Spacing::new(5.0, 15.0),
    })
}

/// Builds the document tree for a normalized report.
pub fn compose(report: &Report, institution: &Institution) -> DocumentTree {
    let profile = report.kind.profile();
    let mut content = Vec::new();

    let title = match profile.title_prefix {
        Some(prefix) => format!("{} {}", prefix, report.header.title),
        None => report.header.title.clone(),
    };
    content.push(Node::text(title, TextStyleRef::Header));
    content.push(Node::text(institution.name.clone(), TextStyleRef::Subheader));
    content.push(Node::text(institution.contact_line(), TextStyleRef::Contact));

    if let Some(tracking) = &report.tracking {
        content.push(Node::text(format!("ID: {}", tracking.id), TextStyleRef::Body));
        content.push(Node::Table(TableNode {
            widths: vec![
                ColumnWidth::Auto,
                ColumnWidth::Auto,
                ColumnWidth::Auto,
                ColumnWidth::Auto,
                ColumnWidth::Auto,
                ColumnWidth::Fill,
            ],
            rows: rows::tracking_rows(tracking),
            rules: RuleSet::TrackingSummary,
            spacing: Spacing::new(2.0, 15.0),
        }));
    }

    let (detail_rules, detail_spacing) = if profile.framed_details {
        (RuleSet::MemoDetailBlock, Spacing::new(10.0, 10.0))
    } else {
        (RuleSet::DetailBlock, Spacing::new(5.0, 20.0))
    };
    content.push(Node::Table(TableNode {
        widths: vec![ColumnWidth::Fixed(90.0), ColumnWidth::Auto, ColumnWidth::Fill],
        rows: rows::detail_rows(&report.header, profile),
        rules: detail_rules,
        spacing: detail_spacing,
    }));

    if profile.has_log_sections {
        content.push(Node::text("Dispositions", TextStyleRef::SectionLabel));
        content.push(Node::Table(TableNode {
            widths: vec![
                ColumnWidth::Fixed(100.0),
                ColumnWidth::Fill,
                ColumnWidth::Fixed(75.0),
            ],
            rows: rows::disposition_rows(&report.dispositions),
            rules: RuleSet::Dispositions,
            spacing: Spacing::new(5.0, 15.0),
        }));

        content.push(Node::text("Follow-ups", TextStyleRef::SectionLabel));
        content.push(Node::Table(TableNode {
            widths: vec![ColumnWidth::Auto, ColumnWidth::Fill, ColumnWidth::Auto],
            rows: rows::followup_rows(&report.followups),
            rules: RuleSet::Followups,
            spacing: Spacing::new(5.0, 15.0),
        }));
    }

    content.push(Node::text(
        profile.party_section_label,
        TextStyleRef::SectionLabel,
    ));
    if profile.separate_parties {
        let partitioned = partition::classify(&report.parties);
        content.push(party_table(profile.party_columns, &partitioned.external));
        content.push(party_table(profile.party_columns, &partitioned.internal));
    } else {
        let entries = partition::combined(&report.parties);
        content.push(party_table(profile.party_columns, &entries));
    }

    DocumentTree {
        page: PageSettings::default(),
        styles: NamedStyles::default(),
        content,
    }
}

/// Convenience pipeline: payload → report → document tree.
pub fn build_document(
    payload: ReportPayload,
    kind: ReportKind,
    institution: &Institution,
) -> Result<DocumentTree, Error> {
    let report = payload.into_report(kind)?;
    Ok(compose(&report, institution))
}
