//! Canonical entities describing one correspondence tracking report.
//!
//! The types in this module form the normalized data model that the row
//! builders and the layout composer consume.  They intentionally avoid
//! referencing the rendering crate so a report can be constructed, inspected
//! and tested without pulling in PDF machinery.  One set of entities is built
//! per incoming payload and never mutated afterwards.

use serde::Deserialize;

/// The report variants supported by the layout engine.
///
/// Each kind maps to a [`KindProfile`] that drives the parameterized table
/// builders and the composer instead of per-kind copies of the layout code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// Incoming external mail routed through the registry.
    IncomingMail,
    /// Internal memo with disposition and follow-up logs.
    InternalMemo,
    /// General outbound/inbound letter.
    GeneralLetter,
    /// Special-handling letter.
    SpecialLetter,
    /// Delivery sheet for an important document.
    ImportantDocument,
}

impl ReportKind {
    /// Returns the static layout profile for this report kind.
    pub fn profile(self) -> &'static KindProfile {
        match self {
            ReportKind::IncomingMail => &INCOMING_MAIL,
            ReportKind::InternalMemo => &INTERNAL_MEMO,
            ReportKind::GeneralLetter => &GENERAL_LETTER,
            ReportKind::SpecialLetter => &SPECIAL_LETTER,
            ReportKind::ImportantDocument => &IMPORTANT_DOCUMENT,
        }
    }
}

/// Column set used by the party/expedition tables of a report kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyColumns {
    /// `No | Date | Name | Read` — kinds that track read state.
    WithReadState,
    /// `No | Date | Name` — kinds that do not.
    Plain,
}

/// Labels for the report-detail key/value table, which differ per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailLabels {
    pub reference: &'static str,
    pub sent: &'static str,
    pub sender: &'static str,
    pub function: &'static str,
    pub subject: &'static str,
}

/// Per-kind layout descriptor.
///
/// The profile is the single place where report kinds differ: which sections
/// appear, which column set the party tables use, and whether the party list
/// is rendered as separate internal/external tables or one combined table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindProfile {
    /// Prefix prepended to the payload title, if any.
    pub title_prefix: Option<&'static str>,
    /// Whether the kind carries a tracking block (`ID:` line plus summary table).
    pub has_tracking: bool,
    /// Whether the detail table includes the role/function line.
    pub has_function_line: bool,
    /// Whether the detail table is framed with leading/trailing blank rows.
    pub framed_details: bool,
    /// Whether the kind renders disposition and follow-up log sections.
    pub has_log_sections: bool,
    /// Separate external/internal party tables vs one combined table.
    pub separate_parties: bool,
    /// Column set for the party tables.
    pub party_columns: PartyColumns,
    /// Label above the party table(s).
    pub party_section_label: &'static str,
    /// Labels for the detail key/value table.
    pub detail_labels: DetailLabels,
}

const LETTER_LABELS: DetailLabels = DetailLabels {
    reference: "Letter Number",
    sent: "Letter Date",
    sender: "Sender",
    function: "Position",
    subject: "Subject",
};

static INCOMING_MAIL: KindProfile = KindProfile {
    title_prefix: None,
    has_tracking: true,
    has_function_line: false,
    framed_details: false,
    has_log_sections: false,
    separate_parties: true,
    party_columns: PartyColumns::WithReadState,
    party_section_label: "Disposition Results",
    detail_labels: LETTER_LABELS,
};

static GENERAL_LETTER: KindProfile = KindProfile {
    title_prefix: None,
    has_tracking: true,
    has_function_line: false,
    framed_details: false,
    has_log_sections: false,
    separate_parties: true,
    party_columns: PartyColumns::WithReadState,
    party_section_label: "Disposition Results",
    detail_labels: LETTER_LABELS,
};

static SPECIAL_LETTER: KindProfile = KindProfile {
    title_prefix: None,
    has_tracking: true,
    has_function_line: false,
    framed_details: false,
    has_log_sections: false,
    separate_parties: true,
    party_columns: PartyColumns::WithReadState,
    party_section_label: "Disposition Results",
    detail_labels: LETTER_LABELS,
};

static INTERNAL_MEMO: KindProfile = KindProfile {
    title_prefix: None,
    has_tracking: true,
    has_function_line: true,
    framed_details: true,
    has_log_sections: true,
    separate_parties: false,
    party_columns: PartyColumns::WithReadState,
    party_section_label: "Expeditions",
    detail_labels: DetailLabels {
        reference: "Memo Number",
        sent: "Memo Date",
        sender: "Sender",
        function: "Position",
        subject: "Subject",
    },
};

static IMPORTANT_DOCUMENT: KindProfile = KindProfile {
    title_prefix: Some("Delivery Sheet"),
    has_tracking: false,
    has_function_line: false,
    framed_details: false,
    has_log_sections: false,
    separate_parties: false,
    party_columns: PartyColumns::Plain,
    party_section_label: "Internal Expedition",
    detail_labels: DetailLabels {
        reference: "Document Number",
        sent: "Sent Date",
        sender: "Author",
        function: "Position",
        subject: "Title",
    },
};

/// Identifying fields shared by every report kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    pub ref_number: String,
    pub sent: String,
    pub sender: String,
    pub subject: String,
    /// Role/function of the sender.  Empty when the payload omits it so the
    /// detail row can render a blank cell instead of dropping the slot.
    pub function: String,
}

/// Summary metadata attached to tracking-bearing report kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingBlock {
    pub id: String,
    pub received: String,
    pub deadline: String,
    pub archive: bool,
    pub agenda: String,
    pub filename: String,
    pub archive_code: String,
}

/// Party type discriminator.
///
/// Wire codes follow the upstream service: `1` is external, `2` is internal.
/// Any other code is preserved as [`PartyKind::Unrecognized`] so the
/// classifier can apply its drop-and-warn policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyKind {
    Internal,
    External,
    Unrecognized(i64),
}

impl PartyKind {
    /// Maps a wire code onto a discriminator.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PartyKind::External,
            2 => PartyKind::Internal,
            other => PartyKind::Unrecognized(other),
        }
    }
}

/// Read acknowledgement: either a plain flag or the date the entry was read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReadState {
    Flag(bool),
    Date(String),
}

impl ReadState {
    /// Cell text for the read column.
    pub fn display_text(&self) -> String {
        match self {
            ReadState::Flag(true) => "Yes".to_string(),
            ReadState::Flag(false) => "-".to_string(),
            ReadState::Date(date) => date.clone(),
        }
    }
}

impl Default for ReadState {
    fn default() -> Self {
        ReadState::Flag(false)
    }
}

/// One expedition log entry: a document sent to or received by a counterpart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartyRecord {
    pub date: String,
    pub name: String,
    pub kind: PartyKind,
    pub read: ReadState,
}

/// An instruction routing the document to a recipient for action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispositionRecord {
    pub name: String,
    pub note: String,
    pub date: String,
}

/// A recorded action taken in response to a disposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowupRecord {
    pub name: String,
    pub date: String,
    pub read: ReadState,
    pub note: String,
}

/// The fully normalized report, ready for composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub header: ReportHeader,
    pub tracking: Option<TrackingBlock>,
    pub parties: Vec<PartyRecord>,
    pub dispositions: Vec<DispositionRecord>,
    pub followups: Vec<FollowupRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_map_to_discriminators() {
        assert_eq!(PartyKind::from_code(1), PartyKind::External);
        assert_eq!(PartyKind::from_code(2), PartyKind::Internal);
        assert_eq!(PartyKind::from_code(0), PartyKind::Unrecognized(0));
        assert_eq!(PartyKind::from_code(7), PartyKind::Unrecognized(7));
    }

    #[test]
    fn read_state_display() {
        assert_eq!(ReadState::Flag(true).display_text(), "Yes");
        assert_eq!(ReadState::Flag(false).display_text(), "-");
        assert_eq!(
            ReadState::Date("2024-03-01".into()).display_text(),
            "2024-03-01"
        );
    }

    #[test]
    fn letter_kinds_separate_parties_and_track_reads() {
        for kind in [
            ReportKind::IncomingMail,
            ReportKind::GeneralLetter,
            ReportKind::SpecialLetter,
        ] {
            let profile = kind.profile();
            assert!(profile.separate_parties, "{kind:?}");
            assert!(profile.has_tracking, "{kind:?}");
            assert_eq!(profile.party_columns, PartyColumns::WithReadState);
            assert!(!profile.has_log_sections);
        }
    }

    #[test]
    fn memo_profile_carries_logs_and_function_line() {
        let profile = ReportKind::InternalMemo.profile();
        assert!(profile.has_log_sections);
        assert!(profile.has_function_line);
        assert!(profile.framed_details);
        assert!(!profile.separate_parties);
    }

    #[test]
    fn important_document_is_the_plain_column_kind() {
        let profile = ReportKind::ImportantDocument.profile();
        assert_eq!(profile.party_columns, PartyColumns::Plain);
        assert!(!profile.has_tracking);
        assert!(!profile.separate_parties);
        assert_eq!(profile.title_prefix, Some("Delivery Sheet"));
    }
}
