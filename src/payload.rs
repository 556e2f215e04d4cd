//! Inbound payload deserialization and validation.
//!
//! The payload mirrors the JSON body one request carries: camelCase keys,
//! optional per-kind fields, and loosely typed list entries.  Validation is
//! explicit rather than coercive — the first missing required field aborts
//! with an error naming it, and absent optional fields become explicit empty
//! values so downstream row builders render blank cells consistently.

use serde::Deserialize;

use crate::error::Error;
use crate::model::{
    DispositionRecord, FollowupRecord, PartyKind, PartyRecord, ReadState, Report, ReportHeader,
    ReportKind, TrackingBlock,
};

/// One party/expedition entry as carried on the wire.
///
/// List entries default aggressively instead of failing: a record with a
/// missing or unknown `type` code is excluded later by the classifier, which
/// is a warning, not a request failure.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PartyPayload {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_code: i64,
    #[serde(default)]
    pub read: ReadState,
}

/// One disposition entry as carried on the wire.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DispositionPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub date: String,
}

/// One follow-up entry as carried on the wire.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct FollowupPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub read: ReadState,
    #[serde(default)]
    pub note: String,
}

/// The JSON-shaped report payload, one per request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub id: Option<String>,
    pub title: Option<String>,
    pub ref_number: Option<String>,
    pub sent: Option<String>,
    pub sender: Option<String>,
    pub subject: Option<String>,
    pub function: Option<String>,
    pub received: Option<String>,
    pub deadline: Option<String>,
    pub archive: Option<bool>,
    pub agenda: Option<String>,
    pub filename: Option<String>,
    pub archive_code: Option<String>,
    #[serde(default)]
    pub expeditions: Vec<PartyPayload>,
    #[serde(default)]
    pub dispositions: Vec<DispositionPayload>,
    #[serde(default)]
    pub followups: Vec<FollowupPayload>,
}

fn require(value: Option<String>, field: &'static str) -> Result<String, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Validation { field }),
    }
}

impl ReportPayload {
    /// Parses a payload from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a payload from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    /// Normalizes the payload into a canonical [`Report`] for `kind`.
    ///
    /// Required fields are checked in declaration order: `title`,
    /// `refNumber`, `sent`, `sender`, `subject`, then — for tracking-bearing
    /// kinds — `received`, `deadline`, `agenda`, `filename`.  The first
    /// missing one aborts construction.
    pub fn into_report(self, kind: ReportKind) -> Result<Report, Error> {
        let profile = kind.profile();

        let header = ReportHeader {
            title: require(self.title, "title")?,
            ref_number: require(self.ref_number, "refNumber")?,
            sent: require(self.sent, "sent")?,
            sender: require(self.sender, "sender")?,
            subject: require(self.subject, "subject")?,
            function: self.function.unwrap_or_default(),
        };

        let tracking = if profile.has_tracking {
            Some(TrackingBlock {
                id: self.id.unwrap_or_default(),
                received: require(self.received, "received")?,
                deadline: require(self.deadline, "deadline")?,
                archive: self.archive.unwrap_or(false),
                agenda: require(self.agenda, "agenda")?,
                filename: require(self.filename, "filename")?,
                archive_code: self.archive_code.unwrap_or_default(),
            })
        } else {
            None
        };

        let parties = self
            .expeditions
            .into_iter()
            .map(|entry| PartyRecord {
                date: entry.date,
                name: entry.name,
                kind: PartyKind::from_code(entry.type_code),
                read: entry.read,
            })
            .collect();

        let dispositions = self
            .dispositions
            .into_iter()
            .map(|entry| DispositionRecord {
                name: entry.name,
                note: entry.note,
                date: entry.date,
            })
            .collect();

        let followups = self
            .followups
            .into_iter()
            .map(|entry| FollowupRecord {
                name: entry.name,
                date: entry.date,
                read: entry.read,
                note: entry.note,
            })
            .collect();

        Ok(Report {
            kind,
            header,
            tracking,
            parties,
            dispositions,
            followups,
        })
    }
}
