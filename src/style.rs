//! Position-dependent style rules for the report tables.
//!
//! Every table in the document tree is tagged with a [`RuleSet`], and the
//! renderer queries it with explicit row/boundary indices.  All functions are
//! stateless and total: the same arguments always yield the same result, and
//! indices past the end of a table are answered rather than rejected, so the
//! rules can be unit-tested without building a table.
//!
//! Horizontal rules are addressed by *boundary* index: boundary `0` lies
//! above the first row, boundary `i` between rows `i - 1` and `i`, and
//! boundary `row_count` below the last row.  Fill and padding are addressed
//! by row index.

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fill used behind table header rows.
pub const HEADER_FILL: Rgb = Rgb(0xCC, 0xCC, 0xCC);

/// Color of the light separator rules.
pub const RULE_COLOR: Rgb = Rgb(0xAA, 0xAA, 0xAA);

const DEFAULT_PADDING: f64 = 2.0;

/// Identifies the style policy applied to a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleSet {
    /// Party/expedition lists: shaded header, light rules under the data
    /// rows, no vertical rules.
    PartyList,
    /// Tracking summary: alternating horizontal and vertical rules.
    TrackingSummary,
    /// Disposition log: like [`RuleSet::PartyList`] but with dashed rules.
    Dispositions,
    /// Follow-up log: one rule at the start of each four-row block.
    Followups,
    /// Report-detail key/value block: a single bottom border.
    DetailBlock,
    /// Memo-style detail block framed by blank rows.
    MemoDetailBlock,
}

impl RuleSet {
    /// Width of the horizontal rule at the given boundary.
    pub fn horizontal_rule_width(self, boundary: usize, row_count: usize) -> f64 {
        match self {
            RuleSet::PartyList | RuleSet::Dispositions => {
                if boundary > 1 {
                    1.0
                } else {
                    0.0
                }
            }
            RuleSet::TrackingSummary => ((boundary + 1) % 2) as f64,
            RuleSet::Followups => {
                if boundary % 4 == 0 {
                    1.0
                } else {
                    0.0
                }
            }
            RuleSet::DetailBlock => {
                if boundary == row_count {
                    1.0
                } else {
                    0.0
                }
            }
            RuleSet::MemoDetailBlock => {
                if boundary % 8 == 0 {
                    1.0
                } else if boundary % 6 == 1 {
                    2.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Width of the vertical rule at the given boundary.
    pub fn vertical_rule_width(self, boundary: usize) -> f64 {
        match self {
            RuleSet::TrackingSummary => ((boundary + 1) % 2) as f64,
            _ => 0.0,
        }
    }

    /// Color of horizontal rules, where the policy overrides the default.
    pub fn horizontal_rule_color(self) -> Option<Rgb> {
        match self {
            RuleSet::PartyList | RuleSet::Dispositions | RuleSet::Followups => Some(RULE_COLOR),
            _ => None,
        }
    }

    /// Dash length for horizontal rules, if the policy draws dashed rules.
    pub fn horizontal_rule_dash(self) -> Option<f64> {
        match self {
            RuleSet::Dispositions => Some(2.0),
            _ => None,
        }
    }

    /// Background fill for the given row.
    pub fn fill_color(self, row: usize) -> Option<Rgb> {
        match self {
            RuleSet::PartyList | RuleSet::Dispositions => {
                if row == 0 {
                    Some(HEADER_FILL)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Padding above the given row's content, in layout units.
    pub fn padding_top(self, row: usize) -> f64 {
        match self {
            RuleSet::PartyList | RuleSet::Dispositions => 5.0,
            RuleSet::TrackingSummary => 3.0,
            RuleSet::Followups => {
                if row % 4 == 0 {
                    4.0
                } else {
                    0.0
                }
            }
            RuleSet::DetailBlock => DEFAULT_PADDING,
            RuleSet::MemoDetailBlock => {
                if row == 2 {
                    5.0
                } else {
                    1.0
                }
            }
        }
    }

    /// Padding below the given row's content, in layout units.
    pub fn padding_bottom(self, row: usize) -> f64 {
        match self {
            RuleSet::PartyList | RuleSet::Dispositions => 2.0,
            RuleSet::TrackingSummary => 0.0,
            RuleSet::Followups => {
                if row % 4 == 3 {
                    2.0
                } else {
                    0.0
                }
            }
            RuleSet::DetailBlock => DEFAULT_PADDING,
            RuleSet::MemoDetailBlock => {
                if row == 6 {
                    4.0
                } else {
                    1.0
                }
            }
        }
    }

    /// Whether the policy draws vertical rules at all.
    pub fn has_vertical_rules(self) -> bool {
        matches!(self, RuleSet::TrackingSummary)
    }

    /// Whether the policy draws any rule for a table with `row_count` rows.
    pub fn draws_rules(self, row_count: usize) -> bool {
        (0..=row_count).any(|boundary| {
            self.horizontal_rule_width(boundary, row_count) > 0.0
                || self.vertical_rule_width(boundary) > 0.0
        })
    }
}
