use boardview_core::{Position, SeatEmphasis, Suit, Vulnerability};
use serde::Serialize;

/// Result of rendering one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutArtifact {
    Placeholder(Placeholder),
    Diagram(Box<Diagram>),
}

impl LayoutArtifact {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, LayoutArtifact::Placeholder(_))
    }

    pub fn diagram(&self) -> Option<&Diagram> {
        match self {
            LayoutArtifact::Diagram(diagram) => Some(diagram),
            LayoutArtifact::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            LayoutArtifact::Placeholder(placeholder) => Some(placeholder),
            LayoutArtifact::Diagram(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderReason {
    /// No record exists for the board
    HandDataNotFound,
    /// A seat has no hand
    InvalidHandData,
    /// A hand is not four dot-separated suits
    InvalidHandFormat,
}

/// Shown instead of a diagram when the board cannot be drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub reason: PlaceholderReason,
    pub message: String,
}

/// A fully laid out hand diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagram {
    pub board_number: u32,
    pub dealer: Position,
    pub vulnerability: Vulnerability,
    pub date: Option<String>,
    /// N, E, S, W
    pub seats: [SeatPanel; 4],
    pub dd: DdSection,
    pub lott: Option<LottPanel>,
    pub viewer_url: String,
}

impl Diagram {
    pub fn seat(&self, position: Position) -> &SeatPanel {
        &self.seats[position.offset()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatPanel {
    pub position: Position,
    pub hcp: u32,
    pub emphasis: SeatEmphasis,
    pub color: String,
    /// S, H, D, C
    pub suits: [SuitRow; 4],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuitRow {
    pub suit: Suit,
    pub symbol: char,
    pub holding: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DdSection {
    Missing {
        message: String,
    },
    Table {
        /// Column headings: ♠ ♥ ♦ ♣ NT
        header: [String; 5],
        /// N, S, E, W
        rows: Vec<RenderedRow>,
        summary: NtSummary,
        par: Option<ParLine>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub position: Position,
    pub cells: [String; 5],
}

/// No-trump tricks per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NtSummary {
    pub ns: u8,
    pub ew: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParLine {
    pub label: String,
    pub score: Option<i32>,
    pub spans: Vec<TextSpan>,
}

impl ParLine {
    /// Contract text with the spans joined back together
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// A run of text; suit symbols carry their suit color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LottPanel {
    pub title: String,
    pub total_tricks: u8,
    pub ns_fit: Option<FitView>,
    pub ew_fit: Option<FitView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitView {
    pub symbol: char,
    pub color: String,
    pub length: u8,
}
