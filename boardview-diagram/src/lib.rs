//! Layout of a complete hand diagram for one board.
//!
//! The renderer produces a serializable [`LayoutArtifact`] describing the
//! four hands, the double-dummy panel, par and LoTT. Page code turns it into
//! markup; nothing here touches HTML.

mod layout;
mod render;
mod style;

pub use layout::{
    Diagram, DdSection, FitView, LayoutArtifact, LottPanel, NtSummary, ParLine, Placeholder,
    PlaceholderReason, RenderedRow, SeatPanel, SuitRow, TextSpan,
};
pub use render::DiagramRenderer;
pub use style::{Captions, DiagramStyle, SeatColors, StyleError, SuitColors};
