use std::fmt::Write;

use boardview_core::{BoardRecord, Deal, DealError, Position, SeatEmphasis, Suit};
use boardview_dds::{
    format_dd_table, DdCache, DdTable, Denomination, DoubleDummyResult, Fit, Lott, Optimum,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::layout::{
    DdSection, Diagram, FitView, LayoutArtifact, LottPanel, NtSummary, ParLine, Placeholder,
    PlaceholderReason, RenderedRow, SeatPanel, SuitRow, TextSpan,
};
use crate::DiagramStyle;

/// A contract level followed by a suit letter, e.g. `4H`
static LEVEL_SUIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([1-7])([SHDC])").expect("level suit pattern"));

/// Lays out boards as [`LayoutArtifact`]s.
///
/// Rendering is pure: the same inputs always give the same artifact.
#[derive(Debug, Clone, Default)]
pub struct DiagramRenderer {
    style: DiagramStyle,
}

impl DiagramRenderer {
    pub fn new(style: DiagramStyle) -> Self {
        DiagramRenderer { style }
    }

    pub fn style(&self) -> &DiagramStyle {
        &self.style
    }

    /// Render a board from its stored record.
    ///
    /// A missing record, a missing hand or a malformed hand gives a
    /// placeholder instead of a diagram.
    pub fn render(
        &self,
        record: Option<&BoardRecord>,
        board_number: u32,
        dd_result: Option<&DoubleDummyResult>,
        optimum: Option<&Optimum>,
        lott: Option<&Lott>,
    ) -> LayoutArtifact {
        match self.deal_for(record, board_number) {
            Ok(deal) => self.render_deal(&deal, dd_result, optimum, lott),
            Err(placeholder) => LayoutArtifact::Placeholder(placeholder),
        }
    }

    /// Render a board, taking its double-dummy entry from `cache`.
    ///
    /// Dealer and vulnerability missing from the record are taken from the
    /// cache entry. LoTT is computed from the hands when the entry has trick
    /// data but no stored LoTT. A board with no entry at all gets the
    /// `dd_not_available` caption in place of the table.
    pub fn render_board(
        &self,
        cache: &DdCache,
        event_id: &str,
        board_number: u32,
        record: Option<&BoardRecord>,
    ) -> LayoutArtifact {
        let analysis = cache.get(event_id, board_number);
        let record = record.map(|record| {
            let mut record = record.clone();
            if let Some(analysis) = analysis {
                record.dealer = record.dealer.or(analysis.dealer);
                record.vulnerability = record.vulnerability.or(analysis.vuln);
            }
            record
        });

        let deal = match self.deal_for(record.as_ref(), board_number) {
            Ok(deal) => deal,
            Err(placeholder) => return LayoutArtifact::Placeholder(placeholder),
        };

        let tricks = analysis.and_then(|a| a.tricks.as_ref());
        let optimum = analysis.and_then(|a| a.optimum.as_ref());
        let lott = analysis
            .and_then(|a| a.lott)
            .or_else(|| tricks.map(|t| Lott::compute(&deal, t)));

        let captions = &self.style.captions;
        let missing = match analysis {
            Some(_) => &captions.no_dd_data,
            None => &captions.dd_not_available,
        };
        self.layout(&deal, tricks, optimum, lott.as_ref(), missing)
    }

    /// Render an already validated deal
    pub fn render_deal(
        &self,
        deal: &Deal,
        dd_result: Option<&DoubleDummyResult>,
        optimum: Option<&Optimum>,
        lott: Option<&Lott>,
    ) -> LayoutArtifact {
        self.layout(deal, dd_result, optimum, lott, &self.style.captions.no_dd_data)
    }

    fn layout(
        &self,
        deal: &Deal,
        dd_result: Option<&DoubleDummyResult>,
        optimum: Option<&Optimum>,
        lott: Option<&Lott>,
        missing_dd: &str,
    ) -> LayoutArtifact {
        let date = deal.date().and_then(|date| {
            let mut text = String::new();
            write!(text, "{}", date.format(&self.style.date_format)).ok()?;
            Some(text)
        });

        LayoutArtifact::Diagram(Box::new(Diagram {
            board_number: deal.board_number(),
            dealer: deal.dealer(),
            vulnerability: deal.vulnerability(),
            date,
            seats: Position::ALL.map(|position| self.seat_panel(deal, position)),
            dd: self.dd_section(dd_result, optimum, missing_dd),
            lott: lott.map(|lott| self.lott_panel(lott)),
            viewer_url: self.style.viewer.url(deal),
        }))
    }

    fn deal_for(
        &self,
        record: Option<&BoardRecord>,
        board_number: u32,
    ) -> Result<Deal, Placeholder> {
        let captions = &self.style.captions;
        let (reason, message) = match record.map(|r| r.to_deal(board_number)) {
            Some(Ok(deal)) => return Ok(deal),
            None => (
                PlaceholderReason::HandDataNotFound,
                &captions.hand_data_not_found,
            ),
            Some(Err(DealError::InvalidHand { .. })) => (
                PlaceholderReason::InvalidHandFormat,
                &captions.invalid_hand_format,
            ),
            Some(Err(_)) => (
                PlaceholderReason::InvalidHandData,
                &captions.invalid_hand_data,
            ),
        };
        debug!(board = board_number, ?reason, "rendering placeholder");
        Err(Placeholder {
            reason,
            message: message.clone(),
        })
    }

    fn seat_panel(&self, deal: &Deal, position: Position) -> SeatPanel {
        let hand = deal.hand(position);
        let emphasis = SeatEmphasis::for_seat(position, deal.dealer(), deal.vulnerability());
        SeatPanel {
            position,
            hcp: hand.hcp(),
            emphasis,
            color: self.style.seat_colors.for_emphasis(emphasis).to_string(),
            suits: Suit::DISPLAY_ORDER.map(|suit| SuitRow {
                suit,
                symbol: suit.symbol(),
                holding: self.style.holding_text(hand.holding(suit)),
                color: self.style.suit_colors.for_suit(suit).to_string(),
            }),
        }
    }

    fn dd_section(
        &self,
        dd_result: Option<&DoubleDummyResult>,
        optimum: Option<&Optimum>,
        missing: &str,
    ) -> DdSection {
        let Some(result) = dd_result else {
            return DdSection::Missing {
                message: missing.to_string(),
            };
        };

        let table = format_dd_table(Some(result));
        let rows = match &table {
            DdTable::Available { rows } => rows
                .iter()
                .map(|row| RenderedRow {
                    position: row.position,
                    cells: row.cells.map(|cell| cell.render(&self.style.dd_markers)),
                })
                .collect(),
            DdTable::NotAvailable => Vec::new(),
        };
        let (ns, ew) = result.side_notrump_tricks();

        DdSection::Table {
            header: Denomination::TABLE_ORDER.map(|d| d.label()),
            rows,
            summary: NtSummary { ns, ew },
            par: optimum.map(|optimum| ParLine {
                label: self.style.captions.par.clone(),
                score: optimum.score,
                spans: self.suit_spans(&optimum.text),
            }),
        }
    }

    fn lott_panel(&self, lott: &Lott) -> LottPanel {
        let fit_view = |fit: &Fit| FitView {
            symbol: fit.suit.symbol(),
            color: self.style.suit_colors.for_suit(fit.suit).to_string(),
            length: fit.length,
        };
        LottPanel {
            title: self.style.captions.lott.clone(),
            total_tricks: lott.total_tricks,
            ns_fit: lott.ns_fit.as_ref().map(fit_view),
            ew_fit: lott.ew_fit.as_ref().map(fit_view),
        }
    }

    /// Split text into spans, turning `4H` into `4♥` and coloring every suit symbol
    fn suit_spans(&self, text: &str) -> Vec<TextSpan> {
        let text = LEVEL_SUIT.replace_all(text, |caps: &Captures| {
            match caps[2].chars().next().and_then(Suit::from_char) {
                Some(suit) => format!("{}{}", &caps[1], suit.symbol()),
                None => caps[0].to_string(),
            }
        });

        let mut spans = Vec::new();
        let mut plain = String::new();
        for c in text.chars() {
            let Some(suit) = Suit::ALL.into_iter().find(|suit| suit.symbol() == c) else {
                plain.push(c);
                continue;
            };
            if !plain.is_empty() {
                spans.push(TextSpan {
                    text: std::mem::take(&mut plain),
                    color: None,
                });
            }
            spans.push(TextSpan {
                text: c.to_string(),
                color: Some(self.style.suit_colors.for_suit(suit).to_string()),
            });
        }
        if !plain.is_empty() {
            spans.push(TextSpan {
                text: plain,
                color: None,
            });
        }
        spans
    }
}
