use boardview_core::{SeatEmphasis, Suit, VOID_MARKER};
use boardview_dds::{DdMarkers, NOT_AVAILABLE_TEXT};
use boardview_lin::ViewerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid diagram style: {0}")]
    Json(#[from] serde_json::Error),
}

/// Background colors for the seat name cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatColors {
    pub dealer: String,
    pub vulnerable: String,
    pub neutral: String,
}

impl Default for SeatColors {
    fn default() -> Self {
        SeatColors {
            dealer: "#f5c518".to_string(),
            vulnerable: "#d32f2f".to_string(),
            neutral: "#2e7d32".to_string(),
        }
    }
}

impl SeatColors {
    pub fn for_emphasis(&self, emphasis: SeatEmphasis) -> &str {
        match emphasis {
            SeatEmphasis::Dealer => &self.dealer,
            SeatEmphasis::Vulnerable => &self.vulnerable,
            SeatEmphasis::Neutral => &self.neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuitColors {
    pub red: String,
    pub black: String,
}

impl Default for SuitColors {
    fn default() -> Self {
        SuitColors {
            red: "#d00000".to_string(),
            black: "#000000".to_string(),
        }
    }
}

impl SuitColors {
    pub fn for_suit(&self, suit: Suit) -> &str {
        if suit.is_red() {
            &self.red
        } else {
            &self.black
        }
    }
}

/// Fixed texts shown in the diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Captions {
    pub hand_data_not_found: String,
    pub invalid_hand_data: String,
    pub invalid_hand_format: String,
    /// Shown in place of the trick table when no result was supplied
    pub no_dd_data: String,
    /// Shown when the results document has no entry for the board
    pub dd_not_available: String,
    pub par: String,
    pub lott: String,
}

impl Default for Captions {
    fn default() -> Self {
        Captions {
            hand_data_not_found: "Hand data not found".to_string(),
            invalid_hand_data: "Invalid hand data".to_string(),
            invalid_hand_format: "Invalid hand format".to_string(),
            no_dd_data: "No DD Data".to_string(),
            dd_not_available: NOT_AVAILABLE_TEXT.to_string(),
            par: "Par".to_string(),
            lott: "LoTT".to_string(),
        }
    }
}

/// Styling and text configuration for [`crate::DiagramRenderer`].
///
/// Every field has a default, so a JSON document only needs to name what it
/// changes:
///
/// ```
/// use boardview_diagram::DiagramStyle;
///
/// let style = DiagramStyle::from_json(r#"{"ten_as_digits": false}"#).unwrap();
/// assert!(!style.ten_as_digits);
/// assert_eq!(style.captions.no_dd_data, "No DD Data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramStyle {
    pub seat_colors: SeatColors,
    pub suit_colors: SuitColors,
    /// Holding text for a void suit
    pub void_marker: String,
    pub dd_markers: DdMarkers,
    /// Show the ten as `10` instead of `T`
    pub ten_as_digits: bool,
    /// chrono format string for the board date
    pub date_format: String,
    pub captions: Captions,
    pub viewer: ViewerConfig,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        DiagramStyle {
            seat_colors: SeatColors::default(),
            suit_colors: SuitColors::default(),
            void_marker: VOID_MARKER.to_string(),
            dd_markers: DdMarkers::default(),
            ten_as_digits: true,
            date_format: "%d.%m.%Y".to_string(),
            captions: Captions::default(),
            viewer: ViewerConfig::default(),
        }
    }
}

impl DiagramStyle {
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Display form of a holding: void marker, and `10` for the ten if enabled
    pub fn holding_text(&self, holding: &str) -> String {
        if holding.is_empty() {
            self.void_marker.clone()
        } else if self.ten_as_digits {
            holding.replace('T', "10")
        } else {
            holding.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "seat_colors": {"dealer": "gold"},
            "viewer": {"embed": true},
            "void_marker": "--"
        }"#;
        let style = DiagramStyle::from_json(json).unwrap();
        assert_eq!(style.seat_colors.dealer, "gold");
        assert_eq!(style.seat_colors.neutral, SeatColors::default().neutral);
        assert!(style.viewer.embed);
        assert_eq!(style.viewer.base_url, ViewerConfig::default().base_url);
        assert_eq!(style.void_marker, "--");
        assert!(style.ten_as_digits);
    }

    #[test]
    fn test_invalid_style() {
        assert!(DiagramStyle::from_json(r#"{"ten_as_digits": "yes"}"#).is_err());
    }

    #[test]
    fn test_holding_text() {
        let mut style = DiagramStyle::default();
        assert_eq!(style.holding_text("AKT2"), "AK1002");
        assert_eq!(style.holding_text(""), "-");
        style.ten_as_digits = false;
        assert_eq!(style.holding_text("AKT2"), "AKT2");
    }

    #[test]
    fn test_colors() {
        let style = DiagramStyle::default();
        assert_eq!(style.suit_colors.for_suit(Suit::Hearts), "#d00000");
        assert_eq!(style.suit_colors.for_suit(Suit::Clubs), "#000000");
        assert_eq!(style.seat_colors.for_emphasis(SeatEmphasis::Dealer), "#f5c518");
    }
}
