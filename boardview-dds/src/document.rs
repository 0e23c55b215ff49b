use boardview_core::{Position, Vulnerability};
use serde::{Deserialize, Serialize};

use crate::{DoubleDummyResult, Lott};

/// Par result for a board, e.g. score `-450` with text `EW 5♥`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimum {
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub text: String,
}

/// One entry of the results document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardAnalysis {
    #[serde(default)]
    pub tricks: Option<DoubleDummyResult>,
    #[serde(default)]
    pub dealer: Option<Position>,
    #[serde(default, alias = "vulnerability")]
    pub vuln: Option<Vulnerability>,
    #[serde(default)]
    pub optimum: Option<Optimum>,
    #[serde(default)]
    pub lott: Option<Lott>,
}
