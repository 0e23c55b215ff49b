mod lin;
mod viewer;

pub use lin::{
    dealer_code, encode, format_hand_lin, parse_lin, vulnerability_code, LinError,
};
pub use viewer::{build_viewer_url, ViewerConfig, DEFAULT_VIEWER_URL};
