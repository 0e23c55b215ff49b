use boardview_core::Deal;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::encode;

/// Hand viewer page used when no other base URL is configured
pub const DEFAULT_VIEWER_URL: &str = "https://www.bridgebase.com/tools/handviewer.html";

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where and how viewer links are built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub base_url: String,
    /// Append `bbo=y` for the iframe-embeddable page
    pub embed: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            base_url: DEFAULT_VIEWER_URL.to_string(),
            embed: false,
        }
    }
}

impl ViewerConfig {
    /// Default viewer, iframe-embeddable variant
    pub fn embedded() -> Self {
        ViewerConfig {
            embed: true,
            ..Default::default()
        }
    }

    /// Link for an already encoded LIN string
    pub fn url_for_lin(&self, lin: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{}lin={}",
            self.base_url,
            separator,
            utf8_percent_encode(lin, URI_COMPONENT)
        );
        if self.embed {
            url.push_str("&bbo=y");
        }
        url
    }

    pub fn url(&self, deal: &Deal) -> String {
        self.url_for_lin(&encode(deal))
    }
}

/// Viewer link for a deal using the default viewer
pub fn build_viewer_url(deal: &Deal) -> String {
    ViewerConfig::default().url(deal)
}
