//! Share Links
//!
//! Builds third-party share URLs for the current recipe page.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Twitter,
    Pinterest,
    WhatsApp,
}

impl Platform {
    /// Parse a `data-platform` attribute
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "facebook" => Some(Platform::Facebook),
            "twitter" => Some(Platform::Twitter),
            "pinterest" => Some(Platform::Pinterest),
            "whatsapp" => Some(Platform::WhatsApp),
            _ => None,
        }
    }
}

/// What is being shared
pub struct SharedPage<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub image: &'a str,
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn share_url(platform: Platform, page: &SharedPage) -> String {
    let url = encode(page.url);
    let title = encode(page.title);
    match platform {
        Platform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        Platform::Twitter => format!("https://twitter.com/intent/tweet?url={}&text={}", url, title),
        Platform::Pinterest => format!(
            "https://pinterest.com/pin/create/button/?url={}&media={}&description={}",
            url,
            encode(page.image),
            title
        ),
        Platform::WhatsApp => format!("https://wa.me/?text={}%20{}", title, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: SharedPage<'static> = SharedPage {
        url: "https://example.com/recipes/42/",
        title: "Mom's Pie & Tea",
        image: "",
    };

    #[test]
    fn test_platform_from_attr() {
        assert_eq!(Platform::from_attr("whatsapp"), Some(Platform::WhatsApp));
        assert_eq!(Platform::from_attr("myspace"), None);
    }

    #[test]
    fn test_twitter_url_encodes_components() {
        assert_eq!(
            share_url(Platform::Twitter, &PAGE),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Frecipes%2F42%2F&text=Mom's%20Pie%20%26%20Tea"
        );
    }

    #[test]
    fn test_whatsapp_puts_title_first() {
        let url = share_url(Platform::WhatsApp, &PAGE);
        assert!(url.starts_with("https://wa.me/?text=Mom's%20Pie"));
        assert!(url.ends_with("%20https%3A%2F%2Fexample.com%2Frecipes%2F42%2F"));
    }
}
