use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Snippet length forwarded to the analysis endpoint.
pub const SNIPPET_MAX_CHARS: usize = 200;

// Browser-like identity; some sites reject obvious non-browser clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";
const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

static BODY_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

// Tags whose text is never visible on the rendered page.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Upstream returned status {0}")]
    Upstream(reqwest::StatusCode),
    #[error("{0}")]
    Request(String),
    #[error("No text content found at the provided URL")]
    NoContent,
}

/// Shared outbound client: browser-like User-Agent, bounded timeouts,
/// transparent decompression via the enabled client features.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::ClientBuilder::new()
        .connect_timeout(std::time::Duration::from_secs(5))
        .timeout(std::time::Duration::from_secs(10))
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
}

/// Fetch `url` and return at most [`SNIPPET_MAX_CHARS`] characters of the
/// visible body text. Nothing is retried.
pub async fn scrape_text(client: &reqwest::Client, url: &str) -> Result<String, ScrapeError> {
    let target = normalize_url(url)?;

    let response = client
        .get(target)
        .header(reqwest::header::ACCEPT, ACCEPT)
        .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .header("DNT", "1")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ScrapeError::Request(format!("TimeoutError: {}", e))
            } else if e.is_connect() {
                ScrapeError::Request(format!("ConnectError: {}", e))
            } else {
                ScrapeError::Request(format!("RequestError: {}", e))
            }
        })?;

    if !response.status().is_success() {
        return Err(ScrapeError::Upstream(response.status()));
    }

    let html = response
        .text()
        .await
        .map_err(|e| ScrapeError::Request(e.to_string()))?;

    let text = extract_body_text(&html);
    if text.is_empty() {
        return Err(ScrapeError::NoContent);
    }

    Ok(truncate_chars(&text, SNIPPET_MAX_CHARS))
}

/// The validator accepts scheme-less input (`example.com`, `192.168.1.1`);
/// default those to http so the client can fetch them.
fn normalize_url(raw: &str) -> Result<Url, ScrapeError> {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{}", raw))
            .map_err(|e| ScrapeError::InvalidUrl(e.to_string())),
        Err(e) => Err(ScrapeError::InvalidUrl(e.to_string())),
    }
}

/// Visible text of the document body: walks the body subtree skipping
/// non-rendered tags, then collapses whitespace runs and trims.
pub fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Some(body) = document.select(&BODY_SEL).next() else {
        return String::new();
    };

    let mut out = String::new();
    collect_visible_text(body, &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_visible_text(el: ElementRef<'_>, out: &mut String) {
    use scraper::node::Node;

    if INVISIBLE_TAGS.contains(&el.value().name()) {
        return;
    }

    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(&*text.text);
                out.push(' ');
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_visible_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

/// Truncate to at most `max` characters on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
