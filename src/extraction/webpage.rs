// src/extraction/webpage.rs
//! URL fetching with CORS-proxy fallbacks, plus HTML-to-text cleanup.

use std::time::Duration;

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};
use tracing::{debug, info, warn};

use crate::errors::ExtractionError;
use crate::extraction::ContentExtractor;

const DIRECT_TIMEOUT: Duration = Duration::from_secs(100);
const PROXY_TIMEOUT: Duration = Duration::from_secs(150);
const TITLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pages shorter than this after cleanup are almost certainly a bot wall or
/// an error page, not a job posting
const MIN_CONTENT_CHARS: usize = 100;

/// Markup that never carries posting content
const SKIP_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "aside"];

impl ContentExtractor {
    /// Fetch a job posting page and reduce it to clean visible text.
    ///
    /// Tries the URL directly first, then each proxy in order, stopping at
    /// the first 200.
    pub(crate) async fn extract_from_url(&self, url: &str) -> Result<String, ExtractionError> {
        info!("Fetching job post: {}", url);

        let html = self
            .fetch_page(url)
            .await
            .ok_or(ExtractionError::UnreachableUrl)?;

        let text = visible_text(&html);
        if text.chars().count() < MIN_CONTENT_CHARS {
            return Err(ExtractionError::InsufficientContent);
        }

        Ok(text)
    }

    async fn fetch_page(&self, url: &str) -> Option<String> {
        match self.get_body(url, DIRECT_TIMEOUT).await {
            Some(body) => return Some(body),
            None => warn!("Direct fetch failed, falling back to proxies: {}", url),
        }

        for proxy_url in self.proxy_urls(url) {
            debug!("Trying proxy fetch: {}", proxy_url);
            if let Some(body) = self.get_body(&proxy_url, PROXY_TIMEOUT).await {
                return Some(body);
            }
        }

        None
    }

    async fn get_body(&self, url: &str, timeout: Duration) -> Option<String> {
        let mut request = self.client.get(url).timeout(timeout);
        if let Some(key) = &self.proxy_api_key {
            request = request.header("x-cors-api-key", key);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Fetch failed for {}: {}", url, e);
                return None;
            }
        };

        if response.status().as_u16() != 200 {
            debug!("Fetch returned {} for {}", response.status(), url);
            return None;
        }

        response.text().await.ok()
    }

    /// Best-effort `<title>` lookup for the URL preview endpoint
    pub async fn page_title(&self, url: &str) -> Option<String> {
        let response = self
            .client
            .get(url)
            .timeout(TITLE_TIMEOUT)
            .send()
            .await
            .ok()?;
        if response.status().as_u16() != 200 {
            return None;
        }
        let html = response.text().await.ok()?;

        let document = Html::parse_document(&html);
        let selector = Selector::parse("title").ok()?;
        let title = document
            .select(&selector)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        (!title.is_empty()).then_some(title)
    }

    /// Complete the configured proxy chain for a target URL, target
    /// percent-encoded
    fn proxy_urls(&self, url: &str) -> Vec<String> {
        let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
        self.proxy_prefixes
            .iter()
            .map(|prefix| format!("{}{}", prefix, encoded))
            .collect()
    }
}

/// Ordered fallback chain of public CORS proxies
pub(crate) fn default_proxy_prefixes() -> Vec<String> {
    vec![
        "https://proxy.cors.sh/".to_string(),
        "https://api.allorigins.win/raw?url=".to_string(),
        "https://corsproxy.io/?".to_string(),
    ]
}

/// Extract the visible text of an HTML document, dropping script/style and
/// structural chrome, with whitespace collapsed to single spaces.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) if SKIP_TAGS.contains(&element.name()) => return,
        Node::Text(text) => {
            out.push_str(text);
            out.push(' ');
        }
        _ => {}
    }

    for child in node.children() {
        collect_text(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP response on a loopback port and return the
    /// server's base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });

        format!("http://{}", addr)
    }

    const POSTING_PAGE: &str = "<html><body><script>alert(1)</script>\
        <p>Job description text padded to exceed one hundred characters for the minimum content length check in the URL extraction path.</p>\
        </body></html>";

    #[tokio::test]
    async fn test_url_extraction_falls_back_to_proxy_when_direct_fetch_fails() {
        let direct = serve_once("403 Forbidden", "denied").await;
        let proxy = serve_once("200 OK", POSTING_PAGE).await;

        let extractor =
            ContentExtractor::with_proxy_prefixes(None, vec![format!("{}/?", proxy)]);
        let text = extractor
            .extract_from_url(&direct)
            .await
            .expect("proxy should serve the page");

        assert!(!text.contains("alert(1)"));
        assert!(text.contains("Job description text padded"));
        assert!(text.chars().count() >= MIN_CONTENT_CHARS);
    }

    #[tokio::test]
    async fn test_url_extraction_fails_when_direct_and_proxies_fail() {
        let direct = serve_once("403 Forbidden", "denied").await;
        let proxy = serve_once("404 Not Found", "missing").await;

        let extractor =
            ContentExtractor::with_proxy_prefixes(None, vec![format!("{}/?", proxy)]);
        let err = extractor
            .extract_from_url(&direct)
            .await
            .expect_err("no source should succeed");

        assert!(matches!(err, ExtractionError::UnreachableUrl));
    }

    #[test]
    fn test_visible_text_strips_non_content_markup() {
        let html = "<html><head><title>Job</title><style>body{color:red}</style></head>\
                    <body><nav>Home | Jobs</nav><script>alert(1)</script>\
                    <p>Job description text padded to exceed one hundred characters for the minimum content length check in the URL extraction path.</p>\
                    <footer>© 2024</footer></body></html>";
        let text = visible_text(html);

        assert!(!text.contains("color:red"));
        assert!(!text.contains("Home | Jobs"));
        assert!(!text.contains("alert(1)"));
        assert!(!text.contains("© 2024"));
        assert!(text.contains("Job description text padded"));
        assert!(text.chars().count() >= MIN_CONTENT_CHARS);
    }

    #[test]
    fn test_visible_text_collapses_whitespace() {
        let html = "<p>Senior\n\n   Backend\t\tEngineer</p>";
        assert_eq!(visible_text(html), "Senior Backend Engineer");
    }

    #[test]
    fn test_proxy_chain_order_and_encoding() {
        let extractor = ContentExtractor::new(None);
        let urls = extractor.proxy_urls("https://example.com/jobs?id=42&ref=a b");
        assert_eq!(urls.len(), 3);
        assert!(urls[0].starts_with("https://proxy.cors.sh/"));
        assert!(urls[1].starts_with("https://api.allorigins.win/raw?url="));
        assert!(urls[2].starts_with("https://corsproxy.io/?"));
        // The target URL must not leak raw separators into the proxy URL
        assert!(urls[0].contains("https%3A%2F%2Fexample.com%2Fjobs%3Fid%3D42%26ref%3Da+b"));
    }
}
