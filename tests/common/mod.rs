#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Once;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .try_init()
            .ok();
    });
}

/// An RSS item for fixture feeds. `link`/`pub_date` of `None` exercise the
/// missing-field paths.
pub struct RssItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl RssItem {
    pub fn new(title: &str, link: &str, pub_date: DateTime<Utc>) -> Self {
        Self {
            title: Some(title.to_string()),
            link: Some(link.to_string()),
            pub_date: Some(pub_date),
            description: None,
        }
    }
}

/// Build a minimal RSS 2.0 document from fixture items.
pub fn rss_feed(items: &[RssItem]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <rss version=\"2.0\"><channel><title>Fixture Feed</title>\n",
    );
    for item in items {
        xml.push_str("<item>");
        if let Some(title) = &item.title {
            xml.push_str(&format!("<title>{}</title>", title));
        }
        if let Some(link) = &item.link {
            xml.push_str(&format!("<link>{}</link>", link));
        }
        if let Some(date) = item.pub_date {
            xml.push_str(&format!(
                "<pubDate>{}</pubDate>",
                date.format("%a, %d %b %Y %H:%M:%S +0000")
            ));
        }
        if let Some(description) = &item.description {
            xml.push_str(&format!("<description>{}</description>", description));
        }
        xml.push_str("</item>\n");
    }
    xml.push_str("</channel></rss>\n");
    xml
}

/// Serve one HTTP response on a loopback port and return its URL. The
/// listener answers a single request, which is all a one-shot aggregation
/// run sends per source.
pub async fn serve_once(status: u16, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await;
            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\n\
                 Content-Type: application/rss+xml\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{}/feed.xml", addr)
}

/// A loopback URL with nothing listening behind it.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);
    format!("http://{}/feed.xml", addr)
}

/// Unique scratch path under the system temp directory.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("newsstand-test-{}-{}", std::process::id(), name))
}
