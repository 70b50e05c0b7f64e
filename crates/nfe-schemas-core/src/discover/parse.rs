//! Select the anchors of one titled section of the portal page.
//!
//! The page is a flat sequence of section headings followed by the content
//! of each section. Headings and anchors are visited together in document
//! order; anchors between the start heading and the end heading belong to
//! the section.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{DiscoverError, DownloadLink};
use crate::config::SectionMarkers;

/// Parses `html` and returns the links of the section delimited by `markers`,
/// resolved against `base`, in document order and without deduplication.
///
/// Both headings must be present; a missing one yields
/// [`DiscoverError::SectionNotFound`]. Anchors without `href` are skipped.
pub fn parse_links(
    html: &str,
    markers: &SectionMarkers,
    base: &Url,
) -> Result<Vec<DownloadLink>, DiscoverError> {
    let heading = selector(&markers.heading_selector)?;
    let heading_or_anchor = selector(&format!("{}, a", markers.heading_selector))?;

    let start_title = normalize_ws(&markers.start_title);
    let end_title = normalize_ws(&markers.end_title);

    let document = Html::parse_document(html);
    let mut in_section = false;
    let mut closed = false;
    let mut links = Vec::new();

    for element in document.select(&heading_or_anchor) {
        if heading.matches(&element) {
            let title = element_text(&element);
            if !in_section && title == start_title {
                in_section = true;
            } else if in_section && title == end_title {
                closed = true;
                break;
            }
            continue;
        }
        if !in_section {
            continue;
        }
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let link =
            DownloadLink::resolve(base, href).map_err(|source| DiscoverError::InvalidLink {
                href: href.trim().to_string(),
                source,
            })?;
        links.push(link);
    }

    if !in_section {
        return Err(DiscoverError::SectionNotFound {
            marker: markers.start_title.clone(),
        });
    }
    if !closed {
        return Err(DiscoverError::SectionNotFound {
            marker: markers.end_title.clone(),
        });
    }
    Ok(links)
}

fn selector(css: &str) -> Result<Selector, DiscoverError> {
    Selector::parse(css).map_err(|e| DiscoverError::InvalidSelector {
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

fn element_text(element: &ElementRef<'_>) -> String {
    normalize_ws(&element.text().collect::<String>())
}

/// Collapses runs of whitespace to one space and trims the ends.
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
