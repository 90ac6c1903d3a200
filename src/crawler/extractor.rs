//! Field extraction from detail pages
//!
//! Each field is located and cleaned independently. A selector that matches
//! nothing leaves its field empty; it never aborts the record.

use crate::config::{LabelConfig, SelectorConfig};
use crate::movie::Movie;
use crate::{ConfigError, ConfigResult};
use scraper::{ElementRef, Html, Selector};

/// Compiled selectors and label phrases used to build a [`Movie`]
#[derive(Debug, Clone)]
pub struct ExtractRules {
    title: Selector,
    poster: Selector,
    poster_attr: String,
    trailer: Selector,
    trailer_attr: String,
    synopsis: Selector,
    description_anchor: Selector,
    description_offset: usize,
    metadata_lines: Selector,
    labels: LabelConfig,
}

impl ExtractRules {
    /// Compiles the selector table
    ///
    /// # Returns
    ///
    /// * `Ok(ExtractRules)` - Every selector compiled
    /// * `Err(ConfigError::InvalidSelector)` - A selector string is malformed
    pub fn new(selectors: &SelectorConfig, labels: &LabelConfig) -> ConfigResult<Self> {
        Ok(Self {
            title: compile(&selectors.title)?,
            poster: compile(&selectors.poster)?,
            poster_attr: selectors.poster_attr.clone(),
            trailer: compile(&selectors.trailer)?,
            trailer_attr: selectors.trailer_attr.clone(),
            synopsis: compile(&selectors.synopsis)?,
            description_anchor: compile(&selectors.description_anchor)?,
            description_offset: selectors.description_offset,
            metadata_lines: compile(&selectors.metadata_lines)?,
            labels: labels.clone(),
        })
    }

    /// Strips the configured trim characters from both ends
    fn trim(&self, text: &str) -> String {
        text.trim_matches(|c: char| self.labels.trim_chars.contains(c))
            .to_string()
    }
}

fn compile(selector: &str) -> ConfigResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", selector, e)))
}

/// A classified metadata line with its label removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataLine {
    Runtime(String),
    ReleaseDate(String),
}

/// Classifies one metadata line by label containment
///
/// The runtime label is checked first. The runtime value has its prefix and
/// every unit character removed; the release date only its prefix. Neither
/// value is trimmed.
pub fn classify_metadata_line(text: &str, labels: &LabelConfig) -> Option<MetadataLine> {
    if text.contains(&labels.runtime_label) {
        let runtime = text
            .replace(&labels.runtime_unit, "")
            .replace(&labels.runtime_prefix, "");
        Some(MetadataLine::Runtime(runtime))
    } else if text.contains(&labels.release_label) {
        Some(MetadataLine::ReleaseDate(
            text.replace(&labels.release_prefix, ""),
        ))
    } else {
        None
    }
}

/// Extracts one movie from a parsed detail page
///
/// `url` is copied into the record verbatim.
pub fn extract_movie(document: &Html, url: &str, rules: &ExtractRules) -> Movie {
    let mut movie = Movie {
        title: rules.trim(&text_of_all(document, &rules.title)),
        synopsis: rules.trim(&extract_synopsis(document, rules)),
        description: rules.trim(
            &extract_description(document, rules).replace(&rules.labels.description_heading, ""),
        ),
        detail_url: url.to_string(),
        poster_url: first_attr(document, &rules.poster, &rules.poster_attr),
        trailer_url: first_attr(document, &rules.trailer, &rules.trailer_attr),
        ..Movie::default()
    };

    // Assignment overwrites, so the last matching line for a label wins
    for line in document.select(&rules.metadata_lines) {
        let text: String = line.text().collect();
        match classify_metadata_line(&text, &rules.labels) {
            Some(MetadataLine::Runtime(runtime)) => movie.runtime_minutes = runtime,
            Some(MetadataLine::ReleaseDate(date)) => movie.release_date = date,
            None => {}
        }
    }

    tracing::trace!("Extracted {:?}", movie);
    movie
}

/// Parses a fetched body and extracts one movie from it
pub fn extract_movie_from_html(body: &str, url: &str, rules: &ExtractRules) -> Movie {
    let document = Html::parse_document(body);
    extract_movie(&document, url, rules)
}

/// Concatenated text of every matching element
fn text_of_all(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .flat_map(|element| element.text())
        .collect()
}

/// Attribute of the first matching element, empty if either is missing
fn first_attr(document: &Html, selector: &Selector, attr: &str) -> String {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

/// Own text of the synopsis elements, nested element text excluded
fn extract_synopsis(document: &Html, rules: &ExtractRules) -> String {
    document
        .select(&rules.synopsis)
        .flat_map(|element| element.children())
        .filter_map(|child| child.value().as_text())
        .map(|text| &**text)
        .collect()
}

/// Text of the element `description_offset` element siblings after each anchor
fn extract_description(document: &Html, rules: &ExtractRules) -> String {
    document
        .select(&rules.description_anchor)
        .filter_map(|anchor| nth_element_sibling(anchor, rules.description_offset))
        .flat_map(|element| element.text())
        .collect()
}

/// Walks `n` element siblings forward, skipping text and comment nodes
fn nth_element_sibling(element: ElementRef<'_>, n: usize) -> Option<ElementRef<'_>> {
    std::iter::successors(Some(element), |current| {
        current.next_siblings().find_map(ElementRef::wrap)
    })
    .nth(n)
}
