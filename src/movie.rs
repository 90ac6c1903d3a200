//! The record produced for every detail page

use serde::{Deserialize, Serialize};

/// One movie extracted from a detail page
///
/// Field order is the serialized order. Every field is plain text; anything
/// the page does not carry is an empty string rather than an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title
    #[serde(rename = "Name")]
    pub title: String,

    /// Short promotional text next to the poster
    #[serde(rename = "Desc")]
    pub synopsis: String,

    /// Long-form plot description
    #[serde(rename = "Info")]
    pub description: String,

    /// The detail page this record was extracted from
    #[serde(rename = "Url")]
    pub detail_url: String,

    #[serde(rename = "ImgUrl")]
    pub poster_url: String,

    #[serde(rename = "VideoUrl")]
    pub trailer_url: String,

    /// Runtime with its label and unit removed, e.g. "120"
    #[serde(rename = "Length")]
    pub runtime_minutes: String,

    #[serde(rename = "Date")]
    pub release_date: String,
}
