//! Catalog records.
//!
//! Wire structs mirror the JSON the catalog returns and stay private to this
//! module; callers only see the domain types produced by conversion.

use serde::{Deserialize, Serialize};

/// Minimal reference to a full record, as returned by the paged listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub name: String,
    pub detail_url: String,
}

/// One category (type) of an item, ordered by rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub rank: u32,
    pub label: String,
}

/// One base attribute (stat) of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub label: String,
    pub value: u32,
}

/// Full record for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub name: String,
    pub id: u32,
    pub height: f64,
    pub weight: f64,
    pub primary_image_url: Option<String>,
    pub secondary_image_url: Option<String>,
    pub categories: Vec<Category>,
    pub attributes: Vec<Attribute>,
}

impl ItemDetail {
    /// Lowest-ranked category, used for list colouring.
    pub fn primary_category(&self) -> Option<&Category> {
        self.categories.first()
    }
}

/// Display-ready list row: a summary joined with its detail.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub name: String,
    pub detail_url: String,
    pub primary_image_url: Option<String>,
    pub secondary_image_url: Option<String>,
    pub categories: Vec<Category>,
}

impl ListEntry {
    pub fn join(summary: CatalogSummary, detail: ItemDetail) -> Self {
        Self {
            name: summary.name,
            detail_url: summary.detail_url,
            primary_image_url: detail.primary_image_url,
            secondary_image_url: detail.secondary_image_url,
            categories: detail.categories,
        }
    }

    pub fn primary_category(&self) -> Option<&Category> {
        self.categories.first()
    }
}

/// Display form of a catalog name or label: "pikachu" -> "Pikachu".
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// -- Wire shapes ----------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryPage {
    results: Vec<SummaryRecord>,
}

#[derive(Debug, Deserialize)]
struct SummaryRecord {
    name: String,
    url: String,
}

impl SummaryPage {
    pub(crate) fn into_summaries(self) -> Vec<CatalogSummary> {
        self.results
            .into_iter()
            .map(|r| CatalogSummary {
                name: r.name,
                detail_url: r.url,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailRecord {
    name: String,
    id: u32,
    height: f64,
    weight: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    sprites: SpritesRecord,
    #[serde(default, deserialize_with = "null_as_default")]
    types: Vec<TypeSlotRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    stats: Vec<StatRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct SpritesRecord {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    back_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlotRecord {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedRecord,
}

#[derive(Debug, Deserialize)]
struct StatRecord {
    base_stat: u32,
    stat: NamedRecord,
}

#[derive(Debug, Deserialize)]
struct NamedRecord {
    name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<DetailRecord> for ItemDetail {
    fn from(record: DetailRecord) -> Self {
        let mut categories: Vec<Category> = record
            .types
            .into_iter()
            .map(|t| Category {
                rank: t.slot,
                label: t.kind.name,
            })
            .collect();
        categories.sort_by_key(|c| c.rank);

        let attributes = record
            .stats
            .into_iter()
            .map(|s| Attribute {
                label: s.stat.name,
                value: s.base_stat,
            })
            .collect();

        Self {
            name: record.name,
            id: record.id,
            height: record.height,
            weight: record.weight,
            primary_image_url: record.sprites.front_default,
            secondary_image_url: record.sprites.back_default,
            categories,
            attributes,
        }
    }
}
