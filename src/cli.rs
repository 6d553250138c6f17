//! Headless `list` and `show` commands.
//!
//! Both drive the same synchronizers as the browser and wait for them to
//! settle, so output matches what the screens would show.

use anyhow::{anyhow, Result};
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::catalog::{capitalize, CatalogClient, ItemDetail, ListEntry};
use crate::params::{RouteParams, PARAM_NAME};
use crate::sync::{DetailSynchronizer, ListSynchronizer, SyncState};

pub const NO_SELECTION_MESSAGE: &str = "No Pokemon selected.";

/// Outcome of looking up one name.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    NoSelection,
    Found(ItemDetail),
    Failed { key: String, message: String },
}

/// Fetch and join the first page.
pub async fn list(client: CatalogClient, page_size: u32) -> Result<Vec<ListEntry>> {
    let mut sync = ListSynchronizer::new(client, Handle::current(), page_size);
    let rx = sync.subscribe();
    sync.activate();
    let settled = wait_settled(rx).await;
    sync.dispose();

    match settled? {
        SyncState::Ready(entries) => Ok(entries),
        SyncState::Error(message) => Err(anyhow!(message)),
        _ => Err(anyhow!("List fetch ended without a result")),
    }
}

/// Look up one item the way the detail screen would.
///
/// `names` is treated as a multi-valued route parameter: the first name wins
/// and no names means nothing is selected.
pub async fn show(client: CatalogClient, names: &[String]) -> Result<Lookup> {
    let mut route = RouteParams::new();
    route.insert(PARAM_NAME, names.to_vec());
    let key = route.key();
    if key.is_empty() {
        return Ok(Lookup::NoSelection);
    }

    let mut sync = DetailSynchronizer::new(client, Handle::current());
    let rx = sync.subscribe();
    sync.set_key(&key);
    let settled = wait_settled(rx).await;
    sync.dispose();

    Ok(match settled? {
        SyncState::Ready(detail) => Lookup::Found(detail),
        SyncState::Error(message) => Lookup::Failed { key, message },
        _ => Lookup::NoSelection,
    })
}

async fn wait_settled<T: Clone>(mut rx: watch::Receiver<SyncState<T>>) -> Result<SyncState<T>> {
    let state = rx
        .wait_for(SyncState::is_settled)
        .await
        .map_err(|_| anyhow!("Synchronizer dropped before settling"))?;
    Ok(state.clone())
}

/// One line per entry: position, name and categories.
pub fn format_list(entries: &[ListEntry]) -> String {
    if entries.is_empty() {
        return "No entries.\n".to_string();
    }
    let width = entries
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let categories: Vec<&str> = entry
                .categories
                .iter()
                .map(|category| category.label.as_str())
                .collect();
            format!(
                "{:>3}. {:<width$}  {}\n",
                index + 1,
                capitalize(&entry.name),
                categories.join("/"),
            )
        })
        .collect()
}

pub fn format_detail(detail: &ItemDetail) -> String {
    let mut lines = vec![
        format!("{} #{}", capitalize(&detail.name), detail.id),
        format!("Height: {}  Weight: {}", detail.height, detail.weight),
    ];
    if let Some(url) = &detail.primary_image_url {
        lines.push(format!("Image: {url}"));
    }
    if let Some(url) = &detail.secondary_image_url {
        lines.push(format!("Back: {url}"));
    }
    if !detail.categories.is_empty() {
        let labels: Vec<String> = detail
            .categories
            .iter()
            .map(|category| capitalize(&category.label))
            .collect();
        lines.push(format!("Types: {}", labels.join(", ")));
    }
    lines.extend(
        detail
            .attributes
            .iter()
            .map(|attribute| format!("  {:<16}{:>4}", attribute.label, attribute.value)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Attribute, Category};

    fn category(rank: u32, label: &str) -> Category {
        Category {
            rank,
            label: label.to_string(),
        }
    }

    #[test]
    fn list_lines_are_numbered_in_order() {
        let entries = vec![
            ListEntry {
                name: "bulbasaur".into(),
                detail_url: "https://pokeapi.co/api/v2/pokemon/1/".into(),
                primary_image_url: None,
                secondary_image_url: None,
                categories: vec![category(1, "grass"), category(2, "poison")],
            },
            ListEntry {
                name: "ivysaur".into(),
                detail_url: "https://pokeapi.co/api/v2/pokemon/2/".into(),
                primary_image_url: None,
                secondary_image_url: None,
                categories: vec![category(1, "grass")],
            },
        ];

        let out = format_list(&entries);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  1. Bulbasaur  grass/poison");
        assert_eq!(lines[1], "  2. Ivysaur    grass");
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(format_list(&[]), "No entries.\n");
    }

    #[test]
    fn detail_block() {
        let detail = ItemDetail {
            name: "pikachu".into(),
            id: 25,
            height: 4.0,
            weight: 60.0,
            primary_image_url: None,
            secondary_image_url: None,
            categories: vec![category(1, "electric")],
            attributes: vec![Attribute {
                label: "hp".into(),
                value: 35,
            }],
        };

        let out = format_detail(&detail);
        assert!(out.starts_with("Pikachu #25\n"));
        assert!(out.contains("Height: 4  Weight: 60\n"));
        assert!(out.contains("Types: Electric\n"));
        assert!(out.contains("  hp                35\n"));
        assert!(!out.contains("Image:"));
    }

    #[test]
    fn detail_block_with_images_and_stats() {
        let detail = ItemDetail {
            name: "pikachu".into(),
            id: 25,
            height: 4.0,
            weight: 60.0,
            primary_image_url: Some("https://img.example/25.png".into()),
            secondary_image_url: Some("https://img.example/back/25.png".into()),
            categories: vec![category(1, "electric"), category(2, "fairy")],
            attributes: vec![
                Attribute {
                    label: "hp".into(),
                    value: 35,
                },
                Attribute {
                    label: "speed".into(),
                    value: 90,
                },
            ],
        };

        assert_eq!(
            format_detail(&detail),
            "Pikachu #25\n\
             Height: 4  Weight: 60\n\
             Image: https://img.example/25.png\n\
             Back: https://img.example/back/25.png\n\
             Types: Electric, Fairy\n  \
             hp                35\n  \
             speed             90\n"
        );
    }

    #[tokio::test]
    async fn show_without_names_is_no_selection() {
        let config = crate::config::CatalogConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..Default::default()
        };
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(show(client.clone(), &[]).await.unwrap(), Lookup::NoSelection);
        let blank = vec![String::new(), "pikachu".to_string()];
        assert_eq!(show(client, &blank).await.unwrap(), Lookup::NoSelection);
    }
}
