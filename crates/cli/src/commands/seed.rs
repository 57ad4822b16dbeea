//! Seed the backend with menu items and team members from YAML.
//!
//! ```yaml
//! menu_items:
//!   - name: Nasi Goreng
//!     description: Nasi goreng kampung dengan telur mata sapi
//!     price: 25000
//!     category: Main
//!     is_featured: true
//! team_members:
//!   - name: Sari
//!     role: Head Chef
//!     instagram: "@sari.masak"
//!     display_order: 1
//! ```
//!
//! Ids and timestamps are left to the backend. The whole file is validated
//! before the first insert.

use std::path::Path;

use meteen_core::MenuCategory;
use meteen_site::supabase::{DataSource, Table};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::CliError;

#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub menu_items: Vec<MenuItemSeed>,
    #[serde(default)]
    pub team_members: Vec<TeamMemberSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuItemSeed {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamMemberSeed {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Problems that would make the inserted rows unusable.
///
/// Categories outside the fixed set are allowed, since the menu page still
/// shows them under `All`, but they are logged.
#[must_use]
pub fn validate(seed: &SeedFile) -> Vec<String> {
    let mut errors = Vec::new();

    for (i, item) in seed.menu_items.iter().enumerate() {
        if item.name.trim().is_empty() {
            errors.push(format!("menu_items[{i}]: name is empty"));
        }
        if item.price.is_sign_negative() {
            errors.push(format!("menu_items[{i}]: price {} is negative", item.price));
        }
        match item.category.parse::<MenuCategory>() {
            Ok(category) if category.is_wildcard() => {
                errors.push(format!("menu_items[{i}]: '{}' is not a real category", item.category));
            }
            Ok(_) => {}
            Err(_) => warn!(
                index = i,
                category = %item.category,
                "Category is not one of the menu page's filters"
            ),
        }
    }

    for (i, member) in seed.team_members.iter().enumerate() {
        if member.name.trim().is_empty() {
            errors.push(format!("team_members[{i}]: name is empty"));
        }
        if member.role.trim().is_empty() {
            errors.push(format!("team_members[{i}]: role is empty"));
        }
    }

    errors
}

/// Validate `seed` and insert every row, menu items first.
///
/// # Errors
///
/// Returns `CliError::Seed` without inserting anything if validation fails,
/// or the first backend error. Rows inserted before a backend error stay.
pub async fn insert_all(source: &dyn DataSource, seed: &SeedFile) -> Result<(), CliError> {
    let errors = validate(seed);
    if !errors.is_empty() {
        error!("Seed validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(CliError::Seed(format!("{} validation errors found", errors.len())));
    }

    for item in &seed.menu_items {
        source
            .insert(Table::MenuItems, serde_json::to_value(item).map_err(to_backend)?)
            .await?;
    }
    for member in &seed.team_members {
        source
            .insert(Table::TeamMembers, serde_json::to_value(member).map_err(to_backend)?)
            .await?;
    }

    info!(
        menu_items = seed.menu_items.len(),
        team_members = seed.team_members.len(),
        "Seeding complete"
    );
    Ok(())
}

/// Read a YAML seed file and insert its rows.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed, fails validation,
/// or an insert fails.
pub async fn from_file(source: &dyn DataSource, file_path: &str) -> Result<(), CliError> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(CliError::Seed(format!("File not found: {file_path}")));
    }

    info!(path = %file_path, "Loading seed file");
    let content = tokio::fs::read_to_string(path).await?;
    let seed: SeedFile = serde_yaml::from_str(&content)?;

    insert_all(source, &seed).await
}

fn to_backend(e: serde_json::Error) -> meteen_site::supabase::DataSourceError {
    meteen_site::supabase::DataSourceError::Parse(e)
}
