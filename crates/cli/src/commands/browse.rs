//! Read-only views of the menu and team.

use std::io::Write;
use std::sync::Arc;

use meteen_core::MenuCategory;
use meteen_site::services::{CatalogFetcher, CatalogMode, FilterState, TeamDirectory, compute_visible};
use meteen_site::supabase::{DataSource, MenuItem, TeamMember};

use super::CliError;

/// Print the filtered menu, one section per category.
pub async fn menu(
    source: Arc<dyn DataSource>,
    category: MenuCategory,
    search: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let catalog = CatalogFetcher::new(source).fetch(CatalogMode::All).await?;
    let visible = compute_visible(&catalog, &FilterState::new(category, search));

    if visible.is_empty() {
        writeln!(out, "Tidak ada menu yang ditemukan.")?;
        return Ok(());
    }

    // Rows arrive ordered by category, so sections are contiguous.
    let mut current: Option<&str> = None;
    for item in &visible {
        if current != Some(item.category.as_str()) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "== {} ==", item.category)?;
            current = Some(item.category.as_str());
        }
        write_item(out, item)?;
    }
    Ok(())
}

/// Print the home page's featured preview.
pub async fn featured(source: Arc<dyn DataSource>, out: &mut impl Write) -> Result<(), CliError> {
    let items = CatalogFetcher::new(source)
        .fetch(CatalogMode::featured_preview())
        .await?;
    if items.is_empty() {
        writeln!(out, "Belum ada menu unggulan.")?;
    }
    for item in &items {
        write_item(out, item)?;
    }
    Ok(())
}

pub async fn team(source: Arc<dyn DataSource>, out: &mut impl Write) -> Result<(), CliError> {
    let members = TeamDirectory::new(source).list().await?;
    for member in &members {
        writeln!(out, "{:>3}. {} - {}", member.display_order, member.name, member.role)?;
    }
    Ok(())
}

pub async fn member(
    source: Arc<dyn DataSource>,
    id: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let member = TeamDirectory::new(source).member_by_key(id).await?;
    write_member(out, &member)?;
    Ok(())
}

fn write_item(out: &mut impl Write, item: &MenuItem) -> std::io::Result<()> {
    writeln!(out, "{:<32} {:>12}", item.name, item.price_display())?;
    if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(out, "    {description}")?;
    }
    Ok(())
}

fn write_member(out: &mut impl Write, member: &TeamMember) -> std::io::Result<()> {
    writeln!(out, "{}", member.name)?;
    writeln!(out, "{}", member.role)?;
    if let Some(bio) = member.bio.as_deref() {
        writeln!(out)?;
        writeln!(out, "{bio}")?;
    }
    if let Some(url) = member.instagram_url() {
        writeln!(out)?;
        writeln!(out, "Instagram: {url}")?;
    }
    Ok(())
}
