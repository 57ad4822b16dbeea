//! Row types for the backend tables.
//!
//! Field names match the table columns exactly so rows decode without
//! renaming.

use chrono::{DateTime, Utc};
use meteen_core::{MenuItemId, Price, TeamMemberId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Photo shown for menu items that have no image of their own.
pub const MENU_PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg";

/// Photo shown for team members that have no portrait.
pub const TEAM_PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/2102934/pexels-photo-2102934.jpeg";

// =============================================================================
// Menu
// =============================================================================

/// A row of `menu_items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: Option<String>,
    /// Non-negative amount in rupiah.
    pub price: Decimal,
    pub image_url: Option<String>,
    /// Free text; usually one of the menu page's categories.
    pub category: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    #[must_use]
    pub const fn price(&self) -> Price {
        Price::idr(self.price)
    }

    /// Localized price, e.g. `Rp 25.000`.
    #[must_use]
    pub fn price_display(&self) -> String {
        self.price().display()
    }

    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(MENU_PLACEHOLDER_IMAGE)
    }
}

// =============================================================================
// Team
// =============================================================================

/// A row of `team_members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    /// Instagram handle, with or without a leading `@`.
    pub instagram: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    /// Profile link for the member's Instagram handle.
    #[must_use]
    pub fn instagram_url(&self) -> Option<String> {
        let handle = self.instagram.as_deref()?.trim().trim_start_matches('@');
        if handle.is_empty() {
            return None;
        }
        Some(format!("https://instagram.com/{handle}"))
    }

    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(TEAM_PLACEHOLDER_IMAGE)
    }
}

// =============================================================================
// Contact
// =============================================================================

/// A row to insert into `contact_messages`.
///
/// `id`, `status` and `created_at` are assigned by the backend. An absent
/// subject is sent as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}
