//! Integration tests for the Meteen site API.
//!
//! Each test starts the real router on `127.0.0.1:0`, backed by an in-memory
//! data source, and talks to it over HTTP with `reqwest`. No external
//! services are needed.
//!
//! ```bash
//! cargo test -p meteen-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::sync::Arc;

use meteen_site::state::AppState;
use meteen_site::supabase::{MemoryDataSource, Table};
use reqwest::Client;
use serde_json::{Value, json};

/// A running site plus handles to inspect and steer its backend.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub source: MemoryDataSource,
}

impl TestContext {
    /// Start a server over an empty backend.
    ///
    /// # Panics
    ///
    /// Panics if the listener can't be bound or the router can't be built.
    #[allow(clippy::expect_used)]
    pub async fn new() -> Self {
        let source = MemoryDataSource::new();
        let app = meteen_site::app(AppState::new(Arc::new(source.clone())), None)
            .expect("Failed to build router");

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server stopped");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            source,
        }
    }

    /// Start a server over the standard fixture data.
    pub async fn seeded() -> Self {
        let ctx = Self::new().await;
        ctx.source.seed(Table::MenuItems, menu_fixture());
        ctx.source.seed(Table::TeamMembers, team_fixture());
        ctx
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn menu_row(id: &str, name: &str, category: &str, price: u32, featured: bool, day: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "price": price,
        "image_url": null,
        "category": category,
        "is_featured": featured,
        "created_at": format!("2024-05-{day:02}T08:00:00Z"),
        "updated_at": format!("2024-05-{day:02}T08:00:00Z"),
    })
}

/// Six menu rows: five featured, one off-list category.
#[must_use]
pub fn menu_fixture() -> Vec<Value> {
    vec![
        menu_row("00000000-0000-4000-8000-000000000001", "Nasi Goreng", "Main", 25_000, true, 1),
        menu_row("00000000-0000-4000-8000-000000000002", "Es Teh", "Drink", 5_000, false, 2),
        menu_row("00000000-0000-4000-8000-000000000003", "Sate Ayam", "Grill", 30_000, true, 3),
        menu_row("00000000-0000-4000-8000-000000000004", "Es Campur", "Dessert", 15_000, true, 4),
        menu_row("00000000-0000-4000-8000-000000000005", "Mie Goreng", "Main", 22_000, true, 5),
        menu_row("00000000-0000-4000-8000-000000000006", "Udang Bakar", "Seafood", 45_000, true, 6),
    ]
}

pub const SARI_ID: &str = "6f1c2a4e-8d1b-4c55-9a43-0a3b5e7d9f10";

#[must_use]
pub fn team_fixture() -> Vec<Value> {
    vec![
        json!({
            "id": "7a2d3b5f-9e2c-4d66-8b54-1b4c6f8e0a21",
            "name": "Budi",
            "role": "Barista",
            "bio": null,
            "image_url": null,
            "instagram": null,
            "display_order": 2,
            "created_at": "2024-05-01T08:00:00Z",
            "updated_at": "2024-05-01T08:00:00Z"
        }),
        json!({
            "id": SARI_ID,
            "name": "Sari",
            "role": "Head Chef",
            "bio": "Memasak sejak kecil.",
            "image_url": "https://example.com/sari.jpg",
            "instagram": "@sari.masak",
            "display_order": 1,
            "created_at": "2024-05-01T08:00:00Z",
            "updated_at": "2024-05-01T08:00:00Z"
        }),
    ]
}
