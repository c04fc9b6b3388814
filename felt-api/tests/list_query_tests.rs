#![cfg(feature = "db-tests")]
//! Integration tests for the shared list-query resolver.
//!
//! Seeds rows under a unique category so the assertions are isolated from
//! whatever else lives in the test database, then exercises pagination
//! arithmetic, facet filtering, ordering, and search against real SQL.

use felt_api::types::{CreateProductRequest, Paginated, ProductListParams};
use felt_core::{Facet, ProductStatus};
use uuid::Uuid;

#[path = "support/db.rs"]
mod test_db_support;
use test_db_support::test_db_client;

fn seed_product(category: &str, n: usize, status: ProductStatus) -> CreateProductRequest {
    CreateProductRequest {
        name: format!("Seeded product {n}"),
        slug: Some(format!("seed-{}", Uuid::now_v7())),
        description: "list query seed".to_string(),
        category: category.to_string(),
        specifications: None,
        price: 100.0 + n as f64,
        currency: None,
        stock: n as i32,
        sku: None,
        images: vec![],
        featured: n % 2 == 0,
        status: Some(status),
    }
}

fn params_for(category: &str) -> ProductListParams {
    ProductListParams {
        category: Facet::Only(category.to_string()),
        ..ProductListParams::default()
    }
}

async fn cleanup(db: &felt_api::DbClient, category: &str) {
    let mut params = params_for(category);
    params.limit = Some(1000);
    let (items, _) = db.product_list(&params).await.expect("cleanup list");
    for item in items {
        db.product_delete(item.id).await.expect("cleanup delete");
    }
}

#[tokio::test]
async fn twenty_five_rows_paginate_into_three_pages() {
    let db = test_db_client();
    let category = format!("cat-{}", Uuid::now_v7().simple());

    for n in 0..25 {
        db.product_create(&seed_product(&category, n, ProductStatus::Active))
            .await
            .expect("seed");
    }

    // Page 1: default limit of 10.
    let params = params_for(&category);
    let (items, total) = db.product_list(&params).await.expect("list");
    let page = Paginated::new(items, &params.window(), total);
    assert_eq!(page.pagination.total, 25);
    assert_eq!(page.pagination.pages, 3);
    assert_eq!(page.items.len(), 10);

    // Newest first within the page.
    for pair in page.items.windows(2) {
        assert!(
            (pair[0].created_at, pair[0].id) >= (pair[1].created_at, pair[1].id),
            "rows must be ordered newest-first"
        );
    }

    // Page 3 holds the remainder.
    let mut params = params_for(&category);
    params.page = Some(3);
    let (items, total) = db.product_list(&params).await.expect("list page 3");
    assert_eq!(total, 25);
    assert_eq!(items.len(), 5);

    // Past the end: empty page, same total.
    let mut params = params_for(&category);
    params.page = Some(4);
    let (items, total) = db.product_list(&params).await.expect("list page 4");
    assert_eq!(total, 25);
    assert!(items.is_empty());

    cleanup(&db, &category).await;
}

#[tokio::test]
async fn facets_and_search_narrow_the_result() {
    let db = test_db_client();
    let category = format!("cat-{}", Uuid::now_v7().simple());

    for n in 0..4 {
        db.product_create(&seed_product(&category, n, ProductStatus::Active))
            .await
            .expect("seed");
    }
    for n in 4..6 {
        db.product_create(&seed_product(&category, n, ProductStatus::Draft))
            .await
            .expect("seed");
    }
    let needle = db
        .product_create(&CreateProductRequest {
            name: "Heirloom walnut frame".to_string(),
            ..seed_product(&category, 6, ProductStatus::Active)
        })
        .await
        .expect("seed needle");

    // Status facet.
    let mut params = params_for(&category);
    params.status = Facet::Only(ProductStatus::Draft);
    let (items, total) = db.product_list(&params).await.expect("status facet");
    assert_eq!(total, 2);
    assert!(items.iter().all(|p| p.status == ProductStatus::Draft));

    // "All" sentinel leaves the facet out entirely.
    let mut params = params_for(&category);
    params.status = Facet::All;
    let (_, total) = db.product_list(&params).await.expect("all facet");
    assert_eq!(total, 7);

    // Search is case-insensitive substring over name/description.
    let mut params = params_for(&category);
    params.search = Some("WALNUT".to_string());
    let (items, total) = db.product_list(&params).await.expect("search");
    assert_eq!(total, 1);
    assert_eq!(items[0].id, needle.id);

    // Featured flag facet composes with the category facet.
    let mut params = params_for(&category);
    params.featured = Facet::Only(true);
    let (items, _) = db.product_list(&params).await.expect("featured facet");
    assert!(items.iter().all(|p| p.featured));

    cleanup(&db, &category).await;
}

#[tokio::test]
async fn public_list_only_serves_active_rows() {
    let db = test_db_client();
    let category = format!("cat-{}", Uuid::now_v7().simple());

    db.product_create(&seed_product(&category, 0, ProductStatus::Active))
        .await
        .expect("seed");
    db.product_create(&seed_product(&category, 1, ProductStatus::Draft))
        .await
        .expect("seed");
    db.product_create(&seed_product(&category, 2, ProductStatus::OutOfStock))
        .await
        .expect("seed");

    let params = felt_api::types::PublicListParams {
        category: Facet::Only(category.clone()),
        ..felt_api::types::PublicListParams::default()
    };
    let (items, total) = db.product_list_public(&params).await.expect("public list");
    assert_eq!(total, 1);
    assert!(items.iter().all(|p| p.status == ProductStatus::Active));

    cleanup(&db, &category).await;
}
