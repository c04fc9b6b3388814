//! Public site projections.
//!
//! The `/api/public` mirrors serve only publicly visible rows (Active
//! products, Published posts) and strip internal-only fields: no stock,
//! sku, status, or contact/team data leaves the admin surface.

use felt_core::{BlogPost, Facet, PageRequest, PostId, Product, ProductId, Timestamp};
use serde::{Deserialize, Serialize};

use super::lenient_i64;

/// Catalog projection of a product for the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PublicProduct {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub specifications: serde_json::Value,
    pub price: f64,
    pub currency: String,
    pub images: Vec<String>,
    pub featured: bool,
}

impl From<Product> for PublicProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            slug: product.slug,
            name: product.name,
            description: product.description,
            category: product.category,
            specifications: product.specifications,
            price: product.price,
            currency: product.currency,
            images: product.images,
            featured: product.featured,
        }
    }
}

/// Reader projection of a blog post for the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PublicPost {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub category: String,
    pub word_count: i32,
    pub read_time: i32,
    pub featured: bool,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub published_at: Option<Timestamp>,
}

impl From<BlogPost> for PublicPost {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            content: post.content,
            excerpt: post.excerpt,
            tags: post.tags,
            category: post.category,
            word_count: post.word_count,
            read_time: post.read_time,
            featured: post.featured,
            published_at: post.published_at,
        }
    }
}

/// Query parameters shared by the public list mirrors. The visibility
/// filter (Active / Published) is implicit and not caller-controllable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicListParams {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[serde(default)]
    pub category: Facet<String>,
    #[serde(default)]
    pub featured: Facet<bool>,
}

impl PublicListParams {
    pub fn window(&self) -> PageRequest {
        PageRequest::from_options(self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use felt_core::ProductStatus;
    use uuid::Uuid;

    fn sample_product() -> Product {
        Product {
            id: Uuid::nil(),
            slug: "tournament-9ft".to_string(),
            name: "Tournament 9ft".to_string(),
            description: "Slate bed tournament table".to_string(),
            category: "Tables".to_string(),
            specifications: serde_json::json!({"bed": "slate"}),
            price: 4999.0,
            currency: "USD".to_string(),
            stock: 3,
            sku: Some("TB-9000".to_string()),
            images: vec!["https://cdn.feltandslate.com/t9.webp".to_string()],
            featured: true,
            status: ProductStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn public_projection_drops_internal_fields() -> Result<(), serde_json::Error> {
        let public = PublicProduct::from(sample_product());
        let json = serde_json::to_value(&public)?;
        assert!(json.get("stock").is_none());
        assert!(json.get("sku").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["slug"], "tournament-9ft");
        Ok(())
    }
}
