//! Product request types.

use felt_core::{Facet, PageRequest, ProductStatus};
use serde::{Deserialize, Serialize};

use super::lenient_i64;
use crate::validation::HasUpdates;

/// Request to create a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateProductRequest {
    pub name: String,
    /// Explicit slug; derived from `name` when absent.
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Open key-value specification map.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub specifications: Option<serde_json::Value>,
    pub price: f64,
    /// ISO currency code; defaults to USD.
    pub currency: Option<String>,
    #[serde(default)]
    pub stock: i32,
    pub sku: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    /// Defaults to Active.
    pub status: Option<ProductStatus>,
}

/// Request to update a product. All fields optional; omitted fields keep
/// their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub specifications: Option<serde_json::Value>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub stock: Option<i32>,
    pub sku: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<ProductStatus>,
}

impl HasUpdates for UpdateProductRequest {
    fn has_any_updates(&self) -> bool {
        self.name.is_some()
            || self.slug.is_some()
            || self.description.is_some()
            || self.category.is_some()
            || self.specifications.is_some()
            || self.price.is_some()
            || self.currency.is_some()
            || self.stock.is_some()
            || self.sku.is_some()
            || self.images.is_some()
            || self.featured.is_some()
            || self.status.is_some()
    }
}

/// Query parameters for the product list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListParams {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[serde(default)]
    pub category: Facet<String>,
    #[serde(default)]
    pub status: Facet<ProductStatus>,
    #[serde(default)]
    pub featured: Facet<bool>,
}

impl ProductListParams {
    pub fn window(&self) -> PageRequest {
        PageRequest::from_options(self.page, self.limit)
    }
}
