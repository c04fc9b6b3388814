//! Database connection pool and entity operations.
//!
//! PostgreSQL access goes through a deadpool-backed [`DbClient`]. Each list
//! operation builds its predicate once with [`SelectFilter`], runs the count
//! and the page query against that same predicate, and orders results
//! newest-first with id as the tie-break. Uniqueness (product slug and sku,
//! post slug, member email) is enforced by database constraints; violations
//! surface as 409 via the `From<tokio_postgres::Error>` conversion.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use deadpool_postgres::{Config, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::{NoTls, Row};
use uuid::Uuid;

use felt_core::{
    derive_slug, read_time, word_count, BlogPost, Contact, ContactId, ContactReply,
    ContactStatus, MemberId, PostId, PostStatus, Product, ProductId, ProductStatus, ReplyId,
    TeamMember,
};

use crate::error::{ApiError, ApiResult};
use crate::query::{SelectFilter, UpdateSet, ORDER_NEWEST_FIRST};
use crate::types::{
    ContactListParams, CreateContactRequest, CreateMemberRequest, CreatePostRequest,
    CreateProductRequest, CreateReplyRequest, MemberListParams, PostListParams,
    ProductListParams, PublicListParams, UpdateContactRequest, UpdateMemberRequest,
    UpdatePostRequest, UpdateProductRequest,
};

// ============================================================================
// CONNECTION POOL CONFIGURATION
// ============================================================================

/// Database connection pool configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL host
    pub host: String,
    /// PostgreSQL port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Maximum pool size
    pub max_size: usize,
    /// Connection timeout
    pub timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "felt".to_string(),
            user: "postgres".to_string(),
            password: "".to_string(),
            max_size: 16,
            timeout: Duration::from_secs(30),
        }
    }
}

impl DbConfig {
    /// Create a new database configuration from environment variables.
    ///
    /// Environment variables: `FELT_DB_HOST`, `FELT_DB_PORT`, `FELT_DB_NAME`,
    /// `FELT_DB_USER`, `FELT_DB_PASSWORD`, `FELT_DB_POOL_SIZE`,
    /// `FELT_DB_TIMEOUT` (seconds).
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("FELT_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("FELT_DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            dbname: std::env::var("FELT_DB_NAME").unwrap_or_else(|_| "felt".to_string()),
            user: std::env::var("FELT_DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("FELT_DB_PASSWORD").unwrap_or_default(),
            max_size: std::env::var("FELT_DB_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(16),
            timeout: Duration::from_secs(
                std::env::var("FELT_DB_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }

    /// Create a connection pool from this configuration.
    pub fn create_pool(&self) -> ApiResult<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(self.host.clone());
        cfg.port = Some(self.port);
        cfg.dbname = Some(self.dbname.clone());
        cfg.user = Some(self.user.clone());
        cfg.password = Some(self.password.clone());

        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| ApiError::database_error(format!("Failed to create pool: {}", e)))?;

        Ok(pool)
    }
}

// ============================================================================
// COLUMN LISTS AND ROW MAPPERS
// ============================================================================

const PRODUCT_COLUMNS: &str = "id, slug, name, description, category, specifications, price, \
                               currency, stock, sku, images, featured, status, created_at, updated_at";

const POST_COLUMNS: &str = "id, slug, title, content, excerpt, tags, category, word_count, \
                            read_time, featured, status, published_at, created_at, updated_at";

const CONTACT_COLUMNS: &str =
    "id, name, email, phone, subject, message, category, source, status, priority, \
     created_at, updated_at";

const REPLY_COLUMNS: &str = "id, contact_id, message, author, created_at";

const MEMBER_COLUMNS: &str = "id, first_name, last_name, email, role, department, skills, \
                              permissions, status, start_date, created_at, updated_at";

/// Search columns per entity (spec'd per collection, not unified).
const PRODUCT_SEARCH: &[&str] = &["name", "description"];
const POST_SEARCH: &[&str] = &["title", "content", "excerpt"];
const CONTACT_SEARCH: &[&str] = &["name", "email", "subject", "message"];
const MEMBER_SEARCH: &[&str] = &["first_name", "last_name", "email", "role"];

/// Parse a status column that is stored as text.
fn parse_wire<T>(raw: String, column: &str) -> ApiResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse().map_err(|e| {
        tracing::error!("Corrupt {} value in database: {}", column, e);
        ApiError::internal_error(format!("Corrupt {} value", column))
    })
}

fn product_from_row(row: &Row) -> ApiResult<Product> {
    Ok(Product {
        id: row.get("id"),
        slug: row.get("slug"),
        name: row.get("name"),
        description: row.get("description"),
        category: row.get("category"),
        specifications: row.get("specifications"),
        price: row.get("price"),
        currency: row.get("currency"),
        stock: row.get("stock"),
        sku: row.get("sku"),
        images: row.get("images"),
        featured: row.get("featured"),
        status: parse_wire(row.get("status"), "status")?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn post_from_row(row: &Row) -> ApiResult<BlogPost> {
    Ok(BlogPost {
        id: row.get("id"),
        slug: row.get("slug"),
        title: row.get("title"),
        content: row.get("content"),
        excerpt: row.get("excerpt"),
        tags: row.get("tags"),
        category: row.get("category"),
        word_count: row.get("word_count"),
        read_time: row.get("read_time"),
        featured: row.get("featured"),
        status: parse_wire(row.get("status"), "status")?,
        published_at: row.get("published_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn contact_from_row(row: &Row, replies: Vec<ContactReply>) -> ApiResult<Contact> {
    Ok(Contact {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        subject: row.get("subject"),
        message: row.get("message"),
        category: row.get("category"),
        source: row.get("source"),
        status: parse_wire(row.get("status"), "status")?,
        priority: parse_wire(row.get("priority"), "priority")?,
        replies,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn reply_from_row(row: &Row) -> ContactReply {
    ContactReply {
        id: row.get("id"),
        contact_id: row.get("contact_id"),
        message: row.get("message"),
        author: row.get("author"),
        created_at: row.get("created_at"),
    }
}

fn member_from_row(row: &Row) -> ApiResult<TeamMember> {
    Ok(TeamMember {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        role: row.get("role"),
        department: row.get("department"),
        skills: row.get("skills"),
        permissions: row.get("permissions"),
        status: parse_wire(row.get("status"), "status")?,
        start_date: row.get("start_date"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// Resolve the stored slug: caller-supplied wins, otherwise derive.
fn resolve_slug(explicit: Option<&str>, source: &str) -> String {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slug.to_string(),
        None => derive_slug(source),
    }
}

// ============================================================================
// DATABASE CLIENT
// ============================================================================

/// Database client wrapping the connection pool.
#[derive(Clone)]
pub struct DbClient {
    pool: Pool,
}

impl DbClient {
    /// Create a new database client with the given pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create a new database client from configuration.
    pub fn from_config(config: &DbConfig) -> ApiResult<Self> {
        let pool = config.create_pool()?;
        Ok(Self::new(pool))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> ApiResult<deadpool_postgres::Object> {
        self.pool.get().await.map_err(ApiError::from)
    }

    /// Readiness probe: round-trip a trivial query through the pool.
    pub async fn ping(&self) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        conn.query_one("SELECT 1", &[]).await?;
        Ok(())
    }

    /// Run a count and a page query against one shared predicate.
    async fn list_page(
        &self,
        table: &str,
        columns: &str,
        mut filter: SelectFilter,
        window: &felt_core::PageRequest,
    ) -> ApiResult<(Vec<Row>, i64)> {
        let conn = self.get_conn().await?;
        let where_sql = filter.where_sql();

        let count_sql = format!("SELECT COUNT(*) FROM {table}{where_sql}");
        let total: i64 = conn
            .query_one(count_sql.as_str(), &filter.params())
            .await?
            .get(0);

        let window_sql = filter.window_sql(window);
        let page_sql =
            format!("SELECT {columns} FROM {table}{where_sql}{ORDER_NEWEST_FIRST}{window_sql}");
        let rows = conn.query(page_sql.as_str(), &filter.params()).await?;

        Ok((rows, total))
    }

    // ========================================================================
    // PRODUCT OPERATIONS
    // ========================================================================

    /// Insert a product. Duplicate slug/sku surfaces as 409.
    pub async fn product_create(&self, req: &CreateProductRequest) -> ApiResult<Product> {
        let conn = self.get_conn().await?;

        let id = Uuid::now_v7();
        let slug = resolve_slug(req.slug.as_deref(), &req.name);
        let specifications = req
            .specifications
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));
        let currency = req.currency.clone().unwrap_or_else(|| "USD".to_string());
        let status = req.status.unwrap_or(ProductStatus::Active);

        let sql = format!(
            "INSERT INTO products (id, slug, name, description, category, specifications, \
             price, currency, stock, sku, images, featured, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let row = conn
            .query_one(
                sql.as_str(),
                &[
                    &id,
                    &slug,
                    &req.name,
                    &req.description,
                    &req.category,
                    &specifications,
                    &req.price,
                    &currency,
                    &req.stock,
                    &req.sku,
                    &req.images,
                    &req.featured,
                    &status.as_str(),
                ],
            )
            .await?;

        product_from_row(&row)
    }

    /// Get a product by ID.
    pub async fn product_get(&self, id: ProductId) -> ApiResult<Option<Product>> {
        let conn = self.get_conn().await?;
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = conn.query_opt(sql.as_str(), &[&id]).await?;
        row.as_ref().map(product_from_row).transpose()
    }

    /// Get an Active product by slug (public catalog lookup).
    pub async fn product_get_public(&self, slug: &str) -> ApiResult<Option<Product>> {
        let conn = self.get_conn().await?;
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1 AND status = $2"
        );
        let row = conn
            .query_opt(sql.as_str(), &[&slug, &ProductStatus::Active.as_str()])
            .await?;
        row.as_ref().map(product_from_row).transpose()
    }

    /// Apply a partial update. Returns `None` when the id does not exist.
    pub async fn product_update(
        &self,
        id: ProductId,
        req: &UpdateProductRequest,
    ) -> ApiResult<Option<Product>> {
        let conn = self.get_conn().await?;

        let mut set = UpdateSet::new();
        if let Some(name) = &req.name {
            set.set("name", name.clone());
        }
        if let Some(slug) = &req.slug {
            set.set("slug", slug.clone());
        }
        if let Some(description) = &req.description {
            set.set("description", description.clone());
        }
        if let Some(category) = &req.category {
            set.set("category", category.clone());
        }
        if let Some(specifications) = &req.specifications {
            set.set("specifications", specifications.clone());
        }
        if let Some(price) = req.price {
            set.set("price", price);
        }
        if let Some(currency) = &req.currency {
            set.set("currency", currency.clone());
        }
        if let Some(stock) = req.stock {
            set.set("stock", stock);
        }
        if let Some(sku) = &req.sku {
            set.set("sku", sku.clone());
        }
        if let Some(images) = &req.images {
            set.set("images", images.clone());
        }
        if let Some(featured) = req.featured {
            set.set("featured", featured);
        }
        if let Some(status) = req.status {
            set.set("status", status.as_str());
        }

        let sql = set.sql("products", id, PRODUCT_COLUMNS);
        let row = conn.query_opt(sql.as_str(), &set.params()).await?;
        row.as_ref().map(product_from_row).transpose()
    }

    /// Delete a product. Returns whether a row was removed.
    pub async fn product_delete(&self, id: ProductId) -> ApiResult<bool> {
        let conn = self.get_conn().await?;
        let deleted = conn
            .execute("DELETE FROM products WHERE id = $1", &[&id])
            .await?;
        Ok(deleted > 0)
    }

    /// List products with filters and pagination.
    pub async fn product_list(
        &self,
        params: &ProductListParams,
    ) -> ApiResult<(Vec<Product>, i64)> {
        let mut filter = SelectFilter::new();
        filter.facet("category", &params.category);
        filter.facet("status", &params.status);
        filter.facet_flag("featured", &params.featured);
        filter.search(PRODUCT_SEARCH, params.search.as_deref());

        let (rows, total) = self
            .list_page("products", PRODUCT_COLUMNS, filter, &params.window())
            .await?;
        let items = rows.iter().map(product_from_row).collect::<ApiResult<_>>()?;
        Ok((items, total))
    }

    /// List Active products for the public catalog.
    pub async fn product_list_public(
        &self,
        params: &PublicListParams,
    ) -> ApiResult<(Vec<Product>, i64)> {
        let mut filter = SelectFilter::new();
        filter.eq("status", ProductStatus::Active.as_str());
        filter.facet("category", &params.category);
        filter.facet_flag("featured", &params.featured);
        filter.search(PRODUCT_SEARCH, params.search.as_deref());

        let (rows, total) = self
            .list_page("products", PRODUCT_COLUMNS, filter, &params.window())
            .await?;
        let items = rows.iter().map(product_from_row).collect::<ApiResult<_>>()?;
        Ok((items, total))
    }

    // ========================================================================
    // BLOG POST OPERATIONS
    // ========================================================================

    /// Insert a blog post, deriving slug and reading metadata as needed.
    pub async fn post_create(&self, req: &CreatePostRequest) -> ApiResult<BlogPost> {
        let conn = self.get_conn().await?;

        let id = Uuid::now_v7();
        let slug = resolve_slug(req.slug.as_deref(), &req.title);
        let category = req.category.clone().unwrap_or_else(|| "General".to_string());
        let status = req.status.unwrap_or(PostStatus::Draft);
        // Explicit overrides win; the API contract allows them to diverge
        // from content.
        let words = req.word_count.unwrap_or_else(|| word_count(&req.content));
        let minutes = req.read_time.unwrap_or_else(|| read_time(words));
        let published_at = req
            .published_at
            .or_else(|| (status == PostStatus::Published).then(Utc::now));

        let sql = format!(
            "INSERT INTO blog_posts (id, slug, title, content, excerpt, tags, category, \
             word_count, read_time, featured, status, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {POST_COLUMNS}"
        );
        let row = conn
            .query_one(
                sql.as_str(),
                &[
                    &id,
                    &slug,
                    &req.title,
                    &req.content,
                    &req.excerpt,
                    &req.tags,
                    &category,
                    &words,
                    &minutes,
                    &req.featured,
                    &status.as_str(),
                    &published_at,
                ],
            )
            .await?;

        post_from_row(&row)
    }

    /// Get a blog post by ID.
    pub async fn post_get(&self, id: PostId) -> ApiResult<Option<BlogPost>> {
        let conn = self.get_conn().await?;
        let sql = format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE id = $1");
        let row = conn.query_opt(sql.as_str(), &[&id]).await?;
        row.as_ref().map(post_from_row).transpose()
    }

    /// Get a Published post by slug (public blog lookup).
    pub async fn post_get_public(&self, slug: &str) -> ApiResult<Option<BlogPost>> {
        let conn = self.get_conn().await?;
        let sql =
            format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = $1 AND status = $2");
        let row = conn
            .query_opt(sql.as_str(), &[&slug, &PostStatus::Published.as_str()])
            .await?;
        row.as_ref().map(post_from_row).transpose()
    }

    /// Apply a partial update. Reading metadata is recomputed whenever
    /// `content` changes, unless the caller overrides it explicitly.
    pub async fn post_update(
        &self,
        id: PostId,
        req: &UpdatePostRequest,
    ) -> ApiResult<Option<BlogPost>> {
        let conn = self.get_conn().await?;

        let mut set = UpdateSet::new();
        if let Some(title) = &req.title {
            set.set("title", title.clone());
        }
        if let Some(slug) = &req.slug {
            set.set("slug", slug.clone());
        }
        if let Some(content) = &req.content {
            set.set("content", content.clone());
            let words = req.word_count.unwrap_or_else(|| word_count(content));
            set.set("word_count", words);
            set.set("read_time", req.read_time.unwrap_or_else(|| read_time(words)));
        } else {
            if let Some(words) = req.word_count {
                set.set("word_count", words);
            }
            if let Some(minutes) = req.read_time {
                set.set("read_time", minutes);
            }
        }
        if let Some(excerpt) = &req.excerpt {
            set.set("excerpt", excerpt.clone());
        }
        if let Some(tags) = &req.tags {
            set.set("tags", tags.clone());
        }
        if let Some(category) = &req.category {
            set.set("category", category.clone());
        }
        if let Some(featured) = req.featured {
            set.set("featured", featured);
        }
        if let Some(published_at) = req.published_at {
            set.set("published_at", published_at);
        }
        if let Some(status) = req.status {
            set.set("status", status.as_str());
            if status == PostStatus::Published && req.published_at.is_none() {
                // First publish stamps the date; re-publishing keeps it.
                set.set_raw("published_at = COALESCE(published_at, now())");
            }
        }

        let sql = set.sql("blog_posts", id, POST_COLUMNS);
        let row = conn.query_opt(sql.as_str(), &set.params()).await?;
        row.as_ref().map(post_from_row).transpose()
    }

    /// Delete a blog post. Returns whether a row was removed.
    pub async fn post_delete(&self, id: PostId) -> ApiResult<bool> {
        let conn = self.get_conn().await?;
        let deleted = conn
            .execute("DELETE FROM blog_posts WHERE id = $1", &[&id])
            .await?;
        Ok(deleted > 0)
    }

    /// List blog posts with filters and pagination.
    pub async fn post_list(&self, params: &PostListParams) -> ApiResult<(Vec<BlogPost>, i64)> {
        let mut filter = SelectFilter::new();
        filter.facet("category", &params.category);
        filter.facet("status", &params.status);
        filter.facet_flag("featured", &params.featured);
        filter.search(POST_SEARCH, params.search.as_deref());

        let (rows, total) = self
            .list_page("blog_posts", POST_COLUMNS, filter, &params.window())
            .await?;
        let items = rows.iter().map(post_from_row).collect::<ApiResult<_>>()?;
        Ok((items, total))
    }

    /// List Published posts for the public blog.
    pub async fn post_list_public(
        &self,
        params: &PublicListParams,
    ) -> ApiResult<(Vec<BlogPost>, i64)> {
        let mut filter = SelectFilter::new();
        filter.eq("status", PostStatus::Published.as_str());
        filter.facet("category", &params.category);
        filter.facet_flag("featured", &params.featured);
        filter.search(POST_SEARCH, params.search.as_deref());

        let (rows, total) = self
            .list_page("blog_posts", POST_COLUMNS, filter, &params.window())
            .await?;
        let items = rows.iter().map(post_from_row).collect::<ApiResult<_>>()?;
        Ok((items, total))
    }

    // ========================================================================
    // CONTACT OPERATIONS
    // ========================================================================

    /// Insert a contact inquiry.
    pub async fn contact_create(&self, req: &CreateContactRequest) -> ApiResult<Contact> {
        let conn = self.get_conn().await?;

        let id = Uuid::now_v7();
        let category = req.category.clone().unwrap_or_else(|| "General".to_string());
        let source = req.source.clone().unwrap_or_else(|| "website".to_string());
        let status = req.status.unwrap_or(ContactStatus::New);
        let priority = req.priority.unwrap_or(felt_core::ContactPriority::Medium);

        let sql = format!(
            "INSERT INTO contacts (id, name, email, phone, subject, message, category, \
             source, status, priority) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {CONTACT_COLUMNS}"
        );
        let row = conn
            .query_one(
                sql.as_str(),
                &[
                    &id,
                    &req.name,
                    &req.email,
                    &req.phone,
                    &req.subject,
                    &req.message,
                    &category,
                    &source,
                    &status.as_str(),
                    &priority.as_str(),
                ],
            )
            .await?;

        contact_from_row(&row, Vec::new())
    }

    /// Get a contact by ID with its replies, newest first.
    pub async fn contact_get(&self, id: ContactId) -> ApiResult<Option<Contact>> {
        let conn = self.get_conn().await?;
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1");
        let Some(row) = conn.query_opt(sql.as_str(), &[&id]).await? else {
            return Ok(None);
        };

        let reply_sql = format!(
            "SELECT {REPLY_COLUMNS} FROM contact_replies WHERE contact_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        let replies = conn
            .query(reply_sql.as_str(), &[&id])
            .await?
            .iter()
            .map(reply_from_row)
            .collect();

        contact_from_row(&row, replies).map(Some)
    }

    /// Apply a partial update. Returns `None` when the id does not exist.
    pub async fn contact_update(
        &self,
        id: ContactId,
        req: &UpdateContactRequest,
    ) -> ApiResult<Option<Contact>> {
        let conn = self.get_conn().await?;

        let mut set = UpdateSet::new();
        if let Some(name) = &req.name {
            set.set("name", name.clone());
        }
        if let Some(email) = &req.email {
            set.set("email", email.clone());
        }
        if let Some(phone) = &req.phone {
            set.set("phone", phone.clone());
        }
        if let Some(subject) = &req.subject {
            set.set("subject", subject.clone());
        }
        if let Some(message) = &req.message {
            set.set("message", message.clone());
        }
        if let Some(category) = &req.category {
            set.set("category", category.clone());
        }
        if let Some(source) = &req.source {
            set.set("source", source.clone());
        }
        if let Some(status) = req.status {
            set.set("status", status.as_str());
        }
        if let Some(priority) = req.priority {
            set.set("priority", priority.as_str());
        }

        let sql = set.sql("contacts", id, CONTACT_COLUMNS);
        let updated = conn.query_opt(sql.as_str(), &set.params()).await?;
        drop(conn);
        if updated.is_none() {
            return Ok(None);
        }
        // Re-read through contact_get so replies come along.
        self.contact_get(id).await
    }

    /// Delete a contact. Replies go with it (ON DELETE CASCADE).
    pub async fn contact_delete(&self, id: ContactId) -> ApiResult<bool> {
        let conn = self.get_conn().await?;
        let deleted = conn
            .execute("DELETE FROM contacts WHERE id = $1", &[&id])
            .await?;
        Ok(deleted > 0)
    }

    /// List contacts with filters and pagination, replies eagerly included.
    pub async fn contact_list(
        &self,
        params: &ContactListParams,
    ) -> ApiResult<(Vec<Contact>, i64)> {
        let mut filter = SelectFilter::new();
        filter.facet("category", &params.category);
        filter.facet("status", &params.status);
        filter.facet("priority", &params.priority);
        filter.search(CONTACT_SEARCH, params.search.as_deref());

        let (rows, total) = self
            .list_page("contacts", CONTACT_COLUMNS, filter, &params.window())
            .await?;

        let ids: Vec<ContactId> = rows.iter().map(|row| row.get("id")).collect();
        let mut replies_by_contact: HashMap<ContactId, Vec<ContactReply>> = HashMap::new();
        if !ids.is_empty() {
            let conn = self.get_conn().await?;
            let reply_sql = format!(
                "SELECT {REPLY_COLUMNS} FROM contact_replies WHERE contact_id = ANY($1) \
                 ORDER BY created_at DESC, id DESC"
            );
            for row in conn.query(reply_sql.as_str(), &[&ids]).await? {
                let reply = reply_from_row(&row);
                replies_by_contact
                    .entry(reply.contact_id)
                    .or_default()
                    .push(reply);
            }
        }

        let items = rows
            .iter()
            .map(|row| {
                let id: ContactId = row.get("id");
                let replies = replies_by_contact.remove(&id).unwrap_or_default();
                contact_from_row(row, replies)
            })
            .collect::<ApiResult<_>>()?;

        Ok((items, total))
    }

    /// Insert a reply and transition the parent contact to Replied.
    ///
    /// Both writes run in one transaction so a crash can never leave a
    /// persisted reply on a contact that still reads as unanswered.
    /// Returns `None` when the contact does not exist.
    pub async fn reply_create(
        &self,
        contact_id: ContactId,
        req: &CreateReplyRequest,
    ) -> ApiResult<Option<ContactReply>> {
        let mut conn = self.get_conn().await?;
        let tx = conn.transaction().await?;

        let parent = tx
            .query_opt("SELECT id FROM contacts WHERE id = $1 FOR UPDATE", &[&contact_id])
            .await?;
        if parent.is_none() {
            return Ok(None);
        }

        let id: ReplyId = Uuid::now_v7();
        let sql = format!(
            "INSERT INTO contact_replies (id, contact_id, message, author) \
             VALUES ($1, $2, $3, $4) RETURNING {REPLY_COLUMNS}"
        );
        let row = tx
            .query_one(sql.as_str(), &[&id, &contact_id, &req.message, &req.author])
            .await?;

        tx.execute(
            "UPDATE contacts SET status = $1, updated_at = now() WHERE id = $2",
            &[&ContactStatus::Replied.as_str(), &contact_id],
        )
        .await?;

        tx.commit().await?;
        Ok(Some(reply_from_row(&row)))
    }

    // ========================================================================
    // TEAM MEMBER OPERATIONS
    // ========================================================================

    /// Insert a team member. Duplicate email surfaces as 409.
    pub async fn member_create(&self, req: &CreateMemberRequest) -> ApiResult<TeamMember> {
        let conn = self.get_conn().await?;

        let id = Uuid::now_v7();
        let permissions = req
            .permissions
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));
        let status = req.status.unwrap_or(felt_core::MemberStatus::Active);

        let sql = format!(
            "INSERT INTO team_members (id, first_name, last_name, email, role, department, \
             skills, permissions, status, start_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {MEMBER_COLUMNS}"
        );
        let row = conn
            .query_one(
                sql.as_str(),
                &[
                    &id,
                    &req.first_name,
                    &req.last_name,
                    &req.email,
                    &req.role,
                    &req.department,
                    &req.skills,
                    &permissions,
                    &status.as_str(),
                    &req.start_date,
                ],
            )
            .await?;

        member_from_row(&row)
    }

    /// Get a team member by ID.
    pub async fn member_get(&self, id: MemberId) -> ApiResult<Option<TeamMember>> {
        let conn = self.get_conn().await?;
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = $1");
        let row = conn.query_opt(sql.as_str(), &[&id]).await?;
        row.as_ref().map(member_from_row).transpose()
    }

    /// Apply a partial update. Returns `None` when the id does not exist.
    pub async fn member_update(
        &self,
        id: MemberId,
        req: &UpdateMemberRequest,
    ) -> ApiResult<Option<TeamMember>> {
        let conn = self.get_conn().await?;

        let mut set = UpdateSet::new();
        if let Some(first_name) = &req.first_name {
            set.set("first_name", first_name.clone());
        }
        if let Some(last_name) = &req.last_name {
            set.set("last_name", last_name.clone());
        }
        if let Some(email) = &req.email {
            set.set("email", email.clone());
        }
        if let Some(role) = &req.role {
            set.set("role", role.clone());
        }
        if let Some(department) = &req.department {
            set.set("department", department.clone());
        }
        if let Some(skills) = &req.skills {
            set.set("skills", skills.clone());
        }
        if let Some(permissions) = &req.permissions {
            set.set("permissions", permissions.clone());
        }
        if let Some(status) = req.status {
            set.set("status", status.as_str());
        }
        if let Some(start_date) = req.start_date {
            set.set("start_date", start_date);
        }

        let sql = set.sql("team_members", id, MEMBER_COLUMNS);
        let row = conn.query_opt(sql.as_str(), &set.params()).await?;
        row.as_ref().map(member_from_row).transpose()
    }

    /// Delete a team member. Returns whether a row was removed.
    pub async fn member_delete(&self, id: MemberId) -> ApiResult<bool> {
        let conn = self.get_conn().await?;
        let deleted = conn
            .execute("DELETE FROM team_members WHERE id = $1", &[&id])
            .await?;
        Ok(deleted > 0)
    }

    /// List team members with filters and pagination.
    pub async fn member_list(
        &self,
        params: &MemberListParams,
    ) -> ApiResult<(Vec<TeamMember>, i64)> {
        let mut filter = SelectFilter::new();
        filter.facet("department", &params.department);
        filter.facet("role", &params.role);
        filter.facet("status", &params.status);
        filter.search(MEMBER_SEARCH, params.search.as_deref());

        let (rows, total) = self
            .list_page("team_members", MEMBER_COLUMNS, filter, &params.window())
            .await?;
        let items = rows.iter().map(member_from_row).collect::<ApiResult<_>>()?;
        Ok((items, total))
    }
}
