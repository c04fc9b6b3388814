//! OpenAPI specification for the Felt & Slate API.
//!
//! utoipa generates the document from the route annotations and the schema
//! derives on the domain and request types.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes::{blog_post, contact, health, product, public, team_member};
use crate::types::{
    CreateContactRequest, CreateMemberRequest, CreatePostRequest, CreateProductRequest,
    CreateReplyRequest, MessageResponse, Paginated, PublicPost, PublicProduct,
    UpdateContactRequest, UpdateMemberRequest, UpdatePostRequest, UpdateProductRequest,
};

use felt_core::{
    BlogPost, Contact, ContactPriority, ContactReply, ContactStatus, MemberStatus, PageMeta,
    PostStatus, Product, ProductStatus, TeamMember,
};

/// OpenAPI document for the Felt & Slate API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Felt & Slate API",
        version = "0.3.0",
        description = "Catalog, blog, contact, and team backend for the Felt & Slate pool table store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Felt & Slate Engineering", email = "dev@feltandslate.com")
    ),
    servers(
        (url = "https://api.feltandslate.com", description = "Production"),
        (url = "http://localhost:3000", description = "Local Development")
    ),
    tags(
        (name = "Products", description = "Catalog management"),
        (name = "Blog", description = "Blog post management"),
        (name = "Contacts", description = "Contact inquiries and replies"),
        (name = "Team", description = "Team member management"),
        (name = "Public", description = "Read-only public site endpoints"),
        (name = "Health", description = "Service health probes")
    ),
    paths(
        // === Product Routes ===
        product::list_products,
        product::create_product,
        product::get_product,
        product::update_product,
        product::delete_product,

        // === Blog Routes ===
        blog_post::list_posts,
        blog_post::create_post,
        blog_post::get_post,
        blog_post::update_post,
        blog_post::delete_post,

        // === Contact Routes ===
        contact::list_contacts,
        contact::create_contact,
        contact::get_contact,
        contact::update_contact,
        contact::delete_contact,
        contact::create_reply,

        // === Team Routes ===
        team_member::list_members,
        team_member::create_member,
        team_member::get_member,
        team_member::update_member,
        team_member::delete_member,

        // === Public Routes ===
        public::list_public_products,
        public::get_public_product,
        public::list_public_posts,
        public::get_public_post,

        // === Health Routes ===
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        // Domain entities
        Product,
        ProductStatus,
        BlogPost,
        PostStatus,
        Contact,
        ContactReply,
        ContactStatus,
        ContactPriority,
        TeamMember,
        MemberStatus,

        // Request types
        CreateProductRequest,
        UpdateProductRequest,
        CreatePostRequest,
        UpdatePostRequest,
        CreateContactRequest,
        UpdateContactRequest,
        CreateReplyRequest,
        CreateMemberRequest,
        UpdateMemberRequest,

        // Response envelopes
        PageMeta,
        MessageResponse,
        Paginated<Product>,
        Paginated<BlogPost>,
        Paginated<Contact>,
        Paginated<TeamMember>,
        PublicProduct,
        PublicPost,
        Paginated<PublicProduct>,
        Paginated<PublicPost>,

        // Errors
        ApiError,
        ErrorCode,

        // Health
        health::HealthResponse,
        health::HealthStatus,
        health::HealthDetails,
        health::ComponentHealth,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).expect("document serializes");
        assert_eq!(json["info"]["title"], "Felt & Slate API");
        assert!(json["paths"].get("/api/products").is_some());
        assert!(json["paths"].get("/api/public/blog-posts").is_some());
    }

    #[test]
    fn every_tag_is_used_by_some_path() {
        let doc = ApiDoc::openapi();
        let tags: Vec<String> = doc
            .tags
            .iter()
            .flatten()
            .map(|t| t.name.clone())
            .collect();
        let json = serde_json::to_value(&doc).expect("document serializes");
        let paths = json["paths"].as_object().expect("paths object");

        for tag in tags {
            let used = paths.values().any(|ops| {
                ops.as_object()
                    .map(|methods| {
                        methods.values().any(|op| {
                            op["tags"]
                                .as_array()
                                .map(|ts| ts.iter().any(|t| t == tag.as_str()))
                                .unwrap_or(false)
                        })
                    })
                    .unwrap_or(false)
            });
            assert!(used, "tag {tag} has no operations");
        }
    }
}
