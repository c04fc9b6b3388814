#![cfg(feature = "db-tests")]
//! Integration tests for the contact inquiry lifecycle.
//!
//! Covers the reply transaction (reply insert + parent status transition),
//! eager reply loading in newest-first order, and cascade delete.

use felt_api::types::{CreateContactRequest, CreateReplyRequest, UpdateContactRequest};
use felt_core::{ContactPriority, ContactStatus};
use uuid::Uuid;

#[path = "support/db.rs"]
mod test_db_support;
use test_db_support::test_db_client;

fn sample_contact() -> CreateContactRequest {
    CreateContactRequest {
        name: "Jordan Miller".to_string(),
        email: format!("jordan+{}@example.com", Uuid::now_v7().simple()),
        phone: None,
        subject: Some("Delivery question".to_string()),
        message: "Do you deliver 9ft tables to the third floor?".to_string(),
        category: None,
        source: None,
        status: None,
        priority: None,
    }
}

#[tokio::test]
async fn contact_defaults_are_applied() {
    let db = test_db_client();

    let contact = db.contact_create(&sample_contact()).await.expect("create");
    assert_eq!(contact.status, ContactStatus::New);
    assert_eq!(contact.priority, ContactPriority::Medium);
    assert_eq!(contact.category, "General");
    assert_eq!(contact.source, "website");
    assert!(contact.replies.is_empty());

    db.contact_delete(contact.id).await.expect("cleanup");
}

#[tokio::test]
async fn reply_marks_contact_replied_and_orders_newest_first() {
    let db = test_db_client();

    let contact = db.contact_create(&sample_contact()).await.expect("create");

    let first = CreateReplyRequest {
        message: "Yes, third-floor delivery is available.".to_string(),
        author: Some("Sam".to_string()),
    };
    let second = CreateReplyRequest {
        message: "Following up with the scheduling link.".to_string(),
        author: Some("Sam".to_string()),
    };

    let first_reply = db
        .reply_create(contact.id, &first)
        .await
        .expect("first reply")
        .expect("contact exists");
    assert_eq!(first_reply.contact_id, contact.id);

    db.reply_create(contact.id, &second)
        .await
        .expect("second reply")
        .expect("contact exists");

    let fetched = db
        .contact_get(contact.id)
        .await
        .expect("get")
        .expect("contact exists");
    assert_eq!(fetched.status, ContactStatus::Replied);
    assert_eq!(fetched.replies.len(), 2);
    assert_eq!(fetched.replies[0].message, second.message);
    assert_eq!(fetched.replies[1].message, first.message);
    assert!(fetched.replies[0].created_at >= fetched.replies[1].created_at);

    db.contact_delete(contact.id).await.expect("cleanup");
}

#[tokio::test]
async fn reply_to_missing_contact_is_none() {
    let db = test_db_client();

    let req = CreateReplyRequest {
        message: "Hello?".to_string(),
        author: None,
    };
    let reply = db.reply_create(Uuid::now_v7(), &req).await.expect("call");
    assert!(reply.is_none());
}

#[tokio::test]
async fn status_update_and_cascade_delete() {
    let db = test_db_client();

    let contact = db.contact_create(&sample_contact()).await.expect("create");
    db.reply_create(
        contact.id,
        &CreateReplyRequest {
            message: "On it.".to_string(),
            author: None,
        },
    )
    .await
    .expect("reply")
    .expect("contact exists");

    let update = UpdateContactRequest {
        status: Some(ContactStatus::Closed),
        ..UpdateContactRequest::default()
    };
    let updated = db
        .contact_update(contact.id, &update)
        .await
        .expect("update")
        .expect("contact exists");
    assert_eq!(updated.status, ContactStatus::Closed);
    // Replies survive a status change.
    assert_eq!(updated.replies.len(), 1);

    assert!(db.contact_delete(contact.id).await.expect("delete"));
    assert!(db.contact_get(contact.id).await.expect("get").is_none());
}
