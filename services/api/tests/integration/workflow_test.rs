use hearth_api::error::ApiServiceError;
use hearth_api::usecase::inquiry::{
    CreateInquiryInput, CreateInquiryUseCase, ReviewInquiryInput, ReviewInquiryUseCase,
};
use hearth_domain::inquiry::InquiryStatus;
use hearth_domain::user::UserRole;
use hearth_domain::visit::VisitStatus;

use crate::helpers::MemoryStore;

fn review(status: &str) -> ReviewInquiryInput {
    ReviewInquiryInput {
        status: Some(status.into()),
        visit_date: None,
    }
}

async fn create_pending_inquiry(store: &MemoryStore) -> i32 {
    let user = store.seed_user("buyer@x.com", "secret", UserRole::User);
    let listing = store.seed_listing("Oceanview Apartment", 9_500_000);

    let create = CreateInquiryUseCase {
        users: store.clone(),
        listings: store.clone(),
        inquiries: store.clone(),
    };
    let inquiry = create
        .execute(CreateInquiryInput {
            user_id: Some(user.id),
            listing_id: Some(listing.id),
            budget: Some(8_000_000),
            location: Some("Mumbai".into()),
            property_type: Some("apartment".into()),
        })
        .await
        .unwrap();
    assert_eq!(inquiry.status, InquiryStatus::Pending);
    inquiry.id
}

#[tokio::test]
async fn approval_spawns_linked_pending_visit() {
    let store = MemoryStore::new();
    let inquiry_id = create_pending_inquiry(&store).await;

    let review_usecase = ReviewInquiryUseCase {
        repo: store.clone(),
    };
    let out = review_usecase
        .execute(inquiry_id, review("approved"))
        .await
        .unwrap();

    assert_eq!(out.inquiry.status, InquiryStatus::Approved);
    let visit = out.visit.expect("approval must spawn a visit");
    assert_eq!(visit.status, VisitStatus::Pending);
    assert_eq!(visit.inquiry_id, Some(inquiry_id));

    // exactly one visit exists, and it is the one reported to the caller
    let visits = store.visits.lock().unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].id, visit.id);
}

#[tokio::test]
async fn rejection_spawns_no_visit() {
    let store = MemoryStore::new();
    let inquiry_id = create_pending_inquiry(&store).await;

    let review_usecase = ReviewInquiryUseCase {
        repo: store.clone(),
    };
    let out = review_usecase
        .execute(inquiry_id, review("rejected"))
        .await
        .unwrap();

    assert_eq!(out.inquiry.status, InquiryStatus::Rejected);
    assert!(out.visit.is_none());
    assert!(store.visits.lock().unwrap().is_empty());
}

#[tokio::test]
async fn second_review_cannot_spawn_second_visit() {
    let store = MemoryStore::new();
    let inquiry_id = create_pending_inquiry(&store).await;

    let review_usecase = ReviewInquiryUseCase {
        repo: store.clone(),
    };
    review_usecase
        .execute(inquiry_id, review("approved"))
        .await
        .unwrap();

    for status in ["approved", "rejected"] {
        let result = review_usecase.execute(inquiry_id, review(status)).await;
        assert!(matches!(result, Err(ApiServiceError::AlreadyReviewed)));
    }
    assert_eq!(store.visits.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn inquiry_creation_validates_references() {
    let store = MemoryStore::new();
    let create = CreateInquiryUseCase {
        users: store.clone(),
        listings: store.clone(),
        inquiries: store.clone(),
    };

    let result = create
        .execute(CreateInquiryInput {
            user_id: Some(1),
            listing_id: Some(1),
            budget: None,
            location: None,
            property_type: None,
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::UserNotFound)));
    assert!(store.inquiries.lock().unwrap().is_empty());
}
