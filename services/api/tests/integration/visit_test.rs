use hearth_api::error::ApiServiceError;
use hearth_api::usecase::visit::{
    BookVisitInput, BookVisitUseCase, DeleteVisitUseCase, ListVisitsUseCase, UpdateVisitInput,
    UpdateVisitUseCase,
};
use hearth_domain::user::UserRole;
use hearth_domain::visit::VisitStatus;

use crate::helpers::MemoryStore;

#[tokio::test]
async fn booked_visit_flows_through_confirmation_and_deletion() {
    let store = MemoryStore::new();
    let user = store.seed_user("visitor@x.com", "secret", UserRole::User);
    let listing = store.seed_listing("Maple Villa", 6_500_000);

    let book = BookVisitUseCase {
        listings: store.clone(),
        visits: store.clone(),
    };
    let visit = book
        .execute(
            user.id,
            BookVisitInput {
                listing_id: Some(listing.id),
                date: Some("2026-10-01".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(visit.status, VisitStatus::Pending);
    assert!(visit.inquiry_id.is_none());

    let list = ListVisitsUseCase { repo: store.clone() };
    assert_eq!(list.execute(Some("pending".into())).await.unwrap().len(), 1);
    assert_eq!(
        list.execute(Some("confirmed".into())).await.unwrap().len(),
        0
    );

    let update = UpdateVisitUseCase { repo: store.clone() };
    let confirmed = update
        .execute(
            visit.id,
            UpdateVisitInput {
                date: None,
                status: Some("confirmed".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(confirmed.status, VisitStatus::Confirmed);
    assert_eq!(
        list.execute(Some("confirmed".into())).await.unwrap().len(),
        1
    );

    let delete = DeleteVisitUseCase { repo: store.clone() };
    delete.execute(visit.id).await.unwrap();
    assert!(list.execute(None).await.unwrap().is_empty());

    let result = delete.execute(visit.id).await;
    assert!(matches!(result, Err(ApiServiceError::VisitNotFound)));
}

#[tokio::test]
async fn booking_against_unknown_listing_fails() {
    let store = MemoryStore::new();
    let user = store.seed_user("visitor@x.com", "secret", UserRole::User);

    let book = BookVisitUseCase {
        listings: store.clone(),
        visits: store.clone(),
    };
    let result = book
        .execute(
            user.id,
            BookVisitInput {
                listing_id: Some(99),
                date: None,
            },
        )
        .await;
    assert!(matches!(result, Err(ApiServiceError::ListingNotFound)));
    assert!(store.visits.lock().unwrap().is_empty());
}
