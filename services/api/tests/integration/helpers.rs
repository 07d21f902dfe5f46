use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use hearth_api::domain::repository::{
    InquiryRepository, ListingRepository, UserRepository, VisitRepository,
};
use hearth_api::domain::types::{
    Inquiry, Listing, NewInquiry, NewListing, NewUser, NewVisit, TransitionOutcome, User, Visit,
};
use hearth_api::error::ApiServiceError;
use hearth_api::usecase::auth::hash_password;
use hearth_domain::inquiry::InquiryStatus;
use hearth_domain::user::UserRole;
use hearth_domain::visit::VisitStatus;

/// In-memory store implementing every repository trait, with the same
/// conditional-transition semantics as the database implementation. Clones
/// share state, so one store can back several usecases in a test.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub users: Arc<Mutex<Vec<User>>>,
    pub listings: Arc<Mutex<Vec<Listing>>>,
    pub inquiries: Arc<Mutex<Vec<Inquiry>>>,
    pub visits: Arc<Mutex<Vec<Visit>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, email: &str, password: &str, role: UserRole) -> User {
        let mut users = self.users.lock().unwrap();
        let now = Utc::now();
        let user = User {
            id: users.len() as i32 + 1,
            name: "Test User".into(),
            email: email.into(),
            password_hash: Some(hash_password(password).unwrap()),
            phone: "9876543210".into(),
            role,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        user
    }

    pub fn seed_listing(&self, title: &str, price: i64) -> Listing {
        let mut listings = self.listings.lock().unwrap();
        let listing = Listing {
            id: listings.len() as i32 + 1,
            title: title.into(),
            price,
            location: "Mumbai".into(),
            description: None,
            image_url: None,
            created_at: Utc::now(),
        };
        listings.push(listing.clone());
        listing
    }
}

impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        let created = User {
            id: users.len() as i32 + 1,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            phone: user.phone.clone(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_profile(
        &self,
        id: i32,
        name: &str,
        email: &str,
    ) -> Result<Option<User>, ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.name = name.to_owned();
        user.email = email.to_owned();
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn update_password(
        &self,
        id: i32,
        password_hash: &str,
    ) -> Result<(), ApiServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.password_hash = Some(password_hash.to_owned());
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

impl ListingRepository for MemoryStore {
    async fn create(&self, listing: &NewListing) -> Result<Listing, ApiServiceError> {
        let mut listings = self.listings.lock().unwrap();
        let created = Listing {
            id: listings.len() as i32 + 1,
            title: listing.title.clone(),
            price: listing.price,
            location: listing.location.clone(),
            description: listing.description.clone(),
            image_url: listing.image_url.clone(),
            created_at: listing.created_at,
        };
        listings.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Listing>, ApiServiceError> {
        Ok(self.listings.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Listing>, ApiServiceError> {
        Ok(self
            .listings
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }
}

impl InquiryRepository for MemoryStore {
    async fn create(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiServiceError> {
        let mut inquiries = self.inquiries.lock().unwrap();
        let created = Inquiry {
            id: inquiries.len() as i32 + 1,
            budget: inquiry.budget,
            location: inquiry.location.clone(),
            property_type: inquiry.property_type.clone(),
            status: InquiryStatus::Pending,
            user_id: inquiry.user_id,
            listing_id: inquiry.listing_id,
            created_at: inquiry.created_at,
        };
        inquiries.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Inquiry>, ApiServiceError> {
        Ok(self.inquiries.lock().unwrap().clone())
    }

    async fn transition(
        &self,
        id: i32,
        status: InquiryStatus,
        visit_date: DateTime<Utc>,
    ) -> Result<TransitionOutcome, ApiServiceError> {
        let mut inquiries = self.inquiries.lock().unwrap();
        let Some(inquiry) = inquiries.iter_mut().find(|i| i.id == id) else {
            return Ok(TransitionOutcome::NotFound);
        };
        if inquiry.status != InquiryStatus::Pending {
            return Ok(TransitionOutcome::NotPending);
        }
        inquiry.status = status;

        let visit = if status == InquiryStatus::Approved {
            let mut visits = self.visits.lock().unwrap();
            let visit = Visit {
                id: visits.len() as i32 + 1,
                date: visit_date,
                status: VisitStatus::Pending,
                inquiry_id: Some(id),
                user_id: Some(inquiry.user_id),
                listing_id: Some(inquiry.listing_id),
                created_at: Utc::now(),
            };
            visits.push(visit.clone());
            Some(visit)
        } else {
            None
        };

        Ok(TransitionOutcome::Applied {
            inquiry: inquiry.clone(),
            visit,
        })
    }
}

impl VisitRepository for MemoryStore {
    async fn create(&self, visit: &NewVisit) -> Result<Visit, ApiServiceError> {
        let mut visits = self.visits.lock().unwrap();
        let created = Visit {
            id: visits.len() as i32 + 1,
            date: visit.date,
            status: VisitStatus::Pending,
            inquiry_id: visit.inquiry_id,
            user_id: visit.user_id,
            listing_id: visit.listing_id,
            created_at: visit.created_at,
        };
        visits.push(created.clone());
        Ok(created)
    }

    async fn list(&self, status: Option<VisitStatus>) -> Result<Vec<Visit>, ApiServiceError> {
        Ok(self
            .visits
            .lock()
            .unwrap()
            .iter()
            .filter(|v| status.is_none_or(|s| v.status == s))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i32,
        date: Option<DateTime<Utc>>,
        status: Option<VisitStatus>,
    ) -> Result<Option<Visit>, ApiServiceError> {
        let mut visits = self.visits.lock().unwrap();
        let Some(visit) = visits.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };
        if let Some(date) = date {
            visit.date = date;
        }
        if let Some(status) = status {
            visit.status = status;
        }
        Ok(Some(visit.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        let mut visits = self.visits.lock().unwrap();
        let before = visits.len();
        visits.retain(|v| v.id != id);
        Ok(visits.len() < before)
    }
}
