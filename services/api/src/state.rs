use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbInquiryRepository, DbListingRepository, DbReportRepository, DbUserRepository,
    DbVisitRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub cookie_domain: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn listing_repo(&self) -> DbListingRepository {
        DbListingRepository {
            db: self.db.clone(),
        }
    }

    pub fn inquiry_repo(&self) -> DbInquiryRepository {
        DbInquiryRepository {
            db: self.db.clone(),
        }
    }

    pub fn visit_repo(&self) -> DbVisitRepository {
        DbVisitRepository {
            db: self.db.clone(),
        }
    }

    pub fn report_repo(&self) -> DbReportRepository {
        DbReportRepository {
            db: self.db.clone(),
        }
    }
}
