use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, FromQueryResult, IntoActiveModel as _, PaginatorTrait, QueryFilter, QueryOrder,
    Statement, TransactionTrait, sea_query::Expr,
};

use hearth_api_schema::{inquiries, listings, users, visits};
use hearth_domain::inquiry::InquiryStatus;
use hearth_domain::user::UserRole;
use hearth_domain::visit::VisitStatus;

use crate::domain::repository::{
    InquiryRepository, ListingRepository, ReportRepository, UserRepository, VisitRepository,
};
use crate::domain::types::{
    Inquiry, Listing, MonthCount, NewInquiry, NewListing, NewUser, NewVisit, StatusCount,
    TransitionOutcome, User, Visit,
};
use crate::error::ApiServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiServiceError> {
        let model = users::ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            phone: Set(user.phone.clone()),
            role: Set(user.role.as_str().to_owned()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        user_from_model(model)
    }

    async fn update_profile(
        &self,
        id: i32,
        name: &str,
        email: &str,
    ) -> Result<Option<User>, ApiServiceError> {
        let Some(model) = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for profile update")?
        else {
            return Ok(None);
        };
        let mut user = model.into_active_model();
        user.name = Set(name.to_owned());
        user.email = Set(email.to_owned());
        user.updated_at = Set(Utc::now());
        let updated = user.update(&self.db).await.context("update user profile")?;
        Ok(Some(user_from_model(updated)?))
    }

    async fn update_password(
        &self,
        id: i32,
        password_hash: &str,
    ) -> Result<(), ApiServiceError> {
        let mut user = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        user.password_hash = Set(Some(password_hash.to_owned()));
        user.updated_at = Set(Utc::now());
        user.update(&self.db).await.context("update user password")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiServiceError> {
    let role = UserRole::from_str_value(&model.role)
        .ok_or_else(|| anyhow::anyhow!("unknown role in users.role: {}", model.role))?;
    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        phone: model.phone,
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Listing repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbListingRepository {
    pub db: DatabaseConnection,
}

impl ListingRepository for DbListingRepository {
    async fn create(&self, listing: &NewListing) -> Result<Listing, ApiServiceError> {
        let model = listings::ActiveModel {
            title: Set(listing.title.clone()),
            price: Set(listing.price),
            location: Set(listing.location.clone()),
            description: Set(listing.description.clone()),
            image_url: Set(listing.image_url.clone()),
            created_at: Set(listing.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create listing")?;
        Ok(listing_from_model(model))
    }

    async fn list(&self) -> Result<Vec<Listing>, ApiServiceError> {
        let models = listings::Entity::find()
            .order_by_asc(listings::Column::Id)
            .all(&self.db)
            .await
            .context("list listings")?;
        Ok(models.into_iter().map(listing_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Listing>, ApiServiceError> {
        let model = listings::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find listing by id")?;
        Ok(model.map(listing_from_model))
    }
}

fn listing_from_model(model: listings::Model) -> Listing {
    Listing {
        id: model.id,
        title: model.title,
        price: model.price,
        location: model.location,
        description: model.description,
        image_url: model.image_url,
        created_at: model.created_at,
    }
}

// ── Inquiry repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInquiryRepository {
    pub db: DatabaseConnection,
}

/// Raw transaction outcome; converted to domain types outside the closure
/// because the closure's error type is pinned to `DbErr`.
enum TxnOutcome {
    Applied(inquiries::Model, Option<visits::Model>),
    NotPending,
    NotFound,
}

impl InquiryRepository for DbInquiryRepository {
    async fn create(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiServiceError> {
        let model = inquiries::ActiveModel {
            budget: Set(inquiry.budget),
            location: Set(inquiry.location.clone()),
            property_type: Set(inquiry.property_type.clone()),
            status: Set(InquiryStatus::Pending.as_str().to_owned()),
            user_id: Set(inquiry.user_id),
            listing_id: Set(inquiry.listing_id),
            created_at: Set(inquiry.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create inquiry")?;
        inquiry_from_model(model)
    }

    async fn list(&self) -> Result<Vec<Inquiry>, ApiServiceError> {
        let models = inquiries::Entity::find()
            .order_by_desc(inquiries::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list inquiries")?;
        models.into_iter().map(inquiry_from_model).collect()
    }

    async fn transition(
        &self,
        id: i32,
        status: InquiryStatus,
        visit_date: DateTime<Utc>,
    ) -> Result<TransitionOutcome, ApiServiceError> {
        let outcome = self
            .db
            .transaction::<_, TxnOutcome, sea_orm::DbErr>(move |txn| {
                Box::pin(async move {
                    let Some(mut model) = inquiries::Entity::find_by_id(id).one(txn).await?
                    else {
                        return Ok(TxnOutcome::NotFound);
                    };

                    // Conditional on the stored status still being pending:
                    // two concurrent reviews race on this update and exactly
                    // one observes rows_affected == 1.
                    let updated = inquiries::Entity::update_many()
                        .filter(inquiries::Column::Id.eq(id))
                        .filter(inquiries::Column::Status.eq(InquiryStatus::Pending.as_str()))
                        .col_expr(inquiries::Column::Status, Expr::value(status.as_str()))
                        .exec(txn)
                        .await?;
                    if updated.rows_affected == 0 {
                        return Ok(TxnOutcome::NotPending);
                    }
                    model.status = status.as_str().to_owned();

                    let visit = if status == InquiryStatus::Approved {
                        Some(
                            visits::ActiveModel {
                                date: Set(visit_date),
                                status: Set(VisitStatus::Pending.as_str().to_owned()),
                                inquiry_id: Set(Some(model.id)),
                                user_id: Set(Some(model.user_id)),
                                listing_id: Set(Some(model.listing_id)),
                                created_at: Set(Utc::now()),
                                ..Default::default()
                            }
                            .insert(txn)
                            .await?,
                        )
                    } else {
                        None
                    };

                    Ok(TxnOutcome::Applied(model, visit))
                })
            })
            .await
            .context("transition inquiry")?;

        Ok(match outcome {
            TxnOutcome::Applied(model, visit) => TransitionOutcome::Applied {
                inquiry: inquiry_from_model(model)?,
                visit: visit.map(visit_from_model).transpose()?,
            },
            TxnOutcome::NotPending => TransitionOutcome::NotPending,
            TxnOutcome::NotFound => TransitionOutcome::NotFound,
        })
    }
}

fn inquiry_from_model(model: inquiries::Model) -> Result<Inquiry, ApiServiceError> {
    let status = InquiryStatus::from_str_value(&model.status)
        .ok_or_else(|| anyhow::anyhow!("unknown status in inquiries.status: {}", model.status))?;
    Ok(Inquiry {
        id: model.id,
        budget: model.budget,
        location: model.location,
        property_type: model.property_type,
        status,
        user_id: model.user_id,
        listing_id: model.listing_id,
        created_at: model.created_at,
    })
}

// ── Visit repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVisitRepository {
    pub db: DatabaseConnection,
}

impl VisitRepository for DbVisitRepository {
    async fn create(&self, visit: &NewVisit) -> Result<Visit, ApiServiceError> {
        let model = visits::ActiveModel {
            date: Set(visit.date),
            status: Set(VisitStatus::Pending.as_str().to_owned()),
            inquiry_id: Set(visit.inquiry_id),
            user_id: Set(visit.user_id),
            listing_id: Set(visit.listing_id),
            created_at: Set(visit.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create visit")?;
        visit_from_model(model)
    }

    async fn list(&self, status: Option<VisitStatus>) -> Result<Vec<Visit>, ApiServiceError> {
        let mut query = visits::Entity::find();
        if let Some(status) = status {
            query = query.filter(visits::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_desc(visits::Column::Date)
            .all(&self.db)
            .await
            .context("list visits")?;
        models.into_iter().map(visit_from_model).collect()
    }

    async fn update(
        &self,
        id: i32,
        date: Option<DateTime<Utc>>,
        status: Option<VisitStatus>,
    ) -> Result<Option<Visit>, ApiServiceError> {
        let Some(model) = visits::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find visit for update")?
        else {
            return Ok(None);
        };
        let mut visit = model.into_active_model();
        if let Some(date) = date {
            visit.date = Set(date);
        }
        if let Some(status) = status {
            visit.status = Set(status.as_str().to_owned());
        }
        let updated = visit.update(&self.db).await.context("update visit")?;
        Ok(Some(visit_from_model(updated)?))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError> {
        let result = visits::Entity::delete_many()
            .filter(visits::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete visit")?;
        Ok(result.rows_affected > 0)
    }
}

fn visit_from_model(model: visits::Model) -> Result<Visit, ApiServiceError> {
    let status = VisitStatus::parse(&model.status)
        .ok_or_else(|| anyhow::anyhow!("unknown status in visits.status: {}", model.status))?;
    Ok(Visit {
        id: model.id,
        date: model.date,
        status,
        inquiry_id: model.inquiry_id,
        user_id: model.user_id,
        listing_id: model.listing_id,
        created_at: model.created_at,
    })
}

// ── Report repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReportRepository {
    pub db: DatabaseConnection,
}

impl ReportRepository for DbReportRepository {
    async fn visit_counts_by_status(&self) -> Result<Vec<StatusCount>, ApiServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct StatusCountRow {
            status: String,
            count: i64,
        }

        let rows = StatusCountRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            "SELECT status, COUNT(*) AS count FROM visits GROUP BY status",
        ))
        .all(&self.db)
        .await
        .context("visit counts by status")?;

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            let status = VisitStatus::parse(&row.status)
                .ok_or_else(|| anyhow::anyhow!("unknown status in visits.status: {}", row.status))?;
            counts.push(StatusCount {
                status,
                count: row.count,
            });
        }
        Ok(counts)
    }

    async fn visit_counts_by_month(&self) -> Result<Vec<MonthCount>, ApiServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct MonthCountRow {
            month: DateTime<Utc>,
            count: i64,
        }

        let rows = MonthCountRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            r#"
            SELECT date_trunc('month', created_at) AS month, COUNT(*) AS count
                FROM visits
                GROUP BY month
                ORDER BY month
            "#,
        ))
        .all(&self.db)
        .await
        .context("visit counts by month")?;

        Ok(rows
            .into_iter()
            .map(|row| MonthCount {
                month: row.month,
                count: row.count,
            })
            .collect())
    }

    async fn inquiry_count(&self) -> Result<u64, ApiServiceError> {
        let count = inquiries::Entity::find()
            .count(&self.db)
            .await
            .context("count inquiries")?;
        Ok(count)
    }
}
