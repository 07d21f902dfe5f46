use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use hearth_domain::inquiry::InquiryStatus;
use hearth_domain::user::UserRole;
use hearth_domain::visit::VisitStatus;

/// Minimum accepted password length for signup and password changes.
pub const PASSWORD_MIN_LEN: usize = 6;

/// User account. `password_hash` is `None` for lead-captured records that
/// never completed signup; it must never appear in a read projection.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a user row (signup and lead capture).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Property listing.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: i32,
    pub title: String,
    pub price: i64,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub price: i64,
    pub location: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Property inquiry. Status starts at `Pending` and moves at most once.
#[derive(Debug, Clone)]
pub struct Inquiry {
    pub id: i32,
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub status: InquiryStatus,
    pub user_id: i32,
    pub listing_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub budget: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub user_id: i32,
    pub listing_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Site visit. `inquiry_id` is set when the visit was spawned by an
/// inquiry approval; direct bookings carry `user_id` + `listing_id` only.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub status: VisitStatus,
    pub inquiry_id: Option<i32>,
    pub user_id: Option<i32>,
    pub listing_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewVisit {
    pub date: DateTime<Utc>,
    pub inquiry_id: Option<i32>,
    pub user_id: Option<i32>,
    pub listing_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Result of the conditional inquiry transition.
///
/// `Applied` carries the visit created alongside an approval (`None` for a
/// rejection). `NotPending` means the row exists but is already terminal —
/// the conditional update matched zero rows, so no second visit can ever be
/// created for the same inquiry.
#[derive(Debug, Clone)]
pub enum TransitionOutcome {
    Applied {
        inquiry: Inquiry,
        visit: Option<Visit>,
    },
    NotPending,
    NotFound,
}

/// One row of the visits-by-status report.
#[derive(Debug, Clone)]
pub struct StatusCount {
    pub status: VisitStatus,
    pub count: i64,
}

/// One row of the visits-per-month report.
#[derive(Debug, Clone)]
pub struct MonthCount {
    pub month: DateTime<Utc>,
    pub count: i64,
}

/// Validate an email address: one `@`, a non-empty local part of
/// `[A-Za-z0-9._%+-]`, and a dotted domain whose final label is 2-4 chars.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
    {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    if !labels.iter().all(|label| {
        !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    }) {
        return false;
    }
    let tld = labels[labels.len() - 1];
    (2..=4).contains(&tld.len())
}

/// Validate a phone number: exactly 10 ASCII digits.
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

/// Parse a caller-supplied visit date. Accepts RFC 3339 timestamps and
/// bare `YYYY-MM-DD` dates (interpreted as midnight UTC).
pub fn parse_visit_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}
