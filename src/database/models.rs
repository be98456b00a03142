use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Days a donor must wait between donations.
pub const DONATION_COOLDOWN_DAYS: i64 = 90;

/// A registered donor as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donor {
    /// Unique identifier
    pub id: Option<i64>,
    /// Full name, letters and spaces only
    pub name: String,
    /// One of the eight blood groups
    pub blood_group: String,
    /// 10-digit phone number
    pub phone: String,
    pub email: String,
    pub address: String,
    /// When the donor was registered
    #[serde(with = "time::serde::timestamp::option")]
    pub registration_date: Option<OffsetDateTime>,
    /// Date of the most recent donation, `YYYY-MM-DD`
    pub last_donation: Option<String>,
}

impl Donor {
    /// Create a new donor record stamped with the current time
    pub fn new(
        name: String,
        blood_group: String,
        phone: String,
        email: String,
        address: String,
    ) -> Self {
        Self {
            id: None,
            name,
            blood_group,
            phone,
            email,
            address,
            registration_date: Some(OffsetDateTime::now_utc()),
            last_donation: None,
        }
    }

    /// Whether the donor may donate today: no recorded donation, or the
    /// last one was at least the cooldown period ago. An unparseable date
    /// counts as eligible, matching how the registry treats missing data.
    pub fn is_eligible(&self) -> bool {
        self.eligible_on(Local::now().date_naive())
    }

    pub fn eligible_on(&self, today: NaiveDate) -> bool {
        let Some(last) = self.last_donation.as_deref() else {
            return true;
        };
        match NaiveDate::parse_from_str(last, "%Y-%m-%d") {
            Ok(last_date) => (today - last_date).num_days() >= DONATION_COOLDOWN_DAYS,
            Err(_) => true,
        }
    }

    /// Format the registration date as a readable string
    pub fn format_registration_date(&self) -> String {
        if let Some(date) = self.registration_date {
            time::format_description::parse("[year]-[month]-[day]")
                .map(|fmt| {
                    date.format(&fmt)
                        .unwrap_or_else(|_| "Invalid date".to_string())
                })
                .unwrap_or_else(|_| "Invalid date".to_string())
        } else {
            "Unknown date".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor_with_last_donation(last: Option<&str>) -> Donor {
        Donor {
            id: Some(1),
            name: "Jane Doe".to_string(),
            blood_group: "O+".to_string(),
            phone: "0123456789".to_string(),
            email: "jane@example.com".to_string(),
            address: "12 Elm Street".to_string(),
            registration_date: None,
            last_donation: last.map(str::to_string),
        }
    }

    #[test]
    fn no_recorded_donation_is_eligible() {
        assert!(donor_with_last_donation(None).is_eligible());
    }

    #[test]
    fn cooldown_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let donor = donor_with_last_donation(Some("2024-03-03"));
        // 90 days before 2024-06-01 is 2024-03-03
        assert!(donor.eligible_on(today));

        let donor = donor_with_last_donation(Some("2024-03-04"));
        assert!(!donor.eligible_on(today));
    }

    #[test]
    fn unparseable_date_is_treated_as_eligible() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(donor_with_last_donation(Some("yesterday")).eligible_on(today));
    }
}
