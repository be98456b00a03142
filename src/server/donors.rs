use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use server_fn::error::NoCustomError;

use crate::common::SubmitOutcome;
use crate::validation::{validate_donor, DonorInput};

#[cfg(feature = "server")]
use crate::database::{get_database, models::Donor, schema};

/// Donors shown per page in the list view.
pub const PER_PAGE: i64 = 10;

// Donor model for communication with the client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonorRecord {
    pub id: i64,
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub registration_date: String,
    pub last_donation: Option<String>,
    pub eligible: bool,
}

/// One page of the donor list plus the total count for the active filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonorPage {
    pub donors: Vec<DonorRecord>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Per-blood-group donor counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupCount {
    pub group: String,
    pub count: usize,
    pub eligible: usize,
}

/// Registry-wide statistics for the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_donors: usize,
    pub eligible_donors: usize,
    pub by_group: Vec<GroupCount>,
    pub last_updated: String,
}

/// Clamp a requested page into range and return `(page, offset)`.
/// Page numbers are 1-based; anything past the tail lands on the last page.
pub fn page_window(page: i64, per_page: i64, total: i64) -> (i64, i64) {
    let last_page = if total == 0 {
        1
    } else {
        (total + per_page - 1) / per_page
    };
    let page = page.clamp(1, last_page);
    (page, (page - 1) * per_page)
}

#[cfg(feature = "server")]
fn to_record(donor: Donor) -> DonorRecord {
    let eligible = donor.is_eligible();
    let registration_date = donor.format_registration_date();
    DonorRecord {
        id: donor.id.unwrap_or_default(),
        name: donor.name,
        blood_group: donor.blood_group,
        phone: donor.phone,
        email: donor.email,
        address: donor.address,
        registration_date,
        last_donation: donor.last_donation,
        eligible,
    }
}

#[cfg(feature = "server")]
async fn pool() -> Result<sqlx::Pool<sqlx::Sqlite>, ServerFnError<NoCustomError>> {
    get_database().await.map_err(|e| {
        tracing::error!("Database unavailable: {}", e);
        ServerFnError::<NoCustomError>::ServerError(format!("Database unavailable: {}", e))
    })
}

#[cfg(feature = "server")]
fn db_error(e: sqlx::Error) -> ServerFnError<NoCustomError> {
    tracing::error!("Database error: {}", e);
    ServerFnError::<NoCustomError>::ServerError(format!("Database error: {}", e))
}

/// List one page of donors, optionally filtered to a blood group.
#[server(ListDonors)]
pub async fn list_donors(
    page: i64,
    blood_group: Option<String>,
) -> Result<DonorPage, ServerFnError<NoCustomError>> {
    let pool = pool().await?;

    // One count query to clamp the page, one query for the rows
    let filter = blood_group.as_deref().filter(|g| !g.is_empty());
    let total = schema::count_donors(&pool, filter).await.map_err(db_error)?;
    let (page, offset) = page_window(page, PER_PAGE, total);

    let donors = schema::get_donors_page(&pool, PER_PAGE, offset, filter)
        .await
        .map_err(db_error)?;

    Ok(DonorPage {
        donors: donors.into_iter().map(to_record).collect(),
        total,
        page,
        per_page: PER_PAGE,
    })
}

/// Validate and register a new donor.
#[server(CreateDonor)]
pub async fn create_donor(
    input: DonorInput,
) -> Result<SubmitOutcome, ServerFnError<NoCustomError>> {
    let errors = validate_donor(&input);
    if !errors.is_empty() {
        return Ok(SubmitOutcome::fail(errors.join(", ")));
    }

    let pool = pool().await?;
    let donor = Donor::new(
        input.name.trim().to_string(),
        input.blood_group,
        input.phone,
        input.email,
        input.address,
    );

    let id = schema::save_donor(&pool, &donor).await.map_err(db_error)?;
    tracing::info!("Registered donor {} ({})", donor.name, id);

    Ok(SubmitOutcome::ok("Donor added successfully!"))
}

/// Fetch a single donor for the edit form.
#[server(FetchDonor)]
pub async fn fetch_donor(id: i64) -> Result<Option<DonorRecord>, ServerFnError<NoCustomError>> {
    let pool = pool().await?;
    let donor = schema::get_donor_by_id(&pool, id).await.map_err(db_error)?;
    Ok(donor.map(to_record))
}

/// Validate and update an existing donor.
#[server(UpdateDonor)]
pub async fn update_donor(
    id: i64,
    input: DonorInput,
) -> Result<SubmitOutcome, ServerFnError<NoCustomError>> {
    let errors = validate_donor(&input);
    if !errors.is_empty() {
        return Ok(SubmitOutcome::fail(errors.join(", ")));
    }

    let pool = pool().await?;
    let Some(existing) = schema::get_donor_by_id(&pool, id).await.map_err(db_error)? else {
        return Ok(SubmitOutcome::fail("Invalid donor ID"));
    };

    let updated = Donor {
        id: Some(id),
        name: input.name.trim().to_string(),
        blood_group: input.blood_group,
        phone: input.phone,
        email: input.email,
        address: input.address,
        registration_date: existing.registration_date,
        last_donation: existing.last_donation,
    };

    if schema::update_donor(&pool, id, &updated)
        .await
        .map_err(db_error)?
    {
        Ok(SubmitOutcome::ok("Donor updated successfully!"))
    } else {
        Ok(SubmitOutcome::fail("Invalid donor ID"))
    }
}

/// Delete a donor by id.
#[server(RemoveDonor)]
pub async fn remove_donor(id: i64) -> Result<SubmitOutcome, ServerFnError<NoCustomError>> {
    let pool = pool().await?;

    match schema::delete_donor(&pool, id).await.map_err(db_error)? {
        Some(name) => {
            tracing::info!("Deleted donor {} ({})", name, id);
            Ok(SubmitOutcome::ok(format!(
                "Donor {} deleted successfully!",
                name
            )))
        }
        None => Ok(SubmitOutcome::fail("Invalid donor ID")),
    }
}

/// Search donors by name, blood group or address, with optional filters.
#[server(SearchDonors)]
pub async fn search_donor_records(
    query: String,
    blood_group: Option<String>,
    eligible_only: bool,
) -> Result<Vec<DonorRecord>, ServerFnError<NoCustomError>> {
    tracing::info!("Searching donors for query: {}", query);
    let pool = pool().await?;

    let donors = if query.is_empty() {
        schema::get_all_donors(&pool).await.map_err(db_error)?
    } else {
        schema::search_donors(&pool, &query).await.map_err(db_error)?
    };

    let records = donors
        .into_iter()
        .map(to_record)
        .filter(|r| {
            blood_group
                .as_deref()
                .filter(|g| !g.is_empty())
                .map_or(true, |g| r.blood_group == g)
        })
        .filter(|r| !eligible_only || r.eligible)
        .collect();

    Ok(records)
}

/// Donor counts per blood group for the dashboard.
#[server(BloodGroupStats)]
pub async fn blood_group_stats() -> Result<RegistryStats, ServerFnError<NoCustomError>> {
    use crate::validation::BLOOD_GROUPS;

    let pool = pool().await?;
    let donors = schema::get_all_donors(&pool).await.map_err(db_error)?;
    let records: Vec<DonorRecord> = donors.into_iter().map(to_record).collect();

    let by_group = BLOOD_GROUPS
        .iter()
        .map(|group| GroupCount {
            group: group.to_string(),
            count: records.iter().filter(|r| r.blood_group == *group).count(),
            eligible: records
                .iter()
                .filter(|r| r.blood_group == *group && r.eligible)
                .count(),
        })
        .collect();

    Ok(RegistryStats {
        total_donors: records.len(),
        eligible_donors: records.iter().filter(|r| r.eligible).count(),
        by_group,
        last_updated: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

/// Write the full donor list to `data/donors.csv` on the server.
#[server(ExportDonorsCsv)]
pub async fn export_donors_csv() -> Result<SubmitOutcome, ServerFnError<NoCustomError>> {
    let pool = pool().await?;
    let donors = schema::get_all_donors(&pool).await.map_err(db_error)?;
    let count = donors.len();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "name",
            "blood_group",
            "phone",
            "email",
            "address",
            "registration_date",
            "last_donation",
        ])
        .map_err(|e| ServerFnError::<NoCustomError>::ServerError(format!("CSV error: {}", e)))?;

    for donor in donors {
        let registration = donor.format_registration_date();
        writer
            .write_record([
                donor.name.as_str(),
                donor.blood_group.as_str(),
                donor.phone.as_str(),
                donor.email.as_str(),
                donor.address.as_str(),
                registration.as_str(),
                donor.last_donation.as_deref().unwrap_or(""),
            ])
            .map_err(|e| {
                ServerFnError::<NoCustomError>::ServerError(format!("CSV error: {}", e))
            })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ServerFnError::<NoCustomError>::ServerError(format!("CSV error: {}", e)))?;

    let export_dir = std::path::Path::new("data");
    if let Err(e) = std::fs::create_dir_all(export_dir) {
        tracing::error!("Could not create export directory: {}", e);
        return Ok(SubmitOutcome::fail("Export failed"));
    }
    let export_path = export_dir.join("donors.csv");
    match std::fs::write(&export_path, bytes) {
        Ok(()) => {
            tracing::info!("Exported {} donors to {}", count, export_path.display());
            Ok(SubmitOutcome::ok(format!(
                "Exported {} donors to {}",
                count,
                export_path.display()
            )))
        }
        Err(e) => {
            tracing::error!("CSV export failed: {}", e);
            Ok(SubmitOutcome::fail("Export failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_clamps_below_and_above() {
        // 25 rows at 10 per page -> 3 pages
        assert_eq!(page_window(0, 10, 25), (1, 0));
        assert_eq!(page_window(1, 10, 25), (1, 0));
        assert_eq!(page_window(3, 10, 25), (3, 20));
        assert_eq!(page_window(7, 10, 25), (3, 20));
    }

    #[test]
    fn page_window_with_no_rows() {
        assert_eq!(page_window(5, 10, 0), (1, 0));
    }

    #[test]
    fn page_window_exact_multiple() {
        assert_eq!(page_window(2, 10, 20), (2, 10));
        assert_eq!(page_window(3, 10, 20), (2, 10));
    }
}
