use crate::database::models::Donor;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::{Pool, Sqlite};

const DONOR_COLUMNS: &str =
    "id, name, blood_group, phone, email, address, registration_date, last_donation";

fn donor_from_row(row: &SqliteRow) -> Donor {
    let timestamp: Option<i64> = row.get("registration_date");
    Donor {
        id: row.get("id"),
        name: row.get("name"),
        blood_group: row.get("blood_group"),
        phone: row.get("phone"),
        email: row.get("email"),
        address: row.get("address"),
        registration_date: timestamp
            .and_then(|ts| time::OffsetDateTime::from_unix_timestamp(ts).ok()),
        last_donation: row.get("last_donation"),
    }
}

/// Insert a donor and return the new row id
pub async fn save_donor(pool: &Pool<Sqlite>, donor: &Donor) -> Result<i64, sqlx::Error> {
    let query = sqlx::query(
        r#"
        INSERT INTO donors (
            name, blood_group, phone, email, address, registration_date, last_donation
        ) VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&donor.name)
    .bind(&donor.blood_group)
    .bind(&donor.phone)
    .bind(&donor.email)
    .bind(&donor.address)
    .bind(donor.registration_date.map(|dt| dt.unix_timestamp()))
    .bind(&donor.last_donation);

    let id = query.fetch_one(pool).await?.get(0);
    Ok(id)
}

/// Get all donors, newest registration first
pub async fn get_all_donors(pool: &Pool<Sqlite>) -> Result<Vec<Donor>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {DONOR_COLUMNS} FROM donors ORDER BY registration_date DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(donor_from_row).collect())
}

/// Count donors, optionally restricted to a blood group
pub async fn count_donors(
    pool: &Pool<Sqlite>,
    blood_group: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let total: i64 = match blood_group {
        Some(group) => sqlx::query("SELECT COUNT(*) FROM donors WHERE blood_group = ?")
            .bind(group)
            .fetch_one(pool)
            .await?
            .get(0),
        None => sqlx::query("SELECT COUNT(*) FROM donors")
            .fetch_one(pool)
            .await?
            .get(0),
    };
    Ok(total)
}

/// Get one page of donors, optionally restricted to a blood group
pub async fn get_donors_page(
    pool: &Pool<Sqlite>,
    limit: i64,
    offset: i64,
    blood_group: Option<&str>,
) -> Result<Vec<Donor>, sqlx::Error> {
    let rows = match blood_group {
        Some(group) => {
            sqlx::query(&format!(
                "SELECT {DONOR_COLUMNS} FROM donors WHERE blood_group = ? \
                 ORDER BY registration_date DESC LIMIT ? OFFSET ?"
            ))
            .bind(group)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query(&format!(
                "SELECT {DONOR_COLUMNS} FROM donors \
                 ORDER BY registration_date DESC LIMIT ? OFFSET ?"
            ))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.iter().map(donor_from_row).collect())
}

/// Get donor by ID
pub async fn get_donor_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Donor>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {DONOR_COLUMNS} FROM donors WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(donor_from_row))
}

/// Update a donor's details. The registration date is left untouched.
pub async fn update_donor(
    pool: &Pool<Sqlite>,
    id: i64,
    donor: &Donor,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE donors
        SET name = ?, blood_group = ?, phone = ?, email = ?, address = ?, last_donation = ?
        WHERE id = ?
        "#,
    )
    .bind(&donor.name)
    .bind(&donor.blood_group)
    .bind(&donor.phone)
    .bind(&donor.email)
    .bind(&donor.address)
    .bind(&donor.last_donation)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a donor. Returns the deleted donor's name, or None if the id was
/// unknown.
pub async fn delete_donor(pool: &Pool<Sqlite>, id: i64) -> Result<Option<String>, sqlx::Error> {
    let donor = get_donor_by_id(pool, id).await?;
    let Some(donor) = donor else {
        return Ok(None);
    };

    let result = sqlx::query("DELETE FROM donors WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() > 0 {
        Ok(Some(donor.name))
    } else {
        Ok(None)
    }
}

/// Search donors by name, blood group or address
pub async fn search_donors(pool: &Pool<Sqlite>, query: &str) -> Result<Vec<Donor>, sqlx::Error> {
    // Add wildcards for SQL LIKE
    let search_term = format!("%{}%", query);

    let rows = sqlx::query(&format!(
        "SELECT {DONOR_COLUMNS} FROM donors \
         WHERE name LIKE ? OR blood_group LIKE ? OR address LIKE ? \
         ORDER BY registration_date DESC"
    ))
    .bind(&search_term)
    .bind(&search_term)
    .bind(&search_term)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(donor_from_row).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> Pool<Sqlite> {
        // A single connection keeps the in-memory database alive for the
        // whole test
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query(
            r#"
            CREATE TABLE donors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                blood_group TEXT NOT NULL,
                phone TEXT NOT NULL,
                email TEXT NOT NULL,
                address TEXT NOT NULL,
                registration_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                last_donation TEXT
            );
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    fn donor(name: &str, group: &str, registered: i64) -> Donor {
        Donor {
            id: None,
            name: name.to_string(),
            blood_group: group.to_string(),
            phone: "0123456789".to_string(),
            email: "donor@example.com".to_string(),
            address: "Elm Street".to_string(),
            registration_date: time::OffsetDateTime::from_unix_timestamp(registered).ok(),
            last_donation: None,
        }
    }

    #[tokio::test]
    async fn count_and_page_agree_for_the_same_filter() {
        let pool = test_pool().await;
        for i in 0..5i64 {
            let group = if i < 3 { "O+" } else { "A-" };
            let record = donor(&format!("Donor {i}"), group, 1_700_000_000 + i);
            save_donor(&pool, &record).await.unwrap();
        }

        assert_eq!(count_donors(&pool, None).await.unwrap(), 5);
        assert_eq!(count_donors(&pool, Some("O+")).await.unwrap(), 3);
        assert_eq!(count_donors(&pool, Some("AB+")).await.unwrap(), 0);

        // Newest first: page 2 of the O+ donors holds only the oldest one
        let page = get_donors_page(&pool, 2, 2, Some("O+")).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "Donor 0");

        let first = get_donors_page(&pool, 2, 0, Some("O+")).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].name, "Donor 2");
    }
}
