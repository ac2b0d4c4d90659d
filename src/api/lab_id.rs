//! Sequential lab id allocation.
//!
//! One counter row named `lab_id` holds the last-issued sequence number. The
//! allocation is a single upsert-increment statement, so concurrent callers
//! (including other instances of this service) always observe distinct,
//! increasing values. Nothing is rolled back when a caller fails after
//! allocation; the resulting gap is acceptable.

use sqlx::{PgPool, Row};

const COUNTER_NAME: &str = "lab_id";

/// Allocate the next lab id, creating the counter on first use.
///
/// # Errors
/// Returns the underlying `sqlx::Error` when the database is unreachable; the
/// caller must not persist anything that depends on the allocation.
pub async fn next_lab_id(pool: &PgPool) -> Result<String, sqlx::Error> {
    let row = sqlx::query(
        r"
        INSERT INTO counters (id, seq) VALUES ($1, 1)
        ON CONFLICT (id) DO UPDATE SET seq = counters.seq + 1
        RETURNING seq
        ",
    )
    .bind(COUNTER_NAME)
    .fetch_one(pool)
    .await?;

    let seq: i64 = row.get("seq");

    Ok(format_lab_id(seq))
}

/// Zero-padded to at least two digits; wider sequences are never truncated.
pub(crate) fn format_lab_id(seq: i64) -> String {
    format!("LAB-{seq:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digits() {
        assert_eq!(format_lab_id(1), "LAB-01");
        assert_eq!(format_lab_id(9), "LAB-09");
    }

    #[test]
    fn two_digits_unpadded() {
        assert_eq!(format_lab_id(10), "LAB-10");
        assert_eq!(format_lab_id(42), "LAB-42");
        assert_eq!(format_lab_id(99), "LAB-99");
    }

    #[test]
    fn no_truncation_above_two_digits() {
        assert_eq!(format_lab_id(100), "LAB-100");
        assert_eq!(format_lab_id(123), "LAB-123");
        assert_eq!(format_lab_id(10_000), "LAB-10000");
    }
}
