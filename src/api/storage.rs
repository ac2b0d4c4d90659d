//! Database access for student records.

use sqlx::{PgPool, Row};

/// A registered student as stored in the `students` table.
#[derive(Debug)]
pub struct Student {
    pub lab_id: String,
    pub name: String,
    pub usn: String,
    pub year: String,
    pub department: String,
    /// Argon2id PHC string, never returned by any endpoint.
    pub password: String,
}

pub async fn usn_exists(pool: &PgPool, usn: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM students WHERE usn = $1) AS exists")
        .bind(usn)
        .fetch_one(pool)
        .await?;

    Ok(row.get("exists"))
}

pub async fn insert_student(pool: &PgPool, student: &Student) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        INSERT INTO students (lab_id, name, usn, year, department, password)
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(&student.lab_id)
    .bind(&student.name)
    .bind(&student.usn)
    .bind(&student.year)
    .bind(&student.department)
    .bind(&student.password)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find_by_lab_id(pool: &PgPool, lab_id: &str) -> Result<Option<Student>, sqlx::Error> {
    let row = sqlx::query(
        r"
        SELECT lab_id, name, usn, year, department, password
        FROM students
        WHERE lab_id = $1
        ",
    )
    .bind(lab_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Student {
        lab_id: row.get("lab_id"),
        name: row.get("name"),
        usn: row.get("usn"),
        year: row.get("year"),
        department: row.get("department"),
        password: row.get("password"),
    }))
}
