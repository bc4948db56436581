//! Food repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and search APIs over the canonical `foods` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `NewFood::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Search results are ordered by ascending `id`, stated in the query.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::food::{Food, FoodId, FoodValidationError, NewFood};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FOODS_TABLE: &str = "foods";
const FOOD_COLUMNS: &[&str] = &["id", "name", "calories", "created_at"];

const FOOD_SELECT_SQL: &str = "SELECT
    id,
    name,
    calories,
    created_at
FROM foods";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for food persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(FoodValidationError),
    Db(DbError),
    /// Update target does not exist.
    NotFound(FoodId),
    /// Insert or rename rejected by the catalog's unique-name constraint.
    NameTaken(String),
    InvalidData(String),
    /// Connection schema version does not match this binary's migrations.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "food not found: {id}"),
            Self::NameTaken(name) => write!(f, "food name already taken: `{name}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted food data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected \
                 {expected_version}; apply migrations before constructing a repository"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FoodValidationError> for RepoError {
    fn from(value: FoodValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for food catalog operations.
pub trait FoodRepository {
    /// Inserts a new food and returns the stored record, including the
    /// store-assigned `id` and `created_at`.
    fn create_food(&self, food: &NewFood) -> RepoResult<Food>;
    /// Gets one food by id. `None` means no such record; never an error.
    fn find_food(&self, id: FoodId) -> RepoResult<Option<Food>>;
    /// Replaces name and calories of an existing food and returns the
    /// updated record.
    fn update_food(&self, id: FoodId, changes: &NewFood) -> RepoResult<Food>;
    /// Deletes one food by id and returns the deleted-row count (1 or 0).
    /// Idempotent: repeated calls after the first return 0.
    fn destroy_food(&self, id: FoodId) -> RepoResult<usize>;
    /// Returns all foods whose name contains `fragment` as a literal,
    /// case-sensitive substring, ordered by ascending id.
    fn search_foods(&self, fragment: &str) -> RepoResult<Vec<Food>>;
}

/// SQLite-backed food repository.
pub struct SqliteFoodRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFoodRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   this binary's latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the `foods`
    ///   schema shape is wrong.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl FoodRepository for SqliteFoodRepository<'_> {
    fn create_food(&self, food: &NewFood) -> RepoResult<Food> {
        food.validate()?;

        self.conn
            .execute(
                "INSERT INTO foods (name, calories) VALUES (?1, ?2);",
                params![food.name.as_str(), food.calories],
            )
            .map_err(|err| map_write_error(err, &food.name))?;

        let id = self.conn.last_insert_rowid();
        self.find_food(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("inserted food {id} could not be read back"))
        })
    }

    fn find_food(&self, id: FoodId) -> RepoResult<Option<Food>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{FOOD_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_food_row(row)?));
        }

        Ok(None)
    }

    fn update_food(&self, id: FoodId, changes: &NewFood) -> RepoResult<Food> {
        changes.validate()?;

        let changed = self
            .conn
            .execute(
                "UPDATE foods
                 SET
                    name = ?2,
                    calories = ?3
                 WHERE id = ?1;",
                params![id, changes.name.as_str(), changes.calories],
            )
            .map_err(|err| map_write_error(err, &changes.name))?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.find_food(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("updated food {id} could not be read back"))
        })
    }

    fn destroy_food(&self, id: FoodId) -> RepoResult<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM foods WHERE id = ?1;", params![id])?;

        Ok(deleted)
    }

    fn search_foods(&self, fragment: &str) -> RepoResult<Vec<Food>> {
        // instr() gives literal byte-wise containment; LIKE would fold ASCII
        // case and give % and _ wildcard meaning.
        let mut stmt = self.conn.prepare(&format!(
            "{FOOD_SELECT_SQL}
             WHERE instr(name, ?1) > 0
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query(params![fragment])?;
        let mut foods = Vec::new();

        while let Some(row) = rows.next()? {
            foods.push(parse_food_row(row)?);
        }

        Ok(foods)
    }
}

fn parse_food_row(row: &Row<'_>) -> RepoResult<Food> {
    let id: FoodId = row.get("id")?;

    let calories: i64 = row.get("calories")?;
    if calories < 0 {
        return Err(RepoError::InvalidData(format!(
            "negative calories value `{calories}` in foods.calories for id {id}"
        )));
    }

    Ok(Food {
        id,
        name: row.get("name")?,
        calories,
        created_at: row.get("created_at")?,
    })
}

fn map_write_error(err: rusqlite::Error, name: &str) -> RepoError {
    if is_unique_violation(&err) {
        return RepoError::NameTaken(name.to_string());
    }

    err.into()
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, FOODS_TABLE)? {
        return Err(RepoError::MissingRequiredTable(FOODS_TABLE));
    }

    let present = table_columns(conn, FOODS_TABLE)?;
    for &column in FOOD_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: FOODS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;

    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();

    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>("name")?);
    }

    Ok(columns)
}
