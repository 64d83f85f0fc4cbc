//! DuckDB-based query backend
//!
//! Pages over arbitrary `SELECT` statements. DuckDB can read CSV, Parquet and
//! JSON files or attach other databases, so the source is just SQL text.

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use crate::pagination::{Page, PageBackend};
use crate::types::{JsonObject, JsonValue};
use duckdb::types::{TimeUnit, Value};
use duckdb::Connection;
use std::path::Path;

/// Paging backend over a DuckDB connection
///
/// The source of a page is a SQL query. Rows come back as JSON objects keyed
/// by column name.
pub struct DuckDbBackend {
    /// DuckDB connection
    conn: Connection,
    /// Where the connection points (for logging)
    location: String,
}

impl DuckDbBackend {
    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::backend(format!("Failed to create DuckDB connection: {e}")))?;

        Ok(Self {
            conn,
            location: ":memory:".to_string(),
        })
    }

    /// Open (or create) a database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            Error::backend(format!(
                "Failed to open DuckDB database '{}': {e}",
                path.display()
            ))
        })?;

        Ok(Self {
            conn,
            location: path.display().to_string(),
        })
    }

    /// Open the database described by a config and run its init statements
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let backend = match &config.path {
            Some(path) => Self::open(path)?,
            None => Self::open_in_memory()?,
        };

        for statement in &config.init {
            tracing::debug!("Running init statement: {}", statement);
            backend.execute_batch(statement)?;
        }

        Ok(backend)
    }

    /// Where the connection points
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Run one or more statements that return no rows
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| Error::backend(format!("Failed to execute statement: {e}")))
    }

    /// Count the rows a query returns
    pub fn count(&self, sql: &str) -> Result<u64> {
        let count_sql = format!("SELECT COUNT(*) FROM ({}\n) AS q", strip_terminator(sql));
        self.count_query(&count_sql)
    }

    /// Run a query whose first column of the first row is a count
    ///
    /// Intended as a total override, e.g. `SELECT COUNT(DISTINCT user_id) FROM orders`.
    pub fn count_query(&self, sql: &str) -> Result<u64> {
        tracing::debug!("Executing count query: {}", sql);

        let count: i64 = self
            .conn
            .query_row(strip_terminator(sql), [], |row| row.get(0))
            .map_err(|e| Error::backend(format!("Failed to count rows: {e}")))?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    /// Fetch a window of a query as JSON objects
    pub fn fetch(&self, sql: &str, limit: u64, offset: u64) -> Result<Vec<JsonValue>> {
        let query = format!(
            "SELECT * FROM ({}\n) AS q LIMIT {limit} OFFSET {offset}",
            strip_terminator(sql)
        );

        tracing::debug!("Executing query: {}", query);

        let mut stmt = self
            .conn
            .prepare(&query)
            .map_err(|e| Error::backend(format!("Failed to prepare query: {e}")))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| Error::backend(format!("Failed to run query: {e}")))?;

        let columns = rows
            .as_ref()
            .map(|stmt| stmt.column_names())
            .unwrap_or_default();

        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| Error::backend(format!("Failed to read row: {e}")))?
        {
            let mut record = JsonObject::new();
            for (idx, name) in columns.iter().enumerate() {
                let value: Value = row.get(idx)?;
                record.insert(name.clone(), duckdb_value_to_json(value));
            }
            records.push(JsonValue::Object(record));
        }

        Ok(records)
    }
}

impl PageBackend for DuckDbBackend {
    type Source = str;
    type Item = JsonValue;

    fn paginate(&self, source: &str, page: u32, page_size: u32) -> Result<Page<JsonValue>> {
        let page = page.max(1);
        let offset = u64::from(page - 1) * u64::from(page_size);

        let total = self.count(source)?;
        let items = if page_size == 0 || offset >= total {
            Vec::new()
        } else {
            self.fetch(source, u64::from(page_size), offset)?
        };

        Ok(Page::new(items, page, page_size, total))
    }
}

impl std::fmt::Debug for DuckDbBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuckDbBackend")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Remove trailing semicolons so the query can be wrapped
///
/// Callers close the wrapping parenthesis on a new line, since `sql` may end
/// in a `--` comment.
fn strip_terminator(sql: &str) -> &str {
    sql.trim().trim_end_matches(';').trim_end()
}

/// Convert a time value in `unit` to microseconds
fn to_micros(unit: TimeUnit, value: i64) -> i64 {
    match unit {
        TimeUnit::Second => value.saturating_mul(1_000_000),
        TimeUnit::Millisecond => value.saturating_mul(1_000),
        TimeUnit::Microsecond => value,
        TimeUnit::Nanosecond => value / 1_000,
    }
}

/// Convert DuckDB Value to JSON Value
pub(crate) fn duckdb_value_to_json(value: Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(b),
        Value::TinyInt(i) => JsonValue::Number(i.into()),
        Value::SmallInt(i) => JsonValue::Number(i.into()),
        Value::Int(i) => JsonValue::Number(i.into()),
        Value::BigInt(i) => JsonValue::Number(i.into()),
        Value::HugeInt(i) => JsonValue::String(i.to_string()),
        Value::UTinyInt(i) => JsonValue::Number(i.into()),
        Value::USmallInt(i) => JsonValue::Number(i.into()),
        Value::UInt(i) => JsonValue::Number(i.into()),
        Value::UBigInt(i) => JsonValue::Number(i.into()),
        Value::Float(f) => {
            serde_json::Number::from_f64(f64::from(f)).map_or(JsonValue::Null, JsonValue::Number)
        }
        Value::Double(f) => {
            serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
        }
        Value::Text(s) => JsonValue::String(s),
        Value::Blob(b) => JsonValue::String(base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            b,
        )),
        Value::Timestamp(unit, t) => {
            let micros = to_micros(unit, t);
            chrono::DateTime::from_timestamp_micros(micros)
                .map(|dt| JsonValue::String(dt.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()))
                .unwrap_or(JsonValue::Number(t.into()))
        }
        Value::Date32(d) => {
            // Days since epoch (719163 is the number of days from 1 CE to 1970-01-01)
            chrono::NaiveDate::from_num_days_from_ce_opt(d + 719_163)
                .map(|date| JsonValue::String(date.format("%Y-%m-%d").to_string()))
                .unwrap_or(JsonValue::Number(d.into()))
        }
        Value::Time64(unit, t) => {
            let micros = to_micros(unit, t);
            let secs = micros / 1_000_000;
            JsonValue::String(format!(
                "{:02}:{:02}:{:02}.{:06}",
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60,
                micros % 1_000_000
            ))
        }
        Value::List(values) => {
            JsonValue::Array(values.into_iter().map(duckdb_value_to_json).collect())
        }
        _ => JsonValue::String(format!("{value:?}")),
    }
}
