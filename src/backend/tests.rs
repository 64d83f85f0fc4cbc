//! Tests for backend module

use super::database::duckdb_value_to_json;
use super::*;
use crate::config::DatabaseConfig;
use crate::pagination::PageBackend;
use duckdb::types::{TimeUnit, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// MemoryBackend Tests
// ============================================================================

fn numbers(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

fn memory() -> MemoryBackend<u32> {
    MemoryBackend::new()
}

#[test]
fn test_memory_first_page() {
    let source = numbers(25);
    let page = memory().paginate(&source, 1, 10).unwrap();

    assert_eq!(page.items, numbers(10));
    assert_eq!(page.current_page_number, 1);
    assert_eq!(page.item_number_per_page, 10);
    assert_eq!(page.total_item_count, 25);
}

#[test]
fn test_memory_partial_last_page() {
    let source = numbers(25);
    let page = memory().paginate(&source, 3, 10).unwrap();
    assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
    assert_eq!(page.total_item_count, 25);
}

#[test]
fn test_memory_page_past_end_is_empty() {
    let source = numbers(25);
    let page = memory().paginate(&source, 4, 10).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.current_page_number, 4);
    assert_eq!(page.total_item_count, 25);
}

#[test]
fn test_memory_page_zero_reads_as_first() {
    let source = numbers(5);
    let page = memory().paginate(&source, 0, 2).unwrap();
    assert_eq!(page.items, vec![1, 2]);
    assert_eq!(page.current_page_number, 1);
}

#[test]
fn test_memory_zero_page_size() {
    let source = numbers(5);
    let page = memory().paginate(&source, 1, 0).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.item_number_per_page, 0);
}

#[test]
fn test_memory_empty_source() {
    let source: Vec<String> = Vec::new();
    let page = MemoryBackend::<String>::new()
        .paginate(&source, 1, 10)
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_item_count, 0);
}

// ============================================================================
// DuckDbBackend Tests
// ============================================================================

fn users_backend() -> DuckDbBackend {
    let backend = DuckDbBackend::open_in_memory().unwrap();
    backend
        .execute_batch(
            "CREATE TABLE users (id INTEGER, name VARCHAR);
             INSERT INTO users SELECT i, 'user-' || CAST(i AS VARCHAR) FROM range(1, 26) r(i);",
        )
        .unwrap();
    backend
}

#[test]
fn test_duckdb_count() {
    let backend = users_backend();
    assert_eq!(backend.count("SELECT * FROM users").unwrap(), 25);
    assert_eq!(backend.count("SELECT * FROM users WHERE id > 20;").unwrap(), 5);
}

#[test]
fn test_duckdb_count_query() {
    let backend = users_backend();
    let count = backend
        .count_query("SELECT COUNT(*) FROM users WHERE id % 2 = 0")
        .unwrap();
    assert_eq!(count, 12);
}

#[test]
fn test_duckdb_paginate() {
    let backend = users_backend();
    let page = backend
        .paginate("SELECT id, name FROM users ORDER BY id", 2, 10)
        .unwrap();

    assert_eq!(page.current_page_number, 2);
    assert_eq!(page.item_number_per_page, 10);
    assert_eq!(page.total_item_count, 25);
    assert_eq!(page.len(), 10);
    assert_eq!(page.items[0], json!({"id": 11, "name": "user-11"}));
    assert_eq!(page.items[9], json!({"id": 20, "name": "user-20"}));
}

#[test]
fn test_duckdb_paginate_past_end() {
    let backend = users_backend();
    let page = backend
        .paginate("SELECT id FROM users ORDER BY id", 5, 10)
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_item_count, 25);
}

#[test]
fn test_duckdb_paginate_query_ending_in_comment() {
    let backend = users_backend();

    let page = backend
        .paginate("SELECT 1 AS id -- one row", 1, 10)
        .unwrap();
    assert_eq!(page.total_item_count, 1);
    assert_eq!(page.items, vec![json!({"id": 1})]);

    let page = backend
        .paginate("SELECT id FROM users ORDER BY id -- newest last", 3, 10)
        .unwrap();
    assert_eq!(page.total_item_count, 25);
    assert_eq!(page.len(), 5);
}

#[test]
fn test_duckdb_invalid_query_is_backend_error() {
    let backend = users_backend();
    let err = backend
        .paginate("SELECT * FROM missing_table", 1, 10)
        .unwrap_err();
    assert!(err.is_backend());
}

#[test]
fn test_duckdb_from_config_runs_init() {
    let config = DatabaseConfig {
        path: None,
        init: vec![
            "CREATE TABLE tags (tag VARCHAR)".to_string(),
            "INSERT INTO tags VALUES ('a'), ('b'), ('c')".to_string(),
        ],
    };

    let backend = DuckDbBackend::from_config(&config).unwrap();
    assert_eq!(backend.location(), ":memory:");
    assert_eq!(backend.count("SELECT * FROM tags").unwrap(), 3);
}

#[test]
fn test_duckdb_open_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("pager.duckdb");

    {
        let backend = DuckDbBackend::open(&path).unwrap();
        backend
            .execute_batch("CREATE TABLE t AS SELECT * FROM range(7) r(i)")
            .unwrap();
    }

    let backend = DuckDbBackend::open(&path).unwrap();
    assert_eq!(backend.count("SELECT * FROM t").unwrap(), 7);
}

// ============================================================================
// Value Conversion Tests
// ============================================================================

#[test]
fn test_duckdb_value_to_json() {
    assert_eq!(duckdb_value_to_json(Value::Null), json!(null));
    assert_eq!(duckdb_value_to_json(Value::Boolean(true)), json!(true));
    assert_eq!(duckdb_value_to_json(Value::Int(42)), json!(42));
    assert_eq!(duckdb_value_to_json(Value::Text("hello".to_string())), json!("hello"));
    assert_eq!(duckdb_value_to_json(Value::HugeInt(7)), json!("7"));
    assert_eq!(duckdb_value_to_json(Value::Blob(b"hi".to_vec())), json!("aGk="));
    assert_eq!(
        duckdb_value_to_json(Value::List(vec![Value::Int(1), Value::Null])),
        json!([1, null])
    );
}

#[test]
fn test_duckdb_temporal_values_to_json() {
    assert_eq!(duckdb_value_to_json(Value::Date32(0)), json!("1970-01-01"));
    assert_eq!(
        duckdb_value_to_json(Value::Timestamp(TimeUnit::Second, 86_400)),
        json!("1970-01-02T00:00:00.000000Z")
    );
    assert_eq!(
        duckdb_value_to_json(Value::Time64(TimeUnit::Microsecond, 3_723_000_001)),
        json!("01:02:03.000001")
    );
}
