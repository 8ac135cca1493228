//! Persistence-engine error codes
//!
//! `P1xxx` codes are connectivity faults, `P2xxx` codes are constraint and
//! query faults. Each known code maps to a client-safe message and status.

use std::collections::HashMap;
use std::sync::LazyLock;

use http::StatusCode;

/// Message and status for every known engine error code
pub const CODE_TABLE: &[(&str, &str, StatusCode)] = &[
    ("P1000", "Authentication failed against the database server.", StatusCode::BAD_GATEWAY),
    ("P1001", "Cannot reach the database server. Please check connection.", StatusCode::BAD_GATEWAY),
    ("P1002", "The database operation timed out.", StatusCode::REQUEST_TIMEOUT),
    ("P2000", "Value too long for a database column.", StatusCode::BAD_REQUEST),
    ("P2001", "Record not found.", StatusCode::NOT_FOUND),
    ("P2002", "Duplicate key error — unique constraint failed.", StatusCode::CONFLICT),
    ("P2003", "Foreign key constraint failed.", StatusCode::BAD_REQUEST),
    ("P2004", "Database constraint failed.", StatusCode::BAD_REQUEST),
    ("P2005", "Invalid value stored in the database.", StatusCode::BAD_REQUEST),
    ("P2006", "Invalid value type provided for the field.", StatusCode::BAD_REQUEST),
    ("P2007", "Data validation error.", StatusCode::BAD_REQUEST),
    ("P2008", "Query parsing failed.", StatusCode::BAD_REQUEST),
    ("P2009", "Query validation failed.", StatusCode::BAD_REQUEST),
    ("P2010", "Raw query failed. Check your query syntax.", StatusCode::BAD_REQUEST),
    ("P2011", "Null constraint violation — missing required field.", StatusCode::BAD_REQUEST),
    ("P2012", "Missing required value for a field.", StatusCode::BAD_REQUEST),
    ("P2013", "Missing required argument for a field.", StatusCode::BAD_REQUEST),
    ("P2014", "Relation violation between records.", StatusCode::BAD_REQUEST),
    ("P2015", "Related record not found.", StatusCode::NOT_FOUND),
    ("P2016", "Query interpretation error.", StatusCode::BAD_REQUEST),
    ("P2017", "Record relation inconsistency.", StatusCode::BAD_REQUEST),
    ("P2018", "Required connected record not found.", StatusCode::NOT_FOUND),
    ("P2019", "Input error — invalid data.", StatusCode::BAD_REQUEST),
    ("P2020", "Value out of range for the column type.", StatusCode::BAD_REQUEST),
    ("P2021", "Table not found in the database.", StatusCode::NOT_FOUND),
    ("P2022", "Column not found in the database table.", StatusCode::NOT_FOUND),
    ("P2023", "Inconsistent column data — check your schema.", StatusCode::INTERNAL_SERVER_ERROR),
    ("P2024", "Transaction failed due to timeout or rollback.", StatusCode::INTERNAL_SERVER_ERROR),
    ("P2025", "Record to update/delete does not exist.", StatusCode::NOT_FOUND),
    ("P2030", "Database file not found (SQLite specific).", StatusCode::INTERNAL_SERVER_ERROR),
    ("P2033", "Number out of range for field type.", StatusCode::BAD_REQUEST),
];

static CODES: LazyLock<HashMap<&'static str, (&'static str, StatusCode)>> = LazyLock::new(|| {
    CODE_TABLE
        .iter()
        .map(|&(code, message, status)| (code, (message, status)))
        .collect()
});

/// Look up the client message and status for an engine error code
pub fn lookup(code: &str) -> Option<(&'static str, StatusCode)> {
    CODES.get(code).copied()
}
