//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err = PeladaError::from(json_error);

    match err {
        PeladaError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let err = PeladaError::from(io_error);

    match err {
        PeladaError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_parse_int_error_conversion() {
    let parse_error = "not-a-number".parse::<u64>().unwrap_err();
    let err = PeladaError::from(parse_error);

    match err {
        PeladaError::InvalidId(_) => (),
        _ => panic!("Expected InvalidId error variant"),
    }
}

#[test]
fn test_storage_error_is_transparent() {
    let inner = anyhow::anyhow!("table missing");
    let err = PeladaError::from(inner);
    assert_eq!(err.to_string(), "table missing");
}

#[test]
fn test_missing_league_id_message_names_env_var() {
    let err = PeladaError::MissingLeagueId {
        env_var: "PELADA_LEAGUE_ID".to_string(),
    };
    assert!(err.to_string().contains("PELADA_LEAGUE_ID"));
}

#[test]
fn test_invalid_month_is_zero_padded() {
    let err = PeladaError::InvalidMonth { year: 2025, month: 3 };
    assert!(err.to_string().contains("2025-03"));
}
