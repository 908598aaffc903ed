// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_core::{PacerError, StreamItem};
use std::error::Error;

#[derive(Debug, thiserror::Error)]
#[error("sensor offline: {0}")]
struct SensorError(String);

#[test]
fn test_action_error_keeps_source_message() {
    // Arrange & Act
    let error = PacerError::action_error(SensorError("north".to_string()));

    // Assert
    assert!(error.is_action_error());
    assert_eq!(error.to_string(), "Action error: sensor offline: north");
    assert_eq!(
        error.source().map(ToString::to_string),
        Some("sensor offline: north".to_string())
    );
}

#[test]
fn test_config_error_is_not_an_action_error() {
    // Arrange & Act
    let error = PacerError::config_error("bad interval");

    // Assert
    assert!(!error.is_action_error());
    assert_eq!(error.to_string(), "Configuration error: bad interval");
}

#[test]
fn test_cloning_an_action_error_preserves_the_message() {
    // Arrange
    let error = PacerError::action_error(SensorError("west".to_string()));

    // Act
    let cloned = error.clone();

    // Assert
    assert_eq!(
        cloned.to_string(),
        "Stream processing error: Action error: sensor offline: west"
    );
}

#[test]
fn test_stream_item_converts_from_and_into_result() {
    // Arrange
    let ok: StreamItem<i32> = Ok(7).into();
    let err: StreamItem<i32> = Err(PacerError::stream_error("sensor lost")).into();

    // Act & Assert
    assert!(ok.is_value());
    assert!(err.is_error());
    assert_eq!(ok.clone().map(|v| v * 2).unwrap(), 14);
    assert!(Result::<i32, PacerError>::from(err).is_err());
    assert_eq!(ok.ok(), Some(7));
}
