// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use pacer_core::{PacerError, StreamItem};
use pacer_stream_time::prelude::*;
use pacer_test_utils::{
    helpers::{assert_no_element_emitted, unwrap_stream},
    ms,
    test_channel::{test_channel, test_channel_with_errors},
};
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_debounce_emits_after_quiet_period() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, stream) = test_channel::<&str>();
    let mut debounced = stream.debounce(ms(500));

    // Act & Assert
    tx.unbounded_send("a")?;
    assert_no_element_emitted(&mut debounced, 0).await;

    advance(ms(400)).await;
    assert_no_element_emitted(&mut debounced, 0).await;

    advance(ms(100)).await;
    assert_eq!(unwrap_stream(&mut debounced, 0).await.unwrap().unwrap(), "a");

    Ok(())
}

#[tokio::test]
async fn test_debounce_resets_on_new_value() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, stream) = test_channel::<&str>();
    let mut debounced = stream.debounce(ms(500));

    // Act & Assert
    tx.unbounded_send("a")?;
    advance(ms(300)).await;
    assert_no_element_emitted(&mut debounced, 0).await;

    tx.unbounded_send("b")?;
    assert_no_element_emitted(&mut debounced, 0).await;

    advance(ms(300)).await;
    assert_no_element_emitted(&mut debounced, 0).await;

    advance(ms(200)).await;
    assert_eq!(unwrap_stream(&mut debounced, 0).await.unwrap().unwrap(), "b");

    Ok(())
}

#[tokio::test]
async fn test_debounce_burst_emits_last_value_once() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, stream) = test_channel::<i32>();
    let mut debounced = stream.debounce(ms(500));

    // Act
    for value in 0..10 {
        tx.unbounded_send(value)?;
    }

    // Assert
    assert_eq!(unwrap_stream(&mut debounced, 600).await.unwrap().unwrap(), 9);
    assert_no_element_emitted(&mut debounced, 1000).await;

    Ok(())
}

#[tokio::test]
async fn test_debounce_error_discards_pending_value() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, stream) = test_channel_with_errors::<i32>();
    let mut debounced = stream.debounce(ms(500));

    // Act
    tx.unbounded_send(StreamItem::Value(1))?;
    tx.unbounded_send(StreamItem::Error(PacerError::stream_error("boom")))?;

    // Assert
    assert!(unwrap_stream(&mut debounced, 0).await.unwrap().is_error());
    assert_no_element_emitted(&mut debounced, 1000).await;

    Ok(())
}

#[tokio::test]
async fn test_debounce_flushes_pending_on_stream_end() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, stream) = test_channel::<i32>();
    let mut debounced = stream.debounce(ms(500));

    // Act
    tx.unbounded_send(1)?;
    advance(ms(200)).await;
    assert_no_element_emitted(&mut debounced, 0).await;
    drop(tx);

    // Assert
    assert_eq!(unwrap_stream(&mut debounced, 0).await.unwrap().unwrap(), 1);
    assert!(unwrap_stream(&mut debounced, 0).await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_debounce_empty_source_ends_without_emission() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, stream) = test_channel::<i32>();
    let mut debounced = stream.debounce(ms(500));

    // Act
    drop(tx);

    // Assert
    assert!(unwrap_stream(&mut debounced, 0).await.is_none());

    Ok(())
}
