/*!
 * Tests for run state persistence
 */

use anyhow::Result;
use chrono::Utc;
use mdtrans::run_state::RunState;

use crate::common;

/// Test that a missing state file reads as timestamp 0, so a first run
/// translates everything
#[test]
fn test_load_withAbsentFile_shouldDefaultToEpoch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let state = RunState::load(temp_dir.path().join("state.txt"))?;

    assert_eq!(state.last_run(), 0);
    Ok(())
}

/// Test that an existing state file is parsed, including surrounding
/// whitespace
#[test]
fn test_load_withExistingFile_shouldParseTimestamp() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "state.txt", "12345\n")?;

    let state = RunState::load(&path)?;
    assert_eq!(state.last_run(), 12345);
    Ok(())
}

/// Test that garbage in the state file is an error, not a silent reset
#[test]
fn test_load_withInvalidContent_shouldError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "state.txt", "not-a-number")?;

    assert!(RunState::load(&path).is_err());
    Ok(())
}

/// Test that touch persists the current time while leaving the run-start
/// timestamp alone, and that a reload sees the persisted value
#[test]
fn test_touch_withFreshState_shouldPersistCurrentTime() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("state.txt");

    let state = RunState::load(&path)?;
    let before = Utc::now().timestamp();
    state.touch()?;

    // The in-memory run-start value is unchanged for the rest of the walk
    assert_eq!(state.last_run(), 0);

    let reloaded = RunState::load(&path)?;
    assert!(reloaded.last_run() >= before);
    assert!(reloaded.last_run() <= Utc::now().timestamp());
    Ok(())
}
