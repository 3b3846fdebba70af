// logscrub-core/tests/engine_tests.rs
//! Integration tests for the extract/redact engine.

use anyhow::Result;
use test_log::test; // For integrating with `env_logger` in tests

use logscrub_core::catalog::{Catalog, LinePattern};
use logscrub_core::engine::ScrubEngine;
use logscrub_core::errors::ScrubError;

fn catalog_of(patterns: Vec<LinePattern>) -> Catalog {
    Catalog { patterns }
}

fn pattern(name: &str, pattern: &str) -> LinePattern {
    LinePattern {
        name: name.to_string(),
        pattern: pattern.to_string(),
        ..Default::default()
    }
}

/// A value captured on a matching line is also scrubbed from lines that match
/// no pattern at all.
#[test]
fn test_captured_value_is_scrubbed_from_unrelated_lines() -> Result<()> {
    let engine = ScrubEngine::new(Catalog::built_in()?)?;
    let content = "LogInit: MachineId=5C9F2E8A44D1\nLogTemp: cache key 5C9F2E8A44D1 reused";

    let outcome = engine.scrub(content)?;
    assert_eq!(
        outcome.cleaned,
        "LogInit: MachineId=*ANONYMIZED*\nLogTemp: cache key *ANONYMIZED* reused"
    );
    Ok(())
}

#[test]
fn test_full_game_client_log_with_built_in_catalog() -> Result<()> {
    let engine = ScrubEngine::new(Catalog::built_in()?)?;
    let content = [
        "[2024.01.15-19.22.10:532][  0]LogInit: Computer: DESKTOP-4FJ7Q2K",
        "[2024.01.15-19.22.10:532][  0]LogInit: User: PlayerOne",
        "LogInit: MachineId=5C9F2E8A44D1B7C3A96E1F20",
        "LogInit: DeviceId=",
        "LogCsvProfiler: Display: Metadata set : cpu=\"AuthenticAMD|AMD Ryzen 7 5800X 8-Core Processor\"",
        "LogTemp: Display: Startup complete in 3.2 seconds",
        "LogNet: Connection established to DESKTOP-4FJ7Q2K.local",
    ]
    .join("\n");

    let outcome = engine.scrub(&content)?;

    // Every captured value is gone, including the hostname's second
    // appearance on a line no pattern matches.
    assert!(!outcome.cleaned.contains("DESKTOP-4FJ7Q2K"));
    assert!(!outcome.cleaned.contains("PlayerOne"));
    assert!(!outcome.cleaned.contains("5C9F2E8A44D1B7C3A96E1F20"));
    assert!(!outcome.cleaned.contains("AuthenticAMD"));
    assert!(!outcome.cleaned.contains("Ryzen"));
    assert!(outcome
        .cleaned
        .contains("LogNet: Connection established to *ANONYMIZED*.local"));

    // Lines without captures survive byte for byte, and the empty DeviceId
    // capture is ignored rather than redacted.
    assert!(outcome
        .cleaned
        .contains("LogTemp: Display: Startup complete in 3.2 seconds"));
    assert!(outcome.cleaned.contains("LogInit: DeviceId="));
    assert_eq!(outcome.cleaned.lines().count(), content.lines().count());

    // Summary order follows catalog order; the hostname was seen twice.
    let names: Vec<&str> = outcome.summary.iter().map(|i| i.pattern_name.as_str()).collect();
    assert_eq!(names, vec!["cpu", "machine_id", "computer_name", "windows_user"]);
    let computer = outcome
        .summary
        .iter()
        .find(|i| i.pattern_name == "computer_name")
        .unwrap();
    assert_eq!(computer.occurrences, 2);
    assert_eq!(computer.values, vec!["DESKTOP-4FJ7Q2K".to_string()]);
    Ok(())
}

/// When one captured value is a substring of another, the longer value is
/// replaced first so none of it leaks.
#[test]
fn test_nested_captured_values_do_not_leak() -> Result<()> {
    let catalog = catalog_of(vec![
        pattern("full_id", "FullId=(\\S+)"),
        pattern("short_id", "ShortId=(\\S+)"),
    ]);
    let engine = ScrubEngine::new(catalog)?;
    let content = "FullId=ABCD1234\nShortId=ABCD\nReport: ABCD1234 seen with ABCD";

    let outcome = engine.scrub(content)?;
    assert_eq!(
        outcome.cleaned,
        "FullId=*ANONYMIZED*\nShortId=*ANONYMIZED*\nReport: *ANONYMIZED* seen with *ANONYMIZED*"
    );
    assert!(!outcome.cleaned.contains("1234"));
    Ok(())
}

#[test]
fn test_output_does_not_depend_on_catalog_order() -> Result<()> {
    let forward = catalog_of(vec![
        pattern("full_id", "FullId=(\\S+)"),
        pattern("short_id", "ShortId=(\\S+)"),
    ]);
    let reversed = catalog_of(vec![
        pattern("short_id", "ShortId=(\\S+)"),
        pattern("full_id", "FullId=(\\S+)"),
    ]);
    let content = "FullId=ABCD1234\nShortId=ABCD\nReport: ABCD1234 seen with ABCD";

    let first = ScrubEngine::new(forward)?.scrub(content)?;
    let second = ScrubEngine::new(reversed)?.scrub(content)?;
    assert_eq!(first.cleaned, second.cleaned);
    Ok(())
}

/// Column-aligned RHI adapter lines match with their exact padding.
#[test]
fn test_gpu_adapter_lines_with_alignment_padding_are_scrubbed() -> Result<()> {
    let engine = ScrubEngine::new(Catalog::built_in()?)?;
    let content = [
        "[2024.01.15-19.22.11:044][  0]LogRHI:             Name: NVIDIA GeForce RTX 3080",
        "[2024.01.15-19.22.11:044][  0]LogRHI:   Driver Version: 546.17",
    ]
    .join("\n");

    let outcome = engine.scrub(&content)?;
    assert!(outcome
        .cleaned
        .contains("LogRHI:             Name: *ANONYMIZED*"));
    assert!(!outcome.cleaned.contains("NVIDIA"));
    assert!(!outcome.cleaned.contains("546.17"));

    let names: Vec<&str> = outcome.summary.iter().map(|i| i.pattern_name.as_str()).collect();
    assert_eq!(names, vec!["gpu_name", "gpu_driver_version"]);
    Ok(())
}

#[test]
fn test_non_matching_content_is_untouched() -> Result<()> {
    let engine = ScrubEngine::new(Catalog::built_in()?)?;
    let content = "LogTemp: nothing sensitive here\nLogShaderCompiler: 42 shaders compiled\n";

    let outcome = engine.scrub(content)?;
    assert_eq!(outcome.cleaned, content);
    assert!(outcome.summary.is_empty());
    Ok(())
}

#[test]
fn test_blank_log_is_rejected() -> Result<()> {
    let engine = ScrubEngine::new(Catalog::built_in()?)?;

    let err = engine.scrub("").unwrap_err();
    assert!(matches!(err, ScrubError::BlankLog));
    assert_eq!(err.to_string(), "Blank log file");

    let err = engine.analyze("").unwrap_err();
    assert!(matches!(err, ScrubError::BlankLog));
    Ok(())
}

/// Only truly empty input counts as blank; whitespace is still content.
#[test]
fn test_whitespace_only_content_is_not_blank() -> Result<()> {
    let engine = ScrubEngine::new(Catalog::built_in()?)?;
    let outcome = engine.scrub("\n\n")?;
    assert_eq!(outcome.cleaned, "\n\n");
    assert!(outcome.summary.is_empty());
    Ok(())
}

#[test]
fn test_crlf_line_endings_match_and_survive() -> Result<()> {
    let engine = ScrubEngine::new(Catalog::built_in()?)?;
    let content = "LogInit: MachineId=ABCD1234\r\nLogTemp: Display: done\r\n";

    let outcome = engine.scrub(content)?;
    assert_eq!(
        outcome.cleaned,
        "LogInit: MachineId=*ANONYMIZED*\r\nLogTemp: Display: done\r\n"
    );
    Ok(())
}

#[test]
fn test_multiple_capture_groups_collect_separately() -> Result<()> {
    let catalog = catalog_of(vec![pattern("pair", "pair=(\\w+)\\|(\\w+)")]);
    let engine = ScrubEngine::new(catalog)?;

    let values = engine.extract("pair=alpha|beta");
    assert_eq!(values.len(), 2);
    assert!(values.contains("alpha"));
    assert!(values.contains("beta"));
    Ok(())
}

#[test]
fn test_extract_unions_values_across_patterns() -> Result<()> {
    let catalog = catalog_of(vec![
        pattern("host", "Host: (\\S+)"),
        pattern("account", "Account: (\\S+)"),
    ]);
    let engine = ScrubEngine::new(catalog)?;

    let values = engine.extract("Host: box-1\nAccount: acct-9\nHost: box-1");
    assert_eq!(values.len(), 2);
    assert!(values.contains("box-1"));
    assert!(values.contains("acct-9"));
    Ok(())
}

#[test]
fn test_empty_capture_is_ignored() -> Result<()> {
    let catalog = catalog_of(vec![pattern("auth_password", "-AUTH_PASSWORD=(\\S*)")]);
    let engine = ScrubEngine::new(catalog)?;
    let content = "launch -AUTH_PASSWORD= -windowed";

    let outcome = engine.scrub(content)?;
    assert_eq!(outcome.cleaned, content);
    assert!(outcome.summary.is_empty());
    Ok(())
}

#[test]
fn test_disabled_pattern_is_skipped() -> Result<()> {
    let mut disabled = pattern("machine_id", "LogInit: MachineId=(.*)");
    disabled.enabled = Some(false);
    let engine = ScrubEngine::new(catalog_of(vec![disabled]))?;
    let content = "LogInit: MachineId=ABCD1234";

    let outcome = engine.scrub(content)?;
    assert_eq!(outcome.cleaned, content);
    assert!(outcome.summary.is_empty());
    Ok(())
}

/// Captured values are replaced as literal text, never re-interpreted as
/// patterns, so metacharacters in a value cannot corrupt the output.
#[test]
fn test_values_with_regex_metacharacters_replace_literally() -> Result<()> {
    let catalog = catalog_of(vec![pattern("base_dir", "Base Directory: (.*)")]);
    let engine = ScrubEngine::new(catalog)?;
    let content = "Base Directory: C:\\Users\\bob (admin)\\game\nPath dump: C:\\Users\\bob (admin)\\game\\bin";

    let outcome = engine.scrub(content)?;
    assert_eq!(
        outcome.cleaned,
        "Base Directory: *ANONYMIZED*\nPath dump: *ANONYMIZED*\\bin"
    );
    Ok(())
}

/// `analyze` reports exactly what `scrub` would redact.
#[test]
fn test_analyze_matches_scrub_summary() -> Result<()> {
    let engine = ScrubEngine::new(Catalog::built_in()?)?;
    let content = "LogInit: MachineId=5C9F2E8A44D1\nLogTemp: cache key 5C9F2E8A44D1 reused";

    let analyzed = engine.analyze(content)?;
    let scrubbed = engine.scrub(content)?;
    assert_eq!(analyzed, scrubbed.summary);

    let machine = analyzed.iter().find(|i| i.pattern_name == "machine_id").unwrap();
    assert_eq!(machine.occurrences, 2);
    Ok(())
}
