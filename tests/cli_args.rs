//! Integration tests for CLI argument handling
//!
//! Tests the --cache-ttl and --api-url flags and a short scripted session.

use std::io::Write;
use std::process::{Command, Stdio};

/// Helper to run the CLI with given args and stdin, capturing output
fn run_cli(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pokedex");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for pokedex")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"], "");
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex"), "Help should mention pokedex");
    assert!(stdout.contains("--cache-ttl"), "Help should mention --cache-ttl");
    assert!(stdout.contains("--api-url"), "Help should mention --api-url");
}

#[test]
fn test_zero_ttl_prints_error_and_exits() {
    let output = run_cli(&["--cache-ttl", "0"], "");
    assert!(!output.status.success(), "Expected zero TTL to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid cache TTL"),
        "Should print error message about the TTL: {}",
        stderr
    );
}

#[test]
fn test_bad_api_url_prints_error_and_exits() {
    let output = run_cli(&["--api-url", "pokeapi.co"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid API URL"), "{}", stderr);
}

#[test]
fn test_offline_session_runs_local_commands() {
    // Only commands that never touch the network.
    let output = run_cli(
        &["--api-url", "http://127.0.0.1:9", "--cache-ttl", "1"],
        "help\npokedex\ninspect pikachu\nmapb\nexit\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex > "));
    assert!(stdout.contains("catch: try to catch a Pokemon"));
    assert!(stdout.contains("Your Pokedex is empty"));
    assert!(stdout.contains("error: you have not caught pikachu"));
    assert!(stdout.contains("error: you are already on the first page"));
}

#[test]
fn test_session_ends_at_end_of_input() {
    let output = run_cli(&["--api-url", "http://127.0.0.1:9"], "pokedex\n");
    assert!(output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use pokedex::cli::{Cli, CliError, StartupConfig};
    use std::time::Duration;

    #[test]
    fn test_cli_custom_values() {
        let cli = Cli::parse_from([
            "pokedex",
            "--cache-ttl",
            "60",
            "--api-url",
            "http://localhost:3000/api/v2",
            "-v",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.api_url, "http://localhost:3000/api/v2");
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn test_cli_zero_ttl_is_error() {
        let cli = Cli::parse_from(["pokedex", "--cache-ttl", "0"]);
        let result = StartupConfig::from_cli(&cli);
        assert!(matches!(result, Err(CliError::InvalidTtl(0))));
    }

    #[test]
    fn test_cli_non_numeric_ttl_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["pokedex", "--cache-ttl", "soon"]).is_err());
    }
}
