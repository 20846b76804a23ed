//! Tests for the `workspace_switch` application service.
//!
//! Drives `WorkspaceSwitcher` through fake collaborators and checks the
//! log stream, the side-effect order and the returned report.

#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::path::PathBuf;

use switchblade_cli::application::ports::PortOutcome;
use switchblade_cli::application::services::workspace_switch::{
    PortReport, SwitchOutcome, SwitchReport, UrlReport,
};
use switchblade_cli::domain::LogLevel;
use switchblade_cli::domain::config::WorkspaceEntry;

use crate::mocks::{MemorySink, World, demo_config, journal_entries};

const MISSING: &str = "/tmp/missing";

fn completed(outcome: SwitchOutcome) -> SwitchReport {
    match outcome {
        SwitchOutcome::Completed(report) => report,
        SwitchOutcome::NotFound => panic!("expected a completed switch"),
    }
}

// ── Not found ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_workspace_logs_one_error_and_touches_nothing() {
    let (switcher, journal) = World::default().build();
    let sink = MemorySink::default();

    let outcome = switcher.switch("nope", &demo_config(MISSING), &sink).await;

    assert_eq!(outcome, SwitchOutcome::NotFound);
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Error);
    assert_eq!(entries[0].message, "Workspace 'nope' not found.");
    assert!(journal_entries(&journal).is_empty());
}

// ── Scenarios ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_demo_with_missing_path_and_free_port() {
    let (switcher, journal) = World::default().build();
    let sink = MemorySink::default();

    let report = completed(switcher.switch("demo", &demo_config(MISSING), &sink).await);

    assert_eq!(
        sink.messages(),
        vec![
            "--- Initializing Workspace: DEMO ---",
            "Closed Foo",
            "Port 5173 is available.",
            "Launching editor 'code' on /tmp/missing",
            "Opening http://localhost:5173",
            "--- Execution Complete: DEMO is active ---",
        ]
    );
    assert_eq!(
        journal_entries(&journal),
        vec![
            "kill_by_name Foo",
            "kill_by_port 5173",
            "open_editor /tmp/missing",
            "open_url http://localhost:5173",
        ],
        "no git query for a path that is not a directory"
    );
    assert_eq!(
        report,
        SwitchReport {
            workspace: "demo".to_string(),
            apps_closed: vec!["Foo".to_string()],
            uncommitted_changes: false,
            ports: vec![PortReport {
                port: 5173,
                outcome: PortOutcome::AlreadyFree,
            }],
            editor_launched: true,
            urls: vec![UrlReport {
                url: "http://localhost:5173".to_string(),
                opened: true,
            }],
        }
    );
}

#[tokio::test]
async fn test_demo_with_live_listener_terminates_tree() {
    let (switcher, _journal) = World {
        owners: HashMap::from([(5173, vec![1234])]),
        ..World::default()
    }
    .build();
    let sink = MemorySink::default();

    let report = completed(switcher.switch("demo", &demo_config(MISSING), &sink).await);

    let messages = sink.messages();
    assert!(
        messages.contains(&"Terminated process tree on port 5173 (pid 1234)".to_string()),
        "got: {messages:?}"
    );
    assert!(!messages.iter().any(|m| m.contains("available")));
    assert_eq!(
        report.ports[0].outcome,
        PortOutcome::Freed { pids: vec![1234] }
    );
}

#[tokio::test]
async fn test_dirty_repository_warning_sits_between_cleanup_and_ports() {
    let (switcher, journal) = World {
        dirty: true,
        dirs: vec![PathBuf::from("/work/demo")],
        ..World::default()
    }
    .build();
    let sink = MemorySink::default();

    let report = completed(switcher.switch("demo", &demo_config("/work/demo"), &sink).await);

    let messages = sink.messages();
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[1], "Closed Foo");
    assert_eq!(messages[2], "Uncommitted git changes detected in /work/demo");
    assert_eq!(messages[3], "Port 5173 is available.");
    assert_eq!(sink.count_level(LogLevel::Warn), 1);
    assert_eq!(
        messages.last().map(String::as_str),
        Some("--- Execution Complete: DEMO is active ---")
    );
    assert!(report.uncommitted_changes);
    assert!(journal_entries(&journal).contains(&"git_status /work/demo".to_string()));
}

#[tokio::test]
async fn test_clean_repository_is_queried_but_silent() {
    let (switcher, journal) = World {
        dirs: vec![PathBuf::from("/work/demo")],
        ..World::default()
    }
    .build();
    let sink = MemorySink::default();

    switcher.switch("demo", &demo_config("/work/demo"), &sink).await;

    assert_eq!(sink.count_level(LogLevel::Warn), 0);
    assert_eq!(journal_entries(&journal)[1], "git_status /work/demo");
}

// ── Fault tolerance ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_launch_runs_and_completes_when_everything_fails() {
    let mut config = demo_config(MISSING);
    config
        .workspaces
        .get_mut("demo")
        .expect("demo")
        .urls
        .push("http://localhost:3000".to_string());
    let (switcher, journal) = World {
        editor_fails: true,
        failing_urls: vec!["http://localhost:5173".to_string()],
        ..World::default()
    }
    .build();
    let sink = MemorySink::default();

    let report = completed(switcher.switch("demo", &config, &sink).await);

    let messages = sink.messages();
    assert!(messages.contains(
        &"Editor 'code' failed to launch: code could not be started: not found".to_string()
    ));
    assert!(messages.iter().any(|m| m.starts_with("Could not open http://localhost:5173")));
    assert!(messages.contains(&"Opening http://localhost:3000".to_string()));
    assert_eq!(
        messages.last().map(String::as_str),
        Some("--- Execution Complete: DEMO is active ---")
    );
    assert!(!report.editor_launched);
    assert_eq!(
        report.urls.iter().map(|u| u.opened).collect::<Vec<_>>(),
        vec![false, true]
    );
    assert!(journal_entries(&journal).contains(&"open_url http://localhost:3000".to_string()));
}

// ── Ordering and lookup ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_phases_run_in_fixed_order() {
    let mut config = demo_config("/work/demo");
    *config.workspaces.get_mut("demo").expect("demo") = WorkspaceEntry {
        path: PathBuf::from("/work/demo"),
        ports: vec![8080, 5173, 8080],
        urls: vec!["http://a".to_string(), "http://b".to_string()],
        apps_to_close: vec!["Slack".to_string(), "Spotify".to_string()],
    };
    let (switcher, journal) = World {
        dirs: vec![PathBuf::from("/work/demo")],
        owners: HashMap::from([(5173, vec![10, 11])]),
        ..World::default()
    }
    .build();
    let sink = MemorySink::default();

    switcher.switch("demo", &config, &sink).await;

    assert_eq!(
        journal_entries(&journal),
        vec![
            "kill_by_name Slack",
            "kill_by_name Spotify",
            "git_status /work/demo",
            "kill_by_port 8080",
            "kill_by_port 5173",
            "kill_by_port 8080",
            "open_editor /work/demo",
            "open_url http://a",
            "open_url http://b",
        ]
    );
    let port_lines: Vec<_> = sink
        .messages()
        .into_iter()
        .filter(|m| m.contains("port") || m.starts_with("Port"))
        .collect();
    assert_eq!(
        port_lines,
        vec![
            "Port 8080 is available.",
            "Terminated process tree on port 5173 (pids 10, 11)",
            "Port 8080 is available.",
        ]
    );
}

#[tokio::test]
async fn test_lookup_ignores_case() {
    let (switcher, _journal) = World::default().build();
    let sink = MemorySink::default();

    let report = completed(switcher.switch("DeMo", &demo_config(MISSING), &sink).await);

    assert_eq!(report.workspace, "demo");
    assert_eq!(sink.messages()[0], "--- Initializing Workspace: DEMO ---");
}

#[tokio::test]
async fn test_empty_workspace_still_launches_editor() {
    let mut config = demo_config("");
    *config.workspaces.get_mut("demo").expect("demo") = WorkspaceEntry::default();
    let (switcher, journal) = World::default().build();
    let sink = MemorySink::default();

    switcher.switch("demo", &config, &sink).await;

    assert_eq!(
        sink.messages(),
        vec![
            "--- Initializing Workspace: DEMO ---",
            "Launching editor 'code'",
            "--- Execution Complete: DEMO is active ---",
        ]
    );
    assert_eq!(journal_entries(&journal), vec!["open_editor "]);
}

#[tokio::test]
async fn test_switcher_is_reusable_across_switches() {
    let (switcher, _journal) = World::default().build();
    let config = demo_config(MISSING);
    let first = MemorySink::default();
    let second = MemorySink::default();

    switcher.switch("demo", &config, &first).await;
    switcher.switch("demo", &config, &second).await;

    assert_eq!(first.messages(), second.messages());
}
