//! Tests for `SystemProcessTerminator` against a scripted runner.

#![allow(clippy::expect_used)]

use switchblade_cli::application::ports::{PortOutcome, ProcessTerminator};
use switchblade_cli::domain::Platform;
use switchblade_cli::infra::process::SystemProcessTerminator;

use crate::helpers::{FakeRunner, Reply, err_output, ok_output};

const PS_TABLE: &[u8] = b"    1     0\n 1234     1\n 1300  1234\n 1400  1300\n 5678     1\n";

// ── kill_by_name ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_kill_by_name_unix_uses_pkill_pattern() {
    let runner = FakeRunner::new();
    let terminator = SystemProcessTerminator::new(runner.clone(), Platform::Unix);

    terminator.kill_by_name("Spotify").await;

    assert_eq!(runner.calls(), vec!["pkill -f Spotify"]);
}

#[tokio::test]
async fn test_kill_by_name_windows_kills_image_tree() {
    let runner = FakeRunner::new();
    let terminator = SystemProcessTerminator::new(runner.clone(), Platform::Windows);

    terminator.kill_by_name("WhatsApp.Root").await;

    assert_eq!(runner.calls(), vec!["taskkill /F /T /IM WhatsApp.Root.exe"]);
}

#[tokio::test]
async fn test_kill_by_name_no_match_and_missing_tool_are_silent() {
    let no_match = FakeRunner::new().reply("pkill", Reply::Out(err_output(1, b"")));
    SystemProcessTerminator::new(no_match, Platform::MacOs)
        .kill_by_name("Nothing")
        .await;

    let missing = FakeRunner::new().reply("pkill", Reply::SpawnError);
    SystemProcessTerminator::new(missing.clone(), Platform::Unix)
        .kill_by_name("Nothing")
        .await;
    assert_eq!(missing.calls().len(), 1);
}

// ── kill_by_port (Unix) ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_kill_by_port_unix_kills_every_owner_with_descendants() {
    let runner = FakeRunner::new()
        .reply("lsof", Reply::Out(ok_output(b"1234\n5678\n")))
        .reply("ps", Reply::Out(ok_output(PS_TABLE)));
    let terminator = SystemProcessTerminator::new(runner.clone(), Platform::Unix);

    let outcome = terminator.kill_by_port(5173).await;

    assert_eq!(outcome, PortOutcome::Freed { pids: vec![1234, 5678] });
    assert_eq!(
        runner.calls(),
        vec![
            "lsof -t -n -P -iTCP:5173 -sTCP:LISTEN",
            "ps -A -o pid= -o ppid=",
            "kill -9 1400 1300 1234",
            "ps -A -o pid= -o ppid=",
            "kill -9 5678",
        ]
    );
}

#[tokio::test]
async fn test_kill_by_port_unix_no_listener_is_already_free() {
    let runner = FakeRunner::new().reply("lsof", Reply::Out(err_output(1, b"")));
    let terminator = SystemProcessTerminator::new(runner.clone(), Platform::Unix);

    assert_eq!(terminator.kill_by_port(5173).await, PortOutcome::AlreadyFree);
    assert_eq!(runner.calls().len(), 1, "no kill issued");
}

#[tokio::test]
async fn test_kill_by_port_missing_lsof_is_already_free() {
    let runner = FakeRunner::new().reply("lsof", Reply::SpawnError);
    let terminator = SystemProcessTerminator::new(runner.clone(), Platform::MacOs);

    assert_eq!(terminator.kill_by_port(3000).await, PortOutcome::AlreadyFree);
}

#[tokio::test]
async fn test_kill_by_port_without_process_table_kills_owner_only() {
    let runner = FakeRunner::new()
        .reply("lsof", Reply::Out(ok_output(b"1234\n")))
        .reply("ps", Reply::SpawnError);
    let terminator = SystemProcessTerminator::new(runner.clone(), Platform::Unix);

    let outcome = terminator.kill_by_port(5173).await;

    assert_eq!(outcome, PortOutcome::Freed { pids: vec![1234] });
    assert_eq!(runner.calls().last().map(String::as_str), Some("kill -9 1234"));
}

#[tokio::test]
async fn test_kill_by_port_swallows_kill_failure() {
    let runner = FakeRunner::new()
        .reply("lsof", Reply::Out(ok_output(b"1\n")))
        .reply("ps", Reply::Out(ok_output(b"")))
        .reply("kill", Reply::Out(err_output(1, b"Operation not permitted")));
    let terminator = SystemProcessTerminator::new(runner, Platform::Unix);

    assert_eq!(
        terminator.kill_by_port(80).await,
        PortOutcome::Freed { pids: vec![1] }
    );
}

// ── kill_by_port (Windows) ───────────────────────────────────────────────────

#[tokio::test]
async fn test_kill_by_port_windows_kills_each_listening_pid() {
    let netstat = b"
  Proto  Local Address          Foreign Address        State           PID
  TCP    0.0.0.0:5173           0.0.0.0:0              LISTENING       4242
  TCP    [::]:5173              [::]:0                 LISTENING       4343
  TCP    127.0.0.1:5173         127.0.0.1:50100        ESTABLISHED     4242
";
    let runner = FakeRunner::new().reply("netstat", Reply::Out(ok_output(netstat)));
    let terminator = SystemProcessTerminator::new(runner.clone(), Platform::Windows);

    let outcome = terminator.kill_by_port(5173).await;

    assert_eq!(outcome, PortOutcome::Freed { pids: vec![4242, 4343] });
    assert_eq!(
        runner.calls(),
        vec![
            "netstat -ano -p TCP",
            "taskkill /F /T /PID 4242",
            "taskkill /F /T /PID 4343",
        ]
    );
}

#[tokio::test]
async fn test_kill_by_port_windows_unmatched_port_is_already_free() {
    let netstat = b"  TCP    0.0.0.0:135    0.0.0.0:0    LISTENING    900\n";
    let runner = FakeRunner::new().reply("netstat", Reply::Out(ok_output(netstat)));
    let terminator = SystemProcessTerminator::new(runner.clone(), Platform::Windows);

    assert_eq!(terminator.kill_by_port(5173).await, PortOutcome::AlreadyFree);
    assert_eq!(runner.calls(), vec!["netstat -ano -p TCP"]);
}
