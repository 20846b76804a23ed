//! Platform-specific command shapes and output parsers for process control.
//!
//! Building a command line and reading the tool's answer are pure
//! functions here; running them belongs to `crate::infra`.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

/// Operating-system family, chosen once when adapters are constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `taskkill` / `netstat`; process-tree aware.
    Windows,
    /// `pkill` / `lsof` / `ps`, plus `open` for URLs.
    MacOs,
    /// Any other Unix: `pkill` / `lsof` / `ps`, plus `xdg-open` for URLs.
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Unix
        }
    }
}

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments borrowed as `&str`, the shape `CommandRunner` takes.
    #[must_use]
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── Command builders ─────────────────────────────────────────────────────────

/// Terminate every process matching `name`.
///
/// Windows matches the image name (`.exe` appended when missing) and takes
/// the process tree with it; elsewhere the name is a pattern matched against
/// full command lines.
#[must_use]
pub fn kill_by_name_command(platform: Platform, name: &str) -> CommandLine {
    match platform {
        Platform::Windows => {
            let image = if name.to_lowercase().ends_with(".exe") {
                name.to_string()
            } else {
                format!("{name}.exe")
            };
            CommandLine::new(
                "taskkill",
                ["/F".to_string(), "/T".to_string(), "/IM".to_string(), image],
            )
        }
        Platform::MacOs | Platform::Unix => CommandLine::new("pkill", ["-f", name]),
    }
}

/// List the process ids listening on `port`.
#[must_use]
pub fn port_owner_query(platform: Platform, port: u16) -> CommandLine {
    match platform {
        Platform::Windows => CommandLine::new("netstat", ["-ano", "-p", "TCP"]),
        Platform::MacOs | Platform::Unix => CommandLine::new(
            "lsof",
            [
                "-t".to_string(),
                "-n".to_string(),
                "-P".to_string(),
                format!("-iTCP:{port}"),
                "-sTCP:LISTEN".to_string(),
            ],
        ),
    }
}

/// Snapshot of `pid ppid` pairs, where the platform needs one to find
/// descendants itself.
#[must_use]
pub fn process_table_query(platform: Platform) -> Option<CommandLine> {
    match platform {
        Platform::Windows => None,
        Platform::MacOs | Platform::Unix => {
            Some(CommandLine::new("ps", ["-A", "-o", "pid=", "-o", "ppid="]))
        }
    }
}

/// Forcefully stop `pid` and its descendants.
///
/// `descendants` is ignored on Windows, where `taskkill /T` walks the tree.
#[must_use]
pub fn kill_tree_command(platform: Platform, pid: u32, descendants: &[u32]) -> CommandLine {
    match platform {
        Platform::Windows => CommandLine::new(
            "taskkill",
            ["/F".to_string(), "/T".to_string(), "/PID".to_string(), pid.to_string()],
        ),
        Platform::MacOs | Platform::Unix => {
            let mut args = vec!["-9".to_string()];
            args.extend(descendants.iter().map(u32::to_string));
            args.push(pid.to_string());
            CommandLine::new("kill", args)
        }
    }
}

/// Start `editor`, optionally on `path`.
#[must_use]
pub fn editor_command(platform: Platform, editor: &str, path: Option<&Path>) -> CommandLine {
    let path = path.map(|p| p.to_string_lossy().into_owned());
    match platform {
        // Editors install as `.cmd` shims on Windows, which only cmd can run.
        Platform::Windows => {
            let mut args = vec!["/C".to_string(), editor.to_string()];
            args.extend(path);
            CommandLine::new("cmd", args)
        }
        Platform::MacOs | Platform::Unix => CommandLine::new(editor, path),
    }
}

/// Open `url` in the default handler.
#[must_use]
pub fn open_url_command(platform: Platform, url: &str) -> CommandLine {
    match platform {
        Platform::Windows => CommandLine::new("rundll32", ["url.dll,FileProtocolHandler", url]),
        Platform::MacOs => CommandLine::new("open", [url]),
        Platform::Unix => CommandLine::new("xdg-open", [url]),
    }
}

/// Terse working-tree status of the repository at `path`.
#[must_use]
pub fn git_status_command(path: &Path) -> CommandLine {
    CommandLine::new(
        "git",
        [
            "-C".to_string(),
            path.to_string_lossy().into_owned(),
            "status".to_string(),
            "--short".to_string(),
        ],
    )
}

// ── Output parsers ───────────────────────────────────────────────────────────

/// Process ids listening on `port` in `netstat -ano` output.
///
/// Only rows whose local address is exactly `:port` and whose foreign
/// address is the `:0` wildcard (a listening socket, whatever the locale
/// calls that state) are kept. Duplicates collapse in first-seen order;
/// pid 0 is the idle process and is skipped.
#[must_use]
pub fn parse_netstat_owners(stdout: &str, port: u16) -> Vec<u32> {
    let suffix = format!(":{port}");
    let pids = stdout.lines().filter_map(|line| {
        let cols: Vec<&str> = line.split_whitespace().collect();
        let [proto, local, foreign, .., pid] = cols.as_slice() else {
            return None;
        };
        if !proto.eq_ignore_ascii_case("TCP") || !local.ends_with(&suffix) {
            return None;
        }
        if !foreign.ends_with(":0") {
            return None;
        }
        pid.parse::<u32>().ok()
    });
    dedup_pids(pids)
}

/// Process ids in `lsof -t` output, one per line.
#[must_use]
pub fn parse_lsof_owners(stdout: &str) -> Vec<u32> {
    dedup_pids(stdout.lines().filter_map(|line| line.trim().parse::<u32>().ok()))
}

/// `(pid, ppid)` rows from `ps -o pid= -o ppid=`. Malformed rows are skipped.
#[must_use]
pub fn parse_process_table(stdout: &str) -> Vec<(u32, u32)> {
    stdout
        .lines()
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            let pid = cols.next()?.parse().ok()?;
            let ppid = cols.next()?.parse().ok()?;
            Some((pid, ppid))
        })
        .collect()
}

/// All descendants of `root`, deepest generation first.
#[must_use]
pub fn collect_descendants(table: &[(u32, u32)], root: u32) -> Vec<u32> {
    let mut children: HashMap<u32, Vec<u32>> = HashMap::new();
    for &(pid, ppid) in table {
        if pid != ppid {
            children.entry(ppid).or_default().push(pid);
        }
    }

    let mut seen = HashSet::from([root]);
    let mut order = Vec::new();
    let mut queue = VecDeque::from([root]);
    while let Some(parent) = queue.pop_front() {
        for &child in children.get(&parent).map_or(&[][..], Vec::as_slice) {
            if seen.insert(child) {
                order.push(child);
                queue.push_back(child);
            }
        }
    }
    order.reverse();
    order
}

fn dedup_pids(pids: impl Iterator<Item = u32>) -> Vec<u32> {
    let mut seen = HashSet::new();
    pids.filter(|pid| *pid != 0 && seen.insert(*pid)).collect()
}
