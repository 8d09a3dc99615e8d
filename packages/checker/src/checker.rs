//! Concurrent proxy checking
//!
//! Candidates are queued on a channel and drained by a fixed set of worker
//! threads. Each worker dials the probe target through one candidate at a
//! time; a live tunnel is closed at once and the candidate kept.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use crossbeam_channel::unbounded;
use proxydial::{ProxyProtocol, dial_timeout};

use crate::cli::Args;

/// What to dial and how long to wait for each candidate.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub protocol: ProxyProtocol,
    pub target: String,
    pub timeout: Duration,
    pub threads: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub checked: usize,
    pub valid: usize,
}

/// Split a proxy list into candidates: CRLF or LF separated, blank lines skipped.
#[must_use]
pub fn parse_candidates(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Dial the probe target through `candidate` and close the tunnel.
///
/// # Errors
///
/// Whatever the dial failed with.
pub fn probe(candidate: &str, settings: &CheckSettings) -> proxydial::Result<()> {
    let tunnel = dial_timeout(
        settings.protocol,
        candidate,
        &settings.target,
        settings.timeout,
    )?;
    drop(tunnel);
    Ok(())
}

/// Check every candidate and return the working ones in input order.
#[must_use]
pub fn check_all(candidates: &[String], settings: &CheckSettings) -> Vec<String> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let (job_tx, job_rx) = unbounded::<(usize, &str)>();
    for (index, candidate) in candidates.iter().enumerate() {
        if job_tx.send((index, candidate.as_str())).is_err() {
            break;
        }
    }
    drop(job_tx);

    let (valid_tx, valid_rx) = unbounded::<(usize, &str)>();
    let total_valid = AtomicUsize::new(0);
    let workers = settings.threads.clamp(1, candidates.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let valid_tx = valid_tx.clone();
            let total_valid = &total_valid;
            scope.spawn(move || {
                for (index, candidate) in job_rx.iter() {
                    match probe(candidate, settings) {
                        Ok(()) => {
                            let total = total_valid.fetch_add(1, Ordering::Relaxed) + 1;
                            tracing::info!(proxy = candidate, total_valid = total, "valid proxy");
                            if valid_tx.send((index, candidate)).is_err() {
                                break;
                            }
                        }
                        Err(e) => tracing::debug!(proxy = candidate, error = %e, "discarding proxy"),
                    }
                }
            });
        }
    });
    drop(valid_tx);

    let mut valid: Vec<(usize, &str)> = valid_rx.iter().collect();
    valid.sort_unstable_by_key(|(index, _)| *index);
    valid
        .into_iter()
        .map(|(_, candidate)| candidate.to_owned())
        .collect()
}

/// One proxy per line.
#[must_use]
pub fn render_valid(valid: &[String]) -> String {
    let mut out = valid.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Read candidates, check them and write the survivors.
///
/// # Errors
///
/// Fails when the proxy file cannot be read or the output cannot be written.
pub fn run(args: &Args) -> anyhow::Result<Summary> {
    let contents = fs::read_to_string(&args.proxy_file)
        .with_context(|| format!("failed to read {}", args.proxy_file.display()))?;
    let candidates = parse_candidates(&contents);
    let settings = args.settings();

    tracing::info!(
        candidates = candidates.len(),
        threads = settings.threads,
        target = %settings.target,
        protocol = %settings.protocol,
        "checking proxies"
    );

    let valid = check_all(&candidates, &settings);
    write_valid(&args.output_file, &valid)?;

    Ok(Summary {
        checked: candidates.len(),
        valid: valid.len(),
    })
}

/// Persist the working proxies to `path`.
///
/// # Errors
///
/// Fails when the file cannot be written.
pub fn write_valid(path: &Path, valid: &[String]) -> anyhow::Result<()> {
    fs::write(path, render_valid(valid))
        .with_context(|| format!("failed to write {}", path.display()))
}
