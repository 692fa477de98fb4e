
use support_single::{parse_summary_metric, pick_closed_port, run_volley, spawn_http_server};

#[cfg(unix)]
use std::time::Duration;

#[cfg(unix)]
use support_single::{spawn_http_server_with_delay, spawn_volley, wait_for_exit};

#[test]
fn e2e_full_budget_against_local_server() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;

    let output = run_volley([
        "-u", url.as_str(), "-n", "40", "-c", "4", "-t", "2000",
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert_eq!(parse_summary_metric(&stdout, "Total Requests:")?, 40);
    assert_eq!(parse_summary_metric(&stdout, "Successful:")?, 40);
    assert_eq!(parse_summary_metric(&stdout, "Failed:")?, 0);
    assert_eq!(parse_summary_metric(&stdout, "Timeouts:")?, 0);
    assert_eq!(parse_summary_metric(&stdout, "Concurrency:")?, 4);
    Ok(())
}

#[test]
fn e2e_remainder_is_truncated() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;

    let output = run_volley([
        "-u", url.as_str(), "-n", "10", "-c", "3", "-t", "2000",
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert_eq!(parse_summary_metric(&stdout, "Total Requests:")?, 9);
    Ok(())
}

#[test]
fn e2e_connection_refused_counts_as_failures() -> Result<(), String> {
    let port = pick_closed_port()?;
    let url = format!("http://127.0.0.1:{}", port);

    let output = run_volley([
        "-u", url.as_str(), "-n", "6", "-c", "2", "-t", "2000",
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert_eq!(parse_summary_metric(&stdout, "Total Requests:")?, 6);
    assert_eq!(parse_summary_metric(&stdout, "Successful:")?, 0);
    assert_eq!(parse_summary_metric(&stdout, "Failed:")?, 6);
    Ok(())
}

#[cfg(unix)]
#[test]
fn e2e_interrupt_prints_partial_report_and_exits_1() -> Result<(), String> {
    // Stall each response so the run is still in flight when the signal
    // lands, but let plenty of requests complete first.
    let (url, _server) = spawn_http_server_with_delay(Duration::from_millis(50))?;

    let child = spawn_volley([
        "-u", url.as_str(), "-n", "5000", "-c", "2", "-t", "5000",
    ])?;
    std::thread::sleep(Duration::from_millis(800));

    let pid = i32::try_from(child.id()).map_err(|err| format!("pid out of range: {}", err))?;
    // SAFETY: kill(2) with a valid pid of a child we spawned and a
    // standard signal number has no memory-safety preconditions.
    let rc = unsafe { libc::kill(pid, libc::SIGINT) };
    if rc != 0 {
        let output = wait_for_exit(child, Duration::from_secs(1))?;
        return Err(format!(
            "sending SIGINT failed; child stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let output = wait_for_exit(child, Duration::from_secs(10))?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    for label in [
        "Runtime:",
        "Concurrency:",
        "Requests per second:",
        "Total Requests:",
        "Successful:",
        "Failed:",
        "Timeouts:",
        "Min Latency:",
        "Avg Latency:",
        "Max Latency:",
    ] {
        if !stdout.lines().any(|line| line.starts_with(label)) {
            return Err(format!("partial report missing {} in: {}", label, stdout));
        }
    }
    assert!(parse_summary_metric(&stdout, "Total Requests:")? >= 1);
    assert_eq!(parse_summary_metric(&stdout, "Concurrency:")?, 2);
    Ok(())
}

#[test]
fn e2e_invalid_url_is_fatal_before_any_request() -> Result<(), String> {
    let output = run_volley(["-u", "not a url"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn e2e_unsupported_method_is_fatal() -> Result<(), String> {
    let output = run_volley(["-u", "http://localhost/", "-m", "HEAD"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn e2e_params_are_appended_to_the_target() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;

    let output = run_volley([
        "-u", url.as_str(), "-n", "4", "-c", "2", "-t", "2000", "-p", "a=1&b=2",
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    assert_eq!(parse_summary_metric(&stdout, "Successful:")?, 4);
    Ok(())
}
