
use support_single::{closed_port_url, run_hitit, spawn_http_server};

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn e2e_single_request_reports_undefined_std_dev() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_hitit(dir.path(), ["-u", url.as_str(), "-r", "1", "-s", "1"])?;
    let stdout = stdout_of(&output);
    if !output.status.success() {
        return Err(format!(
            "hitit failed: stdout={} stderr={}",
            stdout,
            stderr_of(&output)
        ));
    }

    for expected in [
        "Request rate: 1",
        "Successful:         1 of 1",
        "Standard Deviation: n/a",
        "Mode:               none",
    ] {
        if !stdout.contains(expected) {
            return Err(format!("missing {:?} in stdout: {}", expected, stdout));
        }
    }
    if server.hits() != 1 {
        return Err(format!("Expected 1 hit, got {}", server.hits()));
    }
    Ok(())
}

#[test]
fn e2e_writes_json_report() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let report_path = dir.path().join("report.json");
    let report_arg = report_path.to_string_lossy().into_owned();

    let output = run_hitit(
        dir.path(),
        [
            "-u",
            url.as_str(),
            "-r",
            "5",
            "-s",
            "1",
            "--seed",
            "7",
            "--output",
            report_arg.as_str(),
        ],
    )?;
    if !output.status.success() {
        return Err(format!("hitit failed: stderr={}", stderr_of(&output)));
    }

    let raw = std::fs::read_to_string(&report_path)
        .map_err(|err| format!("read report failed: {}", err))?;
    let report: serde_json::Value =
        serde_json::from_str(&raw).map_err(|err| format!("parse report failed: {}", err))?;

    if report.get("dispatched").and_then(serde_json::Value::as_u64) != Some(5) {
        return Err(format!("Unexpected dispatched in {}", raw));
    }
    if report.get("successful").and_then(serde_json::Value::as_u64) != Some(5) {
        return Err(format!("Unexpected successful in {}", raw));
    }
    if report.get("interrupted").and_then(serde_json::Value::as_bool) != Some(false) {
        return Err(format!("Unexpected interrupted in {}", raw));
    }
    if report
        .get("latency_seconds")
        .and_then(|latency| latency.get("std_dev"))
        .and_then(serde_json::Value::as_f64)
        .is_none()
    {
        return Err(format!("Expected a std_dev in {}", raw));
    }
    if server.hits() != 5 {
        return Err(format!("Expected 5 hits, got {}", server.hits()));
    }
    Ok(())
}

#[test]
fn e2e_reads_config_file_from_working_dir() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config = format!("url = \"{}\"\nrate = 3\nseconds = 1\n", url);
    std::fs::write(dir.path().join("hitit.toml"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_hitit(dir.path(), ["--max-in-flight", "1"])?;
    let stdout = stdout_of(&output);
    if !output.status.success() {
        return Err(format!("hitit failed: stderr={}", stderr_of(&output)));
    }
    if !stdout.contains("Successful:         3 of 3") {
        return Err(format!("Unexpected stdout: {}", stdout));
    }
    if server.hits() != 3 {
        return Err(format!("Expected 3 hits, got {}", server.hits()));
    }
    Ok(())
}

#[test]
fn e2e_no_successful_responses_fails() -> Result<(), String> {
    let url = closed_port_url()?;
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_hitit(dir.path(), ["-u", url.as_str(), "-r", "2", "-s", "1"])?;
    if output.status.success() {
        return Err("Expected failure without successful responses".to_owned());
    }
    let stderr = stderr_of(&output);
    if !stderr.contains("No successful responses received.") {
        return Err(format!("Unexpected stderr: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_rejects_zero_rate() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_hitit(dir.path(), ["-r", "0"])?;
    if output.status.success() {
        return Err("Expected clap to reject a zero rate".to_owned());
    }
    Ok(())
}
