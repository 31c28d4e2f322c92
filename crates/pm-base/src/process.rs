use std::io::{self, Read};
use std::process::{Command, Output, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::constants::PROCESS_POLL_INTERVAL_MS;

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Run a Command with a timeout. Returns a TimedOut error if the command exceeds the limit.
///
/// stdin is closed and both output streams are captured. The limit covers the
/// whole call, including collecting output still held open by descendants.
/// A timeout too large to represent means no limit.
pub fn run_with_timeout(mut cmd: Command, timeout: Duration) -> io::Result<Output> {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).stdin(Stdio::null());
    let mut child = cmd.spawn()?;
    let deadline = Instant::now().checked_add(timeout);

    // Drain both pipes so a chatty child never blocks on a full buffer
    let (tx, rx) = mpsc::channel();
    let mut readers = 0;
    if let Some(pipe) = child.stdout.take() {
        drain(pipe, Stream::Stdout, tx.clone());
        readers += 1;
    }
    if let Some(pipe) = child.stderr.take() {
        drain(pipe, Stream::Stderr, tx.clone());
        readers += 1;
    }
    drop(tx);

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(timed_out(timeout));
        }
        thread::sleep(Duration::from_millis(PROCESS_POLL_INTERVAL_MS));
    };

    let mut output = Output { status, stdout: Vec::new(), stderr: Vec::new() };
    for _ in 0..readers {
        let received = match deadline {
            Some(d) => rx.recv_timeout(d.saturating_duration_since(Instant::now())).map_err(|e| match e {
                RecvTimeoutError::Timeout => timed_out(timeout),
                RecvTimeoutError::Disconnected => io::Error::other("output reader exited early"),
            })?,
            None => rx.recv().map_err(|_| io::Error::other("output reader exited early"))?,
        };
        match received {
            (Stream::Stdout, buf) => output.stdout = buf,
            (Stream::Stderr, buf) => output.stderr = buf,
        }
    }

    Ok(output)
}

fn timed_out(timeout: Duration) -> io::Error {
    io::Error::new(io::ErrorKind::TimedOut, format!("Command timed out after {}s", timeout.as_secs()))
}

fn drain<R: Read + Send + 'static>(mut pipe: R, stream: Stream, tx: Sender<(Stream, Vec<u8>)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send((stream, buf));
    });
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", script]);
        cmd
    }

    #[test]
    fn captures_stdout_and_stderr() {
        let out = run_with_timeout(sh("echo hello; echo oops >&2"), Duration::from_secs(10)).unwrap();
        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout), "hello\n");
        assert_eq!(String::from_utf8_lossy(&out.stderr), "oops\n");
    }

    #[test]
    fn reports_non_zero_exit() {
        let out = run_with_timeout(sh("exit 3"), Duration::from_secs(10)).unwrap();
        assert_eq!(out.status.code(), Some(3));
    }

    #[test]
    fn times_out_long_running_command() {
        let started = Instant::now();
        let err = run_with_timeout(sh("exec sleep 5"), Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn background_descendant_holding_stdout_still_times_out() {
        let started = Instant::now();
        let err = run_with_timeout(sh("sleep 6 & echo hi"), Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn huge_timeout_means_no_limit() {
        let out = run_with_timeout(sh("echo ok"), Duration::from_secs(u64::MAX)).unwrap();
        assert_eq!(String::from_utf8_lossy(&out.stdout), "ok\n");
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let err = run_with_timeout(Command::new("pm-no-such-program-xyz"), Duration::from_secs(1)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn large_output_does_not_deadlock() {
        let out = run_with_timeout(sh("head -c 200000 /dev/zero"), Duration::from_secs(10)).unwrap();
        assert_eq!(out.stdout.len(), 200_000);
    }
}
