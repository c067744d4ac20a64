//! Scripted `CommandRunner` double for adapter unit tests.

#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;

use crate::command_runner::CommandRunner;

/// Canned reply for one expected invocation.
pub struct Reply {
    pub code: i32,
    pub stdout: &'static str,
    pub stderr: &'static str,
}

impl Reply {
    pub fn ok(stdout: &'static str) -> Self {
        Self {
            code: 0,
            stdout,
            stderr: "",
        }
    }

    pub fn fail(code: i32, stderr: &'static str) -> Self {
        Self {
            code,
            stdout: "",
            stderr,
        }
    }
}

/// Runner that pops one scripted reply per invocation and records the full
/// command line it was asked to run.
pub struct ScriptedRunner {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn reply_for(&self, program: &str, args: &[&str]) -> Output {
        self.calls
            .lock()
            .expect("lock")
            .push(format!("{program} {}", args.join(" ")));
        let reply = self
            .replies
            .lock()
            .expect("lock")
            .pop_front()
            .expect("more invocations than scripted replies");
        Output {
            status: ExitStatus::from_raw(reply.code << 8),
            stdout: reply.stdout.as_bytes().to_vec(),
            stderr: reply.stderr.as_bytes().to_vec(),
        }
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        Ok(self.reply_for(program, args))
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> Result<Output> {
        Ok(self.reply_for(program, args))
    }

    async fn run_with_stdin(&self, program: &str, args: &[&str], _input: &[u8]) -> Result<Output> {
        Ok(self.reply_for(program, args))
    }
}
