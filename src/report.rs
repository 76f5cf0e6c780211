// src/report.rs

//! Status reporting for startup and per-run outcomes.
//!
//! Coloring is driven entirely by the explicit `color` flag handed in at
//! construction; there is no global override and no tty detection, so with
//! the flag off the output never contains an escape code.

use std::time::Duration;

use crate::exec::ResolvedCommand;
use crate::trigger::Trigger;

const GREEN_BOLD: &str = "\x1b[1;32m";
const RED_BOLD: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    status: bool,
    color: bool,
}

impl Reporter {
    pub fn new(status: bool, color: bool) -> Self {
        Self { status, color }
    }

    /// One line describing what is watched and how, printed once at startup.
    pub fn startup(&self, cmd: &ResolvedCommand, trigger: Trigger, interval: Duration) {
        if self.status {
            println!("{}", self.startup_line(cmd, trigger, interval));
        }
    }

    /// Success or failure line for one run of the command.
    pub fn run_finished(&self, code: i32) {
        if self.status {
            println!("{}", self.run_line(code));
        }
    }

    pub fn startup_line(
        &self,
        cmd: &ResolvedCommand,
        trigger: Trigger,
        interval: Duration,
    ) -> String {
        format!(
            "watchrun: running '{}' on change (trigger: {}, interval: {}s)",
            cmd,
            trigger,
            interval.as_secs()
        )
    }

    pub fn run_line(&self, code: i32) -> String {
        if code == 0 {
            self.paint(GREEN_BOLD, "watchrun: run succeeded")
        } else {
            self.paint(RED_BOLD, &format!("watchrun: run failed with exit code {code}"))
        }
    }

    fn paint(&self, color: &str, s: &str) -> String {
        if self.color {
            format!("{color}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
