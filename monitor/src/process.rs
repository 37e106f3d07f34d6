//! Resource usage of the local delegate process

use crate::errors::ProcessError;
use anyhow::Result;
use sysinfo::{Pid, Process, ProcessStatus, ProcessesToUpdate, System};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    /// Resident set size in bytes
    pub rss: u64,
}

/// Point-in-time resource readings of one process
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessHandle {
    pid: u32,
    cpu_percent: f64,
    rss: u64,
}

impl ProcessHandle {
    pub fn new(pid: u32, cpu_percent: f64, rss: u64) -> Self {
        Self {
            pid,
            cpu_percent,
            rss,
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn cpu_percent(&self) -> f64 {
        self.cpu_percent
    }

    pub fn memory_info(&self) -> MemoryInfo {
        MemoryInfo { rss: self.rss }
    }
}

pub trait ProcessLookup: Send {
    fn current_process_handle(&mut self) -> Result<ProcessHandle>;
}

/// Finds the delegate client by process name.
///
/// Keeps its `System` between calls: CPU usage is measured over the time
/// elapsed since the previous refresh, i.e. one monitoring interval.
pub struct SysinfoProcessLookup {
    system: System,
    process_name: String,
    pid: Option<Pid>,
}

impl SysinfoProcessLookup {
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            system: System::new(),
            process_name: process_name.into(),
            pid: None,
        }
    }

    fn refresh_known(&mut self) -> Option<ProcessHandle> {
        let pid = self.pid?;
        match self.system.process(pid) {
            Some(process) if is_alive_named(process, &self.process_name) => {
                Some(to_handle(pid, process))
            }
            _ => {
                debug!("Process {} ({}) went away", pid, self.process_name);
                self.pid = None;
                None
            }
        }
    }

    fn find_by_name(&mut self) -> Option<ProcessHandle> {
        let (pid, process) = self
            .system
            .processes()
            .iter()
            .find(|(_, process)| is_alive_named(process, &self.process_name))?;

        debug!("Found {} with pid {}", self.process_name, pid);
        let handle = to_handle(*pid, process);
        self.pid = Some(*pid);
        Some(handle)
    }
}

/// Zombies keep their table entry until reaped, so they count as gone
fn is_alive_named(process: &Process, name: &str) -> bool {
    !matches!(process.status(), ProcessStatus::Zombie | ProcessStatus::Dead)
        && process.name().to_string_lossy() == name
}

fn to_handle(pid: Pid, process: &Process) -> ProcessHandle {
    ProcessHandle::new(pid.as_u32(), f64::from(process.cpu_usage()), process.memory())
}

impl ProcessLookup for SysinfoProcessLookup {
    fn current_process_handle(&mut self) -> Result<ProcessHandle> {
        // Refreshing only the cached pid never drops an exited process
        self.system.refresh_processes(ProcessesToUpdate::All);

        if let Some(handle) = self.refresh_known() {
            return Ok(handle);
        }

        self.find_by_name().ok_or_else(|| {
            ProcessError::NotRunning {
                name: self.process_name.clone(),
            }
            .into()
        })
    }
}
