use sysinfo::{Pid, ProcessesToUpdate, System};

/// Placeholder when a process cannot be inspected (exited, or access denied).
pub const UNKNOWN: &str = "Unknown";

/// Process name and executable path for `pid`.
pub fn process_identity(pid: u32) -> (String, String) {
    let pid = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    match system.process(pid) {
        Some(process) => {
            let name = process.name().to_string_lossy().to_string();
            let exe = process
                .exe()
                .map(|path| path.to_string_lossy().to_string())
                .unwrap_or_else(|| UNKNOWN.to_string());
            (name, exe)
        }
        None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
    }
}
