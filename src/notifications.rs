/// Desktop notifications
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Body text shown when a countdown reaches zero
pub fn timer_done_message(task_name: &str) -> String {
    format!("Time's up for: {}!", task_name)
}

/// Send a notification when a task's countdown reaches zero
pub fn notify_timer_done(task_name: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Dayboard - Timer Done""#,
            timer_done_message(task_name).replace('"', "\\\"")
        );

        if let Err(err) = Command::new("osascript").arg("-e").arg(&script).output() {
            log::warn!("desktop notification failed: {}", err);
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = task_name;
    }
}
