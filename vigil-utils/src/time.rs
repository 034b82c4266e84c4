use chrono::Local;

/// Display format for timestamps shown to users.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Return the current local time formatted for display.
pub fn now_label() -> String {
    Local::now().format(DISPLAY_TIME_FORMAT).to_string()
}
