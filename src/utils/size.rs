/// Format byte counts the way the file-info line shows them
///
/// Below 1 KiB the count is shown in bytes, below 1 MiB in KB with one
/// decimal, and in MB with two decimals above that.
///
/// # Examples
/// ```
/// use b64_inspect::utils::size::format_size;
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1} KB", bytes as f64 / KB)
    } else {
        format!("{:.2} MB", bytes as f64 / MB)
    }
}
