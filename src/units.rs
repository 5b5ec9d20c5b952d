// SPDX-License-Identifier: MPL-2.0
//! Human-readable traffic formatting for the dashboard tables.

/// Formats a byte count the way the console's traffic columns display it.
///
/// Unit breakpoints sit at one tenth of the next unit, so values switch to
/// kilobytes from 102.4 bytes upward and so on. Two decimal places are
/// kept unless they are both zero.
#[must_use]
pub fn format_traffic(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    const GB: f64 = 1024.0 * 1024.0 * 1024.0;

    let (value, unit) = if bytes < 0.1 * KB {
        (bytes, "B")
    } else if bytes < 0.1 * MB {
        (bytes / KB, "KB")
    } else if bytes < 0.1 * GB {
        (bytes / MB, "MB")
    } else {
        (bytes / GB, "GB")
    };

    let size = format!("{:.2}{}", value, unit);
    // Drop an all-zero decimal part: "12.00KB" -> "12KB".
    match size.find('.') {
        Some(dot) if size.get(dot + 1..dot + 3) == Some("00") => {
            format!("{}{}", &size[..dot], &size[dot + 3..])
        }
        _ => size,
    }
}
