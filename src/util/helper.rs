// src/util/helper.rs
use std::io::{self, Write};

use chrono::{DateTime, Utc};

/// Ask the user a yes/no question on stderr; default is "no".
pub fn confirm(prompt: &str) -> bool {
    eprint!("{} (y/N): ", prompt);
    io::stderr().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Coarse "time since" label for the trash listing.
pub fn format_relative(when: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(when);

    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn given_recent_timestamp_when_formatted_then_uses_coarse_units() {
        assert_eq!(format_relative(Utc::now()), "just now");
        assert_eq!(
            format_relative(Utc::now() - Duration::minutes(5)),
            "5m ago"
        );
        assert_eq!(format_relative(Utc::now() - Duration::hours(3)), "3h ago");
        assert_eq!(format_relative(Utc::now() - Duration::days(2)), "2d ago");
    }
}
