/// `m:ss`, minutes unbounded.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `Xm Ys`, as shown when confirming an early save.
pub fn format_duration(secs: u64) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(300), "5:00");
        assert_eq!(format_clock(7263), "121:03");
    }

    #[test]
    fn duration_spells_units() {
        assert_eq!(format_duration(42), "0m 42s");
        assert_eq!(format_duration(125), "2m 5s");
    }
}
