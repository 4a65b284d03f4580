//
// Amounts are integers in the smallest unit of their asset.
//

/// Formats an amount for display, digits grouped by three.
///
/// Ex:
///   1000 => 1 000
///   100000 => 100 000
pub fn format_amount(amount: u64) -> String {
    format_amount_number_part(&amount.to_string())
}

// Currently using French formatting rules so digits are space-separated in groups
// of three, starting from the right side.
fn format_amount_number_part(s: &str) -> String {
    let mut part = s
        .chars()
        .collect::<Vec<_>>()
        .rchunks(3)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>();
    part.reverse();

    part.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1 000");
        assert_eq!(format_amount(100000), "100 000");
        assert_eq!(format_amount(1234567), "1 234 567");
        assert_eq!(format_amount(u64::MAX), "18 446 744 073 709 551 615");
    }
}
