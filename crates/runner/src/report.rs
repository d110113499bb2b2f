//! Human-readable run summary

use vigil_core::Order;

use crate::simulation::RunResult;

/// Shown after every run
pub const DISCLAIMER: &str =
    "Simulation complete. This is for educational understanding of market behavior, not for trading use.";

fn format_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "(empty)".to_string();
    }
    orders
        .iter()
        .map(|o| format!("{} x{} ({})", o.price, o.size, o.owner))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Branch, flags and final book as a few lines of text
pub fn summary(result: &RunResult) -> String {
    let mut lines = vec![format!(
        "Run: {} events, threshold {}, {:?} branch",
        result.events.len(),
        result.threshold,
        result.branch
    )];

    if result.flags.is_empty() {
        lines.push("Flags: no pattern detected".to_string());
    } else {
        lines.push("Flags:".to_string());
        lines.extend(result.flag_messages().iter().map(|m| format!("  - {m}")));
    }

    lines.push(format!("Final bids: {}", format_orders(&result.book.bids)));
    lines.push(format!("Final asks: {}", format_orders(&result.book.asks)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;
    use vigil_scenario::ScenarioConfig;

    #[test]
    fn test_benign_summary() {
        let config = ScenarioConfig {
            steps: 0,
            threshold_pct: 100,
            ..Default::default()
        };
        let text = summary(&simulate(&config).unwrap());

        assert!(text.contains("6 events"));
        assert!(text.contains("no pattern detected"));
        assert!(text.contains("Final asks:"));
        assert!(text.contains("x100 (ALGO)"));
    }

    #[test]
    fn test_predatory_summary_lists_flags() {
        let config = ScenarioConfig {
            threshold_pct: 10,
            ..Default::default()
        };
        let text = summary(&simulate(&config).unwrap());

        assert!(text.contains("Elevated post-ask"));
        assert!(text.contains("Fast revert"));
    }

    #[test]
    fn test_summary_one_line_per_item() {
        let config = ScenarioConfig {
            threshold_pct: 10,
            ..Default::default()
        };
        let text = summary(&simulate(&config).unwrap());
        let lines: Vec<_> = text.lines().collect();

        // run, flags header, two flags, bids, asks
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Run: 18 events"));
        assert_eq!(lines[1], "Flags:");
        assert!(lines[2].starts_with("  - Elevated post-ask"));
        assert!(lines[5].starts_with("Final asks:"));
        assert!(text.ends_with('\n'));
    }
}
