use std::fmt::Write as _;

use wordfreq_core::FrequencyTable;

/// Width of the longest bar, in characters.
pub const MAX_BAR_WIDTH: u64 = 50;
const BAR_CHAR: char = '#';

/// Horizontal bar chart of the `top_n` most frequent words, most frequent
/// first.
pub fn render(table: &FrequencyTable, top_n: usize) -> String {
    let entries = table.top_n(top_n);
    let mut out = String::new();
    let _ = writeln!(out, "Top {top_n} Most Frequent Words");
    let _ = writeln!(out);

    let Some(&(_, max_count)) = entries.first() else {
        let _ = writeln!(out, "no words found");
        return out;
    };

    let label_width = entries
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0)
        .max("Words".len());

    let _ = writeln!(out, "{:>label_width$}", "Words");
    for (word, count) in &entries {
        let bar = BAR_CHAR.to_string().repeat(bar_width(*count, max_count));
        let _ = writeln!(out, "{word:>label_width$} | {bar} {count}");
    }
    let axis = "-".repeat(MAX_BAR_WIDTH as usize + 2);
    let _ = writeln!(out, "{:>label_width$} +{axis}", "");
    let _ = writeln!(out, "{:>label_width$}   Frequency", "");
    out
}

/// Bar length scaled to the largest count. Non-zero counts never vanish.
fn bar_width(count: u64, max_count: u64) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let scaled = (count * MAX_BAR_WIDTH).div_ceil(max_count);
    scaled.clamp(1, MAX_BAR_WIDTH) as usize
}

#[cfg(test)]
mod tests {
    use wordfreq_core::FrequencyTable;

    use super::{bar_width, render, MAX_BAR_WIDTH};

    #[test]
    fn bars_scale_to_the_top_entry() {
        assert_eq!(bar_width(10, 10), MAX_BAR_WIDTH as usize);
        assert_eq!(bar_width(5, 10), 25);
        assert_eq!(bar_width(1, 1_000), 1);
        assert_eq!(bar_width(0, 10), 0);
    }

    #[test]
    fn chart_lists_most_frequent_first() {
        let table: FrequencyTable = [("the", 2), ("cat", 2), ("sat", 1), ("ran", 1)]
            .into_iter()
            .collect();
        let chart = render(&table, 3);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Top 3 Most Frequent Words");
        assert_eq!(lines[2], "Words");
        assert!(lines[3].starts_with("  cat | #"), "{chart}");
        assert!(lines[3].ends_with(" 2"));
        assert!(lines[4].starts_with("  the | #"), "{chart}");
        assert!(lines[5].starts_with("  ran | #"), "{chart}");
        assert!(lines[5].ends_with(" 1"));
        assert!(!chart.contains("sat"));
        assert!(lines.last().unwrap().ends_with("Frequency"));
    }

    #[test]
    fn empty_table_renders_without_bars() {
        let chart = render(&FrequencyTable::new(), 10);
        assert_eq!(chart, "Top 10 Most Frequent Words\n\nno words found\n");
    }
}
