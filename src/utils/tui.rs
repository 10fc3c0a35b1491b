//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI. The report itself is plain
//! tab-separated lines; only the banner and info box adapt to the terminal.

use super::bench::unit_name;
use super::runner::ReportRecord;
use crate::config::BenchConfig;
use crate::registry::{KernelRegistry, KernelRunner};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Parallel Kernel Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print kernel info box
pub fn print_kernel_info_box(kernel: &dyn KernelRunner, config: &BenchConfig) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let mode = if config.block { "block" } else { "plain" };
    let mut lines = vec![
        format!("Kernel:    {} ({})", kernel.name(), mode),
        format!("Category:  {}", kernel.category()),
        kernel.description().to_string(),
        format!(
            "Length: {}   Reps: {}   Ticks: {}",
            config.length,
            config.nreps,
            unit_name()
        ),
        "Variants:".to_string(),
    ];
    lines.extend(
        kernel
            .available_variants(config)
            .iter()
            .map(|v| format!("  {:<10} {}", v.name, v.description)),
    );

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Column header of the report; block mode left-aligns the name column
pub fn table_header(block: bool) -> &'static str {
    if block {
        "Name    \tflops\tticks\tflops/tick"
    } else {
        "  Name  \tflops\tticks\tflops/tick"
    }
}

pub fn print_table_header(block: bool) {
    println!("{}", table_header(block));
}

/// One report row: name, flops, ticks, rate
pub fn format_record(record: &ReportRecord, block: bool) -> String {
    if block {
        format!(
            "{}\t{}\t{}\t{:8.2}\t",
            record.name, record.flops, record.ticks, record.rate
        )
    } else {
        format!(
            "{:>8}\t{}\t{}\t{:8.2}\t",
            record.name, record.flops, record.ticks, record.rate
        )
    }
}

/// Print validation warnings (if any) followed by the row itself
pub fn print_record(record: &ReportRecord, block: bool) {
    for message in record.status.messages() {
        println!("{}", message);
    }
    println!("{}", format_record(record, block));
}

/// Print the list of available kernels
pub fn print_available_kernels(registry: &KernelRegistry) {
    println!("Available kernels:");
    println!();
    for kernel in registry.all() {
        println!(
            "  {:<10} [{}] - {}",
            kernel.name(),
            kernel.category(),
            kernel.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate::Validation;

    #[test]
    fn test_format_record_columns() {
        let record = ReportRecord::new("dot_ref", 200, 400, Validation::Passed);
        let line = format_record(&record, false);
        let columns: Vec<&str> = line.split('\t').collect();
        assert_eq!(columns[0], " dot_ref");
        assert_eq!(columns[1], "200");
        assert_eq!(columns[2], "400");
        assert_eq!(columns[3].trim(), "0.50");
    }

    #[test]
    fn test_block_rows_are_not_padded() {
        let record = ReportRecord::new("bdot_ref", 3200, 1600, Validation::Reference);
        let line = format_record(&record, true);
        assert!(line.starts_with("bdot_ref\t3200\t1600\t"), "{:?}", line);

        let short = ReportRecord::new("dot_ref", 200, 400, Validation::Passed);
        assert!(format_record(&short, true).starts_with("dot_ref\t"));
    }

    #[test]
    fn test_table_header_per_mode() {
        assert_eq!(table_header(false), "  Name  \tflops\tticks\tflops/tick");
        assert_eq!(table_header(true), "Name    \tflops\tticks\tflops/tick");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long variant name", 10), "a long ...");
    }
}
