use chrono::{DateTime, Utc};
use colored::Colorize;
use docshelf::api::{Category, DocumentRecord, Statistics};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 60;
const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

pub fn print_records(records: &[DocumentRecord]) {
    if records.is_empty() {
        println!("{}", "No documents found.".yellow());
        return;
    }

    let mut sorted: Vec<&DocumentRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    for (i, record) in sorted.iter().enumerate() {
        let title = truncate_to_width(&record.title, TITLE_WIDTH);
        let padding = TITLE_WIDTH.saturating_sub(title.width());
        let year = record
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());

        println!(
            "{:>3}. {}{} {} {:>10}",
            i + 1,
            title.bold(),
            " ".repeat(padding),
            year.cyan(),
            format_file_size(record.size_bytes)
        );

        let author = if record.author.is_empty() {
            "-"
        } else {
            record.author.as_str()
        };
        let added = record
            .added_at
            .map(format_time_ago)
            .unwrap_or_else(|| "not indexed".to_string());
        println!(
            "     {}  {}  {}",
            record.relative_path.dimmed(),
            author,
            added.dimmed()
        );
    }
    println!("\n{} document(s)", records.len());
}

pub fn print_group_header(label: &str, count: usize) {
    println!("\n{} ({})", label.yellow().bold(), count);
}

pub fn print_statistics(stats: &Statistics) {
    println!("{}", "Shelf statistics".yellow().bold());
    println!("  Documents:  {}", stats.total_documents);
    println!(
        "  Total size: {} ({} MiB)",
        format_file_size(stats.total_size_bytes),
        stats.total_size_mib
    );
    match (stats.oldest_year, stats.newest_year) {
        (Some(oldest), Some(newest)) => println!("  Years:      {} - {}", oldest, newest),
        _ => println!("  Years:      -"),
    }

    println!("\n{}", "By category".cyan());
    for (category, count) in &stats.by_category {
        println!("  {:<10} {}", category.to_string(), count);
    }

    if !stats.by_year.is_empty() {
        println!("\n{}", "By year".cyan());
        for (year, count) in stats.by_year.iter().rev() {
            println!("  {:<10} {}", year, count);
        }
    }
}

pub fn print_categories() {
    for category in Category::ALL {
        println!(
            "  {:<10} {}",
            category.to_string().bold(),
            category.extensions().join(" ")
        );
    }
}

pub fn print_success(message: &str) {
    println!("{}", message.green());
}

pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

/// 1024-step units with two decimals: `512.00 B`, `1.50 MB`.
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in SIZE_UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
