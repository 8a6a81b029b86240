use ns_analysis::analysis::MONTH_NAMES;
use ns_analysis::{MonthlyHistogram, WordCount};
use ns_core::ArticleRecord;
use serde::Serialize;
use std::path::Path;

const TITLE_WIDTH: usize = 80;
const TITLE_LIMIT: usize = 75;
const TITLE_KEEP: usize = 72;

/// Shorten long titles to 72 characters followed by `...`.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_LIMIT {
        let kept: String = title.chars().take(TITLE_KEEP).collect();
        format!("{}...", kept)
    } else {
        title.to_string()
    }
}

fn year_cell(article: &ArticleRecord) -> String {
    article
        .year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "?".to_string())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_articles<'a, I>(articles: I, with_category: bool)
where
    I: IntoIterator<Item = &'a ArticleRecord>,
{
    let rule = if with_category { 110 } else { 100 };
    if with_category {
        println!("{:<6}  {:<w$}  {:<6}  {:<15}", "No.", "Title", "Year", "Category", w = TITLE_WIDTH);
    } else {
        println!("{:<6}  {:<w$}  {:<6}", "No.", "Title", "Year", w = TITLE_WIDTH);
    }
    println!("{}", "-".repeat(rule));

    for (i, article) in articles.into_iter().enumerate() {
        let title = truncate_title(&article.title);
        if with_category {
            println!(
                "{:<6}  {:<w$}  {:<6}  {:<15}",
                i + 1,
                title,
                year_cell(article),
                article.subject,
                w = TITLE_WIDTH
            );
        } else {
            println!("{:<6}  {:<w$}  {:<6}", i + 1, title, year_cell(article), w = TITLE_WIDTH);
        }
    }
}

pub fn print_histogram(histogram: &MonthlyHistogram) {
    println!("Fake political news in {}", histogram.year);
    println!("{:<12}  {:>6}", "Month", "Count");
    println!("{}", "-".repeat(20));
    for (month, count) in histogram.iter() {
        println!("{:<12}  {:>6}", MONTH_NAMES[(month - 1) as usize], count);
    }
    println!("{}", "-".repeat(20));
    println!("{:<12}  {:>6}", "Total", histogram.total());
}

pub fn print_words(words: &[WordCount]) {
    println!("{:<6}  {:<20}  {:>8}", "Rank", "Word", "Count");
    println!("{}", "-".repeat(38));
    for (i, word) in words.iter().enumerate() {
        println!("{:<6}  {:<20}  {:>8}", i + 1, word.word, word.count);
    }
}

pub fn print_datasets(paths: &[impl AsRef<Path>]) {
    println!("Available datasets:");
    for (i, path) in paths.iter().enumerate() {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("{}. {}", i + 1, name);
    }
}
