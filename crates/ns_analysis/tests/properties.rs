use ns_analysis::{
    count_fake_political_by_month, find_by_keyword, find_by_year_and_category, most_frequent_words,
    sort_by_year, sorted_by_year, AnalysisConfig,
};
use ns_core::{ArticleRecord, Category, Label};

const SUBJECTS: [&str; 9] = [
    "politics",
    "business",
    "sports",
    "politics",
    "technology",
    "government",
    "worldnews",
    "health",
    "politics",
];

const DATES: [&str; 10] = [
    "March 3, 2016",
    "2015-11-20",
    "Dec 31, 2017",
    "not a date",
    "19-Feb-16",
    "2016/07/04",
    "January 9, 2015",
    "2016",
    "05/14/2017",
    "",
];

const WORDS: [&str; 8] = ["senate", "Trump", "budget", "the", "vote", "and", "Clinton", "tax"];

/// A mixed dataset covering every subject, date shape and label.
fn dataset(size: usize) -> Vec<ArticleRecord> {
    (0..size)
        .map(|i| {
            let body = (0..(i % 5) + 1)
                .map(|j| WORDS[(i * 3 + j) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ");
            ArticleRecord::new(
                format!("Article {} {}", i, WORDS[i % WORDS.len()]),
                body,
                SUBJECTS[i % SUBJECTS.len()],
                DATES[i % DATES.len()],
                if i % 3 == 0 { Label::Real } else { Label::Fake },
            )
        })
        .collect()
}

fn titles(articles: &[ArticleRecord]) -> Vec<String> {
    articles.iter().map(|a| a.title.clone()).collect()
}

#[test]
fn sort_is_idempotent() {
    let once = sorted_by_year(&dataset(200));
    let twice = sorted_by_year(&once);
    assert_eq!(once, twice);
}

#[test]
fn sort_is_stable_within_a_year() {
    let original = dataset(200);
    let sorted = sorted_by_year(&original);

    for year in [Some(2015), Some(2016), Some(2017), None] {
        let before: Vec<_> = original.iter().filter(|a| a.year() == year).cloned().collect();
        let after: Vec<_> = sorted.iter().filter(|a| a.year() == year).cloned().collect();
        assert_eq!(titles(&before), titles(&after), "order changed for {:?}", year);
    }
}

#[test]
fn sort_keeps_every_record() {
    let original = dataset(137);
    let mut sorted = original.clone();
    sort_by_year(&mut sorted);
    assert_eq!(sorted.len(), original.len());

    let mut expected = titles(&original);
    let mut actual = titles(&sorted);
    expected.sort();
    actual.sort();
    assert_eq!(expected, actual);

    let years: Vec<_> = sorted.iter().map(|a| a.year()).collect();
    let first_undated = years.iter().position(Option::is_none).unwrap_or(years.len());
    assert!(years[first_undated..].iter().all(Option::is_none));
    assert!(years[..first_undated].windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn year_and_category_search_is_sound_and_complete() {
    let articles = dataset(300);
    for category in Category::ALL {
        for year in [2015, 2016, 2017] {
            let found = find_by_year_and_category(&articles, year, category.as_str()).unwrap();
            assert!(found
                .iter()
                .all(|a| a.year() == Some(year) && a.subject == category.as_str()));

            let expected = articles
                .iter()
                .filter(|a| a.year() == Some(year) && a.subject == category.as_str())
                .count();
            assert_eq!(found.len(), expected);
        }
    }
}

#[test]
fn keyword_search_ignores_case() {
    let articles = dataset(120);
    let lower = find_by_keyword(&articles, "trump").unwrap();
    let upper = find_by_keyword(&articles, "TRUMP").unwrap();
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
}

#[test]
fn histogram_total_matches_fake_political_count() {
    let articles = dataset(400);
    for year in [2015, 2016, 2017] {
        let histogram = count_fake_political_by_month(&articles, year).unwrap();
        let expected = articles
            .iter()
            .filter(|a| a.label == Label::Fake && a.subject == "politics")
            .filter_map(|a| a.publication_date())
            .filter(|d| d.year == year && d.month.is_some())
            .count();
        assert_eq!(histogram.total(), expected);
    }
}

#[test]
fn word_frequency_is_deterministic() {
    let articles = dataset(250);
    let config = AnalysisConfig::default().with_top_n(5);
    let first = most_frequent_words(&articles, &config).unwrap();
    let second = most_frequent_words(&articles, &config).unwrap();
    assert_eq!(first, second);
    assert!(first
        .windows(2)
        .all(|w| w[0].count > w[1].count || (w[0].count == w[1].count && w[0].word < w[1].word)));
    assert!(first.iter().all(|w| w.word != "the" && w.word != "and"));
}

#[test]
fn three_article_scenario() {
    let articles = vec![
        ArticleRecord::new("A", "first body", "politics", "March 3, 2016", Label::Fake),
        ArticleRecord::new("B", "second body", "politics", "March 10, 2016", Label::Fake),
        ArticleRecord::new("C", "third body", "sports", "March 3, 2016", Label::Real),
    ];

    let histogram = count_fake_political_by_month(&articles, 2016).unwrap();
    assert_eq!(histogram.get(3), 2);
    assert!(histogram.iter().filter(|(m, _)| *m != 3).all(|(_, c)| c == 0));

    let sports = find_by_year_and_category(&articles, 2016, "sports").unwrap();
    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].title, "C");

    let lower = find_by_keyword(&articles, "a").unwrap();
    let upper = find_by_keyword(&articles, "A").unwrap();
    assert_eq!(lower, upper);
    assert!(lower.iter().any(|a| a.title == "A"));
}

#[test]
fn empty_collection_never_fails() {
    let mut empty: Vec<ArticleRecord> = Vec::new();
    sort_by_year(&mut empty);
    assert!(find_by_year_and_category(&empty, 2016, "politics").unwrap().is_empty());
    assert!(find_by_keyword(&empty, "anything").unwrap().is_empty());
    assert_eq!(count_fake_political_by_month(&empty, 2016).unwrap().total(), 0);
    assert!(most_frequent_words(&empty, &AnalysisConfig::default()).unwrap().is_empty());
}
