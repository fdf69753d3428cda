use biotempo_core::{preprocess, TimelineEvent, UNKNOWN_YEAR};

fn event(id: i64, year: &str, title: &str) -> TimelineEvent {
    TimelineEvent {
        id,
        year: year.to_string(),
        title: title.to_string(),
        summary: String::new(),
        full_text: String::new(),
        categories: Vec::new(),
    }
}

#[test]
fn events_sort_ascending_by_resolved_year() {
    let processed = preprocess(vec![
        event(1, "2005", "c"),
        event(2, "Século XIX", "a"),
        event(3, "1995", "b"),
    ]);

    let years: Vec<i32> = processed.iter().map(|e| e.numeric_year).collect();
    assert_eq!(years, vec![1800, 1995, 2005]);
    let ids: Vec<i64> = processed.iter().map(|e| e.event.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn unresolved_years_sort_first() {
    let processed = preprocess(vec![
        event(1, "1947", "a"),
        event(2, "desconhecido", "b"),
    ]);

    assert_eq!(processed[0].event.id, 2);
    assert_eq!(processed[0].numeric_year, UNKNOWN_YEAR);
    assert_eq!(processed[1].event.id, 1);
}

#[test]
fn equal_years_keep_dataset_order() {
    let processed = preprocess(vec![
        event(10, "1997", "primeiro de 1997"),
        event(11, "1996", "único de 1996"),
        event(12, "1997", "segundo de 1997"),
        event(13, "1997", "terceiro de 1997"),
    ]);

    let ids: Vec<i64> = processed.iter().map(|e| e.event.id).collect();
    assert_eq!(ids, vec![11, 10, 12, 13]);
}

#[test]
fn preprocessing_is_idempotent_on_ordering() {
    let raw = vec![
        event(1, "1995", "a"),
        event(2, "sem data", "b"),
        event(3, "1995", "c"),
        event(4, "Século XX", "d"),
    ];

    let first = preprocess(raw.clone());
    let second = preprocess(raw);
    assert_eq!(first, second);

    let reprocessed = preprocess(first.iter().map(|e| e.event.clone()).collect());
    assert_eq!(reprocessed, second);
}
