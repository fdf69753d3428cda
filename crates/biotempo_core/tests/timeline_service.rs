use biotempo_core::{TimelineEvent, TimelineService, YearRange};

fn event(id: i64, year: &str, title: &str, categories: &[&str]) -> TimelineEvent {
    TimelineEvent {
        id,
        year: year.to_string(),
        title: title.to_string(),
        summary: String::new(),
        full_text: String::new(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

fn sample_service() -> TimelineService {
    TimelineService::from_events(vec![
        event(1, "2005", "Declaração da UNESCO", &["Legislação e Direitos"]),
        event(2, "1947", "Código de Nuremberg", &["Pesquisa e Experimentação"]),
        event(3, "1995", "Sociedade nacional fundada", &["Institucionalização"]),
        event(4, "1995", "Primeiro congresso nacional", &["Institucionalização"]),
    ])
}

#[test]
fn construction_preprocesses_once_and_caches_facets() {
    let service = sample_service();

    let ids: Vec<i64> = service
        .processed_events()
        .iter()
        .map(|e| e.event.id)
        .collect();
    assert_eq!(ids, vec![2, 3, 4, 1]);

    let bounds = service.bounds();
    assert_eq!(bounds.min_year, 1947);
    assert_eq!(bounds.max_year, 2005);
    assert_eq!(service.decades(), &[1940, 1990, 2000]);
}

#[test]
fn unfiltered_criteria_return_everything() {
    let mut service = sample_service();
    let criteria = service.unfiltered_criteria();

    assert_eq!(service.apply_filters(&criteria).len(), 4);
}

#[test]
fn equal_criteria_yield_identical_results_across_calls() {
    let mut service = sample_service();
    let mut criteria = service.unfiltered_criteria();
    criteria.search_term = "nacional".to_string();

    let first: Vec<i64> = service
        .apply_filters(&criteria)
        .iter()
        .map(|e| e.event.id)
        .collect();
    let again: Vec<i64> = service
        .apply_filters(&criteria)
        .iter()
        .map(|e| e.event.id)
        .collect();
    assert_eq!(first, vec![3, 4]);
    assert_eq!(first, again);

    // Interleave a different query, then return to the original one.
    let other = service.unfiltered_criteria();
    assert_eq!(service.apply_filters(&other).len(), 4);
    let back: Vec<i64> = service
        .apply_filters(&criteria)
        .iter()
        .map(|e| e.event.id)
        .collect();
    assert_eq!(back, first);
}

#[test]
fn criteria_changes_recompute_from_the_processed_dataset() {
    let mut service = sample_service();
    let mut criteria = service.unfiltered_criteria();

    criteria.selected_decade = Some(1990);
    let ids: Vec<i64> = service
        .apply_filters(&criteria)
        .iter()
        .map(|e| e.event.id)
        .collect();
    assert_eq!(ids, vec![3, 4]);

    criteria.selected_decade = None;
    criteria.year_range = YearRange {
        start: 2000,
        end: 2005,
    };
    let ids: Vec<i64> = service
        .apply_filters(&criteria)
        .iter()
        .map(|e| e.event.id)
        .collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn clamped_range_corrects_degenerate_input() {
    let service = sample_service();

    let clamped = service.clamped_range(YearRange {
        start: 1800,
        end: 2300,
    });
    assert_eq!(clamped.start, 1947);
    assert_eq!(clamped.end, 2005);

    let reversed = service.clamped_range(YearRange {
        start: 2004,
        end: 1950,
    });
    assert!(reversed.start <= reversed.end);
    assert!(reversed.start >= 1947);
    assert!(reversed.end <= 2005);
}

#[test]
fn range_edges_clamp_against_each_other() {
    let service = sample_service();
    let bounds = service.bounds();
    let mut range = YearRange::full(bounds);

    range.set_end(1990, bounds);
    range.set_start(1995, bounds);
    // The start cannot cross the current end.
    assert_eq!(range.start, 1990);
    assert_eq!(range.end, 1990);

    range.set_start(1800, bounds);
    assert_eq!(range.start, bounds.min_year);
}
