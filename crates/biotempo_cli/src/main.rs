//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `biotempo_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use biotempo_core::{
    core_version, decade_label, load_timeline_from_path, load_timeline_from_str,
    load_tributes_from_path, load_tributes_from_str, DatasetResult, TimelineService, TributePerson,
};
use std::path::Path;
use std::process::ExitCode;

const TIMELINE_JSON: &str = include_str!("../../../data/timeline.json");
const TRIBUTES_JSON: &str = include_str!("../../../data/tributes.json");

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("biotempo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> DatasetResult<()> {
    // First argument may name a data directory; anything after it (or
    // everything, with the embedded data) is treated as a search term.
    let (raw, tributes, term) = match args.split_first() {
        Some((dir, rest)) if Path::new(dir).is_dir() => {
            let base = Path::new(dir);
            (
                load_timeline_from_path(base.join("timeline.json"))?,
                load_tributes_from_path(base.join("tributes.json"))?,
                rest.join(" "),
            )
        }
        _ => (
            load_timeline_from_str(TIMELINE_JSON)?,
            load_tributes_from_str(TRIBUTES_JSON)?,
            args.join(" "),
        ),
    };

    let mut service = TimelineService::from_events(raw);
    print_overview(&service, &tributes);

    if !term.is_empty() {
        print_search(&mut service, &term);
    }

    Ok(())
}

fn print_overview(service: &TimelineService, tributes: &[TributePerson]) {
    let bounds = service.bounds();
    let decades = service
        .decades()
        .iter()
        .map(|&decade| decade_label(decade))
        .collect::<Vec<_>>()
        .join(", ");

    println!("biotempo_core version={}", core_version());
    println!(
        "events={} tributes={}",
        service.processed_events().len(),
        tributes.len()
    );
    println!("bounds={}..={}", bounds.min_year, bounds.max_year);
    println!("decades={decades}");
}

fn print_search(service: &mut TimelineService, term: &str) {
    let mut criteria = service.unfiltered_criteria();
    criteria.search_term = term.to_string();

    let hits = service.apply_filters(&criteria);
    println!("search `{term}` matches={}", hits.len());
    for hit in hits {
        println!("  [{}] {}", hit.event.year, hit.event.title);
    }
}
