use biotempo_core::{
    load_timeline_from_path, load_timeline_from_str, load_tributes_from_str, DatasetError,
};
use std::io::Write;

#[test]
fn timeline_records_tolerate_missing_optional_fields() {
    let json = r#"[
        {"id": 1, "year": "1995", "title": "Registro completo",
         "summary": "resumo", "fullText": "texto", "categories": ["Saúde Pública"]},
        {"id": 2, "year": "1996", "title": "Registro mínimo"}
    ]"#;

    let events = load_timeline_from_str(json).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].summary, "");
    assert_eq!(events[1].full_text, "");
    assert!(events[1].categories.is_empty());
}

#[test]
fn timeline_full_text_uses_the_wire_field_name() {
    let json = r#"[{"id": 1, "year": "1995", "title": "t", "fullText": "corpo do evento"}]"#;
    let events = load_timeline_from_str(json).unwrap();
    assert_eq!(events[0].full_text, "corpo do evento");

    let round_trip = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(round_trip["fullText"], "corpo do evento");
    assert!(round_trip.get("full_text").is_none());
}

#[test]
fn malformed_year_labels_are_not_load_errors() {
    let json = r#"[{"id": 1, "year": "indeterminado", "title": "t"}]"#;
    let events = load_timeline_from_str(json).unwrap();
    assert_eq!(events[0].year, "indeterminado");
}

#[test]
fn parse_failure_is_reported_not_panicked() {
    let err = load_timeline_from_str("{ not json").unwrap_err();
    assert!(matches!(err, DatasetError::Parse(_)));
    assert!(err.to_string().contains("failed to decode"));
}

#[test]
fn timeline_loads_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 7, "year": "2005", "title": "Declaração da UNESCO"}}]"#
    )
    .unwrap();

    let events = load_timeline_from_path(file.path()).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, 7);
}

#[test]
fn missing_file_reports_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_timeline_from_path(dir.path().join("ausente.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io(_)));
}

#[test]
fn tributes_parse_and_preview_their_bios() {
    let json = r#"[
        {"id": 1, "name": "Van Rensselaer Potter", "years": "1911-2001",
         "bio": "Bioquímico e oncologista americano, popularizou a palavra bioética e propôs a disciplina como ponte entre as ciências biológicas e os valores humanos, insistindo que a sobrevivência da humanidade depende de unir ciência e sabedoria."}
    ]"#;

    let tributes = load_tributes_from_str(json).unwrap();
    assert_eq!(tributes.len(), 1);
    assert_eq!(tributes[0].years, "1911-2001");

    let preview = tributes[0].bio_preview();
    assert!(preview.chars().count() <= 153);
    assert!(preview.ends_with("..."));
}
