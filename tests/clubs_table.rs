// tests/clubs_table.rs
use away_days::Error;
use away_days::data::ClubStadiumRecord;
use away_days::specs::clubs;

fn fixture() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/efl_championship.html"))
        .unwrap()
}

#[test]
fn keeps_only_club_and_stadium() {
    let rows = clubs::parse(&fixture()).unwrap();
    assert_eq!(
        rows,
        vec![
            ClubStadiumRecord::new("Nottingham Forest", "City Ground"),
            ClubStadiumRecord::new("Derby County", "Pride Park Stadium"),
            ClubStadiumRecord::new("Sheffield United", "Bramall Lane"),
            ClubStadiumRecord::new("Fulham Reserves", "Craven Cottage"),
            ClubStadiumRecord::new("Fulham", "Craven Cottage"),
        ]
    );
}

#[test]
fn skips_the_unsorted_table_before_it() {
    let rows = clubs::parse(&fixture()).unwrap();
    assert!(rows.iter().all(|r| r.club != "2022–23"));
}

#[test]
fn missing_table_is_a_parse_error() {
    let html = "<html><body><table class=\"wikitable\"><tr><th>Club</th></tr></table></body></html>";
    assert!(matches!(clubs::parse(html), Err(Error::Parse(_))));
}

#[test]
fn missing_stadium_column_is_a_parse_error() {
    let html = r#"<table class="wikitable sortable">
        <tr><th>Club</th><th>Manager</th></tr>
        <tr><td>Hull City</td><td>Someone</td></tr>
    </table>"#;
    match clubs::parse(html) {
        Err(Error::Parse(msg)) => assert!(msg.contains("stadium"), "{msg}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn ground_and_team_headers_are_accepted() {
    let html = r#"<table class="wikitable sortable">
        <tr><th>Team</th><th>Ground name</th></tr>
        <tr><td>Hull City</td><td>MKM Stadium</td></tr>
    </table>"#;
    let rows = clubs::parse(html).unwrap();
    assert_eq!(rows, vec![ClubStadiumRecord::new("Hull City", "MKM Stadium")]);
}
