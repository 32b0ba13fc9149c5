// Integration tests for the OSAA long-haul analysis

use osaa_longhaul::core::{Analysis, Annotator, TeamKey};
use osaa_longhaul::models::{Division, Matchup, Sport, Tier, TurnaroundSummary};
use osaa_longhaul::services::{
    export_csv, export_summary, load_matchups, render_html, render_text, sample_matchups, save_matchups,
    BracketTextParser, RenderOptions,
};

fn run_sample() -> Analysis {
    Analysis::run(&Annotator::default(), sample_matchups(), &Analysis::default_regional_teams())
}

#[test]
fn test_integration_sample_pipeline() {
    let analysis = run_sample();
    let annotation = &analysis.annotation;

    assert_eq!(annotation.total_matchups, sample_matchups().len());
    assert_eq!(annotation.unresolved, 0);
    assert_eq!(
        annotation.games.len() + annotation.below_threshold,
        annotation.total_matchups
    );

    // Every kept game is long-haul with a known tier
    for game in &annotation.games {
        let distance = game.distance_miles.unwrap();
        assert!(distance >= 95.0);
        assert_ne!(game.tier, Tier::Unknown);
    }

    assert_eq!(analysis.tiers.total(), annotation.games.len());
    assert_eq!(analysis.report.total_appearances, analysis.entries.len());
    assert!(analysis.report.total_appearances <= annotation.games.len() * 2);
}

#[test]
fn test_integration_crescent_valley_pendleton() {
    let matchups = vec![Matchup::new(
        2025,
        Sport::Baseball,
        Division::FiveA,
        "First Round",
        "Crescent Valley",
        "Pendleton",
    )];
    let analysis = Analysis::run(&Annotator::default(), matchups, &[]);

    let game = &analysis.annotation.games[0];
    let distance = game.distance_miles.unwrap();
    assert!(distance > 200.0 && distance < 249.0);
    assert_eq!(game.tier, Tier::Yellow);
}

#[test]
fn test_integration_pendleton_turnaround() {
    // Pendleton meets Summit and Crescent Valley in the 2025 5A baseball sample
    let analysis = run_sample();

    let key = TeamKey {
        team: "Pendleton".to_string(),
        year: 2025,
        sport: Sport::Baseball,
        division: Division::FiveA,
    };
    let pendleton = analysis.entries.get(&key).unwrap();

    assert!(pendleton.is_multi_game());
    assert!(pendleton.games.iter().all(|g| !g.is_home));
    assert_eq!(pendleton.away_miles(), pendleton.total_miles());

    assert!(analysis.report.multi_game_count >= 1);
    assert!(analysis
        .report
        .worst_cases
        .iter()
        .any(|w| w.team == "Pendleton" && w.year == 2025 && w.sport == Sport::Baseball));
}

#[test]
fn test_integration_worst_cases_sorted() {
    let analysis = run_sample();
    let worst = &analysis.report.worst_cases;

    assert_eq!(worst.len(), analysis.report.multi_game_count);
    for pair in worst.windows(2) {
        assert!(pair[0].total_miles >= pair[1].total_miles);
    }
    assert!(worst.iter().all(|w| w.games >= 2 && w.details.len() == w.games));
}

#[test]
fn test_integration_rollups_are_consistent() {
    let analysis = run_sample();
    let report = &analysis.report;

    let division_teams: usize = report.by_division.values().map(|b| b.teams).sum();
    let year_teams: usize = report.by_year.values().map(|b| b.teams).sum();
    assert_eq!(division_teams, report.total_appearances);
    assert_eq!(year_teams, report.total_appearances);

    let home_away = &report.home_away;
    assert_eq!(home_away.home_games, home_away.away_games);
    assert_eq!(home_away.home_games, analysis.annotation.games.len());

    // Regional burden is heaviest first and only lists regional teams
    let regional_teams = Analysis::default_regional_teams();
    for pair in analysis.regional.windows(2) {
        assert!(pair[0].total_away_miles >= pair[1].total_away_miles);
    }
    assert!(analysis.regional.iter().all(|r| regional_teams.contains(&r.team)));
}

#[test]
fn test_integration_unknown_teams_reported() {
    let matchups = vec![
        Matchup::new(2024, Sport::Softball, Division::ThreeA, "First Round", "Nowhere Academy", "Enterprise"),
        Matchup::new(2024, Sport::Softball, Division::ThreeA, "First Round", "Rainier", "Enterprise"),
    ];
    let analysis = Analysis::run(&Annotator::default(), matchups, &[]);

    assert_eq!(analysis.annotation.unresolved, 1);
    assert!(analysis.annotation.unresolved_teams.contains("Nowhere Academy"));
    assert_eq!(analysis.annotation.games.len(), 1);
}

#[test]
fn test_integration_text_to_json_roundtrip() {
    let text = "\
2024 OSAA 4A Baseball State Championship
First Round
5/21
Philomath
Ontario
Quarterfinals
5/24
Philomath
La Grande
";
    let parsed = BracketTextParser::new().unwrap().parse(text);
    assert_eq!(parsed.matchups.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parsed_brackets.json");
    save_matchups(&path, &parsed.matchups, Some("test".to_string())).unwrap();

    let loaded = load_matchups(&path).unwrap();
    assert_eq!(loaded, parsed.matchups);

    let analysis = Analysis::run(&Annotator::default(), loaded, &[]);
    assert_eq!(analysis.annotation.games.len(), 2);
    assert_eq!(analysis.report.multi_game_count, 1);
    assert_eq!(analysis.report.worst_cases[0].team, "Philomath");
}

#[test]
fn test_integration_report_outputs() {
    let analysis = run_sample();
    let options = RenderOptions::default();
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("osaa_brackets.csv");
    export_csv(&csv_path, &analysis.annotation.games).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("year,sport,division,round,team1"));
    assert_eq!(csv.lines().count(), analysis.annotation.games.len() + 1);

    let html = render_html(&analysis, &options).unwrap();
    assert!(!html.contains("{{"));
    assert!(html.contains("Pendleton"));

    let summary = TurnaroundSummary::new(&analysis.report, &analysis.regional, &analysis.tiers, options.top_n);
    assert!(summary.worst_cases.len() <= options.top_n);

    let summary_path = dir.path().join("turnaround_analysis.json");
    export_summary(&summary_path, &summary).unwrap();
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(
        json["total_team_playoff_combinations"].as_u64().unwrap() as usize,
        analysis.report.total_appearances
    );

    let text = render_text(&analysis, &options);
    assert!(text.contains("Pendleton"));
}
