//! HTML and console rendering of an analysis

use std::collections::BTreeSet;
use std::fmt::{self, Write};

use crate::core::{Analysis, TierThresholds, WorstCase};
use crate::models::Tier;
use crate::services::export::{games_json, ExportError};

const TEMPLATE: &str = include_str!("../../templates/brackets.html");

/// Rounds in bracket order; anything else sorts after these
const ROUND_ORDER: &[&str] = &["First Round", "Second Round", "Quarterfinals", "Semifinals", "Championship"];

/// Rendering parameters shared by the HTML and text reports
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub min_distance: f64,
    pub thresholds: TierThresholds,
    pub top_n: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            min_distance: crate::core::MIN_DISTANCE_MILES,
            thresholds: TierThresholds::default(),
            top_n: 10,
        }
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make JSON safe to embed in a `<script>` block
///
/// `</script>` and `<!--` inside string values would otherwise end or
/// corrupt the block. `<\/` is still the same string to a JSON parser.
pub fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\u0021--")
}

/// Short round label for the worst-case details column
pub fn round_abbrev(round: &str) -> &str {
    match round {
        "First Round" => "R1",
        "Second Round" => "R2",
        "Quarterfinals" => "QF",
        "Semifinals" => "SF",
        "Championship" => "F",
        other => other,
    }
}

fn round_rank(round: &str) -> usize {
    ROUND_ORDER.iter().position(|r| *r == round).unwrap_or(ROUND_ORDER.len())
}

/// Per-game trip list, e.g. `R1: @Philomath (319mi) → QF: vs Bend (160mi)`
pub fn worst_case_details(case: &WorstCase) -> String {
    case.details
        .iter()
        .map(|g| {
            let at = if g.is_home { "vs " } else { "@" };
            format!("{}: {}{} ({:.0}mi)", round_abbrev(&g.round), at, g.opponent, g.distance)
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

fn tier_of_average(total: f64, count: usize, thresholds: &TierThresholds) -> Tier {
    if count == 0 {
        return Tier::Unknown;
    }
    thresholds.classify(Some(total / count as f64))
}

fn burden_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Red => "Extreme",
        Tier::Yellow => "High",
        Tier::Green => "Moderate",
        Tier::Unknown => "None",
    }
}

fn year_span(years: &BTreeSet<u16>) -> String {
    match (years.first(), years.last()) {
        (Some(first), Some(last)) if first != last => format!("{}-{}", first, last),
        (Some(first), _) => first.to_string(),
        _ => String::new(),
    }
}

fn option_lines<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| {
            let v = escape_html(v);
            format!("                    <option value=\"{}\">{}</option>", v, v)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn worst_case_rows(analysis: &Analysis, options: &RenderOptions) -> String {
    if analysis.report.worst_cases.is_empty() {
        return "                    <tr><td colspan=\"6\" class=\"no-data\">No team faced two or more long-haul games</td></tr>"
            .to_string();
    }

    analysis
        .report
        .worst_cases
        .iter()
        .take(options.top_n)
        .map(|case| {
            let tier = tier_of_average(case.total_miles, case.games, &options.thresholds);
            format!(
                "                    <tr class=\"tier-{}\"><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td><td>{:.0} mi</td><td>{}</td></tr>",
                tier,
                escape_html(&case.team),
                case.year,
                case.sport.title(),
                case.division,
                case.total_miles,
                escape_html(&worst_case_details(case)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn regional_rows(analysis: &Analysis, options: &RenderOptions) -> String {
    if analysis.regional.is_empty() {
        return "                    <tr><td colspan=\"5\" class=\"no-data\">No long-haul appearances</td></tr>".to_string();
    }

    analysis
        .regional
        .iter()
        .map(|burden| {
            let tier = tier_of_average(burden.total_away_miles, burden.appearances, &options.thresholds);
            format!(
                "                    <tr class=\"tier-{}\"><td>{}</td><td>{}</td><td>{:.0} mi</td><td>{:.0} mi</td><td>{}</td></tr>",
                tier,
                escape_html(&burden.team),
                burden.appearances,
                burden.total_away_miles,
                burden.avg_per_appearance(),
                burden_label(tier),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the static HTML report page
pub fn render_html(analysis: &Analysis, options: &RenderOptions) -> Result<String, ExportError> {
    let games = &analysis.annotation.games;

    let years: BTreeSet<u16> = games.iter().map(|g| g.matchup.year).collect();
    let year_values: Vec<String> = years.iter().rev().map(u16::to_string).collect();

    let mut rounds: Vec<&str> = games
        .iter()
        .map(|g| g.matchup.round.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    rounds.sort_by_key(|r| round_rank(r));

    let report = &analysis.report;
    let longest = analysis
        .tiers
        .longest_miles
        .map(|d| format!("{:.0}", d))
        .unwrap_or_else(|| "-".to_string());

    let html = TEMPLATE
        .replace("{{MIN_DISTANCE}}", &format!("{:.0}", options.min_distance))
        .replace("{{YEAR_SPAN}}", &year_span(&years))
        .replace("{{GREEN_MAX}}", &format!("{:.0}", options.thresholds.green_max))
        .replace("{{YELLOW_MAX}}", &format!("{:.0}", options.thresholds.yellow_max))
        .replace("{{YEAR_OPTIONS}}", &option_lines(year_values.iter().map(String::as_str)))
        .replace("{{ROUND_OPTIONS}}", &option_lines(rounds.into_iter()))
        .replace("{{TEAM_RUNS}}", &report.total_appearances.to_string())
        .replace("{{BURDEN_PCT}}", &format!("{:.1}", report.burden_percentage()))
        .replace("{{AVG_MILES}}", &format!("{:.0}", report.avg_miles_per_team()))
        .replace("{{LONGEST}}", &longest)
        .replace("{{WORST_CASE_ROWS}}", &worst_case_rows(analysis, options))
        .replace("{{REGIONAL_ROWS}}", &regional_rows(analysis, options))
        .replace("{{GENERATED_AT}}", &chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string())
        // Game data goes in last so its contents are never scanned for placeholders
        .replace("{{GAMES_JSON}}", &escape_script_json(&games_json(games)?));

    Ok(html)
}

/// Render the console turnaround report
pub fn render_text(analysis: &Analysis, options: &RenderOptions) -> String {
    let mut out = String::new();
    // Formatting into a String only fails if a Display impl does
    match write_report(&mut out, analysis, options) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

fn write_report(out: &mut String, analysis: &Analysis, options: &RenderOptions) -> fmt::Result {
    let report = &analysis.report;
    let rule = "-".repeat(40);

    writeln!(out, "TURNAROUND BURDEN ANALYSIS")?;
    writeln!(out, "{}", "=".repeat(80))?;

    writeln!(out, "\nSUMMARY STATISTICS\n{}", rule)?;
    writeln!(out, "Total team-playoff combinations with long-haul: {}", report.total_appearances)?;
    writeln!(out, "Teams facing 2+ long-haul games same playoff: {}", report.multi_game_count)?;
    writeln!(out, "Percentage with turnaround burden: {:.1}%", report.burden_percentage())?;
    writeln!(out, "Total long-haul miles (all teams): {:.0}", report.total_miles)?;
    writeln!(out, "Average long-haul miles per team-playoff: {:.1}", report.avg_miles_per_team())?;

    writeln!(out, "\nBY CLASSIFICATION\n{}", rule)?;
    for (division, stats) in report.division_rows() {
        if stats.teams == 0 {
            continue;
        }
        writeln!(
            out,
            "{}: {} teams, {} with 2+ games ({:.0}%), avg {:.0} mi",
            division,
            stats.teams,
            stats.multi,
            stats.multi_percentage(),
            stats.avg_miles()
        )?;
    }

    writeln!(out, "\nWORST TURNAROUND CASES (2+ long-haul games)\n{}", rule)?;
    for (i, case) in report.worst_cases.iter().take(options.top_n).enumerate() {
        writeln!(
            out,
            "\n{}. {} ({} {} {})",
            i + 1,
            case.team,
            case.year,
            case.sport.title(),
            case.division
        )?;
        writeln!(
            out,
            "   Total travel burden: {:.0} miles across {} long-haul games",
            case.total_miles, case.games
        )?;
        for g in &case.details {
            let side = if g.is_home { "HOME" } else { "AWAY" };
            writeln!(out, "   - {}: vs {} ({:.0} mi) [{}]", g.round, g.opponent, g.distance, side)?;
        }
    }

    writeln!(out, "\nYEAR-OVER-YEAR TRENDS\n{}", rule)?;
    for (year, stats) in &report.by_year {
        writeln!(
            out,
            "{}: {} teams affected, {} with 2+ games ({:.0}%), avg {:.0} mi/team",
            year,
            stats.teams,
            stats.multi,
            stats.multi_percentage(),
            stats.avg_miles()
        )?;
    }

    let totals = &report.home_away;
    writeln!(out, "\nHOME VS AWAY BURDEN\n{}", rule)?;
    writeln!(out, "Home teams hosting long-haul opponents: {} games", totals.home_games)?;
    writeln!(
        out,
        "Away teams traveling long distances: {} games, {:.0} total miles",
        totals.away_games, totals.away_miles
    )?;
    if totals.away_games > 0 {
        writeln!(out, "Average away travel per game: {:.0} miles", totals.avg_away_miles())?;
    }

    writeln!(out, "\nGEOGRAPHIC BURDEN - EASTERN OREGON TEAMS\n{}", rule)?;
    writeln!(out, "{:<20} | {:^19} | {:^16} | {:^15}", "Team", "Playoff Appearances", "Total Away Miles", "Avg per Playoff")?;
    writeln!(out, "{}", "-".repeat(75))?;
    for burden in &analysis.regional {
        writeln!(
            out,
            "{:<20} | {:^19} | {:^16.0} | {:^15.0}",
            burden.team,
            burden.appearances,
            burden.total_away_miles,
            burden.avg_per_appearance()
        )?;
    }

    let tiers = &analysis.tiers;
    writeln!(out, "\nDISTANCE TIERS\n{}", rule)?;
    writeln!(out, "  Green (up to {:.0} mi): {}", options.thresholds.green_max, tiers.green)?;
    writeln!(out, "  Yellow (up to {:.0} mi): {}", options.thresholds.yellow_max, tiers.yellow)?;
    writeln!(out, "  Red (over {:.0} mi): {}", options.thresholds.yellow_max, tiers.red)?;

    Ok(())
}
