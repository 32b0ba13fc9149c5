//! Parser for bracket text pasted from the OSAA site
//!
//! The input is line oriented: a championship header sets the year,
//! division and sport; round labels set the current round; a line starting
//! with a date (`5/21`) begins a game whose two teams follow on the next
//! lines, possibly separated by score and innings notes.

use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;

use crate::models::{Division, Matchup, Sport};

const INNINGS_NOTES: &[&str] = &[
    "5 innings",
    "6 inn",
    "6 innings",
    "7 inn",
    "8 innings",
    "9 inn",
    "10 run rule",
    "5 inn.",
    "5 inn",
];

const MAX_TEAM_NAME_CHARS: usize = 50;

/// Line-oriented bracket text parser
#[derive(Debug, Clone)]
pub struct BracketTextParser {
    header: Regex,
    round: Regex,
    date: Regex,
    location: Regex,
    numeric: Regex,
    innings: Regex,
    score_pair: Regex,
    digits_and_spaces: Regex,
    round_prefix: Regex,
    trailing_score: Regex,
}

/// Parsed matchups plus a count per "year sport division" bracket
#[derive(Debug, Default)]
pub struct ParsedBrackets {
    pub matchups: Vec<Matchup>,
    pub counts: BTreeMap<String, usize>,
}

#[derive(Debug, Default)]
struct Context {
    year: Option<u16>,
    sport: Option<Sport>,
    division: Option<Division>,
    round: Option<String>,
}

impl BracketTextParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            header: Regex::new(
                r"^(\d{4})\s+OSAA.*\s+(2A/1A|3A|4A|5A|6A)\s+(Baseball|Softball)\s+State\s+Championship",
            )?,
            round: RegexBuilder::new(
                r"^(Round\s+\d+|First\s+Round|Second\s+Round|Quarterfinals?|Semifinals?|Finals?|Championship|Round\s+of\s+\d+)",
            )
            .case_insensitive(true)
            .build()?,
            date: Regex::new(r"^\d{1,2}/\d{1,2}")?,
            location: Regex::new(r"@\s*(.+)$")?,
            numeric: Regex::new(r"^\d+$")?,
            innings: RegexBuilder::new(r"^\d+\s*(inn|innings?)?\s*$")
                .case_insensitive(true)
                .build()?,
            score_pair: Regex::new(r"^\d+\s+\d+$")?,
            digits_and_spaces: Regex::new(r"^[\d\s]+$")?,
            round_prefix: RegexBuilder::new(r"^(Round|Quarterfinal|Semifinal|Final|Championship)")
                .case_insensitive(true)
                .build()?,
            trailing_score: Regex::new(r"\s+\d+-\d+\s*$")?,
        })
    }

    /// Normalize a round label to the names used throughout the reports
    pub fn normalize_round(label: &str) -> String {
        let lower = label.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();

        match words.as_slice() {
            ["round", "1"] | ["first", "round"] => "First Round".to_string(),
            ["round", "2"] | ["second", "round"] => "Second Round".to_string(),
            ["round", "of", _] => label.split_whitespace().collect::<Vec<_>>().join(" "),
            _ if lower.starts_with("quarterf") => "Quarterfinals".to_string(),
            _ if lower.starts_with("semif") => "Semifinals".to_string(),
            _ if lower.starts_with("final") || lower.starts_with("championship") => {
                "Championship".to_string()
            }
            _ => label.trim().to_string(),
        }
    }

    fn is_innings_note(&self, line: &str) -> bool {
        self.innings.is_match(line) || INNINGS_NOTES.contains(&line)
    }

    /// Clean a candidate team line, or `None` if it is not a team name
    pub fn clean_team_name(&self, raw: &str) -> Option<String> {
        let name = raw.trim();

        if name.is_empty()
            || self.date.is_match(name)
            || self.digits_and_spaces.is_match(name)
            || self.is_innings_note(name)
            || self.round_prefix.is_match(name)
        {
            return None;
        }

        let mut name = self.trailing_score.replace(name, "").into_owned();

        if name.chars().count() > MAX_TEAM_NAME_CHARS {
            let words: Vec<&str> = name.split_whitespace().collect();
            if words.len() >= 2 {
                name = words.iter().take(3).copied().collect::<Vec<_>>().join(" ");
            }
        }

        (name.chars().count() > 2).then_some(name)
    }

    /// Parse a whole bracket text dump
    pub fn parse(&self, text: &str) -> ParsedBrackets {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let mut ctx = Context::default();
        let mut parsed = ParsedBrackets::default();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if let Some(caps) = self.header.captures(line) {
                ctx.year = caps[1].parse().ok();
                ctx.division = caps[2].parse().ok();
                ctx.sport = caps[3].parse().ok();
                i += 1;
                continue;
            }

            if let Some(caps) = self.round.captures(line) {
                ctx.round = Some(Self::normalize_round(&caps[1]));
                i += 1;
                continue;
            }

            let (Some(year), Some(sport), Some(division)) = (ctx.year, ctx.sport, ctx.division) else {
                i += 1;
                continue;
            };

            if !self.date.is_match(line) {
                i += 1;
                continue;
            }

            let location = self
                .location
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
                .unwrap_or_default();

            i += 1;
            let (team1, next) = self.next_line(&lines, i, |l| self.numeric.is_match(l));
            i = next;
            let (team2, next) = self.next_line(&lines, i, |l| self.is_innings_note(l));
            i = next;

            if let Some(matchup) = self.build_matchup(&ctx, year, sport, division, team1, team2, location) {
                let key = format!("{} {} {}", year, sport, division);
                *parsed.counts.entry(key).or_insert(0) += 1;
                parsed.matchups.push(matchup);
            }
        }

        tracing::info!("Parsed {} matchups from bracket text", parsed.matchups.len());
        parsed
    }

    /// Take the line at `i`, skipping non-empty lines matching `skip`.
    /// Returns the line (if any) and the index after it.
    fn next_line<'a>(
        &self,
        lines: &[&'a str],
        mut i: usize,
        skip: impl Fn(&str) -> bool,
    ) -> (Option<&'a str>, usize) {
        while i < lines.len() {
            let line = lines[i];
            if line.is_empty() || !skip(line) {
                return (Some(line), i + 1);
            }
            i += 1;
        }
        (None, i)
    }

    #[allow(clippy::too_many_arguments)]
    fn build_matchup(
        &self,
        ctx: &Context,
        year: u16,
        sport: Sport,
        division: Division,
        team1: Option<&str>,
        team2: Option<&str>,
        location: String,
    ) -> Option<Matchup> {
        let (team1, team2) = (team1?, team2?);

        if team1.chars().count() <= 2 || team2.chars().count() <= 2 {
            return None;
        }
        if self.score_pair.is_match(team1) || self.score_pair.is_match(team2) {
            return None;
        }

        let team1 = self.clean_team_name(team1)?;
        let team2 = self.clean_team_name(team2)?;
        let location = if location.is_empty() {
            format!("{} HS", team1)
        } else {
            location
        };
        let round = ctx.round.clone().unwrap_or_else(|| "Unknown".to_string());

        Some(Matchup::new(year, sport, division, round, team1, team2).with_location(location, false))
    }
}
