use regex::Regex;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;

use crate::core::LocationTable;
use crate::models::{Division, Matchup, Sport};

/// Location keywords that mark a neutral championship venue
const NEUTRAL_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "civic",
    "stadium",
    "state",
    "volcanoes",
    "pk park",
    "jane sanders",
    "hillsboro hops",
];

/// Errors that can occur when scraping OSAA brackets
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),
}

/// Compiled class and text patterns for bracket pages
#[derive(Debug, Clone)]
pub struct BracketPatterns {
    game: Regex,
    team: Regex,
    score: Regex,
    round: Regex,
    location: Regex,
    table: Regex,
    versus: Regex,
    score_text: Regex,
    numeric: Regex,
    leading_seed: Regex,
    trailing_seed: Regex,
}

impl BracketPatterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            game: Regex::new(r"game|matchup|bracket-game")?,
            team: Regex::new(r"team|school|participant")?,
            score: Regex::new(r"score|result")?,
            round: Regex::new(r"round|stage")?,
            location: Regex::new(r"location|venue|site")?,
            table: Regex::new(r"bracket|schedule|playoff")?,
            versus: Regex::new(r"(?i)\s+(?:vs?\.?|@)\s+")?,
            score_text: Regex::new(r"^\d+-\d+$")?,
            numeric: Regex::new(r"^\d+$")?,
            leading_seed: Regex::new(r"^[#(\[]?(\d+)[)\].]?\s*(.+)$")?,
            trailing_seed: Regex::new(r"^(.+?)\s*[#(\[]?(\d+)[)\]]?$")?,
        })
    }

    /// Split "#1 Lincoln", "(1) Lincoln", "1. Lincoln" or "Lincoln (1)" into name and seed
    pub fn parse_team_seed(&self, text: &str) -> (String, Option<u32>) {
        let text = text.trim();

        if let Some(caps) = self.leading_seed.captures(text) {
            if let Ok(seed) = caps[1].parse() {
                return (caps[2].trim().to_string(), Some(seed));
            }
        }

        if let Some(caps) = self.trailing_seed.captures(text) {
            if let Ok(seed) = caps[2].parse() {
                return (caps[1].trim().to_string(), Some(seed));
            }
        }

        (text.to_string(), None)
    }
}

/// Whether a game location looks like a neutral site
///
/// An empty location is never neutral. Known venue keywords always are.
/// A location naming either team or its home city is a home game.
pub fn is_neutral_site(location: &str, team1: &str, team2: &str, locations: &LocationTable) -> bool {
    if location.is_empty() {
        return false;
    }

    let location = location.to_lowercase();

    if NEUTRAL_KEYWORDS.iter().any(|k| location.contains(k)) {
        return true;
    }

    for team in [team1, team2] {
        if location.contains(&team.to_lowercase()) {
            return false;
        }
        if let Some(school) = locations.lookup(team) {
            if location.contains(&school.city.to_lowercase()) {
                return false;
            }
        }
    }

    true
}

/// Bracket page URL for one sport, year and division
pub fn bracket_url(base_url: &str, sport: Sport, year: u16, division: Division) -> String {
    format!(
        "{}/activities/{}/brackets/{}/{}",
        base_url.trim_end_matches('/'),
        sport.code(),
        year,
        division.url_slug()
    )
}

/// Text content with each fragment trimmed and joined
fn stripped_text(el: ElementRef) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

fn has_class(el: &ElementRef, pattern: &Regex) -> bool {
    el.value().classes().any(|class| pattern.is_match(class))
}

/// Descendants (excluding `el`) with a class matching `pattern`, in document order
fn find_all<'a>(el: ElementRef<'a>, pattern: &Regex) -> Vec<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|child| has_class(child, pattern))
        .collect()
}

fn find_first<'a>(el: ElementRef<'a>, pattern: &Regex) -> Option<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|child| has_class(child, pattern))
}

/// HTML bracket page parser
#[derive(Debug, Clone)]
pub struct BracketPageParser {
    patterns: BracketPatterns,
    locations: LocationTable,
    any: Selector,
    tables: Selector,
    rows: Selector,
    cells: Selector,
}

impl BracketPageParser {
    pub fn new(locations: LocationTable) -> Result<Self, ScrapeError> {
        let selector = |css: &str| Selector::parse(css).map_err(|e| ScrapeError::Selector(e.to_string()));

        Ok(Self {
            patterns: BracketPatterns::new()?,
            locations,
            any: selector("*")?,
            tables: selector("table")?,
            rows: selector("tr")?,
            cells: selector("td, th")?,
        })
    }

    pub fn patterns(&self) -> &BracketPatterns {
        &self.patterns
    }

    /// Extract all games from a bracket page
    ///
    /// Game containers are read first, then rows of bracket tables.
    pub fn parse(&self, html: &str, year: u16, sport: Sport, division: Division) -> Vec<Matchup> {
        let document = Html::parse_document(html);
        let mut games = Vec::new();

        for el in document.select(&self.any) {
            if has_class(&el, &self.patterns.game) {
                if let Some(game) = self.parse_game_element(el, year, sport, division) {
                    games.push(game);
                }
            }
        }

        for table in document.select(&self.tables) {
            if !has_class(&table, &self.patterns.table) {
                continue;
            }
            for row in table.select(&self.rows) {
                if let Some(game) = self.parse_table_row(row, year, sport, division) {
                    games.push(game);
                }
            }
        }

        games
    }

    fn parse_game_element(&self, el: ElementRef, year: u16, sport: Sport, division: Division) -> Option<Matchup> {
        let p = &self.patterns;
        let teams = find_all(el, &p.team);
        if teams.len() < 2 {
            return None;
        }

        let (team1, seed1) = p.parse_team_seed(&stripped_text(teams[0]));
        let (team2, seed2) = p.parse_team_seed(&stripped_text(teams[1]));

        let score = find_first(el, &p.score).map(stripped_text);
        let round = find_first(el, &p.round)
            .map(stripped_text)
            .unwrap_or_else(|| "Unknown Round".to_string());
        let location = find_first(el, &p.location).map(stripped_text).unwrap_or_default();
        let neutral = is_neutral_site(&location, &team1, &team2, &self.locations);

        let mut matchup = Matchup::new(year, sport, division, round, team1, team2)
            .with_seeds(seed1, seed2)
            .with_location(location, neutral);
        matchup.score = score;
        Some(matchup)
    }

    fn parse_table_row(&self, row: ElementRef, year: u16, sport: Sport, division: Division) -> Option<Matchup> {
        let p = &self.patterns;
        let cells: Vec<String> = row.select(&self.cells).map(stripped_text).collect();
        if cells.len() < 2 {
            return None;
        }

        let mut teams: Vec<String> = Vec::new();
        let mut score = None;
        let mut round = "Playoff".to_string();

        for text in &cells {
            let lower = text.to_lowercase();
            if lower.contains(" vs ") || lower.contains(" v ") {
                teams.extend(
                    p.versus
                        .split(text)
                        .map(str::trim)
                        .filter(|part| !part.is_empty())
                        .map(str::to_string),
                );
            } else if p.score_text.is_match(text) {
                score = Some(text.clone());
            } else if lower.contains("round") || lower.contains("final") {
                round = text.clone();
            }
        }

        if teams.len() < 2 {
            teams.extend(
                cells
                    .iter()
                    .filter(|text| text.chars().count() > 2 && !p.numeric.is_match(text))
                    .cloned(),
            );
        }

        if teams.len() < 2 {
            return None;
        }

        let (team1, seed1) = p.parse_team_seed(&teams[0]);
        let (team2, seed2) = p.parse_team_seed(&teams[1]);

        let mut matchup = Matchup::new(year, sport, division, round, team1, team2).with_seeds(seed1, seed2);
        matchup.score = score;
        Some(matchup)
    }
}

/// OSAA bracket scraper
///
/// Fetches one page per sport, year and division, strictly one at a time
/// with a fixed delay between requests.
pub struct OsaaScraper {
    base_url: String,
    client: Client,
    parser: BracketPageParser,
    delay: Duration,
}

impl OsaaScraper {
    pub fn new(
        base_url: String,
        user_agent: &str,
        timeout: Duration,
        delay: Duration,
        locations: LocationTable,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder().timeout(timeout).user_agent(user_agent).build()?;

        Ok(Self {
            base_url,
            client,
            parser: BracketPageParser::new(locations)?,
            delay,
        })
    }

    /// Fetch and parse a single bracket page
    pub async fn scrape_bracket(
        &self,
        sport: Sport,
        year: u16,
        division: Division,
    ) -> Result<Vec<Matchup>, ScrapeError> {
        let url = bracket_url(&self.base_url, sport, year, division);
        tracing::debug!("Fetching bracket from: {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ScrapeError::Status {
                status: response.status(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(self.parser.parse(&body, year, sport, division))
    }

    /// Scrape every sport, year and division combination
    ///
    /// Failed pages are logged and contribute no games.
    pub async fn scrape_all(&self, years: &[u16], divisions: &[Division]) -> Vec<Matchup> {
        let mut all_games = Vec::new();

        for sport in Sport::ALL {
            for &year in years {
                for &division in divisions {
                    tracing::info!("Scraping {} {} {}", sport, division, year);

                    match self.scrape_bracket(sport, year, division).await {
                        Ok(games) => {
                            tracing::info!("Found {} games", games.len());
                            all_games.extend(games);
                        }
                        Err(e) => tracing::warn!("Skipping {} {} {}: {}", sport, division, year, e),
                    }

                    tokio::time::sleep(self.delay).await;
                }
            }
        }

        all_games
    }
}
