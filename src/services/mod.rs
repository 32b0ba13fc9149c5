// Service exports
pub mod bracket_scraper;
pub mod bracket_text;
pub mod export;
pub mod geocode;
pub mod loader;
pub mod report;
pub mod sample;

pub use bracket_scraper::{is_neutral_site, BracketPageParser, OsaaScraper, ScrapeError};
pub use bracket_text::{BracketTextParser, ParsedBrackets};
pub use export::{export_csv, export_summary, games_json, write_text, ExportError};
pub use geocode::{cache_to_supplement, load_cache, Geocoder, GeocodeError};
pub use loader::{load_matchups, parse_matchups, save_matchups, LoadError};
pub use report::{escape_html, render_html, render_text, RenderOptions};
pub use sample::sample_matchups;
