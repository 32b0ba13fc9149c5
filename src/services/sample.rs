//! Built-in demo data set of long-haul playoff matchups, 2022-2025

use crate::models::{Division, Matchup, Sport};

use Division::*;
use Sport::*;

type SampleRow = (u16, Sport, Division, &'static str, &'static str, u32, &'static str, u32);

// (year, sport, division, round, team1, seed1, team2, seed2)
const SAMPLE_MATCHUPS: &[SampleRow] = &[
    // 2025 Baseball
    (2025, Baseball, SixA, "First Round", "Jesuit", 1, "South Medford", 16),
    (2025, Baseball, SixA, "Quarterfinals", "Sheldon", 4, "Clackamas", 5),
    (2025, Baseball, FiveA, "First Round", "Summit", 1, "Pendleton", 16),
    (2025, Baseball, FiveA, "First Round", "Crescent Valley", 2, "Pendleton", 15),
    (2025, Baseball, FiveA, "Quarterfinals", "La Salle Prep", 3, "Redmond", 14),
    (2025, Baseball, FourA, "First Round", "Marist Catholic", 1, "Ontario", 16),
    (2025, Baseball, FourA, "First Round", "Hidden Valley", 2, "La Grande", 15),
    (2025, Baseball, ThreeA, "First Round", "Rainier", 1, "Enterprise", 16),
    (2025, Baseball, TwoAOneA, "First Round", "Kennedy", 1, "Nyssa", 16),

    // 2025 Softball
    (2025, Softball, SixA, "First Round", "Sunset", 1, "Roseburg", 16),
    (2025, Softball, SixA, "Quarterfinals", "Clackamas", 4, "Grants Pass", 5),
    (2025, Softball, FiveA, "First Round", "Wilsonville", 1, "Ashland", 16),
    (2025, Softball, FiveA, "First Round", "Churchill", 2, "Pendleton", 15),
    (2025, Softball, FourA, "First Round", "Valley Catholic", 1, "Klamath Union", 16),

    // 2024 Baseball
    (2024, Baseball, SixA, "First Round", "Lincoln", 1, "Crater", 16),
    (2024, Baseball, SixA, "Quarterfinals", "Tualatin", 3, "South Medford", 6),
    (2024, Baseball, FiveA, "First Round", "Crescent Valley", 1, "Pendleton", 16),
    (2024, Baseball, FiveA, "First Round", "La Salle Prep", 2, "Redmond", 15),
    (2024, Baseball, FiveA, "Quarterfinals", "Churchill", 3, "Bend", 6),
    (2024, Baseball, FourA, "First Round", "Marist Catholic", 1, "Baker", 16),
    (2024, Baseball, FourA, "First Round", "Philomath", 2, "Ontario", 15),
    (2024, Baseball, ThreeA, "First Round", "Cascade Christian", 1, "Enterprise", 16),
    (2024, Baseball, TwoAOneA, "First Round", "Gaston", 1, "Nyssa", 16),

    // 2024 Softball
    (2024, Softball, SixA, "First Round", "Sheldon", 1, "Grants Pass", 16),
    (2024, Softball, SixA, "Quarterfinals", "Jesuit", 3, "Roseburg", 6),
    (2024, Softball, FiveA, "First Round", "Summit", 1, "Pendleton", 16),
    (2024, Softball, FiveA, "Quarterfinals", "Crescent Valley", 4, "Pendleton", 5),
    (2024, Softball, FourA, "First Round", "Valley Catholic", 1, "Klamath Union", 16),

    // 2023 Baseball
    (2023, Baseball, SixA, "First Round", "Clackamas", 1, "South Medford", 16),
    (2023, Baseball, SixA, "Quarterfinals", "Jesuit", 4, "Crater", 5),
    (2023, Baseball, FiveA, "First Round", "Churchill", 1, "Pendleton", 16),
    (2023, Baseball, FiveA, "First Round", "Summit", 2, "Pendleton", 15),
    (2023, Baseball, FiveA, "Quarterfinals", "Crescent Valley", 3, "Redmond", 6),
    (2023, Baseball, FourA, "First Round", "Philomath", 1, "Ontario", 16),
    (2023, Baseball, FourA, "First Round", "Marist Catholic", 2, "Baker", 15),
    (2023, Baseball, ThreeA, "First Round", "Dayton", 1, "La Grande", 16),
    (2023, Baseball, TwoAOneA, "First Round", "Vernonia", 1, "Nyssa", 16),

    // 2023 Softball
    (2023, Softball, SixA, "First Round", "Sunset", 1, "South Medford", 16),
    (2023, Softball, SixA, "Quarterfinals", "West Linn", 4, "Grants Pass", 5),
    (2023, Softball, FiveA, "First Round", "Crescent Valley", 1, "Pendleton", 16),
    (2023, Softball, FiveA, "First Round", "Churchill", 2, "Redmond", 15),
    (2023, Softball, FourA, "First Round", "Marist Catholic", 1, "Klamath Union", 16),

    // 2022 Baseball
    (2022, Baseball, SixA, "First Round", "Tualatin", 1, "Crater", 16),
    (2022, Baseball, SixA, "Quarterfinals", "Clackamas", 3, "South Medford", 6),
    (2022, Baseball, FiveA, "First Round", "Crescent Valley", 1, "Pendleton", 16),
    (2022, Baseball, FiveA, "First Round", "Summit", 2, "Pendleton", 15),
    (2022, Baseball, FiveA, "Quarterfinals", "Churchill", 4, "Redmond", 5),
    (2022, Baseball, FourA, "First Round", "Philomath", 1, "Baker", 16),
    (2022, Baseball, FourA, "First Round", "Marist Catholic", 2, "Ontario", 15),
    (2022, Baseball, ThreeA, "First Round", "Rainier", 1, "Enterprise", 16),
    (2022, Baseball, TwoAOneA, "First Round", "Kennedy", 1, "Nyssa", 16),

    // 2022 Softball
    (2022, Softball, SixA, "First Round", "Jesuit", 1, "Roseburg", 16),
    (2022, Softball, SixA, "Quarterfinals", "Sheldon", 3, "South Medford", 6),
    (2022, Softball, FiveA, "First Round", "Summit", 1, "Pendleton", 16),
    (2022, Softball, FiveA, "First Round", "Crescent Valley", 2, "Pendleton", 15),
    (2022, Softball, FourA, "First Round", "Valley Catholic", 1, "Klamath Union", 16),
];

/// Sample matchups with seeds
///
/// The better seed hosts. Only championship games are at neutral sites.
pub fn sample_matchups() -> Vec<Matchup> {
    SAMPLE_MATCHUPS
        .iter()
        .map(|&(year, sport, division, round, team1, seed1, team2, seed2)| {
            let host = if seed1 < seed2 { team1 } else { team2 };
            Matchup::new(year, sport, division, round, team1, team2)
                .with_seeds(Some(seed1), Some(seed2))
                .with_location(format!("{} HS", host), round == "Championship")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Annotator;

    #[test]
    fn test_sample_matchups() {
        let matchups = sample_matchups();

        assert_eq!(matchups.len(), SAMPLE_MATCHUPS.len());
        assert!(matchups.iter().all(|m| (2022..=2025).contains(&m.year)));
        assert!(matchups.iter().all(|m| !m.is_neutral_site));
        assert_eq!(matchups[0].location, "Jesuit HS");
    }

    #[test]
    fn test_every_sample_team_is_located() {
        let annotator = Annotator::default();

        for m in sample_matchups() {
            assert!(
                annotator.distance(&m.team1, &m.team2).is_some(),
                "{} vs {} could not be located",
                m.team1,
                m.team2
            );
        }
    }
}
