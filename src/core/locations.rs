use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::School;

/// Separator between member schools in a co-op team name
pub const COOP_SEPARATOR: &str = " / ";

/// Built-in Oregon school locations: (name, city, latitude, longitude)
const OREGON_SCHOOLS: &[(&str, &str, f64, f64)] = &[
    // Portland Metro
    ("Lincoln", "Portland", 45.5152, -122.6784),
    ("Grant", "Portland", 45.5432, -122.6306),
    ("Benson", "Portland", 45.5280, -122.6558),
    ("Cleveland", "Portland", 45.4970, -122.6306),
    ("Franklin", "Portland", 45.4849, -122.6127),
    ("Jefferson", "Portland", 45.5470, -122.6700),
    ("Roosevelt", "Portland", 45.5861, -122.7516),
    ("Wilson", "Portland", 45.4685, -122.7106),
    ("Madison", "Portland", 45.5306, -122.5693),
    ("Westview", "Portland", 45.5436, -122.8477),
    ("Sunset", "Beaverton", 45.5118, -122.8230),
    ("Southridge", "Beaverton", 45.4635, -122.8158),
    ("Mountainside", "Beaverton", 45.4461, -122.8358),
    ("Jesuit", "Beaverton", 45.4914, -122.7837),
    ("Tigard", "Tigard", 45.4312, -122.7714),
    ("Tualatin", "Tualatin", 45.3838, -122.7637),
    ("Lake Oswego", "Lake Oswego", 45.4107, -122.6706),
    ("Lakeridge", "Lake Oswego", 45.3941, -122.6872),
    ("West Linn", "West Linn", 45.3651, -122.6120),
    ("Clackamas", "Clackamas", 45.4107, -122.5706),
    ("Oregon City", "Oregon City", 45.3573, -122.6068),
    ("Central Catholic", "Portland", 45.5306, -122.6206),
    ("Barlow", "Gresham", 45.4881, -122.4302),
    ("Gresham", "Gresham", 45.5023, -122.4306),
    ("David Douglas", "Portland", 45.4906, -122.5106),
    ("Reynolds", "Troutdale", 45.5387, -122.3868),
    ("Centennial", "Gresham", 45.5006, -122.4606),
    ("Parkrose", "Portland", 45.5506, -122.5306),
    ("Sherwood", "Sherwood", 45.3573, -122.8406),
    ("Newberg", "Newberg", 45.3007, -122.9730),
    ("McMinnville", "McMinnville", 45.2101, -123.1868),
    ("Forest Grove", "Forest Grove", 45.5190, -123.1106),
    ("Glencoe", "Hillsboro", 45.5290, -122.9706),
    ("Century", "Hillsboro", 45.5190, -122.9406),
    ("Liberty", "Hillsboro", 45.5390, -123.0106),
    ("Hillsboro", "Hillsboro", 45.5229, -122.9898),
    ("Wilsonville", "Wilsonville", 45.3001, -122.7737),
    ("Canby", "Canby", 45.2629, -122.6920),
    ("St. Helens", "St. Helens", 45.8640, -122.8065),
    ("Scappoose", "Scappoose", 45.7540, -122.8765),

    // Salem Area
    ("Sprague", "Salem", 44.9429, -123.0351),
    ("South Salem", "Salem", 44.9129, -123.0351),
    ("West Salem", "Salem", 44.9529, -123.0651),
    ("McKay", "Salem", 44.9829, -123.0151),
    ("McNary", "Keizer", 45.0029, -123.0251),
    ("North Salem", "Salem", 44.9629, -123.0251),
    ("Central", "Independence", 44.8512, -123.1868),
    ("Dallas", "Dallas", 44.9193, -123.3151),
    ("Silverton", "Silverton", 45.0051, -122.7830),
    ("Woodburn", "Woodburn", 45.1437, -122.8562),
    ("Kennedy", "Mt. Angel", 45.0701, -122.8006),

    // Eugene Area
    ("Sheldon", "Eugene", 44.0929, -123.0851),
    ("South Eugene", "Eugene", 44.0329, -123.0851),
    ("Churchill", "Eugene", 44.0229, -123.1251),
    ("North Eugene", "Eugene", 44.0729, -123.1051),
    ("Marist Catholic", "Eugene", 44.0129, -123.0651),
    ("Willamette", "Eugene", 44.0529, -123.0651),
    ("Springfield", "Springfield", 44.0462, -122.9841),
    ("Thurston", "Springfield", 44.0462, -122.9241),

    // Corvallis/Albany Area
    ("Corvallis", "Corvallis", 44.5646, -123.2620),
    ("Crescent Valley", "Corvallis", 44.5846, -123.2420),
    ("South Albany", "Albany", 44.6101, -123.1051),
    ("West Albany", "Albany", 44.6301, -123.1251),
    ("Lebanon", "Lebanon", 44.5368, -122.9065),
    ("Philomath", "Philomath", 44.5401, -123.3651),

    // Bend/Central Oregon
    ("Bend", "Bend", 44.0582, -121.3153),
    ("Summit", "Bend", 44.0882, -121.3053),
    ("Mountain View", "Bend", 44.0282, -121.3253),
    ("Caldera", "Bend", 44.0382, -121.3453),
    ("Ridgeview", "Redmond", 44.2726, -121.1740),
    ("Redmond", "Redmond", 44.2726, -121.1740),
    ("Sisters", "Sisters", 44.2901, -121.5490),
    ("La Pine", "La Pine", 43.6701, -121.5040),
    ("Madras", "Madras", 44.6326, -121.1293),
    ("Crook County", "Prineville", 44.2993, -120.8340),

    // Southern Oregon
    ("South Medford", "Medford", 42.3165, -122.8756),
    ("North Medford", "Medford", 42.3465, -122.8556),
    ("Crater", "Central Point", 42.3757, -122.9062),
    ("Grants Pass", "Grants Pass", 42.4390, -123.3284),
    ("Roseburg", "Roseburg", 43.2165, -123.3417),
    ("Ashland", "Ashland", 42.1946, -122.7095),
    ("Phoenix", "Phoenix", 42.2746, -122.8195),
    ("Hidden Valley", "Grants Pass", 42.4090, -123.3584),
    ("North Valley", "Merlin", 42.5190, -123.4084),
    ("St. Mary's, Medford", "Medford", 42.3265, -122.8656),
    ("Klamath Union", "Klamath Falls", 42.2249, -121.7817),
    ("Henley", "Klamath Falls", 42.1649, -121.7317),
    ("Mazama", "Klamath Falls", 42.2049, -121.8017),

    // Coast
    ("Marshfield", "Coos Bay", 43.3665, -124.2179),
    ("North Bend", "North Bend", 43.4065, -124.2240),
    ("Siuslaw", "Florence", 43.9826, -124.0990),
    ("Brookings-Harbor", "Brookings", 42.0526, -124.2840),
    ("Seaside", "Seaside", 45.9932, -123.9226),
    ("Astoria", "Astoria", 46.1879, -123.8313),
    ("Tillamook", "Tillamook", 45.4562, -123.8426),
    ("Newport", "Newport", 44.6368, -124.0534),
    ("Taft", "Lincoln City", 44.9568, -124.0134),

    // Eastern Oregon
    ("Pendleton", "Pendleton", 45.6721, -118.7886),
    ("La Grande", "La Grande", 45.3246, -118.0877),
    ("Baker", "Baker City", 44.7749, -117.8344),
    ("Ontario", "Ontario", 44.0265, -116.9629),
    ("Vale", "Vale", 43.9818, -117.2384),
    ("Nyssa", "Nyssa", 43.8765, -116.9929),
    ("The Dalles", "The Dalles", 45.5946, -121.1787),
    ("Hood River Valley", "Hood River", 45.7101, -121.5140),
    ("Enterprise", "Enterprise", 45.4265, -117.2790),
    ("Irrigon", "Irrigon", 45.8965, -119.4929),
    ("Weston-McEwen/Griswold", "Athena", 45.8165, -118.4890),

    // Central Valley and small schools
    ("Cascade", "Turner", 44.8462, -122.9506),
    ("Burns", "Burns", 43.5865, -119.0540),
    ("Yamhill-Carlton", "Yamhill", 45.3418, -123.1868),
    ("Santiam Christian", "Adair Village", 44.6701, -123.2251),
    ("Cascade Christian", "Medford", 42.3265, -122.8756),
    ("South Umpqua", "Myrtle Creek", 42.9718, -123.2934),
    ("Gaston", "Gaston", 45.4340, -123.2568),
    ("Knappa", "Knappa", 46.1823, -123.5940),
    ("Joseph", "Joseph", 45.3540, -117.2295),
    ("Crane", "Crane", 43.4118, -118.5868),
    ("Grant Union", "John Day", 44.4165, -118.9529),
    ("Powder Valley", "North Powder", 45.0318, -117.9340),
    ("Dayton", "Dayton", 45.2201, -123.0768),
    ("Rainier", "Rainier", 46.0890, -122.9365),
    ("Vernonia", "Vernonia", 45.8590, -123.1929),
    ("Bandon", "Bandon", 43.1190, -124.4087),

    // Private Schools
    ("Oregon Episcopal", "Portland", 45.4706, -122.7306),
    ("Catlin Gabel", "Portland", 45.4806, -122.7806),
    ("Valley Catholic", "Beaverton", 45.4614, -122.8058),
    ("La Salle Prep", "Milwaukie", 45.4407, -122.6306),
    ("De La Salle North Catholic", "Portland", 45.5706, -122.6806),

    // 2024-2025 brackets
    ("Banks", "Banks", 45.6190, -123.1129),
    ("Blanchet Catholic", "Salem", 44.9429, -123.0151),
    ("Clatskanie", "Clatskanie", 46.1040, -123.2065),
    ("Cottage Grove", "Cottage Grove", 43.7973, -123.0596),
    ("Creswell", "Creswell", 43.9173, -123.0251),
    ("Douglas", "Winston", 43.1218, -123.4168),
    ("Eagle Point", "Eagle Point", 42.4721, -122.8029),
    ("Echo", "Echo", 45.7440, -119.1929),
    ("Elgin", "Elgin", 45.5665, -117.9190),
    ("Estacada", "Estacada", 45.2901, -122.3351),
    ("Gervais", "Gervais", 45.1101, -122.8968),
    ("Glendale", "Glendale", 42.7365, -123.4234),
    ("Harrisburg", "Harrisburg", 44.2740, -123.1696),
    ("Heppner", "Heppner", 45.3540, -119.5565),
    ("Illinois Valley", "Cave Junction", 42.1626, -123.6484),
    ("Junction City", "Junction City", 44.2190, -123.2051),
    ("Lakeview", "Lakeview", 42.1890, -120.3465),
    ("Lost River", "Merrill", 42.0290, -121.6017),
    ("Lowell", "Lowell", 43.9173, -122.7851),
    ("McLoughlin", "Milton-Freewater", 45.9340, -118.3890),
    ("Myrtle Point", "Myrtle Point", 43.0665, -124.1379),
    ("North Douglas", "Drain", 43.6618, -123.3168),
    ("Perrydale", "Perrydale", 44.9690, -123.2268),
    ("Pleasant Hill", "Pleasant Hill", 43.9573, -122.9551),
    ("Powers", "Powers", 42.8765, -124.0640),
    ("Salem Academy", "Salem", 44.9429, -123.0351),
    ("Sandy", "Sandy", 45.3973, -122.2612),
    ("Santiam", "Mill City", 44.7540, -122.4751),
    ("Scio", "Scio", 44.7390, -122.8451),
    ("Stayton", "Stayton", 44.8012, -122.7930),
    ("Sweet Home", "Sweet Home", 44.3973, -122.7351),
    ("Toledo", "Toledo", 44.6212, -123.9365),
    ("Union", "Union", 45.2065, -117.8640),
    ("Weston-McEwen", "Athena", 45.8165, -118.4890),
    ("Willamina", "Willamina", 45.0790, -123.4868),
    ("Amity", "Amity", 45.1140, -123.2068),
    ("Culver", "Culver", 44.5290, -121.2140),
    ("Elmira", "Elmira", 44.0873, -123.3951),
    ("Glide", "Glide", 43.3018, -123.1017),
    ("Monroe", "Monroe", 44.3190, -123.2951),
    ("Nelson", "Happy Valley", 45.4407, -122.5106),
    ("Oakland", "Oakland", 43.4218, -123.3051),
    ("Oakridge", "Oakridge", 43.7473, -122.4651),
    ("Pilot Rock", "Pilot Rock", 45.4840, -118.8390),
    ("Reedsport", "Reedsport", 43.7023, -124.0965),
    ("Coquille", "Coquille", 43.1773, -124.1879),
    ("Corbett", "Corbett", 45.5140, -122.2612),
    ("Days Creek", "Days Creek", 42.9618, -123.1434),
    ("Neah-Kah-Nie", "Rockaway Beach", 45.6132, -123.9426),
    ("Nestucca", "Cloverdale", 45.2101, -123.8826),
    ("Putnam", "Milwaukie", 45.4307, -122.6206),
    ("Rogue River", "Rogue River", 42.4390, -123.1718),
    ("Warrenton", "Warrenton", 46.1679, -123.9226),
    ("Country Christian", "Molalla", 45.1501, -122.5768),
    ("Gladstone", "Gladstone", 45.3807, -122.5906),
    ("Horizon Christian, Tualatin", "Tualatin", 45.3838, -122.7637),
    ("Ida B. Wells", "Portland", 45.4906, -122.6906),
    ("North Marion", "Aurora", 45.2301, -122.7568),
    ("Portland Christian", "Portland", 45.4806, -122.5506),
    ("Regis", "Stayton", 44.8012, -122.7930),
    ("St. Paul", "St. Paul", 45.2101, -122.9768),
    ("Umpqua Valley Christian", "Roseburg", 43.2265, -123.3517),
    ("Molalla", "Molalla", 45.1501, -122.5768),
    ("Crosspoint Christian", "Oregon City", 45.3573, -122.6068),
    ("Aloha", "Aloha", 45.4918, -122.8706),

    // 2014-2019 brackets
    ("Beaverton", "Beaverton", 45.4871, -122.8037),
    ("Bonanza", "Bonanza", 42.2012, -121.4073),
    ("Butte Falls", "Butte Falls", 42.5437, -122.5678),
    ("Central Linn", "Halsey", 44.3879, -123.1062),
    ("Colton", "Colton", 45.1701, -122.4312),
    ("Gold Beach", "Gold Beach", 42.4073, -124.4234),
    ("Hermiston", "Hermiston", 45.8401, -119.2895),
    ("Riddle", "Riddle", 42.9493, -123.3634),
    ("Sutherlin", "Sutherlin", 43.3901, -123.3123),
    ("Waldport", "Waldport", 44.4268, -124.0668),
    ("Western Mennonite", "Salem", 44.9429, -123.0351),
    ("Dufur", "Dufur", 45.4565, -121.1240),
    ("Hosanna Christian", "Klamath Falls", 42.2249, -121.7817),
    ("Siletz Valley", "Siletz", 44.7212, -123.9212),
    ("Stanfield", "Stanfield", 45.7779, -119.2151),
    ("Arlington", "Arlington", 45.7212, -120.1984),
    ("Sherman", "Moro", 45.4840, -120.7340),
    ("Riverside", "Boardman", 45.8390, -119.7006),
    ("Crow", "Crow", 43.9568, -123.4051),
    ("Prospect", "Prospect", 42.7512, -122.4868),
    ("Cove", "Cove", 45.3001, -117.8140),
    ("South Wasco", "Maupin", 45.1765, -121.0840),
    ("Eddyville", "Eddyville", 44.6168, -123.8068),
    ("Crater Lake", "Chiloquin", 42.5790, -121.8617),
    ("Nixyaawii", "Pendleton", 45.6721, -118.7886),
    ("Yoncalla", "Yoncalla", 43.5965, -123.2817),
    ("Elkton", "Elkton", 43.6318, -123.5534),
    ("Triangle Lake", "Blachly", 44.0868, -123.5851),
    ("Condon", "Condon", 45.2337, -120.1851),
    ("Prairie City", "Prairie City", 44.4590, -118.7068),
    ("Wallowa", "Wallowa", 45.5712, -117.5290),
    ("Ione", "Ione", 45.4965, -119.8268),
    ("Milwaukie", "Milwaukie", 45.4451, -122.6306),
    ("Faith Bible", "Hillsboro", 45.5229, -122.9898),];

static BUILTIN: LazyLock<HashMap<String, School>> = LazyLock::new(|| {
    OREGON_SCHOOLS
        .iter()
        .map(|&(name, city, lat, lon)| (name.to_string(), School::new(name, city, lat, lon)))
        .collect()
});

/// Primary (first listed) school of a co-op team name
///
/// "Grant Union / Prairie City" -> "Grant Union". Names without the
/// separator are returned unchanged.
pub fn primary_school(name: &str) -> &str {
    match name.split_once(COOP_SEPARATOR) {
        Some((first, _)) => first.trim(),
        None => name,
    }
}

/// School location lookup
///
/// Backed by the built-in table, optionally layered with supplementary
/// entries (e.g. previously geocoded names). Lookups are exact and
/// case-sensitive; co-op names fall back to their primary school.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    supplement: HashMap<String, School>,
}

impl LocationTable {
    /// Table with only the built-in schools
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with extra entries consulted after the built-in ones
    pub fn with_supplement(supplement: HashMap<String, School>) -> Self {
        Self { supplement }
    }

    /// Look up a school by team name
    pub fn lookup(&self, name: &str) -> Option<&School> {
        let primary = primary_school(name);

        BUILTIN
            .get(name)
            .or_else(|| BUILTIN.get(primary))
            .or_else(|| self.supplement.get(name))
            .or_else(|| self.supplement.get(primary))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of built-in schools
    pub fn builtin_len() -> usize {
        BUILTIN.len()
    }

    pub fn supplement_len(&self) -> usize {
        self.supplement.len()
    }
}
