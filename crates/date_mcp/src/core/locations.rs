use crate::config::Config;
use crate::core::models::LocationEntry;

/// Built-in locations, seeded before any configured overrides
const DEFAULT_LOCATIONS: &[(&str, &str)] = &[
    ("New York", "America/New_York"),
    ("Los Angeles", "America/Los_Angeles"),
    ("Chicago", "America/Chicago"),
    ("Denver", "America/Denver"),
    ("Toronto", "America/Toronto"),
    ("Vancouver", "America/Vancouver"),
    ("Mexico City", "America/Mexico_City"),
    ("Sao Paulo", "America/Sao_Paulo"),
    ("Buenos Aires", "America/Argentina/Buenos_Aires"),
    ("Honolulu", "Pacific/Honolulu"),
    ("London", "Europe/London"),
    ("Paris", "Europe/Paris"),
    ("Berlin", "Europe/Berlin"),
    ("Madrid", "Europe/Madrid"),
    ("Rome", "Europe/Rome"),
    ("Amsterdam", "Europe/Amsterdam"),
    ("Stockholm", "Europe/Stockholm"),
    ("Moscow", "Europe/Moscow"),
    ("Istanbul", "Europe/Istanbul"),
    ("Cairo", "Africa/Cairo"),
    ("Lagos", "Africa/Lagos"),
    ("Johannesburg", "Africa/Johannesburg"),
    ("Dubai", "Asia/Dubai"),
    ("Mumbai", "Asia/Kolkata"),
    ("Bangkok", "Asia/Bangkok"),
    ("Singapore", "Asia/Singapore"),
    ("Hong Kong", "Asia/Hong_Kong"),
    ("Shanghai", "Asia/Shanghai"),
    ("Seoul", "Asia/Seoul"),
    ("Tokyo", "Asia/Tokyo"),
    ("Sydney", "Australia/Sydney"),
    ("Melbourne", "Australia/Melbourne"),
    ("Perth", "Australia/Perth"),
    ("Auckland", "Pacific/Auckland"),
];

/// Location name to IANA timezone mapping
///
/// Entries keep their insertion order. Overwriting an existing name keeps the
/// entry in its original position, so listings and samples stay stable.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    entries: Vec<LocationEntry>,
}

impl LocationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the startup table: built-in locations overlaid with configured ones
    pub fn from_config(config: &Config) -> Self {
        let mut table = Self::new();
        table.seed_defaults();
        if let Some(raw) = config.locations.as_deref() {
            table.apply_overrides(raw);
        }
        tracing::info!("Location table ready with {} entries", table.len());
        table
    }

    /// Insert the built-in locations
    pub fn seed_defaults(&mut self) {
        for (name, timezone) in DEFAULT_LOCATIONS {
            self.insert(*name, *timezone);
        }
    }

    /// Merge comma-separated `Name=Area/City` pairs into the table.
    ///
    /// Both sides are trimmed. Pairs without `=`, or with an empty name or
    /// timezone, are skipped. A pair overwrites an entry only on an exact
    /// name match.
    pub fn apply_overrides(&mut self, raw: &str) {
        for pair in raw.split(',') {
            let Some((name, timezone)) = pair.split_once('=') else {
                if !pair.trim().is_empty() {
                    tracing::debug!("Skipping malformed location override '{}'", pair.trim());
                }
                continue;
            };

            let (name, timezone) = (name.trim(), timezone.trim());
            if name.is_empty() || timezone.is_empty() {
                tracing::debug!("Skipping incomplete location override '{}'", pair.trim());
                continue;
            }

            tracing::debug!("Configured location '{}' -> '{}'", name, timezone);
            self.insert(name, timezone);
        }
    }

    /// Insert or overwrite a single entry by exact name
    pub fn insert(&mut self, name: impl Into<String>, timezone: impl Into<String>) {
        let entry = LocationEntry::new(name, timezone);
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => existing.timezone = entry.timezone,
            None => self.entries.push(entry),
        }
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.timezone.as_str())
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries.iter()
    }

    /// The first `count` names in insertion order
    pub fn sample(&self, count: usize) -> Vec<String> {
        self.entries
            .iter()
            .take(count)
            .map(|e| e.name.clone())
            .collect()
    }

    /// All names, sorted by ordinal string comparison
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> LocationTable {
        let mut table = LocationTable::new();
        table.seed_defaults();
        table
    }

    #[test]
    fn test_seed_defaults() {
        let table = seeded();
        assert_eq!(table.len(), DEFAULT_LOCATIONS.len());
        assert_eq!(table.get("Tokyo"), Some("Asia/Tokyo"));
        assert_eq!(table.get("London"), Some("Europe/London"));
    }

    #[test]
    fn test_seed_order_is_stable() {
        let first = seeded().sample(5);
        let second = seeded().sample(5);
        assert_eq!(first, second);
        assert_eq!(first[0], "New York");
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let table = seeded();
        assert_eq!(table.get("tokyo"), None);
    }

    #[test]
    fn test_apply_single_override() {
        let mut table = seeded();
        table.apply_overrides("Vienna=Europe/Vienna");
        assert_eq!(table.get("Vienna"), Some("Europe/Vienna"));
    }

    #[test]
    fn test_apply_multiple_overrides_with_whitespace() {
        let mut table = LocationTable::new();
        table.apply_overrides("A=X/Y,B=P/Q");
        assert_eq!(table.get("A"), Some("X/Y"));
        assert_eq!(table.get("B"), Some("P/Q"));

        table.apply_overrides("  Oslo =  Europe/Oslo , Lima=America/Lima ");
        assert_eq!(table.get("Oslo"), Some("Europe/Oslo"));
        assert_eq!(table.get("Lima"), Some("America/Lima"));
    }

    #[test]
    fn test_malformed_overrides_are_skipped() {
        let mut table = seeded();
        let before = table.len();

        table.apply_overrides("Vienna=");
        table.apply_overrides("malformed");
        table.apply_overrides("=Europe/Vienna");
        table.apply_overrides(",,");
        table.apply_overrides("");

        assert_eq!(table.len(), before);
        assert_eq!(table.get("Vienna"), None);
        assert_eq!(table.get("malformed"), None);
    }

    #[test]
    fn test_malformed_entries_do_not_block_valid_ones() {
        let mut table = LocationTable::new();
        table.apply_overrides("broken,Vienna=Europe/Vienna,also broken");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Vienna"), Some("Europe/Vienna"));
    }

    #[test]
    fn test_override_replaces_builtin_in_place() {
        let mut table = seeded();
        let before = table.len();
        table.apply_overrides("New York=America/Detroit");

        assert_eq!(table.len(), before);
        assert_eq!(table.get("New York"), Some("America/Detroit"));
        assert_eq!(table.sample(1), vec!["New York".to_string()]);
    }

    #[test]
    fn test_override_matches_exact_name_only() {
        let mut table = seeded();
        table.apply_overrides("new york=America/Detroit");

        assert_eq!(table.get("New York"), Some("America/New_York"));
        assert_eq!(table.get("new york"), Some("America/Detroit"));
    }

    #[test]
    fn test_value_may_contain_equals_sign() {
        let mut table = LocationTable::new();
        table.apply_overrides("Odd=Etc/GMT=1");
        assert_eq!(table.get("Odd"), Some("Etc/GMT=1"));
    }

    #[test]
    fn test_sorted_names() {
        let mut table = LocationTable::new();
        table.apply_overrides("b=X/B,a=X/A,B=X/C,a=X/D");

        assert_eq!(table.sorted_names(), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_sample_is_capped() {
        let mut table = LocationTable::new();
        table.apply_overrides("A=X/A,B=X/B");
        assert_eq!(table.sample(5).len(), 2);
        assert_eq!(seeded().sample(5).len(), 5);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            locations: Some("Vienna=Europe/Vienna,Tokyo=Asia/Osaka".to_string()),
        };
        let table = LocationTable::from_config(&config);

        assert_eq!(table.get("Vienna"), Some("Europe/Vienna"));
        assert_eq!(table.get("Tokyo"), Some("Asia/Osaka"));
        assert_eq!(table.get("London"), Some("Europe/London"));

        let defaults = LocationTable::from_config(&Config::default());
        assert_eq!(defaults.len(), DEFAULT_LOCATIONS.len());
    }
}
