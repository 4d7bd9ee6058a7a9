// File: src/catalog.rs
// Purpose: Country -> city lookup backing the dependent select pair

use once_cell::sync::Lazy;

use crate::error::FormError;

static BUILTIN: Lazy<LocationCatalog> = Lazy::new(|| LocationCatalog {
    entries: vec![
        (
            "India".to_string(),
            vec!["Delhi".to_string(), "Mumbai".to_string(), "Bangalore".to_string()],
        ),
        (
            "USA".to_string(),
            vec!["New York".to_string(), "Los Angeles".to_string(), "Chicago".to_string()],
        ),
    ],
});

/// Ordered mapping of country name to its ordered list of cities
///
/// Immutable once built; the empty string is never a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCatalog {
    entries: Vec<(String, Vec<String>)>,
}

impl LocationCatalog {
    /// India and USA with three cities each
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a catalog from `(country, cities)` pairs, keeping their order
    pub fn from_entries<I, C, S>(entries: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = (C, Vec<S>)>,
        C: Into<String>,
        S: Into<String>,
    {
        let mut built: Vec<(String, Vec<String>)> = Vec::new();

        for (country, cities) in entries {
            let country = country.into();
            if country.is_empty() {
                return Err(FormError::BlankCountry);
            }
            if built.iter().any(|(name, _)| *name == country) {
                return Err(FormError::DuplicateCountry(country));
            }
            built.push((country, cities.into_iter().map(Into::into).collect()));
        }

        if built.is_empty() {
            return Err(FormError::EmptyCatalog);
        }

        Ok(Self { entries: built })
    }

    /// Country names in display order
    pub fn countries(&self) -> Vec<&str> {
        self.entries.iter().map(|(country, _)| country.as_str()).collect()
    }

    /// Cities of a country in display order; empty for an unknown country
    /// or the empty selection
    pub fn cities_for(&self, country: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == country)
            .map(|(_, cities)| cities.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == country)
    }

    pub fn contains_city(&self, country: &str, city: &str) -> bool {
        self.cities_for(country).iter().any(|c| c == city)
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = LocationCatalog::builtin();
        assert_eq!(catalog.countries(), vec!["India", "USA"]);
        assert_eq!(catalog.cities_for("India"), ["Delhi", "Mumbai", "Bangalore"]);
        assert_eq!(catalog.cities_for("USA"), ["New York", "Los Angeles", "Chicago"]);
    }

    #[test]
    fn test_unknown_and_empty_country() {
        let catalog = LocationCatalog::builtin();
        assert!(catalog.cities_for("").is_empty());
        assert!(catalog.cities_for("France").is_empty());
        assert!(!catalog.contains_country(""));
        assert!(!catalog.contains_country("india"));
    }

    #[test]
    fn test_contains_city_is_scoped_to_country() {
        let catalog = LocationCatalog::builtin();
        assert!(catalog.contains_city("India", "Mumbai"));
        assert!(!catalog.contains_city("USA", "Mumbai"));
        assert!(!catalog.contains_city("", "Mumbai"));
    }

    #[test]
    fn test_from_entries_keeps_order() {
        let catalog = LocationCatalog::from_entries(vec![
            ("Nepal", vec!["Kathmandu", "Pokhara"]),
            ("Bhutan", vec!["Thimphu"]),
        ])
        .unwrap();
        assert_eq!(catalog.countries(), vec!["Nepal", "Bhutan"]);
        assert_eq!(catalog.cities_for("Nepal"), ["Kathmandu", "Pokhara"]);
    }

    #[test]
    fn test_from_entries_rejects_bad_tables() {
        let empty: Vec<(String, Vec<String>)> = Vec::new();
        assert_eq!(LocationCatalog::from_entries(empty), Err(FormError::EmptyCatalog));

        let duplicate = LocationCatalog::from_entries(vec![("USA", vec!["Chicago"]), ("USA", vec!["Boston"])]);
        assert_eq!(duplicate, Err(FormError::DuplicateCountry("USA".to_string())));

        let unnamed = LocationCatalog::from_entries(vec![("", vec!["Nowhere"])]);
        assert_eq!(unnamed, Err(FormError::BlankCountry));
    }
}
