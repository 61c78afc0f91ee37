use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::round::{CHOICES_PER_ROUND, ChoiceIndex, Round};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("country name cannot be empty")]
    EmptyName,

    #[error("country {name:?} appears more than once")]
    DuplicateCountry { name: String },

    #[error("catalog needs at least {required} countries, got {len}")]
    TooFewCountries { len: usize, required: usize },
}

//
// ─── COUNTRY ───────────────────────────────────────────────────────────────────
//

/// A country whose flag can be shown. The name doubles as the flag's asset key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    /// Creates a country from a display name.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyName` if the trimmed name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Country {
    type Error = CatalogError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.0
    }
}

impl fmt::Debug for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country({})", self.0)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Countries shipped with the game.
pub const SAMPLE_COUNTRIES: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Spain", "UK",
    "Ukraine", "US",
];

/// Immutable list of countries that rounds are drawn from.
///
/// Always holds at least [`CHOICES_PER_ROUND`] distinct countries, so any permutation of it
/// yields a valid round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    /// Builds a catalog from raw names.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyName` for blank names,
    /// `CatalogError::DuplicateCountry` if a name repeats, and
    /// `CatalogError::TooFewCountries` if fewer than three names remain.
    pub fn new<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut countries = Vec::new();
        for name in names {
            let country = Country::new(name)?;
            if !seen.insert(country.clone()) {
                return Err(CatalogError::DuplicateCountry {
                    name: country.0,
                });
            }
            countries.push(country);
        }

        if countries.len() < CHOICES_PER_ROUND {
            return Err(CatalogError::TooFewCountries {
                len: countries.len(),
                required: CHOICES_PER_ROUND,
            });
        }

        Ok(Self { countries })
    }

    /// The eleven-country catalog the game ships with.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            countries: SAMPLE_COUNTRIES
                .iter()
                .map(|name| Country((*name).to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, country: &Country) -> bool {
        self.countries.contains(country)
    }

    /// Draws a round: shuffles the whole catalog, keeps the first three entries in
    /// shuffled order, then picks the correct position uniformly.
    pub fn draw_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Round {
        let mut order: Vec<&Country> = self.countries.iter().collect();
        order.shuffle(rng);

        let choices = [order[0].clone(), order[1].clone(), order[2].clone()];
        let correct = ChoiceIndex::ALL[rng.random_range(0..CHOICES_PER_ROUND)];
        Round::from_distinct(choices, correct)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample_catalog_has_eleven_countries() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.countries()[0].as_str(), "Estonia");
        assert_eq!(Catalog::new(SAMPLE_COUNTRIES).unwrap(), catalog);
    }

    #[test]
    fn catalog_trims_names() {
        let catalog = Catalog::new([" France ", "Spain", "Italy"]).unwrap();
        assert_eq!(catalog.countries()[0].as_str(), "France");
    }

    #[test]
    fn catalog_rejects_blank_names() {
        let err = Catalog::new(["France", "  ", "Italy"]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyName);
    }

    #[test]
    fn catalog_rejects_duplicates() {
        let err = Catalog::new(["France", "Spain", "France"]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateCountry {
                name: "France".to_string()
            }
        );
    }

    #[test]
    fn catalog_needs_three_countries() {
        let err = Catalog::new(["France", "Spain"]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::TooFewCountries {
                len: 2,
                required: 3
            }
        );
    }

    #[test]
    fn drawn_rounds_hold_distinct_catalog_countries() {
        let catalog = Catalog::sample();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let round = catalog.draw_round(&mut rng);
            let choices = round.choices();
            assert!(choices.iter().all(|country| catalog.contains(country)));
            assert_ne!(choices[0], choices[1]);
            assert_ne!(choices[0], choices[2]);
            assert_ne!(choices[1], choices[2]);
            assert_eq!(round.prompt(), round.choice(round.correct_index()));
        }
    }

    #[test]
    fn drawn_correct_index_covers_every_position() {
        let catalog = Catalog::sample();
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = [0_u32; CHOICES_PER_ROUND];

        for _ in 0..300 {
            hits[catalog.draw_round(&mut rng).correct_index().value()] += 1;
        }

        assert!(hits.iter().all(|count| *count > 0), "hits: {hits:?}");
    }

    #[test]
    fn minimal_catalog_always_draws_all_three() {
        let catalog = Catalog::new(["A", "B", "C"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let round = catalog.draw_round(&mut rng);
        let mut names: Vec<&str> = round.choices().iter().map(Country::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn deserialized_country_is_validated() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error as ValueError, StringDeserializer};

        let de: StringDeserializer<ValueError> = "  Spain ".to_string().into_deserializer();
        assert_eq!(Country::deserialize(de).unwrap(), Country::new("Spain").unwrap());

        let de: StringDeserializer<ValueError> = "   ".to_string().into_deserializer();
        assert!(Country::deserialize(de).is_err());
        assert_eq!(Country::try_from(String::new()), Err(CatalogError::EmptyName));
    }
}
