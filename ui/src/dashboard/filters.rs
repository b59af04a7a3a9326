//! Filter dimensions, the user's selections, and the row filter.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::{Dataset, SalesRecord};

/// One of the four filterable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Year,
    Platform,
    Genre,
    Publisher,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Year,
        Dimension::Platform,
        Dimension::Genre,
        Dimension::Publisher,
    ];

    /// Stable identifier used for DOM ids and CSS modifiers.
    pub fn slug(self) -> &'static str {
        match self {
            Dimension::Year => "year",
            Dimension::Platform => "platform",
            Dimension::Genre => "genre",
            Dimension::Publisher => "publisher",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Selection for a single dimension.
///
/// `All` means "no filter": every value in the domain passes. `Only` carries
/// an explicit choice, and `Only` of an empty set means nothing was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionSelection<T: Ord> {
    All,
    Only(BTreeSet<T>),
}

impl<T: Ord> Default for DimensionSelection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Ord + Clone> DimensionSelection<T> {
    pub fn only<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::Only(values.into_iter().collect())
    }

    pub fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(chosen) => chosen.contains(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Only(chosen) if chosen.is_empty())
    }

    /// Flip one value. Toggling out of `All` materialises the rest of the domain.
    /// Choosing every value again collapses back to `All`.
    pub fn toggle(&mut self, value: &T, domain: &[T]) {
        let mut chosen = match std::mem::replace(self, Self::All) {
            Self::All => domain.iter().cloned().collect::<BTreeSet<_>>(),
            Self::Only(chosen) => chosen,
        };

        if !chosen.remove(value) {
            chosen.insert(value.clone());
        }

        *self = if !domain.is_empty() && domain.iter().all(|v| chosen.contains(v)) {
            Self::All
        } else {
            Self::Only(chosen)
        };
    }

    pub fn chosen_count(&self, domain: &[T]) -> usize {
        match self {
            Self::All => domain.len(),
            Self::Only(chosen) => domain.iter().filter(|v| chosen.contains(*v)).count(),
        }
    }
}

/// Sorted distinct values available for each dimension.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub years: Vec<u16>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
    pub publishers: Vec<String>,
}

impl FilterOptions {
    /// Missing years are dropped; text columns keep every distinct value.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let records = dataset.records();
        Self {
            years: distinct(records.iter().filter_map(|r| r.year)),
            platforms: distinct(records.iter().map(|r| r.platform.clone())),
            genres: distinct(records.iter().map(|r| r.genre.clone())),
            publishers: distinct(records.iter().map(|r| r.publisher.clone())),
        }
    }

    pub fn len(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Year => self.years.len(),
            Dimension::Platform => self.platforms.len(),
            Dimension::Genre => self.genres.len(),
            Dimension::Publisher => self.publishers.len(),
        }
    }

    /// Display labels in option order.
    pub fn labels(&self, dimension: Dimension) -> Vec<String> {
        match dimension {
            Dimension::Year => self.years.iter().map(u16::to_string).collect(),
            Dimension::Platform => self.platforms.clone(),
            Dimension::Genre => self.genres.clone(),
            Dimension::Publisher => self.publishers.clone(),
        }
    }
}

fn distinct<T: Ord, I: Iterator<Item = T>>(values: I) -> Vec<T> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

/// Current choice across all four dimensions. Defaults to everything selected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub years: DimensionSelection<u16>,
    pub platforms: DimensionSelection<String>,
    pub genres: DimensionSelection<String>,
    pub publishers: DimensionSelection<String>,
}

impl FilterSelection {
    /// Flip the option at `index` of `dimension`'s option list.
    pub fn toggle(&mut self, dimension: Dimension, index: usize, options: &FilterOptions) {
        match dimension {
            Dimension::Year => {
                if let Some(year) = options.years.get(index) {
                    self.years.toggle(year, &options.years);
                }
            }
            Dimension::Platform => {
                if let Some(value) = options.platforms.get(index) {
                    self.platforms.toggle(value, &options.platforms);
                }
            }
            Dimension::Genre => {
                if let Some(value) = options.genres.get(index) {
                    self.genres.toggle(value, &options.genres);
                }
            }
            Dimension::Publisher => {
                if let Some(value) = options.publishers.get(index) {
                    self.publishers.toggle(value, &options.publishers);
                }
            }
        }
    }

    pub fn select_all(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Year => self.years = DimensionSelection::All,
            Dimension::Platform => self.platforms = DimensionSelection::All,
            Dimension::Genre => self.genres = DimensionSelection::All,
            Dimension::Publisher => self.publishers = DimensionSelection::All,
        }
    }

    pub fn clear(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Year => self.years = DimensionSelection::none(),
            Dimension::Platform => self.platforms = DimensionSelection::none(),
            Dimension::Genre => self.genres = DimensionSelection::none(),
            Dimension::Publisher => self.publishers = DimensionSelection::none(),
        }
    }

    pub fn is_chosen(&self, dimension: Dimension, index: usize, options: &FilterOptions) -> bool {
        match dimension {
            Dimension::Year => options.years.get(index).is_some_and(|v| self.years.admits(v)),
            Dimension::Platform => options
                .platforms
                .get(index)
                .is_some_and(|v| self.platforms.admits(v)),
            Dimension::Genre => options.genres.get(index).is_some_and(|v| self.genres.admits(v)),
            Dimension::Publisher => options
                .publishers
                .get(index)
                .is_some_and(|v| self.publishers.admits(v)),
        }
    }

    pub fn chosen_count(&self, dimension: Dimension, options: &FilterOptions) -> usize {
        match dimension {
            Dimension::Year => self.years.chosen_count(&options.years),
            Dimension::Platform => self.platforms.chosen_count(&options.platforms),
            Dimension::Genre => self.genres.chosen_count(&options.genres),
            Dimension::Publisher => self.publishers.chosen_count(&options.publishers),
        }
    }

    /// Dimensions whose selection is the empty set, in display order.
    pub fn empty_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| match dimension {
                Dimension::Year => self.years.is_empty(),
                Dimension::Platform => self.platforms.is_empty(),
                Dimension::Genre => self.genres.is_empty(),
                Dimension::Publisher => self.publishers.is_empty(),
            })
            .collect()
    }

    /// True when every dimension has at least one value chosen.
    pub fn is_complete(&self) -> bool {
        self.empty_dimensions().is_empty()
    }

    /// Row predicate: AND across dimensions, membership within each.
    /// A record without a year never matches, since missing years are not
    /// part of the year domain.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        record.year.is_some_and(|year| self.years.admits(&year))
            && self.platforms.admits(&record.platform)
            && self.genres.admits(&record.genre)
            && self.publishers.admits(&record.publisher)
    }
}

/// The working subset: rows passing every dimension, in table order.
pub fn apply<'a>(records: &'a [SalesRecord], selection: &FilterSelection) -> Vec<&'a SalesRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}
