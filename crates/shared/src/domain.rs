use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(EntryId);

/// Ticket tiers are keyed by a short slug (`general`, `vip`, `family`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(pub String);

impl TierId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TierId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Sentinel label the category chips use for "no category restriction".
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Category selection for the catalog filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a chip label; `All` in any casing (or a blank label) is the sentinel.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(ALL_CATEGORIES_LABEL) {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES_LABEL,
            Self::Only(selected) => selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub display_name: String,
    pub secondary_label: String,
    pub category: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub votes: u32,
}

impl CatalogEntry {
    pub fn new(
        id: i64,
        display_name: impl Into<String>,
        secondary_label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId(id),
            display_name: display_name.into(),
            secondary_label: secondary_label.into(),
            category: category.into(),
            rating: 0.0,
            votes: 0,
        }
    }

    pub fn with_score(mut self, rating: f32, votes: u32) -> Self {
        self.rating = rating;
        self.votes = votes;
        self
    }

    /// Case-insensitive substring match on the display name or the secondary label.
    ///
    /// `needle_lower` must already be lowercased; an empty needle matches everything.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.display_name.to_lowercase().contains(needle_lower)
            || self.secondary_label.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTier {
    pub id: TierId,
    pub name: String,
    pub unit_price: u64,
    #[serde(default)]
    pub is_per_pack: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl TicketTier {
    pub fn per_person(id: &str, name: impl Into<String>, unit_price: u64) -> Self {
        Self {
            id: TierId::from(id),
            name: name.into(),
            unit_price,
            is_per_pack: false,
            description: String::new(),
            features: Vec::new(),
            popular: false,
        }
    }

    pub fn per_pack(id: &str, name: impl Into<String>, unit_price: u64) -> Self {
        Self {
            is_per_pack: true,
            ..Self::per_person(id, name, unit_price)
        }
    }

    pub fn price_unit_label(&self) -> &'static str {
        if self.is_per_pack {
            "/pack"
        } else {
            "/person"
        }
    }
}
