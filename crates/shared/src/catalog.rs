use serde::{Deserialize, Serialize};

use crate::{
    domain::{CatalogEntry, EntryId, TicketTier, ALL_CATEGORIES_LABEL},
    error::CatalogError,
};

/// Read-only catalog handed to the client components at mount time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
    #[serde(default)]
    pub tiers: Vec<TicketTier>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>, tiers: Vec<TicketTier>) -> Self {
        Self { entries, tiers }
    }

    /// Parses a `{ "entries": [...], "tiers": [...] }` document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if self.entries[..index].iter().any(|seen| seen.id == entry.id) {
                return Err(CatalogError::DuplicateEntry(entry.id));
            }
        }
        for (index, tier) in self.tiers.iter().enumerate() {
            if self.tiers[..index].iter().any(|seen| seen.id == tier.id) {
                return Err(CatalogError::DuplicateTier(tier.id.clone()));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn require(&self, id: EntryId) -> Result<&CatalogEntry, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownEntry(id))
    }

    /// Detail-view lookup that never yields a broken view: unknown ids resolve
    /// to the first entry. `None` only when the catalog is empty.
    pub fn get_or_first(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.get(id).or_else(|| self.entries.first())
    }

    /// Category chips in first-seen order, led by the `All` sentinel.
    pub fn categories(&self) -> Vec<String> {
        let mut labels = vec![ALL_CATEGORIES_LABEL.to_string()];
        for entry in &self.entries {
            if !labels.iter().any(|label| label == &entry.category) {
                labels.push(entry.category.clone());
            }
        }
        labels
    }
}

/// The soup festival lineup the app ships with.
pub fn festival_catalog() -> Catalog {
    Catalog::new(festival_entries(), festival_tiers())
}

pub fn festival_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1, "Chef Maria's Kitchen", "Tuscan White Bean", "Vegetarian")
            .with_score(4.9, 127),
        CatalogEntry::new(2, "The Soup Shack", "Loaded Potato", "Classic").with_score(4.8, 98),
        CatalogEntry::new(3, "Grandma's Recipes", "Chicken Noodle", "Classic")
            .with_score(4.7, 112),
        CatalogEntry::new(4, "Fire & Spice", "Thai Coconut Curry", "Spicy").with_score(4.6, 89),
        CatalogEntry::new(5, "The Green Ladle", "Roasted Tomato Basil", "Vegetarian")
            .with_score(4.5, 76),
        CatalogEntry::new(6, "Harbor Kitchen", "New England Clam Chowder", "Seafood")
            .with_score(4.8, 134),
        CatalogEntry::new(7, "Bistro 22", "French Onion", "Classic").with_score(4.4, 67),
        CatalogEntry::new(8, "Spice Route", "Moroccan Lentil", "International")
            .with_score(4.6, 82),
    ]
}

pub fn festival_tiers() -> Vec<TicketTier> {
    vec![
        TicketTier {
            description: "Full access to taste all soups and vote".into(),
            features: vec![
                "Unlimited soup tasting".into(),
                "Voting privileges".into(),
                "Commemorative spoon".into(),
            ],
            ..TicketTier::per_person("general", "General Admission", 15)
        },
        TicketTier {
            description: "Premium access with exclusive perks".into(),
            features: vec![
                "Early entry (10:30 AM)".into(),
                "Private tasting area".into(),
                "Meet the chefs".into(),
                "Swag bag".into(),
                "Reserved seating".into(),
            ],
            popular: true,
            ..TicketTier::per_person("vip", "VIP Experience", 35)
        },
        TicketTier {
            description: "2 adults + 2 kids (under 12)".into(),
            features: vec![
                "4 admission tickets".into(),
                "Kids activity area".into(),
                "Family photo opportunity".into(),
            ],
            ..TicketTier::per_pack("family", "Family Pack", 45)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_falls_back_to_first_entry() {
        let catalog = festival_catalog();
        let entry = catalog.get_or_first(EntryId(99)).expect("non-empty catalog");
        assert_eq!(entry.id, EntryId(1));
        assert!(catalog.get(EntryId(99)).is_none());
    }

    #[test]
    fn strict_lookup_reports_unknown_entry() {
        let catalog = festival_catalog();
        let err = catalog.require(EntryId(42)).expect_err("unknown id");
        assert!(matches!(err, CatalogError::UnknownEntry(EntryId(42))));
        assert_eq!(
            catalog.require(EntryId(2)).expect("known").display_name,
            "The Soup Shack"
        );
    }

    #[test]
    fn empty_catalog_has_no_fallback() {
        assert!(Catalog::default().get_or_first(EntryId(1)).is_none());
    }

    #[test]
    fn categories_start_with_all_sentinel() {
        assert_eq!(
            festival_catalog().categories(),
            vec![
                "All",
                "Vegetarian",
                "Classic",
                "Spicy",
                "Seafood",
                "International"
            ]
        );
    }

    #[test]
    fn parses_json_document_with_defaults() {
        let raw = r#"{
            "entries": [
                {"id": 1, "display_name": "A", "secondary_label": "Broth", "category": "Classic"}
            ],
            "tiers": [
                {"id": "solo", "name": "Solo", "unit_price": 12}
            ]
        }"#;
        let catalog = Catalog::from_json(raw).expect("valid catalog");
        assert_eq!(catalog.entries[0].votes, 0);
        assert!(!catalog.tiers[0].is_per_pack);
    }

    #[test]
    fn rejects_duplicate_tier_ids() {
        let raw = r#"{"tiers": [
            {"id": "vip", "name": "VIP", "unit_price": 35},
            {"id": "vip", "name": "VIP again", "unit_price": 40}
        ]}"#;
        let err = Catalog::from_json(raw).expect_err("duplicate");
        assert!(matches!(err, CatalogError::DuplicateTier(_)));
    }

    #[test]
    fn rejects_duplicate_entry_ids() {
        let raw = r#"{"entries": [
            {"id": 1, "display_name": "The Soup Shack", "secondary_label": "Loaded Potato", "category": "Classic"},
            {"id": 1, "display_name": "Fire & Spice", "secondary_label": "Thai Coconut Curry", "category": "Spicy"}
        ]}"#;
        let err = Catalog::from_json(raw).expect_err("duplicate");
        assert!(matches!(err, CatalogError::DuplicateEntry(EntryId(1))));
    }
}
