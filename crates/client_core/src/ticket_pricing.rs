use serde::Serialize;
use shared::domain::{TicketTier, TierId};
use tracing::{debug, info};

use crate::error::{CoreError, Result};

pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseSelection {
    pub selected_tier: Option<TierId>,
    pub quantity: u8,
}

impl Default for PurchaseSelection {
    fn default() -> Self {
        Self {
            selected_tier: None,
            quantity: MIN_QUANTITY,
        }
    }
}

/// `unit_price × quantity`, where per-pack tiers always count as one.
pub fn line_total(tier: &TicketTier, quantity: u8) -> u64 {
    let billed = if tier.is_per_pack { 1 } else { quantity };
    tier.unit_price.saturating_mul(u64::from(billed))
}

fn clamp_quantity(requested: u32) -> u8 {
    requested.clamp(u32::from(MIN_QUANTITY), u32::from(MAX_QUANTITY)) as u8
}

#[derive(Debug, Clone)]
pub struct TicketPricingEngine {
    tiers: Vec<TicketTier>,
    selection: PurchaseSelection,
}

impl TicketPricingEngine {
    pub fn new(tiers: Vec<TicketTier>) -> Self {
        Self {
            tiers,
            selection: PurchaseSelection::default(),
        }
    }

    pub fn tiers(&self) -> &[TicketTier] {
        &self.tiers
    }

    pub fn selection(&self) -> &PurchaseSelection {
        &self.selection
    }

    pub fn quantity(&self) -> u8 {
        self.selection.quantity
    }

    pub fn selected_tier(&self) -> Option<&TicketTier> {
        let id = self.selection.selected_tier.as_ref()?;
        self.tiers.iter().find(|tier| &tier.id == id)
    }

    /// Switching tiers keeps the current quantity.
    pub fn select_tier(&mut self, id: &TierId) -> Result<&TicketTier> {
        let Some(index) = self.tiers.iter().position(|tier| &tier.id == id) else {
            return Err(CoreError::UnknownTier(id.clone()));
        };
        self.selection.selected_tier = Some(id.clone());
        let tier = &self.tiers[index];
        info!(
            tier = %tier.id,
            quantity = self.selection.quantity,
            per_pack = tier.is_per_pack,
            "tickets: tier selected"
        );
        Ok(tier)
    }

    pub fn clear(&mut self) {
        self.selection.selected_tier = None;
    }

    pub fn increment_quantity(&mut self) -> u8 {
        self.step_quantity(u32::from(self.selection.quantity) + 1)
    }

    pub fn decrement_quantity(&mut self) -> u8 {
        self.step_quantity(u32::from(self.selection.quantity).saturating_sub(1))
    }

    pub fn set_quantity(&mut self, requested: u32) -> u8 {
        self.step_quantity(requested)
    }

    fn step_quantity(&mut self, requested: u32) -> u8 {
        let quantity = clamp_quantity(requested);
        if u32::from(quantity) != requested {
            debug!(requested, quantity, "tickets: quantity clamped");
        }
        self.selection.quantity = quantity;
        quantity
    }

    pub fn quantity_applies(&self) -> bool {
        self.selected_tier().is_some_and(|tier| !tier.is_per_pack)
    }

    /// `None` until a tier is selected, never a zero placeholder.
    pub fn total(&self) -> Option<u64> {
        self.selected_tier()
            .map(|tier| line_total(tier, self.selection.quantity))
    }
}

#[cfg(test)]
#[path = "tests/ticket_pricing_tests.rs"]
mod tests;
