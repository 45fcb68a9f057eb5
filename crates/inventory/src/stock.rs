//! Stock-level math for presentation.
//!
//! Two classifications coexist on purpose and use different thresholds:
//! [`stock_severity`] bands the capped percentage for the progress bar,
//! while [`stock_level`] classifies raw quantities for the status message.
//! They are not guaranteed to agree (e.g. quantity 12 with threshold 10 is
//! `Sufficient` for the bar but `Moderate` for the message); callers pick
//! the one that matches their surface.

use crate::item::InventoryItem;

/// Stock as a percentage of the restock threshold, capped at 100.
///
/// A threshold of 0 means "no threshold configured" and reports a full
/// 100% rather than dividing by zero.
pub fn stock_percentage(item: &InventoryItem) -> f64 {
    if item.min_quantity == 0.0 {
        return 100.0;
    }
    let percentage = item.quantity / item.min_quantity * 100.0;
    percentage.min(100.0)
}

/// Ordered severity bands over the capped percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StockSeverity {
    Critical,
    Low,
    Moderate,
    Sufficient,
}

pub fn stock_severity(item: &InventoryItem) -> StockSeverity {
    let percentage = stock_percentage(item);
    if percentage <= 25.0 {
        StockSeverity::Critical
    } else if percentage <= 50.0 {
        StockSeverity::Low
    } else if percentage <= 75.0 {
        StockSeverity::Moderate
    } else {
        StockSeverity::Sufficient
    }
}

/// Finer-grained textual classification evaluated against raw quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StockLevel {
    Depleted,
    Critical,
    Low,
    Moderate,
    Sufficient,
}

impl StockLevel {
    /// User-facing status message.
    pub fn message(&self) -> &'static str {
        match self {
            StockLevel::Depleted => "¡Agotado!",
            StockLevel::Critical => "¡Stock crítico!",
            StockLevel::Low => "¡Stock bajo!",
            StockLevel::Moderate => "Stock moderado",
            StockLevel::Sufficient => "Stock suficiente",
        }
    }
}

/// Classify raw quantities, first match wins.
pub fn stock_level(item: &InventoryItem) -> StockLevel {
    if item.quantity == 0.0 {
        StockLevel::Depleted
    } else if item.quantity <= item.min_quantity * 0.25 {
        StockLevel::Critical
    } else if item.quantity <= item.min_quantity {
        StockLevel::Low
    } else if item.quantity <= item.min_quantity * 1.5 {
        StockLevel::Moderate
    } else {
        StockLevel::Sufficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemCategory;
    use agrovista_core::InventoryItemId;

    fn item(quantity: f64, min_quantity: f64) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId::new(1),
            name: "Urea".to_string(),
            quantity,
            min_quantity,
            unit: "kg".to_string(),
            category: ItemCategory::General,
            supplier: None,
            field_id: None,
            field_name: None,
            notes: None,
        }
    }

    #[test]
    fn zero_threshold_reports_full_stock() {
        assert_eq!(stock_percentage(&item(0.0, 0.0)), 100.0);
        assert_eq!(stock_percentage(&item(3.0, 0.0)), 100.0);
    }

    #[test]
    fn percentage_caps_at_one_hundred() {
        assert_eq!(stock_percentage(&item(50.0, 20.0)), 100.0);
        assert_eq!(stock_percentage(&item(10.0, 20.0)), 50.0);
    }

    #[test]
    fn severity_bands() {
        assert_eq!(stock_severity(&item(5.0, 20.0)), StockSeverity::Critical);
        assert_eq!(stock_severity(&item(10.0, 20.0)), StockSeverity::Low);
        assert_eq!(stock_severity(&item(15.0, 20.0)), StockSeverity::Moderate);
        assert_eq!(stock_severity(&item(19.0, 20.0)), StockSeverity::Sufficient);
    }

    #[test]
    fn depleted_item_is_critical_severity() {
        let depleted = item(0.0, 10.0);
        assert_eq!(stock_level(&depleted), StockLevel::Depleted);
        assert_eq!(stock_severity(&depleted), StockSeverity::Critical);
    }

    #[test]
    fn level_thresholds_follow_raw_quantities() {
        assert_eq!(stock_level(&item(2.5, 10.0)), StockLevel::Critical);
        assert_eq!(stock_level(&item(10.0, 10.0)), StockLevel::Low);
        assert_eq!(stock_level(&item(15.0, 10.0)), StockLevel::Moderate);
        assert_eq!(stock_level(&item(15.1, 10.0)), StockLevel::Sufficient);
    }

    #[test]
    fn severity_and_level_may_disagree() {
        // Above the threshold the bar is full, yet the message still says
        // moderate because of the 1.5x rule.
        let it = item(12.0, 10.0);
        assert_eq!(stock_severity(&it), StockSeverity::Sufficient);
        assert_eq!(stock_level(&it), StockLevel::Moderate);
    }

    #[test]
    fn messages_match_the_ui_strings() {
        assert_eq!(StockLevel::Depleted.message(), "¡Agotado!");
        assert_eq!(StockLevel::Sufficient.message(), "Stock suficiente");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the percentage is always within [0, 100].
            #[test]
            fn percentage_stays_in_range(
                quantity in 0.0f64..1_000_000.0,
                min_quantity in 0.0f64..1_000_000.0,
            ) {
                let p = stock_percentage(&item(quantity, min_quantity));
                prop_assert!((0.0..=100.0).contains(&p));
            }

            /// Property: a zero threshold always reports exactly 100.
            #[test]
            fn zero_threshold_is_always_full(quantity in 0.0f64..1_000_000.0) {
                prop_assert_eq!(stock_percentage(&item(quantity, 0.0)), 100.0);
            }
        }
    }
}
