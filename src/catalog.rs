//! Static option tables for categories, urgency levels, expiry windows, and roles

/// A selectable category card (id, display label, icon)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Food categories offered in the donation wizard
pub const FOOD_CATEGORIES: &[Category] = &[
    Category { id: "vegetables", label: "Fresh Vegetables", icon: "🥬" },
    Category { id: "fruits", label: "Fruits", icon: "🍎" },
    Category { id: "grains", label: "Rice & Grains", icon: "🌾" },
    Category { id: "bread", label: "Bread & Bakery", icon: "🍞" },
    Category { id: "canned", label: "Canned Food", icon: "🥫" },
    Category { id: "cooked", label: "Prepared Meals", icon: "🍲" },
];

/// Essential-goods categories offered in the donation wizard
pub const ESSENTIALS_CATEGORIES: &[Category] = &[
    Category { id: "hygiene", label: "Hygiene Products", icon: "🧴" },
    Category { id: "clothing", label: "Clothing", icon: "👕" },
    Category { id: "blankets", label: "Blankets", icon: "🛏️" },
    Category { id: "medicine", label: "Medicine", icon: "💊" },
    Category { id: "baby", label: "Baby Supplies", icon: "🍼" },
    Category { id: "other", label: "Other Essentials", icon: "📦" },
];

/// Categories an NGO can post a need for
pub const NEED_CATEGORIES: &[Category] = &[
    Category { id: "vegetables", label: "Fresh Vegetables", icon: "🥬" },
    Category { id: "fruits", label: "Fruits", icon: "🍎" },
    Category { id: "grains", label: "Rice & Grains", icon: "🌾" },
    Category { id: "bread", label: "Bread & Bakery", icon: "🍞" },
    Category { id: "canned", label: "Canned Food", icon: "🥫" },
    Category { id: "cooking", label: "Cooking Supplies", icon: "🍳" },
    Category { id: "hygiene", label: "Hygiene Products", icon: "🧴" },
    Category { id: "clothing", label: "Clothing", icon: "👕" },
    Category { id: "blankets", label: "Blankets", icon: "🛏️" },
    Category { id: "other", label: "Other", icon: "📦" },
];

/// Food categories a restaurant can list as surplus
pub const SURPLUS_CATEGORIES: &[Category] = &[
    Category { id: "prepared", label: "Prepared Meals", icon: "🍲" },
    Category { id: "bread", label: "Bread & Bakery", icon: "🍞" },
    Category { id: "vegetables", label: "Fresh Vegetables", icon: "🥬" },
    Category { id: "fruits", label: "Fresh Fruits", icon: "🍎" },
    Category { id: "dairy", label: "Dairy Products", icon: "🧀" },
    Category { id: "beverages", label: "Beverages", icon: "🥤" },
    Category { id: "desserts", label: "Desserts", icon: "🍰" },
    Category { id: "other", label: "Other", icon: "🍽️" },
];

/// How soon surplus food must be consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryWindow {
    pub id: &'static str,
    pub label: &'static str,
    /// Windows of two hours or less get the urgent highlight
    pub urgent: bool,
}

pub const EXPIRY_WINDOWS: &[ExpiryWindow] = &[
    ExpiryWindow { id: "1", label: "1 hour", urgent: true },
    ExpiryWindow { id: "2", label: "2 hours", urgent: true },
    ExpiryWindow { id: "4", label: "4 hours", urgent: false },
    ExpiryWindow { id: "6", label: "6 hours", urgent: false },
    ExpiryWindow { id: "12", label: "12 hours", urgent: false },
    ExpiryWindow { id: "24", label: "24 hours", urgent: false },
];

/// Look up a category by id within a table
pub fn find_category(table: &'static [Category], id: &str) -> Option<&'static Category> {
    table.iter().find(|c| c.id == id)
}

/// Display label for a category id, falling back when the id is unknown
pub fn category_label(table: &'static [Category], id: &str) -> &'static str {
    find_category(table, id).map(|c| c.label).unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_donation_tables_have_six_entries_each() {
        assert_eq!(FOOD_CATEGORIES.len(), 6);
        assert_eq!(ESSENTIALS_CATEGORIES.len(), 6);
    }

    #[test]
    fn test_need_table_has_ten_entries() {
        assert_eq!(NEED_CATEGORIES.len(), 10);
    }

    #[test]
    fn test_surplus_table_has_eight_entries() {
        assert_eq!(SURPLUS_CATEGORIES.len(), 8);
    }

    #[test]
    fn test_find_category_hits() {
        let cat = find_category(FOOD_CATEGORIES, "vegetables").unwrap();
        assert_eq!(cat.label, "Fresh Vegetables");
    }

    #[test]
    fn test_find_category_misses() {
        assert!(find_category(FOOD_CATEGORIES, "hygiene").is_none());
        assert!(find_category(ESSENTIALS_CATEGORIES, "vegetables").is_none());
    }

    #[test]
    fn test_category_label_fallback() {
        assert_eq!(category_label(NEED_CATEGORIES, "bread"), "Bread & Bakery");
        assert_eq!(category_label(NEED_CATEGORIES, "nonsense"), "Unknown");
    }

    #[test]
    fn test_only_short_windows_are_urgent() {
        for window in EXPIRY_WINDOWS {
            let hours: u32 = window.id.parse().unwrap();
            assert_eq!(window.urgent, hours <= 2);
        }
    }

    #[test]
    fn test_ids_unique_within_each_table() {
        for table in [
            FOOD_CATEGORIES,
            ESSENTIALS_CATEGORIES,
            NEED_CATEGORIES,
            SURPLUS_CATEGORIES,
        ] {
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }
}
