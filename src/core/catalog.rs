//! # Dhikr Catalog
//!
//! The static set of trackable phrases. Three fixed adhkar plus one open
//! "custom" slot — not user-extensible at runtime. Counters and targets are
//! keyed by these ids; anything not in the catalog renders with a generic
//! placeholder.

/// One trackable phrase: id, display name, original-script text, and the
/// target a fresh counter starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhikrKind {
    pub id: &'static str,
    pub name: &'static str,
    pub arabic_text: &'static str,
    pub default_target: u32,
}

pub const DHIKR_KINDS: &[DhikrKind] = &[
    DhikrKind {
        id: "subhanallah",
        name: "SubhanAllah",
        arabic_text: "سُبْحَانَ ٱللَّٰهِ",
        default_target: 33,
    },
    DhikrKind {
        id: "alhamdulillah",
        name: "Alhamdulillah",
        arabic_text: "ٱلْحَمْدُ لِلَّٰهِ",
        default_target: 33,
    },
    DhikrKind {
        id: "allahuakbar",
        name: "Allahu Akbar",
        arabic_text: "ٱللَّٰهُ أَكْبَرُ",
        default_target: 34,
    },
    DhikrKind {
        id: "custom",
        name: "Custom Dhikr",
        arabic_text: "",
        default_target: 100,
    },
];

/// The category selected on a fresh start.
pub const DEFAULT_DHIKR_ID: &str = "subhanallah";

/// Rendered for ids that don't match any catalog entry.
const PLACEHOLDER: DhikrKind = DhikrKind {
    id: "unknown",
    name: "Dhikr",
    arabic_text: "",
    default_target: 1,
};

pub fn find(id: &str) -> Option<&'static DhikrKind> {
    DHIKR_KINDS.iter().find(|kind| kind.id == id)
}

/// Catalog entry for `id`, or a generic placeholder for unknown ids.
pub fn find_or_placeholder(id: &str) -> &'static DhikrKind {
    find(id).unwrap_or(&PLACEHOLDER)
}

/// Starting target for `id`: the catalog default, or 1 for unknown ids
/// (targets must never drop below 1).
pub fn default_target_for(id: &str) -> u32 {
    find(id).map(|kind| kind.default_target).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_entries() {
        assert_eq!(DHIKR_KINDS.len(), 4);
        let targets: Vec<u32> = DHIKR_KINDS.iter().map(|k| k.default_target).collect();
        assert_eq!(targets, vec![33, 33, 34, 100]);
    }

    #[test]
    fn test_default_id_is_in_catalog() {
        assert!(find(DEFAULT_DHIKR_ID).is_some());
    }

    #[test]
    fn test_find_or_placeholder_falls_back() {
        let kind = find_or_placeholder("no-such-dhikr");
        assert_eq!(kind.name, "Dhikr");
        assert_eq!(kind.default_target, 1);
    }

    #[test]
    fn test_default_target_for_unknown_is_one() {
        assert_eq!(default_target_for("no-such-dhikr"), 1);
        assert_eq!(default_target_for("allahuakbar"), 34);
    }
}
