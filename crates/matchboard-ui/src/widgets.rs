//! Closed widget catalog and the fixed set the board shell registers.
//!
//! # Design
//! - The catalog is sealed at compile time; there is no runtime surface for
//!   adding or removing capabilities once the shell is up.
//! - Each capability carries a stable kebab-case name used in logs and tests.
//! - `BOARD_KIT` is the exact subset the shell registers at bootstrap; the
//!   remainder of the catalog ships with the kit but stays unregistered.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Set of named widget capabilities from the component kit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct WidgetSet: u32 {
        /// Viewport-level scaffold every other widget sits inside.
        const LAYOUT = 1 << 0;
        /// Fixed band across the top of the layout.
        const HEADER = 1 << 1;
        /// Horizontal control strip, usually hosted by the header.
        const TOOLBAR = 1 << 2;
        /// Emphasized title slot inside a toolbar.
        const TOOLBAR_TITLE = 1 << 3;
        /// Single screen of content.
        const PAGE = 1 << 4;
        /// Region of the layout that hosts pages.
        const PAGE_CONTAINER = 1 << 5;
        /// Columnar data grid.
        const TABLE = 1 << 6;
        /// Single cell inside a table row.
        const TABLE_CELL = 1 << 7;
        /// Bordered grouping container.
        const CARD = 1 << 8;
        /// Padded region inside a card.
        const CARD_SECTION = 1 << 9;
        /// Compact pill for short status text.
        const CHIP = 1 << 10;
        /// Named glyph rendered inline with text.
        const ICON = 1 << 11;
        /// Flexible spacer that pushes toolbar content apart.
        const SPACE = 1 << 12;
        /// Indeterminate activity indicator.
        const SPINNER = 1 << 13;
        /// Modal overlay; shipped in the catalog but not registered by the
        /// board shell.
        const DIALOG = 1 << 14;
    }
}

/// Catalog entries paired with their stable names, in registration order.
static NAMES: [(WidgetSet, &str); 15] = [
    (WidgetSet::LAYOUT, "layout"),
    (WidgetSet::HEADER, "header"),
    (WidgetSet::TOOLBAR, "toolbar"),
    (WidgetSet::TOOLBAR_TITLE, "toolbar-title"),
    (WidgetSet::PAGE, "page"),
    (WidgetSet::PAGE_CONTAINER, "page-container"),
    (WidgetSet::TABLE, "table"),
    (WidgetSet::TABLE_CELL, "table-cell"),
    (WidgetSet::CARD, "card"),
    (WidgetSet::CARD_SECTION, "card-section"),
    (WidgetSet::CHIP, "chip"),
    (WidgetSet::ICON, "icon"),
    (WidgetSet::SPACE, "space"),
    (WidgetSet::SPINNER, "spinner"),
    (WidgetSet::DIALOG, "dialog"),
];

impl WidgetSet {
    /// The fixed set the board shell registers at bootstrap.
    pub const BOARD_KIT: Self = Self::LAYOUT
        .union(Self::HEADER)
        .union(Self::TOOLBAR)
        .union(Self::TOOLBAR_TITLE)
        .union(Self::PAGE)
        .union(Self::PAGE_CONTAINER)
        .union(Self::TABLE)
        .union(Self::TABLE_CELL)
        .union(Self::CARD)
        .union(Self::CARD_SECTION)
        .union(Self::CHIP)
        .union(Self::ICON)
        .union(Self::SPACE)
        .union(Self::SPINNER);

    /// Stable name of a single-capability set, `None` for composites and
    /// the empty set.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
    }

    /// Look a capability up by its stable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(flag, _)| *flag)
    }

    /// Names of the capabilities in this set, in registration order.
    #[must_use]
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMES
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for WidgetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in self.names() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_kit_registers_exactly_the_board_components() {
        let expected = WidgetSet::LAYOUT
            | WidgetSet::HEADER
            | WidgetSet::TOOLBAR
            | WidgetSet::TOOLBAR_TITLE
            | WidgetSet::PAGE
            | WidgetSet::PAGE_CONTAINER
            | WidgetSet::TABLE
            | WidgetSet::TABLE_CELL
            | WidgetSet::CARD
            | WidgetSet::CARD_SECTION
            | WidgetSet::CHIP
            | WidgetSet::ICON
            | WidgetSet::SPACE
            | WidgetSet::SPINNER;
        assert_eq!(WidgetSet::BOARD_KIT, expected);
        assert_eq!(WidgetSet::BOARD_KIT.iter().count(), 14);
    }

    #[test]
    fn table_and_card_are_registered() {
        assert!(WidgetSet::BOARD_KIT.contains(WidgetSet::TABLE));
        assert!(WidgetSet::BOARD_KIT.contains(WidgetSet::CARD));
    }

    #[test]
    fn dialog_ships_unregistered() {
        assert!(WidgetSet::all().contains(WidgetSet::DIALOG));
        assert!(!WidgetSet::BOARD_KIT.contains(WidgetSet::DIALOG));
    }

    #[test]
    fn catalog_is_the_kit_plus_dialog() {
        assert_eq!(
            WidgetSet::all(),
            WidgetSet::BOARD_KIT.union(WidgetSet::DIALOG)
        );
    }

    #[test]
    fn names_round_trip_across_the_catalog() {
        for flag in WidgetSet::all().iter() {
            let name = flag.name().expect("every capability carries a name");
            assert_eq!(WidgetSet::from_name(name), Some(flag));
        }
        assert_eq!(WidgetSet::from_name("drawer"), None);
        assert_eq!(WidgetSet::BOARD_KIT.name(), None);
    }

    #[test]
    fn display_lists_names_in_registration_order() {
        assert_eq!(
            (WidgetSet::TABLE | WidgetSet::CARD).to_string(),
            "table, card"
        );
        assert_eq!(
            WidgetSet::BOARD_KIT.to_string(),
            "layout, header, toolbar, toolbar-title, page, page-container, \
             table, table-cell, card, card-section, chip, icon, space, spinner"
        );
    }
}
