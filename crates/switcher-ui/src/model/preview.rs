//! Preview card placement and content.

use switcher_core::{FacePile, Workspace};

/// Horizontal gap between a row and its preview card, in pixels.
pub const PREVIEW_GAP: f32 = 24.0;

/// Members drawn in the face pile before the "+N" counter.
const FACE_PILE_MAX: usize = 3;

/// Window-space bounds of a list row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RowBounds {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Where the card's anchor point goes.
///
/// The card is vertically centred on `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPlacement {
    pub left: f32,
    pub top: f32,
}

impl PreviewPlacement {
    /// Place the card to the right of `row`, centred on its midline.
    pub fn beside(row: RowBounds) -> Self {
        Self {
            left: row.right() + PREVIEW_GAP,
            top: row.top + row.height / 2.0,
        }
    }
}

/// Text content of a preview card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard<'a> {
    pub icon: &'static str,
    pub name: &'a str,
    pub description: &'a str,
    pub last_updated: String,
    pub owner_initials: String,
    pub owner_name: &'a str,
    pub id_line: String,
    pub face_pile: FacePile<'a>,
    pub collections: String,
}

impl<'a> PreviewCard<'a> {
    pub fn new(ws: &'a Workspace) -> Self {
        Self {
            icon: ws.kind.icon(),
            name: &ws.name,
            description: &ws.description,
            last_updated: format!("Last updated {}", ws.last_activity),
            owner_initials: ws.owner_initials(),
            owner_name: ws.owner_name(),
            id_line: format!("Workspace ID: {}", ws.short_id()),
            face_pile: FacePile::new(&ws.members, FACE_PILE_MAX),
            collections: ws.collections_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switcher_core::{builtin_workspaces, Member};

    #[test]
    fn test_placement_beside_row() {
        let row = RowBounds {
            left: 100.0,
            top: 200.0,
            width: 400.0,
            height: 56.0,
        };

        let placement = PreviewPlacement::beside(row);
        assert_eq!(placement.left, 524.0);
        assert_eq!(placement.top, 228.0);
    }

    #[test]
    fn test_card_content() {
        let ws = builtin_workspaces()
            .into_iter()
            .find(|w| w.name == "API Team Development")
            .unwrap();
        let card = PreviewCard::new(&ws);

        assert_eq!(card.icon, "👥");
        assert_eq!(card.name, "API Team Development");
        assert!(card.last_updated.starts_with("Last updated "));
        assert_eq!(card.owner_name, "John Doe");
        assert_eq!(card.owner_initials, "JD");
        assert!(card.id_line.starts_with("Workspace ID: "));
        assert_eq!(card.collections, ws.collections_label());
    }

    #[test]
    fn test_card_face_pile_overflow() {
        let mut ws = Workspace::new_personal("Crowd");
        ws.members = (0..5)
            .map(|i| Member::new(format!("u{i}"), format!("User {i}"), "seed"))
            .collect();

        let card = PreviewCard::new(&ws);
        assert_eq!(card.face_pile.visible.len(), 3);
        assert_eq!(card.face_pile.overflow, 2);
    }
}
