//! Workspace and Member records.

use serde::{Deserialize, Serialize};
use std::fmt;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x";
const AVATAR_BACKGROUNDS: &str = "b6e3f4,c0aede,d1d4f9,ffd5dc,ffdfbf";

/// Number of id characters shown on the preview card.
const SHORT_ID_LEN: usize = 16;

/// Build the avatar image URL for a seed.
///
/// The URL is only rendered as text; nothing fetches it.
pub fn avatar_url(seed: &str) -> String {
    format!(
        "{}/avataaars/svg?seed={}&backgroundColor={}",
        AVATAR_BASE_URL,
        urlencoding::encode(seed),
        AVATAR_BACKGROUNDS
    )
}

fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Stable workspace identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(pub String);

impl WorkspaceId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl From<String> for WorkspaceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for WorkspaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visibility class of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceKind {
    Personal,
    Private,
    Team,
    Public,
}

impl WorkspaceKind {
    /// Icon glyph shown in rows and on the preview card.
    pub fn icon(self) -> &'static str {
        match self {
            WorkspaceKind::Personal | WorkspaceKind::Private => "🔒",
            WorkspaceKind::Team => "👥",
            WorkspaceKind::Public => "🌐",
        }
    }
}

/// A workspace member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
}

impl Member {
    /// Create a member whose avatar is derived from `seed`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, seed: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar_url(seed),
        }
    }

    /// The current user.
    pub fn you() -> Self {
        Self::new("me", "You", "current-user")
    }

    /// First letter of each word, e.g. "Jane Smith" -> "JS".
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// A workspace record.
///
/// Field names follow the demo data layout so seed files can be written
/// in the same shape (`isFavorite`, `lastActivity`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WorkspaceKind,
    pub creator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub last_activity: String,
    #[serde(default)]
    pub has_notifications: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub collections_count: u32,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Workspace {
    /// Record for a workspace the user just created.
    pub fn new_personal(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: WorkspaceId::generate(),
            description: format!("New workspace: {}", name),
            name,
            kind: WorkspaceKind::Personal,
            creator: "You".to_string(),
            team_name: None,
            is_favorite: false,
            is_active: false,
            member_count: 1,
            last_activity: "now".to_string(),
            has_notifications: false,
            collections_count: 0,
            members: vec![Member::you()],
        }
    }

    /// Secondary line shown under the name in list rows.
    pub fn subtitle(&self) -> String {
        if self.is_active {
            "current workspace".to_string()
        } else if let Some(team) = &self.team_name {
            format!("{} • viewed {}", team, self.last_activity)
        } else {
            self.last_activity.clone()
        }
    }

    /// Truncated id for the preview card.
    pub fn short_id(&self) -> String {
        let id = self.id.as_ref();
        if id.chars().count() <= SHORT_ID_LEN {
            id.to_string()
        } else {
            let head: String = id.chars().take(SHORT_ID_LEN).collect();
            format!("{}...", head)
        }
    }

    /// Name shown as the workspace owner.
    pub fn owner_name(&self) -> &str {
        self.members
            .first()
            .map(|m| m.name.as_str())
            .unwrap_or(&self.creator)
    }

    /// Owner initials for the avatar fallback.
    pub fn owner_initials(&self) -> String {
        initials(self.owner_name())
    }

    /// "N collection" / "N collections".
    pub fn collections_label(&self) -> String {
        let suffix = if self.collections_count == 1 { "" } else { "s" };
        format!("{} collection{}", self.collections_count, suffix)
    }

    /// Whether the "remove from list" action is offered.
    pub fn can_remove(&self) -> bool {
        !self.is_active || self.is_favorite
    }

    /// Case-insensitive substring match on name or creator.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.creator.to_lowercase().contains(needle)
    }
}

/// Overlapping avatar stack with an overflow counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacePile<'a> {
    pub visible: &'a [Member],
    pub overflow: usize,
}

impl<'a> FacePile<'a> {
    pub fn new(members: &'a [Member], max_visible: usize) -> Self {
        let shown = members.len().min(max_visible);
        Self {
            visible: &members[..shown],
            overflow: members.len() - shown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Workspace {
        Workspace {
            id: WorkspaceId::from("e81c15a3-af32-4c05-8bb8-d5f27e5ac9d1"),
            name: "API Team Development".to_string(),
            kind: WorkspaceKind::Team,
            creator: "John Doe".to_string(),
            team_name: None,
            is_favorite: true,
            is_active: false,
            member_count: 2,
            last_activity: "viewed 2 hours ago".to_string(),
            has_notifications: true,
            description: "Main API development workspace".to_string(),
            collections_count: 12,
            members: vec![
                Member::new("u1", "John Doe", "john-doe"),
                Member::new("u2", "Jane Smith", "jane-smith"),
            ],
        }
    }

    #[test]
    fn test_avatar_url_encodes_seed() {
        let url = avatar_url("john doe");
        assert!(url.starts_with("https://api.dicebear.com/7.x/avataaars/svg?seed=john%20doe"));
        assert!(url.ends_with("backgroundColor=b6e3f4,c0aede,d1d4f9,ffd5dc,ffdfbf"));
    }

    #[test]
    fn test_initials() {
        assert_eq!(Member::new("u", "Jane Smith", "x").initials(), "JS");
        assert_eq!(Member::you().initials(), "Y");
    }

    #[test]
    fn test_subtitle_variants() {
        let mut ws = sample();
        assert_eq!(ws.subtitle(), "viewed 2 hours ago");

        ws.team_name = Some("Platform Core".to_string());
        ws.last_activity = "1 week ago".to_string();
        assert_eq!(ws.subtitle(), "Platform Core • viewed 1 week ago");

        ws.is_active = true;
        assert_eq!(ws.subtitle(), "current workspace");
    }

    #[test]
    fn test_short_id() {
        let ws = sample();
        assert_eq!(ws.short_id(), "e81c15a3-af32-4c...");

        let mut short = sample();
        short.id = WorkspaceId::from("1700000000000");
        assert_eq!(short.short_id(), "1700000000000");
    }

    #[test]
    fn test_owner_falls_back_to_creator() {
        let mut ws = sample();
        assert_eq!(ws.owner_name(), "John Doe");
        ws.members.clear();
        assert_eq!(ws.owner_name(), "John Doe");
        assert_eq!(ws.owner_initials(), "JD");
    }

    #[test]
    fn test_collections_label() {
        let mut ws = sample();
        assert_eq!(ws.collections_label(), "12 collections");
        ws.collections_count = 1;
        assert_eq!(ws.collections_label(), "1 collection");
        ws.collections_count = 0;
        assert_eq!(ws.collections_label(), "0 collections");
    }

    #[test]
    fn test_can_remove() {
        let mut ws = sample();
        ws.is_favorite = false;
        assert!(ws.can_remove());

        ws.is_active = true;
        assert!(!ws.can_remove());

        ws.is_favorite = true;
        assert!(ws.can_remove());
    }

    #[test]
    fn test_matches_name_or_creator() {
        let ws = sample();
        assert!(ws.matches_lowercase("api"));
        assert!(ws.matches_lowercase("doe"));
        assert!(!ws.matches_lowercase("graphql"));
    }

    #[test]
    fn test_new_personal() {
        let ws = Workspace::new_personal("Scratch");
        assert_eq!(ws.kind, WorkspaceKind::Personal);
        assert_eq!(ws.creator, "You");
        assert_eq!(ws.description, "New workspace: Scratch");
        assert_eq!(ws.last_activity, "now");
        assert!(!ws.is_active);
        assert!(!ws.is_favorite);
        assert_eq!(ws.members, vec![Member::you()]);
        assert_ne!(ws.id, Workspace::new_personal("Scratch").id);
    }

    #[test]
    fn test_face_pile() {
        let ws = sample();
        let pile = FacePile::new(&ws.members, 3);
        assert_eq!(pile.visible.len(), 2);
        assert_eq!(pile.overflow, 0);

        let pile = FacePile::new(&ws.members, 1);
        assert_eq!(pile.visible.len(), 1);
        assert_eq!(pile.overflow, 1);
    }

    #[test]
    fn test_deserialize_demo_shape() {
        let json = r#"{
            "id": "w1",
            "name": "DevKitchen",
            "type": "private",
            "creator": "Alex Chen",
            "teamName": "Engineering Team",
            "isFavorite": false,
            "isActive": false,
            "memberCount": 2,
            "lastActivity": "5 days ago",
            "hasNotifications": false,
            "description": "Experiments",
            "collectionsCount": 3,
            "members": [{ "id": "u20", "name": "Alex Chen" }]
        }"#;
        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(ws.kind, WorkspaceKind::Private);
        assert_eq!(ws.team_name.as_deref(), Some("Engineering Team"));
        assert_eq!(ws.members[0].avatar, "");
    }
}
