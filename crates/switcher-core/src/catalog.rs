//! Built-in demo workspaces.
//!
//! The switcher has no server; this catalog is the default data set.

use crate::workspace::{Member, Workspace, WorkspaceId, WorkspaceKind};

struct Seed {
    id: &'static str,
    name: &'static str,
    kind: WorkspaceKind,
    creator: &'static str,
    team_name: Option<&'static str>,
    is_favorite: bool,
    is_active: bool,
    last_activity: &'static str,
    has_notifications: bool,
    description: &'static str,
    collections_count: u32,
    /// (member id, display name, avatar seed)
    members: &'static [(&'static str, &'static str, &'static str)],
}

impl Seed {
    fn build(&self) -> Workspace {
        let members: Vec<Member> = self
            .members
            .iter()
            .map(|(id, name, seed)| Member::new(*id, *name, seed))
            .collect();

        Workspace {
            id: WorkspaceId::from(self.id),
            name: self.name.to_string(),
            kind: self.kind,
            creator: self.creator.to_string(),
            team_name: self.team_name.map(str::to_string),
            is_favorite: self.is_favorite,
            is_active: self.is_active,
            member_count: members.len() as u32,
            last_activity: self.last_activity.to_string(),
            has_notifications: self.has_notifications,
            description: self.description.to_string(),
            collections_count: self.collections_count,
            members,
        }
    }
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "e81c15a3-af32-4c05-8bb8-d5f27e5ac9d1",
        name: "API Team Development",
        kind: WorkspaceKind::Team,
        creator: "John Doe",
        team_name: None,
        is_favorite: true,
        is_active: false,
        last_activity: "viewed 2 hours ago",
        has_notifications: true,
        description: "Main API development workspace for the product team",
        collections_count: 12,
        members: &[
            ("u1", "John Doe", "john-doe"),
            ("u2", "Jane Smith", "jane-smith"),
            ("u3", "Mike Johnson", "mike-johnson"),
            ("u4", "Sarah Wilson", "sarah-wilson"),
            ("u5", "Tom Brown", "tom-brown"),
            ("u6", "Lisa Davis", "lisa-davis"),
            ("u7", "Chris Lee", "chris-lee"),
            ("u8", "Amy Chen", "amy-chen"),
        ],
    },
    Seed {
        id: "f2b8c4d6-1e9a-4f5c-9b7e-3a8d5c2f1b9e",
        name: "My Workspace",
        kind: WorkspaceKind::Personal,
        creator: "You",
        team_name: None,
        is_favorite: true,
        is_active: true,
        last_activity: "current workspace",
        has_notifications: false,
        description: "Personal workspace for individual projects",
        collections_count: 5,
        members: &[("me", "You", "current-user")],
    },
    Seed {
        id: "a7d4e8f2-5c3b-4e7a-8f9d-2b5e1c4a7f3d",
        name: "Backend Documentation",
        kind: WorkspaceKind::Team,
        creator: "Sarah Smith",
        team_name: None,
        is_favorite: true,
        is_active: false,
        last_activity: "viewed 1 day ago",
        has_notifications: false,
        description: "Comprehensive backend API documentation",
        collections_count: 8,
        members: &[
            ("u9", "Sarah Smith", "sarah-smith-2"),
            ("u10", "David Kim", "david-kim"),
            ("u11", "Emma Wilson", "emma-wilson"),
            ("u12", "Alex Thompson", "alex-thompson"),
        ],
    },
    Seed {
        id: "b9f5e2a8-7d1c-4b6e-9a3f-5e8d2c4b7a1e",
        name: "Client Integration Project",
        kind: WorkspaceKind::Team,
        creator: "Mike Johnson",
        team_name: None,
        is_favorite: false,
        is_active: false,
        last_activity: "viewed 3 hours ago",
        has_notifications: true,
        description: "Integration testing with client systems",
        collections_count: 15,
        members: &[
            ("u13", "Mike Johnson", "mike-johnson-2"),
            ("u14", "Rachel Green", "rachel-green"),
            ("u15", "Paul Miller", "paul-miller"),
            ("u16", "Anna Davis", "anna-davis"),
            ("u17", "Joe Wilson", "joe-wilson"),
        ],
    },
    Seed {
        id: "c3a6d9e4-2f8b-4c5e-7a9d-1e4b8f2c6a5d",
        name: "GraphQL Best Practices",
        kind: WorkspaceKind::Public,
        creator: "Apollo Team",
        team_name: Some("Platform Core"),
        is_favorite: false,
        is_active: false,
        last_activity: "1 week ago",
        has_notifications: false,
        description: "Community-driven GraphQL best practices and examples",
        collections_count: 23,
        members: &[
            ("u18", "Apollo Team", "apollo-team"),
            ("u19", "GraphQL Community", "graphql-community"),
        ],
    },
    Seed {
        id: "d8e5b2f7-4a9c-4e1d-8b6f-3c7a9e2d5f8b",
        name: "DevKitchen",
        kind: WorkspaceKind::Private,
        creator: "Alex Chen",
        team_name: Some("Engineering Team"),
        is_favorite: false,
        is_active: false,
        last_activity: "5 days ago",
        has_notifications: false,
        description: "Alex's private workspace for experimental features and cooking up new ideas",
        collections_count: 3,
        members: &[
            ("u20", "Alex Chen", "alex-chen"),
            ("u21", "Maya Patel", "maya-patel"),
        ],
    },
    Seed {
        id: "f5a8d3e7-9c2b-4f1e-8a6d-3b7e9f2a5c8d",
        name: "Mobile App Testing",
        kind: WorkspaceKind::Team,
        creator: "Jessica Park",
        team_name: None,
        is_favorite: false,
        is_active: false,
        last_activity: "viewed 2 days ago",
        has_notifications: true,
        description: "Mobile application testing and quality assurance",
        collections_count: 18,
        members: &[
            ("u22", "Jessica Park", "jessica-park"),
            ("u23", "Marcus Lee", "marcus-lee"),
            ("u24", "Sofia Rodriguez", "sofia-rodriguez"),
            ("u25", "Kevin Chang", "kevin-chang"),
            ("u26", "Diana Foster", "diana-foster"),
            ("u27", "Ryan Walsh", "ryan-walsh"),
        ],
    },
    Seed {
        id: "g7b9f4e1-5d8a-4c2f-9e3b-7a1f5e8b4d7g",
        name: "Security Compliance",
        kind: WorkspaceKind::Team,
        creator: "Robert Kumar",
        team_name: None,
        is_favorite: true,
        is_active: false,
        last_activity: "viewed 1 hour ago",
        has_notifications: false,
        description: "Security testing and compliance verification",
        collections_count: 25,
        members: &[
            ("u28", "Robert Kumar", "robert-kumar"),
            ("u29", "Elena Volkov", "elena-volkov"),
            ("u30", "James Mitchell", "james-mitchell"),
            ("u31", "Priya Sharma", "priya-sharma"),
        ],
    },
    Seed {
        id: "h8c1f6e9-4b7d-4e5a-8f2c-6a9e1f4b7c8h",
        name: "Payment Gateway",
        kind: WorkspaceKind::Private,
        creator: "Finance Team",
        team_name: None,
        is_favorite: false,
        is_active: false,
        last_activity: "viewed 3 weeks ago",
        has_notifications: false,
        description: "Payment processing and financial integrations",
        collections_count: 14,
        members: &[
            ("u32", "Finance Team", "finance-team"),
            ("u33", "Amanda Clark", "amanda-clark"),
            ("u34", "David Zhang", "david-zhang"),
        ],
    },
    Seed {
        id: "i9d2g7f1-6e8c-4f9b-7a5d-8c2f6g9d2f1i",
        name: "Data Analytics Platform",
        kind: WorkspaceKind::Public,
        creator: "Analytics Team",
        team_name: None,
        is_favorite: false,
        is_active: false,
        last_activity: "viewed 6 hours ago",
        has_notifications: true,
        description: "Data processing and analytics APIs",
        collections_count: 32,
        members: &[
            ("u35", "Analytics Team", "analytics-team"),
            ("u36", "Maria Santos", "maria-santos"),
            ("u37", "Chen Wei", "chen-wei"),
            ("u38", "Ahmed Hassan", "ahmed-hassan"),
            ("u39", "Lisa Thompson", "lisa-thompson"),
            ("u40", "Carlos Mendez", "carlos-mendez"),
            ("u41", "Yuki Tanaka", "yuki-tanaka"),
            ("u42", "Nina Petrov", "nina-petrov"),
        ],
    },
    Seed {
        id: "j1e3h8g2-7f9d-4a6c-8b4e-9d3g7h1e8g2j",
        name: "Legacy System Migration",
        kind: WorkspaceKind::Team,
        creator: "Infrastructure Team",
        team_name: None,
        is_favorite: false,
        is_active: false,
        last_activity: "viewed 4 days ago",
        has_notifications: false,
        description: "Migrating legacy systems to modern infrastructure",
        collections_count: 11,
        members: &[
            ("u43", "Infrastructure Team", "infrastructure-team"),
            ("u44", "Michael Brown", "michael-brown"),
            ("u45", "Sarah Johnson", "sarah-johnson"),
            ("u46", "Antonio Garcia", "antonio-garcia"),
            ("u47", "Rachel Cohen", "rachel-cohen"),
        ],
    },
    Seed {
        id: "k2f4i9h3-8a1e-4b7d-9c5f-1e4h9i2f4h3k",
        name: "Customer Support API",
        kind: WorkspaceKind::Team,
        creator: "Support Team",
        team_name: None,
        is_favorite: false,
        is_active: false,
        last_activity: "viewed 1 day ago",
        has_notifications: false,
        description: "Customer support and ticketing system APIs",
        collections_count: 9,
        members: &[
            ("u48", "Support Team", "support-team"),
            ("u49", "Lauren Adams", "lauren-adams"),
            ("u50", "Mark Wilson", "mark-wilson"),
            ("u51", "Jenny Liu", "jenny-liu"),
        ],
    },
];

const RECENT_SEARCHES: &[&str] = &["API", "documentation", "client", "graphql"];

/// The demo workspaces in catalog order.
pub fn builtin_workspaces() -> Vec<Workspace> {
    SEEDS.iter().map(Seed::build).collect()
}

/// Recent searches shown before the user has searched anything.
pub fn builtin_recent_searches() -> Vec<String> {
    RECENT_SEARCHES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        let workspaces = builtin_workspaces();
        assert_eq!(workspaces.len(), 12);

        let ids: HashSet<_> = workspaces.iter().map(|w| w.id.clone()).collect();
        assert_eq!(ids.len(), workspaces.len());

        let active: Vec<_> = workspaces.iter().filter(|w| w.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "My Workspace");
    }

    #[test]
    fn test_member_count_matches_members() {
        for ws in builtin_workspaces() {
            assert_eq!(ws.member_count as usize, ws.members.len(), "{}", ws.name);
        }
    }

    #[test]
    fn test_recent_searches() {
        assert_eq!(
            builtin_recent_searches(),
            vec!["API", "documentation", "client", "graphql"]
        );
    }
}
