//! User roles and the navigation they unlock.

use std::fmt;

use crate::models::User;

/// Role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Account owner; sees everything including team management.
    Owner,
    /// Fleet manager.
    Manager,
    /// Supervisor with the narrowest view.
    Supervisor,
}

impl UserRole {
    /// Parse the wire role. Matching ignores case; unknown values give
    /// [`UserRole::Supervisor`].
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "owner" => Self::Owner,
            "manager" => Self::Manager,
            _ => Self::Supervisor,
        }
    }

    /// Lower-case wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Manager => "manager",
            Self::Supervisor => "supervisor",
        }
    }

    /// Proxied path of the dashboard for this role.
    #[must_use]
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Self::Owner => "/api/dashboard/owner",
            Self::Manager => "/api/dashboard/manager",
            Self::Supervisor => "/api/dashboard/supervisor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `user` holds any of `roles`. No user means no role.
#[must_use]
pub fn has_role(user: Option<&User>, roles: &[UserRole]) -> bool {
    user.is_some_and(|user| roles.contains(&user.role()))
}

/// Whether `user` is the account owner.
#[must_use]
pub fn is_owner(user: Option<&User>) -> bool {
    has_role(user, &[UserRole::Owner])
}

/// Whether `user` is an owner or a manager.
#[must_use]
pub fn is_manager_or_above(user: Option<&User>) -> bool {
    has_role(user, &[UserRole::Owner, UserRole::Manager])
}

/// Dashboard path for `role`.
#[must_use]
pub const fn dashboard_path(role: UserRole) -> &'static str {
    role.dashboard_path()
}

/// Top-level console section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSection {
    Dashboard,
    Vehicles,
    Drivers,
    Trips,
    Reports,
    Team,
    Settings,
}

impl NavSection {
    const ORDERED: [Self; 7] = [
        Self::Dashboard,
        Self::Vehicles,
        Self::Drivers,
        Self::Trips,
        Self::Reports,
        Self::Team,
        Self::Settings,
    ];

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Vehicles => "Vehicles",
            Self::Drivers => "Drivers",
            Self::Trips => "Trips",
            Self::Reports => "Reports",
            Self::Team => "Team",
            Self::Settings => "Settings",
        }
    }

    /// Console route of the section.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Vehicles => "/vehicles",
            Self::Drivers => "/drivers",
            Self::Trips => "/trips",
            Self::Reports => "/reports",
            Self::Team => "/team",
            Self::Settings => "/settings",
        }
    }

    /// Whether `role` may open this section.
    #[must_use]
    pub fn visible_to(self, role: UserRole) -> bool {
        match self {
            Self::Team => role == UserRole::Owner,
            _ => true,
        }
    }
}

/// Sections `role` may open, in sidebar order.
#[must_use]
pub fn nav_sections(role: UserRole) -> Vec<NavSection> {
    NavSection::ORDERED
        .into_iter()
        .filter(|section| section.visible_to(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user_with_role(role: &str) -> User {
        User {
            role: role.to_owned(),
            ..User::default()
        }
    }

    #[rstest]
    #[case("owner", UserRole::Owner)]
    #[case("OWNER", UserRole::Owner)]
    #[case(" Manager ", UserRole::Manager)]
    #[case("supervisor", UserRole::Supervisor)]
    #[case("driver", UserRole::Supervisor)]
    #[case("", UserRole::Supervisor)]
    fn parses_roles_leniently(#[case] raw: &str, #[case] expected: UserRole) {
        assert_eq!(UserRole::from_wire(raw), expected);
    }

    #[rstest]
    #[case("owner", true, true)]
    #[case("manager", false, true)]
    #[case("supervisor", false, false)]
    fn role_predicates(#[case] raw: &str, #[case] owner: bool, #[case] manager_or_above: bool) {
        let user = user_with_role(raw);
        assert_eq!(is_owner(Some(&user)), owner);
        assert_eq!(is_manager_or_above(Some(&user)), manager_or_above);
    }

    #[test]
    fn anonymous_has_no_role() {
        assert!(!has_role(None, &[UserRole::Owner, UserRole::Manager, UserRole::Supervisor]));
    }

    #[test]
    fn team_section_is_owner_only() {
        assert!(nav_sections(UserRole::Owner).contains(&NavSection::Team));
        for role in [UserRole::Manager, UserRole::Supervisor] {
            let sections = nav_sections(role);
            assert!(!sections.contains(&NavSection::Team));
            assert_eq!(sections.len(), 6);
        }
    }

    #[test]
    fn dashboard_paths_follow_role() {
        assert_eq!(dashboard_path(UserRole::Owner), "/api/dashboard/owner");
        assert_eq!(dashboard_path(UserRole::Manager), "/api/dashboard/manager");
        assert_eq!(
            dashboard_path(UserRole::Supervisor),
            "/api/dashboard/supervisor"
        );
    }
}
