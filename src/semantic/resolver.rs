//! Userlist resolution: name lookups and the grouping direction
//!
//! HAProxy lets a userlist declare membership on either side: `user x groups a,b`
//! or `group a users x,y`. [`UserlistSection::grouping`] decides which side the
//! document treats as authoritative. Names are compared by exact string
//! equality; a name cited on one side without a declaring line is not an error.

use crate::parser::ast::{GroupLine, UserLine, UserlistEntry, UserlistSection};
use tracing::trace;

/// Which declaration side carries the user/group membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// `user <name> ... groups a,b`
    User,
    /// `group <name> users x,y`
    Group,
}

impl UserlistSection {
    /// `user` lines in declaration order
    pub fn users(&self) -> impl Iterator<Item = UserLine> {
        self.entries().filter_map(|entry| match entry {
            UserlistEntry::User(user) => Some(user),
            _ => None,
        })
    }

    /// `group` lines in declaration order
    pub fn groups(&self) -> impl Iterator<Item = GroupLine> {
        self.entries().filter_map(|entry| match entry {
            UserlistEntry::Group(group) => Some(group),
            _ => None,
        })
    }

    /// First user with this name
    pub fn user(&self, name: &str) -> Option<UserLine> {
        self.users().find(|u| u.name() == name)
    }

    /// First group with this name
    pub fn group(&self, name: &str) -> Option<GroupLine> {
        self.groups().find(|g| g.name() == name)
    }

    /// Decide whether membership is declared on user lines or group lines.
    pub fn grouping(&self) -> Grouping {
        let mut user_count = 0;
        let mut users_with_groups = 0;
        for user in self.users() {
            user_count += 1;
            if !user.groups().is_empty() {
                users_with_groups += 1;
            }
        }

        let mut group_count = 0;
        let mut groups_with_users = 0;
        for group in self.groups() {
            group_count += 1;
            if !group.users().is_empty() {
                groups_with_users += 1;
            }
        }

        let grouping = decide_grouping(
            MembershipCounts {
                declared: user_count,
                with_members: users_with_groups,
            },
            MembershipCounts {
                declared: group_count,
                with_members: groups_with_users,
            },
        );
        trace!(
            userlist = %self.name(),
            user_count,
            users_with_groups,
            group_count,
            groups_with_users,
            ?grouping,
            "resolved userlist grouping"
        );
        grouping
    }
}

/// How many lines of one kind exist and how many of them list members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MembershipCounts {
    pub declared: usize,
    pub with_members: usize,
}

impl MembershipCounts {
    /// Share of lines with members, truncated to an integer
    fn truncated_share(self) -> usize {
        self.with_members.checked_div(self.declared).unwrap_or(0)
    }
}

/// The grouping heuristic over plain counts.
///
/// When both sides list the same number of memberships the comparison falls
/// back to each side's share, using truncating integer division. Ties go to
/// [`Grouping::Group`].
pub fn decide_grouping(users: MembershipCounts, groups: MembershipCounts) -> Grouping {
    let (user_side, group_side) = if users.with_members == groups.with_members {
        (users.truncated_share(), groups.truncated_share())
    } else {
        (users.with_members, groups.with_members)
    };

    if user_side > group_side {
        Grouping::User
    } else {
        Grouping::Group
    }
}
