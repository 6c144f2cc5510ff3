//! Team credits: ordered `{ role, names }` pairs attached to a project.
//!
//! [`TeamEditor`] holds the in-progress credits of the project form. Members
//! and names may be blank while editing; [`clean_team`] strips the blanks
//! before anything is persisted.

use serde::{Deserialize, Serialize};

use crate::reorder::DragState;

/// One credit line, e.g. `Design: Ann, Bo`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamMember {
    pub role: String,
    pub names: Vec<String>,
}

impl TeamMember {
    pub fn new(role: impl Into<String>, names: &[&str]) -> Self {
        Self {
            role: role.into(),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Remove blank names, then drop members left with a blank role and no names.
///
/// Surviving names keep their original spelling and order; only
/// whitespace-only entries are removed.
pub fn clean_team(team: &[TeamMember]) -> Vec<TeamMember> {
    team.iter()
        .map(|member| TeamMember {
            role: member.role.clone(),
            names: member
                .names
                .iter()
                .filter(|name| !name.trim().is_empty())
                .cloned()
                .collect(),
        })
        .filter(|member| !member.role.trim().is_empty() || !member.names.is_empty())
        .collect()
}

/// In-memory editor for a project's team credits.
///
/// Index arguments that do not address an existing member or name are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamEditor {
    members: Vec<TeamMember>,
    drag: DragState,
}

impl TeamEditor {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self {
            members,
            drag: DragState::default(),
        }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Append an empty member with one blank name slot.
    pub fn add_member(&mut self) {
        self.members.push(TeamMember {
            role: String::new(),
            names: vec![String::new()],
        });
    }

    pub fn remove_member(&mut self, index: usize) {
        if index < self.members.len() {
            self.members.remove(index);
        }
    }

    pub fn set_role(&mut self, index: usize, role: impl Into<String>) {
        if let Some(member) = self.members.get_mut(index) {
            member.role = role.into();
        }
    }

    pub fn add_name(&mut self, team_index: usize) {
        if let Some(member) = self.members.get_mut(team_index) {
            member.names.push(String::new());
        }
    }

    pub fn set_name(&mut self, team_index: usize, name_index: usize, value: impl Into<String>) {
        if let Some(name) = self
            .members
            .get_mut(team_index)
            .and_then(|member| member.names.get_mut(name_index))
        {
            *name = value.into();
        }
    }

    /// Remove one name. Removing the last name leaves the member with an
    /// empty list; it is only dropped at submit time.
    pub fn remove_name(&mut self, team_index: usize, name_index: usize) {
        if let Some(member) = self.members.get_mut(team_index) {
            if name_index < member.names.len() {
                member.names.remove(name_index);
            }
        }
    }

    pub fn drag_start(&mut self, index: usize) {
        self.drag.start(index);
    }

    pub fn drag_over(&mut self, index: usize) -> bool {
        self.drag.over(&mut self.members, index)
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    #[cfg(test)]
    fn dragged_index(&self) -> Option<usize> {
        self.drag.source()
    }

    /// The credits as they will be submitted.
    pub fn cleaned(&self) -> Vec<TeamMember> {
        clean_team(&self.members)
    }
}
