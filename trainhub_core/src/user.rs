use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// What someone is allowed to do, and which dashboard they land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages companies, programs, and every kind of user.
    Admin,

    /// Like an admin, but can only create participants.
    AssistantAdmin,

    /// Runs sessions and creates participants.
    Coordinator,

    /// Teaches sessions and fills in trainer checklists.
    Trainer,

    /// Reviews training reports.
    Supervisor,

    /// A supervisor on the client company's side.
    PicSupervisor,

    /// Takes tests, checklists, and feedback.
    Participant,

    /// A role this client doesn't know about yet.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Route of the dashboard the web UI sends this role to after login.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::AssistantAdmin => "/assistant-admin",
            Self::Coordinator => "/coordinator",
            Self::Trainer => "/trainer",
            Self::Supervisor | Self::PicSupervisor => "/supervisor",
            Self::Participant => "/participant",
            Self::Unknown => "/dashboard",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Admin => "admin",
            Self::AssistantAdmin => "assistant admin",
            Self::Coordinator => "coordinator",
            Self::Trainer => "trainer",
            Self::Supervisor => "supervisor",
            Self::PicSupervisor => "PIC supervisor",
            Self::Participant => "participant",
            Self::Unknown => "unknown role",
        };

        f.write_str(name)
    }
}

/// A user as the backend describes them. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque ID
    pub id: String,

    /// Email address (participants get a generated one if they have none)
    pub email: String,

    /// Display name
    pub full_name: String,

    /// National identity-card number. Also usable as a login identifier.
    pub id_number: String,

    /// What they can do
    pub role: Role,

    /// Which company they belong to, if any
    #[serde(default)]
    pub company_id: Option<String>,

    /// Where they're based
    #[serde(default)]
    pub location: Option<String>,

    /// Contact number
    #[serde(default)]
    pub phone_number: Option<String>,

    /// Inactive accounts can't log in
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

/// Accounts are active unless the backend says otherwise.
fn active_by_default() -> bool {
    true
}
