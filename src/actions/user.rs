use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserAction {
    #[serde(rename = "[User] Toggle User Mask")]
    ToggleUserMask,
    #[serde(rename = "[User] Change Username")]
    ChangeUsername { username: String },
}

impl UserAction {
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::ToggleUserMask => "[User] Toggle User Mask",
            Self::ChangeUsername { .. } => "[User] Change Username",
        }
    }
}
