use super::Reducer;
use crate::actions::{AppAction, UserAction};
use crate::error::ReduceError;
use crate::state::UserState;

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = AppAction;

    fn reduce(state: &UserState, action: &AppAction) -> Result<UserState, ReduceError> {
        let AppAction::User(action) = action else {
            return Ok(state.clone());
        };

        Ok(match action {
            UserAction::ToggleUserMask => UserState {
                show_mask: !state.show_mask,
                ..state.clone()
            },
            UserAction::ChangeUsername { username } => UserState {
                current_user: username.clone(),
                ..state.clone()
            },
        })
    }
}
