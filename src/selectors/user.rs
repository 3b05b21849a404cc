use crate::state::UserState;

pub fn select_show_mask(state: &UserState) -> bool {
    state.show_mask
}

pub fn select_current_user(state: &UserState) -> String {
    state.current_user.clone()
}
