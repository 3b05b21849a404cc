/// The user feature slice: who is signed in and whether the name is masked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserState {
    pub current_user: String,
    pub show_mask: bool,
}
