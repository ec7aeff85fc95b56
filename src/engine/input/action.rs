// Game action definitions

/// Edge-triggered actions the controller reacts to.
///
/// Movement is not an action: it is an analog axis the host sets every
/// tick on [`super::PlayerInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Short burst of speed in the current move direction
    Dash,
    /// Melee attack; repeated presses chain the combo
    Attack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Dash, Action::Dash);
        assert_ne!(Action::Dash, Action::Attack);
    }
}
