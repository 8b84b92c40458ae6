use raylib::prelude::KeyboardKey;

/// Every way a user can ask the deck to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    Previous,
    Next,
    Breadcrumb(usize),
    Key(KeyboardKey),
}

/// What an input asks the controller to do, once keys are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Previous,
    Next,
    GoTo(usize),
}

impl NavInput {
    /// Arrow keys map to previous/next; any other key is ignored.
    pub fn request(self) -> Option<NavRequest> {
        match self {
            NavInput::Previous => Some(NavRequest::Previous),
            NavInput::Next => Some(NavRequest::Next),
            NavInput::Breadcrumb(index) => Some(NavRequest::GoTo(index)),
            NavInput::Key(KeyboardKey::KEY_LEFT) => Some(NavRequest::Previous),
            NavInput::Key(KeyboardKey::KEY_RIGHT) => Some(NavRequest::Next),
            NavInput::Key(_) => None,
        }
    }
}
