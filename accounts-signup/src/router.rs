/// Navigation targets the sign-up flow can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The "check your email" step shown after a successful sign-up.
    Confirm,
    /// Terminal step for users who cannot create an account.
    CannotCreateAccount,
}

impl Route {
    /// Stable route name known to the surrounding app's router.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::CannotCreateAccount => "cannot_create_account",
        }
    }
}

/// Screen navigation, owned by the surrounding app.
pub trait Router: std::fmt::Debug {
    fn navigate(&self, route: Route);
}
