use crate::Credential;

/// Notification emitted by the identity provider's client whenever the
/// current user's token changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenChange {
    SignedIn(Credential),
    /// Silent renewal on the provider's own cadence.
    Renewed(Credential),
    SignedOut,
}

impl TokenChange {
    /// The credential to forward to the server, `None` when signed out.
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            TokenChange::SignedIn(credential) | TokenChange::Renewed(credential) => {
                Some(credential)
            }
            TokenChange::SignedOut => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TokenChange::SignedIn(_) => "signed_in",
            TokenChange::Renewed(_) => "renewed",
            TokenChange::SignedOut => "signed_out",
        }
    }
}
