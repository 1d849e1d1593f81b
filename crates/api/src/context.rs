use boxhub_auth::Identity;

/// Identity context for a request.
///
/// Stored in the request extensions by the session layer (or by the identity
/// gate's dev bypass) and read by the gates and handlers. At most one per
/// request; absent means the request is anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    identity: Identity,
}

impl IdentityContext {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn into_identity(self) -> Identity {
        self.identity
    }
}
