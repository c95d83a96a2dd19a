use tracing::debug;

/// The closed set of roles a principal can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::Superadmin),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthzError {
    #[error("No authenticated principal")]
    Unauthenticated,
    #[error("Insufficient role")]
    Forbidden,
}

/// Authorization predicate used by every protected route.
///
/// Denies with `Unauthenticated` when no principal is present and `Forbidden`
/// when the principal's role is not one of the required roles. Pure predicate,
/// no mutation of the principal.
pub fn authorize(principal: Option<Role>, required: &[Role]) -> Result<(), AuthzError> {
    let role = principal.ok_or(AuthzError::Unauthenticated)?;
    if required.contains(&role) {
        debug!("Authorization granted for role: {}", role);
        Ok(())
    } else {
        debug!("Authorization denied for role: {}", role);
        Err(AuthzError::Forbidden)
    }
}
