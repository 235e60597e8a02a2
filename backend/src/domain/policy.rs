//! Object-level access policy for snippet mutations.
//!
//! The rule is deliberately tiny: safe (read-only) methods are always
//! allowed, any other method is allowed only for the snippet's owner. The
//! policy is a pure predicate over `(method, owner, principal)`; the
//! principal is passed in explicitly rather than read from ambient state, so
//! the decision is trivially testable.
//!
//! Handlers apply a coarser gate first (anonymous principals may not reach
//! mutating endpoints at all, which surfaces as 401); this check runs second,
//! once the target record has been located, so a denial is always 403 and
//! never masks a 404.

use crate::domain::{Error, UserId};

/// HTTP request methods the policy distinguishes.
///
/// Modelled as an explicit enum rather than framework method constants so
/// the safe-method set is part of the policy's own contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Head,
    Options,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Methods that never mutate and are allowed for anyone.
    pub const SAFE: [Self; 3] = [Self::Get, Self::Head, Self::Options];

    /// Whether the method is in the safe set.
    #[must_use]
    pub fn is_safe(self) -> bool {
        Self::SAFE.contains(&self)
    }
}

/// Allow reads for anyone; allow writes only for the resource owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsOwnerOrReadOnly;

impl IsOwnerOrReadOnly {
    /// Pure decision: may `principal` perform `method` against a snippet
    /// owned by `owner`?
    #[must_use]
    pub fn allows(method: RequestMethod, owner: &UserId, principal: Option<&UserId>) -> bool {
        if method.is_safe() {
            return true;
        }
        principal.is_some_and(|p| p == owner)
    }

    /// Map a denial to the forbidden error surfaced to clients.
    pub fn enforce(
        method: RequestMethod,
        owner: &UserId,
        principal: Option<&UserId>,
    ) -> Result<(), Error> {
        if Self::allows(method, owner, principal) {
            Ok(())
        } else {
            Err(Error::forbidden("only the owner may modify this snippet"))
        }
    }
}
