#![allow(async_fn_in_trait)]

//! Access-code resolution strategies.
//!
//! A login code is looked up by an ordered list of strategies. Each strategy
//! answers [`Resolution::Found`] or [`Resolution::NotFound`]; [`FirstMatch`]
//! chains two of them so the earliest hit wins. Longer lists nest:
//! `FirstMatch::new(a, FirstMatch::new(b, c))`.
//!
//! A lookup error from any strategy aborts the chain. Later strategies are
//! never consulted after an error, so an outage of an earlier table cannot
//! let a later table answer for a code it shadows.

use crate::identity::Identity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Identity),
    NotFound,
}

/// One identity table (or other source) that can answer for an access code.
pub trait IdentityResolver: Send + Sync {
    type Error;

    async fn resolve(&self, code: &str) -> Result<Resolution, Self::Error>;
}

/// Consult `first`; only on [`Resolution::NotFound`] fall through to `then`.
#[derive(Debug, Clone)]
pub struct FirstMatch<A, B> {
    first: A,
    then: B,
}

impl<A, B> FirstMatch<A, B> {
    pub fn new(first: A, then: B) -> Self {
        Self { first, then }
    }
}

impl<A, B> IdentityResolver for FirstMatch<A, B>
where
    A: IdentityResolver,
    B: IdentityResolver<Error = A::Error>,
{
    type Error = A::Error;

    async fn resolve(&self, code: &str) -> Result<Resolution, Self::Error> {
        match self.first.resolve(code).await? {
            found @ Resolution::Found(_) => Ok(found),
            Resolution::NotFound => self.then.resolve(code).await,
        }
    }
}
