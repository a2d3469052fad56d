//! Admin

pub(crate) mod middleware;
