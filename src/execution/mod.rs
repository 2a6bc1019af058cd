//! Request execution internals.

pub(crate) mod http;
