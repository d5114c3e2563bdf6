//! Read-only queries over the transaction store.
//!
//! Every operation is a pure function of the store: it never mutates it and
//! returns the same value on every call.

mod amounts;
mod clients;
mod issues;
mod rankings;
