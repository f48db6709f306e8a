//! Form controllers: validate the raw field strings collected by the shell
//! and turn them into typed records before anything touches the store.
//! The store trusts its inputs, so no invalid record may get past here —
//! a single failed field aborts the whole submission.

pub mod attendance;
pub mod hours;
pub mod validate;
pub mod volunteer;
