/*!
Notemon Service

The backend of the notemon document-study app: uploads notes, then proxies
summary / FAQ / chat requests over them to the generative-language API.
*/

#![warn(
    unreachable_pub,
    redundant_lifetimes,
    unsafe_code,
    non_local_definitions,
    clippy::needless_pass_by_value,
    clippy::needless_pass_by_ref_mut
)]

pub mod api;
pub mod config;
pub mod core;
pub mod service;
