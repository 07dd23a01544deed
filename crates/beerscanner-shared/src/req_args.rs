//! This module stores the expected format of the arguments for the requests
//! The structure of the module is supposed to match the path of the endpoints.
//! For example `/api/v1/bars/public/search` would map to
//! [`api::v1::SearchReqArgs`]. Arguments of `GET` requests end up in the query
//! string, the others in the JSON body unless stated otherwise.

pub mod api;
