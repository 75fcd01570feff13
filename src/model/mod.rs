/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Authentication models
pub mod auth;
/// Request descriptors and the shared fetch-and-normalize routine
pub mod http;
/// Response normalization
pub mod response;
/// Search query construction
pub mod search;
