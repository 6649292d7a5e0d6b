//! In-memory `posts` REST service: a seeded post store behind an actix-web
//! CRUD surface that wraps every successful payload in `{ "data": ... }`.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
