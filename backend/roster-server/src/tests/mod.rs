mod api;
mod common;
