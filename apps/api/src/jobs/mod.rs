// Job search proxy: validates {title, skills}, queries SerpApi, normalizes results.
// Only `provider` builds SerpApi URLs.

pub mod handlers;
pub mod models;
pub mod normalize;
pub mod provider;

#[cfg(test)]
pub(crate) mod testing;
