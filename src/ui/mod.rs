pub mod components;
pub mod layout;
pub mod render;
pub mod text_area;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use render::render;
