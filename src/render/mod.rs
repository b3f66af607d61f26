//! Renderers producing the three output asset kinds: info pages, thumbnail
//! images and the copied stylesheet.

pub mod page;
pub mod stylesheet;
pub mod thumbnail;

pub use page::PageTemplate;
pub use stylesheet::install_stylesheet;
pub use thumbnail::ThumbnailAssets;
