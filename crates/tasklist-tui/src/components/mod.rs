pub mod banner;
pub mod popup;

pub use banner::{Banner, BannerVariant, BANNER_TTL};
pub use popup::{centered_rect, render_popup_with_block, render_warning_popup};
