pub mod feed_service;
pub mod image_service;
pub mod post_renderer;

pub use feed_service::FeedService;
pub use image_service::ImageService;
pub use post_renderer::{render_post, AnswerState};
