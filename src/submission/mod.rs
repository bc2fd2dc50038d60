pub mod dispatch;
pub mod pipeline;
pub mod validate;
