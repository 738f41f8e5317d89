pub mod codec;
pub mod error;
pub mod services;
pub mod widget;
