pub mod srt;
pub mod timeline;
pub mod timestamp;
