pub mod audio;
pub mod observability;
pub mod storage;
pub mod translation;
pub mod voice;
