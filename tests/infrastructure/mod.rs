mod audio;
mod storage;
mod translation;
