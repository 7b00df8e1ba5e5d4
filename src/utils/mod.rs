// Shared helpers

pub mod pcm;
