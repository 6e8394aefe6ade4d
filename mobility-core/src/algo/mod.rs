//! Higher-level planning algorithms over a completed travel matrix

pub mod meeting;
