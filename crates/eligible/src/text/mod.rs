//! Text primitives shared by the transformation stages.

pub mod boundary;

pub use boundary::{contains_whole_word, find_whole_word, is_word_char, replace_whole_word};
