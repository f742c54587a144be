//! Single-pass list and map operations exercised by the drills.

pub mod dict;
pub mod list;

pub use dict::{count_word_frequencies, intersect_dicts, merge_dicts, tokenize_words};
pub use list::{list_of_squares, merge_sorted_lists, reverse_sublist};
