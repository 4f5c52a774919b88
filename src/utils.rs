pub mod count_word_frequencies;
pub use count_word_frequencies::count_word_frequencies;

pub mod linear_regression;
pub use linear_regression::linear_regression;

pub mod sort_word_counts;
pub use sort_word_counts::sort_word_counts;

pub mod write_ranked_points_csv;
pub use write_ranked_points_csv::write_ranked_points_csv;
