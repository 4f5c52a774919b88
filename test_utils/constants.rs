pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const TEST_DATA_FILES_DIRECTORY: &str = "tests/test_data_files";

/// Tolerance for comparing fitted statistics against closed-form expectations.
pub const FLOAT_TOLERANCE: f64 = 1e-6;
