mod logging_tests;
mod output_utils_tests;
mod schema_source_tests;
