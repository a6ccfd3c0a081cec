mod logging;
mod testing;

pub use logging::init_test_logging;
pub use testing::text_stream;
