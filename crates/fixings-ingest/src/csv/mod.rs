//! CSV reading utilities.

mod header;
mod reader;

pub use header::{FeedHeaders, normalize_header, parse_csv_line};
pub use reader::{
    MAX_FEED_FILE_SIZE, check_file_size, check_file_size_with_limit, read_feed_text,
    read_region_frame, validate_encoding,
};
