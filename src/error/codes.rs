/// Error code registry for wordfreq
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Retrieval errors
/// - 3000-3999: Chunking errors
/// - 4000-4999: Map phase errors
/// - 5000-5999: Result errors
/// - 6000-6999: Storage errors
/// - 9000-9999: Other errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Retrieval errors (2000-2999)
    pub const RETRIEVAL_TRANSPORT: u16 = 2001;
    pub const RETRIEVAL_READ_FAILED: u16 = 2002;
    pub const RETRIEVAL_CLIENT_SETUP: u16 = 2003;

    // Chunking errors (3000-3999)
    pub const CHUNKING_INVALID_SIZE: u16 = 3001;

    // Map phase errors (4000-4999)
    pub const MAP_TASK_FAILED: u16 = 4001;
    pub const MAP_TASK_PANICKED: u16 = 4002;
    pub const MAP_SEMAPHORE_CLOSED: u16 = 4003;

    // Result errors (5000-5999)
    pub const EMPTY_RESULT: u16 = 5000;

    // Storage errors (6000-6999)
    pub const STORAGE_IO_ERROR: u16 = 6001;
    pub const STORAGE_NOT_FOUND: u16 = 6002;
    pub const STORAGE_SERIALIZATION_ERROR: u16 = 6003;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_PARSE_ERROR => "Configuration file could not be parsed",
        ErrorCode::CONFIG_INVALID_VALUE => "Configuration value out of range",

        ErrorCode::RETRIEVAL_TRANSPORT => "Request to the text source failed",
        ErrorCode::RETRIEVAL_READ_FAILED => "Text source could not be read",
        ErrorCode::RETRIEVAL_CLIENT_SETUP => "HTTP client could not be built",

        ErrorCode::CHUNKING_INVALID_SIZE => "Requested chunk count is invalid",

        ErrorCode::MAP_TASK_FAILED => "A chunk could not be counted",
        ErrorCode::MAP_TASK_PANICKED => "A counting task panicked",
        ErrorCode::MAP_SEMAPHORE_CLOSED => "Worker pool closed before all chunks ran",

        ErrorCode::EMPTY_RESULT => "No words to rank",

        ErrorCode::STORAGE_IO_ERROR => "Filesystem operation failed",
        ErrorCode::STORAGE_NOT_FOUND => "Path not found",
        ErrorCode::STORAGE_SERIALIZATION_ERROR => "Output could not be serialized",

        ErrorCode::OTHER_GENERIC => "Unexpected error",
        _ => "Unknown error code",
    }
}
