//! Process exit codes. Part of the CLI contract; scripts branch on them.

pub const SUCCESS: i32 = 0;
pub const INVALID_ARGUMENT: i32 = 1; // Bad seed length, alphabet, or a pool too small for the teams
pub const CONFIG_ERROR: i32 = 2; // Unusable configuration, or an unclassified failure
pub const DATA_ERROR: i32 = 3; // Champion data could not be fetched or read
