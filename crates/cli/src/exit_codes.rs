//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain     | Description                              |
//! |---------|------------|------------------------------------------|
//! | 0       | Universal  | Success                                  |
//! | 1       | Universal  | General error (unspecified)              |
//! | 2       | Universal  | CLI usage error (bad args, missing file) |
//! | 3-9     | reconcile  | Scan / export codes                      |
//! | 10-19   | checkout   | Payment backend codes                    |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use railpal_backend_client::BackendError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options, unreadable input.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Reconcile (3-9)
// =============================================================================

/// Recognition failed (backend unreachable, HTTP error, bad response shape).
/// The upload is aborted; no partial records enter the store.
pub const EXIT_SCAN_RECOGNITION: u8 = 3;

/// Upload channel busy - a recognition call is already in flight on the
/// requested channel.
pub const EXIT_SCAN_BUSY: u8 = 4;

/// Could not write the results file.
pub const EXIT_EXPORT_IO: u8 = 5;

// =============================================================================
// Checkout (10-19)
// =============================================================================

/// Transport failure reaching the payment backend.
pub const EXIT_CHECKOUT_TRANSPORT: u8 = 10;

/// Backend answered but rejected the checkout or returned no redirect URL.
pub const EXIT_CHECKOUT_REJECTED: u8 = 11;

/// Map a checkout-path backend error to its exit code.
pub fn checkout_exit_code(err: &BackendError) -> u8 {
    match err {
        BackendError::Network(_) | BackendError::Io(_) => EXIT_CHECKOUT_TRANSPORT,
        BackendError::Http(_, _) | BackendError::Parse(_) => EXIT_CHECKOUT_REJECTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_rejection_map_to_distinct_codes() {
        let transport = BackendError::Network("connection refused".into());
        let rejected = BackendError::Parse("missing 'url'".into());
        assert_eq!(checkout_exit_code(&transport), EXIT_CHECKOUT_TRANSPORT);
        assert_eq!(checkout_exit_code(&rejected), EXIT_CHECKOUT_REJECTED);
    }
}
