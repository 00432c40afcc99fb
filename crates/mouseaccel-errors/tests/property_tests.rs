//! Property tests for error codes.

use mouseaccel_errors::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn from_code_only_accepts_known_codes(code in any::<u8>()) {
        match CycleError::from_code(code) {
            Some(err) => prop_assert_eq!(err.code(), code),
            None => prop_assert!(code == 0 || code > 2),
        }
    }

    #[test]
    fn out_of_range_mentions_field(value in -1.0e6f32..1.0e6f32) {
        let err = ValidationError::out_of_range("Midpoint", value, -10.0, 10.0);
        prop_assert!(err.to_string().starts_with("Midpoint"));
    }
}

#[test]
fn cycle_errors_never_require_restart() {
    for err in [CycleError::ContextUnavailable, CycleError::NumericFault] {
        assert!(err.severity().is_recoverable());
        assert!(err.errno() < 0);
    }
}
