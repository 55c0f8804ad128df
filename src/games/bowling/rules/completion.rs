//! Frame completion and classification rules.

use super::super::types::{Classification, FrameNumber, Pins, PINS_PER_FRAME_MAX};
use tracing::instrument;

/// Classifies a frame from its balls.
///
/// Returns `None` while the first ball left pins standing and the
/// second has not been thrown. The tenth frame is classified from its
/// first two balls like any other.
#[instrument]
pub fn classify(attempts: &[Pins]) -> Option<Classification> {
    match attempts {
        [] => None,
        [first, ..] if first.is_all() => Some(Classification::Strike),
        [_] => None,
        [first, second, ..] if first.get() + second.get() == PINS_PER_FRAME_MAX => {
            Some(Classification::Spare)
        }
        _ => Some(Classification::Open),
    }
}

/// Returns true when no further balls may be thrown in the frame.
#[instrument]
pub fn is_complete(number: FrameNumber, attempts: &[Pins]) -> bool {
    if number.is_last() {
        match attempts.len() {
            0 | 1 => false,
            2 => classify(attempts) == Some(Classification::Open),
            _ => true,
        }
    } else {
        attempts.len() >= 2 || classify(attempts) == Some(Classification::Strike)
    }
}

/// Most balls a frame may hold.
pub fn max_attempts(number: FrameNumber) -> usize {
    if number.is_last() { 3 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(values: &[u8]) -> Vec<Pins> {
        values.iter().map(|v| Pins::new(i64::from(*v)).unwrap()).collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&[]), None);
        assert_eq!(classify(&pins(&[4])), None);
        assert_eq!(classify(&pins(&[10])), Some(Classification::Strike));
        assert_eq!(classify(&pins(&[0, 10])), Some(Classification::Spare));
        assert_eq!(classify(&pins(&[3, 4])), Some(Classification::Open));
        assert_eq!(classify(&pins(&[10, 10, 10])), Some(Classification::Strike));
    }

    #[test]
    fn test_regular_frame_completion() {
        let fifth = FrameNumber::new(5).unwrap();
        assert!(!is_complete(fifth, &pins(&[9])));
        assert!(is_complete(fifth, &pins(&[10])));
        assert!(is_complete(fifth, &pins(&[9, 0])));
    }

    #[test]
    fn test_tenth_frame_completion() {
        let tenth = FrameNumber::LAST;
        assert!(!is_complete(tenth, &pins(&[10])));
        assert!(!is_complete(tenth, &pins(&[10, 3])));
        assert!(!is_complete(tenth, &pins(&[7, 3])));
        assert!(is_complete(tenth, &pins(&[7, 2])));
        assert!(is_complete(tenth, &pins(&[7, 3, 5])));
    }
}
