use crate::consts;
use std::time::Duration;

/// Are the snake's eyes closed after `elapsed` time in play?
///
/// The snake blinks for [`consts::BLINK_DURATION`] at the start of every
/// [`consts::BLINK_PERIOD`].
pub(super) fn blinking(elapsed: Duration) -> bool {
    let period = consts::BLINK_PERIOD.as_millis();
    period != 0 && elapsed.as_millis() % period < consts::BLINK_DURATION.as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(199, true)]
    #[case(200, false)]
    #[case(1999, false)]
    #[case(2000, true)]
    #[case(2150, true)]
    #[case(2200, false)]
    #[case(60_100, true)]
    fn test_blinking(#[case] millis: u64, #[case] closed: bool) {
        assert_eq!(blinking(Duration::from_millis(millis)), closed);
    }
}
