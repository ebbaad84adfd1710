//! Delta Message Formatting
//!
//! Renders a measurement and its signed change from the previous one,
//! e.g. `71.0kg(+0.5)`. First-ever measurements have no baseline and are
//! reported as `(±0)`.

/// Build the reply text for a measurement.
///
/// Both the measurement and the delta are rendered with one fixed decimal
/// digit. The sign branch tests the raw delta, so a change smaller than the
/// rendering precision still shows its direction (`(+0.0)`).
#[must_use]
pub fn delta_message(previous: Option<f64>, current: f64) -> String {
    let Some(previous) = previous else {
        return format!("{current:.1}kg(±0)");
    };

    let diff = current - previous;
    if diff > 0.0 {
        format!("{current:.1}kg(+{diff:.1})")
    } else if diff < 0.0 {
        format!("{current:.1}kg({diff:.1})")
    } else {
        format!("{current:.1}kg(±0)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_measurement_has_zero_delta() {
        assert_eq!(delta_message(None, 70.5), "70.5kg(±0)");
    }

    #[test]
    fn gain_renders_explicit_plus() {
        assert_eq!(delta_message(Some(70.5), 71.0), "71.0kg(+0.5)");
    }

    #[test]
    fn loss_keeps_the_value_sign() {
        assert_eq!(delta_message(Some(71.0), 70.0), "70.0kg(-1.0)");
    }

    #[test]
    fn unchanged_renders_plus_minus_zero() {
        assert_eq!(delta_message(Some(70.5), 70.5), "70.5kg(±0)");
    }

    #[test]
    fn whole_numbers_keep_one_decimal() {
        assert_eq!(delta_message(None, 80.0), "80.0kg(±0)");
        assert_eq!(delta_message(Some(80.0), 83.0), "83.0kg(+3.0)");
    }

    #[test]
    fn tiny_gain_rounds_to_signed_zero() {
        // Direction comes from the raw delta, not the rounded rendering
        assert_eq!(delta_message(Some(70.0), 70.04), "70.0kg(+0.0)");
    }

    #[test]
    fn zero_baseline_is_still_a_baseline() {
        assert_eq!(delta_message(Some(0.0), 70.5), "70.5kg(+70.5)");
    }

    #[test]
    fn formatting_is_idempotent() {
        let a = delta_message(Some(70.5), 71.0);
        let b = delta_message(Some(70.5), 71.0);
        assert_eq!(a, b);
    }
}
