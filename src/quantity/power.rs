quantity!(Watts, suffix: " W", precision: 0);

impl Watts {
    pub const ZERO: Self = Self(0.0);

    /// Integer watts as reported by the inverter portal, truncated toward zero.
    #[expect(clippy::cast_possible_truncation)]
    pub fn truncated(self) -> i64 {
        self.0 as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_to_integer() {
        assert_eq!(Watts(4250.4).to_string(), "4250 W");
        assert_eq!(Watts(2849.6).to_string(), "2850 W");
    }

    #[test]
    fn truncated_goes_toward_zero() {
        assert_eq!(Watts(1399.9).truncated(), 1399);
        assert_eq!(Watts(-1399.9).truncated(), -1399);
    }

    #[test]
    fn ordering_is_total() {
        assert_eq!(Watts(-100.0).max(Watts::ZERO), Watts::ZERO);
        assert_eq!(Watts(420.0).max(Watts(500.0)), Watts(500.0));
        assert!(Watts(1.0) > Watts(f64::NEG_INFINITY));
    }
}
