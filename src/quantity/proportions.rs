quantity!(Percent, suffix: "%", precision: 1);

impl Percent {
    pub const EMPTY: Self = Self(0.0);
    pub const FULL: Self = Self(100.0);

    /// Clamp into the physically meaningful `0..=100` range.
    #[must_use]
    pub fn saturated(self) -> Self {
        self.clamp(Self::EMPTY, Self::FULL)
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn truncated(self) -> i64 {
        self.0 as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturated() {
        assert_eq!(Percent(100.05).saturated(), Percent::FULL);
        assert_eq!(Percent(-0.1).saturated(), Percent::EMPTY);
        assert_eq!(Percent(42.0).saturated(), Percent(42.0));
    }

    #[test]
    fn display() {
        assert_eq!(Percent(88.0 + 0.1).to_string(), "88.1%");
    }
}
