use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

/// Grid link state as reported by the inverter.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum GridStatus {
    #[default]
    Connected,
    Disconnected,
    Error,
}

impl Display for GridStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected => write!(f, "Connected"),
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl GridStatus {
    pub const fn color(self) -> Color {
        match self {
            Self::Connected => Color::Green,
            Self::Disconnected => Color::DarkYellow,
            Self::Error => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_variant_names() {
        assert_eq!(serde_json::to_string(&GridStatus::Disconnected).unwrap(), r#""Disconnected""#);
        assert_eq!(serde_json::from_str::<GridStatus>(r#""Error""#).unwrap(), GridStatus::Error);
    }
}
