//! Travel classes.

use std::fmt;

/// Travel class a fare is quoted for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FareClass {
    #[default]
    Sleeper,
    ThreeAc,
    TwoAc,
    OneAc,
    ChairCar,
}

impl FareClass {
    /// Every class, in display order.
    pub const ALL: [FareClass; 5] = [
        FareClass::Sleeper,
        FareClass::ThreeAc,
        FareClass::TwoAc,
        FareClass::OneAc,
        FareClass::ChairCar,
    ];

    /// Short code used on the wire, e.g. `3ac`.
    pub fn code(&self) -> &'static str {
        match self {
            FareClass::Sleeper => "sleeper",
            FareClass::ThreeAc => "3ac",
            FareClass::TwoAc => "2ac",
            FareClass::OneAc => "1ac",
            FareClass::ChairCar => "cc",
        }
    }

    /// Human-readable name, e.g. `3rd AC (3A)`.
    pub fn display_name(&self) -> &'static str {
        match self {
            FareClass::Sleeper => "Sleeper (SL)",
            FareClass::ThreeAc => "3rd AC (3A)",
            FareClass::TwoAc => "2nd AC (2A)",
            FareClass::OneAc => "1st AC (1A)",
            FareClass::ChairCar => "Chair Car (CC)",
        }
    }

    /// Parse a class code, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.code().eq_ignore_ascii_case(s))
    }

    /// Parse a class code, treating anything unrecognised as sleeper.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_server::fare::FareClass;
    ///
    /// assert_eq!(FareClass::parse_or_default("2AC"), FareClass::TwoAc);
    /// assert_eq!(FareClass::parse_or_default("business"), FareClass::Sleeper);
    /// ```
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
