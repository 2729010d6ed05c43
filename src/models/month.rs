/// Calendar month without a year. Each month owns at most one ledger per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn all() -> &'static [Month] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn from_number(n: u32) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Self::all().get(i as usize))
            .copied()
    }

    /// Accepts a full name, a three-letter prefix, or a number 1-12 (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u32>() {
            return Self::from_number(n);
        }
        let lower = s.to_lowercase();
        if lower.len() < 3 {
            return None;
        }
        Self::all()
            .iter()
            .find(|m| m.as_str().to_lowercase().starts_with(&lower))
            .copied()
    }

    pub fn next(&self) -> Self {
        Self::from_number(self.number() % 12 + 1).unwrap_or(Self::January)
    }

    pub fn prev(&self) -> Self {
        let n = if self.number() == 1 { 12 } else { self.number() - 1 };
        Self::from_number(n).unwrap_or(Self::December)
    }

    /// The month of the local clock.
    pub fn current() -> Self {
        use chrono::Datelike;
        Self::from_number(chrono::Local::now().month()).unwrap_or(Self::January)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
