use serde::Serialize;

/// A club season running August to July, named by its starting year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season {
    pub start_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonWindow {
    pub from: String,
    pub to: String,
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Season containing the given calendar month (1-12).
    pub fn containing(year: i32, month: u32) -> Self {
        if month >= 8 {
            Self::new(year)
        } else {
            Self::new(year - 1)
        }
    }

    /// Season for an ISO `YYYY-MM-DD` date.
    pub fn for_date(date: &str) -> Option<Self> {
        let year = date.get(0..4)?.parse::<i32>().ok()?;
        let month = date.get(5..7)?.parse::<u32>().ok()?;
        Some(Self::containing(year, month))
    }

    pub fn end_year(self) -> i32 {
        self.start_year + 1
    }

    /// `"2025-26"`
    pub fn id(self) -> String {
        format!("{}-{}", self.start_year, two_digits(self.end_year()))
    }

    /// `"25/26"`
    pub fn label(self) -> String {
        format!("{}/{}", two_digits(self.start_year), two_digits(self.end_year()))
    }

    pub fn window(self) -> SeasonWindow {
        SeasonWindow {
            from: format!("{}-08-01", self.start_year),
            to: format!("{}-07-31", self.end_year()),
        }
    }
}

fn two_digits(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}
