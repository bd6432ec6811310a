use serde::Serialize;

/// Truncation unit used to group events into summary buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Minute,
    Hour,
    Day,
}

impl Granularity {
    /// Resolve the `by` parameter.
    ///
    /// Anything that is not `hour` or `day` (including an absent value)
    /// falls back to `Minute`, i.e. full precision. This is never an error.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("day") => Granularity::Day,
            Some("hour") => Granularity::Hour,
            Some("minute") => Granularity::Minute,
            _ => Granularity::Minute,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
        }
    }
}
