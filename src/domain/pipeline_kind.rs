use std::fmt;
use std::str::FromStr;

/// The external batch jobs this service knows how to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    Daily,
    WeeklyTraining,
    MonthlyTraining,
}

impl PipelineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineKind::Daily => "daily",
            PipelineKind::WeeklyTraining => "weekly_training",
            PipelineKind::MonthlyTraining => "monthly_training",
        }
    }
}

impl FromStr for PipelineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(PipelineKind::Daily),
            "weekly_training" => Ok(PipelineKind::WeeklyTraining),
            "monthly_training" => Ok(PipelineKind::MonthlyTraining),
            other => Err(format!(
                "Invalid pipeline kind: {}. Expected: daily, weekly_training, or monthly_training",
                other
            )),
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
