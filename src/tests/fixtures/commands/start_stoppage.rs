// Shared test fixture for the StartStoppage command.

use crate::modules::stoppages::use_cases::start_stoppage::command::StartStoppage;
use serde::Deserialize;

// JSON -> DTO (form shape)
#[derive(Debug, Clone, Deserialize)]
pub struct StartStoppageDto {
    pub sector: String,
    pub start_date: String,
    pub start_time: String,
    pub reason: String,
}

pub struct StartStoppageBuilder {
    inner: StartStoppage,
}

impl Default for StartStoppageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StartStoppageBuilder {
    pub fn new() -> Self {
        let dto: StartStoppageDto =
            serde_json::from_str(include_str!("json/start_stoppage.json")).unwrap();

        Self {
            inner: StartStoppage {
                sector: dto.sector,
                start_date: dto.start_date,
                start_time: dto.start_time,
                reason: dto.reason,
                created_by: Some("operator-0001".to_string()),
            },
        }
    }

    pub fn sector(mut self, v: impl Into<String>) -> Self {
        self.inner.sector = v.into();
        self
    }

    pub fn start_date(mut self, v: impl Into<String>) -> Self {
        self.inner.start_date = v.into();
        self
    }

    pub fn start_time(mut self, v: impl Into<String>) -> Self {
        self.inner.start_time = v.into();
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn created_by(mut self, v: Option<String>) -> Self {
        self.inner.created_by = v;
        self
    }

    pub fn build(self) -> StartStoppage {
        self.inner
    }
}

#[cfg(test)]
mod start_stoppage_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = StartStoppageBuilder::default().build();
        assert_eq!(built, StartStoppageBuilder::new().build());
        assert_eq!(built.sector, "Box-01");
        assert_eq!(built.created_by.as_deref(), Some("operator-0001"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = StartStoppageBuilder::new()
            .sector("Packaging")
            .start_date("2024-03-02")
            .start_time("13:10")
            .reason("film roll change")
            .created_by(None)
            .build();

        assert_eq!(custom.sector, "Packaging");
        assert_eq!(custom.start_date, "2024-03-02");
        assert_eq!(custom.start_time, "13:10");
        assert_eq!(custom.reason, "film roll change");
        assert_eq!(custom.created_by, None);
    }
}
