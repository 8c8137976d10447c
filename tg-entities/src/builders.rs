pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{report_builder::*, venue_builder::*};

pub mod venue_builder {

    use super::*;
    use crate::{id::*, time::*, venue::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn wait_minutes(mut self, v: u32) -> Self {
            self.venue.status.wait_minutes = v;
            self
        }
        pub fn cover_amount(mut self, v: u32) -> Self {
            self.venue.status.cover_amount = v;
            self
        }
        pub fn report_count(mut self, v: u32) -> Self {
            self.venue.status.report_count = v;
            self
        }
        pub fn last_updated(mut self, at: Timestamp) -> Self {
            self.venue.status.last_updated = at;
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> VenueBuild {
            let id = Id::new();
            let name = format!("Venue {id}");
            VenueBuild {
                venue: Venue::new(id, name),
            }
        }
    }
}

pub mod report_builder {

    use super::*;
    use crate::{id::*, report::*, time::*};

    #[derive(Debug)]
    pub struct ReportBuild {
        report: Report,
    }

    impl ReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn venue(mut self, venue_id: &str) -> Self {
            self.report.venue_id = venue_id.into();
            self
        }
        pub fn reporter(mut self, reporter_id: Option<&str>) -> Self {
            self.report.reporter_id = reporter_id.map(Into::into);
            self
        }
        pub fn wait_minutes(mut self, v: u32) -> Self {
            self.report.wait_minutes = v;
            self
        }
        pub fn cover_amount(mut self, v: u32) -> Self {
            self.report.cover_amount = v;
            self
        }
        pub fn submitted_at(mut self, at: Timestamp) -> Self {
            self.report.submitted_at = at;
            self
        }
        pub fn finish(self) -> Report {
            self.report
        }
    }

    impl Builder for Report {
        type Build = ReportBuild;
        fn build() -> ReportBuild {
            ReportBuild {
                report: Report {
                    id: Id::new(),
                    venue_id: Id::default(),
                    reporter_id: None,
                    wait_minutes: 0,
                    cover_amount: 0,
                    submitted_at: Timestamp::now(),
                },
            }
        }
    }

    #[test]
    fn anonymous_by_default() {
        assert!(Report::build().finish().reporter_id.is_none());
        assert!(Report::build().reporter(Some("u1")).finish().reporter_id.is_some());
    }
}
