//! Display rows for `buildrun list`.

use chrono::{DateTime, Utc};
use kube::ResourceExt;
use tracing::debug;

use crate::BuildRun;
use crate::age::short_human_duration;

/// Status shown when a BuildRun has no `Succeeded` condition yet.
pub const STATUS_UNKNOWN: &str = "Unknown";

/// Placeholder for the SOURCE-ORIGIN column. Provenance is not derived yet.
pub const SOURCE_ORIGIN_PLACEHOLDER: &str = "source-origin";

/// Column headers, in display order.
pub const COLUMNS: [&str; 7] = [
    "NAME",
    "STATUS",
    "AGE",
    "SOURCE",
    "OUTPUT-IMAGE",
    "IMAGE-DIGEST",
    "SOURCE-ORIGIN",
];

/// One line of the BuildRun report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRunRow {
    pub name: String,
    pub status: String,
    pub age: String,
    pub source: String,
    pub output_image: String,
    pub image_digest: String,
    pub source_origin: String,
}

impl BuildRunRow {
    /// Derive the display fields of `br`, computing its age relative to `now`.
    ///
    /// Never fails: missing optional data renders as an empty cell.
    pub fn from_buildrun(br: &BuildRun, now: DateTime<Utc>) -> Self {
        let name = br.name_any();
        let status = br
            .succeeded_condition()
            .map_or(STATUS_UNKNOWN, |c| c.reason.as_str())
            .to_string();

        let age = br
            .creation_timestamp()
            .map(|created| short_human_duration(now - created.0))
            .unwrap_or_default();

        debug!(buildrun = %name, build = br.spec.build_name(), "extracting buildrun row");

        let status_build_spec = br.status.as_ref().and_then(|s| s.build_spec.as_ref());

        let output_image = match br.spec.output.as_ref() {
            Some(output) if !output.image.is_empty() => output.image.clone(),
            _ => status_build_spec
                .map(|spec| spec.output.image.clone())
                .unwrap_or_default(),
        };

        // Only the status copy of the build spec is consulted for the source.
        let source = status_build_spec
            .map(|spec| {
                let source = &spec.source;
                match source.url.as_deref() {
                    Some(url) if !url.is_empty() => url.to_string(),
                    _ => source.revision.clone().unwrap_or_default(),
                }
            })
            .unwrap_or_default();
        if status_build_spec.is_some() {
            debug!(buildrun = %name, source = %source, "resolved source");
        }

        let image_digest = br
            .status
            .as_ref()
            .and_then(|s| s.output.as_ref())
            .map(|o| o.digest.clone())
            .unwrap_or_default();

        Self {
            name,
            status,
            age,
            source,
            output_image,
            image_digest,
            source_origin: SOURCE_ORIGIN_PLACEHOLDER.to_string(),
        }
    }

    /// Cells in [`COLUMNS`] order.
    pub fn into_cells(self) -> [String; 7] {
        [
            self.name,
            self.status,
            self.age,
            self.source,
            self.output_image,
            self.image_digest,
            self.source_origin,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildrun::{
        BuildRunSpec, BuildRunStatus, BuildSpec, CONDITION_SUCCEEDED, Condition, Image, Output,
        Source,
    };
    use chrono::TimeDelta;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

    fn now() -> DateTime<Utc> {
        "2026-10-19T12:00:00Z".parse().unwrap()
    }

    fn make_buildrun(name: &str, age: TimeDelta) -> BuildRun {
        let mut br = BuildRun::new(name, BuildRunSpec::default());
        br.metadata.creation_timestamp = Some(Time(now() - age));
        br
    }

    fn condition(type_: &str, reason: &str) -> Condition {
        Condition {
            type_: type_.to_string(),
            reason: reason.to_string(),
        }
    }

    fn image(image: &str) -> Image {
        Image {
            image: image.to_string(),
        }
    }

    #[test]
    fn test_completed_buildrun_row() {
        let mut br = make_buildrun("build-1", TimeDelta::hours(3));
        br.spec.output = Some(image(""));
        br.status = Some(BuildRunStatus {
            conditions: vec![condition(CONDITION_SUCCEEDED, "Succeeded")],
            build_spec: Some(BuildSpec {
                source: Source {
                    url: Some("https://github.com/x/y".to_string()),
                    revision: Some("main".to_string()),
                },
                output: image("registry/img:latest"),
            }),
            output: Some(Output {
                digest: "sha256:abc".to_string(),
            }),
        });

        let row = BuildRunRow::from_buildrun(&br, now());
        assert_eq!(
            row.into_cells(),
            [
                "build-1",
                "Succeeded",
                "3h",
                "https://github.com/x/y",
                "registry/img:latest",
                "sha256:abc",
                "source-origin",
            ]
        );
    }

    #[test]
    fn test_bare_buildrun_row() {
        let mut br = make_buildrun("direct", TimeDelta::minutes(5));
        br.spec.output = Some(image("myimg"));

        let row = BuildRunRow::from_buildrun(&br, now());
        assert_eq!(
            row,
            BuildRunRow {
                name: "direct".to_string(),
                status: "Unknown".to_string(),
                age: "5m".to_string(),
                source: String::new(),
                output_image: "myimg".to_string(),
                image_digest: String::new(),
                source_origin: "source-origin".to_string(),
            }
        );
    }

    #[test]
    fn test_status_unknown_without_succeeded_condition() {
        let mut br = make_buildrun("run", TimeDelta::seconds(10));
        br.status = Some(BuildRunStatus {
            conditions: vec![condition("Ready", "Pending")],
            ..Default::default()
        });

        assert_eq!(BuildRunRow::from_buildrun(&br, now()).status, "Unknown");
    }

    #[test]
    fn test_status_uses_first_succeeded_condition() {
        let mut br = make_buildrun("run", TimeDelta::seconds(10));
        br.status = Some(BuildRunStatus {
            conditions: vec![
                condition("Ready", "Pending"),
                condition(CONDITION_SUCCEEDED, "BuildRunTimeout"),
                condition(CONDITION_SUCCEEDED, "Succeeded"),
            ],
            ..Default::default()
        });

        assert_eq!(
            BuildRunRow::from_buildrun(&br, now()).status,
            "BuildRunTimeout"
        );
    }

    #[test]
    fn test_spec_output_image_takes_precedence() {
        let mut br = make_buildrun("run", TimeDelta::seconds(10));
        br.spec.output = Some(image("X"));
        br.status = Some(BuildRunStatus {
            build_spec: Some(BuildSpec {
                output: image("Y"),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(BuildRunRow::from_buildrun(&br, now()).output_image, "X");
    }

    #[test]
    fn test_source_falls_back_to_revision() {
        let mut br = make_buildrun("run", TimeDelta::seconds(10));
        br.status = Some(BuildRunStatus {
            build_spec: Some(BuildSpec {
                source: Source {
                    url: None,
                    revision: Some("rev123".to_string()),
                },
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(BuildRunRow::from_buildrun(&br, now()).source, "rev123");
    }

    #[test]
    fn test_empty_source_url_falls_back_to_revision() {
        let mut br = make_buildrun("run", TimeDelta::seconds(10));
        br.status = Some(BuildRunStatus {
            build_spec: Some(BuildSpec {
                source: Source {
                    url: Some(String::new()),
                    revision: Some("rev123".to_string()),
                },
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(BuildRunRow::from_buildrun(&br, now()).source, "rev123");
    }

    #[test]
    fn test_source_empty_without_url_or_revision() {
        let mut br = make_buildrun("run", TimeDelta::seconds(10));
        br.status = Some(BuildRunStatus {
            build_spec: Some(BuildSpec {
                source: Source::default(),
                output: image("registry/img:1"),
            }),
            ..Default::default()
        });

        let row = BuildRunRow::from_buildrun(&br, now());
        assert_eq!(row.source, "");
        assert_eq!(row.output_image, "registry/img:1");
    }

    #[test]
    fn test_spec_source_is_never_consulted() {
        let mut br = make_buildrun("run", TimeDelta::seconds(10));
        br.spec.output = Some(image("direct:1"));
        br.spec.build_spec = Some(BuildSpec {
            source: Source {
                url: Some("https://github.com/embedded/repo".to_string()),
                revision: Some("v1".to_string()),
            },
            output: image("embedded:1"),
        });

        let row = BuildRunRow::from_buildrun(&br, now());
        assert_eq!(row.source, "");
        assert_eq!(row.output_image, "direct:1");
    }

    #[test]
    fn test_missing_outputs_render_empty() {
        let br = make_buildrun("run", TimeDelta::days(2));

        let row = BuildRunRow::from_buildrun(&br, now());
        assert_eq!(row.age, "2d");
        assert_eq!(row.output_image, "");
        assert_eq!(row.image_digest, "");
        assert_eq!(row.source, "");
    }

    #[test]
    fn test_missing_creation_timestamp() {
        let br = BuildRun::new("run", BuildRunSpec::default());
        assert_eq!(BuildRunRow::from_buildrun(&br, now()).age, "");
    }
}
