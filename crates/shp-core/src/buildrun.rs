//! The `BuildRun` custom resource.
//!
//! Only the fields the CLI reads are modelled; unknown fields are ignored on
//! deserialization.

use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Condition type reporting the overall outcome of a BuildRun.
pub const CONDITION_SUCCEEDED: &str = "Succeeded";

/// Desired state of a BuildRun.
#[derive(CustomResource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[kube(
    group = "shipwright.io",
    version = "v1alpha1",
    kind = "BuildRun",
    plural = "buildruns",
    namespaced,
    status = "BuildRunStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct BuildRunSpec {
    /// Reference to the Build this run executes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_ref: Option<BuildRef>,
    /// Build specification embedded directly in the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_spec: Option<BuildSpec>,
    /// Output override for this run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Image>,
}

impl BuildRunSpec {
    /// Name of the referenced Build, empty for embedded build specs.
    pub fn build_name(&self) -> &str {
        self.build_ref.as_ref().map_or("", |r| r.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildRef {
    #[serde(default)]
    pub name: String,
}

/// Build specification, either embedded in the run or copied into its status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSpec {
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub output: Image,
}

/// Where the build's source comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Repository URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Branch, tag or commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

/// Target image of a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub image: String,
}

/// Observed state of a BuildRun.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRunStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    /// Spec of the originating Build, copied once the controller resolves it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_spec: Option<BuildSpec>,
    /// Result of the image push, present once the build completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
}

/// A status condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub digest: String,
}

impl BuildRun {
    /// First condition of type `Succeeded`, if any.
    pub fn succeeded_condition(&self) -> Option<&Condition> {
        self.status
            .as_ref()?
            .conditions
            .iter()
            .find(|c| c.type_ == CONDITION_SUCCEEDED)
    }
}
