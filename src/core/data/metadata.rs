use serde::{Deserialize, Serialize};

use crate::core::data::fractal_params::{FractalParameters, FractalParamsError};

/// Parameters persisted next to an exported image, plus provenance.
///
/// Field names on the wire match the records written by earlier exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedMetadata {
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "FileName")]
    pub file_label: String,
    #[serde(rename = "Scale")]
    pub scale: f64,
    #[serde(rename = "X")]
    pub center_x: f64,
    #[serde(rename = "Y")]
    pub center_y: f64,
}

impl PersistedMetadata {
    #[must_use]
    pub fn from_params(
        author: impl Into<String>,
        file_label: impl Into<String>,
        params: &FractalParameters,
    ) -> Self {
        Self {
            author: author.into(),
            file_label: file_label.into(),
            scale: params.scale(),
            center_x: params.center_x(),
            center_y: params.center_y(),
        }
    }

    /// Resume seed for a zoom sequence; the budget is supplied by the caller.
    pub fn seed(&self, iteration_budget: u32) -> Result<FractalParameters, FractalParamsError> {
        FractalParameters::new(self.scale, self.center_x, self.center_y, iteration_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_sidecar_keys() {
        let metadata = PersistedMetadata {
            author: "Jane Doe".to_string(),
            file_label: "./pic/snapshot_001.jpg".to_string(),
            scale: 0.5,
            center_x: -1.25,
            center_y: 0.125,
        };

        let json = serde_json::to_string(&metadata).unwrap();

        assert_eq!(
            json,
            r#"{"Author":"Jane Doe","FileName":"./pic/snapshot_001.jpg","Scale":0.5,"X":-1.25,"Y":0.125}"#
        );
    }

    #[test]
    fn test_parses_record_from_earlier_export() {
        let json = r#"{"Author":"J","FileName":"a.jpg","Scale":0.0064001136585278761,"X":-1.2411110166880112704,"Y":0.0868955541831085976}"#;

        let metadata: PersistedMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(metadata.scale, 0.0064001136585278761);
        assert_eq!(metadata.center_x, -1.2411110166880112704);
        assert_eq!(metadata.center_y, 0.0868955541831085976);
    }

    #[test]
    fn test_seed_carries_exact_parameters() {
        let params = FractalParameters::new(0.003, -0.7436, 0.1318, 100).unwrap();
        let metadata = PersistedMetadata::from_params("a", "b", &params);

        let seed = metadata.seed(300).unwrap();

        assert_eq!(seed.scale(), 0.003);
        assert_eq!(seed.center_x(), -0.7436);
        assert_eq!(seed.center_y(), 0.1318);
        assert_eq!(seed.iteration_budget(), 300);
    }

    #[test]
    fn test_seed_rejects_bad_scale() {
        let metadata = PersistedMetadata {
            author: String::new(),
            file_label: String::new(),
            scale: 0.0,
            center_x: 0.0,
            center_y: 0.0,
        };

        assert!(metadata.seed(100).is_err());
    }
}
