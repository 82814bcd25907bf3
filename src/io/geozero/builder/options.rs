use serde::{Deserialize, Serialize};

/// Options controlling how polygons are assembled from rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonBuilderOptions {
    /// Validate every loop and fail on the first invalid one.
    pub check: bool,

    /// If `true`, ring winding decides shells (counter-clockwise) and holes (clockwise). If
    /// `false`, winding is ignored and holes are found by containment.
    pub oriented: bool,
}

impl Default for PolygonBuilderOptions {
    fn default() -> Self {
        Self {
            check: true,
            oriented: false,
        }
    }
}

impl PolygonBuilderOptions {
    pub fn new(check: bool, oriented: bool) -> Self {
        Self { check, oriented }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let options = PolygonBuilderOptions::default();
        assert!(options.check);
        assert!(!options.oriented);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let options: PolygonBuilderOptions = serde_json::from_str(r#"{"oriented": true}"#).unwrap();
        assert_eq!(options, PolygonBuilderOptions::new(true, true));
    }
}
