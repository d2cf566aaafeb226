//! Material.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Phong material, passed through to the renderer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient.
    pub ambient: [f32; 3],
    /// Diffuse.
    pub diffuse: [f32; 3],
    /// Specular.
    pub specular: [f32; 3],
    /// Specular exponent.
    pub n: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: [0.1, 0.1, 0.1],
            diffuse: [0.6, 0.4, 0.4],
            specular: [0.3, 0.3, 0.3],
            n: 11.0,
        }
    }
}

impl Material {
    /// Fields every material must have.
    const FIELDS: [&'static str; 4] = ["ambient", "diffuse", "specular", "n"];

    /// Parses a material from a JSON object.
    pub fn from_json(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s).map_err(|e| Error::InvalidMaterial {
            reason: e.to_string(),
        })?;
        let object = value.as_object().ok_or_else(|| Error::InvalidMaterial {
            reason: "expected a JSON object".into(),
        })?;
        if let Some(missing) = Self::FIELDS.iter().find(|f| !object.contains_key(**f)) {
            return Err(Error::InvalidMaterial {
                reason: format!("missing field `{}`", missing),
            });
        }

        serde_json::from_value(value).map_err(|e| Error::InvalidMaterial {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_complete_material() {
        let material = Material::from_json(
            r#"{"ambient":[0,0,0],"diffuse":[1,0.5,0.25],"specular":[1,1,1],"n":40}"#,
        )
        .unwrap();
        assert_eq!(material.diffuse, [1.0, 0.5, 0.25]);
        assert_eq!(material.n, 40.0);
    }

    #[test]
    fn missing_field_is_reported() {
        let err = Material::from_json(r#"{"ambient":[0,0,0],"diffuse":[0,0,0],"n":1}"#)
            .unwrap_err();
        match err {
            Error::InvalidMaterial { reason } => assert!(reason.contains("specular"), "{}", reason),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = Material::from_json(
            r#"{"ambient":[0,0],"diffuse":[0,0,0],"specular":[0,0,0],"n":1}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidMaterial { .. }));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(matches!(
            Material::from_json("[1, 2, 3]"),
            Err(Error::InvalidMaterial { .. })
        ));
    }
}
