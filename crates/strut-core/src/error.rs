use thiserror::Error;

/// Top-level error type for the strut workspace.
#[derive(Debug, Error)]
pub enum StrutError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Actor error: {0}")]
    Actor(#[from] ActorError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Mesh or bounding-box data insufficient to build a collision shape.
///
/// Recovered locally for static environment nodes (the node is skipped as a
/// collider); fatal for actor sub-parts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("mesh has no position buffer")]
    MissingPositions,

    #[error("position buffer length {0} is not a multiple of 3")]
    TruncatedPositions(usize),

    #[error("mesh has no index buffer")]
    MissingIndices,

    #[error("index buffer length {0} is not a multiple of 3")]
    TruncatedIndices(usize),

    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: u32 },

    #[error("mesh has no bounding box")]
    MissingBoundingBox,

    #[error("degenerate bounding box: extents [{0}, {1}, {2}] must all be > 0")]
    DegenerateBoundingBox(f32, f32, f32),
}

/// Actor resolution and constraint-wiring errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    /// Tagged node references an actor type absent from the registry.
    /// Recovered locally: logged as a warning, node skipped.
    #[error("unknown actor type: {0}")]
    UnknownType(String),

    /// A composite actor is missing a required named sub-part. Fatal for
    /// that instance: nothing from it is registered into the simulation.
    #[error("incomplete actor {actor_type}[{ordinal}]: missing part '{missing}'")]
    IncompleteActor {
        actor_type: String,
        ordinal: u32,
        missing: &'static str,
    },

    /// A wheel sub-part carries no hinge specification in its prefab.
    #[error("actor {actor_type}[{ordinal}]: part '{part}' has no hinge spec")]
    MissingHinge {
        actor_type: String,
        ordinal: u32,
        part: String,
    },

    /// The same sub-part name was supplied twice to a rig builder.
    #[error("duplicate actor part: {0}")]
    DuplicatePart(String),
}

/// Asset loading failures surfaced through the load barrier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to load asset '{asset}': {reason}")]
    Failed { asset: String, reason: String },

    #[error("no scene document was queued for loading")]
    MissingScene,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid fixed_dt: {0} (must be > 0)")]
    InvalidFixedDt(f64),

    #[error("Invalid default_friction: {0} (must be >= 0)")]
    NegativeFriction(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strut_error_from_geometry_error() {
        let err = GeometryError::MissingPositions;
        let strut_err: StrutError = err.into();
        assert!(matches!(strut_err, StrutError::Geometry(_)));
        assert!(strut_err.to_string().contains("position buffer"));
    }

    #[test]
    fn strut_error_from_actor_error() {
        let err = ActorError::IncompleteActor {
            actor_type: "car".into(),
            ordinal: 1,
            missing: "w_rr",
        };
        let strut_err: StrutError = err.into();
        assert!(matches!(strut_err, StrutError::Actor(_)));
        assert!(strut_err.to_string().contains("car[1]"));
        assert!(strut_err.to_string().contains("w_rr"));
    }

    #[test]
    fn strut_error_from_load_error() {
        let err = LoadError::Failed {
            asset: "level.gltf".into(),
            reason: "timeout".into(),
        };
        let strut_err: StrutError = err.into();
        assert!(matches!(strut_err, StrutError::Load(_)));
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn geometry_error_display_messages() {
        assert_eq!(
            GeometryError::MissingPositions.to_string(),
            "mesh has no position buffer"
        );
        assert_eq!(
            GeometryError::TruncatedPositions(7).to_string(),
            "position buffer length 7 is not a multiple of 3"
        );
        assert_eq!(
            GeometryError::IndexOutOfRange {
                index: 12,
                vertex_count: 8
            }
            .to_string(),
            "index 12 out of range for 8 vertices"
        );
        assert_eq!(
            GeometryError::DegenerateBoundingBox(1.0, 0.0, 1.0).to_string(),
            "degenerate bounding box: extents [1, 0, 1] must all be > 0"
        );
    }

    #[test]
    fn actor_error_display_messages() {
        assert_eq!(
            ActorError::UnknownType("boat".into()).to_string(),
            "unknown actor type: boat"
        );
        assert_eq!(
            ActorError::IncompleteActor {
                actor_type: "car".into(),
                ordinal: 0,
                missing: "body",
            }
            .to_string(),
            "incomplete actor car[0]: missing part 'body'"
        );
        assert_eq!(
            ActorError::DuplicatePart("w_fl".into()).to_string(),
            "duplicate actor part: w_fl"
        );
    }

    #[test]
    fn load_error_display_messages() {
        assert_eq!(
            LoadError::Failed {
                asset: "car.gltf".into(),
                reason: "404".into()
            }
            .to_string(),
            "failed to load asset 'car.gltf': 404"
        );
        assert_eq!(
            LoadError::MissingScene.to_string(),
            "no scene document was queued for loading"
        );
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::InvalidFixedDt(0.0).to_string(),
            "Invalid fixed_dt: 0 (must be > 0)"
        );
        assert_eq!(
            ConfigError::NegativeFriction(-0.5).to_string(),
            "Invalid default_friction: -0.5 (must be >= 0)"
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn errors_are_send_sync() {
        assert_send_sync::<StrutError>();
        assert_send_sync::<GeometryError>();
        assert_send_sync::<ActorError>();
        assert_send_sync::<LoadError>();
    }
}
