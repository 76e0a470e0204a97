pub type TessellaResult<T> = Result<T, TessellaError>;

#[derive(thiserror::Error, Debug)]
pub enum TessellaError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TessellaError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            TessellaError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            TessellaError::geometry("x")
                .to_string()
                .contains("geometry error:")
        );
        assert!(
            TessellaError::animation("x")
                .to_string()
                .contains("animation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = TessellaError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
