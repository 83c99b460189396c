use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("no serializer registered for type '{0}'")]
    UnknownType(String),

    #[error("{serializer} cannot encode {constant}: {reason}")]
    EncodeMismatch {
        serializer: String,
        constant: String,
        reason: String,
    },
}

impl SchemaError {
    pub fn unknown_type(ty: impl Into<String>) -> Self {
        Self::UnknownType(ty.into())
    }

    pub fn encode_mismatch(
        serializer: impl Into<String>,
        constant: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::EncodeMismatch {
            serializer: serializer.into(),
            constant: constant.into(),
            reason: reason.into(),
        }
    }
}
