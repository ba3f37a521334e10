use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,

    ValidationInvalidArgument,

    ScaffoldEmptyName,
    ScaffoldComponentExists,
    ScaffoldMarkerNotFound,
    ScaffoldThumbnailMissing,
    ScaffoldThumbnailExists,

    ShipCopyFailed,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::ScaffoldEmptyName => "scaffold.empty_name",
            ErrorCode::ScaffoldComponentExists => "scaffold.component_exists",
            ErrorCode::ScaffoldMarkerNotFound => "scaffold.marker_not_found",
            ErrorCode::ScaffoldThumbnailMissing => "scaffold.thumbnail_missing",
            ErrorCode::ScaffoldThumbnailExists => "scaffold.thumbnail_exists",

            ErrorCode::ShipCopyFailed => "ship.copy_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerNotFoundDetails {
    pub marker: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyFailedDetails {
    pub source: String,
    pub destination: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            to_details(InvalidArgumentDetails {
                field: field.into(),
                problem: problem.into(),
            }),
        )
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            to_details(ConfigInvalidJsonDetails {
                path: path.into(),
                error: err.to_string(),
            }),
        )
    }

    pub fn scaffold_empty_name() -> Self {
        Self::new(
            ErrorCode::ScaffoldEmptyName,
            "Component name cannot be empty",
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn scaffold_component_exists(path: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ScaffoldComponentExists,
            "Component file already exists",
            to_details(PathDetails { path: path.into() }),
        )
        .with_hint("Re-run with --force to overwrite the existing component")
    }

    pub fn scaffold_marker_not_found(marker: impl Into<String>) -> Self {
        let marker = marker.into();
        Self::new(
            ErrorCode::ScaffoldMarkerNotFound,
            format!("Marker '{}' not found in registry file", marker),
            to_details(MarkerNotFoundDetails { marker }),
        )
    }

    pub fn scaffold_thumbnail_missing(source: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ScaffoldThumbnailMissing,
            "Thumbnail template not found",
            to_details(PathDetails {
                path: source.into(),
            }),
        )
    }

    pub fn scaffold_thumbnail_exists(destination: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ScaffoldThumbnailExists,
            "Thumbnail already exists",
            to_details(PathDetails {
                path: destination.into(),
            }),
        )
        .with_hint("Re-run with --force to overwrite the existing thumbnail")
    }

    pub fn ship_copy_failed(
        source: impl Into<String>,
        destination: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorCode::ShipCopyFailed,
            "Failed to copy build output",
            to_details(CopyFailedDetails {
                source: source.into(),
                destination: destination.into(),
                error: error.into(),
            }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalIoError,
            "IO error",
            to_details(InternalErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            to_details(InternalErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
