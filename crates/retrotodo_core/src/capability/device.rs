//! Permission-gated device capability declarations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Device capability that sources a photo for the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeviceCapability {
    Camera,
    PhotoLibrary,
}

/// Stable string value for camera capability.
pub const DEVICE_CAPABILITY_CAMERA: &str = "camera";
/// Stable string value for photo-library capability.
pub const DEVICE_CAPABILITY_PHOTO_LIBRARY: &str = "photo_library";

const SUPPORTED_DEVICE_CAPABILITY_STRINGS: &[&str] =
    &[DEVICE_CAPABILITY_CAMERA, DEVICE_CAPABILITY_PHOTO_LIBRARY];

impl DeviceCapability {
    /// Stable string id used across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camera => DEVICE_CAPABILITY_CAMERA,
            Self::PhotoLibrary => DEVICE_CAPABILITY_PHOTO_LIBRARY,
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Camera => "Take a photo with the camera and attach it to the item.",
            Self::PhotoLibrary => "Pick an existing photo from the photo library.",
        }
    }

    /// Blocking notice shown when the OS refuses access.
    pub fn permission_notice(self) -> &'static str {
        match self {
            Self::Camera => "Camera permission is required.",
            Self::PhotoLibrary => "Photo library permission is required.",
        }
    }
}

impl Display for DeviceCapability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns supported capability strings.
pub fn supported_device_capability_strings() -> &'static [&'static str] {
    SUPPORTED_DEVICE_CAPABILITY_STRINGS
}

/// Parses one capability from its stable string id.
pub fn parse_device_capability(value: &str) -> Result<DeviceCapability, CapabilityParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(CapabilityParseError::Empty);
    }

    match normalized {
        DEVICE_CAPABILITY_CAMERA => Ok(DeviceCapability::Camera),
        DEVICE_CAPABILITY_PHOTO_LIBRARY => Ok(DeviceCapability::PhotoLibrary),
        other => Err(CapabilityParseError::Unsupported(other.to_string())),
    }
}

/// Capability parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityParseError {
    Empty,
    Unsupported(String),
}

impl Display for CapabilityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "device capability value must not be empty"),
            Self::Unsupported(value) => write!(f, "device capability is unsupported: {value}"),
        }
    }
}

impl Error for CapabilityParseError {}
