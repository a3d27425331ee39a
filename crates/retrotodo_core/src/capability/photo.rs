//! Camera / photo-library acquisition flow.
//!
//! # Responsibility
//! - Define the provider contract both photo sources implement.
//! - Run the permission-gated acquisition and map it to a two-outcome result.
//! - Apply acquired photos to the store's draft.
//!
//! # Invariants
//! - `launch` is never called when permission is denied.
//! - Acquisition does not borrow the store; overlapping acquisitions are
//!   applied in completion order (last writer wins).
//! - Photo URIs are never logged.

use crate::capability::device::DeviceCapability;
use crate::model::todo::PhotoRef;
use crate::repo::todo_repo::TodoRepository;
use crate::store::todo_list_store::TodoListStore;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default JPEG quality requested from the capture UI.
pub const DEFAULT_CAPTURE_QUALITY: f32 = 0.8;

/// OS answer to a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Result of launching the capture/pick UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// User dismissed the UI without choosing a photo.
    Cancelled,
    /// User produced a photo at the given device-local URI.
    Captured(PhotoRef),
}

/// Options forwarded to the platform capture/pick UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    /// Let the user crop/edit before returning.
    pub allows_editing: bool,
    /// Compression quality in `0.0..=1.0`.
    pub quality: f32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            allows_editing: true,
            quality: DEFAULT_CAPTURE_QUALITY,
        }
    }
}

impl CaptureOptions {
    /// Builds validated options.
    pub fn new(allows_editing: bool, quality: f32) -> Result<Self, CaptureOptionsError> {
        let options = Self {
            allows_editing,
            quality,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), CaptureOptionsError> {
        if !(0.0..=1.0).contains(&self.quality) {
            return Err(CaptureOptionsError::QualityOutOfRange(self.quality));
        }
        Ok(())
    }
}

/// Capture option validation error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureOptionsError {
    QualityOutOfRange(f32),
}

impl Display for CaptureOptionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QualityOutOfRange(value) => {
                write!(f, "capture quality must be within 0.0..=1.0, got {value}")
            }
        }
    }
}

impl Error for CaptureOptionsError {}

/// Capability failure surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityError {
    PermissionDenied(DeviceCapability),
}

impl CapabilityError {
    /// Blocking notice text for this failure.
    pub fn notice(self) -> &'static str {
        match self {
            Self::PermissionDenied(capability) => capability.permission_notice(),
        }
    }
}

impl Display for CapabilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied(capability) => {
                write!(f, "permission denied for capability `{capability}`")
            }
        }
    }
}

impl Error for CapabilityError {}

/// Permission-gated photo source (camera or photo library).
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    fn capability(&self) -> DeviceCapability;

    async fn request_permission(&self) -> PermissionStatus;

    async fn launch(&self, options: &CaptureOptions) -> CaptureOutcome;
}

/// Receives blocking user notifications (e.g. an alert dialog).
pub trait PermissionNotifier {
    fn notify(&self, capability: DeviceCapability, message: &str);
}

/// Requests permission, then launches the provider UI.
///
/// Returns `Ok(None)` when the user cancels.
///
/// # Errors
/// - `PermissionDenied` when the OS refuses access; `launch` is skipped.
pub async fn acquire_photo(
    provider: &dyn PhotoProvider,
    options: &CaptureOptions,
) -> Result<Option<PhotoRef>, CapabilityError> {
    let capability = provider.capability();
    if provider.request_permission().await == PermissionStatus::Denied {
        warn!(
            "event=photo_acquire module=capability status=denied capability={}",
            capability
        );
        return Err(CapabilityError::PermissionDenied(capability));
    }

    match provider.launch(options).await {
        CaptureOutcome::Cancelled => {
            debug!(
                "event=photo_acquire module=capability status=cancelled capability={}",
                capability
            );
            Ok(None)
        }
        CaptureOutcome::Captured(photo) => {
            info!(
                "event=photo_acquire module=capability status=ok capability={}",
                capability
            );
            Ok(Some(photo))
        }
    }
}

/// Acquires a photo and writes it into the store's draft.
///
/// Returns whether the draft photo changed. On denial the notifier is
/// invoked with the capability's notice; the draft is left untouched on
/// denial and cancellation.
pub async fn attach_photo<R: TodoRepository>(
    store: &mut TodoListStore<R>,
    provider: &dyn PhotoProvider,
    options: &CaptureOptions,
    notifier: &dyn PermissionNotifier,
) -> bool {
    match acquire_photo(provider, options).await {
        Ok(Some(photo)) => {
            store.set_photo(photo);
            true
        }
        Ok(None) => false,
        Err(err) => {
            let CapabilityError::PermissionDenied(capability) = err;
            notifier.notify(capability, err.notice());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CaptureOptions, CaptureOptionsError, DEFAULT_CAPTURE_QUALITY};

    #[test]
    fn default_options_allow_editing_at_default_quality() {
        let options = CaptureOptions::default();
        assert!(options.allows_editing);
        assert_eq!(options.quality, DEFAULT_CAPTURE_QUALITY);
        options.validate().expect("defaults are valid");
    }

    #[test]
    fn rejects_quality_outside_unit_range() {
        let err = CaptureOptions::new(false, 1.5).expect_err("quality too high");
        assert_eq!(err, CaptureOptionsError::QualityOutOfRange(1.5));
        assert!(CaptureOptions::new(false, -0.1).is_err());
        assert!(CaptureOptions::new(false, f32::NAN).is_err());
    }
}
