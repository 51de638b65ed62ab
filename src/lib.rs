pub mod ident;
pub mod report;
#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(target_os = "windows")]
use win32::{WindowsError as PlatformError, list_windows_displays as list_platform_displays};

/// The error type for this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Display enumeration is not built into this crate for the current platform.
    #[error("display enumeration is not supported on this platform")]
    Unsupported,
    /// An error occurred in the platform-specific implementation.
    #[cfg(target_os = "windows")]
    #[error("the platform display query failed: {0}")]
    Platform(#[from] PlatformError),
}

/// A snapshot of one display device and its current mode settings.
///
/// One record is produced per device the OS reports as attached to the
/// desktop; disconnected or disabled devices never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// Ordinal position in the OS enumeration order.
    pub index: u32,
    /// The OS-internal logical name, e.g. `\\.\DISPLAY1`.
    pub device_name: String,
    /// The human-readable monitor or adapter name.
    pub device_string: String,
    /// The hardware device interface path, e.g. `\\?\DISPLAY#GSM5BBB#...`.
    ///
    /// See [Microsoft's documentation][docs] for the path format.
    ///
    /// [docs]: https://learn.microsoft.com/en-us/dotnet/standard/io/file-path-formats#dos-device-paths
    pub device_id: String,
    /// The registry key path for the device.
    pub device_key: String,
    /// Current horizontal resolution in pixels.
    pub width: u32,
    /// Current vertical resolution in pixels.
    pub height: u32,
    /// Horizontal position on the virtual desktop. Negative left of the primary.
    pub position_x: i32,
    /// Vertical position on the virtual desktop.
    pub position_y: i32,
    /// Current refresh rate in Hz.
    pub frequency: u32,
    /// Color depth in bits per pixel.
    pub bits_per_pixel: u32,
    /// Raw rotation code reported by the OS (0..=3).
    pub orientation: u32,
    /// Whether this is the primary display.
    pub is_primary: bool,
    /// Raw device state bitmask, passed through for diagnostics only.
    pub state_flags: u32,
}

/// Get all displays currently attached to the desktop, in enumeration order.
///
/// A display whose current mode settings cannot be read is skipped so that
/// one bad device does not abort the whole query.
///
/// # Errors
/// Returns [`Error::Unsupported`] on platforms without an enumeration
/// backend, or [`Error`] if the platform-specific implementation fails.
pub fn list_attached_displays() -> Result<Vec<DisplayRecord>, Error> {
    #[cfg(target_os = "windows")]
    {
        Ok(list_platform_displays()?)
    }
    #[cfg(not(target_os = "windows"))]
    {
        Err(Error::Unsupported)
    }
}
