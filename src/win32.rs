use std::{ffi::OsString, os::windows::ffi::OsStringExt};

use windows::{Win32::Graphics::Gdi::*, core::PCWSTR};

use crate::DisplayRecord;

/// The error type for Windows-specific operations.
/// This is a type alias for [`windows::core::Error`][windows::core::Error].
///
/// [windows::core::Error]: https://docs.rs/windows/latest/windows/core/struct.Error.html
pub type WindowsError = windows::core::Error;

fn wide_to_string(slice: &[u16]) -> String {
    let len = slice.iter().position(|&c| c == 0).unwrap_or(slice.len());
    OsString::from_wide(&slice[..len])
        .to_string_lossy()
        .into_owned()
}

/// Reads the current mode settings for one enumerated device.
///
/// Returns `None` when the settings cannot be read (a detached or
/// misbehaving device); the caller skips that device and keeps going.
fn read_display_settings(index: u32, device: &DISPLAY_DEVICEW) -> Option<DisplayRecord> {
    let mut mode = DEVMODEW {
        dmSize: std::mem::size_of::<DEVMODEW>() as u16,
        ..Default::default()
    };

    let found = unsafe {
        EnumDisplaySettingsW(
            PCWSTR(device.DeviceName.as_ptr()),
            ENUM_CURRENT_SETTINGS,
            &mut mode,
        )
    };
    if !found.as_bool() {
        return None;
    }

    // Position and orientation live in the display arm of the DEVMODEW union.
    let (position, orientation) = unsafe {
        let display_mode = &mode.Anonymous1.Anonymous2;
        (display_mode.dmPosition, display_mode.dmDisplayOrientation.0)
    };

    Some(DisplayRecord {
        index,
        device_name: wide_to_string(&device.DeviceName),
        device_string: wide_to_string(&device.DeviceString),
        device_id: wide_to_string(&device.DeviceID),
        device_key: wide_to_string(&device.DeviceKey),
        width: mode.dmPelsWidth,
        height: mode.dmPelsHeight,
        position_x: position.x,
        position_y: position.y,
        frequency: mode.dmDisplayFrequency,
        bits_per_pixel: mode.dmBitsPerPel,
        orientation,
        is_primary: device.StateFlags & DISPLAY_DEVICE_PRIMARY_DEVICE != 0,
        state_flags: device.StateFlags,
    })
}

/// Get a record for every display device attached to the desktop.
///
/// Devices are walked in adapter order with `EnumDisplayDevicesW`;
/// enumeration ends when the OS reports no device at the next ordinal.
/// `EDD_GET_DEVICE_INTERFACE_NAME` is requested so the device id comes back
/// as the hash-delimited device interface path rather than a plain bus path.
pub fn list_windows_displays() -> Result<Vec<DisplayRecord>, WindowsError> {
    let mut displays = Vec::new();
    let mut device_num = 0u32;

    loop {
        let mut device = DISPLAY_DEVICEW {
            cb: std::mem::size_of::<DISPLAY_DEVICEW>() as u32,
            ..Default::default()
        };

        let found = unsafe {
            EnumDisplayDevicesW(
                PCWSTR::null(),
                device_num,
                &mut device,
                EDD_GET_DEVICE_INTERFACE_NAME,
            )
        };
        if !found.as_bool() {
            break;
        }

        if device.StateFlags & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP != 0
            && let Some(record) = read_display_settings(device_num, &device)
        {
            displays.push(record);
        }

        device_num += 1;
    }

    Ok(displays)
}
