/// Volume capacity queries.
///
/// Windows uses `GetDiskFreeSpaceExW`; Unix uses `statvfs`. Both report
/// the space available to the calling user, which is what the report's
/// "Available Free Space" line shows.
use crate::error::VolumeError;
use std::path::Path;

/// Total and available bytes on one volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumeSpace {
    pub total_bytes: u64,
    /// Free bytes usable by the current user.
    pub available_bytes: u64,
}

impl VolumeSpace {
    pub fn new(total_bytes: u64, available_bytes: u64) -> Self {
        Self {
            total_bytes,
            available_bytes,
        }
    }

    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.available_bytes)
    }
}

/// Query the capacity of the volume containing `path`.
#[cfg(windows)]
pub fn query_volume(path: &Path) -> Result<VolumeSpace, VolumeError> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let root_pcwstr = windows::core::PCWSTR(wide.as_ptr());

    let mut free_caller: u64 = 0;
    let mut total: u64 = 0;
    let mut free_total: u64 = 0;
    unsafe {
        GetDiskFreeSpaceExW(
            root_pcwstr,
            Some(&mut free_caller as *mut u64),
            Some(&mut total as *mut u64),
            Some(&mut free_total as *mut u64),
        )
    }
    .map_err(|e| VolumeError::Query {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    Ok(VolumeSpace::new(total, free_caller))
}

/// Query the capacity of the volume containing `path`.
#[cfg(unix)]
pub fn query_volume(path: &Path) -> Result<VolumeSpace, VolumeError> {
    use std::ffi::CString;
    use std::io;
    use std::os::unix::ffi::OsStrExt;

    let query_error = |source: io::Error| VolumeError::Query {
        path: path.to_path_buf(),
        source,
    };

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| query_error(io::Error::new(io::ErrorKind::InvalidInput, e)))?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat as *mut _) };
    if rc != 0 {
        return Err(query_error(io::Error::last_os_error()));
    }

    let fragment = stat.f_frsize as u128;
    let total = (stat.f_blocks as u128).saturating_mul(fragment) as u64;
    let available = (stat.f_bavail as u128).saturating_mul(fragment) as u64;
    Ok(VolumeSpace::new(total, available))
}

/// Query the capacity of the volume containing `path`.
#[cfg(not(any(windows, unix)))]
pub fn query_volume(_path: &Path) -> Result<VolumeSpace, VolumeError> {
    Err(VolumeError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_bytes() {
        let space = VolumeSpace::new(1000, 600);
        assert_eq!(space.used_bytes(), 400);
    }

    #[test]
    fn test_used_bytes_saturates() {
        let space = VolumeSpace::new(100, 200);
        assert_eq!(space.used_bytes(), 0);
    }

    #[cfg(any(windows, unix))]
    #[test]
    fn test_query_temp_volume() {
        let tmp = tempfile::TempDir::new().unwrap();
        let space = query_volume(tmp.path()).expect("volume query should succeed");
        assert!(space.total_bytes > 0);
        assert!(space.available_bytes <= space.total_bytes);
    }

    #[cfg(any(windows, unix))]
    #[test]
    fn test_query_missing_path_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("no").join("such").join("dir");
        assert!(query_volume(&missing).is_err());
    }
}
