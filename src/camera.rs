// Camera and gallery access.
//
// On Android the MainActivity exposes launchCamera, launchImagePicker,
// hasCameraPermission and a static result mailbox (getLastPhotoPath,
// getLastError, clearLastError) which are driven over JNI. Every failure,
// including a refused permission or an unsupported platform, is reported as
// AppError::PermissionDenied so the scan screen can show an inline alert.

use crate::error::AppError;
use std::path::PathBuf;

#[cfg(target_os = "android")]
mod android {
    use crate::error::AppError;
    use jni::objects::{JClass, JObject, JString};
    use jni::JNIEnv;
    use std::path::PathBuf;
    use std::time::Duration;

    // 100 ms polls, 60 s in total
    const POLL_INTERVAL: Duration = Duration::from_millis(100);
    const POLL_ATTEMPTS: u32 = 600;

    fn denied(what: &str, e: impl std::fmt::Display) -> AppError {
        AppError::PermissionDenied(format!("{}: {}", what, e))
    }

    fn with_activity<T>(
        f: impl FnOnce(&mut JNIEnv, &JObject) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let ctx = ndk_context::android_context();
        let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
            .map_err(|e| denied("JavaVM failed", e))?;
        let mut env = vm
            .attach_current_thread()
            .map_err(|e| denied("JNI attach failed", e))?;
        let activity = unsafe { JObject::from_raw(ctx.context().cast()) };
        if activity.is_null() {
            return Err(AppError::PermissionDenied(
                "MainActivity not initialized".to_string(),
            ));
        }
        f(&mut env, &activity)
    }

    fn static_string(
        env: &mut JNIEnv,
        cls: &JClass,
        method: &str,
    ) -> Result<Option<String>, AppError> {
        let obj = env
            .call_static_method(cls, method, "()Ljava/lang/String;", &[])
            .map_err(|e| denied(method, e))?
            .l()
            .map_err(|e| denied(method, e))?;
        if obj.is_null() {
            return Ok(None);
        }
        let value: String = env
            .get_string(&JString::from(obj))
            .map_err(|e| denied("String conversion failed", e))?
            .into();
        Ok(Some(value))
    }

    /// Calls `launcher` on the activity and polls the result mailbox
    pub fn launch_and_wait(launcher: &str, timeout_message: &str) -> Result<PathBuf, AppError> {
        with_activity(|env, activity| {
            let cls = env
                .get_object_class(activity)
                .map_err(|e| denied("getObjectClass failed", e))?;
            env.call_static_method(&cls, "clearLastError", "()V", &[])
                .map_err(|e| denied("clearLastError failed", e))?;
            env.call_method(activity, launcher, "()V", &[])
                .map_err(|e| denied(launcher, e))?;

            for _ in 0..POLL_ATTEMPTS {
                std::thread::sleep(POLL_INTERVAL);
                if let Some(path) = static_string(env, &cls, "getLastPhotoPath")? {
                    return Ok(PathBuf::from(path));
                }
                if let Some(err) = static_string(env, &cls, "getLastError")? {
                    return Err(AppError::PermissionDenied(err));
                }
            }
            Err(AppError::PermissionDenied(timeout_message.to_string()))
        })
    }

    pub fn has_camera_permission() -> Result<bool, AppError> {
        with_activity(|env, activity| {
            env.call_method(activity, "hasCameraPermission", "()Z", &[])
                .map_err(|e| denied("hasCameraPermission failed", e))?
                .z()
                .map_err(|e| denied("Boolean conversion failed", e))
        })
    }
}

/// Opens the camera and returns the path of the captured photo
#[cfg(target_os = "android")]
pub fn capture_photo() -> Result<PathBuf, AppError> {
    log::info!("Launching camera");
    android::launch_and_wait("launchCamera", "Camera timeout - no photo taken")
}

/// Opens the gallery and returns the path of the selected image
#[cfg(target_os = "android")]
pub fn pick_image() -> Result<PathBuf, AppError> {
    log::info!("Launching image picker");
    android::launch_and_wait(
        "launchImagePicker",
        "Image picker timeout - no selection made",
    )
}

#[cfg(target_os = "android")]
pub fn has_camera_permission() -> Result<bool, AppError> {
    android::has_camera_permission()
}

#[cfg(not(target_os = "android"))]
pub fn capture_photo() -> Result<PathBuf, AppError> {
    Err(AppError::PermissionDenied(
        "Camera not available on this platform".to_string(),
    ))
}

#[cfg(not(target_os = "android"))]
pub fn pick_image() -> Result<PathBuf, AppError> {
    Err(AppError::PermissionDenied(
        "Image picker not available on this platform".to_string(),
    ))
}

#[cfg(not(target_os = "android"))]
pub fn has_camera_permission() -> Result<bool, AppError> {
    Ok(false)
}

/// Fails with `PermissionDenied` unless the camera permission is granted
pub fn ensure_camera_permission() -> Result<(), AppError> {
    require_granted(has_camera_permission())
}

fn require_granted(granted: Result<bool, AppError>) -> Result<(), AppError> {
    match granted? {
        true => Ok(()),
        false => Err(AppError::PermissionDenied(
            "Camera access was not granted. Allow it in the system settings.".to_string(),
        )),
    }
}
