use dioxus::document::eval;
use serde::Deserialize;

use mockview_core::model::MediaError;

pub const PREVIEW_ELEMENT_ID: &str = "interview-preview";

#[derive(Clone, Debug, Deserialize)]
struct AcquireResult {
    ok: bool,
    #[serde(default)]
    error: String,
}

const ACQUIRE_SCRIPT_TEMPLATE: &str = r#"
    if (!navigator.mediaDevices || !navigator.mediaDevices.getUserMedia) {
        return { ok: false, error: "NotFoundError" };
    }
    try {
        const stream = await navigator.mediaDevices.getUserMedia({ video: {video}, audio: {audio} });
        window.__mockviewStream = stream;
        const preview = document.getElementById("{element_id}");
        if (preview) { preview.srcObject = stream; }
        return { ok: true, error: "" };
    } catch (err) {
        return { ok: false, error: (err && err.name) || "UnknownError" };
    }
"#;

const STOP_SCRIPT: &str = r"
    if (window.__mockviewStream) {
        window.__mockviewStream.getTracks().forEach((track) => track.stop());
        window.__mockviewStream = null;
    }
";

fn acquire_script(video: bool, audio: bool) -> String {
    ACQUIRE_SCRIPT_TEMPLATE
        .replace("{video}", if video { "true" } else { "false" })
        .replace("{audio}", if audio { "true" } else { "false" })
        .replace("{element_id}", PREVIEW_ELEMENT_ID)
}

fn set_tracks_script(kind: &str, enabled: bool) -> String {
    format!(
        r"
        if (window.__mockviewStream) {{
            window.__mockviewStream.get{kind}Tracks().forEach((track) => {{ track.enabled = {enabled}; }});
        }}
        "
    )
}

/// Ask the webview for camera and/or microphone access.
///
/// # Errors
///
/// Returns the `MediaError` matching the browser's failure name. A webview
/// that cannot evaluate the request at all reports `MediaError::Other`.
pub async fn acquire_media(video: bool, audio: bool) -> Result<(), MediaError> {
    let script = acquire_script(video, audio);
    match eval(&script).join::<AcquireResult>().await {
        Ok(result) if result.ok => Ok(()),
        Ok(result) => Err(MediaError::from_browser_name(&result.error)),
        Err(err) => {
            tracing::warn!(error = ?err, "media request could not be evaluated");
            Err(MediaError::Other("media devices are unavailable".into()))
        }
    }
}

pub async fn set_microphone(enabled: bool) {
    let _ = eval(&set_tracks_script("Audio", enabled)).await;
}

pub async fn set_camera(enabled: bool) {
    let _ = eval(&set_tracks_script("Video", enabled)).await;
}

pub fn release_media() {
    let _ = eval(STOP_SCRIPT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_script_requests_only_needed_devices() {
        let script = acquire_script(false, true);
        assert!(script.contains("getUserMedia({ video: false, audio: true })"));
        assert!(script.contains("getElementById(\"interview-preview\")"));
        assert!(!script.contains("{video}"));
    }

    #[test]
    fn track_script_targets_kind() {
        let script = set_tracks_script("Audio", false);
        assert!(script.contains("getAudioTracks()"));
        assert!(script.contains("track.enabled = false;"));
    }
}
