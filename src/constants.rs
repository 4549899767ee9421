//! Shared UI constants such as colors, timeline geometry, and bridge scripts.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const SUBTITLE_SELECTED: &str = "#3b82f6";
pub const SUBTITLE_UNSELECTED: &str = "#2563eb";
pub const ACTIVE_LANE_TINT: &str = "rgba(59, 130, 246, 0.08)";
pub const LANE_DIVIDER: &str = "#27272a";
pub const PLAYHEAD_COLOR: &str = "#ef4444";

pub const TIMELINE_HEIGHT: f64 = 220.0;
pub const TIMELINE_BASE_PX_PER_SECOND: f64 = 100.0;
pub const TIMELINE_MIN_ZOOM: f64 = 0.1;
pub const TIMELINE_MAX_ZOOM: f64 = 5.0;
pub const TIMELINE_ZOOM_STEP: f64 = 1.25;
pub const TIMELINE_RULER_HEIGHT: f64 = 30.0;
pub const TIMELINE_LANE_MARGIN: f64 = 4.0;
pub const TIMELINE_LABEL_INTERVAL_SECONDS: u64 = 5;
pub const PLAYHEAD_WIDTH: f64 = 2.0;

pub const DEFAULT_LANE_COUNT: usize = 4;
pub const MAX_LANE_COUNT: usize = 8;
pub const DEFAULT_SUBTITLE_SECONDS: f64 = 2.0;
pub const DEFAULT_SUBTITLE_TEXT: &str = "New subtitle";
pub const SEEK_STEP_SECONDS: f64 = 5.0;
pub const SYNC_TOLERANCE_SECONDS: f64 = 0.1;
pub const SCROLLBAR_MIN_THUMB_PX: f64 = 20.0;
pub const SCROLLBAR_HEIGHT: f64 = 16.0;

pub const VIDEO_ELEMENT_ID: &str = "subtitle-video";

/// Bridges the `<video>` element to Rust: native events go out through
/// `dioxus.send`, transport commands come back through `dioxus.recv`.
pub const PLAYER_BRIDGE_SCRIPT: &str = r#"
const videoId = "subtitle-video";
let bound = null;

function getVideo() {
    const video = document.getElementById(videoId);
    if (video && video !== bound) {
        bound = video;
        video.addEventListener("timeupdate", () => dioxus.send({ kind: "time", time: video.currentTime }));
        video.addEventListener("seeked", () => dioxus.send({ kind: "time", time: video.currentTime }));
        video.addEventListener("loadedmetadata", () => dioxus.send({ kind: "duration", duration: video.duration }));
        video.addEventListener("durationchange", () => dioxus.send({ kind: "duration", duration: video.duration }));
        video.addEventListener("play", () => dioxus.send({ kind: "play" }));
        video.addEventListener("pause", () => dioxus.send({ kind: "pause" }));
        if (video.readyState >= 1) {
            dioxus.send({ kind: "duration", duration: video.duration });
        }
    }
    return video;
}

function attach() {
    if (!getVideo()) {
        setTimeout(attach, 100);
    }
}

attach();

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    const video = getVideo();
    if (!video) {
        continue;
    }
    if (msg.kind === "seek") {
        video.currentTime = msg.time;
    } else if (msg.kind === "seek_by") {
        video.currentTime = Math.max(0, video.currentTime + msg.delta);
    } else if (msg.kind === "play") {
        video.play().catch(() => {});
    } else if (msg.kind === "pause") {
        video.pause();
    }
}
"#;

/// Paints a viewport-sized timeline scene onto the canvas. Commands arrive
/// already translated by the scroll offset.
pub const TIMELINE_CANVAS_SCRIPT: &str = r#"
const canvasId = "timeline-canvas";

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    const canvas = document.getElementById(canvasId);
    if (!canvas) {
        continue;
    }
    const ctx = canvas.getContext("2d");
    if (!ctx) {
        continue;
    }
    const width = Math.max(1, Math.ceil(msg.width));
    const height = Math.max(1, Math.ceil(msg.height));
    if (canvas.width !== width || canvas.height !== height) {
        canvas.width = width;
        canvas.height = height;
    }
    canvas.style.width = width + "px";
    canvas.style.height = height + "px";

    ctx.clearRect(0, 0, width, height);
    for (const cmd of msg.commands) {
        if (cmd.kind === "rect") {
            ctx.fillStyle = cmd.color;
            ctx.fillRect(cmd.x, cmd.y, cmd.width, cmd.height);
        } else if (cmd.kind === "text") {
            ctx.fillStyle = cmd.color;
            ctx.font = "10px 'SF Mono', Consolas, monospace";
            ctx.textBaseline = "top";
            ctx.fillText(cmd.text, cmd.x, cmd.y);
        }
    }
}
"#;

pub const TIMELINE_VIEWPORT_SCRIPT: &str = r#"
const hostId = "timeline-viewport";
let last = null;

function sendSize() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const next = { width: host.clientWidth || 0, height: host.clientHeight || 0 };
    if (last &&
        Math.abs(last.width - next.width) < 0.5 &&
        Math.abs(last.height - next.height) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendSize());
    observer.observe(host);
    window.addEventListener("resize", sendSize, { passive: true });
    sendSize();
}

attach();
await new Promise(() => {});
"#;
