// Rendering seam
//
// The simulation never draws. Each tick it hands a read-only `FrameSnapshot`
// to whatever `Renderer` the frame driver installed.

use crate::core::Rect;
use glam::Vec2;
use winit::window::Window;

/// Read-only copy of everything a renderer may draw for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Body bounding box
    pub body: Rect,
    pub velocity: Vec2,
    pub grounded: bool,
    /// Platform rects in resolution order
    pub obstacles: Vec<Rect>,
    /// Movement state label ("idle", "walk", ...)
    pub state: &'static str,
    /// Seconds spent in `state`
    pub state_time: f32,
    pub paused: bool,
    /// Frame rate measured by the frame driver
    pub fps: f32,
}

/// Something that presents snapshots to the player
pub trait Renderer {
    fn render(&mut self, snapshot: &FrameSnapshot);
}

/// What the body is standing on, if anything
///
/// Platforms are numbered from 1 in resolution order.
pub fn support_label(snapshot: &FrameSnapshot) -> Option<String> {
    if !snapshot.grounded {
        return None;
    }

    let body = snapshot.body;
    let platform = snapshot.obstacles.iter().position(|rect| {
        (rect.top() - body.bottom()).abs() < 0.5
            && body.right() > rect.left()
            && body.left() < rect.right()
    });

    Some(match platform {
        Some(index) => format!("on platform {}", index + 1),
        None => "on floor".to_string(),
    })
}

/// One-line status text for a snapshot
pub fn status_line(title: &str, snapshot: &FrameSnapshot) -> String {
    let mut line = format!(
        "{} | {:.0} fps | pos ({:.0}, {:.0}) | vel ({:.0}, {:.0}) | {} {:.1}s",
        title,
        snapshot.fps,
        snapshot.body.position.x,
        snapshot.body.position.y,
        snapshot.velocity.x,
        snapshot.velocity.y,
        snapshot.state,
        snapshot.state_time,
    );
    if let Some(support) = support_label(snapshot) {
        line.push_str(" | ");
        line.push_str(&support);
    }
    if snapshot.paused {
        line.push_str(" | paused");
    }
    line
}

/// Writes a throttled status line into the window title
pub struct TitleRenderer {
    window: Window,
    title: String,
    /// Frames between title updates
    interval: u32,
    frames_since_update: u32,
}

impl TitleRenderer {
    pub fn new(window: Window, title: &str) -> Self {
        Self {
            window,
            title: title.to_string(),
            interval: 6,
            frames_since_update: 0,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Renderer for TitleRenderer {
    fn render(&mut self, snapshot: &FrameSnapshot) {
        self.frames_since_update += 1;
        if self.frames_since_update < self.interval {
            return;
        }
        self.frames_since_update = 0;
        self.window.set_title(&status_line(&self.title, snapshot));
    }
}
