use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// One frame's worth of input, produced by [`InputSampler::sample`].
///
/// Movement keys report their held state; look and scroll are accumulated
/// deltas that the sampler clears once read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// W held.
    pub forward: bool,
    /// S held.
    pub backward: bool,
    /// A held.
    pub left: bool,
    /// D held.
    pub right: bool,
    /// Accumulated cursor motion since the last sample, in degrees-worth of
    /// raw pixels (x = yaw right, y = pitch up).
    pub look: Vec2,
    /// Accumulated scroll since the last sample (positive = zoom in).
    pub scroll: f32,
}

/// Accumulates window events into value state read once per frame.
///
/// This replaces callback-style handlers mutating globals: the event loop
/// feeds events in as they arrive, and the render step calls
/// [`sample`](Self::sample) exactly once before drawing, which returns the
/// accumulated deltas and clears them.
#[derive(Debug, Default)]
pub struct InputSampler {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    look: Vec2,
    scroll: f32,
    /// Last cursor position; `None` until the first cursor event, so the
    /// initial position establishes the reference without a delta spike.
    last_cursor: Option<Vec2>,
}

impl InputSampler {
    /// Create a sampler with no held keys and no pending deltas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a window event. Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let pressed = event.state == ElementState::Pressed;
                match code {
                    KeyCode::KeyW => self.forward = pressed,
                    KeyCode::KeyS => self.backward = pressed,
                    KeyCode::KeyA => self.left = pressed,
                    KeyCode::KeyD => self.right = pressed,
                    _ => return false,
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current = Vec2::new(position.x as f32, position.y as f32);
                if let Some(last) = self.last_cursor {
                    // Window y grows downward; flip so moving up pitches up.
                    self.look += Vec2::new(current.x - last.x, last.y - current.y);
                }
                self.last_cursor = Some(current);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                true
            }
            WindowEvent::Focused(false) => {
                // Release events are lost while unfocused; stop all movement
                // so a key held across the focus change can't stick.
                self.forward = false;
                self.backward = false;
                self.left = false;
                self.right = false;
                false
            }
            _ => false,
        }
    }

    /// Read this frame's input and clear the accumulated deltas. Held-key
    /// state persists until the matching release event arrives.
    pub fn sample(&mut self) -> InputSample {
        let sample = InputSample {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
            look: self.look,
            scroll: self.scroll,
        };
        self.look = Vec2::ZERO;
        self.scroll = 0.0;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    fn cursor(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: winit::event::DeviceId::dummy(),
            position: PhysicalPosition::new(x, y),
        }
    }

    #[test]
    fn first_cursor_event_produces_no_delta() {
        let mut sampler = InputSampler::new();
        let _ = sampler.handle_event(&cursor(400.0, 300.0));
        assert_eq!(sampler.sample().look, Vec2::ZERO);
    }

    #[test]
    fn cursor_deltas_accumulate_and_clear() {
        let mut sampler = InputSampler::new();
        let _ = sampler.handle_event(&cursor(100.0, 100.0));
        let _ = sampler.handle_event(&cursor(110.0, 95.0));
        let _ = sampler.handle_event(&cursor(115.0, 95.0));

        // y flipped: cursor moved up 5px => positive pitch delta.
        assert_eq!(sampler.sample().look, Vec2::new(15.0, 5.0));
        // Cleared after sampling.
        assert_eq!(sampler.sample().look, Vec2::ZERO);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut sampler = InputSampler::new();
        sampler.forward = true;
        sampler.left = true;

        // Gaining focus changes nothing.
        let _ = sampler.handle_event(&WindowEvent::Focused(true));
        assert!(sampler.forward && sampler.left);

        // Losing focus drops every held key.
        let _ = sampler.handle_event(&WindowEvent::Focused(false));
        let sample = sampler.sample();
        assert!(!sample.forward && !sample.backward && !sample.left && !sample.right);
    }

    #[test]
    fn scroll_accumulates_and_clears() {
        let mut sampler = InputSampler::new();
        let _ = sampler.handle_event(&WindowEvent::MouseWheel {
            device_id: winit::event::DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(0.0, 2.0),
            phase: winit::event::TouchPhase::Moved,
        });
        let _ = sampler.handle_event(&WindowEvent::MouseWheel {
            device_id: winit::event::DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(0.0, 1.0),
            phase: winit::event::TouchPhase::Moved,
        });
        assert_eq!(sampler.sample().scroll, 3.0);
        assert_eq!(sampler.sample().scroll, 0.0);
    }
}
