//! Application state shared by the window loop and headless drivers.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::animation::NeedleAnimator;
use crate::config::GaugeConfig;
use crate::controller::InputController;
use crate::error::InputError;
use crate::geometry::ScreenLayout;
use crate::notification::Notifications;
use crate::pressure::{pressure_of, Pressure};
use crate::scene::{add_controls, add_gauge, DrawCommand, Scene};

/// Commands accepted from outside the window, e.g. a stdin reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GaugeCommand {
    /// Replace the text field contents.
    SetInput(String),
    /// Commit the text field, as if the button was pressed.
    Apply,
    /// `SetInput` followed by `Apply`.
    Submit(String),
}

pub struct AppState {
    config: GaugeConfig,
    layout: ScreenLayout,
    controller: InputController,
    needle: NeedleAnimator,
    notifications: Notifications,
    last_tick: Option<Instant>,
}

impl AppState {
    pub fn new(config: &GaugeConfig) -> Self {
        let pressure = config.initial_pressure;
        Self {
            config: config.clone(),
            layout: config.layout(),
            controller: InputController::with_pressure(pressure),
            needle: NeedleAnimator::new(pressure.angle(), config.animation_duration(), config.easing),
            notifications: Notifications::new(config.toast_duration()),
            last_tick: None,
        }
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn needle(&self) -> &NeedleAnimator {
        &self.needle
    }

    pub fn pressure(&self) -> Pressure {
        self.controller.pressure()
    }

    /// Number currently shown under the needle.
    pub fn readout(&self) -> i64 {
        pressure_of(self.needle.value())
    }

    pub fn type_text(&mut self, text: &str) {
        self.controller.push_str(text);
    }

    pub fn backspace(&mut self) {
        self.controller.pop_char();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.controller.set_raw_input(text);
    }

    /// Commit the text field. A rejection raises a toast; a success starts
    /// timing the new animation at `now`.
    pub fn apply(&mut self, now: Instant) -> Result<Pressure, InputError> {
        match self.controller.commit(&mut self.needle) {
            Ok(pressure) => {
                self.last_tick = Some(now);
                Ok(pressure)
            }
            Err(err) => {
                self.notifications.show(err.user_message(), now);
                Err(err)
            }
        }
    }

    /// Handle a left click at buffer coordinates. Returns whether the
    /// button was hit.
    pub fn click(&mut self, x: f64, y: f64, now: Instant) -> bool {
        if !self.layout.button.contains(x, y) {
            return false;
        }
        let _ = self.apply(now);
        true
    }

    pub fn handle_command(&mut self, command: GaugeCommand, now: Instant) {
        match command {
            GaugeCommand::SetInput(text) => self.set_input(text),
            GaugeCommand::Apply => {
                let _ = self.apply(now);
            }
            GaugeCommand::Submit(text) => {
                self.set_input(text);
                let _ = self.apply(now);
            }
        }
    }

    /// Apply every queued command without blocking.
    pub fn drain_commands(&mut self, receiver: &Receiver<GaugeCommand>, now: Instant) {
        while let Ok(command) = receiver.try_recv() {
            self.handle_command(command, now);
        }
    }

    /// Advance animation by the wall-clock time since the previous call.
    pub fn advance(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);
        self.tick(dt);
        self.notifications.prune(now);
    }

    pub fn tick(&mut self, dt: Duration) {
        self.needle.tick(dt);
    }

    pub fn active_toast(&self, now: Instant) -> Option<&str> {
        self.notifications.active(now)
    }

    pub fn scene(&self, now: Instant) -> Scene {
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Clear(self.config.background_color));
        add_gauge(&mut scene, &self.layout.gauge, self.needle.value(), &self.config);
        add_controls(
            &mut scene,
            &self.layout,
            self.controller.raw_input(),
            self.active_toast(now),
            &self.config,
        );
        scene
    }
}
