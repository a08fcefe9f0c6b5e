use log::{debug, info, trace};
use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{
    buffer::PointBuffer,
    config::{active_config, GestureMetrics},
    recognizer::analyze,
    trace::RecognitionTrace,
    types::{
        GesturePoint, Letter, PointerEvent, PointerEventKind, TrackerOutput, TrackerStateId,
    },
};

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug)]
enum GestureHsmEvent {
    Press { t_ms: u64, point: GesturePoint },
    Move { t_ms: u64, point: GesturePoint },
    Release { t_ms: u64, point: GesturePoint },
    Cancel { t_ms: u64 },
    /// Host-side abort (disable) that is not part of the pointer stream.
    Reset,
}

impl From<PointerEvent> for GestureHsmEvent {
    fn from(event: PointerEvent) -> Self {
        let (t_ms, point) = (event.t_ms, event.point());
        match event.kind {
            PointerEventKind::Press => Self::Press { t_ms, point },
            PointerEventKind::Move => Self::Move { t_ms, point },
            PointerEventKind::Release => Self::Release { t_ms, point },
            PointerEventKind::Cancel => Self::Cancel { t_ms },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum EventSource {
    #[default]
    Direct,
    /// Routed in by an ancestor that already owns the pointer stream.
    Forwarded,
}

#[derive(Default)]
struct DispatchContext {
    source: EventSource,
    output: TrackerOutput,
    detected: Option<Letter>,
}

/// Captures single-stroke gestures and reports the letter they draw.
///
/// Presses and short drags pass through untouched. Once a drag travels
/// `drag_threshold_px` from its press point the gesture is claimed, every
/// further move requests a trail redraw, and the release runs recognition
/// exactly once. `on_letter` fires only for captured gestures that match.
pub struct GestureTracker<F>
where
    F: FnMut(Letter),
{
    machine: statig::blocking::StateMachine<GestureHsm>,
    enabled: bool,
    on_letter: F,
}

impl<F> GestureTracker<F>
where
    F: FnMut(Letter),
{
    pub fn new(metrics: GestureMetrics, on_letter: F) -> Self {
        Self {
            machine: GestureHsm::new(metrics).state_machine(),
            enabled: true,
            on_letter,
        }
    }

    /// Builds a tracker from the compiled configuration at `density` pixels per dp.
    pub fn with_density(density: f32, on_letter: F) -> Self {
        Self::new(active_config().metrics(density), on_letter)
    }

    /// Event delivered straight to this component.
    pub fn on_event(&mut self, event: PointerEvent) -> TrackerOutput {
        self.dispatch(event, EventSource::Direct)
    }

    /// Event routed in by an ancestor gesture handler. Transitions are the same
    /// as for [`Self::on_event`], but capture never asks the ancestor to stop
    /// intercepting since it is the one delivering the stream.
    pub fn forward_event(&mut self, event: PointerEvent) -> TrackerOutput {
        self.dispatch(event, EventSource::Forwarded)
    }

    /// Disabling takes effect immediately and drops any gesture in progress
    /// without recognizing it.
    pub fn set_enabled(&mut self, enabled: bool) -> TrackerOutput {
        if self.enabled == enabled {
            return TrackerOutput::default();
        }
        self.enabled = enabled;
        if enabled {
            return TrackerOutput::default();
        }

        let mut context = DispatchContext::default();
        self.machine
            .handle_with_context(&GestureHsmEvent::Reset, &mut context);
        context.output
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn metrics(&self) -> &GestureMetrics {
        &self.machine.inner().metrics
    }

    pub fn state_id(&self) -> TrackerStateId {
        self.machine.inner().state_id
    }

    /// Points recorded for the gesture in progress.
    pub fn buffered_points(&self) -> &[GesturePoint] {
        self.machine.inner().buffer.as_slice()
    }

    /// Points of the feedback trail; empty unless the gesture is captured.
    pub fn trail_points(&self) -> &[GesturePoint] {
        let hsm = self.machine.inner();
        if hsm.state_id == TrackerStateId::TrackingCaptured {
            hsm.buffer.as_slice()
        } else {
            &[]
        }
    }

    /// Trace of the most recent recognition run, if any gesture was captured.
    pub fn last_trace(&self) -> Option<&RecognitionTrace> {
        self.machine.inner().last_trace.as_ref()
    }

    fn dispatch(&mut self, event: PointerEvent, source: EventSource) -> TrackerOutput {
        if !self.enabled {
            return TrackerOutput::default();
        }
        let mut context = DispatchContext {
            source,
            ..DispatchContext::default()
        };
        self.machine
            .handle_with_context(&GestureHsmEvent::from(event), &mut context);
        if let Some(letter) = context.detected {
            (self.on_letter)(letter);
        }
        context.output
    }
}

#[cfg(feature = "graphics")]
impl<F> GestureTracker<F>
where
    F: FnMut(Letter),
{
    /// Renders [`Self::trail_points`] with the configured stroke width.
    pub fn draw_trail<C, D>(&self, color: C, target: &mut D) -> Result<(), D::Error>
    where
        C: embedded_graphics::pixelcolor::PixelColor,
        D: embedded_graphics::draw_target::DrawTarget<Color = C>,
    {
        super::trail::draw_trail(
            self.trail_points(),
            color,
            self.metrics().trail_stroke_width_px,
            target,
        )
    }
}

struct GestureHsm {
    metrics: GestureMetrics,
    buffer: PointBuffer,
    anchor: GesturePoint,
    state_id: TrackerStateId,
    last_trace: Option<RecognitionTrace>,
}

impl GestureHsm {
    fn new(metrics: GestureMetrics) -> Self {
        Self {
            metrics,
            buffer: PointBuffer::new(),
            anchor: GesturePoint::default(),
            state_id: TrackerStateId::Idle,
            last_trace: None,
        }
    }

    fn begin(&mut self, point: GesturePoint) {
        self.buffer.clear();
        self.buffer.push(point);
        self.anchor = point;
        self.state_id = TrackerStateId::TrackingSubthreshold;
    }

    /// Drops the gesture; a visible trail has to be erased.
    fn discard(&mut self, context: &mut DispatchContext) {
        if self.state_id == TrackerStateId::TrackingCaptured {
            context.output.redraw = true;
        }
        self.buffer.clear();
        self.state_id = TrackerStateId::Idle;
    }

    fn crossed_threshold(&self, point: GesturePoint) -> bool {
        self.anchor.distance_to(point) >= self.metrics.drag_threshold_px
    }

    fn capture(&mut self, context: &mut DispatchContext) {
        self.state_id = TrackerStateId::TrackingCaptured;
        context.output = TrackerOutput {
            handled: true,
            disallow_intercept: context.source == EventSource::Direct,
            redraw: true,
        };
    }

    fn recognize(&mut self, t_ms: u64, context: &mut DispatchContext) {
        let mut result = analyze(self.buffer.as_slice(), &self.metrics);
        result.overflowed = self.buffer.overflowed();
        trace!("gesture: trace t={}ms {}", t_ms, result);
        match result.letter() {
            Some(letter) => {
                info!("gesture: recognized {} t={}ms", letter, t_ms);
                context.detected = Some(letter);
            }
            None => debug!("gesture: no letter t={}ms dirs={}", t_ms, result.directions),
        }
        self.last_trace = Some(result);
    }
}

#[state_machine(initial = "State::idle()")]
impl GestureHsm {
    #[state]
    fn idle(&mut self, event: &GestureHsmEvent) -> Outcome<State> {
        match event {
            GestureHsmEvent::Press { point, .. } => {
                self.begin(*point);
                Transition(State::tracking_subthreshold())
            }
            _ => Handled,
        }
    }

    #[state(superstate = "tracking")]
    fn tracking_subthreshold(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        match event {
            GestureHsmEvent::Move { t_ms, point } => {
                self.buffer.push(*point);
                if !self.crossed_threshold(*point) {
                    return Handled;
                }
                self.capture(context);
                debug!(
                    "gesture: captured t={}ms points={} source={:?}",
                    t_ms,
                    self.buffer.len(),
                    context.source
                );
                Transition(State::tracking_captured())
            }
            GestureHsmEvent::Release { t_ms, point } => {
                self.buffer.push(*point);
                debug!("gesture: released below threshold t={}ms", t_ms);
                self.discard(context);
                Transition(State::idle())
            }
            _ => Super,
        }
    }

    #[state(superstate = "tracking")]
    fn tracking_captured(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        match event {
            GestureHsmEvent::Move { point, .. } => {
                self.buffer.push(*point);
                context.output.handled = true;
                context.output.redraw = true;
                Handled
            }
            GestureHsmEvent::Release { t_ms, point } => {
                self.buffer.push(*point);
                debug!(
                    "gesture: released t={}ms points={} overflowed={}",
                    t_ms,
                    self.buffer.len(),
                    self.buffer.overflowed()
                );
                self.recognize(*t_ms, context);
                context.output.handled = true;
                self.discard(context);
                Transition(State::idle())
            }
            _ => Super,
        }
    }

    /// Shared by both tracking states: aborts and restarts.
    #[superstate]
    fn tracking(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        match event {
            GestureHsmEvent::Press { t_ms, point } => {
                debug!("gesture: restarted by press t={}ms", t_ms);
                self.discard(context);
                self.begin(*point);
                Transition(State::tracking_subthreshold())
            }
            GestureHsmEvent::Cancel { t_ms } => {
                debug!("gesture: cancelled t={}ms", t_ms);
                self.discard(context);
                Transition(State::idle())
            }
            GestureHsmEvent::Reset => {
                debug!("gesture: reset");
                self.discard(context);
                Transition(State::idle())
            }
            _ => Handled,
        }
    }
}
